use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Complete portal configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portal {
    pub site: SiteConfig,
    pub routes: Vec<UrlRecord>,
}

/// Site-wide metadata shown in page chrome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    pub domain: String,
    pub accent_color: String,
}

/// One sitemap entry: a site-relative path plus optional crawl metadata.
///
/// The path is concatenated verbatim to the compiled-in base origin, so
/// callers supply well-formed, already-encoded paths. Each metadata field is
/// an explicit `Option` so that a legitimately-zero priority is still
/// emittable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRecord {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_frequency: Option<ChangeFrequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<f32>,
}

impl UrlRecord {
    /// A record with only a path and no crawl metadata.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            last_modified: None,
            change_frequency: None,
            priority: None,
        }
    }
}

/// Hint describing how often a page's content is expected to change,
/// per the Sitemaps protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFrequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "always" => Ok(ChangeFrequency::Always),
            "hourly" => Ok(ChangeFrequency::Hourly),
            "daily" => Ok(ChangeFrequency::Daily),
            "weekly" => Ok(ChangeFrequency::Weekly),
            "monthly" => Ok(ChangeFrequency::Monthly),
            "yearly" => Ok(ChangeFrequency::Yearly),
            "never" => Ok(ChangeFrequency::Never),
            other => Err(Error::ConfigParse(format!(
                "Unknown change_frequency '{}', expected one of: always, hourly, daily, weekly, monthly, yearly, never",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_frequency_round_trip() {
        for token in ["always", "hourly", "daily", "weekly", "monthly", "yearly", "never"] {
            let freq: ChangeFrequency = token.parse().unwrap();
            assert_eq!(freq.to_string(), token);
        }
    }

    #[test]
    fn test_change_frequency_rejects_unknown() {
        let result = "sometimes".parse::<ChangeFrequency>();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("sometimes"));
    }

    #[test]
    fn test_url_record_new_has_no_metadata() {
        let record = UrlRecord::new("/results");
        assert_eq!(record.path, "/results");
        assert!(record.last_modified.is_none());
        assert!(record.change_frequency.is_none());
        assert!(record.priority.is_none());
    }
}
