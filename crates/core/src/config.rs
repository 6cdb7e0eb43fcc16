use crate::error::{Error, Result};
use crate::types::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Raw TOML configuration structure
/// This matches the portal.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    site: SiteConfig,
    #[serde(default)]
    route: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    path: String,
    last_modified: Option<String>,      // Parse as NaiveDate
    change_frequency: Option<String>,   // Parse as ChangeFrequency
    priority: Option<f32>,
}

/// Parse portal.toml from a file path
pub fn parse_portal_toml<P: AsRef<Path>>(path: P) -> Result<Portal> {
    let content = fs::read_to_string(path)?;
    parse_portal_toml_str(&content)
}

/// Parse portal.toml from a string (useful for testing)
///
/// Route entries are converted field by field so a bad date or frequency
/// token reports which route it came from. Paths are accepted as-is here;
/// the validator crate lints them.
pub fn parse_portal_toml_str(content: &str) -> Result<Portal> {
    let raw: RawConfig = toml::from_str(content)?;

    let routes: Result<Vec<UrlRecord>> = raw
        .route
        .into_iter()
        .map(|r| {
            let last_modified = match r.last_modified {
                Some(date_str) => {
                    Some(chrono::NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(
                        |e| {
                            Error::ConfigParse(format!(
                                "Invalid last_modified for route '{}': {}",
                                r.path, e
                            ))
                        },
                    )?)
                }
                None => None,
            };

            let change_frequency = match r.change_frequency {
                Some(freq_str) => Some(freq_str.parse().map_err(|e| {
                    Error::ConfigParse(format!("Route '{}': {}", r.path, e))
                })?),
                None => None,
            };

            Ok(UrlRecord {
                path: r.path,
                last_modified,
                change_frequency,
                priority: r.priority,
            })
        })
        .collect();

    Ok(Portal {
        site: raw.site,
        routes: routes?,
    })
}
