//! Portal configuration linting.
//!
//! The sitemap builder deliberately does not validate its input records: a
//! malformed record silently produces a malformed document. This crate is
//! where those problems get caught, before a build runs.

use portal_kit_core::{Portal, UrlRecord};
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a full portal configuration: site metadata plus route table.
pub fn validate_portal(portal: &Portal) -> ValidationReport {
    let mut report = validate_routes(&portal.routes);

    if portal.site.title.trim().is_empty() {
        report.errors.push("site.title is empty".to_string());
    }
    if portal.site.domain.trim().is_empty() {
        report.errors.push("site.domain is empty".to_string());
    }
    if !is_hex_color(&portal.site.accent_color) {
        report.warnings.push(format!(
            "site.accent_color '{}' is not a #rrggbb color",
            portal.site.accent_color
        ));
    }

    report
}

/// Lint a route set for problems the builder would silently pass through.
pub fn validate_routes(routes: &[UrlRecord]) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen = HashSet::new();

    for (idx, route) in routes.iter().enumerate() {
        let label = route_label(idx, route);

        if route.path.trim().is_empty() {
            report
                .errors
                .push(format!("{}: empty path", label));
            continue;
        }
        if !route.path.starts_with('/') {
            report.errors.push(format!(
                "{}: path must be site-relative and start with '/'",
                label
            ));
        }
        if route.path.chars().any(char::is_whitespace) {
            report.warnings.push(format!(
                "{}: path contains whitespace; supply an already-encoded path",
                label
            ));
        }
        if !seen.insert(route.path.clone()) {
            report
                .warnings
                .push(format!("{}: duplicate path", label));
        }
        if let Some(priority) = route.priority
            && !(0.0..=1.0).contains(&priority)
        {
            report.warnings.push(format!(
                "{}: priority {} outside the conventional [0.0, 1.0] range",
                label, priority
            ));
        }
    }

    if routes.is_empty() {
        report
            .info
            .push("no routes configured; the default route set will be used".to_string());
    } else {
        report.info.push(format!("{} route(s) configured", routes.len()));
    }

    report
}

fn route_label(idx: usize, route: &UrlRecord) -> String {
    if route.path.trim().is_empty() {
        format!("route #{}", idx + 1)
    } else {
        format!("route '{}'", route.path)
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_kit_core::SiteConfig;

    fn portal_with_routes(routes: Vec<UrlRecord>) -> Portal {
        Portal {
            site: SiteConfig {
                title: "Test Portal".to_string(),
                tagline: None,
                domain: "test.example.com".to_string(),
                accent_color: "#ff6b35".to_string(),
            },
            routes,
        }
    }

    #[test]
    fn test_clean_routes_pass() {
        let report = validate_routes(&[UrlRecord::new("/"), UrlRecord::new("/results")]);
        assert!(report.is_ok());
        assert!(report.warnings.is_empty());
        assert_eq!(report.info, vec!["2 route(s) configured"]);
    }

    #[test]
    fn test_empty_path_is_error() {
        let report = validate_routes(&[UrlRecord::new("")]);
        assert!(!report.is_ok());
        assert!(report.errors[0].contains("empty path"));
    }

    #[test]
    fn test_relative_path_is_error() {
        let report = validate_routes(&[UrlRecord::new("results")]);
        assert!(!report.is_ok());
        assert!(report.errors[0].contains("start with '/'"));
    }

    #[test]
    fn test_duplicate_path_is_warning() {
        let report = validate_routes(&[UrlRecord::new("/a"), UrlRecord::new("/a")]);
        assert!(report.is_ok());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("duplicate"));
    }

    #[test]
    fn test_whitespace_path_is_warning() {
        let report = validate_routes(&[UrlRecord::new("/latest jobs")]);
        assert!(report.is_ok());
        assert!(report.warnings[0].contains("whitespace"));
    }

    #[test]
    fn test_priority_out_of_range_is_warning() {
        let record = UrlRecord {
            priority: Some(1.5),
            ..UrlRecord::new("/a")
        };
        let report = validate_routes(&[record]);
        assert!(report.is_ok());
        assert!(report.warnings[0].contains("outside the conventional"));
    }

    #[test]
    fn test_zero_priority_is_valid() {
        let record = UrlRecord {
            priority: Some(0.0),
            ..UrlRecord::new("/archive")
        };
        let report = validate_routes(&[record]);
        assert!(report.is_ok());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_empty_route_set_is_info_only() {
        let report = validate_routes(&[]);
        assert!(report.is_ok());
        assert!(report.info[0].contains("default route set"));
    }

    #[test]
    fn test_portal_site_checks() {
        let mut portal = portal_with_routes(vec![]);
        portal.site.title = "  ".to_string();
        portal.site.accent_color = "orange".to_string();

        let report = validate_portal(&portal);
        assert!(!report.is_ok());
        assert!(report.errors.iter().any(|e| e.contains("site.title")));
        assert!(report.warnings.iter().any(|w| w.contains("accent_color")));
    }
}
