//! Sitemap document generation.
//!
//! Serializes an ordered sequence of [`UrlRecord`]s into a Sitemaps-protocol
//! XML document and writes it out for crawlers. Record order is preserved so
//! builds are reproducible.

use portal_kit_core::{ChangeFrequency, Portal, Result, UrlRecord};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Origin prepended verbatim to every record's site-relative path.
/// Compiled in; not configurable at call time.
pub const BASE_ORIGIN: &str = "https://www.jobresultportal.com";

/// Conventional output location when the caller does not supply one.
pub const DEFAULT_SITEMAP_PATH: &str = "public/sitemap.xml";

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Escape a string for safe inclusion in XML text content
///
/// Escapes: & < > " '
fn xml_escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&apos;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Format a priority in shortest decimal form, so 1.0 serializes as "1"
/// and 0.9 as "0.9", matching what crawlers conventionally see.
fn format_priority(priority: f32) -> String {
    format!("{}", priority)
}

/// Render the sitemap XML document for `urls`.
///
/// Pure function: one `<url>` element per record, in input order. `<loc>` is
/// always present; `<lastmod>`, `<changefreq>` and `<priority>` appear only
/// when the corresponding field is set. A priority of exactly 0.0 is a valid
/// value and is emitted. Records are not validated; an empty path yields a
/// `<loc>` of just the base origin.
pub fn sitemap_xml(urls: &[UrlRecord]) -> String {
    let mut doc = String::with_capacity(128 + urls.len() * 160);
    doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(doc, "<urlset xmlns=\"{}\">", SITEMAP_NS);

    for record in urls {
        doc.push_str("  <url>\n");
        let _ = writeln!(
            doc,
            "    <loc>{}{}</loc>",
            BASE_ORIGIN,
            xml_escape(&record.path)
        );
        if let Some(date) = record.last_modified {
            let _ = writeln!(doc, "    <lastmod>{}</lastmod>", date.format("%Y-%m-%d"));
        }
        if let Some(freq) = record.change_frequency {
            let _ = writeln!(doc, "    <changefreq>{}</changefreq>", freq);
        }
        if let Some(priority) = record.priority {
            let _ = writeln!(doc, "    <priority>{}</priority>", format_priority(priority));
        }
        doc.push_str("  </url>\n");
    }

    doc.push_str("</urlset>\n");
    doc
}

/// Write the sitemap for `urls` to `output_path`, replacing any existing
/// content.
///
/// A single synchronous write. Filesystem failures (missing parent directory,
/// permissions) surface to the caller and are fatal to the invoking build
/// step; there is no retry.
pub fn write_sitemap<P: AsRef<Path>>(urls: &[UrlRecord], output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    fs::write(output_path, sitemap_xml(urls))?;
    println!(
        "✓ Wrote sitemap ({} URLs) to {}",
        urls.len(),
        output_path.display()
    );
    Ok(())
}

/// Write the sitemap to the conventional [`DEFAULT_SITEMAP_PATH`].
pub fn write_default_sitemap(urls: &[UrlRecord]) -> Result<()> {
    write_sitemap(urls, DEFAULT_SITEMAP_PATH)
}

/// The portal's primary routes with editorially assigned crawl metadata.
///
/// Returned as owned data each call; the builder keeps no ambient route
/// state. Listing pages churn daily and rank highest, reference pages like
/// the syllabus index change rarely and rank lowest.
pub fn default_routes() -> Vec<UrlRecord> {
    let route = |path: &str, freq: ChangeFrequency, priority: f32| UrlRecord {
        path: path.to_string(),
        last_modified: None,
        change_frequency: Some(freq),
        priority: Some(priority),
    };

    vec![
        route("/", ChangeFrequency::Daily, 1.0),
        route("/latest-jobs", ChangeFrequency::Daily, 0.9),
        route("/results", ChangeFrequency::Daily, 0.9),
        route("/admit-cards", ChangeFrequency::Daily, 0.8),
        route("/answer-keys", ChangeFrequency::Weekly, 0.7),
        route("/admissions", ChangeFrequency::Weekly, 0.6),
        route("/syllabus", ChangeFrequency::Monthly, 0.5),
    ]
}

/// The route set a build should use: the config's table when present,
/// otherwise the built-in defaults.
pub fn effective_routes(portal: &Portal) -> Vec<UrlRecord> {
    if portal.routes.is_empty() {
        default_routes()
    } else {
        portal.routes.clone()
    }
}
