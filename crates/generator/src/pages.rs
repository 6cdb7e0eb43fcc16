//! Static page rendering.
//!
//! The portal's index page is a fixed quick-links card rendered as plain
//! HTML. The same template serves preview and build so what you see locally
//! is exactly what ships.

use portal_kit_core::Portal;

/// The quick-links grid: 5 rows of 3 labels. Fixed editorial content,
/// no configuration.
const QUICK_LINKS: [(&str, &str); 15] = [
    ("Latest Jobs", "/latest-jobs"),
    ("Results", "/results"),
    ("Admit Card", "/admit-cards"),
    ("Answer Key", "/answer-keys"),
    ("Syllabus", "/syllabus"),
    ("Admission", "/admissions"),
    ("UPSC", "/upsc"),
    ("SSC", "/ssc"),
    ("Banking", "/banking"),
    ("Railway", "/railway"),
    ("Defence", "/defence"),
    ("Police", "/police"),
    ("Teaching", "/teaching"),
    ("Scholarships", "/scholarships"),
    ("Certificate Verification", "/verification"),
];

const GRID_COLUMNS: usize = 3;

/// HTML-escape a string to prevent XSS attacks
///
/// Escapes: & < > " '
fn html_escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#x27;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Render the quick-links card: a styled table of anchor-tagged labels.
pub fn quick_links_card() -> String {
    let rows: String = QUICK_LINKS
        .chunks(GRID_COLUMNS)
        .map(|row| {
            let cells: String = row
                .iter()
                .map(|(label, href)| {
                    format!(
                        r#"<td><a class="quick-link" href="{}">{}</a></td>"#,
                        html_escape(href),
                        html_escape(label)
                    )
                })
                .collect();
            format!("<tr>{}</tr>\n", cells)
        })
        .collect();

    format!(
        r#"<div class="card quick-links-card">
    <h2>Quick Links</h2>
    <table class="quick-links">
{}    </table>
</div>"#,
        rows
    )
}

/// Generate the complete HTML for the portal index page
///
/// This template is shared between preview and build commands to ensure
/// what you see in preview is exactly what gets deployed.
///
/// # Arguments
///
/// * `portal` - Portal configuration
/// * `is_preview` - Whether this is for preview mode (adds a badge)
pub fn render_index(portal: &Portal, is_preview: bool) -> String {
    // HTML-escape all config-provided strings to prevent XSS
    let escaped_title = html_escape(&portal.site.title);
    let escaped_tagline = portal
        .site
        .tagline
        .as_deref()
        .map(html_escape)
        .unwrap_or_default();
    let escaped_accent = html_escape(&portal.site.accent_color);

    let preview_badge = if is_preview {
        r#"<div class="preview-badge">PREVIEW MODE</div>"#
    } else {
        ""
    };

    let footer_text = if is_preview {
        "Generated by portal-kit • Press Ctrl+C to stop preview"
    } else {
        "Generated by portal-kit"
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        :root {{
            --accent: {accent};
            --base-100: #f7f7f5;
            --base-200: #ffffff;
            --base-content: #222222;
        }}

        * {{ margin: 0; padding: 0; box-sizing: border-box; }}

        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            color: var(--base-content);
            background-color: var(--base-100);
            padding: 2rem;
        }}

        .container {{
            max-width: 900px;
            margin: 0 auto;
        }}

        .preview-badge {{
            background: var(--accent);
            color: #ffffff;
            padding: 0.5rem 1rem;
            border-radius: 4px;
            display: inline-block;
            margin-bottom: 1.5rem;
            font-weight: bold;
        }}

        .site-header {{
            margin-bottom: 2rem;
            padding-bottom: 1.5rem;
            border-bottom: 2px solid var(--accent);
        }}

        h1 {{
            font-size: 2.2rem;
            color: var(--accent);
        }}

        .tagline {{
            opacity: 0.7;
        }}

        .card {{
            background: var(--base-200);
            padding: 1.5rem;
            border-radius: 8px;
            border: 1px solid rgba(0, 0, 0, 0.08);
            box-shadow: 0 2px 6px rgba(0, 0, 0, 0.06);
        }}

        .card h2 {{
            font-size: 1.2rem;
            margin-bottom: 1rem;
            color: var(--accent);
        }}

        table.quick-links {{
            width: 100%;
            border-collapse: collapse;
            table-layout: fixed;
        }}

        table.quick-links td {{
            border: 1px solid rgba(0, 0, 0, 0.08);
            text-align: center;
        }}

        a.quick-link {{
            display: block;
            padding: 0.9rem 0.5rem;
            color: var(--base-content);
            text-decoration: none;
            font-weight: 500;
        }}

        a.quick-link:hover {{
            background: var(--base-100);
            color: var(--accent);
        }}

        footer {{
            margin-top: 2rem;
            text-align: center;
            font-size: 0.85rem;
            opacity: 0.5;
        }}
    </style>
</head>
<body>
    <div class="container">
        {preview_badge}
        <header class="site-header">
            <h1>{title}</h1>
            <p class="tagline">{tagline}</p>
        </header>
        {card}
        <footer>{footer}</footer>
    </div>
</body>
</html>
"#,
        title = escaped_title,
        accent = escaped_accent,
        tagline = escaped_tagline,
        card = quick_links_card(),
        footer = footer_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_kit_core::SiteConfig;

    fn test_portal(title: &str, tagline: Option<&str>) -> Portal {
        Portal {
            site: SiteConfig {
                title: title.to_string(),
                tagline: tagline.map(String::from),
                domain: "test.example.com".to_string(),
                accent_color: "#ff6b35".to_string(),
            },
            routes: vec![],
        }
    }

    #[test]
    fn test_quick_links_card_grid_shape() {
        let card = quick_links_card();
        assert_eq!(card.matches("<tr>").count(), 5, "5 rows");
        assert_eq!(card.matches("<a class=\"quick-link\"").count(), 15, "15 links");
        // Every row holds exactly 3 cells
        for row in card.split("<tr>").skip(1) {
            let row = &row[..row.find("</tr>").unwrap()];
            assert_eq!(row.matches("<td>").count(), 3);
        }
    }

    #[test]
    fn test_quick_links_card_labels() {
        let card = quick_links_card();
        assert!(card.contains(r#"<a class="quick-link" href="/latest-jobs">Latest Jobs</a>"#));
        assert!(card.contains(r#"<a class="quick-link" href="/syllabus">Syllabus</a>"#));
    }

    #[test]
    fn test_render_index_contains_card_and_title() {
        let html = render_index(&test_portal("Job Result Portal", Some("Daily updates")), false);
        assert!(html.contains("<title>Job Result Portal</title>"));
        assert!(html.contains("Daily updates"));
        assert!(html.contains("quick-links-card"));
        assert!(!html.contains("PREVIEW MODE"));
    }

    #[test]
    fn test_render_index_preview_badge() {
        let html = render_index(&test_portal("Portal", None), true);
        assert!(html.contains("PREVIEW MODE"));
    }

    #[test]
    fn test_render_index_escapes_config_strings() {
        let html = render_index(&test_portal("Jobs <& Results>", None), false);
        assert!(html.contains("Jobs &lt;&amp; Results&gt;"));
        assert!(!html.contains("Jobs <& Results>"));
    }
}
