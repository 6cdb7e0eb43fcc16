use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Escape a string for safe inclusion in TOML per TOML v1.0.0 spec
///
/// Handles the required escape sequences for TOML basic strings. A manual
/// implementation is used instead of toml crate serialization because the
/// template carries comments and specific formatting, which serialization
/// would not preserve.
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Initialize a new portal project directory.
///
/// Creates the directory layout (`assets/`) and a `portal.toml` template with
/// the default route table spelled out so it can be edited. Refuses to touch
/// a directory that already has a `portal.toml`.
///
/// # Arguments
///
/// * `path` - Path to the directory to initialize (must exist)
/// * `title` - Optional site title; a placeholder with a TODO comment is used otherwise
/// * `domain` - Optional site domain
pub async fn run(path: PathBuf, title: Option<String>, domain: Option<String>) -> Result<()> {
    println!("Initializing portal directory: {}", path.display());

    if !path.exists() {
        anyhow::bail!(
            "Directory '{}' does not exist. Create it first: mkdir {}",
            path.display(),
            path.display()
        );
    }

    let portal_toml_path = path.join("portal.toml");
    if portal_toml_path.exists() {
        anyhow::bail!(
            "portal.toml already exists at {}\nHint: Delete it first or use a different directory",
            portal_toml_path.display()
        );
    }

    fs::create_dir_all(path.join("assets")).context("Failed to create assets directory")?;
    generate_portal_toml(&path, title.as_deref(), domain.as_deref())?;

    println!("\n✓ Initialization complete!");
    println!("\nGenerated structure:");
    println!("  {}/", path.display());
    println!("  ├── portal.toml          ← Edit this to set title, routes, etc.");
    println!("  └── assets/              ← Static files copied verbatim on build");

    println!("\nNext steps:");
    println!("  1. Edit portal.toml (set title, domain, route metadata)");
    println!("  2. Preview: portal-kit preview {}", path.display());
    println!(
        "  3. Build: portal-kit build {} --output dist",
        path.display()
    );

    Ok(())
}

fn generate_portal_toml(base: &Path, title: Option<&str>, domain: Option<&str>) -> Result<()> {
    let today = Local::now().format("%Y-%m-%d").to_string();

    let site_title = toml_escape_string(title.unwrap_or("Job Result Portal"));
    let site_domain = toml_escape_string(domain.unwrap_or("www.example.com"));

    let title_comment = if title.is_some() {
        ""
    } else {
        "  # TODO: Set site title"
    };
    let domain_comment = if domain.is_some() {
        ""
    } else {
        "  # TODO: Set domain"
    };

    let mut toml = format!(
        "# Generated by portal-kit init\n\
# Edit this file to customize your portal\n\
\n\
[site]\n\
title = \"{site_title}\"{title_comment}\n\
tagline = \"Latest jobs, results, admit cards and answer keys\"\n\
domain = \"{site_domain}\"{domain_comment}\n\
accent_color = \"#ff6b35\"\n\
\n\
# Routes listed here feed the sitemap. Remove the whole table to fall back\n\
# to the built-in default route set.\n"
    );

    let default_routes = portal_kit_generator::default_routes();
    for route in &default_routes {
        toml.push_str("\n[[route]]\n");
        toml.push_str(&format!(
            "path = \"{}\"\n",
            toml_escape_string(&route.path)
        ));
        toml.push_str(&format!("last_modified = \"{}\"\n", today));
        if let Some(freq) = route.change_frequency {
            toml.push_str(&format!("change_frequency = \"{}\"\n", freq));
        }
        if let Some(priority) = route.priority {
            toml.push_str(&format!("priority = {:.1}\n", priority));
        }
    }

    // Validate the generated TOML can be parsed
    portal_kit_core::config::parse_portal_toml_str(&toml)
        .context("Generated TOML is invalid - this is a bug in the template generator")?;

    fs::write(base.join("portal.toml"), toml)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_portal_toml_parses() {
        let dir = TempDir::new().unwrap();
        generate_portal_toml(dir.path(), None, None).unwrap();

        let content = fs::read_to_string(dir.path().join("portal.toml")).unwrap();
        let portal = portal_kit_core::config::parse_portal_toml_str(&content).unwrap();

        assert_eq!(portal.site.title, "Job Result Portal");
        assert_eq!(portal.routes.len(), 7);
        assert_eq!(portal.routes[0].path, "/");
        assert_eq!(portal.routes[0].priority, Some(1.0));
    }

    #[test]
    fn test_generate_portal_toml_with_args() {
        let dir = TempDir::new().unwrap();
        generate_portal_toml(dir.path(), Some("My Portal"), Some("jobs.example.org")).unwrap();

        let content = fs::read_to_string(dir.path().join("portal.toml")).unwrap();
        assert!(content.contains(r#"title = "My Portal""#));
        assert!(content.contains(r#"domain = "jobs.example.org""#));
        assert!(!content.contains("TODO: Set site title"));
        assert!(!content.contains("TODO: Set domain"));
    }

    #[test]
    fn test_generate_portal_toml_escapes_special_characters() {
        let dir = TempDir::new().unwrap();
        generate_portal_toml(dir.path(), Some(r#"Portal "Quoted""#), None).unwrap();

        let content = fs::read_to_string(dir.path().join("portal.toml")).unwrap();
        assert!(content.contains(r#"Portal \"Quoted\""#));

        // And it still parses back to the original string
        let portal = portal_kit_core::config::parse_portal_toml_str(&content).unwrap();
        assert_eq!(portal.site.title, r#"Portal "Quoted""#);
    }

    #[test]
    fn test_toml_escape_string() {
        assert_eq!(toml_escape_string(r#"Test "Quote""#), r#"Test \"Quote\""#);
        assert_eq!(toml_escape_string(r"Test\Back"), r"Test\\Back");
        assert_eq!(toml_escape_string("Test\nNewline"), r"Test\nNewline");
        assert_eq!(toml_escape_string("Normal String"), "Normal String");
    }

    #[tokio::test]
    async fn test_run_refuses_existing_portal_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("portal.toml"), "[site]").unwrap();

        let result = run(dir.path().to_path_buf(), None, None).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn test_run_creates_structure() {
        let dir = TempDir::new().unwrap();
        run(dir.path().to_path_buf(), None, None).await.unwrap();

        assert!(dir.path().join("portal.toml").exists());
        assert!(dir.path().join("assets").is_dir());
    }

    #[tokio::test]
    async fn test_run_requires_existing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let result = run(missing, None, None).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }
}
