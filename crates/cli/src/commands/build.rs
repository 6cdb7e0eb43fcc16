use anyhow::{Context, Result};
use portal_kit_core::config::parse_portal_toml;
use portal_kit_generator::pages::render_index;
use portal_kit_generator::sitemap::{effective_routes, write_sitemap};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Build static site for deployment
pub async fn run(path: PathBuf, output: PathBuf) -> Result<()> {
    println!("🔨 Building static site...");
    println!("   Source: {}", path.display());
    println!("   Output: {}", output.display());
    println!();

    // Validate portal directory exists
    if !path.exists() {
        anyhow::bail!("Portal directory does not exist: {}", path.display());
    }

    // Load and validate portal.toml
    let portal_toml_path = path.join("portal.toml");
    if !portal_toml_path.exists() {
        anyhow::bail!(
            "portal.toml not found in {}\nRun 'portal-kit init {}' first",
            path.display(),
            path.display()
        );
    }

    let portal = parse_portal_toml(&portal_toml_path).context("Failed to parse portal.toml")?;

    println!("✓ Loaded: {}", portal.site.title);
    println!("  Domain: {}", portal.site.domain);
    let routes = effective_routes(&portal);
    println!("  Routes: {}", routes.len());
    println!();

    // Create output directory structure
    println!("📁 Creating output directory...");
    fs::create_dir_all(&output).context("Failed to create output directory")?;
    println!("   ✓ Created {}", output.display());

    // Copy static assets
    println!("🗂  Copying assets...");
    let copied = copy_assets(&path.join("assets"), &output.join("assets"))?;
    println!("   ✓ Copied {} asset file(s)", copied);

    // Generate index.html
    println!("📄 Generating index.html...");
    let html = render_index(&portal, false);
    fs::write(output.join("index.html"), html).context("Failed to write index.html")?;
    println!("   ✓ Generated index.html");

    // Generate sitemap.xml
    println!("🗺  Generating sitemap.xml...");
    write_sitemap(&routes, output.join("sitemap.xml")).context("Failed to write sitemap.xml")?;

    println!();
    println!("✅ Build complete!");
    println!("   Output: {}", output.display());
    println!();
    println!("To test locally:");
    println!("   portal-kit preview {}", path.display());
    println!();

    Ok(())
}

/// Copy the assets tree verbatim, preserving relative layout.
/// A missing source directory is not an error; the site may have no assets.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize> {
    if !src.exists() {
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(src)
            .context("Asset path outside assets directory")?;
        let dest = dst.join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dest)
            .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        copied += 1;
    }

    Ok(copied)
}
