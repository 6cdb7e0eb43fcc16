use anyhow::{Context, Result};
use portal_kit_core::parse_portal_toml;
use portal_kit_validator::validate_portal;
use std::path::PathBuf;

pub async fn run(path: PathBuf) -> Result<()> {
    println!("Validating portal at: {}", path.display());

    let config_path = path.join("portal.toml");
    let portal = parse_portal_toml(&config_path).context("Failed to parse portal.toml")?;

    println!("✓ portal.toml valid");
    println!("  Site: {} ({})", portal.site.title, portal.site.domain);

    let report = validate_portal(&portal);

    for line in &report.info {
        println!("  ℹ {}", line);
    }
    for line in &report.warnings {
        println!("  ⚠ {}", line);
    }
    for line in &report.errors {
        eprintln!("  ✗ {}", line);
    }

    if !report.is_ok() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    println!("\n✓ Validation passed");
    Ok(())
}
