//! Site config loading.

use std::path::Path;

use anyhow::{Context, Result};
use jewel_site::SiteConfig;

/// File names searched for when no `--config` is given.
pub const CONFIG_NAMES: &[&str] = &["site.toml", "workloads/storefront/site.toml"];

/// Load a site config from a TOML file.
pub fn load(path: &Path) -> Result<SiteConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    SiteConfig::from_toml(&content)
        .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_names_the_path() {
        let err = load(Path::new("/nonexistent/site.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/site.toml"));
    }

    #[test]
    fn test_load_reads_file() {
        let dir = std::env::temp_dir().join(format!("jewel-cli-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("site.toml");
        std::fs::write(&path, "[brand]\nname = \"Test Jewels\"\n").unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.brand.name, "Test Jewels");
        assert_eq!(config.messaging.base_url, "https://wa.me");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
