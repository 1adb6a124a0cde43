//! Site configuration
//!
//! Leptos itself is configured from `[package.metadata.leptos]` and the
//! `LEPTOS_*` environment variables. Everything else lives here.

pub const DEFAULT_LOG_FILTER: &str = "dg_site=info,dg_core=info,tower_http=info";

#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory served under `/assets`
    pub assets_dir: String,
    /// `tracing` filter directives
    pub log_filter: String,
}

impl SiteConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            assets_dir: lookup("DRYGRIP_ASSETS_DIR").unwrap_or_else(|| "assets".to_string()),
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_environment() {
        let config = SiteConfig::from_lookup(|_| None);
        assert_eq!(config.assets_dir, "assets");
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_environment_overrides() {
        let config = SiteConfig::from_lookup(|key| match key {
            "DRYGRIP_ASSETS_DIR" => Some("/srv/drygrip/assets".to_string()),
            "RUST_LOG" => Some("debug".to_string()),
            _ => None,
        });
        assert_eq!(config.assets_dir, "/srv/drygrip/assets");
        assert_eq!(config.log_filter, "debug");
    }
}
