use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::interaction::pagination::DEFAULT_ITEMS_PER_PAGE;

/// Renderer configuration loaded from environment variables.
/// Every variable has a default; only malformed values are rejected.
#[derive(Debug, Clone)]
pub struct Config {
    pub portfolio_config: PathBuf,
    pub page_shell: PathBuf,
    /// `None` writes the rendered page to stdout.
    pub output_path: Option<PathBuf>,
    pub publications_per_page: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests do not touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let publications_per_page = match lookup("PUBLICATIONS_PER_PAGE") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .context("PUBLICATIONS_PER_PAGE must be a positive integer")?,
            None => DEFAULT_ITEMS_PER_PAGE,
        };
        if publications_per_page == 0 {
            bail!("PUBLICATIONS_PER_PAGE must be at least 1");
        }

        Ok(Config {
            portfolio_config: lookup("PORTFOLIO_CONFIG")
                .unwrap_or_else(|| "content/portfolio.json".to_string())
                .into(),
            page_shell: lookup("PAGE_SHELL")
                .unwrap_or_else(|| "content/index.html".to_string())
                .into(),
            output_path: lookup("OUTPUT_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            publications_per_page,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.portfolio_config, PathBuf::from("content/portfolio.json"));
        assert_eq!(config.page_shell, PathBuf::from("content/index.html"));
        assert!(config.output_path.is_none());
        assert_eq!(config.publications_per_page, 6);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides_are_read() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORTFOLIO_CONFIG", "/srv/site/portfolio.json"),
            ("OUTPUT_PATH", "/srv/site/out.html"),
            ("PUBLICATIONS_PER_PAGE", "4"),
        ]))
        .unwrap();
        assert_eq!(
            config.portfolio_config,
            PathBuf::from("/srv/site/portfolio.json")
        );
        assert_eq!(config.output_path, Some(PathBuf::from("/srv/site/out.html")));
        assert_eq!(config.publications_per_page, 4);
    }

    #[test]
    fn test_blank_output_path_means_stdout() {
        let config = Config::from_lookup(lookup_from(&[("OUTPUT_PATH", "  ")])).unwrap();
        assert!(config.output_path.is_none());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("PUBLICATIONS_PER_PAGE", "0")])).is_err());
    }

    #[test]
    fn test_non_numeric_page_size_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PUBLICATIONS_PER_PAGE", "six")]))
            .unwrap_err();
        assert!(err.to_string().contains("PUBLICATIONS_PER_PAGE"));
    }
}
