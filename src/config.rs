// src/config.rs

use anyhow::{Context, Result};
use std::{env, path::PathBuf};
use url::Url;

use crate::emit::TableSpec;

/// `(url, section name, macro prefix, function infix)` for each remote table.
static DEFAULT_SOURCES: &[(&str, &str, &str, &str)] = &[
    (
        "http://www.celestrak.org/satcat/sources.php",
        "Source",
        "SCSRC",
        "source",
    ),
    (
        "http://www.celestrak.org/satcat/launchsites.php",
        "Launch Site",
        "SCSITE",
        "launch_site",
    ),
];

const DEFAULT_OUT_DIR: &str = "src";

/// A remote page and how its table is named in the generated code.
#[derive(Debug, Clone)]
pub struct SourceSpec {
    pub url: Url,
    pub table: TableSpec,
}

impl SourceSpec {
    pub fn parse(url: &str, name: &str, prefix: &str, fname: &str) -> Result<Self> {
        Ok(Self {
            url: Url::parse(url).with_context(|| format!("parsing source URL {}", url))?,
            table: TableSpec::new(name, prefix, fname),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub out_dir: PathBuf,
    pub user_agent: String,
    pub sources: Vec<SourceSpec>,
}

impl Config {
    /// Read `SATCAT_OUT_DIR` and `SATCAT_USER_AGENT`, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let out_dir = lookup("SATCAT_OUT_DIR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OUT_DIR.to_string());
        let user_agent = lookup("SATCAT_USER_AGENT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| format!("satcat-codegen/{}", env!("CARGO_PKG_VERSION")));
        let sources = DEFAULT_SOURCES
            .iter()
            .map(|&(url, name, prefix, fname)| SourceSpec::parse(url, name, prefix, fname))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            out_dir: PathBuf::from(out_dir),
            user_agent,
            sources,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let cfg = Config::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.out_dir, PathBuf::from("src"));
        assert!(cfg.user_agent.starts_with("satcat-codegen/"));
        assert_eq!(cfg.sources.len(), 2);
        assert_eq!(cfg.sources[0].table.prefix, "SCSRC");
        assert_eq!(cfg.sources[0].table.function_name(), "sc_source_str");
        assert_eq!(cfg.sources[1].table.prefix, "SCSITE");
        assert_eq!(cfg.sources[1].url.path(), "/satcat/launchsites.php");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [("SATCAT_OUT_DIR", "gen"), ("SATCAT_USER_AGENT", "ua/1")]
            .into_iter()
            .collect();
        let cfg = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(cfg.out_dir, PathBuf::from("gen"));
        assert_eq!(cfg.user_agent, "ua/1");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let cfg = Config::from_lookup(|_| Some("  ".to_string())).unwrap();
        assert_eq!(cfg.out_dir, PathBuf::from("src"));
    }

    #[test]
    fn test_bad_url_is_reported() {
        let err = SourceSpec::parse("not a url", "X", "SCX", "x").unwrap_err();
        assert!(format!("{:#}", err).contains("parsing source URL not a url"));
    }
}
