//! Runtime configuration: CLI flags over `PLANTCART_*` environment variables
//! over built-in defaults. Empty environment values count as unset.

use crate::catalog::DEFAULT_API_URL;
use crate::loader::CatalogSource;
use crate::render::{DEFAULT_CURRENCY, DEFAULT_DESCRIPTION_LIMIT, RenderOptions};
use anyhow::{Result, bail};
use std::env;
use std::env::VarError;
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_API_URL: &str = "PLANTCART_API_URL";
pub const ENV_CURRENCY: &str = "PLANTCART_CURRENCY";
pub const ENV_TIMEOUT_SECS: &str = "PLANTCART_TIMEOUT_SECS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub source: CatalogSource,
    pub render: RenderOptions,
    pub timeout: Option<Duration>,
}

/// Values supplied on the command line; `None` defers to env and defaults.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub catalog_file: Option<PathBuf>,
    pub currency: Option<String>,
    pub description_limit: Option<usize>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn resolve(overrides: Overrides) -> Result<Self> {
        Self::resolve_with(overrides, env_non_empty)
    }

    /// Resolution with an injectable environment lookup.
    pub fn resolve_with(
        overrides: Overrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        if overrides.api_url.is_some() && overrides.catalog_file.is_some() {
            bail!("--api-url and --catalog-file are mutually exclusive");
        }

        let source = match overrides.catalog_file {
            Some(path) => CatalogSource::File(path),
            None => {
                let url = overrides
                    .api_url
                    .or_else(|| lookup(ENV_API_URL))
                    .unwrap_or_else(|| DEFAULT_API_URL.to_string());
                validate_url(&url)?;
                CatalogSource::Remote(url)
            }
        };

        let currency = overrides
            .currency
            .or_else(|| lookup(ENV_CURRENCY))
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        let timeout_secs = match overrides.timeout_secs {
            Some(secs) => Some(secs),
            None => match lookup(ENV_TIMEOUT_SECS) {
                Some(raw) => match raw.trim().parse::<u64>() {
                    Ok(secs) => Some(secs),
                    Err(_) => bail!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"),
                },
                None => None,
            },
        };
        if timeout_secs == Some(0) {
            bail!("timeout must be at least one second");
        }

        Ok(Self {
            source,
            render: RenderOptions {
                currency,
                description_limit: overrides
                    .description_limit
                    .unwrap_or(DEFAULT_DESCRIPTION_LIMIT),
            },
            timeout: timeout_secs.map(Duration::from_secs),
        })
    }
}

fn validate_url(url: &str) -> Result<()> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        bail!("catalog URL must use http or https, got '{url}'");
    }
    Ok(())
}

pub fn env_non_empty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        Ok(_) => None,
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(os)) => Some(os.to_string_lossy().into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(
        pairs: &'static [(&'static str, &'static str)],
    ) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_point_at_public_endpoint() {
        let config = Config::resolve_with(Overrides::default(), lookup_from(&[])).unwrap();
        assert_eq!(config.source, CatalogSource::Remote(DEFAULT_API_URL.to_string()));
        assert_eq!(config.render, RenderOptions::default());
        assert!(config.timeout.is_none());
    }

    #[test]
    fn flags_win_over_environment() {
        let env = lookup_from(&[
            (ENV_API_URL, "http://env.test/plants"),
            (ENV_CURRENCY, "BDT"),
            (ENV_TIMEOUT_SECS, "9"),
        ]);
        let config = Config::resolve_with(
            Overrides {
                api_url: Some("https://flag.test/plants".to_string()),
                timeout_secs: Some(3),
                ..Overrides::default()
            },
            env,
        )
        .unwrap();
        assert_eq!(
            config.source,
            CatalogSource::Remote("https://flag.test/plants".to_string())
        );
        assert_eq!(config.render.currency, "BDT");
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn rejects_conflicting_sources_and_bad_values() {
        let both = Overrides {
            api_url: Some("https://a.test".to_string()),
            catalog_file: Some(PathBuf::from("plants.json")),
            ..Overrides::default()
        };
        assert!(Config::resolve_with(both, lookup_from(&[])).is_err());
        assert!(
            Config::resolve_with(
                Overrides::default(),
                lookup_from(&[(ENV_API_URL, "ftp://x")])
            )
            .is_err()
        );
        assert!(
            Config::resolve_with(
                Overrides::default(),
                lookup_from(&[(ENV_TIMEOUT_SECS, "soon")])
            )
            .is_err()
        );
    }
}
