//! Catalog loader: one fetch per session, from the API or a local payload.

use crate::catalog::{Plant, load_catalog_from_path, parse_catalog_payload};
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

/// Where the plant list comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    Remote(String),
    File(PathBuf),
}

impl CatalogSource {
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Remote(url) => url.clone(),
            CatalogSource::File(path) => path.display().to_string(),
        }
    }
}

pub struct CatalogLoader {
    source: CatalogSource,
    client: reqwest::Client,
}

impl CatalogLoader {
    /// Build a loader. `timeout` of `None` waits on the request indefinitely.
    pub fn new(source: CatalogSource, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("building HTTP client")?;
        Ok(Self::with_client(source, client))
    }

    /// Build a loader around a preconfigured client (proxy, TLS, timeouts).
    pub fn with_client(source: CatalogSource, client: reqwest::Client) -> Self {
        Self { source, client }
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Retrieve and validate the plant list. An error status is logged and the
    /// body is still parsed; records that fail validation are skipped.
    pub async fn fetch(&self) -> Result<Vec<Plant>> {
        match &self.source {
            CatalogSource::Remote(url) => self.fetch_remote(url).await,
            CatalogSource::File(path) => load_catalog_from_path(path),
        }
    }

    async fn fetch_remote(&self, url: &str) -> Result<Vec<Plant>> {
        tracing::debug!(url, "requesting plant catalog");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("requesting {url}"))?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, %status, "catalog endpoint answered with an error status");
        }
        let body: Value = response
            .json()
            .await
            .with_context(|| format!("decoding JSON body from {url} (HTTP {status})"))?;
        parse_catalog_payload(body).with_context(|| format!("parsing catalog from {url}"))
    }
}
