//! Loading of the item catalog.
//!
//! - The catalog is a JSON array of items, read once at startup.
//! - By default the copy bundled into the binary is used; `ARC_TIERS_CATALOG`
//!   points at a file or an `http(s)` URL instead.

use std::{fmt, path::PathBuf};

use reqwest::{Client, Url};
use thiserror::Error;
use tracing::{debug, info};

use crate::{domain::Item, util::assets, util::version::user_agent};

pub const CATALOG_ENV: &str = "ARC_TIERS_CATALOG";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to load data")]
    Status(reqwest::StatusCode),
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    Embedded,
    File(PathBuf),
    Url(Url),
}

impl CatalogSource {
    /// Reads the source from `ARC_TIERS_CATALOG`, defaulting to the bundled
    /// catalog when unset or blank.
    pub fn from_env() -> Result<Self, CatalogError> {
        match std::env::var(CATALOG_ENV) {
            Ok(value) => Self::parse(&value),
            Err(_) => Ok(CatalogSource::Embedded),
        }
    }

    pub fn parse(value: &str) -> Result<Self, CatalogError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(CatalogSource::Embedded);
        }
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(CatalogSource::Url(Url::parse(trimmed)?));
        }
        Ok(CatalogSource::File(PathBuf::from(trimmed)))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Embedded => write!(f, "bundled data.json"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Fetches and decodes the catalog. No retries; the first failure is final.
pub async fn load_catalog(source: &CatalogSource) -> Result<Vec<Item>, CatalogError> {
    info!(%source, "loading item catalog");
    let items = match source {
        CatalogSource::Embedded => parse_catalog(assets::catalog_json())?,
        CatalogSource::File(path) => {
            let bytes = tokio::fs::read(path).await?;
            parse_catalog(&bytes)?
        }
        CatalogSource::Url(url) => fetch_catalog(url.clone()).await?,
    };
    info!(count = items.len(), "item catalog loaded");
    Ok(items)
}

async fn fetch_catalog(url: Url) -> Result<Vec<Item>, CatalogError> {
    let http = Client::builder().user_agent(user_agent()).build()?;
    let response = http.get(url).send().await?;
    let status = response.status();
    debug!(%status, "catalog response received");
    if !status.is_success() {
        return Err(CatalogError::Status(status));
    }
    let bytes = response.bytes().await?;
    parse_catalog(&bytes)
}

pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<Item>, CatalogError> {
    Ok(serde_json::from_slice(bytes)?)
}
