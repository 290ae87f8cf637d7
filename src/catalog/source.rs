//! Where the catalog JSON comes from
//!
//! A source is either a local file or, with the `remote` feature,
//! an `http(s)` URL. Every fetch goes back to the source; nothing is cached.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{PatternbookError, Result};

/// Location of the catalog data file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(String),
}

impl CatalogSource {
    /// Human readable origin used in errors and logs
    pub fn origin(&self) -> String {
        self.to_string()
    }

    /// Fetch the raw catalog document
    pub async fn fetch(&self) -> Result<String> {
        match self {
            CatalogSource::File(path) => {
                tracing::debug!("Reading catalog from {}", path.display());
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| PatternbookError::unavailable(self.origin(), e))
            }
            CatalogSource::Url(url) => fetch_url(url).await,
        }
    }
}

impl FromStr for CatalogSource {
    type Err = PatternbookError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PatternbookError::Config(
                "Catalog source must not be empty".to_string(),
            ));
        }

        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(CatalogSource::Url(s.to_string()))
        } else {
            Ok(CatalogSource::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => f.write_str(url),
        }
    }
}

#[cfg(feature = "remote")]
async fn fetch_url(url: &str) -> Result<String> {
    tracing::debug!("Fetching catalog from {}", url);

    let client = reqwest::Client::builder()
        .user_agent(concat!("patternbook/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| PatternbookError::unavailable(url, e))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| PatternbookError::unavailable(url, e))?;

    if !response.status().is_success() {
        return Err(PatternbookError::unavailable(
            url,
            format!("HTTP {}", response.status()),
        ));
    }

    response
        .text()
        .await
        .map_err(|e| PatternbookError::unavailable(url, e))
}

#[cfg(not(feature = "remote"))]
async fn fetch_url(url: &str) -> Result<String> {
    Err(PatternbookError::unavailable(
        url,
        "remote sources are not enabled. Rebuild with --features remote",
    ))
}
