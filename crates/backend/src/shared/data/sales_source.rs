use contracts::domain::a001_sales_record::SalesRecord;
use std::path::PathBuf;
use thiserror::Error;

use crate::shared::config::{resolve_path, DataConfig};

#[derive(Debug, Error)]
pub enum SalesSourceError {
    #[error("cannot read sales file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("sales data is not a valid record list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load every sales record from the configured source.
///
/// Nothing is cached: each call reads the file (or fetches the URL) again.
pub async fn load_records(config: &DataConfig) -> Result<Vec<SalesRecord>, SalesSourceError> {
    let body = if config.is_remote() {
        fetch_remote(&config.source).await?
    } else {
        let path = resolve_path(&config.source);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| SalesSourceError::Io { path, source })?
    };

    parse_records(&body)
}

/// Same as [`load_records`], but a failure is logged and yields no records
pub async fn load_or_empty(config: &DataConfig) -> Vec<SalesRecord> {
    match load_records(config).await {
        Ok(records) => {
            tracing::debug!("Loaded {} sales records from {}", records.len(), config.source);
            records
        }
        Err(e) => {
            tracing::error!("Failed to load sales data: {}", e);
            Vec::new()
        }
    }
}

pub fn parse_records(body: &str) -> Result<Vec<SalesRecord>, SalesSourceError> {
    Ok(serde_json::from_str(body)?)
}

async fn fetch_remote(url: &str) -> Result<String, SalesSourceError> {
    let http_err = |source: reqwest::Error| SalesSourceError::Http {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url).await.map_err(http_err)?;
    if !response.status().is_success() {
        return Err(SalesSourceError::Status {
            url: url.to_string(),
            status: response.status().as_u16(),
        });
    }
    response.text().await.map_err(http_err)
}
