//! Data access: load the photographers database
//!
//! A single read (local file) or GET (remote URL) followed by a JSON parse.
//! No caching, no retry.

use std::path::Path;

use thiserror::Error;
use url::Url;

use crate::config::DataSource;
use crate::state::data::Database;

/// Why the database could not be loaded
#[derive(Debug, Error)]
pub enum DataError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("invalid data file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load and parse the database from its configured source
pub async fn load_db(source: DataSource) -> Result<Database, DataError> {
    let bytes = match &source {
        DataSource::File(path) => read_file(path).await?,
        DataSource::Http(url) => fetch(url).await?,
    };

    let db = parse_db(&bytes)?;

    log::info!(
        "📁 Loaded {} photographers and {} media from {}",
        db.photographers.len(),
        db.media.len(),
        source
    );

    Ok(db)
}

/// Parse the JSON document
pub fn parse_db(bytes: &[u8]) -> Result<Database, DataError> {
    Ok(serde_json::from_slice(bytes)?)
}

async fn read_file(path: &Path) -> Result<Vec<u8>, DataError> {
    tokio::fs::read(path).await.map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })
}

async fn fetch(url: &Url) -> Result<Vec<u8>, DataError> {
    let http_error = |source: reqwest::Error| DataError::Http {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url.clone()).await.map_err(http_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(DataError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(http_error)?;
    Ok(body.to_vec())
}
