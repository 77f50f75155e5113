//! Fetch the dataset from a file or over HTTP.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use gems_core::{Dataset, LoadError};
use reqwest::header::CACHE_CONTROL;
use reqwest::{Client, Url};
use thiserror::Error;
use tracing::{debug, info};

/// Default time allowed for a remote dataset request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Where the dataset lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetLocation {
    File(PathBuf),
    Url(Url),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid dataset URL '{value}': {reason}")]
pub struct InvalidLocation {
    pub value: String,
    pub reason: String,
}

impl DatasetLocation {
    /// Interpret `raw` as a URL when it has an `http`/`https` scheme and as a
    /// filesystem path otherwise.
    pub fn parse(raw: &str) -> Result<Self, InvalidLocation> {
        let trimmed = raw.trim();
        let lowered = trimmed.to_ascii_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            return Url::parse(trimmed)
                .map(DatasetLocation::Url)
                .map_err(|err| InvalidLocation {
                    value: trimmed.to_string(),
                    reason: err.to_string(),
                });
        }
        Ok(DatasetLocation::File(PathBuf::from(trimmed)))
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, DatasetLocation::Url(_))
    }
}

impl fmt::Display for DatasetLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetLocation::File(path) => write!(f, "{}", path.display()),
            DatasetLocation::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Retrieves dataset snapshots. Every failure is reported as a [`LoadError`].
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    client: Client,
    timeout: Duration,
}

impl DatasetLoader {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("curated-gems/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, timeout })
    }

    /// Fetch and decode the dataset at `location`.
    pub async fn fetch(&self, location: &DatasetLocation) -> Result<Dataset, LoadError> {
        let start = Instant::now();
        debug!(%location, "fetching dataset");

        let bytes = match location {
            DatasetLocation::File(path) => read_file(path).await?,
            DatasetLocation::Url(url) => self.fetch_url(url).await?,
        };
        let dataset = Dataset::from_json_slice(&bytes)?;

        info!(
            %location,
            items = dataset.len(),
            bytes = bytes.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "dataset fetch completed"
        );
        Ok(dataset)
    }

    async fn fetch_url(&self, url: &Url) -> Result<Vec<u8>, LoadError> {
        let request_url = cache_busted(url);
        let http_error = |err: reqwest::Error| LoadError::Http {
            location: url.to_string(),
            message: err.to_string(),
        };

        let response = self
            .client
            .get(request_url)
            .header(CACHE_CONTROL, "no-store")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                location: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(http_error)?;
        Ok(body.to_vec())
    }
}

async fn read_file(path: &Path) -> Result<Vec<u8>, LoadError> {
    tokio::fs::read(path).await.map_err(|err| LoadError::Io {
        location: path.display().to_string(),
        message: err.to_string(),
    })
}

/// Append a `_=<millis>` parameter so intermediaries never serve a stale copy.
fn cache_busted(url: &Url) -> Url {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    let mut busted = url.clone();
    busted
        .query_pairs_mut()
        .append_pair("_", &millis.to_string());
    busted
}
