//! One-shot loading of the paper payload.
//!
//! The payload is fetched once at startup, either over HTTP or from a local
//! file. There is no retry and no cache: a failure is terminal for that load
//! attempt.

mod source;

use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::Config;
use crate::error::{LoadError, LoadResult};
use crate::models::{Dataset, Paper};

pub use source::DataSource;

/// A place papers can be loaded from.
#[async_trait]
pub trait PaperSource: Send + Sync {
    /// Human-readable location, for logs.
    fn describe(&self) -> String;

    /// Fetch and validate the payload.
    async fn load(&self) -> LoadResult<Vec<Paper>>;
}

/// Payload served over HTTP.
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    /// Create an HTTP source with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(url: Url, config: &Config) -> LoadResult<Self> {
        let mut builder = Client::builder().connect_timeout(config.connect_timeout).gzip(true);

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self { client: builder.build()?, url })
    }
}

#[async_trait]
impl PaperSource for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn load(&self) -> LoadResult<Vec<Paper>> {
        let response = self
            .client
            .get(self.url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(LoadError::status(status.as_u16(), text));
        }

        let bytes = response.bytes().await?;
        Ok(Dataset::from_slice(&bytes)?.papers)
    }
}

impl std::fmt::Debug for HttpSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSource").field("url", &self.url.as_str()).finish()
    }
}

/// Payload read from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a file source.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PaperSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> LoadResult<Vec<Paper>> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(Dataset::from_slice(&bytes)?.papers)
    }
}

/// Build the source described by the configuration.
///
/// # Errors
///
/// Returns error if the data source cannot be interpreted or the HTTP client
/// cannot be built.
pub fn source_from_config(config: &Config) -> LoadResult<Box<dyn PaperSource>> {
    match DataSource::parse(&config.data_source)? {
        DataSource::Http(url) => Ok(Box::new(HttpSource::new(url, config)?)),
        DataSource::File(path) => Ok(Box::new(FileSource::new(path))),
    }
}

/// Load papers from a source, logging the outcome.
///
/// # Errors
///
/// Propagates the source's `LoadError` after logging it.
pub async fn load_from(source: &dyn PaperSource) -> LoadResult<Vec<Paper>> {
    let location = source.describe();
    tracing::debug!(source = %location, "Loading papers");

    match source.load().await {
        Ok(papers) => {
            tracing::info!(source = %location, count = papers.len(), "Payload loaded");
            Ok(papers)
        }
        Err(e) => {
            tracing::error!(source = %location, error = %e, "Error loading data");
            Err(e)
        }
    }
}

/// Load papers from the configured location.
///
/// # Errors
///
/// Any `LoadError`; the caller renders the error message instead of cards.
pub async fn load_papers(config: &Config) -> LoadResult<Vec<Paper>> {
    let source = source_from_config(config).inspect_err(|e| {
        tracing::error!(source = %config.data_source, error = %e, "Error loading data");
    })?;
    load_from(source.as_ref()).await
}
