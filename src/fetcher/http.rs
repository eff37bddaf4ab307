use std::time::Duration;

use crate::error::SuicError;
use crate::paths;
use crate::registry::catalog::{CatalogEntry, InitRegistry};

use super::FileSource;

/// A hung request blocks the whole invocation, so every request is bounded.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP-backed file source rooted at the registry base URL.
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Result<Self, SuicError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("suic-cli/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetch and parse the components catalog.
    pub async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, SuicError> {
        let url = self.url(paths::COMPONENTS_REGISTRY_FILE);
        self.get(&url).await?.json().await.map_err(|e| map_err(&url, e))
    }

    /// Fetch and parse the init registry.
    pub async fn fetch_init_registry(&self) -> Result<InitRegistry, SuicError> {
        let url = self.url(paths::INIT_REGISTRY_FILE);
        self.get(&url).await?.json().await.map_err(|e| map_err(&url, e))
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, SuicError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| map_err(url, e))?;
        response.error_for_status().map_err(|e| SuicError::DownloadFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

impl FileSource for HttpSource {
    async fn fetch_text(&self, path: &str) -> Result<String, SuicError> {
        let url = self.url(path);
        self.get(&url).await?.text().await.map_err(|e| map_err(&url, e))
    }
}

fn map_err(url: &str, err: reqwest::Error) -> SuicError {
    if err.is_timeout() {
        SuicError::NetworkTimeout(url.to_string())
    } else {
        SuicError::Http(err)
    }
}
