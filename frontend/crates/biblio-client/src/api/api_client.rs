use crate::{ClientError, ClientResult};

use biblio_config::ApiConfig;
use biblio_core::Envelope;

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the library REST API.
///
/// Identity travels in the session cookie the backend sets on login, so
/// every clone shares one cookie store and no identity headers are sent.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: ReqwestClient,
}

/// Error bodies look like `{ "success": false, "message": "..." }`
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl ApiClient {
    /// Create a client with the default timeout
    ///
    /// # Arguments
    /// * `base_url` - API root including the `/api` prefix (e.g. "http://localhost:3000/api")
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn from_config(config: &ApiConfig) -> ClientResult<Self> {
        Self::with_timeout(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ClientError::invalid_url(&base_url, e.to_string()))?;

        let client = ReqwestClient::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for a path below the base URL
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        self.client.request(method, url)
    }

    /// Build a request with URL-encoded query parameters
    pub(crate) fn request_with_query(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<RequestBuilder> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url =
            Url::parse(&raw).map_err(|e| ClientError::invalid_url(&raw, e.to_string()))?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        debug!("{} {}", method, url);
        Ok(self.client.request(method, url))
    }

    /// URL of a resource below the base URL, one percent-encoded path
    /// segment per element, so an id cannot escape its segment
    pub(crate) fn resource_url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::invalid_url(&self.base_url, e.to_string()))?;

        url.path_segments_mut()
            .map_err(|()| ClientError::invalid_url(&self.base_url, "URL cannot have a path"))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Build a request for a resource addressed by path segments
    pub(crate) fn request_resource(
        &self,
        method: Method,
        segments: &[&str],
    ) -> ClientResult<RequestBuilder> {
        let url = self.resource_url(segments)?;
        debug!("{} {}", method, url);
        Ok(self.client.request(method, url))
    }

    /// Execute request, check status and envelope, decode the body
    pub(crate) async fn execute<T>(&self, req: RequestBuilder) -> ClientResult<T>
    where
        T: DeserializeOwned + Envelope,
    {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("-> {} ({} bytes)", status, body.len());

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|error| error.message);
            return Err(ClientError::api(status.as_u16(), message));
        }

        let parsed: T = serde_json::from_str(&body)?;
        if !parsed.success() {
            return Err(ClientError::rejected(parsed.message()));
        }

        Ok(parsed)
    }
}
