//! Client for the separate MrMorris backend API.

mod interceptor;

pub use interceptor::{Interceptor, PassThrough};

use std::{sync::Arc, time::Duration};

use env_helpers::get_env_default;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use url::Url;

use crate::infra::http_client::{
    DEFAULT_REQUEST_TIMEOUT, ensure_json_content_type, json_headers, try_build_client_with,
};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("Invalid backend URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend responded with {status}")]
    Status { status: StatusCode, body: String },

    #[error("Request rejected: {0}")]
    Rejected(String),
}

impl ApiClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiClientError::Status { status, .. } => Some(*status),
            ApiClientError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiClientError::Transport(e) if e.is_timeout())
    }
}

#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiClientConfig {
    pub fn from_base_url(base_url: &str) -> Result<Self, ApiClientError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    /// Reads `API_URL`, falling back to the local backend.
    pub fn from_env() -> Result<Self, ApiClientError> {
        let base_url: String = get_env_default("API_URL", DEFAULT_API_URL.to_string());
        Self::from_base_url(&base_url)
    }
}

/// Shared client for the backend: base URL, JSON headers, request timeout and interceptors.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    interceptor: Arc<dyn Interceptor>,
}

impl ApiClient {
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiClientError> {
        let client = try_build_client_with(config.timeout, json_headers())?;
        Ok(Self {
            client,
            base_url: config.base_url,
            interceptor: Arc::new(PassThrough),
        })
    }

    pub fn from_env() -> Result<Self, ApiClientError> {
        Self::new(ApiClientConfig::from_env()?)
    }

    pub fn with_interceptor(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptor = interceptor;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `path` against the base URL. Absolute URLs are used as-is.
    pub fn url(&self, path: &str) -> Result<Url, ApiClientError> {
        if let Ok(url) = Url::parse(path) {
            if url.has_host() {
                return Ok(url);
            }
        }
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiClientError> {
        Ok(self.client.request(method, self.url(path)?))
    }

    pub fn get(&self, path: &str) -> Result<RequestBuilder, ApiClientError> {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> Result<RequestBuilder, ApiClientError> {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> Result<RequestBuilder, ApiClientError> {
        self.request(Method::PUT, path)
    }

    pub fn patch(&self, path: &str) -> Result<RequestBuilder, ApiClientError> {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> Result<RequestBuilder, ApiClientError> {
        self.request(Method::DELETE, path)
    }

    /// Sends a request through the interceptors. Non-2xx statuses are errors.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiClientError> {
        self.dispatch(builder)
            .await
            .map_err(|e| self.interceptor.on_error(e))
    }

    async fn dispatch(&self, builder: RequestBuilder) -> Result<Response, ApiClientError> {
        let mut request = builder.build()?;
        ensure_json_content_type(&mut request);
        let request = self.interceptor.on_request(request)?;
        tracing::debug!(method = %request.method(), url = %request.url(), "Backend request");

        let response = self.client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response.text().await));
        }

        self.interceptor.on_response(response)
    }

    /// Decodes a JSON body. Decode failures go through `on_error` like any other failure.
    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiClientError> {
        response
            .json()
            .await
            .map_err(|e| self.interceptor.on_error(e.into()))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiClientError> {
        let response = self.send(self.get(path)?).await?;
        self.decode(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.post(path)?.json(body)).await?;
        self.decode(response).await
    }
}

/// Builds the error for a non-2xx response. An unreadable body is logged and left empty.
fn status_error(status: StatusCode, body: Result<String, reqwest::Error>) -> ApiClientError {
    let body = body.unwrap_or_else(|e| {
        tracing::warn!(%status, error = %e, "Failed to read backend error body");
        String::new()
    });
    ApiClientError::Status { status, body }
}
