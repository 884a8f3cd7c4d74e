//! HTTP client service
//!
//! Single chokepoint for calls to the marketplace API: attaches the bearer
//! token, serializes JSON bodies and turns non-2xx responses into `ApiError`.

use crate::config::Settings;
use crate::credentials::CredentialProvider;
use crate::utils::error::{ApiError, AppResult, ErrorBody};
use crate::utils::logging::{redact_token, summarize_body};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Method, headers, query and body of one request
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// Extra headers; these override the default `Content-Type`
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    /// Serialized JSON body
    pub body: Option<Vec<u8>>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    /// Request with a JSON body
    pub fn json<B: Serialize + ?Sized>(method: Method, body: &B) -> AppResult<Self> {
        let mut options = Self::new(method);
        options.body = Some(serde_json::to_vec(body)?);
        Ok(options)
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Marketplace API client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new client instance
    pub fn new(settings: &Settings, credentials: Arc<dyn CredentialProvider>) -> AppResult<Self> {
        Self::with_base_url(settings, settings.api.base_url.clone(), credentials)
    }

    /// Create a client for another origin with the same transport settings
    pub fn with_base_url(
        settings: &Settings,
        base_url: impl Into<String>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> AppResult<Self> {
        let mut builder = Client::builder().user_agent(settings.api.user_agent.as_str());
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request to `endpoint` and decode the JSON response
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in options.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }

        if let Some(token) = self.credentials.access_token() {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    debug!("Attaching bearer token {}", redact_token(&token));
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("Stored token is not a valid header value, sending without it"),
            }
        }

        debug!("{} {}", options.method, endpoint);
        if let Some(body) = &options.body {
            if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
                debug!("Request body: {}", summarize_body(&value));
            }
        }

        let mut request = self.client.request(options.method, &url).headers(headers);
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        self.handle_response(endpoint, response).await
    }

    /// `GET endpoint`
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> AppResult<T> {
        self.request(endpoint, RequestOptions::get()).await
    }

    /// `method endpoint` with a JSON body
    pub async fn send_json<T, B>(&self, method: Method, endpoint: &str, body: &B) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(endpoint, RequestOptions::json(method, body)?).await
    }

    /// Handle HTTP response
    async fn handle_response<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        response: Response,
    ) -> AppResult<T> {
        let status = response.status();

        if !status.is_success() {
            let bytes = response.bytes().await.unwrap_or_default();
            let body = ErrorBody::parse(&bytes);
            warn!("API request {} failed: {} - {:?}", endpoint, status, body.message());
            return Err(ApiError::new(status.as_u16(), body).into());
        }

        let bytes = response.bytes().await?;
        let value = serde_json::from_slice(&bytes)?;
        debug!("API request {} completed: {}", endpoint, status);
        Ok(value)
    }
}
