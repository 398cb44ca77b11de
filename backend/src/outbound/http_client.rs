//! Typed HTTP client for calling external APIs.
//!
//! Feature code does not build `reqwest` requests directly; it goes through
//! this client, which handles the base URL, default headers, and error
//! parsing consistently. Extracted here because more than one future
//! integration (payments, email) needs the same plumbing.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Failure raised by [`ApiClient`] calls.
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// The server answered with a non-success status.
    #[error("API error: {status}")]
    Status {
        /// HTTP status returned by the server.
        status: StatusCode,
        /// Parsed response body, when it was JSON.
        body: Option<Value>,
    },
    /// The request never produced a usable response.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// The client was constructed with unusable options.
    #[error("invalid client configuration: {0}")]
    Configuration(String),
}

/// Options for constructing an [`ApiClient`].
#[derive(Debug, Default, Clone)]
pub struct ApiClientOptions {
    /// Headers attached to every request.
    pub default_headers: Vec<(String, String)>,
}

/// JSON API client bound to a base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Construct a client for `base_url`. A trailing slash is trimmed so
    /// paths always start with `/`.
    ///
    /// # Errors
    /// [`ApiClientError::Configuration`] when a default header is malformed
    /// or the underlying client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        options: ApiClientOptions,
    ) -> Result<Self, ApiClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in &options.default_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|error| ApiClientError::Configuration(error.to_string()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|error| ApiClientError::Configuration(error.to_string()))?;
            headers.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|error| ApiClientError::Configuration(error.to_string()))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { base_url, client })
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<T, ApiClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await.unwrap_or_default();
            return Err(error_from_failure(status, &bytes));
        }
        Ok(response.json::<T>().await?)
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    /// See [`ApiClientError`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiClientError> {
        self.request(Method::GET, path, None::<&Value>).await
    }

    /// `POST` a JSON body and parse the JSON response.
    ///
    /// # Errors
    /// See [`ApiClientError`].
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiClientError> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// `PUT` a JSON body and parse the JSON response.
    ///
    /// # Errors
    /// See [`ApiClientError`].
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiClientError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// `PATCH` a JSON body and parse the JSON response.
    ///
    /// # Errors
    /// See [`ApiClientError`].
    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiClientError> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    /// `DELETE` a resource, checking the status only.
    ///
    /// # Errors
    /// See [`ApiClientError`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.delete(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await.unwrap_or_default();
            return Err(error_from_failure(status, &bytes));
        }
        Ok(())
    }
}

/// Map a non-success response to the error surfaced to callers: the status
/// always survives, the body only when it parses as JSON.
fn error_from_failure(status: StatusCode, body: &[u8]) -> ApiClientError {
    ApiClientError::Status {
        status,
        body: serde_json::from_slice(body).ok(),
    }
}
