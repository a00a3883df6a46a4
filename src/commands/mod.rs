//! Server Command Wrappers
//!
//! Frontend bindings to the server's HTTP endpoints, organized by domain.
//! `request` describes calls; `ApiClient` performs them over fetch.

pub mod request;
mod problem;
mod feed;

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::ActionResponse;
use request::{encode_pairs, ApiRequest, Body, Method};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// HTTP client bound to the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::Config(format!("API base must be absolute, got {:?}", base_url)));
        }
        Ok(Self { base_url })
    }

    /// Absolute URL for a server path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn client(&self) -> reqwest::Client {
        reqwest::Client::new()
    }

    fn build(&self, req: &ApiRequest) -> reqwest::RequestBuilder {
        let url = self.url(&req.path);
        let builder = match req.method {
            Method::Get => self.client().get(&url),
            Method::Post => self.client().post(&url),
        };
        match &req.body {
            Body::Empty => builder,
            Body::Multipart(pairs) => {
                let form = pairs.iter().fold(reqwest::multipart::Form::new(), |form, (k, v)| {
                    form.text(k.clone(), v.clone())
                });
                builder.multipart(form)
            }
            Body::UrlEncoded(pairs) => builder
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(encode_pairs(pairs)),
        }
    }

    /// Send a request and decode the JSON body
    pub async fn fetch_json<T: DeserializeOwned>(&self, req: &ApiRequest) -> Result<T, ApiError> {
        let response = self.build(req).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Send a mutating request and read its `success` flag.
    /// Rejections (404/403) still carry `{"success": false}`, so a non-2xx
    /// status with a decodable body is reported as an unsuccessful response.
    pub async fn send_action(&self, req: &ApiRequest) -> Result<ActionResponse, ApiError> {
        let response = self.build(req).send().await?;
        let status = response.status();
        let text = response.text().await?;
        match serde_json::from_str::<ActionResponse>(&text) {
            Ok(parsed) if status.is_success() => Ok(parsed),
            Ok(_) => Ok(ActionResponse { success: false }),
            Err(_) if !status.is_success() => Err(ApiError::Status(status.as_u16())),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_requires_absolute_base() {
        assert!(matches!(ApiClient::new("/"), Err(ApiError::Config(_))));
        assert!(ApiClient::new("").is_err());
    }

    #[test]
    fn test_client_joins_paths() {
        let api = ApiClient::new("http://localhost:5000/").unwrap();
        // trailing slash on the base is dropped, not doubled
        assert_eq!(api.url("/problem_stats"), "http://localhost:5000/problem_stats");
    }
}
