use anyhow::Context;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use shared::{ApiError, Transaction, User, Wallet};

use crate::config::{DashboardConfig, DEFAULT_API_BASE_URL};

/// Read-only view of the dashboard REST API
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn get_user(&self) -> Result<User, ApiError>;
    async fn get_wallet(&self) -> Result<Wallet, ApiError>;
    async fn get_transactions(&self) -> Result<Vec<Transaction>, ApiError>;
}

/// HTTP client for the dashboard API
#[derive(Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured base URL and request timeout
    pub fn from_config(config: &DashboardConfig) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            base_url: normalize_base_url(&config.api_base_url),
        })
    }

    /// Create a client with default settings against a custom base URL
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `endpoint` and decode the JSON body, normalizing every failure into
    /// an `ApiError`:
    /// - no response at all: status 0 with the transport message
    /// - non-2xx: the status and "HTTP error! status: <code>"
    /// - undecodable 2xx body: status 0 with the parser message
    async fn fetch_with_error_handling<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {}", url, e);
                ApiError::transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("GET {} returned {}", url, status);
            return Err(ApiError::http_status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to decode response from {}: {}", url, e);
            ApiError::decode(e.to_string())
        })
    }
}

#[async_trait]
impl DashboardApi for ApiClient {
    async fn get_user(&self) -> Result<User, ApiError> {
        self.fetch_with_error_handling("/user").await
    }

    async fn get_wallet(&self) -> Result<Wallet, ApiError> {
        self.fetch_with_error_handling("/wallet").await
    }

    async fn get_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.fetch_with_error_handling("/transactions").await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}
