//! telelink HTTP client implementation

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};
use url::Url;

use crate::error::{ClientError, Result};
use crate::types::*;

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// telelink REST API client
#[derive(Debug, Clone)]
pub struct TelelinkClient {
    client: Client,
    base_url: Url,
}

impl TelelinkClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the telelink daemon (e.g., "http://localhost:18090")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new client with custom timeouts
    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Check server health
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<String> {
        let url = self.base_url.join("/health")?;
        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            Ok(response.text().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    // =========================================================================
    // Catalogue
    // =========================================================================

    /// List every operation the server can execute
    #[instrument(skip(self))]
    pub async fn list_operations(&self) -> Result<Vec<OperationInfo>> {
        let url = self.base_url.join("/v1/operations")?;
        let response = self.client.get(url).send().await?;
        self.handle_response::<ListResponse<OperationInfo>>(response)
            .await
            .map(|r| r.items)
    }

    /// Describe the fields of a credential record
    #[instrument(skip(self))]
    pub async fn credential_schema(&self) -> Result<Vec<CredentialField>> {
        let url = self.base_url.join("/v1/credentials/schema")?;
        let response = self.client.get(url).send().await?;
        self.handle_response::<ListResponse<CredentialField>>(response)
            .await
            .map(|r| r.items)
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Execute one operation
    #[instrument(skip(self, request), fields(operation = %request.operation))]
    pub async fn execute(&self, request: &ExecuteRequest) -> Result<ExecuteResponse> {
        let url = self.base_url.join("/v1/execute")?;
        debug!("Executing {} via {}", request.operation, url);

        let response = self.client.post(url).json(request).send().await?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Helper Methods
    // =========================================================================

    /// Handle response and deserialize JSON
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ClientError::ParseError(e.to_string()))
        } else {
            Err(self.extract_error_from_status(response, status).await)
        }
    }

    /// Extract error from failed response
    async fn extract_error(&self, response: reqwest::Response) -> ClientError {
        let status = response.status();
        self.extract_error_from_status(response, status).await
    }

    async fn extract_error_from_status(
        &self,
        response: reqwest::Response,
        status: StatusCode,
    ) -> ClientError {
        if matches!(
            status,
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT
        ) {
            return ClientError::Timeout;
        }

        match response.json::<ErrorResponse>().await {
            Ok(err) => ClientError::ServerError {
                status: status.as_u16(),
                code: err.error,
                message: err.message,
                operation: err.operation,
            },
            Err(_) => ClientError::server_error(status.as_u16(), "unknown", format!("HTTP {}", status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = TelelinkClient::new("http://localhost:18090");
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let client = TelelinkClient::new("not a url");
        assert!(matches!(client, Err(ClientError::InvalidUrl(_))));
    }
}
