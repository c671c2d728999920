//! HTTP transport for the workspace API

use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::error::{Error, Result};

/// Client for a single Space workspace
///
/// Holds the shared HTTP connection pool and the access token resolved at
/// startup. All endpoint modules attach their requests through this type.
pub struct SpaceClient {
    /// HTTP client for REST API calls
    pub(crate) http_client: Client,
    /// Base URL of the workspace (e.g., "https://org.example.com")
    base_url: Url,
    /// API access token, sent as a bearer header on every request
    token: String,
}

/// Normalize a server address to a full URL.
///
/// Addresses already carrying a scheme are used verbatim; bare host names
/// get an `https://` prefix.
pub fn normalize_server_url(server: &str) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        server.to_string()
    } else {
        format!("https://{server}")
    }
}

impl SpaceClient {
    /// Create a client for the given server address and access token
    pub fn new(server: &str, token: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(&normalize_server_url(server))
            .map_err(|e| Error::InvalidArgument(format!("invalid server URL: {e}")))?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(SpaceClient {
            http_client,
            base_url,
            token: token.into(),
        })
    }

    /// Base server address without a trailing slash
    pub fn server_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Build the full API URL for a given endpoint
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path (e.g., "/chats/channels/all-channels")
    pub fn api_url(&self, endpoint: &str) -> String {
        let endpoint = endpoint.trim_start_matches('/');
        format!("{}/api/http/{endpoint}", self.server_url())
    }

    /// Make an authenticated GET request and deserialize the JSON body
    pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<T> {
        let url = self.api_url(endpoint);
        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Check the response status and extract the JSON body
    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            Err(Error::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Stream a file download to `dest`, overwriting any existing file.
    ///
    /// # Arguments
    /// * `url` - Absolute download address
    /// * `dest` - Local destination path; parent directory must exist
    /// * `authenticated` - Attach the bearer token. Resolved public
    ///   attachment URLs embed their own access and are fetched without it.
    pub async fn download_to_file(
        &self,
        url: &str,
        dest: &Path,
        authenticated: bool,
    ) -> Result<()> {
        let mut request = self.http_client.get(url);
        if authenticated {
            request = request.bearer_auth(&self.token);
        }

        let mut response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Download {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mut file = tokio::fs::File::create(dest)
            .await
            .map_err(|e| Error::io(dest, e))?;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk)
                .await
                .map_err(|e| Error::io(dest, e))?;
        }
        file.flush().await.map_err(|e| Error::io(dest, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client() {
        let client = SpaceClient::new("https://org.example.com", "token");
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let client = SpaceClient::new("https://not a url", "token");
        assert!(client.is_err());
    }

    #[test]
    fn test_normalize_server_url() {
        assert_eq!(
            normalize_server_url("org.example.com"),
            "https://org.example.com"
        );
        assert_eq!(
            normalize_server_url("https://org.example.com"),
            "https://org.example.com"
        );
        assert_eq!(
            normalize_server_url("http://localhost:8000"),
            "http://localhost:8000"
        );
    }

    #[test]
    fn test_api_url() {
        let client = SpaceClient::new("https://org.example.com", "token").unwrap();
        assert_eq!(
            client.api_url("/chats/channels/all-channels"),
            "https://org.example.com/api/http/chats/channels/all-channels"
        );
        assert_eq!(
            client.api_url("chats/channels/all-channels"),
            "https://org.example.com/api/http/chats/channels/all-channels"
        );
    }

    #[test]
    fn test_server_url_trims_trailing_slash() {
        let client = SpaceClient::new("https://org.example.com/", "token").unwrap();
        assert_eq!(client.server_url(), "https://org.example.com");
    }
}
