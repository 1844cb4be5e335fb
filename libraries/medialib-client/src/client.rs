//! Main media library client.

use crate::error::{ClientError, Result};
use crate::playlists::PlaylistClient;
use crate::songs::SongClient;
use crate::types::ClientConfig;
use crate::users::UserClient;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Client for the media library REST API.
///
/// Every call is a single attempt bounded by the configured request
/// timeout. Nothing is retried here; callers decide what to do with
/// failures.
///
/// # Example
///
/// ```ignore
/// use medialib_client::{ClientConfig, MediaLibraryClient};
///
/// let client = MediaLibraryClient::new(ClientConfig::new("http://localhost:8080"))?;
/// let users = client.users().list().await?;
/// let songs = client.songs().list().await?;
/// println!("{} users, {} songs", users.len(), songs.len());
/// ```
#[derive(Debug, Clone)]
pub struct MediaLibraryClient {
    http: Client,
    base_url: String,
}

impl MediaLibraryClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }
        Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.request_timeout.min(Duration::from_secs(10)))
            .user_agent(format!("medialib-admin/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!(url = %base_url, timeout = ?config.request_timeout, "Created media library client");

        Ok(Self { http, base_url })
    }

    /// Base URL without trailing slash.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Operations on `/users`.
    pub fn users(&self) -> UserClient<'_> {
        UserClient::new(&self.http, &self.base_url)
    }

    /// Operations on `/songs`.
    pub fn songs(&self) -> SongClient<'_> {
        SongClient::new(&self.http, &self.base_url)
    }

    /// Operations on `/playlists`.
    pub fn playlists(&self) -> PlaylistClient<'_> {
        PlaylistClient::new(&self.http, &self.base_url)
    }
}

/// Map a failed send into the client error space.
pub(crate) fn send_error(e: reqwest::Error) -> ClientError {
    if e.is_connect() {
        ClientError::ServerUnreachable(e.to_string())
    } else {
        ClientError::Request(e)
    }
}

/// Turn a non-2xx response into the matching error; pass successes through.
pub(crate) async fn check_status(response: Response, target: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    if status.as_u16() == 404 {
        Err(ClientError::NotFound(target.to_string()))
    } else if status.is_client_error() {
        Err(ClientError::Rejected {
            status: status.as_u16(),
            message,
        })
    } else {
        Err(ClientError::ServerError {
            status: status.as_u16(),
            message,
        })
    }
}

/// Decode a JSON body, naming `what` in the parse error.
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| ClientError::ParseError(format!("Failed to parse {}: {}", what, e)))
}
