//! User operations.

use crate::client::{check_status, parse_json, send_error};
use crate::error::{ClientError, Result};
use crate::types::{NewUser, OneOrMany, ServerUser, User, UserUpdate};
use reqwest::Client;
use tracing::debug;

/// Client for the `/users` resource.
pub struct UserClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> UserClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Fetch every user. An empty collection (404) yields an empty list.
    pub async fn list(&self) -> Result<Vec<User>> {
        let url = format!("{}/users", self.base_url);
        debug!(url = %url, "Fetching users");

        let response = self.http.get(&url).send().await.map_err(send_error)?;
        let response = match check_status(response, "users").await {
            Ok(response) => response,
            Err(ClientError::NotFound(_)) => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        let users: Vec<ServerUser> = parse_json(response, "users response").await?;

        debug!(users = users.len(), "Fetched users");
        Ok(users.into_iter().map(User::from).collect())
    }

    /// Create a user. The server assigns the id.
    pub async fn create(&self, username: &str) -> Result<User> {
        let url = format!("{}/users", self.base_url);
        debug!(url = %url, username = %username, "Creating user");

        let batch = [NewUser {
            username: username.to_string(),
        }];
        let response = self
            .http
            .post(&url)
            .json(&batch)
            .send()
            .await
            .map_err(send_error)?;
        let response = check_status(response, "users").await?;
        let created: OneOrMany<ServerUser> = parse_json(response, "created user").await?;

        created
            .into_first()
            .map(User::from)
            .ok_or_else(|| ClientError::ParseError("Server returned no created user".into()))
    }

    /// Replace the username and, when given, the owned playlists.
    pub async fn update(&self, user_id: i64, update: &UserUpdate) -> Result<()> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        debug!(url = %url, user_id, "Updating user");

        let response = self
            .http
            .put(&url)
            .json(update)
            .send()
            .await
            .map_err(send_error)?;
        check_status(response, &format!("user {}", user_id)).await?;
        Ok(())
    }

    /// Delete a user. A missing user yields `ClientError::NotFound`.
    pub async fn delete(&self, user_id: i64) -> Result<()> {
        let url = format!("{}/users/{}", self.base_url, user_id);
        debug!(url = %url, user_id, "Deleting user");

        let response = self.http.delete(&url).send().await.map_err(send_error)?;
        check_status(response, &format!("user {}", user_id)).await?;

        debug!(user_id, "User deleted");
        Ok(())
    }
}
