//! Playlist operations.

use crate::client::{check_status, parse_json, send_error};
use crate::error::{ClientError, Result};
use crate::types::{NewPlaylist, Playlist, PlaylistUpdate, ServerPlaylist};
use reqwest::Client;
use tracing::debug;

/// Client for the `/playlists` resource.
pub struct PlaylistClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> PlaylistClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Fetch every playlist, normalized.
    ///
    /// The server answers 404 for an empty collection; that is reported
    /// as an empty list.
    pub async fn list(&self) -> Result<Vec<Playlist>> {
        let url = format!("{}/playlists", self.base_url);
        debug!(url = %url, "Fetching playlists");

        let response = self.http.get(&url).send().await.map_err(send_error)?;
        let response = match check_status(response, "playlists").await {
            Ok(response) => response,
            Err(ClientError::NotFound(_)) => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        let playlists: Vec<ServerPlaylist> = parse_json(response, "playlists response").await?;

        debug!(playlists = playlists.len(), "Fetched playlists");
        Ok(playlists.into_iter().map(Playlist::from).collect())
    }

    /// Create an empty playlist owned by `playlist.user_id`.
    pub async fn create(&self, playlist: &NewPlaylist) -> Result<Playlist> {
        let url = format!("{}/playlists/create/{}", self.base_url, playlist.user_id);
        debug!(url = %url, name = %playlist.name, "Creating playlist");

        let response = self
            .http
            .post(&url)
            .json(playlist)
            .send()
            .await
            .map_err(send_error)?;
        let response = check_status(response, &format!("user {}", playlist.user_id)).await?;
        let created: ServerPlaylist = parse_json(response, "created playlist").await?;

        Ok(created.into())
    }

    /// Replace the name and, when given, the song list.
    pub async fn update(&self, playlist_id: i64, update: &PlaylistUpdate) -> Result<Playlist> {
        let url = format!("{}/playlists/u/{}", self.base_url, playlist_id);
        debug!(url = %url, playlist_id, "Updating playlist");

        let response = self
            .http
            .put(&url)
            .json(update)
            .send()
            .await
            .map_err(send_error)?;
        let response = check_status(response, &format!("playlist {}", playlist_id)).await?;
        let updated: ServerPlaylist = parse_json(response, "updated playlist").await?;

        Ok(updated.into())
    }

    /// Delete a playlist. A missing playlist yields `ClientError::NotFound`.
    pub async fn delete(&self, playlist_id: i64) -> Result<()> {
        let url = format!("{}/playlists/{}", self.base_url, playlist_id);
        debug!(url = %url, playlist_id, "Deleting playlist");

        let response = self.http.delete(&url).send().await.map_err(send_error)?;
        check_status(response, &format!("playlist {}", playlist_id)).await?;

        debug!(playlist_id, "Playlist deleted");
        Ok(())
    }

    /// Append songs to a playlist. Duplicates are left for the server to handle.
    pub async fn add_songs(&self, playlist_id: i64, song_ids: &[i64]) -> Result<()> {
        let url = format!("{}/playlists/{}/add-songs", self.base_url, playlist_id);
        debug!(url = %url, playlist_id, songs = song_ids.len(), "Adding songs to playlist");

        let response = self
            .http
            .post(&url)
            .json(song_ids)
            .send()
            .await
            .map_err(send_error)?;
        check_status(response, &format!("playlist {}", playlist_id)).await?;
        Ok(())
    }
}
