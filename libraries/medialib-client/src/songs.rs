//! Song operations.

use crate::client::{check_status, parse_json, send_error};
use crate::error::{ClientError, Result};
use crate::playlists::PlaylistClient;
use crate::relations;
use crate::types::{NewSong, OneOrMany, ServerSong, Song, SongUpdate};
use reqwest::Client;
use tracing::debug;

/// Client for the `/songs` resource.
pub struct SongClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> SongClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Fetch every song with its playlist and user cross-references.
    ///
    /// Songs and playlists are fetched concurrently; if either request
    /// fails the whole call fails.
    pub async fn list(&self) -> Result<Vec<Song>> {
        let playlist_client = PlaylistClient::new(self.http, self.base_url);
        let (mut songs, playlists) = tokio::try_join!(self.list_unlinked(), playlist_client.list())?;

        relations::link_songs(&mut songs, &playlists);
        Ok(songs)
    }

    /// Fetch songs without deriving cross-references.
    pub async fn list_unlinked(&self) -> Result<Vec<Song>> {
        let url = format!("{}/songs", self.base_url);
        debug!(url = %url, "Fetching songs");

        let response = self.http.get(&url).send().await.map_err(send_error)?;
        let response = match check_status(response, "songs").await {
            Ok(response) => response,
            Err(ClientError::NotFound(_)) => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        let songs: Vec<ServerSong> = parse_json(response, "songs response").await?;

        debug!(songs = songs.len(), "Fetched songs");
        Ok(songs.into_iter().map(Song::from).collect())
    }

    /// Songs by one artist. The server's 404 for "no songs" becomes an empty list.
    pub async fn by_artist(&self, artist: &str) -> Result<Vec<Song>> {
        let url = format!(
            "{}/songs/by-artist?artist={}",
            self.base_url,
            urlencoding::encode(artist)
        );
        debug!(url = %url, artist = %artist, "Fetching songs by artist");

        let response = self.http.get(&url).send().await.map_err(send_error)?;
        let response = match check_status(response, "songs by artist").await {
            Ok(response) => response,
            Err(ClientError::NotFound(_)) => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        let songs: Vec<ServerSong> = parse_json(response, "songs by artist").await?;

        debug!(results = songs.len(), "Artist lookup complete");
        Ok(songs.into_iter().map(Song::from).collect())
    }

    /// Create a song. The server assigns the id.
    pub async fn create(&self, song: &NewSong) -> Result<Song> {
        let url = format!("{}/songs", self.base_url);
        debug!(url = %url, title = %song.title, "Creating song");

        let response = self
            .http
            .post(&url)
            .json(&[song])
            .send()
            .await
            .map_err(send_error)?;
        let response = check_status(response, "songs").await?;
        let created: OneOrMany<ServerSong> = parse_json(response, "created song").await?;

        created
            .into_first()
            .map(Song::from)
            .ok_or_else(|| ClientError::ParseError("Server returned no created song".into()))
    }

    /// Replace title and artist.
    pub async fn update(&self, song_id: i64, update: &SongUpdate) -> Result<Song> {
        let url = format!("{}/songs/{}", self.base_url, song_id);
        debug!(url = %url, song_id, "Updating song");

        let response = self
            .http
            .put(&url)
            .json(update)
            .send()
            .await
            .map_err(send_error)?;
        let response = check_status(response, &format!("song {}", song_id)).await?;
        let updated: ServerSong = parse_json(response, "updated song").await?;

        Ok(updated.into())
    }

    /// Delete a song. A missing song yields `ClientError::NotFound`.
    pub async fn delete(&self, song_id: i64) -> Result<()> {
        let url = format!("{}/songs/{}", self.base_url, song_id);
        debug!(url = %url, song_id, "Deleting song");

        let response = self.http.delete(&url).send().await.map_err(send_error)?;
        check_status(response, &format!("song {}", song_id)).await?;

        debug!(song_id, "Song deleted");
        Ok(())
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}
