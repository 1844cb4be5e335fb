//! Types for media library API requests and responses.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Owner name given to playlists whose user no longer exists.
pub const UNKNOWN_OWNER: &str = "Unknown";

/// Placeholder listed in `Song::user_names` when no user's playlist holds the song.
pub const NO_USER_PLAYLIST: &str = "not in any user's playlist";

/// Per-request timeout used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for connecting to a media library API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:8080")
    pub url: String,
    /// Upper bound for every single request
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Create a config with the default request timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

// =============================================================================
// Client-side entities
// =============================================================================

/// A user as presented to the rest of the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub playlists: Vec<Playlist>,
}

/// A playlist after shape normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: i64,
    pub name: String,
    /// Owner's display name, `UNKNOWN_OWNER` when the owner is gone
    pub username: String,
    pub song_titles: Vec<String>,
    /// Expanded song objects; empty when the server only sent titles
    pub songs: Vec<SongSummary>,
}

impl Playlist {
    /// True when the owning user could not be resolved.
    pub fn is_orphaned(&self) -> bool {
        self.username == UNKNOWN_OWNER
    }

    pub fn summary(&self) -> PlaylistSummary {
        PlaylistSummary {
            id: self.id,
            name: self.name.clone(),
            username: self.username.clone(),
        }
    }
}

/// A song together with the cross-references derived from playlists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub playlist_names: Vec<String>,
    pub playlists: Vec<PlaylistSummary>,
    pub user_names: Vec<String>,
}

impl Song {
    /// A song that belongs to no playlist yet.
    pub fn unlinked(id: i64, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            playlist_names: Vec::new(),
            playlists: Vec::new(),
            user_names: vec![NO_USER_PLAYLIST.to_string()],
        }
    }
}

/// Song as embedded inside an expanded playlist.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SongSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub artist: String,
}

/// Playlist as referenced from a song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistSummary {
    pub id: i64,
    pub name: String,
    pub username: String,
}

// =============================================================================
// Wire shapes (pre-normalization)
// =============================================================================

/// A user as returned by the server.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ServerUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub playlists: Option<Vec<ServerPlaylist>>,
}

impl From<ServerUser> for User {
    fn from(user: ServerUser) -> Self {
        // Nested playlists belong to the enclosing user even when the
        // server leaves their owner out.
        let playlists = user
            .playlists
            .unwrap_or_default()
            .into_iter()
            .map(|mut playlist| {
                if playlist.username.as_deref().unwrap_or_default().is_empty() {
                    playlist.username = Some(user.username.clone());
                }
                Playlist::from(playlist)
            })
            .collect();

        Self {
            id: user.id,
            username: user.username,
            playlists,
        }
    }
}

/// A playlist as returned by the server.
///
/// Depending on the endpoint the songs arrive either as full objects or
/// as a list of titles, and the owner may be missing altogether.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ServerPlaylist {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub song_titles: Option<Vec<String>>,
    #[serde(default)]
    pub songs: Option<Vec<SongSummary>>,
}

impl From<ServerPlaylist> for Playlist {
    fn from(playlist: ServerPlaylist) -> Self {
        let songs = playlist.songs.unwrap_or_default();
        let song_titles = if songs.is_empty() {
            playlist.song_titles.unwrap_or_default()
        } else {
            songs.iter().map(|s| s.title.clone()).collect()
        };

        Self {
            id: playlist.id,
            name: playlist.name,
            username: playlist
                .username
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNKNOWN_OWNER.to_string()),
            song_titles,
            songs,
        }
    }
}

/// A song as returned by the server. Server-side cross-references are ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ServerSong {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub artist: String,
}

impl From<ServerSong> for Song {
    fn from(song: ServerSong) -> Self {
        Song::unlinked(song.id, song.title, song.artist)
    }
}

/// Batch endpoints answer with either one object or an array of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_first(self) -> Option<T> {
        match self {
            OneOrMany::Many(items) => items.into_iter().next(),
            OneOrMany::One(item) => Some(item),
        }
    }
}

// =============================================================================
// Request bodies
// =============================================================================

/// Element of the `POST /users` batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub username: String,
}

/// Element of the `POST /songs` batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
}

/// Body of `POST /playlists/create/{userId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlaylist {
    pub name: String,
    pub user_id: i64,
}

/// Body of `PUT /users/{id}`. `None` playlist ids leave membership untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub username: String,
    pub playlist_ids: Option<Vec<i64>>,
}

/// Body of `PUT /playlists/u/{id}`. `None` song ids leave the tracklist untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song_ids: Option<Vec<i64>>,
}

/// Body of `PUT /songs/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongUpdate {
    pub title: String,
    pub artist: String,
}
