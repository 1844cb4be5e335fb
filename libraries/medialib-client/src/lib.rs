//! Media Library Client
//!
//! HTTP client for the media library administration API: users, songs
//! and playlists.
//!
//! # Features
//!
//! - **Typed CRUD**: fetch/create/update/delete for every entity
//! - **Shape normalization**: playlists arriving with full song objects or
//!   bare titles, and with or without an owner, come out in one shape
//! - **Cross-references**: songs carry the playlists and users they belong to
//!
//! # Example
//!
//! ```ignore
//! use medialib_client::{ClientConfig, MediaLibraryClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MediaLibraryClient::new(ClientConfig::new("http://localhost:8080"))?;
//!
//!     for song in client.songs().list().await? {
//!         println!("{} - {} ({})", song.artist, song.title, song.user_names.join(", "));
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod playlists;
pub mod relations;
mod songs;
mod types;
mod users;

// Re-export main types
pub use client::MediaLibraryClient;
pub use error::{ClientError, ErrorKind, Result};
pub use types::{
    ClientConfig, NewPlaylist, NewSong, NewUser, Playlist, PlaylistSummary, PlaylistUpdate,
    Song, SongSummary, SongUpdate, User, UserUpdate, DEFAULT_REQUEST_TIMEOUT, NO_USER_PLAYLIST,
    UNKNOWN_OWNER,
};

// Re-export sub-clients for direct use if needed
pub use playlists::PlaylistClient;
pub use songs::SongClient;
pub use users::UserClient;
