//! Keeps users, songs and playlists mutually consistent.
//!
//! `LibraryManager` reloads the whole library through a [`LibraryGateway`],
//! prunes playlists whose owner is gone, re-derives which playlists and
//! users each song belongs to, and commits the result as one snapshot.
//! Every create/update/delete is validated locally first and followed by
//! a full reload.

mod cleaner;
mod error;
mod gateway;
mod manager;
mod search;
mod types;
mod validator;

// Public exports
pub use error::{Result, SyncError};
pub use gateway::LibraryGateway;
pub use manager::LibraryManager;
pub use medialib_client::ErrorKind;
pub use search::{search, SearchResults};
pub use types::{
    EntityEdit, EntityKind, PlaylistDraft, PlaylistEdit, ReloadPhase, ReloadSummary, Snapshot,
    SongDraft, SongEdit, UserDraft, UserEdit,
};
pub use validator::{MAX_ARTIST_LEN, MAX_PLAYLIST_NAME_LEN, MAX_TITLE_LEN};
