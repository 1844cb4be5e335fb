use crate::error::SyncError;
use medialib_client::{Playlist, Song, User};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Mutually consistent view of the whole library at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub songs: Vec<Song>,
    pub playlists: Vec<Playlist>,
}

impl Snapshot {
    pub fn user(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn song(&self, id: i64) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    pub fn playlist(&self, id: i64) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    /// Ids of every song whose title matches one of `titles` exactly.
    /// Titles with no match are dropped.
    pub fn song_ids_for_titles(&self, titles: &[String]) -> Vec<i64> {
        titles
            .iter()
            .flat_map(|title| self.songs.iter().filter(move |s| &s.title == title))
            .map(|s| s.id)
            .collect()
    }

    /// Id of the first song carrying each title. Unknown titles are dropped.
    pub fn first_song_ids_for_titles(&self, titles: &[String]) -> Vec<i64> {
        titles
            .iter()
            .filter_map(|title| self.songs.iter().find(|s| &s.title == title))
            .map(|s| s.id)
            .collect()
    }

    /// Id of the first playlist carrying each name. Unknown names are dropped.
    pub fn playlist_ids_for_names(&self, names: &[String]) -> Vec<i64> {
        names
            .iter()
            .filter_map(|name| self.playlists.iter().find(|p| &p.name == name))
            .map(|p| p.id)
            .collect()
    }
}

/// Entity type a mutation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    User,
    Song,
    Playlist,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::Song => "song",
            EntityKind::Playlist => "playlist",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" | "users" => Ok(EntityKind::User),
            "song" | "songs" => Ok(EntityKind::Song),
            "playlist" | "playlists" => Ok(EntityKind::Playlist),
            _ => Err(SyncError::UnknownEntity(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub username: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongDraft {
    pub title: String,
    pub artist: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistDraft {
    pub name: String,
    /// Owner; `None` when the operator picked nobody
    pub user_id: Option<i64>,
    /// Songs to add right after creation, by exact title
    pub song_titles: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserEdit {
    pub username: String,
    /// `None` leaves playlist ownership as it is
    pub playlist_names: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongEdit {
    pub title: String,
    pub artist: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistEdit {
    pub name: String,
    /// `None` leaves the tracklist as it is
    pub song_titles: Option<Vec<String>>,
}

/// An edit routed to exactly one entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityEdit {
    User { id: i64, edit: UserEdit },
    Song { id: i64, edit: SongEdit },
    Playlist { id: i64, edit: PlaylistEdit },
}

impl EntityEdit {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityEdit::User { .. } => EntityKind::User,
            EntityEdit::Song { .. } => EntityKind::Song,
            EntityEdit::Playlist { .. } => EntityKind::Playlist,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            EntityEdit::User { id, .. }
            | EntityEdit::Song { id, .. }
            | EntityEdit::Playlist { id, .. } => *id,
        }
    }
}

/// Where the most recent reload stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReloadPhase {
    /// No reload has run yet
    Idle,
    Fetching,
    Pruning,
    Committed,
    Failed,
}

/// Outcome of one committed reload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReloadSummary {
    pub users: usize,
    pub songs: usize,
    pub playlists: usize,
    /// Orphan playlists removed from the view (and from the server when possible)
    pub orphans_pruned: usize,
    /// Orphans whose server-side delete failed; still hidden locally
    pub orphan_delete_failures: usize,
    pub committed_at: String,
    pub duration_ms: u64,
}
