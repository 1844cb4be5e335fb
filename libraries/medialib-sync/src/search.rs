use crate::types::Snapshot;
use medialib_client::{Playlist, Song, User};
use serde::Serialize;

/// Matches of one query, grouped by entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub users: Vec<User>,
    pub songs: Vec<Song>,
    pub playlists: Vec<Playlist>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.songs.is_empty() && self.playlists.is_empty()
    }

    pub fn total(&self) -> usize {
        self.users.len() + self.songs.len() + self.playlists.len()
    }
}

/// Case-insensitive substring search over a snapshot.
///
/// Users match on username, songs on title or artist, playlists on name.
/// A blank query matches nothing.
pub fn search(snapshot: &Snapshot, query: &str) -> SearchResults {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchResults::default();
    }
    let hit = |text: &str| text.to_lowercase().contains(&needle);

    SearchResults {
        users: snapshot
            .users
            .iter()
            .filter(|u| hit(&u.username))
            .cloned()
            .collect(),
        songs: snapshot
            .songs
            .iter()
            .filter(|s| hit(&s.title) || hit(&s.artist))
            .cloned()
            .collect(),
        playlists: snapshot
            .playlists
            .iter()
            .filter(|p| hit(&p.name))
            .cloned()
            .collect(),
    }
}
