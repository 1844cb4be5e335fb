//! Song ↔ playlist ↔ user cross-references.
//!
//! These fields are never authoritative: they are recomputed from the
//! current playlist collection every time songs are loaded.

use crate::types::{Playlist, Song, NO_USER_PLAYLIST, UNKNOWN_OWNER};
use std::collections::HashSet;

/// Whether `playlist` holds the song with the given id and title.
///
/// Expanded playlists are matched by id only. Title matching is the
/// fallback for playlists the server sent as a bare list of titles.
pub fn contains_song(playlist: &Playlist, song_id: i64, title: &str) -> bool {
    if playlist.songs.is_empty() {
        playlist.song_titles.iter().any(|t| t == title)
    } else {
        playlist.songs.iter().any(|s| s.id == song_id)
    }
}

/// Recompute `playlist_names`, `playlists` and `user_names` for one song.
pub fn link_song(song: &mut Song, playlists: &[Playlist]) {
    let related: Vec<&Playlist> = playlists
        .iter()
        .filter(|p| contains_song(p, song.id, &song.title))
        .collect();

    let mut seen = HashSet::new();
    let mut user_names: Vec<String> = related
        .iter()
        .map(|p| p.username.as_str())
        .filter(|name| !name.is_empty() && *name != UNKNOWN_OWNER)
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect();

    if user_names.is_empty() {
        user_names.push(NO_USER_PLAYLIST.to_string());
    }

    song.playlist_names = related.iter().map(|p| p.name.clone()).collect();
    song.playlists = related.iter().map(|p| p.summary()).collect();
    song.user_names = user_names;
}

/// Recompute the cross-references of every song against `playlists`.
pub fn link_songs(songs: &mut [Song], playlists: &[Playlist]) {
    for song in songs.iter_mut() {
        link_song(song, playlists);
    }
}
