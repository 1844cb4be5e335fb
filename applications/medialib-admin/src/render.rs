//! Plain-text and JSON output for the admin commands.

use anyhow::Result;
use medialib_client::{Playlist, Song, User};
use medialib_sync::{ReloadSummary, SearchResults};
use serde::Serialize;

pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn users(users: &[User]) {
    if users.is_empty() {
        println!("No users");
        return;
    }
    for user in users {
        let playlists: Vec<&str> = user.playlists.iter().map(|p| p.name.as_str()).collect();
        println!("{:>6}  {:<24}  {}", user.id, user.username, playlists.join(", "));
    }
}

pub fn songs(songs: &[Song]) {
    if songs.is_empty() {
        println!("No songs");
        return;
    }
    for song in songs {
        println!(
            "{:>6}  {:<32}  {:<20}  [{}]  {}",
            song.id,
            song.title,
            song.artist,
            song.playlist_names.join(", "),
            song.user_names.join(", ")
        );
    }
}

pub fn playlists(playlists: &[Playlist]) {
    if playlists.is_empty() {
        println!("No playlists");
        return;
    }
    for playlist in playlists {
        println!(
            "{:>6}  {:<24}  {:<16}  {}",
            playlist.id,
            playlist.name,
            playlist.username,
            playlist.song_titles.join(", ")
        );
    }
}

pub fn search(results: &SearchResults) {
    if results.is_empty() {
        println!("Nothing found");
        return;
    }
    if !results.users.is_empty() {
        println!("Users:");
        users(&results.users);
    }
    if !results.songs.is_empty() {
        println!("Songs:");
        songs(&results.songs);
    }
    if !results.playlists.is_empty() {
        println!("Playlists:");
        playlists(&results.playlists);
    }
}

pub fn summary(summary: &ReloadSummary) {
    println!(
        "{} users, {} songs, {} playlists ({} orphans pruned, {} deletes failed)",
        summary.users,
        summary.songs,
        summary.playlists,
        summary.orphans_pruned,
        summary.orphan_delete_failures
    );
}
