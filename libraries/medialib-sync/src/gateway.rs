//! Seam between the controller and the network.

use async_trait::async_trait;
use medialib_client::{
    MediaLibraryClient, NewPlaylist, NewSong, Playlist, PlaylistUpdate, Result, Song, SongUpdate,
    User, UserUpdate,
};

/// Typed access to the media library API.
///
/// `LibraryManager` only talks to the network through this trait so it can
/// be driven by a mock in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LibraryGateway: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>>;

    async fn fetch_playlists(&self) -> Result<Vec<Playlist>>;

    /// Songs with cross-references derived from the playlists fetched alongside.
    async fn fetch_songs(&self) -> Result<Vec<Song>>;

    async fn songs_by_artist(&self, artist: String) -> Result<Vec<Song>>;

    async fn create_user(&self, username: String) -> Result<User>;

    async fn create_song(&self, song: NewSong) -> Result<Song>;

    async fn create_playlist(&self, playlist: NewPlaylist) -> Result<Playlist>;

    async fn update_user(&self, user_id: i64, update: UserUpdate) -> Result<()>;

    async fn update_song(&self, song_id: i64, update: SongUpdate) -> Result<Song>;

    async fn update_playlist(&self, playlist_id: i64, update: PlaylistUpdate) -> Result<Playlist>;

    async fn delete_user(&self, user_id: i64) -> Result<()>;

    async fn delete_song(&self, song_id: i64) -> Result<()>;

    async fn delete_playlist(&self, playlist_id: i64) -> Result<()>;

    async fn add_songs_to_playlist(&self, playlist_id: i64, song_ids: Vec<i64>) -> Result<()>;
}

#[async_trait]
impl LibraryGateway for MediaLibraryClient {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        self.users().list().await
    }

    async fn fetch_playlists(&self) -> Result<Vec<Playlist>> {
        self.playlists().list().await
    }

    async fn fetch_songs(&self) -> Result<Vec<Song>> {
        self.songs().list().await
    }

    async fn songs_by_artist(&self, artist: String) -> Result<Vec<Song>> {
        self.songs().by_artist(&artist).await
    }

    async fn create_user(&self, username: String) -> Result<User> {
        self.users().create(&username).await
    }

    async fn create_song(&self, song: NewSong) -> Result<Song> {
        self.songs().create(&song).await
    }

    async fn create_playlist(&self, playlist: NewPlaylist) -> Result<Playlist> {
        self.playlists().create(&playlist).await
    }

    async fn update_user(&self, user_id: i64, update: UserUpdate) -> Result<()> {
        self.users().update(user_id, &update).await
    }

    async fn update_song(&self, song_id: i64, update: SongUpdate) -> Result<Song> {
        self.songs().update(song_id, &update).await
    }

    async fn update_playlist(&self, playlist_id: i64, update: PlaylistUpdate) -> Result<Playlist> {
        self.playlists().update(playlist_id, &update).await
    }

    async fn delete_user(&self, user_id: i64) -> Result<()> {
        self.users().delete(user_id).await
    }

    async fn delete_song(&self, song_id: i64) -> Result<()> {
        self.songs().delete(song_id).await
    }

    async fn delete_playlist(&self, playlist_id: i64) -> Result<()> {
        self.playlists().delete(playlist_id).await
    }

    async fn add_songs_to_playlist(&self, playlist_id: i64, song_ids: Vec<i64>) -> Result<()> {
        self.playlists().add_songs(playlist_id, &song_ids).await
    }
}
