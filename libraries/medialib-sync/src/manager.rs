use crate::{
    cleaner,
    error::Result,
    gateway::LibraryGateway,
    search::{self, SearchResults},
    types::{
        EntityEdit, EntityKind, PlaylistDraft, ReloadPhase, ReloadSummary, Snapshot, SongDraft,
        UserDraft,
    },
    validator,
};
use medialib_client::{
    relations, NewPlaylist, NewSong, Playlist, PlaylistUpdate, Song, SongUpdate, User, UserUpdate,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info};

/// Owns the in-memory library and routes every mutation through a full reload
///
/// Reloads are serialized: a second `reload` issued while one is in flight
/// waits for it and then runs on its own, so two overlapping calls end in the
/// same snapshot as two sequential ones. The snapshot is swapped as a whole
/// at commit time; readers never see a half-reconciled state.
pub struct LibraryManager<G> {
    gateway: G,
    snapshot: RwLock<Arc<Snapshot>>,
    phase: RwLock<ReloadPhase>,
    reload_guard: Mutex<()>,
}

impl<G: LibraryGateway> LibraryManager<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            snapshot: RwLock::new(Arc::new(Snapshot::default())),
            phase: RwLock::new(ReloadPhase::Idle),
            reload_guard: Mutex::new(()),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Last committed snapshot
    pub async fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&*self.snapshot.read().await)
    }

    pub async fn phase(&self) -> ReloadPhase {
        *self.phase.read().await
    }

    /// Fetch everything, prune orphan playlists, re-derive cross-references
    /// and commit the result as the new snapshot.
    pub async fn reload(&self) -> Result<ReloadSummary> {
        let _guard = self.reload_guard.lock().await;
        let start_time = Instant::now();

        // Phase 1: Fetching
        self.set_phase(ReloadPhase::Fetching).await;
        debug!("Reload phase 1: fetching songs, users and playlists");
        let fetched = tokio::try_join!(
            self.gateway.fetch_songs(),
            self.gateway.fetch_users(),
            self.gateway.fetch_playlists(),
        );
        let (mut songs, users, playlists) = match fetched {
            Ok(fetched) => fetched,
            Err(e) => {
                error!("Reload aborted, fetch failed: {}", e);
                self.set_phase(ReloadPhase::Failed).await;
                return Err(e.into());
            }
        };

        // Phase 2: Pruning
        self.set_phase(ReloadPhase::Pruning).await;
        debug!(playlists = playlists.len(), "Reload phase 2: pruning orphan playlists");
        let report = cleaner::prune_orphans(&self.gateway, playlists).await;
        relations::link_songs(&mut songs, &report.kept);

        // Phase 3: Committed
        let snapshot = Snapshot {
            users,
            songs,
            playlists: report.kept,
        };
        let summary = ReloadSummary {
            users: snapshot.users.len(),
            songs: snapshot.songs.len(),
            playlists: snapshot.playlists.len(),
            orphans_pruned: report.pruned.len() + report.failed.len(),
            orphan_delete_failures: report.failed.len(),
            committed_at: chrono::Utc::now().to_rfc3339(),
            duration_ms: start_time.elapsed().as_millis() as u64,
        };

        *self.snapshot.write().await = Arc::new(snapshot);
        self.set_phase(ReloadPhase::Committed).await;

        info!(
            "Reload committed: {} users, {} songs, {} playlists, {} orphans pruned ({} failed) in {}ms",
            summary.users,
            summary.songs,
            summary.playlists,
            summary.orphans_pruned,
            summary.orphan_delete_failures,
            summary.duration_ms
        );

        Ok(summary)
    }

    pub async fn create_user(&self, draft: UserDraft) -> Result<User> {
        validator::validate_user_draft(&draft)?;

        let user = self.gateway.create_user(draft.username).await?;
        info!(user_id = user.id, username = %user.username, "User created");

        self.reload().await?;
        Ok(user)
    }

    pub async fn create_song(&self, draft: SongDraft) -> Result<Song> {
        validator::validate_song_draft(&draft)?;

        let song = self
            .gateway
            .create_song(NewSong {
                title: draft.title,
                artist: draft.artist,
            })
            .await?;
        info!(song_id = song.id, title = %song.title, "Song created");

        self.reload().await?;
        Ok(song)
    }

    /// Create a playlist, then attach the songs named in the draft.
    ///
    /// Titles are resolved against the last committed snapshot, and every
    /// song carrying a title is attached.
    pub async fn create_playlist(&self, draft: PlaylistDraft) -> Result<Playlist> {
        let user_id = validator::validate_playlist_draft(&draft)?;

        let song_ids = if draft.song_titles.is_empty() {
            Vec::new()
        } else {
            self.resolution_snapshot()
                .await?
                .song_ids_for_titles(&draft.song_titles)
        };

        let playlist = self
            .gateway
            .create_playlist(NewPlaylist {
                name: draft.name,
                user_id,
            })
            .await?;
        info!(playlist_id = playlist.id, user_id, name = %playlist.name, "Playlist created");

        if !song_ids.is_empty() {
            debug!(playlist_id = playlist.id, songs = song_ids.len(), "Attaching initial songs");
            self.gateway
                .add_songs_to_playlist(playlist.id, song_ids)
                .await?;
        }

        self.reload().await?;
        Ok(playlist)
    }

    /// Apply an edit to one entity, then reload.
    ///
    /// Playlist names and song titles are resolved to ids against the last
    /// committed snapshot; names that match nothing are dropped. A title
    /// shared by several songs resolves to the first of them.
    pub async fn update(&self, edit: EntityEdit) -> Result<()> {
        let (kind, entity_id) = (edit.kind(), edit.id());

        match edit {
            EntityEdit::User { id, edit } => {
                validator::validate_user_edit(&edit)?;
                let playlist_ids = match &edit.playlist_names {
                    Some(names) => Some(
                        self.resolution_snapshot()
                            .await?
                            .playlist_ids_for_names(names),
                    ),
                    None => None,
                };
                self.gateway
                    .update_user(
                        id,
                        UserUpdate {
                            username: edit.username,
                            playlist_ids,
                        },
                    )
                    .await?;
            }
            EntityEdit::Song { id, edit } => {
                validator::validate_song_edit(&edit)?;
                self.gateway
                    .update_song(
                        id,
                        SongUpdate {
                            title: edit.title,
                            artist: edit.artist,
                        },
                    )
                    .await?;
            }
            EntityEdit::Playlist { id, edit } => {
                validator::validate_playlist_edit(&edit)?;
                let song_ids = match &edit.song_titles {
                    Some(titles) => Some(
                        self.resolution_snapshot()
                            .await?
                            .first_song_ids_for_titles(titles),
                    ),
                    None => None,
                };
                self.gateway
                    .update_playlist(
                        id,
                        PlaylistUpdate {
                            name: edit.name,
                            song_ids,
                        },
                    )
                    .await?;
            }
        }
        info!(kind = %kind, id = entity_id, "Entity updated");

        self.reload().await?;
        Ok(())
    }

    pub async fn delete(&self, kind: EntityKind, id: i64) -> Result<()> {
        match kind {
            EntityKind::User => self.gateway.delete_user(id).await?,
            EntityKind::Song => self.gateway.delete_song(id).await?,
            EntityKind::Playlist => self.gateway.delete_playlist(id).await?,
        }
        info!(kind = %kind, id, "Entity deleted");

        self.reload().await?;
        Ok(())
    }

    /// Search the last committed snapshot.
    pub async fn search(&self, query: &str) -> SearchResults {
        search::search(&*self.snapshot().await, query)
    }

    /// Ask the server for an artist's songs, linked against committed playlists.
    pub async fn songs_by_artist(&self, artist: &str) -> Result<Vec<Song>> {
        validator::validate_query("artist", artist)?;

        let mut songs = self.gateway.songs_by_artist(artist.to_string()).await?;
        relations::link_songs(&mut songs, &self.snapshot().await.playlists);
        Ok(songs)
    }

    /// Snapshot to resolve names against, loading the library first when
    /// nothing has been committed yet.
    async fn resolution_snapshot(&self) -> Result<Arc<Snapshot>> {
        if self.phase().await == ReloadPhase::Idle {
            debug!("No committed snapshot yet, reloading before resolving names");
            self.reload().await?;
        }
        Ok(self.snapshot().await)
    }

    async fn set_phase(&self, phase: ReloadPhase) {
        *self.phase.write().await = phase;
    }
}
