use crate::gateway::LibraryGateway;
use medialib_client::{ErrorKind, Playlist};
use tracing::{debug, info, warn};

/// Result of removing orphan playlists from a freshly fetched set
#[derive(Debug, Default)]
pub(crate) struct PruneReport {
    pub kept: Vec<Playlist>,
    /// Orphans deleted on the server, or already gone
    pub pruned: Vec<i64>,
    /// Orphans whose delete failed; excluded from the view all the same
    pub failed: Vec<i64>,
}

/// Delete every orphan playlist, one request at a time, in fetch order.
///
/// Failures are logged and never abort the reload.
pub(crate) async fn prune_orphans<G>(gateway: &G, playlists: Vec<Playlist>) -> PruneReport
where
    G: LibraryGateway + ?Sized,
{
    let mut report = PruneReport::default();

    for playlist in playlists {
        if !playlist.is_orphaned() {
            report.kept.push(playlist);
            continue;
        }

        match gateway.delete_playlist(playlist.id).await {
            Ok(()) => {
                info!(playlist_id = playlist.id, name = %playlist.name, "Deleted orphan playlist");
                report.pruned.push(playlist.id);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(playlist_id = playlist.id, "Orphan playlist already gone");
                report.pruned.push(playlist.id);
            }
            Err(e) => {
                warn!(playlist_id = playlist.id, error = %e, "Failed to delete orphan playlist");
                report.failed.push(playlist.id);
            }
        }
    }

    report
}
