/// Media library admin - manage users, songs and playlists from the terminal
mod config;
mod render;

use clap::{Parser, Subcommand};
use config::AdminConfig;
use medialib_client::MediaLibraryClient;
use medialib_sync::{
    EntityEdit, EntityKind, LibraryManager, PlaylistDraft, PlaylistEdit, SongDraft, SongEdit,
    UserDraft, UserEdit,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "medialib-admin")]
#[command(about = "Administer users, songs and playlists of a media library", long_about = None)]
struct Cli {
    /// API base URL (overrides configuration)
    #[arg(long, env = "MEDIALIB_API_URL")]
    url: Option<String>,

    /// Print JSON instead of tables
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reload and reconcile the whole library
    Reload,
    /// List users, songs or playlists
    List {
        /// Entity type
        kind: String,
    },
    /// Search usernames, song titles, artists and playlist names
    Search { query: String },
    /// Ask the server for an artist's songs
    ByArtist { artist: String },
    /// Create a new user
    CreateUser {
        #[arg(short, long)]
        username: String,
    },
    /// Create a new song
    CreateSong {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        artist: String,
    },
    /// Create a playlist for a user
    CreatePlaylist {
        #[arg(short, long)]
        name: String,
        #[arg(long)]
        user_id: Option<i64>,
        /// Song title to add (repeatable)
        #[arg(long = "song")]
        songs: Vec<String>,
    },
    /// Rename a user and optionally replace their playlists
    EditUser {
        id: i64,
        #[arg(short, long)]
        username: String,
        /// Playlist name to own (repeatable); omit to keep current playlists
        #[arg(long = "playlist")]
        playlists: Vec<String>,
        /// Remove every playlist from the user
        #[arg(long, conflicts_with = "playlists")]
        clear_playlists: bool,
    },
    /// Change a song's title and artist
    EditSong {
        id: i64,
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        artist: String,
    },
    /// Rename a playlist and optionally replace its songs
    EditPlaylist {
        id: i64,
        #[arg(short, long)]
        name: String,
        /// Song title to hold (repeatable); omit to keep current songs
        #[arg(long = "song")]
        songs: Vec<String>,
        /// Remove every song from the playlist
        #[arg(long, conflicts_with = "songs")]
        clear_songs: bool,
    },
    /// Delete a user, song or playlist
    Delete {
        /// Entity type
        kind: String,
        id: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "medialib_admin=info,medialib_sync=info,medialib_client=warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AdminConfig::load()?;
    if let Some(url) = cli.url.clone() {
        config.api.url = url;
    }
    config.validate()?;

    tracing::debug!(url = %config.api.url, timeout = config.api.timeout, "Using media library API");

    let client = MediaLibraryClient::new(config.client_config())?;
    let manager = LibraryManager::new(client);

    run(&manager, cli.command, cli.json).await
}

async fn run(
    manager: &LibraryManager<MediaLibraryClient>,
    command: Commands,
    json: bool,
) -> anyhow::Result<()> {
    // Every command starts from a freshly reconciled snapshot
    let summary = manager.reload().await?;

    match command {
        Commands::Reload => {
            if json {
                render::json(&summary)?;
            } else {
                render::summary(&summary);
            }
        }
        Commands::List { kind } => {
            let snapshot = manager.snapshot().await;
            match (kind.parse::<EntityKind>()?, json) {
                (EntityKind::User, true) => render::json(&snapshot.users)?,
                (EntityKind::Song, true) => render::json(&snapshot.songs)?,
                (EntityKind::Playlist, true) => render::json(&snapshot.playlists)?,
                (EntityKind::User, false) => render::users(&snapshot.users),
                (EntityKind::Song, false) => render::songs(&snapshot.songs),
                (EntityKind::Playlist, false) => render::playlists(&snapshot.playlists),
            }
        }
        Commands::Search { query } => {
            let results = manager.search(&query).await;
            if json {
                render::json(&results)?;
            } else {
                render::search(&results);
            }
        }
        Commands::ByArtist { artist } => {
            let songs = manager.songs_by_artist(&artist).await?;
            if json {
                render::json(&songs)?;
            } else {
                render::songs(&songs);
            }
        }
        Commands::CreateUser { username } => {
            let user = manager.create_user(UserDraft { username }).await?;
            println!("Created user {} ({})", user.username, user.id);
        }
        Commands::CreateSong { title, artist } => {
            let song = manager.create_song(SongDraft { title, artist }).await?;
            println!("Created song {} ({})", song.title, song.id);
        }
        Commands::CreatePlaylist {
            name,
            user_id,
            songs,
        } => {
            let playlist = manager
                .create_playlist(PlaylistDraft {
                    name,
                    user_id,
                    song_titles: songs,
                })
                .await?;
            println!("Created playlist {} ({})", playlist.name, playlist.id);
        }
        Commands::EditUser {
            id,
            username,
            playlists,
            clear_playlists,
        } => {
            let edit = UserEdit {
                username,
                playlist_names: replacement(playlists, clear_playlists),
            };
            manager.update(EntityEdit::User { id, edit }).await?;
            println!("Updated user {}", id);
        }
        Commands::EditSong { id, title, artist } => {
            let edit = SongEdit { title, artist };
            manager.update(EntityEdit::Song { id, edit }).await?;
            println!("Updated song {}", id);
        }
        Commands::EditPlaylist {
            id,
            name,
            songs,
            clear_songs,
        } => {
            let edit = PlaylistEdit {
                name,
                song_titles: replacement(songs, clear_songs),
            };
            manager.update(EntityEdit::Playlist { id, edit }).await?;
            println!("Updated playlist {}", id);
        }
        Commands::Delete { kind, id } => {
            let kind = kind.parse::<EntityKind>()?;
            manager.delete(kind, id).await?;
            println!("Deleted {} {}", kind, id);
        }
    }

    Ok(())
}

/// New contents for a replaceable list. An omitted repeatable flag means
/// "leave unchanged" unless clearing was asked for.
fn replacement(values: Vec<String>, clear: bool) -> Option<Vec<String>> {
    if clear {
        Some(Vec::new())
    } else if values.is_empty() {
        None
    } else {
        Some(values)
    }
}
