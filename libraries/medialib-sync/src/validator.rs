//! Local field checks run before any request leaves the process.

use crate::error::{Result, SyncError};
use crate::types::{PlaylistDraft, PlaylistEdit, SongDraft, SongEdit, UserDraft, UserEdit};

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_ARTIST_LEN: usize = 50;
pub const MAX_PLAYLIST_NAME_LEN: usize = 100;

/// Collects every violation so they can be reported together
#[derive(Default)]
struct Violations(Vec<String>);

impl Violations {
    fn text(&mut self, field: &str, value: &str, max_len: Option<usize>) -> &mut Self {
        if value.trim().is_empty() {
            self.0.push(format!("Field \"{}\" must not be empty", field));
        } else if let Some(max) = max_len {
            if value.chars().count() > max {
                self.0
                    .push(format!("Field \"{}\" must be at most {} characters", field, max));
            }
        }
        self
    }

    fn id(&mut self, field: &str, value: Option<i64>) -> &mut Self {
        match value {
            None => self.0.push(format!("Field \"{}\" is required", field)),
            Some(id) if id <= 0 => self
                .0
                .push(format!("Field \"{}\" must be a positive number", field)),
            Some(_) => {}
        }
        self
    }

    fn finish(&mut self) -> Result<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(SyncError::Validation(std::mem::take(&mut self.0)))
        }
    }
}

pub fn validate_user_draft(draft: &UserDraft) -> Result<()> {
    Violations::default()
        .text("username", &draft.username, None)
        .finish()
}

pub fn validate_song_draft(draft: &SongDraft) -> Result<()> {
    Violations::default()
        .text("title", &draft.title, Some(MAX_TITLE_LEN))
        .text("artist", &draft.artist, Some(MAX_ARTIST_LEN))
        .finish()
}

/// Returns the owner id once the draft is valid.
pub fn validate_playlist_draft(draft: &PlaylistDraft) -> Result<i64> {
    Violations::default()
        .text("name", &draft.name, Some(MAX_PLAYLIST_NAME_LEN))
        .id("userId", draft.user_id)
        .finish()?;
    Ok(draft.user_id.unwrap_or_default())
}

pub fn validate_user_edit(edit: &UserEdit) -> Result<()> {
    Violations::default()
        .text("username", &edit.username, None)
        .finish()
}

pub fn validate_song_edit(edit: &SongEdit) -> Result<()> {
    Violations::default()
        .text("title", &edit.title, Some(MAX_TITLE_LEN))
        .text("artist", &edit.artist, Some(MAX_ARTIST_LEN))
        .finish()
}

pub fn validate_playlist_edit(edit: &PlaylistEdit) -> Result<()> {
    Violations::default()
        .text("name", &edit.name, Some(MAX_PLAYLIST_NAME_LEN))
        .finish()
}

/// Free-text argument such as an artist name.
pub fn validate_query(field: &str, value: &str) -> Result<()> {
    Violations::default().text(field, value, None).finish()
}
