//! The `Board` entity: a single bulletin-board post with audit timestamps.
//!
//! Fields are private so the mutation contract holds: after construction
//! the only in-place mutation is [`Board::change`], which touches title
//! and content and nothing else. Identity and `created_at` are assigned
//! by the store on first save and never reassigned.

use chrono::{DateTime, Utc};

use crate::error::BoardError;

/// A bulletin-board post.
///
/// A board starts life transient: built via [`Board::builder`] with no
/// identity and no timestamps. The first successful save assigns `bno`
/// and both timestamps; from then on `bno` and `created_at` are fixed
/// and every mutating save refreshes `modified_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    bno: Option<i64>,
    title: String,
    content: String,
    writer: String,
    created_at: Option<DateTime<Utc>>,
    modified_at: Option<DateTime<Utc>>,
}

impl Board {
    /// Starts building a transient board.
    #[must_use]
    pub fn builder() -> BoardBuilder {
        BoardBuilder::default()
    }

    /// Reconstructs a persisted board from stored column values.
    ///
    /// Only the store implementations materialize boards this way; the
    /// public construction path is the builder.
    pub(crate) fn stored(
        bno: i64,
        title: String,
        content: String,
        writer: String,
        created_at: DateTime<Utc>,
        modified_at: DateTime<Utc>,
    ) -> Self {
        Self {
            bno: Some(bno),
            title,
            content,
            writer,
            created_at: Some(created_at),
            modified_at: Some(modified_at),
        }
    }

    /// Identity assigned at first save, `None` while transient.
    #[must_use]
    pub fn bno(&self) -> Option<i64> {
        self.bno
    }

    /// Post title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Post body.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Author identifier.
    #[must_use]
    pub fn writer(&self) -> &str {
        &self.writer
    }

    /// First-save timestamp, `None` while transient.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Last mutating-save timestamp, `None` while transient.
    #[must_use]
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        self.modified_at
    }

    /// Returns `true` once an identity has been assigned.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.bno.is_some()
    }

    /// Replaces title and content in place.
    ///
    /// Does not touch `writer`, `bno`, or `created_at`; the caller is
    /// responsible for saving the board afterwards.
    pub fn change(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.title = title.into();
        self.content = content.into();
    }
}

/// Builder for transient [`Board`] instances.
///
/// All three fields are required; [`BoardBuilder::build`] rejects a
/// missing or blank field so an invalid entity can never reach the
/// store.
#[derive(Debug, Default)]
pub struct BoardBuilder {
    title: Option<String>,
    content: Option<String>,
    writer: Option<String>,
}

impl BoardBuilder {
    /// Sets the post title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the post body.
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the author identifier.
    #[must_use]
    pub fn writer(mut self, writer: impl Into<String>) -> Self {
        self.writer = Some(writer.into());
        self
    }

    /// Finishes the build.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] if any field was never set or
    /// is blank.
    pub fn build(self) -> Result<Board, BoardError> {
        let title = require("title", self.title)?;
        let content = require("content", self.content)?;
        let writer = require("writer", self.writer)?;
        Ok(Board {
            bno: None,
            title,
            content,
            writer,
            created_at: None,
            modified_at: None,
        })
    }
}

fn require(field: &str, value: Option<String>) -> Result<String, BoardError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(BoardError::Validation(format!("{field} must not be blank"))),
        None => Err(BoardError::Validation(format!("{field} is required"))),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn builder_produces_transient_board() {
        let Ok(board) = Board::builder()
            .title("first post")
            .content("hello board")
            .writer("user1")
            .build()
        else {
            panic!("valid board");
        };

        assert_eq!(board.title(), "first post");
        assert_eq!(board.content(), "hello board");
        assert_eq!(board.writer(), "user1");
        assert!(board.bno().is_none());
        assert!(board.created_at().is_none());
        assert!(board.modified_at().is_none());
        assert!(!board.is_persisted());
    }

    #[test]
    fn builder_rejects_missing_field() {
        let result = Board::builder().title("t").content("c").build();
        assert!(matches!(result, Err(BoardError::Validation(_))));
    }

    #[test]
    fn builder_rejects_blank_field() {
        let result = Board::builder()
            .title("   ")
            .content("c")
            .writer("w")
            .build();
        assert!(matches!(result, Err(BoardError::Validation(_))));
    }

    #[test]
    fn change_leaves_writer_and_audit_alone() {
        let now = Utc::now();
        let mut board = Board::stored(
            7,
            "old title".to_string(),
            "old content".to_string(),
            "user3".to_string(),
            now,
            now,
        );

        board.change("new title", "new content");

        assert_eq!(board.title(), "new title");
        assert_eq!(board.content(), "new content");
        assert_eq!(board.writer(), "user3");
        assert_eq!(board.bno(), Some(7));
        assert_eq!(board.created_at(), Some(now));
    }
}
