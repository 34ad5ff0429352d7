//! Storage layer: the enumerated board store contract and its backends.
//!
//! [`BoardStore`] is the single persistence seam of the service: an
//! explicit set of four operations (upsert, lookup, delete, paged scan)
//! keyed by board identity. Two backends implement it: an in-memory
//! store used in tests and when no database is configured, and a
//! PostgreSQL store using `sqlx::PgPool` for production.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Board, Page, PageRequest};
use crate::error::BoardError;

pub use memory::MemoryBoardStore;
pub use postgres::PostgresBoardStore;

/// Enumerated persistence operations over [`Board`], keyed by identity.
///
/// Every method is a single atomic request/response against the stored
/// collection; there is no multi-step protocol and no internal retry.
/// The current time is passed into [`BoardStore::save`] explicitly so
/// audit-timestamp assignment is testable rather than ambient.
#[async_trait]
pub trait BoardStore: Send + Sync + std::fmt::Debug {
    /// Upserts a board: insert when it has no identity, update otherwise.
    ///
    /// On insert the store assigns the next identity and sets both audit
    /// timestamps to `now`. On update it rewrites title, content, and
    /// writer, refreshes `modified_at` to `now`, and preserves the
    /// stored `created_at`. Returns the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] on backend failure.
    async fn save(&self, board: Board, now: DateTime<Utc>) -> Result<Board, BoardError>;

    /// Looks up a board by identity.
    ///
    /// `Ok(None)` means no record has that identity (including deleted
    /// ones); it is the recoverable not-found signal, distinct from a
    /// backend failure.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] on backend failure.
    async fn find_by_id(&self, bno: i64) -> Result<Option<Board>, BoardError>;

    /// Deletes a board by identity. Idempotent: deleting an absent
    /// identity succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] on backend failure.
    async fn delete_by_id(&self, bno: i64) -> Result<(), BoardError>;

    /// Returns one ordered page of the full scan described by `request`,
    /// plus total-count metadata taken from the same snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] on backend failure.
    async fn find_page(&self, request: &PageRequest) -> Result<Page<Board>, BoardError>;
}
