//! PostgreSQL implementation of the board store.
//!
//! Rows live in the `board` table (see `migrations/`). The upsert is a
//! single `INSERT .. ON CONFLICT DO UPDATE` statement, so concurrent
//! saves to the same identity serialize at the row and the last writer
//! wins. Sort field and direction are rendered from the enumerated
//! types, never from raw request input.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::BoardStore;
use crate::domain::{Board, Page, PageRequest};
use crate::error::BoardError;

type BoardRow = (i64, String, String, String, DateTime<Utc>, DateTime<Utc>);

/// Board store backed by PostgreSQL via `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresBoardStore {
    pool: PgPool,
}

impl PostgresBoardStore {
    /// Creates a store over the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies pending migrations from the `migrations/` directory.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), BoardError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| BoardError::Storage(e.to_string()))
    }
}

fn from_row(row: BoardRow) -> Board {
    let (bno, title, content, writer, created_at, modified_at) = row;
    Board::stored(bno, title, content, writer, created_at, modified_at)
}

#[async_trait]
impl BoardStore for PostgresBoardStore {
    async fn save(&self, board: Board, now: DateTime<Utc>) -> Result<Board, BoardError> {
        let row = match board.bno() {
            None => {
                sqlx::query_as::<_, BoardRow>(
                    "INSERT INTO board (title, content, writer, created_at, modified_at) \
                     VALUES ($1, $2, $3, $4, $4) \
                     RETURNING bno, title, content, writer, created_at, modified_at",
                )
                .bind(board.title())
                .bind(board.content())
                .bind(board.writer())
                .bind(now)
                .fetch_one(&self.pool)
                .await?
            }
            Some(bno) => {
                // Keyed upsert: created_at stays untouched on conflict.
                sqlx::query_as::<_, BoardRow>(
                    "INSERT INTO board (bno, title, content, writer, created_at, modified_at) \
                     VALUES ($1, $2, $3, $4, $5, $5) \
                     ON CONFLICT (bno) DO UPDATE \
                     SET title = EXCLUDED.title, \
                         content = EXCLUDED.content, \
                         writer = EXCLUDED.writer, \
                         modified_at = EXCLUDED.modified_at \
                     RETURNING bno, title, content, writer, created_at, modified_at",
                )
                .bind(bno)
                .bind(board.title())
                .bind(board.content())
                .bind(board.writer())
                .bind(now)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(from_row(row))
    }

    async fn find_by_id(&self, bno: i64) -> Result<Option<Board>, BoardError> {
        let row = sqlx::query_as::<_, BoardRow>(
            "SELECT bno, title, content, writer, created_at, modified_at \
             FROM board WHERE bno = $1",
        )
        .bind(bno)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(from_row))
    }

    async fn delete_by_id(&self, bno: i64) -> Result<(), BoardError> {
        // Idempotent: zero rows affected is still success.
        sqlx::query("DELETE FROM board WHERE bno = $1")
            .bind(bno)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<Board>, BoardError> {
        // Column and keyword come from the enumerated types, so the
        // formatted ORDER BY cannot carry request input. bno is the
        // deterministic tie-break within a call.
        let query = format!(
            "SELECT bno, title, content, writer, created_at, modified_at \
             FROM board ORDER BY {} {}, bno {} LIMIT $1 OFFSET $2",
            request.sort().column(),
            request.direction().keyword(),
            request.direction().keyword(),
        );

        let rows = sqlx::query_as::<_, BoardRow>(&query)
            .bind(i64::from(request.size()))
            .bind(i64::try_from(request.offset()).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(bno) FROM board")
            .fetch_one(&self.pool)
            .await?;

        let content = rows.into_iter().map(from_row).collect();
        Ok(Page::new(content, request, total.unsigned_abs()))
    }
}
