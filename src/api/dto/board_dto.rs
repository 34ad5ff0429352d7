//! Board DTOs for create, get, update, and list operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common_dto::PageMeta;
use crate::domain::Board;

/// Request body for `POST /boards`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBoardRequest {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Author identifier.
    pub writer: String,
}

/// Request body for `PUT /boards/{bno}`.
///
/// Only title and content are mutable; writer is fixed at creation.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBoardRequest {
    /// Replacement title.
    pub title: String,
    /// Replacement body.
    pub content: String,
}

/// A single board in API responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct BoardResponse {
    /// Board identity. Always present for persisted boards.
    pub bno: Option<i64>,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Author identifier.
    pub writer: String,
    /// First-save timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Last-save timestamp.
    pub modified_at: Option<DateTime<Utc>>,
}

impl From<Board> for BoardResponse {
    fn from(board: Board) -> Self {
        Self {
            bno: board.bno(),
            created_at: board.created_at(),
            modified_at: board.modified_at(),
            title: board.title().to_string(),
            content: board.content().to_string(),
            writer: board.writer().to_string(),
        }
    }
}

/// Paginated list response for `GET /boards`.
#[derive(Debug, Serialize, ToSchema)]
pub struct BoardListResponse {
    /// Boards in the requested order.
    pub data: Vec<BoardResponse>,
    /// Paging metadata.
    pub pagination: PageMeta,
}
