//! Board service: orchestrates store operations for the REST layer.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{Board, Page, PageRequest};
use crate::error::BoardError;
use crate::store::BoardStore;

/// Orchestration layer for all board operations.
///
/// Stateless coordinator over a [`BoardStore`] backend. Every mutation
/// follows the pattern: build or load the entity, apply the change,
/// save with the current time passed explicitly. Update resolution is
/// read-then-save, so two concurrent updates of the same board resolve
/// last-writer-wins at the store.
#[derive(Debug, Clone)]
pub struct BoardService {
    store: Arc<dyn BoardStore>,
}

impl BoardService {
    /// Creates a new `BoardService` over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store }
    }

    /// Creates and persists a new board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] on a blank field, or a
    /// storage error from the save.
    pub async fn create_board(
        &self,
        title: &str,
        content: &str,
        writer: &str,
    ) -> Result<Board, BoardError> {
        let board = Board::builder()
            .title(title)
            .content(content)
            .writer(writer)
            .build()?;

        let stored = self.store.save(board, Utc::now()).await?;
        tracing::info!(bno = ?stored.bno(), title = stored.title(), "board created");
        Ok(stored)
    }

    /// Fetches a single board by identity.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::BoardNotFound`] if no board has that
    /// identity, or a storage error from the lookup.
    pub async fn get_board(&self, bno: i64) -> Result<Board, BoardError> {
        self.store
            .find_by_id(bno)
            .await?
            .ok_or(BoardError::BoardNotFound(bno))
    }

    /// Replaces title and content of an existing board and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::BoardNotFound`] if no board has that
    /// identity, or a storage error from the save.
    pub async fn update_board(
        &self,
        bno: i64,
        title: &str,
        content: &str,
    ) -> Result<Board, BoardError> {
        let mut board = self.get_board(bno).await?;
        board.change(title, content);

        let stored = self.store.save(board, Utc::now()).await?;
        tracing::info!(bno, "board updated");
        Ok(stored)
    }

    /// Deletes a board by identity. Deleting an absent identity is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the delete fails.
    pub async fn delete_board(&self, bno: i64) -> Result<(), BoardError> {
        self.store.delete_by_id(bno).await?;
        tracing::info!(bno, "board deleted");
        Ok(())
    }

    /// Returns one ordered page of boards.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the scan fails.
    pub async fn list_boards(&self, request: &PageRequest) -> Result<Page<Board>, BoardError> {
        self.store.find_page(request).await
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{SortDirection, SortField};
    use crate::store::MemoryBoardStore;

    fn make_service() -> BoardService {
        BoardService::new(Arc::new(MemoryBoardStore::new()))
    }

    #[tokio::test]
    async fn create_assigns_identity_and_equal_timestamps() {
        let service = make_service();

        let Ok(board) = service.create_board("title...1", "content...1", "user1").await
        else {
            panic!("create failed");
        };

        assert!(board.is_persisted());
        assert_eq!(board.created_at(), board.modified_at());
    }

    #[tokio::test]
    async fn create_rejects_blank_title() {
        let service = make_service();
        let result = service.create_board("", "content", "user1").await;
        assert!(matches!(result, Err(BoardError::Validation(_))));
    }

    #[tokio::test]
    async fn get_unknown_board_is_not_found() {
        let service = make_service();
        let result = service.get_board(100).await;
        assert!(matches!(result, Err(BoardError::BoardNotFound(100))));
    }

    #[tokio::test]
    async fn update_keeps_identity_and_created_at() {
        let service = make_service();
        let Ok(board) = service.create_board("before", "before", "user1").await else {
            panic!("create failed");
        };
        let Some(bno) = board.bno() else {
            panic!("missing identity");
        };

        let Ok(updated) = service.update_board(bno, "after title", "after content").await
        else {
            panic!("update failed");
        };

        assert_eq!(updated.bno(), Some(bno));
        assert_eq!(updated.created_at(), board.created_at());
        assert_eq!(updated.writer(), "user1");
        assert_eq!(updated.title(), "after title");
        // Equal allowed at clock sub-resolution, never earlier.
        assert!(updated.modified_at() >= updated.created_at());
    }

    #[tokio::test]
    async fn update_unknown_board_is_not_found() {
        let service = make_service();
        let result = service.update_board(42, "t", "c").await;
        assert!(matches!(result, Err(BoardError::BoardNotFound(42))));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let service = make_service();
        let Ok(board) = service.create_board("t", "c", "w").await else {
            panic!("create failed");
        };
        let Some(bno) = board.bno() else {
            panic!("missing identity");
        };

        let Ok(()) = service.delete_board(bno).await else {
            panic!("delete failed");
        };
        assert!(matches!(
            service.get_board(bno).await,
            Err(BoardError::BoardNotFound(_))
        ));

        let Ok(()) = service.delete_board(bno).await else {
            panic!("repeat delete failed");
        };
    }

    #[tokio::test]
    async fn list_pages_hundred_boards_descending() {
        let service = make_service();
        for i in 1..=100 {
            let Ok(_) = service
                .create_board(
                    &format!("title...{i}"),
                    &format!("content...{i}"),
                    &format!("user{}", i % 10),
                )
                .await
            else {
                panic!("create failed");
            };
        }

        let Ok(request) = PageRequest::of(0, 10, SortField::Bno, SortDirection::Descending)
        else {
            panic!("valid request");
        };
        let Ok(page) = service.list_boards(&request).await else {
            panic!("listing failed");
        };

        assert_eq!(page.total_elements(), 100);
        assert_eq!(page.total_pages(), 10);
        assert!(page.has_next());
        assert!(page.is_first());
        assert_eq!(
            page.content().first().and_then(Board::bno),
            Some(100),
        );
    }
}
