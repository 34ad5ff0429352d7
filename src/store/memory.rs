//! In-memory board store.
//!
//! Keeps rows in a `BTreeMap` behind a `tokio::sync::RwLock`, with a
//! monotonic identity sequence guarded by the same lock. Reads run
//! concurrently; writes are serialized, which makes concurrent saves to
//! the same identity last-writer-wins. Used by the test suite and when
//! the service runs without a database.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::BoardStore;
use crate::domain::{Board, Page, PageRequest, SortDirection, SortField};
use crate::error::BoardError;

#[derive(Debug, Default)]
struct Inner {
    rows: BTreeMap<i64, Board>,
    last_bno: i64,
}

/// Board store backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryBoardStore {
    inner: RwLock<Inner>,
}

impl MemoryBoardStore {
    /// Creates an empty store. The first insert is assigned identity 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored boards.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    /// Returns `true` if the store holds no boards.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.rows.is_empty()
    }
}

#[async_trait]
impl BoardStore for MemoryBoardStore {
    async fn save(&self, board: Board, now: DateTime<Utc>) -> Result<Board, BoardError> {
        let mut inner = self.inner.write().await;
        let stored = match board.bno() {
            None => {
                inner.last_bno += 1;
                let bno = inner.last_bno;
                Board::stored(
                    bno,
                    board.title().to_string(),
                    board.content().to_string(),
                    board.writer().to_string(),
                    now,
                    now,
                )
            }
            Some(bno) => {
                // Keep the stored created_at on update; fall back to the
                // board's own (or now) when upserting an unknown identity.
                let created_at = inner
                    .rows
                    .get(&bno)
                    .and_then(Board::created_at)
                    .or_else(|| board.created_at())
                    .unwrap_or(now);
                inner.last_bno = inner.last_bno.max(bno);
                Board::stored(
                    bno,
                    board.title().to_string(),
                    board.content().to_string(),
                    board.writer().to_string(),
                    created_at,
                    now,
                )
            }
        };
        if let Some(bno) = stored.bno() {
            inner.rows.insert(bno, stored.clone());
        }
        Ok(stored)
    }

    async fn find_by_id(&self, bno: i64) -> Result<Option<Board>, BoardError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.get(&bno).cloned())
    }

    async fn delete_by_id(&self, bno: i64) -> Result<(), BoardError> {
        let mut inner = self.inner.write().await;
        inner.rows.remove(&bno);
        Ok(())
    }

    async fn find_page(&self, request: &PageRequest) -> Result<Page<Board>, BoardError> {
        let inner = self.inner.read().await;
        let total = inner.rows.len() as u64;

        // Snapshot, then stable-sort: rows iterate in bno order, so
        // equal sort-field values keep a deterministic tie-break.
        let mut rows: Vec<Board> = inner.rows.values().cloned().collect();
        drop(inner);
        rows.sort_by(|a, b| compare(a, b, request.sort(), request.direction()));

        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let content: Vec<Board> = rows
            .into_iter()
            .skip(offset)
            .take(request.size() as usize)
            .collect();

        Ok(Page::new(content, request, total))
    }
}

fn compare(a: &Board, b: &Board, field: SortField, direction: SortDirection) -> Ordering {
    let ord = match field {
        SortField::Bno => a.bno().cmp(&b.bno()),
        SortField::Title => a.title().cmp(b.title()),
        SortField::Writer => a.writer().cmp(b.writer()),
        SortField::CreatedAt => a.created_at().cmp(&b.created_at()),
        SortField::ModifiedAt => a.modified_at().cmp(&b.modified_at()),
    };
    match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn draft(i: i64) -> Board {
        let Ok(board) = Board::builder()
            .title(format!("title...{i}"))
            .content(format!("content...{i}"))
            .writer(format!("user{}", i % 10))
            .build()
        else {
            panic!("valid board");
        };
        board
    }

    async fn seed(store: &MemoryBoardStore, count: i64) {
        let now = Utc::now();
        for i in 1..=count {
            let Ok(_) = store.save(draft(i), now).await else {
                panic!("save failed");
            };
        }
    }

    fn page_request(page: u32, size: u32) -> PageRequest {
        let Ok(req) = PageRequest::of(page, size, SortField::Bno, SortDirection::Descending)
        else {
            panic!("valid request");
        };
        req
    }

    #[tokio::test]
    async fn insert_assigns_identity_and_equal_timestamps() {
        let store = MemoryBoardStore::new();
        let now = Utc::now();

        let Ok(stored) = store.save(draft(1), now).await else {
            panic!("save failed");
        };

        assert_eq!(stored.bno(), Some(1));
        assert_eq!(stored.created_at(), Some(now));
        assert_eq!(stored.modified_at(), Some(now));
    }

    #[tokio::test]
    async fn identities_are_sequential() {
        let store = MemoryBoardStore::new();
        seed(&store, 3).await;

        let Ok(stored) = store.save(draft(4), Utc::now()).await else {
            panic!("save failed");
        };
        assert_eq!(stored.bno(), Some(4));
    }

    #[tokio::test]
    async fn find_by_id_returns_inserted_fields() {
        let store = MemoryBoardStore::new();
        let now = Utc::now();
        let Ok(stored) = store.save(draft(1), now).await else {
            panic!("save failed");
        };

        let Ok(Some(found)) = store.find_by_id(1).await else {
            panic!("expected a row");
        };
        assert_eq!(found, stored);
    }

    #[tokio::test]
    async fn find_by_id_on_unknown_identity_is_none() {
        let store = MemoryBoardStore::new();
        let Ok(found) = store.find_by_id(100).await else {
            panic!("lookup failed");
        };
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn update_preserves_identity_and_created_at() {
        let store = MemoryBoardStore::new();
        let t0 = Utc::now();
        let Ok(mut stored) = store.save(draft(1), t0).await else {
            panic!("save failed");
        };

        stored.change("updated title", "updated content");
        let t1 = t0 + Duration::seconds(5);
        let Ok(updated) = store.save(stored, t1).await else {
            panic!("save failed");
        };

        assert_eq!(updated.bno(), Some(1));
        assert_eq!(updated.created_at(), Some(t0));
        assert_eq!(updated.modified_at(), Some(t1));
        assert_eq!(updated.title(), "updated title");
    }

    #[tokio::test]
    async fn delete_then_find_is_none_and_redelete_is_noop() {
        let store = MemoryBoardStore::new();
        seed(&store, 1).await;
        assert_eq!(store.len().await, 1);

        let Ok(()) = store.delete_by_id(1).await else {
            panic!("delete failed");
        };
        assert!(store.is_empty().await);
        let Ok(found) = store.find_by_id(1).await else {
            panic!("lookup failed");
        };
        assert!(found.is_none());

        // Second delete of the same identity is not an error.
        let Ok(()) = store.delete_by_id(1).await else {
            panic!("repeat delete failed");
        };
    }

    #[tokio::test]
    async fn deleted_identity_is_not_reused() {
        let store = MemoryBoardStore::new();
        seed(&store, 2).await;
        let Ok(()) = store.delete_by_id(2).await else {
            panic!("delete failed");
        };

        let Ok(stored) = store.save(draft(3), Utc::now()).await else {
            panic!("save failed");
        };
        assert_eq!(stored.bno(), Some(3));
    }

    #[tokio::test]
    async fn first_page_of_hundred_descending_by_bno() {
        let store = MemoryBoardStore::new();
        seed(&store, 100).await;

        let Ok(page) = store.find_page(&page_request(0, 10)).await else {
            panic!("paging failed");
        };

        assert_eq!(page.total_elements(), 100);
        assert_eq!(page.total_pages(), 10);
        assert!(page.has_next());
        assert!(page.is_first());

        let bnos: Vec<i64> = page.content().iter().filter_map(Board::bno).collect();
        assert_eq!(bnos, vec![100, 99, 98, 97, 96, 95, 94, 93, 92, 91]);
    }

    #[tokio::test]
    async fn last_page_has_no_next() {
        let store = MemoryBoardStore::new();
        seed(&store, 100).await;

        let Ok(page) = store.find_page(&page_request(9, 10)).await else {
            panic!("paging failed");
        };
        assert!(!page.has_next());
        assert!(!page.is_first());
        assert_eq!(page.content().len(), 10);
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let store = MemoryBoardStore::new();
        seed(&store, 5).await;

        let Ok(page) = store.find_page(&page_request(3, 10)).await else {
            panic!("paging failed");
        };
        assert!(page.content().is_empty());
        assert_eq!(page.total_elements(), 5);
    }

    #[tokio::test]
    async fn sorting_by_writer_ascending() {
        let store = MemoryBoardStore::new();
        seed(&store, 20).await;

        let Ok(req) = PageRequest::of(0, 20, SortField::Writer, SortDirection::Ascending)
        else {
            panic!("valid request");
        };
        let Ok(page) = store.find_page(&req).await else {
            panic!("paging failed");
        };

        let writers: Vec<&str> = page.content().iter().map(Board::writer).collect();
        let mut sorted = writers.clone();
        sorted.sort_unstable();
        assert_eq!(writers, sorted);
    }

    #[tokio::test]
    async fn equal_sort_keys_tie_break_stably() {
        let store = MemoryBoardStore::new();
        let now = Utc::now();
        for _ in 0..4 {
            let Ok(board) = Board::builder()
                .title("same")
                .content("body")
                .writer("user0")
                .build()
            else {
                panic!("valid board");
            };
            let Ok(_) = store.save(board, now).await else {
                panic!("save failed");
            };
        }

        let Ok(req) = PageRequest::of(0, 10, SortField::Title, SortDirection::Ascending) else {
            panic!("valid request");
        };
        let Ok(page) = store.find_page(&req).await else {
            panic!("paging failed");
        };

        // Stable sort over bno-ordered snapshot keeps insertion order.
        let bnos: Vec<i64> = page.content().iter().filter_map(Board::bno).collect();
        assert_eq!(bnos, vec![1, 2, 3, 4]);
    }
}
