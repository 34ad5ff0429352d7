//! Domain layer: the board entity and paging types.
//!
//! This module contains the board record itself (builder construction,
//! the title/content mutation contract, audit timestamps) and the
//! paging vocabulary consumed by the store's listing operation.

pub mod board;
pub mod page;

pub use board::{Board, BoardBuilder};
pub use page::{Page, PageRequest, SortDirection, SortField};
