//! # board-gateway
//!
//! REST API gateway for a bulletin-board service.
//!
//! This crate exposes CRUD and paginated listing over a single `Board`
//! entity. Persistence goes through one enumerated storage contract
//! (`BoardStore`) with an in-memory backend for tests and development
//! and a PostgreSQL backend for production.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── BoardService (service/)
//!     │
//!     ├── BoardStore (store/)
//!     │     ├── MemoryBoardStore
//!     │     └── PostgresBoardStore (sqlx)
//!     │
//!     └── Board, Page (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod store;
