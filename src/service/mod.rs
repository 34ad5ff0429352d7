//! Service layer: business logic orchestration.
//!
//! [`BoardService`] coordinates board operations, delegates persistence
//! to the [`crate::store::BoardStore`] backend, and supplies the clock
//! to the upsert path.

pub mod board_service;

pub use board_service::BoardService;
