//! Data Transfer Objects for REST request/response serialization.

pub mod board_dto;
pub mod common_dto;

pub use board_dto::*;
pub use common_dto::*;
