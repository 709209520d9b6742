//! Wire DTOs shared by the HTTP layer and API documentation.

pub mod api;
pub mod board;
pub mod file;
pub mod member;
pub mod reply;
pub mod study;
pub mod vote;
