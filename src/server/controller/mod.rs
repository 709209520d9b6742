//! HTTP request handlers.
//!
//! Each handler resolves the caller through `AuthGuard`, converts the request DTO
//! into service parameters, calls one service operation and wraps the result in
//! the `ApiResponse` envelope.

pub mod auth;
pub mod board;
pub mod file;
pub mod reply;
pub mod study;
pub mod vote;
