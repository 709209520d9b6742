//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entities into these models at the data boundary and
//! controllers convert them into DTOs with `into_dto()`. Parameter structs carry the
//! validated input of a single service operation.

pub mod file;
pub mod member;
pub mod post;
pub mod reply;
pub mod study;
pub mod vote;
