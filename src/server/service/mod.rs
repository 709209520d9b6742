//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They take the caller's member id as an argument, enforce ownership and
//! membership rules, and coordinate repository calls. Multi-step writes run inside
//! a single `DatabaseTransaction` that is only committed once every step succeeded.

pub mod board;
pub mod file;
pub mod member;
pub mod reply;
pub mod study;
pub mod vote;

#[cfg(test)]
mod test;
