//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM queries for one table (or one aggregate) and convert
//! entities into domain models at this boundary. Every repository is generic over
//! `ConnectionTrait`, so services can run the same repository against the pool or
//! inside a `DatabaseTransaction` for multi-step writes.

pub mod file;
pub mod member;
pub mod post;
pub mod reply;
pub mod report;
pub mod study;
pub mod vote;

#[cfg(test)]
mod test;
