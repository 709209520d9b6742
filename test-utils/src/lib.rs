//! Spinner Test Utils
//!
//! Shared testing utilities for the spinner community backend. The crate builds
//! in-memory SQLite databases with only the tables a test needs, an optional
//! tower-sessions `Session` backed by the same database, and factories that insert
//! entities with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: fluent builder for configuring test environments
//! - **TestContext**: test environment holding the database connection and session
//! - **TestError**: errors that can occur during test setup
//! - **factory**: entity factories (members, posts, replies, votes, studies)
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_posts() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_board_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let member = factory::create_member(db).await?;
//!     let post = factory::create_post(db, member.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
