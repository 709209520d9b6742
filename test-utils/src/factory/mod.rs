//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization
//! and a `create_*` convenience function for default creation. Factories do not create
//! parent rows; insert the referenced member, post, vote or study first.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let author = factory::create_member(db).await?;
//! let post = factory::create_post(db, author.id).await?;
//! let (vote, options) = factory::helpers::create_vote_with_options(db, post.id, &["A", "B"]).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let post = factory::post::PostFactory::new(db, author.id)
//!     .title("Weekly sync")
//!     .board_type(BoardType::Notice)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `member` - Create member entities
//! - `post` - Create post entities
//! - `reply` - Create reply entities
//! - `vote` - Create votes, vote options and ballots
//! - `study` - Create studies and study memberships
//! - `helpers` - Unique id generation and multi-entity helpers

pub mod helpers;
pub mod member;
pub mod post;
pub mod reply;
pub mod study;
pub mod vote;

pub use member::create_member;
pub use post::create_post;
pub use reply::{create_child_reply, create_reply};
pub use study::{create_study, create_study_member};
pub use vote::{create_ballot, create_vote, create_vote_option};
