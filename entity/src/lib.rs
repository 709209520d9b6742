//! SeaORM entities for the community platform.
//!
//! One module per table. Soft-deleted rows keep their data and carry `removed = true`;
//! status columns are stored as lowercase strings through `DeriveActiveEnum`.

pub mod prelude;

pub mod member;
pub mod post;
pub mod post_report;
pub mod reply;
pub mod study;
pub mod study_member;
pub mod uploaded_file;
pub mod vote;
pub mod vote_ballot;
pub mod vote_option;
