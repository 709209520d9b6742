//! Shared helper utilities for factory methods.
//!
//! Provides unique id generation for factory defaults and convenience methods
//! for creating entities together with their dependencies.

use entity::{
    study_member::{StudyMemberRole, StudyMemberStatus},
    vote::VoteMode,
};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an author and a post written by them.
///
/// # Returns
/// - `Ok((author, post))` - Created member and post
/// - `Err(DbErr)` - Database error during creation
pub async fn create_post_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::member::Model, entity::post::Model), DbErr> {
    let author = crate::factory::member::create_member(db).await?;
    let post = crate::factory::post::create_post(db, author.id).await?;

    Ok((author, post))
}

/// Creates a single-choice vote on a post with one option per name.
///
/// Options are inserted in the order given, so their ids ascend with the slice.
///
/// # Arguments
/// - `db` - Database connection
/// - `post_id` - Post the vote is attached to
/// - `names` - Option names
///
/// # Returns
/// - `Ok((vote, options))` - Created vote and its options
/// - `Err(DbErr)` - Database error during creation
pub async fn create_vote_with_options(
    db: &DatabaseConnection,
    post_id: i32,
    names: &[&str],
) -> Result<(entity::vote::Model, Vec<entity::vote_option::Model>), DbErr> {
    create_vote_with_mode(db, post_id, VoteMode::Single, names).await
}

/// Creates a vote in the given mode on a post with one option per name.
pub async fn create_vote_with_mode(
    db: &DatabaseConnection,
    post_id: i32,
    mode: VoteMode,
    names: &[&str],
) -> Result<(entity::vote::Model, Vec<entity::vote_option::Model>), DbErr> {
    let vote = crate::factory::vote::VoteFactory::new(db, post_id)
        .mode(mode)
        .build()
        .await?;

    let mut options = Vec::with_capacity(names.len());
    for name in names {
        options.push(
            crate::factory::vote::VoteOptionFactory::new(db, vote.id)
                .name(*name)
                .build()
                .await?,
        );
    }

    Ok((vote, options))
}

/// Creates a study led by a freshly created member.
///
/// # Returns
/// - `Ok((leader, study, leader_membership))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_study_with_leader(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::member::Model,
        entity::study::Model,
        entity::study_member::Model,
    ),
    DbErr,
> {
    let leader = crate::factory::member::create_member(db).await?;
    let study = crate::factory::study::create_study(db).await?;
    let membership = crate::factory::study::StudyMemberFactory::new(db, study.id, leader.id)
        .status(StudyMemberStatus::Joined)
        .role(StudyMemberRole::Leader)
        .build()
        .await?;

    Ok((leader, study, membership))
}
