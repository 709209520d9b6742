//! Vote factories for creating votes, vote options and ballots.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use entity::vote::{VoteContext, VoteMode};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test votes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let vote = VoteFactory::new(&db, post.id)
///     .mode(VoteMode::Multiple)
///     .context(VoteContext::Study)
///     .build()
///     .await?;
/// ```
pub struct VoteFactory<'a> {
    db: &'a DatabaseConnection,
    post_id: i32,
    name: String,
    mode: VoteMode,
    context: VoteContext,
    removed: bool,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
}

impl<'a> VoteFactory<'a> {
    /// Creates a new VoteFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Vote {id}"`
    /// - mode: `VoteMode::Single`
    /// - context: `VoteContext::Community`
    /// - window: now until one day from now
    pub fn new(db: &'a DatabaseConnection, post_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            post_id,
            name: format!("Vote {}", next_id()),
            mode: VoteMode::Single,
            context: VoteContext::Community,
            removed: false,
            start_time: now,
            end_time: now + Duration::days(1),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn mode(mut self, mode: VoteMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn context(mut self, context: VoteContext) -> Self {
        self.context = context;
        self
    }

    pub fn removed(mut self, removed: bool) -> Self {
        self.removed = removed;
        self
    }

    /// Builds and inserts the vote entity into the database.
    pub async fn build(self) -> Result<entity::vote::Model, DbErr> {
        entity::vote::ActiveModel {
            id: ActiveValue::NotSet,
            post_id: ActiveValue::Set(self.post_id),
            name: ActiveValue::Set(self.name),
            mode: ActiveValue::Set(self.mode),
            context: ActiveValue::Set(self.context),
            removed: ActiveValue::Set(self.removed),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Factory for creating test vote options.
pub struct VoteOptionFactory<'a> {
    db: &'a DatabaseConnection,
    vote_id: i32,
    name: String,
    removed: bool,
}

impl<'a> VoteOptionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, vote_id: i32) -> Self {
        Self {
            db,
            vote_id,
            name: format!("Option {}", next_id()),
            removed: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn removed(mut self, removed: bool) -> Self {
        self.removed = removed;
        self
    }

    pub async fn build(self) -> Result<entity::vote_option::Model, DbErr> {
        entity::vote_option::ActiveModel {
            id: ActiveValue::NotSet,
            vote_id: ActiveValue::Set(self.vote_id),
            name: ActiveValue::Set(self.name),
            removed: ActiveValue::Set(self.removed),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a single-choice community vote on a post.
pub async fn create_vote(
    db: &DatabaseConnection,
    post_id: i32,
) -> Result<entity::vote::Model, DbErr> {
    VoteFactory::new(db, post_id).build().await
}

/// Creates a vote option with the given name.
pub async fn create_vote_option(
    db: &DatabaseConnection,
    vote_id: i32,
    name: impl Into<String>,
) -> Result<entity::vote_option::Model, DbErr> {
    VoteOptionFactory::new(db, vote_id).name(name).build().await
}

/// Records a ballot for `member_id` on one option of a vote.
pub async fn create_ballot(
    db: &DatabaseConnection,
    member_id: i32,
    vote_id: i32,
    vote_option_id: i32,
) -> Result<entity::vote_ballot::Model, DbErr> {
    entity::vote_ballot::ActiveModel {
        id: ActiveValue::NotSet,
        member_id: ActiveValue::Set(member_id),
        vote_id: ActiveValue::Set(vote_id),
        vote_option_id: ActiveValue::Set(vote_option_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
