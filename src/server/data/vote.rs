//! Vote repositories: votes here, options and ballots in submodules.

pub mod ballot;
pub mod option;

use chrono::Utc;
use entity::vote::VoteMode;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::vote::{CreateVoteParams, UpdateVoteParams, Vote};

pub struct VoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VoteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the vote row only; options are created with `VoteOptionRepository`.
    pub async fn create(&self, params: &CreateVoteParams) -> Result<Vote, DbErr> {
        let vote = entity::vote::ActiveModel {
            post_id: ActiveValue::Set(params.post_id),
            name: ActiveValue::Set(params.name.clone()),
            mode: ActiveValue::Set(params.mode),
            context: ActiveValue::Set(params.context),
            removed: ActiveValue::Set(false),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Vote::from_entity(vote))
    }

    /// Gets a non-removed vote.
    pub async fn find_active(&self, id: i32) -> Result<Option<Vote>, DbErr> {
        Ok(entity::prelude::Vote::find_by_id(id)
            .filter(entity::vote::Column::Removed.eq(false))
            .one(self.db)
            .await?
            .map(Vote::from_entity))
    }

    /// Non-removed votes of a post, newest first.
    pub async fn find_by_post(&self, post_id: i32) -> Result<Vec<Vote>, DbErr> {
        Ok(entity::prelude::Vote::find()
            .filter(entity::vote::Column::PostId.eq(post_id))
            .filter(entity::vote::Column::Removed.eq(false))
            .order_by_desc(entity::vote::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Vote::from_entity)
            .collect())
    }

    /// Whether the post has a vote that is neither removed nor closed.
    pub async fn open_exists_for_post(&self, post_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Vote::find()
            .filter(entity::vote::Column::PostId.eq(post_id))
            .filter(entity::vote::Column::Removed.eq(false))
            .filter(entity::vote::Column::Mode.ne(VoteMode::Closed))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies the fields present in `params`; option renames are not handled here.
    pub async fn update(&self, id: i32, params: &UpdateVoteParams) -> Result<Vote, DbErr> {
        let vote = entity::prelude::Vote::find_by_id(id)
            .filter(entity::vote::Column::Removed.eq(false))
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Vote with id {} not found", id)))?;

        let mut active_model: entity::vote::ActiveModel = vote.into();
        if let Some(name) = &params.name {
            active_model.name = ActiveValue::Set(name.clone());
        }
        if let Some(start_time) = params.start_time {
            active_model.start_time = ActiveValue::Set(start_time);
        }
        if let Some(end_time) = params.end_time {
            active_model.end_time = ActiveValue::Set(end_time);
        }

        Ok(Vote::from_entity(active_model.update(self.db).await?))
    }

    pub async fn mark_removed(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Vote::update_many()
            .filter(entity::vote::Column::Id.eq(id))
            .col_expr(entity::vote::Column::Removed, Expr::value(true))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Moves the vote to closed mode. Closing a closed vote changes nothing.
    pub async fn close(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Vote::update_many()
            .filter(entity::vote::Column::Id.eq(id))
            .col_expr(entity::vote::Column::Mode, Expr::value(VoteMode::Closed))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
