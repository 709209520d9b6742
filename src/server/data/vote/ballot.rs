use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect,
};

use crate::server::model::vote::{VoteOption, VoteTally};

pub struct VoteBallotRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VoteBallotRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records one ballot row per selected option.
    pub async fn create_many(
        &self,
        member_id: i32,
        vote_id: i32,
        option_ids: &[i32],
    ) -> Result<(), DbErr> {
        let now = Utc::now();
        for &option_id in option_ids {
            entity::vote_ballot::ActiveModel {
                member_id: ActiveValue::Set(member_id),
                vote_id: ActiveValue::Set(vote_id),
                vote_option_id: ActiveValue::Set(option_id),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }
        Ok(())
    }

    /// Whether the member holds at least one ballot on this vote.
    pub async fn has_voted(&self, vote_id: i32, member_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::VoteBallot::find()
            .filter(entity::vote_ballot::Column::VoteId.eq(vote_id))
            .filter(entity::vote_ballot::Column::MemberId.eq(member_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Ballot counts for the given options, in the order given.
    ///
    /// Ballots on options not passed in (removed ones) are not counted.
    pub async fn tally(
        &self,
        vote_id: i32,
        options: Vec<VoteOption>,
    ) -> Result<Vec<VoteTally>, DbErr> {
        if options.is_empty() {
            return Ok(Vec::new());
        }

        let counts: HashMap<i32, i64> = entity::prelude::VoteBallot::find()
            .select_only()
            .column(entity::vote_ballot::Column::VoteOptionId)
            .column_as(entity::vote_ballot::Column::Id.count(), "count")
            .filter(entity::vote_ballot::Column::VoteId.eq(vote_id))
            .filter(
                entity::vote_ballot::Column::VoteOptionId.is_in(options.iter().map(|o| o.id)),
            )
            .group_by(entity::vote_ballot::Column::VoteOptionId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        Ok(options
            .into_iter()
            .map(|option| VoteTally {
                count: counts.get(&option.id).copied().unwrap_or(0) as u64,
                option_id: option.id,
                name: option.name,
            })
            .collect())
    }
}
