use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::vote::VoteOption;

pub struct VoteOptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VoteOptionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one option per name, in order.
    pub async fn create_many(
        &self,
        vote_id: i32,
        names: &[String],
    ) -> Result<Vec<VoteOption>, DbErr> {
        let mut options = Vec::with_capacity(names.len());

        for name in names {
            let option = entity::vote_option::ActiveModel {
                vote_id: ActiveValue::Set(vote_id),
                name: ActiveValue::Set(name.trim().to_string()),
                removed: ActiveValue::Set(false),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            options.push(VoteOption::from_entity(option));
        }

        Ok(options)
    }

    /// Non-removed options of a vote ordered by id.
    pub async fn find_active_by_vote(&self, vote_id: i32) -> Result<Vec<VoteOption>, DbErr> {
        Ok(entity::prelude::VoteOption::find()
            .filter(entity::vote_option::Column::VoteId.eq(vote_id))
            .filter(entity::vote_option::Column::Removed.eq(false))
            .order_by_asc(entity::vote_option::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(VoteOption::from_entity)
            .collect())
    }

    /// Batch lookup of non-removed options scoped to one vote.
    ///
    /// Ids that belong to another vote or are removed are simply absent from the
    /// result; callers compare lengths to detect misses.
    pub async fn find_active_by_ids(
        &self,
        vote_id: i32,
        ids: &[i32],
    ) -> Result<Vec<VoteOption>, DbErr> {
        Ok(entity::prelude::VoteOption::find()
            .filter(entity::vote_option::Column::VoteId.eq(vote_id))
            .filter(entity::vote_option::Column::Id.is_in(ids.iter().copied()))
            .filter(entity::vote_option::Column::Removed.eq(false))
            .order_by_asc(entity::vote_option::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(VoteOption::from_entity)
            .collect())
    }

    /// Renames an option of the given vote.
    ///
    /// # Returns
    /// - `Ok(())`: Option renamed
    /// - `Err(DbErr::RecordNotFound)`: No non-removed option with that id on the vote
    pub async fn rename(&self, vote_id: i32, id: i32, name: &str) -> Result<(), DbErr> {
        let result = entity::prelude::VoteOption::update_many()
            .filter(entity::vote_option::Column::Id.eq(id))
            .filter(entity::vote_option::Column::VoteId.eq(vote_id))
            .filter(entity::vote_option::Column::Removed.eq(false))
            .col_expr(
                entity::vote_option::Column::Name,
                Expr::value(name.trim().to_string()),
            )
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "Option {} not found on vote {}",
                id, vote_id
            )));
        }
        Ok(())
    }

    /// Soft-deletes options of the given vote and returns how many changed.
    pub async fn mark_removed(&self, vote_id: i32, ids: &[i32]) -> Result<u64, DbErr> {
        let result = entity::prelude::VoteOption::update_many()
            .filter(entity::vote_option::Column::VoteId.eq(vote_id))
            .filter(entity::vote_option::Column::Id.is_in(ids.iter().copied()))
            .filter(entity::vote_option::Column::Removed.eq(false))
            .col_expr(entity::vote_option::Column::Removed, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
