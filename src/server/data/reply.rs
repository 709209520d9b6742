use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::reply::{CreateReplyParams, Reply};

pub struct ReplyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReplyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateReplyParams) -> Result<entity::reply::Model, DbErr> {
        let now = Utc::now();
        entity::reply::ActiveModel {
            post_id: ActiveValue::Set(params.post_id),
            author_id: ActiveValue::Set(params.author_id),
            parent_id: ActiveValue::Set(params.parent_id),
            content: ActiveValue::Set(params.content),
            removed: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::reply::Model>, DbErr> {
        entity::prelude::Reply::find_by_id(id).one(self.db).await
    }

    /// All replies of a post, removed ones included, with their authors.
    ///
    /// Removed replies are needed to decide tombstoning when assembling the tree.
    pub async fn find_by_post(&self, post_id: i32) -> Result<Vec<Reply>, DbErr> {
        let rows = entity::prelude::Reply::find()
            .filter(entity::reply::Column::PostId.eq(post_id))
            .find_also_related(entity::prelude::Member)
            .order_by_asc(entity::reply::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(reply, author)| Reply::from_entity(reply, author))
            .collect())
    }

    /// Non-removed reply counts keyed by post id; posts without replies map to 0.
    ///
    /// One grouped query for the whole page.
    pub async fn count_visible_by_posts(
        &self,
        post_ids: &[i32],
    ) -> Result<HashMap<i32, u64>, DbErr> {
        let mut counts: HashMap<i32, u64> = post_ids.iter().map(|&id| (id, 0)).collect();
        if post_ids.is_empty() {
            return Ok(counts);
        }

        let rows: Vec<(i32, i64)> = entity::prelude::Reply::find()
            .select_only()
            .column(entity::reply::Column::PostId)
            .column_as(entity::reply::Column::Id.count(), "count")
            .filter(entity::reply::Column::PostId.is_in(post_ids.iter().copied()))
            .filter(entity::reply::Column::Removed.eq(false))
            .group_by(entity::reply::Column::PostId)
            .into_tuple()
            .all(self.db)
            .await?;

        for (post_id, count) in rows {
            counts.insert(post_id, count as u64);
        }

        Ok(counts)
    }

    pub async fn update_content(&self, id: i32, content: String) -> Result<(), DbErr> {
        let reply = entity::prelude::Reply::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Reply with id {} not found", id)))?;

        let mut active_model: entity::reply::ActiveModel = reply.into();
        active_model.content = ActiveValue::Set(content);
        active_model.updated_at = ActiveValue::Set(Utc::now());
        active_model.update(self.db).await?;

        Ok(())
    }

    /// Soft-deletes a reply. Its children are left untouched.
    pub async fn mark_removed(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Reply::update_many()
            .filter(entity::reply::Column::Id.eq(id))
            .col_expr(entity::reply::Column::Removed, Expr::value(true))
            .col_expr(entity::reply::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
