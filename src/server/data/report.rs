use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct PostReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostReportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        post_id: i32,
        member_id: i32,
        reason: Option<String>,
    ) -> Result<entity::post_report::Model, DbErr> {
        entity::post_report::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            member_id: ActiveValue::Set(member_id),
            reason: ActiveValue::Set(reason),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn exists(&self, post_id: i32, member_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::PostReport::find()
            .filter(entity::post_report::Column::PostId.eq(post_id))
            .filter(entity::post_report::Column::MemberId.eq(member_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Number of distinct members who reported the post.
    pub async fn count_by_post(&self, post_id: i32) -> Result<u64, DbErr> {
        entity::prelude::PostReport::find()
            .filter(entity::post_report::Column::PostId.eq(post_id))
            .count(self.db)
            .await
    }
}
