//! Study repository; memberships live in [`member`].

pub mod member;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter,
};

use crate::server::model::study::{Study, StudyParams};

pub struct StudyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudyRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: &StudyParams) -> Result<Study, DbErr> {
        let study = entity::study::ActiveModel {
            name: ActiveValue::Set(params.name.trim().to_string()),
            intro: ActiveValue::Set(params.intro.clone()),
            max_members: ActiveValue::Set(params.max_members),
            removed: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Study::from_entity(study))
    }

    /// Gets a study unless it has been removed.
    pub async fn find_active(&self, id: i32) -> Result<Option<Study>, DbErr> {
        Ok(entity::prelude::Study::find_by_id(id)
            .filter(entity::study::Column::Removed.eq(false))
            .one(self.db)
            .await?
            .map(Study::from_entity))
    }

    pub async fn update(&self, id: i32, params: &StudyParams) -> Result<Study, DbErr> {
        let study = entity::prelude::Study::find_by_id(id)
            .filter(entity::study::Column::Removed.eq(false))
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Study with id {} not found", id)))?;

        let mut active_model: entity::study::ActiveModel = study.into();
        active_model.name = ActiveValue::Set(params.name.trim().to_string());
        active_model.intro = ActiveValue::Set(params.intro.clone());
        active_model.max_members = ActiveValue::Set(params.max_members);

        Ok(Study::from_entity(active_model.update(self.db).await?))
    }

    pub async fn mark_removed(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Study::update_many()
            .filter(entity::study::Column::Id.eq(id))
            .col_expr(entity::study::Column::Removed, Expr::value(true))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
