use chrono::Utc;
use entity::study_member::{StudyMemberRole, StudyMemberStatus};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::study::StudyMembership;

pub struct StudyMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudyMemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        study_id: i32,
        member_id: i32,
        status: StudyMemberStatus,
        role: StudyMemberRole,
        join_intro: Option<String>,
    ) -> Result<entity::study_member::Model, DbErr> {
        let now = Utc::now();
        entity::study_member::ActiveModel {
            study_id: ActiveValue::Set(study_id),
            member_id: ActiveValue::Set(member_id),
            status: ActiveValue::Set(status),
            role: ActiveValue::Set(role),
            removed: ActiveValue::Set(false),
            join_intro: ActiveValue::Set(join_intro),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// The non-removed membership of a member in a study, waiting or joined.
    pub async fn find_active(
        &self,
        study_id: i32,
        member_id: i32,
    ) -> Result<Option<StudyMembership>, DbErr> {
        Ok(entity::prelude::StudyMember::find()
            .filter(entity::study_member::Column::StudyId.eq(study_id))
            .filter(entity::study_member::Column::MemberId.eq(member_id))
            .filter(entity::study_member::Column::Removed.eq(false))
            .find_also_related(entity::prelude::Member)
            .one(self.db)
            .await?
            .map(|(sm, member)| StudyMembership::from_entity(sm, member)))
    }

    /// Non-removed memberships ordered by id; waiting ones only when asked for.
    pub async fn list(
        &self,
        study_id: i32,
        include_waiting: bool,
    ) -> Result<Vec<StudyMembership>, DbErr> {
        let mut query = entity::prelude::StudyMember::find()
            .filter(entity::study_member::Column::StudyId.eq(study_id))
            .filter(entity::study_member::Column::Removed.eq(false));

        if !include_waiting {
            query = query
                .filter(entity::study_member::Column::Status.eq(StudyMemberStatus::Joined));
        }

        Ok(query
            .find_also_related(entity::prelude::Member)
            .order_by_asc(entity::study_member::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(sm, member)| StudyMembership::from_entity(sm, member))
            .collect())
    }

    pub async fn count_joined(&self, study_id: i32) -> Result<u64, DbErr> {
        entity::prelude::StudyMember::find()
            .filter(entity::study_member::Column::StudyId.eq(study_id))
            .filter(entity::study_member::Column::Status.eq(StudyMemberStatus::Joined))
            .filter(entity::study_member::Column::Removed.eq(false))
            .count(self.db)
            .await
    }

    pub async fn set_status(&self, id: i32, status: StudyMemberStatus) -> Result<(), DbErr> {
        entity::prelude::StudyMember::update_many()
            .filter(entity::study_member::Column::Id.eq(id))
            .col_expr(entity::study_member::Column::Status, Expr::value(status))
            .col_expr(entity::study_member::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn set_role(&self, id: i32, role: StudyMemberRole) -> Result<(), DbErr> {
        entity::prelude::StudyMember::update_many()
            .filter(entity::study_member::Column::Id.eq(id))
            .col_expr(entity::study_member::Column::Role, Expr::value(role))
            .col_expr(entity::study_member::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn mark_removed(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::StudyMember::update_many()
            .filter(entity::study_member::Column::Id.eq(id))
            .col_expr(entity::study_member::Column::Removed, Expr::value(true))
            .col_expr(entity::study_member::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
