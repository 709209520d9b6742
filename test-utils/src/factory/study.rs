//! Study factories for creating studies and memberships.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::study_member::{StudyMemberRole, StudyMemberStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test studies with customizable fields.
pub struct StudyFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    intro: String,
    max_members: i32,
    removed: bool,
}

impl<'a> StudyFactory<'a> {
    /// Creates a new StudyFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Study {id}"`
    /// - max_members: `5`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Study {}", next_id()),
            intro: "Test study intro".to_string(),
            max_members: 5,
            removed: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn max_members(mut self, max_members: i32) -> Self {
        self.max_members = max_members;
        self
    }

    pub fn removed(mut self, removed: bool) -> Self {
        self.removed = removed;
        self
    }

    pub async fn build(self) -> Result<entity::study::Model, DbErr> {
        entity::study::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            intro: ActiveValue::Set(self.intro),
            max_members: ActiveValue::Set(self.max_members),
            removed: ActiveValue::Set(self.removed),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Factory for creating test study memberships.
///
/// Defaults to a waiting request with the member role.
pub struct StudyMemberFactory<'a> {
    db: &'a DatabaseConnection,
    study_id: i32,
    member_id: i32,
    status: StudyMemberStatus,
    role: StudyMemberRole,
    removed: bool,
    join_intro: Option<String>,
}

impl<'a> StudyMemberFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, study_id: i32, member_id: i32) -> Self {
        Self {
            db,
            study_id,
            member_id,
            status: StudyMemberStatus::Waiting,
            role: StudyMemberRole::Member,
            removed: false,
            join_intro: Some("Let me in".to_string()),
        }
    }

    pub fn status(mut self, status: StudyMemberStatus) -> Self {
        self.status = status;
        self
    }

    pub fn role(mut self, role: StudyMemberRole) -> Self {
        self.role = role;
        self
    }

    pub fn removed(mut self, removed: bool) -> Self {
        self.removed = removed;
        self
    }

    pub async fn build(self) -> Result<entity::study_member::Model, DbErr> {
        let now = Utc::now();
        entity::study_member::ActiveModel {
            id: ActiveValue::NotSet,
            study_id: ActiveValue::Set(self.study_id),
            member_id: ActiveValue::Set(self.member_id),
            status: ActiveValue::Set(self.status),
            role: ActiveValue::Set(self.role),
            removed: ActiveValue::Set(self.removed),
            join_intro: ActiveValue::Set(self.join_intro),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a study with default values.
pub async fn create_study(db: &DatabaseConnection) -> Result<entity::study::Model, DbErr> {
    StudyFactory::new(db).build().await
}

/// Creates a membership with the given status and role.
pub async fn create_study_member(
    db: &DatabaseConnection,
    study_id: i32,
    member_id: i32,
    status: StudyMemberStatus,
    role: StudyMemberRole,
) -> Result<entity::study_member::Model, DbErr> {
    StudyMemberFactory::new(db, study_id, member_id)
        .status(status)
        .role(role)
        .build()
        .await
}
