//! Member factory for creating test member entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
///
/// The default password hash is not a valid Argon2 hash; tests exercising login
/// should set one produced by the member service.
///
/// # Example
///
/// ```rust,ignore
/// let member = MemberFactory::new(&db)
///     .email("alice@example.com")
///     .nickname("alice")
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    nickname: String,
    password_hash: String,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - email: `"member{id}@example.com"`
    /// - nickname: `"member{id}"`
    /// - password_hash: `"not-a-hash"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("member{}@example.com", id),
            nickname: format!("member{}", id),
            password_hash: "not-a-hash".to_string(),
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            id: ActiveValue::NotSet,
            email: ActiveValue::Set(self.email),
            nickname: ActiveValue::Set(self.nickname),
            password_hash: ActiveValue::Set(self.password_hash),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member with default values.
///
/// Shorthand for `MemberFactory::new(db).build().await`.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}

/// Creates a member with a specific nickname.
pub async fn create_member_with_nickname(
    db: &DatabaseConnection,
    nickname: impl Into<String>,
) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).nickname(nickname).build().await
}
