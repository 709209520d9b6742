//! Reply factory for creating test reply entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test replies with customizable fields.
pub struct ReplyFactory<'a> {
    db: &'a DatabaseConnection,
    post_id: i32,
    author_id: i32,
    parent_id: Option<i32>,
    content: String,
    removed: bool,
}

impl<'a> ReplyFactory<'a> {
    /// Creates a new top-level, non-removed ReplyFactory.
    pub fn new(db: &'a DatabaseConnection, post_id: i32, author_id: i32) -> Self {
        Self {
            db,
            post_id,
            author_id,
            parent_id: None,
            content: format!("Reply {}", next_id()),
            removed: false,
        }
    }

    pub fn parent_id(mut self, parent_id: Option<i32>) -> Self {
        self.parent_id = parent_id;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn removed(mut self, removed: bool) -> Self {
        self.removed = removed;
        self
    }

    /// Builds and inserts the reply entity into the database.
    pub async fn build(self) -> Result<entity::reply::Model, DbErr> {
        let now = Utc::now();
        entity::reply::ActiveModel {
            id: ActiveValue::NotSet,
            post_id: ActiveValue::Set(self.post_id),
            author_id: ActiveValue::Set(self.author_id),
            parent_id: ActiveValue::Set(self.parent_id),
            content: ActiveValue::Set(self.content),
            removed: ActiveValue::Set(self.removed),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a top-level reply on a post.
pub async fn create_reply(
    db: &DatabaseConnection,
    post_id: i32,
    author_id: i32,
) -> Result<entity::reply::Model, DbErr> {
    ReplyFactory::new(db, post_id, author_id).build().await
}

/// Creates a child reply under `parent_id` on a post.
pub async fn create_child_reply(
    db: &DatabaseConnection,
    post_id: i32,
    author_id: i32,
    parent_id: i32,
) -> Result<entity::reply::Model, DbErr> {
    ReplyFactory::new(db, post_id, author_id)
        .parent_id(Some(parent_id))
        .build()
        .await
}
