//! Post factory for creating test post entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::post::BoardType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let post = PostFactory::new(&db, author.id)
///     .title("Hello")
///     .removed(true)
///     .build()
///     .await?;
/// ```
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    board_type: BoardType,
    title: String,
    content: String,
    removed: bool,
    reported: bool,
    created_at: DateTime<Utc>,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory with default values.
    ///
    /// Defaults:
    /// - board_type: `BoardType::Free`
    /// - title: `"Post {id}"`
    /// - content: `"Test post content"`
    /// - removed / reported: `false`
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            board_type: BoardType::Free,
            title: format!("Post {}", id),
            content: "Test post content".to_string(),
            removed: false,
            reported: false,
            created_at: Utc::now(),
        }
    }

    pub fn board_type(mut self, board_type: BoardType) -> Self {
        self.board_type = board_type;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
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

    pub fn reported(mut self, reported: bool) -> Self {
        self.reported = reported;
        self
    }

    /// Builds and inserts the post entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::post::Model)` - Created post entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            id: ActiveValue::NotSet,
            author_id: ActiveValue::Set(self.author_id),
            board_type: ActiveValue::Set(self.board_type),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            removed: ActiveValue::Set(self.removed),
            reported: ActiveValue::Set(self.reported),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a visible free-board post by the given author.
pub async fn create_post(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, author_id).build().await
}
