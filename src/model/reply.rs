use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::member::AuthorDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateReplyDto {
    #[serde(default)]
    pub parent_id: Option<i32>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateReplyDto {
    pub content: String,
}

/// A reply as rendered in a post's reply tree.
///
/// Removed replies that still have visible children carry placeholder content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReplyDto {
    pub id: i32,
    pub author: AuthorDto,
    pub content: String,
    pub removed: bool,
    pub created_at: DateTime<Utc>,
    #[schema(no_recursion)]
    pub children: Vec<ReplyDto>,
}
