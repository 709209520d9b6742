use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{member::AuthorDto, reply::ReplyDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatePostDto {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdatePostDto {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReportPostDto {
    #[serde(default)]
    pub reason: Option<String>,
}

/// A post with its assembled reply tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i32,
    pub board_type: String,
    pub title: String,
    pub content: String,
    pub author: AuthorDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub replies: Vec<ReplyDto>,
}

/// One row of a post listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PostSummaryDto {
    pub id: i32,
    pub board_type: String,
    pub title: String,
    pub author: AuthorDto,
    pub reply_count: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PostPageDto {
    pub posts: Vec<PostSummaryDto>,
    /// Pass as `cursor` to fetch the next page; absent on the last page.
    pub next_cursor: Option<i32>,
}
