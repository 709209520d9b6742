//! Post domain models, list parameters and board type parsing.

use chrono::{DateTime, Utc};
use entity::post::BoardType;

use crate::{
    model::board::{CreatePostDto, PostDto, PostPageDto, PostSummaryDto, UpdatePostDto},
    server::{error::AppError, model::member::Author, model::reply::ReplyNode},
};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Parses a board type path segment.
pub fn parse_board_type(value: &str) -> Result<BoardType, AppError> {
    match value {
        "free" => Ok(BoardType::Free),
        "notice" => Ok(BoardType::Notice),
        "question" => Ok(BoardType::Question),
        "study" => Ok(BoardType::Study),
        other => Err(AppError::BadRequest(format!("Unknown board type '{}'", other))),
    }
}

pub fn board_type_name(board_type: &BoardType) -> &'static str {
    match board_type {
        BoardType::Free => "free",
        BoardType::Notice => "notice",
        BoardType::Question => "question",
        BoardType::Study => "study",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub board_type: BoardType,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn from_entity(entity: entity::post::Model, author: Option<entity::member::Model>) -> Self {
        Self {
            id: entity.id,
            board_type: entity.board_type,
            title: entity.title,
            content: entity.content,
            author: Author::from_entity(entity.author_id, author),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// A post together with its assembled reply tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDetail {
    pub post: Post,
    pub replies: Vec<ReplyNode>,
}

impl PostDetail {
    pub fn into_dto(self) -> PostDto {
        PostDto {
            id: self.post.id,
            board_type: board_type_name(&self.post.board_type).to_string(),
            title: self.post.title,
            content: self.post.content,
            author: self.post.author.into_dto(),
            created_at: self.post.created_at,
            updated_at: self.post.updated_at,
            replies: self.replies.into_iter().map(ReplyNode::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary {
    pub post: Post,
    pub reply_count: u64,
}

impl PostSummary {
    pub fn into_dto(self) -> PostSummaryDto {
        PostSummaryDto {
            id: self.post.id,
            board_type: board_type_name(&self.post.board_type).to_string(),
            title: self.post.title,
            author: self.post.author.into_dto(),
            reply_count: self.reply_count,
            created_at: self.post.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostPage {
    pub posts: Vec<PostSummary>,
    pub next_cursor: Option<i32>,
}

impl PostPage {
    /// Builds a page; a full page exposes its last id as the next cursor.
    pub fn new(posts: Vec<PostSummary>, size: u64) -> Self {
        let next_cursor = if posts.len() as u64 == size {
            posts.last().map(|p| p.post.id)
        } else {
            None
        };

        Self { posts, next_cursor }
    }

    pub fn into_dto(self) -> PostPageDto {
        PostPageDto {
            posts: self.posts.into_iter().map(PostSummary::into_dto).collect(),
            next_cursor: self.next_cursor,
        }
    }
}

/// Cursor-paginated listing of one board.
#[derive(Debug, Clone)]
pub struct PostListParams {
    pub board_type: BoardType,
    /// Only posts with an id strictly below the cursor are returned.
    pub cursor: Option<i32>,
    pub size: u64,
    /// Case-sensitive substring of the title or the author nickname.
    pub keyword: Option<String>,
}

impl PostListParams {
    pub fn new(
        board_type: BoardType,
        cursor: Option<i32>,
        size: Option<u64>,
        keyword: Option<String>,
    ) -> Self {
        Self {
            board_type,
            cursor,
            size: size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
            keyword: keyword.filter(|k| !k.is_empty()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub author_id: i32,
    pub board_type: BoardType,
    pub title: String,
    pub content: String,
}

impl CreatePostParams {
    pub fn from_dto(author_id: i32, board_type: BoardType, dto: CreatePostDto) -> Self {
        Self {
            author_id,
            board_type,
            title: dto.title,
            content: dto.content,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdatePostParams {
    pub title: String,
    pub content: String,
}

impl UpdatePostParams {
    pub fn from_dto(dto: UpdatePostDto) -> Self {
        Self {
            title: dto.title,
            content: dto.content,
        }
    }
}
