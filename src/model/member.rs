use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SignupDto {
    pub email: String,
    pub password: String,
    pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemberDto {
    pub id: i32,
    pub email: String,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
}

/// Public view of a post or reply author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: i32,
    pub nickname: String,
}
