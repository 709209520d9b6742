use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateStudyDto {
    pub name: String,
    pub intro: String,
    pub max_members: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateStudyDto {
    pub name: String,
    pub intro: String,
    pub max_members: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JoinStudyDto {
    #[serde(default)]
    pub intro: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransferLeaderDto {
    pub member_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StudyMemberStatusDto {
    Waiting,
    Joined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StudyMemberRoleDto {
    Leader,
    Member,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudyMemberDto {
    pub id: i32,
    pub member_id: i32,
    pub nickname: String,
    pub status: StudyMemberStatusDto,
    pub role: StudyMemberRoleDto,
    pub join_intro: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudyDto {
    pub id: i32,
    pub name: String,
    pub intro: String,
    pub max_members: i32,
    pub joined_count: u64,
    pub created_at: DateTime<Utc>,
    pub members: Vec<StudyMemberDto>,
}
