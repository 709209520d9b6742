use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VoteModeDto {
    Single,
    Multiple,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VoteContextDto {
    Community,
    Study,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateVoteDto {
    pub name: String,
    pub mode: VoteModeDto,
    pub context: VoteContextDto,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VoteOptionUpdateDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateVoteDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub options: Vec<VoteOptionUpdateDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeleteVoteDto {
    /// Options of the vote to soft-delete together with it.
    #[serde(default)]
    pub option_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CastBallotDto {
    pub member_id: i32,
    pub option_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VoteOptionDto {
    pub id: i32,
    pub name: String,
    /// Ballot count; absent while results are hidden from the caller.
    pub count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VoteDto {
    pub id: i32,
    pub post_id: i32,
    pub name: String,
    pub mode: VoteModeDto,
    pub context: VoteContextDto,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub has_voted: bool,
    pub options: Vec<VoteOptionDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VoteTallyDto {
    pub id: i32,
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VoteResultDto {
    pub vote_id: i32,
    pub name: String,
    pub mode: VoteModeDto,
    pub options: Vec<VoteTallyDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VoteCreatedDto {
    pub id: i32,
}
