//! Vote domain models, visibility rules and operation parameters.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use entity::vote::{VoteContext, VoteMode};

use crate::{
    model::vote::{
        CastBallotDto, CreateVoteDto, UpdateVoteDto, VoteContextDto, VoteDto, VoteModeDto,
        VoteOptionDto, VoteResultDto, VoteTallyDto,
    },
    server::error::AppError,
};

pub fn mode_from_dto(mode: VoteModeDto) -> VoteMode {
    match mode {
        VoteModeDto::Single => VoteMode::Single,
        VoteModeDto::Multiple => VoteMode::Multiple,
        VoteModeDto::Closed => VoteMode::Closed,
    }
}

pub fn mode_into_dto(mode: VoteMode) -> VoteModeDto {
    match mode {
        VoteMode::Single => VoteModeDto::Single,
        VoteMode::Multiple => VoteModeDto::Multiple,
        VoteMode::Closed => VoteModeDto::Closed,
    }
}

pub fn context_from_dto(context: VoteContextDto) -> VoteContext {
    match context {
        VoteContextDto::Community => VoteContext::Community,
        VoteContextDto::Study => VoteContext::Study,
    }
}

pub fn context_into_dto(context: VoteContext) -> VoteContextDto {
    match context {
        VoteContext::Community => VoteContextDto::Community,
        VoteContext::Study => VoteContextDto::Study,
    }
}

/// Whether a vote listing shows ballot counts to the caller.
///
/// Counts stay hidden on open votes until the caller has voted so partial results
/// cannot bias the ballot.
pub fn tallies_visible(mode: VoteMode, has_voted: bool) -> bool {
    has_voted || mode == VoteMode::Closed
}

/// Whether the result endpoint may answer for the caller.
///
/// Community votes open their results to anyone who voted; study votes only once
/// closed, regardless of ballot history.
pub fn result_accessible(context: VoteContext, mode: VoteMode, has_voted: bool) -> bool {
    match context {
        VoteContext::Community => has_voted,
        VoteContext::Study => mode == VoteMode::Closed,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vote {
    pub id: i32,
    pub post_id: i32,
    pub name: String,
    pub mode: VoteMode,
    pub context: VoteContext,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl Vote {
    pub fn from_entity(entity: entity::vote::Model) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
            name: entity.name,
            mode: entity.mode,
            context: entity.context,
            start_time: entity.start_time,
            end_time: entity.end_time,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.mode == VoteMode::Closed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoteOption {
    pub id: i32,
    pub vote_id: i32,
    pub name: String,
}

impl VoteOption {
    pub fn from_entity(entity: entity::vote_option::Model) -> Self {
        Self {
            id: entity.id,
            vote_id: entity.vote_id,
            name: entity.name,
        }
    }
}

/// Ballot count of one non-removed option.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteTally {
    pub option_id: i32,
    pub name: String,
    pub count: u64,
}

impl VoteTally {
    pub fn into_dto(self) -> VoteTallyDto {
        VoteTallyDto {
            id: self.option_id,
            name: self.name,
            count: self.count,
        }
    }
}

/// A vote as listed for a post, with counts only when visible to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct VoteView {
    pub vote: Vote,
    pub has_voted: bool,
    pub options: Vec<VoteOptionView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoteOptionView {
    pub id: i32,
    pub name: String,
    pub count: Option<u64>,
}

impl VoteView {
    /// Builds the view from the tallies, hiding counts unless `tallies_visible`.
    pub fn new(vote: Vote, has_voted: bool, tallies: Vec<VoteTally>) -> Self {
        let visible = tallies_visible(vote.mode, has_voted);
        let options = tallies
            .into_iter()
            .map(|t| VoteOptionView {
                id: t.option_id,
                name: t.name,
                count: visible.then_some(t.count),
            })
            .collect();

        Self {
            vote,
            has_voted,
            options,
        }
    }

    pub fn into_dto(self) -> VoteDto {
        VoteDto {
            id: self.vote.id,
            post_id: self.vote.post_id,
            name: self.vote.name,
            mode: mode_into_dto(self.vote.mode),
            context: context_into_dto(self.vote.context),
            start_time: self.vote.start_time,
            end_time: self.vote.end_time,
            has_voted: self.has_voted,
            options: self
                .options
                .into_iter()
                .map(|o| VoteOptionDto {
                    id: o.id,
                    name: o.name,
                    count: o.count,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoteResult {
    pub vote: Vote,
    pub tallies: Vec<VoteTally>,
}

impl VoteResult {
    pub fn into_dto(self) -> VoteResultDto {
        VoteResultDto {
            vote_id: self.vote.id,
            name: self.vote.name,
            mode: mode_into_dto(self.vote.mode),
            options: self.tallies.into_iter().map(VoteTally::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateVoteParams {
    pub post_id: i32,
    pub name: String,
    pub mode: VoteMode,
    pub context: VoteContext,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub options: Vec<String>,
}

impl CreateVoteParams {
    pub fn from_dto(post_id: i32, dto: CreateVoteDto) -> Self {
        Self {
            post_id,
            name: dto.name,
            mode: mode_from_dto(dto.mode),
            context: context_from_dto(dto.context),
            start_time: dto.start_time,
            end_time: dto.end_time,
            options: dto.options,
        }
    }

    /// Rejects empty names, an empty option list, an inverted window and a
    /// vote created already closed.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("Vote name must not be blank".to_string()));
        }
        if self.options.is_empty() {
            return Err(AppError::BadRequest(
                "Vote needs at least one option".to_string(),
            ));
        }
        if self.options.iter().any(|o| o.trim().is_empty()) {
            return Err(AppError::BadRequest(
                "Option names must not be blank".to_string(),
            ));
        }
        if self.end_time <= self.start_time {
            return Err(AppError::BadRequest(
                "Vote end time must be after its start time".to_string(),
            ));
        }
        if self.mode == VoteMode::Closed {
            return Err(AppError::BadRequest(
                "Vote must start in single or multiple mode".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct OptionRename {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateVoteParams {
    pub name: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub options: Vec<OptionRename>,
}

impl UpdateVoteParams {
    pub fn from_dto(dto: UpdateVoteDto) -> Self {
        Self {
            name: dto.name,
            start_time: dto.start_time,
            end_time: dto.end_time,
            options: dto
                .options
                .into_iter()
                .map(|o| OptionRename {
                    id: o.id,
                    name: o.name,
                })
                .collect(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty())
            || self.options.iter().any(|o| o.name.trim().is_empty())
        {
            return Err(AppError::BadRequest("Names must not be blank".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CastBallotParams {
    pub vote_id: i32,
    /// Member named in the request body, checked against the session.
    pub member_id: i32,
    pub option_ids: Vec<i32>,
}

impl CastBallotParams {
    pub fn from_dto(vote_id: i32, dto: CastBallotDto) -> Self {
        Self {
            vote_id,
            member_id: dto.member_id,
            option_ids: dto.option_ids,
        }
    }

    /// Checks the selection shape against the vote mode.
    ///
    /// At least one option, no repeats, and exactly one in single mode.
    pub fn validate_selection(&self, mode: VoteMode) -> Result<(), AppError> {
        if self.option_ids.is_empty() {
            return Err(AppError::BadRequest("Select at least one option".to_string()));
        }

        let unique: HashSet<i32> = self.option_ids.iter().copied().collect();
        if unique.len() != self.option_ids.len() {
            return Err(AppError::BadRequest(
                "Option selected more than once".to_string(),
            ));
        }

        if mode == VoteMode::Single && self.option_ids.len() != 1 {
            return Err(AppError::BadRequest(
                "Single choice vote accepts exactly one option".to_string(),
            ));
        }
        Ok(())
    }
}
