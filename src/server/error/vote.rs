use thiserror::Error;

use crate::model::api::ResultCode;

#[derive(Error, Debug)]
pub enum VoteError {
    /// Results requested before the caller is allowed to see them.
    ///
    /// Community votes open their results to members who cast a ballot; study
    /// votes only once closed.
    #[error("Result of vote {0} is not accessible")]
    ResultNotAccessible(i32),

    /// Ballot names a member other than the signed-in one.
    #[error("Ballot for member {requested} submitted by member {actor}")]
    VoterMismatch { actor: i32, requested: i32 },

    /// Vote no longer accepts ballots.
    #[error("Vote {0} is closed")]
    Closed(i32),

    /// Member already holds a ballot on the vote.
    #[error("Member {member_id} already voted on vote {vote_id}")]
    AlreadyVoted { vote_id: i32, member_id: i32 },

    /// Post already has an open vote.
    #[error("Post {0} already has an active vote")]
    ActiveVoteExists(i32),
}

impl VoteError {
    pub fn result_code(&self) -> ResultCode {
        match self {
            Self::ResultNotAccessible(_) => ResultCode::VoteResultNotAccess,
            Self::VoterMismatch { .. } => ResultCode::VoterUserMismatch,
            Self::Closed(_) => ResultCode::VoteClosed,
            Self::AlreadyVoted { .. } | Self::ActiveVoteExists(_) => ResultCode::Duplicate,
        }
    }
}
