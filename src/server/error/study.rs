use thiserror::Error;

use crate::model::api::ResultCode;

#[derive(Error, Debug)]
pub enum StudyError {
    /// Joined members (leader included) already reach `max_members`.
    #[error("Study {0} is full")]
    Full(i32),

    /// Member already has a waiting or joined membership.
    #[error("Member {member_id} already requested or joined study {study_id}")]
    AlreadyMember { study_id: i32, member_id: i32 },

    /// Leader tried to leave without handing over leadership.
    #[error("leader must transfer leadership before leaving")]
    LeaderCannotLeave,

    /// Operation requires a waiting request but the membership is in another state.
    #[error("Member {member_id} has no pending request for study {study_id}")]
    NotWaiting { study_id: i32, member_id: i32 },

    /// Operation requires a joined, non-leader member.
    #[error("Member {member_id} is not a joined member of study {study_id}")]
    NotJoinedMember { study_id: i32, member_id: i32 },

    /// Capacity would drop below the current joined count.
    #[error("max_members {requested} is below the {joined} joined members")]
    CapacityBelowJoined { requested: i32, joined: u64 },
}

impl StudyError {
    pub fn result_code(&self) -> ResultCode {
        match self {
            Self::Full(_) => ResultCode::StudyFull,
            Self::AlreadyMember { .. } => ResultCode::Duplicate,
            Self::LeaderCannotLeave => ResultCode::Forbidden,
            Self::NotWaiting { .. }
            | Self::NotJoinedMember { .. }
            | Self::CapacityBelowJoined { .. } => ResultCode::InvalidRequest,
        }
    }
}
