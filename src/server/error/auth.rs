use thiserror::Error;

use crate::model::api::ResultCode;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No member id stored in the session.
    #[error("Member not found in session")]
    MemberNotInSession,

    /// Session references a member that no longer exists.
    #[error("Member {0} from session not found in database")]
    MemberNotInDatabase(i32),

    /// Email unknown or password mismatch during login.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

impl AuthError {
    pub fn result_code(&self) -> ResultCode {
        match self {
            Self::MemberNotInSession | Self::MemberNotInDatabase(_) | Self::InvalidCredentials => {
                ResultCode::Unauthorized
            }
        }
    }
}
