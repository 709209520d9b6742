use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result taxonomy carried in every response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCode {
    Success,
    InvalidRequest,
    Unauthorized,
    Forbidden,
    VoteResultNotAccess,
    VoterUserMismatch,
    Duplicate,
    DuplicateReport,
    VoteClosed,
    StudyFull,
    Error,
    DataNotFound,
    FileUploadFail,
}

impl ResultCode {
    /// Numeric code written to the `code` field of the envelope.
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 20000,
            Self::InvalidRequest => 40000,
            Self::Unauthorized => 40101,
            Self::Forbidden => 40301,
            Self::VoteResultNotAccess => 40302,
            Self::VoterUserMismatch => 40303,
            Self::Duplicate => 40900,
            Self::DuplicateReport => 40901,
            Self::VoteClosed => 40902,
            Self::StudyFull => 40903,
            Self::Error => 50000,
            Self::DataNotFound => 50001,
            Self::FileUploadFail => 50002,
        }
    }

    /// Default human-readable message for the code.
    pub fn message(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::InvalidRequest => "invalid request",
            Self::Unauthorized => "login required",
            Self::Forbidden => "access denied",
            Self::VoteResultNotAccess => "vote result is not accessible",
            Self::VoterUserMismatch => "voter does not match the signed-in member",
            Self::Duplicate => "duplicate data",
            Self::DuplicateReport => "post already reported",
            Self::VoteClosed => "vote is closed",
            Self::StudyFull => "study is full",
            Self::Error => "internal server error",
            Self::DataNotFound => "data not found",
            Self::FileUploadFail => "file upload failed",
        }
    }
}

/// Uniform response envelope: `{code, message, data}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: ResultCode::Success.code(),
            message: ResultCode::Success.message().to_string(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Successful response without a payload.
    pub fn empty() -> Self {
        Self {
            code: ResultCode::Success.code(),
            message: ResultCode::Success.message().to_string(),
            data: None,
        }
    }

    pub fn failure(code: ResultCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
            data: None,
        }
    }
}
