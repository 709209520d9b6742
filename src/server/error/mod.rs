//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by services and controllers. Every
//! variant maps to a `ResultCode` and HTTP status and is rendered in the uniform
//! `{code, message, data}` envelope. Domain-specific errors (`AuthError`,
//! `VoteError`, `StudyError`) carry their own mapping.

pub mod auth;
pub mod config;
pub mod study;
pub mod vote;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ApiResponse, ResultCode},
    server::error::{auth::AuthError, config::ConfigError, study::StudyError, vote::VoteError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Vote rule violation.
    #[error(transparent)]
    VoteErr(#[from] VoteError),

    /// Study membership rule violation.
    #[error(transparent)]
    StudyErr(#[from] StudyError),

    /// Database operation error from SeaORM.
    ///
    /// `RecordNotFound` maps to DATA_NOT_FOUND, everything else to a logged 500.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx driver error, raised by the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Malformed multipart request body.
    #[error(transparent)]
    MultipartErr(#[from] MultipartError),

    /// Filesystem error outside of an upload (e.g. reading a stored file).
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Requested record does not exist or has been removed.
    #[error("{0}")]
    NotFound(String),

    /// Request failed validation.
    #[error("{0}")]
    BadRequest(String),

    /// Caller is authenticated but not entitled to the action.
    #[error("{0}")]
    Forbidden(String),

    /// Record conflicts with an existing one.
    #[error("{0}")]
    Duplicate(String),

    /// Member already reported the post.
    #[error("Post {post_id} already reported by member {member_id}")]
    DuplicateReport { post_id: i32, member_id: i32 },

    /// Storing an uploaded file failed; the whole upload was rolled back.
    #[error("{0}")]
    FileUploadFail(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Result code reported to the client for this error.
    pub fn result_code(&self) -> ResultCode {
        match self {
            Self::AuthErr(err) => err.result_code(),
            Self::VoteErr(err) => err.result_code(),
            Self::StudyErr(err) => err.result_code(),
            Self::DbErr(sea_orm::DbErr::RecordNotFound(_)) => ResultCode::DataNotFound,
            Self::MultipartErr(_) | Self::BadRequest(_) => ResultCode::InvalidRequest,
            Self::NotFound(_) => ResultCode::DataNotFound,
            Self::Forbidden(_) => ResultCode::Forbidden,
            Self::Duplicate(_) => ResultCode::Duplicate,
            Self::DuplicateReport { .. } => ResultCode::DuplicateReport,
            Self::FileUploadFail(_) => ResultCode::FileUploadFail,
            Self::ConfigErr(_)
            | Self::DbErr(_)
            | Self::SqlxErr(_)
            | Self::SessionErr(_)
            | Self::IoErr(_)
            | Self::InternalError(_) => ResultCode::Error,
        }
    }
}

/// HTTP status paired with each result code.
pub fn status_for(code: ResultCode) -> StatusCode {
    match code {
        ResultCode::Success => StatusCode::OK,
        ResultCode::InvalidRequest
        | ResultCode::VoteResultNotAccess
        | ResultCode::VoterUserMismatch => StatusCode::BAD_REQUEST,
        ResultCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ResultCode::Forbidden => StatusCode::FORBIDDEN,
        ResultCode::Duplicate
        | ResultCode::DuplicateReport
        | ResultCode::VoteClosed
        | ResultCode::StudyFull
        | ResultCode::FileUploadFail => StatusCode::CONFLICT,
        ResultCode::DataNotFound => StatusCode::NOT_FOUND,
        ResultCode::Error => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Converts application errors into enveloped HTTP responses.
///
/// 500-class errors are logged with full details and return the generic
/// message of `ResultCode::Error`. Other errors return their own message.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.result_code();

        match code {
            ResultCode::Error => InternalServerError(self).into_response(),
            _ => {
                tracing::debug!("Request rejected with {:?}: {}", code, self);
                (
                    status_for(code),
                    Json(ApiResponse::failure(code, self.to_string())),
                )
                    .into_response()
            }
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid
/// leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::failure(
                ResultCode::Error,
                ResultCode::Error.message(),
            )),
        )
            .into_response()
    }
}
