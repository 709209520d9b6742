use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ApiResponse,
        reply::{CreateReplyDto, ReplyDto, UpdateReplyDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            post::parse_board_type,
            reply::{CreateReplyParams, UpdateReplyParams},
        },
        service::reply::ReplyService,
        state::AppState,
    },
};

/// Tag for grouping reply endpoints in OpenAPI documentation
pub static REPLY_TAG: &str = "reply";

/// Adds a reply to a post, optionally under a top-level reply.
///
/// # Access Control
/// - Authenticated member
///
/// # Returns
/// - `201 Created` - Reply stored
/// - `400 Bad Request` - Blank content or parent is itself a child reply
/// - `401 Unauthorized` - No member in session
/// - `404 Not Found` - Post or parent reply not found
#[utoipa::path(
    post,
    path = "/api/boards/{board_type}/posts/{post_id}/replies",
    tag = REPLY_TAG,
    params(
        ("board_type" = String, Path, description = "Board type"),
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = CreateReplyDto,
    responses(
        (status = 201, description = "Reply stored", body = ApiResponse<ReplyDto>),
        (status = 400, description = "Blank content or nested too deep"),
        (status = 401, description = "No member in session"),
        (status = 404, description = "Post or parent reply not found")
    ),
)]
pub async fn create_reply(
    State(state): State<AppState>,
    session: Session,
    Path((board_type, post_id)): Path<(String, i32)>,
    Json(payload): Json<CreateReplyDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;
    let board_type = parse_board_type(&board_type)?;

    let params = CreateReplyParams::from_dto(post_id, member.id, payload);
    let reply = ReplyService::new(&state.db)
        .create(board_type, params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(reply.into_dto())),
    ))
}

/// Replaces the content of the caller's reply.
#[utoipa::path(
    put,
    path = "/api/replies/{reply_id}",
    tag = REPLY_TAG,
    params(
        ("reply_id" = i32, Path, description = "Reply ID")
    ),
    request_body = UpdateReplyDto,
    responses(
        (status = 200, description = "Reply updated"),
        (status = 400, description = "Blank content"),
        (status = 401, description = "No member in session"),
        (status = 403, description = "Caller is not the author"),
        (status = 404, description = "Reply not found")
    ),
)]
pub async fn update_reply(
    State(state): State<AppState>,
    session: Session,
    Path(reply_id): Path<i32>,
    Json(payload): Json<UpdateReplyDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    ReplyService::new(&state.db)
        .update(member.id, reply_id, UpdateReplyParams::from_dto(payload))
        .await?;

    Ok(Json(ApiResponse::empty()))
}

/// Soft-deletes the caller's reply.
#[utoipa::path(
    delete,
    path = "/api/replies/{reply_id}",
    tag = REPLY_TAG,
    params(
        ("reply_id" = i32, Path, description = "Reply ID")
    ),
    responses(
        (status = 200, description = "Reply deleted"),
        (status = 401, description = "No member in session"),
        (status = 403, description = "Caller is not the author"),
        (status = 404, description = "Reply not found")
    ),
)]
pub async fn delete_reply(
    State(state): State<AppState>,
    session: Session,
    Path(reply_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    ReplyService::new(&state.db)
        .delete(member.id, reply_id)
        .await?;

    Ok(Json(ApiResponse::empty()))
}
