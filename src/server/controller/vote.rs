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
        vote::{
            CastBallotDto, CreateVoteDto, DeleteVoteDto, UpdateVoteDto, VoteCreatedDto, VoteDto,
            VoteResultDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::vote::{CastBallotParams, CreateVoteParams, UpdateVoteParams},
        service::vote::VoteService,
        state::AppState,
    },
};

/// Tag for grouping vote endpoints in OpenAPI documentation
pub static VOTE_TAG: &str = "vote";

/// Creates a vote on the caller's post.
///
/// # Access Control
/// - Author of the post
///
/// # Arguments
/// - `post_id` - Post the vote hangs on
/// - `payload` - Name, mode, context, time window and option names
///
/// # Returns
/// - `201 Created` - Id of the new vote
/// - `400 Bad Request` - Invalid name, options, window or initial mode
/// - `401 Unauthorized` - No member in session
/// - `403 Forbidden` - Caller is not the post author
/// - `404 Not Found` - Post not found
/// - `409 Conflict` - Post already has an open vote
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/votes",
    tag = VOTE_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = CreateVoteDto,
    responses(
        (status = 201, description = "Vote created", body = ApiResponse<VoteCreatedDto>),
        (status = 400, description = "Invalid vote data"),
        (status = 401, description = "No member in session"),
        (status = 403, description = "Caller is not the post author"),
        (status = 404, description = "Post not found"),
        (status = 409, description = "Post already has an open vote")
    ),
)]
pub async fn create_vote(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
    Json(payload): Json<CreateVoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    let params = CreateVoteParams::from_dto(post_id, payload);
    let id = VoteService::new(&state.db).create(member.id, params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(VoteCreatedDto { id })),
    ))
}

/// Gets the newest vote of a post.
///
/// Counts are included once the caller has voted on it or the vote is closed.
///
/// # Access Control
/// - Public; anonymous callers never see counts of an open vote
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}/votes",
    tag = VOTE_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Newest vote of the post", body = ApiResponse<VoteDto>),
        (status = 404, description = "Post not found or has no vote")
    ),
)]
pub async fn get_post_vote(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).current().await?;

    let view = VoteService::new(&state.db)
        .list_for_post(viewer, post_id)
        .await?;

    Ok(Json(ApiResponse::success(view.into_dto())))
}

/// Gets the tallies of a vote.
///
/// # Access Control
/// - Community vote: members who voted on it
/// - Study vote: any member once the vote is closed
#[utoipa::path(
    get,
    path = "/api/votes/{vote_id}/result",
    tag = VOTE_TAG,
    params(
        ("vote_id" = i32, Path, description = "Vote ID")
    ),
    responses(
        (status = 200, description = "Vote tallies", body = ApiResponse<VoteResultDto>),
        (status = 400, description = "Result not accessible to the caller"),
        (status = 401, description = "No member in session"),
        (status = 404, description = "Vote not found")
    ),
)]
pub async fn get_vote_result(
    State(state): State<AppState>,
    session: Session,
    Path(vote_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    let result = VoteService::new(&state.db)
        .result(member.id, vote_id)
        .await?;

    Ok(Json(ApiResponse::success(result.into_dto())))
}

/// Updates a vote and renames its options.
#[utoipa::path(
    put,
    path = "/api/votes/{vote_id}",
    tag = VOTE_TAG,
    params(
        ("vote_id" = i32, Path, description = "Vote ID")
    ),
    request_body = UpdateVoteDto,
    responses(
        (status = 200, description = "Vote updated"),
        (status = 400, description = "Invalid vote data"),
        (status = 401, description = "No member in session"),
        (status = 403, description = "Caller is not the post author"),
        (status = 404, description = "Vote or option not found")
    ),
)]
pub async fn update_vote(
    State(state): State<AppState>,
    session: Session,
    Path(vote_id): Path<i32>,
    Json(payload): Json<UpdateVoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    VoteService::new(&state.db)
        .update(member.id, vote_id, UpdateVoteParams::from_dto(payload))
        .await?;

    Ok(Json(ApiResponse::empty()))
}

/// Soft-deletes a vote together with the listed options.
#[utoipa::path(
    delete,
    path = "/api/votes/{vote_id}",
    tag = VOTE_TAG,
    params(
        ("vote_id" = i32, Path, description = "Vote ID")
    ),
    request_body = DeleteVoteDto,
    responses(
        (status = 200, description = "Vote deleted"),
        (status = 401, description = "No member in session"),
        (status = 403, description = "Caller is not the post author"),
        (status = 404, description = "Vote or option not found")
    ),
)]
pub async fn delete_vote(
    State(state): State<AppState>,
    session: Session,
    Path(vote_id): Path<i32>,
    Json(payload): Json<DeleteVoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    VoteService::new(&state.db)
        .delete(member.id, vote_id, payload.option_ids)
        .await?;

    Ok(Json(ApiResponse::empty()))
}

/// Soft-deletes one option of a vote.
#[utoipa::path(
    delete,
    path = "/api/votes/{vote_id}/options/{option_id}",
    tag = VOTE_TAG,
    params(
        ("vote_id" = i32, Path, description = "Vote ID"),
        ("option_id" = i32, Path, description = "Option ID")
    ),
    responses(
        (status = 200, description = "Option deleted"),
        (status = 401, description = "No member in session"),
        (status = 403, description = "Caller is not the post author"),
        (status = 404, description = "Vote or option not found")
    ),
)]
pub async fn delete_vote_option(
    State(state): State<AppState>,
    session: Session,
    Path((vote_id, option_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    VoteService::new(&state.db)
        .delete_option(member.id, vote_id, option_id)
        .await?;

    Ok(Json(ApiResponse::empty()))
}

/// Closes a vote. Closing a closed vote succeeds.
#[utoipa::path(
    post,
    path = "/api/votes/{vote_id}/close",
    tag = VOTE_TAG,
    params(
        ("vote_id" = i32, Path, description = "Vote ID")
    ),
    responses(
        (status = 200, description = "Vote closed"),
        (status = 401, description = "No member in session"),
        (status = 403, description = "Caller is not the post author"),
        (status = 404, description = "Vote not found")
    ),
)]
pub async fn close_vote(
    State(state): State<AppState>,
    session: Session,
    Path(vote_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    VoteService::new(&state.db).close(member.id, vote_id).await?;

    Ok(Json(ApiResponse::empty()))
}

/// Casts the caller's ballot.
///
/// # Access Control
/// - Authenticated member; `member_id` in the body must be the caller
///
/// # Returns
/// - `201 Created` - Ballot stored
/// - `400 Bad Request` - Selection does not fit the vote mode, or voter mismatch
/// - `401 Unauthorized` - No member in session
/// - `404 Not Found` - Vote or a selected option not found
/// - `409 Conflict` - Vote closed or caller already voted
#[utoipa::path(
    post,
    path = "/api/votes/{vote_id}/ballots",
    tag = VOTE_TAG,
    params(
        ("vote_id" = i32, Path, description = "Vote ID")
    ),
    request_body = CastBallotDto,
    responses(
        (status = 201, description = "Ballot stored"),
        (status = 400, description = "Invalid selection or voter mismatch"),
        (status = 401, description = "No member in session"),
        (status = 404, description = "Vote or option not found"),
        (status = 409, description = "Vote closed or already voted")
    ),
)]
pub async fn cast_ballot(
    State(state): State<AppState>,
    session: Session,
    Path(vote_id): Path<i32>,
    Json(payload): Json<CastBallotDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    VoteService::new(&state.db)
        .cast(member.id, CastBallotParams::from_dto(vote_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::empty())))
}
