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
        study::{
            CreateStudyDto, JoinStudyDto, StudyDto, StudyMemberDto, TransferLeaderDto,
            UpdateStudyDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::study::StudyParams,
        service::study::StudyService,
        state::AppState,
    },
};

/// Tag for grouping study endpoints in OpenAPI documentation
pub static STUDY_TAG: &str = "study";

/// Creates a study led by the caller.
///
/// # Access Control
/// - Authenticated member; becomes the joined leader
///
/// # Returns
/// - `201 Created` - Study with its leader membership
/// - `400 Bad Request` - Blank name or capacity below one
/// - `401 Unauthorized` - No member in session
#[utoipa::path(
    post,
    path = "/api/studies",
    tag = STUDY_TAG,
    request_body = CreateStudyDto,
    responses(
        (status = 201, description = "Study created", body = ApiResponse<StudyDto>),
        (status = 400, description = "Invalid study data"),
        (status = 401, description = "No member in session")
    ),
)]
pub async fn create_study(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateStudyDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    let study = StudyService::new(&state.db)
        .create(member.id, StudyParams::from_create_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(study.into_dto())),
    ))
}

/// Gets a study with its members.
///
/// # Access Control
/// - Public; only the leader sees waiting join requests
#[utoipa::path(
    get,
    path = "/api/studies/{study_id}",
    tag = STUDY_TAG,
    params(
        ("study_id" = i32, Path, description = "Study ID")
    ),
    responses(
        (status = 200, description = "Study detail", body = ApiResponse<StudyDto>),
        (status = 404, description = "Study not found")
    ),
)]
pub async fn get_study(
    State(state): State<AppState>,
    session: Session,
    Path(study_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session).current().await?;

    let study = StudyService::new(&state.db).get(viewer, study_id).await?;

    Ok(Json(ApiResponse::success(study.into_dto())))
}

/// Updates name, intro and capacity of a study.
#[utoipa::path(
    put,
    path = "/api/studies/{study_id}",
    tag = STUDY_TAG,
    params(
        ("study_id" = i32, Path, description = "Study ID")
    ),
    request_body = UpdateStudyDto,
    responses(
        (status = 200, description = "Updated study", body = ApiResponse<StudyDto>),
        (status = 400, description = "Invalid data or capacity below joined count"),
        (status = 401, description = "No member in session"),
        (status = 403, description = "Caller is not the leader"),
        (status = 404, description = "Study not found")
    ),
)]
pub async fn update_study(
    State(state): State<AppState>,
    session: Session,
    Path(study_id): Path<i32>,
    Json(payload): Json<UpdateStudyDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    let study = StudyService::new(&state.db)
        .update(member.id, study_id, StudyParams::from_update_dto(payload))
        .await?;

    Ok(Json(ApiResponse::success(study.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/studies/{study_id}",
    tag = STUDY_TAG,
    params(
        ("study_id" = i32, Path, description = "Study ID")
    ),
    responses(
        (status = 200, description = "Study deleted"),
        (status = 401, description = "No member in session"),
        (status = 403, description = "Caller is not the leader"),
        (status = 404, description = "Study not found")
    ),
)]
pub async fn delete_study(
    State(state): State<AppState>,
    session: Session,
    Path(study_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    StudyService::new(&state.db).delete(member.id, study_id).await?;

    Ok(Json(ApiResponse::empty()))
}

/// Files a join request; the membership waits for the leader's decision.
///
/// # Returns
/// - `201 Created` - Waiting membership
/// - `401 Unauthorized` - No member in session
/// - `404 Not Found` - Study not found
/// - `409 Conflict` - Caller already waiting or joined
#[utoipa::path(
    post,
    path = "/api/studies/{study_id}/join",
    tag = STUDY_TAG,
    params(
        ("study_id" = i32, Path, description = "Study ID")
    ),
    request_body = JoinStudyDto,
    responses(
        (status = 201, description = "Join request filed", body = ApiResponse<StudyMemberDto>),
        (status = 401, description = "No member in session"),
        (status = 404, description = "Study not found"),
        (status = 409, description = "Already waiting or joined")
    ),
)]
pub async fn join_study(
    State(state): State<AppState>,
    session: Session,
    Path(study_id): Path<i32>,
    Json(payload): Json<JoinStudyDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    let membership = StudyService::new(&state.db)
        .join(member.id, study_id, payload.intro)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(membership.into_dto())),
    ))
}

/// Accepts a waiting join request.
///
/// # Returns
/// - `200 OK` - Member joined
/// - `400 Bad Request` - Member has no pending join request
/// - `403 Forbidden` - Caller is not the leader
/// - `404 Not Found` - Study not found
/// - `409 Conflict` - Study is full
#[utoipa::path(
    post,
    path = "/api/studies/{study_id}/members/{member_id}/accept",
    tag = STUDY_TAG,
    params(
        ("study_id" = i32, Path, description = "Study ID"),
        ("member_id" = i32, Path, description = "Applicant member ID")
    ),
    responses(
        (status = 200, description = "Member joined"),
        (status = 401, description = "No member in session"),
        (status = 403, description = "Caller is not the leader"),
        (status = 400, description = "Member has no pending join request"),
        (status = 404, description = "Study not found"),
        (status = 409, description = "Study is full")
    ),
)]
pub async fn accept_member(
    State(state): State<AppState>,
    session: Session,
    Path((study_id, member_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let leader = AuthGuard::new(&state.db, &session).require().await?;

    StudyService::new(&state.db)
        .accept(leader.id, study_id, member_id)
        .await?;

    Ok(Json(ApiResponse::empty()))
}

/// Rejects a waiting join request.
#[utoipa::path(
    post,
    path = "/api/studies/{study_id}/members/{member_id}/disapprove",
    tag = STUDY_TAG,
    params(
        ("study_id" = i32, Path, description = "Study ID"),
        ("member_id" = i32, Path, description = "Applicant member ID")
    ),
    responses(
        (status = 200, description = "Join request rejected"),
        (status = 401, description = "No member in session"),
        (status = 403, description = "Caller is not the leader"),
        (status = 400, description = "Member has no pending join request"),
        (status = 404, description = "Study not found")
    ),
)]
pub async fn disapprove_member(
    State(state): State<AppState>,
    session: Session,
    Path((study_id, member_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let leader = AuthGuard::new(&state.db, &session).require().await?;

    StudyService::new(&state.db)
        .disapprove(leader.id, study_id, member_id)
        .await?;

    Ok(Json(ApiResponse::empty()))
}

/// Leaves a study. The leader has to transfer leadership first.
#[utoipa::path(
    post,
    path = "/api/studies/{study_id}/leave",
    tag = STUDY_TAG,
    params(
        ("study_id" = i32, Path, description = "Study ID")
    ),
    responses(
        (status = 200, description = "Left the study"),
        (status = 401, description = "No member in session"),
        (status = 403, description = "Caller is the leader"),
        (status = 400, description = "Caller is not a joined member"),
        (status = 404, description = "Study not found")
    ),
)]
pub async fn leave_study(
    State(state): State<AppState>,
    session: Session,
    Path(study_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    StudyService::new(&state.db).leave(member.id, study_id).await?;

    Ok(Json(ApiResponse::empty()))
}

/// Removes a joined member from the study.
#[utoipa::path(
    delete,
    path = "/api/studies/{study_id}/members/{member_id}",
    tag = STUDY_TAG,
    params(
        ("study_id" = i32, Path, description = "Study ID"),
        ("member_id" = i32, Path, description = "Member ID to remove")
    ),
    responses(
        (status = 200, description = "Member removed"),
        (status = 401, description = "No member in session"),
        (status = 403, description = "Caller is not the leader"),
        (status = 400, description = "Member is not a joined member"),
        (status = 404, description = "Study not found")
    ),
)]
pub async fn kick_member(
    State(state): State<AppState>,
    session: Session,
    Path((study_id, member_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let leader = AuthGuard::new(&state.db, &session).require().await?;

    StudyService::new(&state.db)
        .kick(leader.id, study_id, member_id)
        .await?;

    Ok(Json(ApiResponse::empty()))
}

/// Hands leadership to a joined member; the caller becomes a regular member.
#[utoipa::path(
    post,
    path = "/api/studies/{study_id}/leader",
    tag = STUDY_TAG,
    params(
        ("study_id" = i32, Path, description = "Study ID")
    ),
    request_body = TransferLeaderDto,
    responses(
        (status = 200, description = "Leadership transferred"),
        (status = 401, description = "No member in session"),
        (status = 403, description = "Caller is not the leader"),
        (status = 400, description = "Member is not a joined member"),
        (status = 404, description = "Study not found")
    ),
)]
pub async fn transfer_leader(
    State(state): State<AppState>,
    session: Session,
    Path(study_id): Path<i32>,
    Json(payload): Json<TransferLeaderDto>,
) -> Result<impl IntoResponse, AppError> {
    let leader = AuthGuard::new(&state.db, &session).require().await?;

    StudyService::new(&state.db)
        .transfer(leader.id, study_id, payload.member_id)
        .await?;

    Ok(Json(ApiResponse::empty()))
}
