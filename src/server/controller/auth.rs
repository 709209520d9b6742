use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ApiResponse,
        member::{LoginDto, MemberDto, SignupDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::member::{Member, SignupParams},
        service::member::MemberService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Registers a new member.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - Member registered
/// - `400 Bad Request` - Blank email, password or nickname
/// - `409 Conflict` - Email or nickname already taken
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Member registered", body = ApiResponse<MemberDto>),
        (status = 400, description = "Blank email, password or nickname"),
        (status = 409, description = "Email or nickname already taken")
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db)
        .signup(SignupParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(member.into_dto())),
    ))
}

/// Verifies credentials and binds the member to the session.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Signed in
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = ApiResponse<MemberDto>),
        (status = 401, description = "Unknown email or wrong password")
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_member_id(member.id).await?;

    Ok(Json(ApiResponse::success(member.into_dto())))
}

/// Clears the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed out")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Json(ApiResponse::empty()))
}

/// Returns the signed-in member.
///
/// # Access Control
/// - Authenticated member
///
/// # Returns
/// - `200 OK` - Current member
/// - `401 Unauthorized` - No member in session
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current member", body = ApiResponse<MemberDto>),
        (status = 401, description = "No member in session")
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    Ok(Json(ApiResponse::success(
        Member::from_entity(member).into_dto(),
    )))
}
