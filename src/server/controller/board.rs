use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ApiResponse,
        board::{CreatePostDto, PostDto, PostPageDto, ReportPostDto, UpdatePostDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::post::{parse_board_type, CreatePostParams, PostListParams, UpdatePostParams},
        service::board::BoardService,
        state::AppState,
    },
};

/// Tag for grouping board endpoints in OpenAPI documentation
pub static BOARD_TAG: &str = "board";

/// Query parameters of the post listing.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PostListQuery {
    /// Only posts with an id below this one are returned.
    pub cursor: Option<i32>,
    /// Page size, 10 by default, clamped to 1..=100.
    pub size: Option<u64>,
    /// Case-sensitive substring of the title or author nickname.
    pub keyword: Option<String>,
}

/// Creates a post on a board.
///
/// # Access Control
/// - Authenticated member
///
/// # Arguments
/// - `board_type` - Board path segment (`free`, `notice`, `question`, `study`)
/// - `payload` - Title and content
///
/// # Returns
/// - `201 Created` - Post created
/// - `400 Bad Request` - Unknown board type or blank title
/// - `401 Unauthorized` - No member in session
#[utoipa::path(
    post,
    path = "/api/boards/{board_type}/posts",
    tag = BOARD_TAG,
    params(
        ("board_type" = String, Path, description = "Board type")
    ),
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = ApiResponse<PostDto>),
        (status = 400, description = "Unknown board type or blank title"),
        (status = 401, description = "No member in session")
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    session: Session,
    Path(board_type): Path<String>,
    Json(payload): Json<CreatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;
    let board_type = parse_board_type(&board_type)?;

    let params = CreatePostParams::from_dto(member.id, board_type, payload);
    let post = BoardService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(post.into_dto())),
    ))
}

/// Lists visible posts of a board, newest first.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - One page of posts with the cursor of the next page
/// - `400 Bad Request` - Unknown board type
#[utoipa::path(
    get,
    path = "/api/boards/{board_type}/posts",
    tag = BOARD_TAG,
    params(
        ("board_type" = String, Path, description = "Board type"),
        PostListQuery
    ),
    responses(
        (status = 200, description = "Page of posts", body = ApiResponse<PostPageDto>),
        (status = 400, description = "Unknown board type")
    ),
)]
pub async fn list_posts(
    State(state): State<AppState>,
    Path(board_type): Path<String>,
    Query(query): Query<PostListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let board_type = parse_board_type(&board_type)?;

    let params = PostListParams::new(board_type, query.cursor, query.size, query.keyword);
    let page = BoardService::new(&state.db).list(params).await?;

    Ok(Json(ApiResponse::success(page.into_dto())))
}

/// Gets a post with its reply tree.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Post detail
/// - `404 Not Found` - Post missing, removed, hidden by reports or on another board
#[utoipa::path(
    get,
    path = "/api/boards/{board_type}/posts/{post_id}",
    tag = BOARD_TAG,
    params(
        ("board_type" = String, Path, description = "Board type"),
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post detail", body = ApiResponse<PostDto>),
        (status = 404, description = "Post not found")
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path((board_type, post_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let board_type = parse_board_type(&board_type)?;

    let post = BoardService::new(&state.db)
        .get_detail(board_type, post_id)
        .await?;

    Ok(Json(ApiResponse::success(post.into_dto())))
}

/// Replaces title and content of a post.
///
/// # Access Control
/// - Post author
///
/// # Returns
/// - `200 OK` - Updated post
/// - `400 Bad Request` - Blank title
/// - `401 Unauthorized` - No member in session
/// - `403 Forbidden` - Caller is not the author
/// - `404 Not Found` - Post not found
#[utoipa::path(
    put,
    path = "/api/boards/{board_type}/posts/{post_id}",
    tag = BOARD_TAG,
    params(
        ("board_type" = String, Path, description = "Board type"),
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = UpdatePostDto,
    responses(
        (status = 200, description = "Updated post", body = ApiResponse<PostDto>),
        (status = 400, description = "Blank title"),
        (status = 401, description = "No member in session"),
        (status = 403, description = "Caller is not the author"),
        (status = 404, description = "Post not found")
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    session: Session,
    Path((board_type, post_id)): Path<(String, i32)>,
    Json(payload): Json<UpdatePostDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;
    let board_type = parse_board_type(&board_type)?;

    let post = BoardService::new(&state.db)
        .update(
            member.id,
            board_type,
            post_id,
            UpdatePostParams::from_dto(payload),
        )
        .await?;

    Ok(Json(ApiResponse::success(post.into_dto())))
}

/// Soft-deletes a post.
///
/// # Access Control
/// - Post author
#[utoipa::path(
    delete,
    path = "/api/boards/{board_type}/posts/{post_id}",
    tag = BOARD_TAG,
    params(
        ("board_type" = String, Path, description = "Board type"),
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post deleted"),
        (status = 401, description = "No member in session"),
        (status = 403, description = "Caller is not the author"),
        (status = 404, description = "Post not found")
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    session: Session,
    Path((board_type, post_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;
    let board_type = parse_board_type(&board_type)?;

    BoardService::new(&state.db)
        .delete(member.id, board_type, post_id)
        .await?;

    Ok(Json(ApiResponse::empty()))
}

/// Reports a post. Once enough members reported it the post is hidden.
///
/// # Access Control
/// - Authenticated member
///
/// # Returns
/// - `201 Created` - Report stored
/// - `401 Unauthorized` - No member in session
/// - `404 Not Found` - Post not found
/// - `409 Conflict` - Caller already reported this post
#[utoipa::path(
    post,
    path = "/api/boards/{board_type}/posts/{post_id}/reports",
    tag = BOARD_TAG,
    params(
        ("board_type" = String, Path, description = "Board type"),
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = ReportPostDto,
    responses(
        (status = 201, description = "Report stored"),
        (status = 401, description = "No member in session"),
        (status = 404, description = "Post not found"),
        (status = 409, description = "Post already reported by the caller")
    ),
)]
pub async fn report_post(
    State(state): State<AppState>,
    session: Session,
    Path((board_type, post_id)): Path<(String, i32)>,
    Json(payload): Json<ReportPostDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;
    let board_type = parse_board_type(&board_type)?;

    BoardService::new(&state.db)
        .report(
            member.id,
            board_type,
            post_id,
            payload.reason,
            state.report_threshold,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::empty())))
}
