//! Route table and OpenAPI document.
//!
//! Handlers are registered through `OpenApiRouter` so each route and its
//! `#[utoipa::path]` documentation come from the same place. The assembled
//! document is served by Swagger UI at `/api/docs`.

use axum::{extract::DefaultBodyLimit, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, board, file, reply, study, vote},
    state::AppState,
};

/// Largest accepted multipart upload body.
const UPLOAD_BODY_LIMIT: usize = 50 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "spinner", description = "Community board, vote and study API"),
    tags(
        (name = "auth", description = "Signup, login and session"),
        (name = "board", description = "Posts and reports"),
        (name = "reply", description = "Replies on posts"),
        (name = "vote", description = "Votes, ballots and results"),
        (name = "study", description = "Studies and membership"),
        (name = "file", description = "File upload and download")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::signup))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::me))
        .routes(routes!(board::create_post, board::list_posts))
        .routes(routes!(
            board::get_post,
            board::update_post,
            board::delete_post
        ))
        .routes(routes!(board::report_post))
        .routes(routes!(reply::create_reply))
        .routes(routes!(reply::update_reply, reply::delete_reply))
        .routes(routes!(vote::create_vote, vote::get_post_vote))
        .routes(routes!(vote::get_vote_result))
        .routes(routes!(vote::update_vote, vote::delete_vote))
        .routes(routes!(vote::delete_vote_option))
        .routes(routes!(vote::close_vote))
        .routes(routes!(vote::cast_ballot))
        .routes(routes!(study::create_study))
        .routes(routes!(
            study::get_study,
            study::update_study,
            study::delete_study
        ))
        .routes(routes!(study::join_study))
        .routes(routes!(study::accept_member))
        .routes(routes!(study::disapprove_member))
        .routes(routes!(study::leave_study))
        .routes(routes!(study::kick_member))
        .routes(routes!(study::transfer_leader))
        .routes(routes!(file::download_file))
        .merge(
            OpenApiRouter::new()
                .routes(routes!(file::upload_files))
                .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
