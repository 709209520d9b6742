use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tower_sessions::Session;

use crate::{
    model::{api::ApiResponse, file::UploadedFilesDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::file::{IncomingFile, UploadedFile},
        service::file::FileService,
        state::AppState,
    },
};

/// Tag for grouping file endpoints in OpenAPI documentation
pub static FILE_TAG: &str = "file";

/// Characters left as-is in an RFC 5987 `filename*` value (`attr-char`).
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// Stores every file part of a multipart request.
///
/// The upload is all-or-nothing: if any file fails to store, files already
/// written by this request are removed and nothing is recorded. Parts without
/// content are skipped.
///
/// # Access Control
/// - Authenticated member
///
/// # Returns
/// - `201 Created` - Metadata of the stored files, in request order
/// - `400 Bad Request` - Malformed body or no file with content
/// - `401 Unauthorized` - No member in session
/// - `409 Conflict` - Storing a file failed, or the body broke off after a complete part
#[utoipa::path(
    post,
    path = "/api/files",
    tag = FILE_TAG,
    request_body(
        content_type = "multipart/form-data",
        description = "One part per file; the part's file name is kept as the original name"
    ),
    responses(
        (status = 201, description = "Files stored", body = ApiResponse<UploadedFilesDto>),
        (status = 400, description = "Malformed body or no file"),
        (status = 401, description = "No member in session"),
        (status = 409, description = "File upload failed")
    ),
)]
pub async fn upload_files(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require().await?;

    let files = read_files(&mut multipart).await?;

    let uploaded = FileService::new(&state.db, &state.file_store)
        .upload(member.id, files)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(UploadedFilesDto {
            files: uploaded.into_iter().map(UploadedFile::into_dto).collect(),
        })),
    ))
}

/// Streams a stored file back as an attachment.
///
/// # Access Control
/// - Authenticated member
///
/// # Returns
/// - `200 OK` - File content with `Content-Type` guessed from the original name
/// - `401 Unauthorized` - No member in session
/// - `404 Not Found` - File unknown or missing on disk
#[utoipa::path(
    get,
    path = "/api/files/{file_id}",
    tag = FILE_TAG,
    params(
        ("file_id" = i32, Path, description = "File ID")
    ),
    responses(
        (status = 200, description = "File content", content_type = "application/octet-stream"),
        (status = 401, description = "No member in session"),
        (status = 404, description = "File not found")
    ),
)]
pub async fn download_file(
    State(state): State<AppState>,
    session: Session,
    Path(file_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require().await?;

    let (file, bytes) = FileService::new(&state.db, &state.file_store)
        .download(file_id)
        .await?;

    let content_type = mime_guess::from_path(&file.original_name)
        .first_or_octet_stream()
        .to_string();
    let disposition = content_disposition(&file.original_name);

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

/// Collects every part of the body.
///
/// A body that is malformed from the start is a bad request. Once a complete part
/// has been read, a read failure (truncated stream, body limit) fails the upload.
async fn read_files(multipart: &mut Multipart) -> Result<Vec<IncomingFile>, AppError> {
    let mut files = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(files),
            Err(e) => return Err(read_failure(&files, e)),
        };

        let original_name = field
            .file_name()
            .or_else(|| field.name())
            .unwrap_or("upload")
            .to_string();
        let content_type = field.content_type().map(str::to_string);

        match field.bytes().await {
            Ok(bytes) => files.push(IncomingFile {
                original_name,
                content_type,
                bytes: bytes.to_vec(),
            }),
            Err(e) => return Err(read_failure(&files, e)),
        }
    }
}

fn read_failure(read: &[IncomingFile], e: MultipartError) -> AppError {
    if read.is_empty() {
        return e.into();
    }

    tracing::warn!("Upload body broke off after {} part(s): {}", read.len(), e);
    AppError::FileUploadFail(format!("File upload failed: {}", e))
}

/// `attachment` disposition with an ASCII fallback name and the exact UTF-8 name
/// in `filename*`.
fn content_disposition(original_name: &str) -> String {
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        attachment_name(original_name),
        utf8_percent_encode(original_name, ATTR_CHAR)
    )
}

/// Header-safe form of a file name: anything outside printable ASCII, quotes and
/// backslashes become `_`.
fn attachment_name(original_name: &str) -> String {
    original_name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect()
}
