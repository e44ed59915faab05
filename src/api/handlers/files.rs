//! Handler for browsing the data root.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::files::FilesQuery;
use crate::domain::entities::FileLookup;
use crate::error::AppError;
use crate::state::AppState;

/// Lists a directory or returns a file beneath `DATA_ROOT`.
///
/// # Endpoint
///
/// `GET /util/files?path=relative/path`
///
/// # Response
///
/// A directory:
///
/// ```json
/// { "root": "/srv/data", "target": "/srv/data/logs",
///   "entries": [{ "name": "a.txt", "path": "logs/a.txt", "type": "file", "size": 12 }] }
/// ```
///
/// A file: `{ "root", "target", "size", "content" }` with content capped at
/// 16,000 characters.
///
/// # Errors
///
/// - 400 Bad Request if the path escapes the root, holds a NUL byte or is too long
/// - 404 Not Found if nothing exists at the path
pub async fn files_handler(
    State(state): State<AppState>,
    Query(query): Query<FilesQuery>,
) -> Result<Json<FileLookup>, AppError> {
    query.validate()?;

    let lookup = state.file_browser.browse(query.path.as_deref()).await?;
    Ok(Json(lookup))
}
