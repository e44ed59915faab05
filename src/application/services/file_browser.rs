//! Root-confined file browsing.

use serde_json::json;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

use crate::domain::entities::{
    DirectoryListing, EntryKind, FileContent, FileEntry, FileLookup,
};
use crate::error::AppError;
use crate::utils::path_guard::{
    has_forbidden_chars, is_within, normalize, relative_slash_path, resolve_under,
};

/// Maximum number of characters of file content returned.
pub const MAX_CONTENT_CHARS: usize = 16_000;

/// Appended to content cut at [`MAX_CONTENT_CHARS`].
pub const TRUNCATION_MARKER: &str = "...";

/// Upper bound on bytes read from a file: enough for [`MAX_CONTENT_CHARS`] + 1
/// four-byte characters after a byte-order mark, so a cut mid-character is
/// always past the truncation point.
pub const MAX_READ_BYTES: u64 = (MAX_CONTENT_CHARS as u64 + 1) * 4 + 3;

/// Error message for paths resolving outside the root.
pub const OUTSIDE_ROOT_MESSAGE: &str = "Path is outside of allowed root";

/// Lists directories and reads files beneath a fixed root directory.
///
/// # Confinement
///
/// 1. The root and the requested path are joined and normalized lexically.
/// 2. The result must be the root itself or lie beneath it.
/// 3. If the result exists, its canonical (symlink-resolved) form must also
///    lie beneath the canonical root, so links cannot expose outside files.
/// 4. Listings report no size for links whose target leaves the root.
#[derive(Debug, Clone)]
pub struct FileBrowser {
    root: PathBuf,
}

impl FileBrowser {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured root as given.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `path` relative to the root and returns a listing or the file content.
    ///
    /// An absent or empty path targets the root itself.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidArgument`] if `path` contains a NUL byte
    /// - [`AppError::Validation`] if the resolved path is outside the root, or
    ///   is neither a directory nor a regular file (FIFOs, devices, sockets)
    /// - [`AppError::NotFound`] if nothing exists at the resolved path
    /// - [`AppError::Internal`] on other I/O failures
    pub async fn browse(&self, path: Option<&str>) -> Result<FileLookup, AppError> {
        if let Some(p) = path
            && has_forbidden_chars(p)
        {
            return Err(AppError::invalid_argument(
                "Path contains invalid characters",
                json!({ "path": p.replace('\0', "\\0") }),
            ));
        }

        let root = normalize(&std::path::absolute(&self.root)?);
        let target = match path {
            Some(p) if !p.is_empty() => resolve_under(&root, p),
            _ => root.clone(),
        };

        if !is_within(&root, &target) {
            tracing::warn!(path = %target.display(), "Rejected path outside of data root");
            return Err(outside_root(&root, &target));
        }

        let metadata = match tokio::fs::metadata(&target).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AppError::not_found(
                    "Path not found",
                    json!({ "root": display(&root), "target": display(&target) }),
                ));
            }
            Err(e) => return Err(e.into()),
        };

        let canonical_root = tokio::fs::canonicalize(&root).await?;
        let canonical_target = tokio::fs::canonicalize(&target).await?;
        if !is_within(&canonical_root, &canonical_target) {
            tracing::warn!(
                path = %target.display(),
                resolved = %canonical_target.display(),
                "Rejected link pointing outside of data root"
            );
            return Err(outside_root(&root, &target));
        }

        if metadata.is_dir() {
            let entries = list_entries(&root, &canonical_root, &target).await?;
            Ok(FileLookup::Directory(DirectoryListing {
                root: display(&root),
                target: display(&target),
                entries,
            }))
        } else if metadata.is_file() {
            let bytes = read_prefix(&target).await?;
            Ok(FileLookup::File(FileContent {
                root: display(&root),
                target: display(&target),
                size: metadata.len(),
                content: truncate_content(&decode_text(&bytes)),
            }))
        } else {
            tracing::warn!(path = %target.display(), "Rejected non-regular file");
            Err(AppError::bad_request(
                "Path is not a regular file",
                json!({ "root": display(&root), "target": display(&target) }),
            ))
        }
    }
}

/// Reads at most [`MAX_READ_BYTES`] from the start of `path`.
async fn read_prefix(path: &Path) -> Result<Vec<u8>, AppError> {
    let file = tokio::fs::File::open(path).await?;
    let mut reader = file.take(MAX_READ_BYTES);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).await?;
    Ok(bytes)
}

async fn list_entries(
    root: &Path,
    canonical_root: &Path,
    dir: &Path,
) -> Result<Vec<FileEntry>, AppError> {
    let mut entries = Vec::new();
    let mut read_dir = tokio::fs::read_dir(dir).await?;

    while let Some(entry) = read_dir.next_entry().await? {
        let entry_path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        let (kind, size) = entry_kind(canonical_root, &entry_path).await;

        entries.push(FileEntry {
            name,
            path: relative_slash_path(root, &entry_path),
            kind,
            size,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Kind and size of a listed entry, following symlinks.
///
/// Dangling links and links resolving outside `canonical_root` are reported as
/// directories without size.
async fn entry_kind(canonical_root: &Path, path: &Path) -> (EntryKind, Option<u64>) {
    match tokio::fs::canonicalize(path).await {
        Ok(resolved) if is_within(canonical_root, &resolved) => {}
        _ => return (EntryKind::Dir, None),
    }

    match tokio::fs::metadata(path).await {
        Ok(m) if m.is_file() => (EntryKind::File, Some(m.len())),
        _ => (EntryKind::Dir, None),
    }
}

/// Decodes file bytes as UTF-8, replacing invalid sequences and dropping a
/// leading byte-order mark.
fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix('\u{feff}').unwrap_or(&text).to_string()
}

/// Cuts `content` to [`MAX_CONTENT_CHARS`] characters plus [`TRUNCATION_MARKER`].
pub fn truncate_content(content: &str) -> String {
    match content.char_indices().nth(MAX_CONTENT_CHARS) {
        Some((cut, _)) => format!("{}{}", &content[..cut], TRUNCATION_MARKER),
        None => content.to_string(),
    }
}

fn outside_root(root: &Path, target: &Path) -> AppError {
    AppError::bad_request(
        OUTSIDE_ROOT_MESSAGE,
        json!({ "root": display(root), "target": display(target) }),
    )
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
