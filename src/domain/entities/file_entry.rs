//! Results of browsing the data root.

use serde::Serialize;

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
}

/// Immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub name: String,
    /// Path relative to the data root, `/`-separated.
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Byte length for files, `null` for directories.
    pub size: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryListing {
    pub root: String,
    pub target: String,
    pub entries: Vec<FileEntry>,
}

/// Contents of a single file, possibly truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileContent {
    pub root: String,
    pub target: String,
    /// Size on disk in bytes, independent of truncation.
    pub size: u64,
    pub content: String,
}

/// Outcome of resolving a path under the data root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FileLookup {
    Directory(DirectoryListing),
    File(FileContent),
}
