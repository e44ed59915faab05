//! Path normalization and root confinement.
//!
//! Normalization is purely lexical: `.` segments are dropped and `..` removes
//! the preceding segment. Symlinks are not resolved here; callers that need
//! that check the canonical form of paths that exist on disk.

use std::path::{Component, Path, PathBuf};

/// Lexically normalizes `path` without touching the filesystem.
///
/// `..` at the root stays at the root, as it does on every supported platform.
///
/// ```ignore
/// assert_eq!(normalize(Path::new("/data/a/../b/./c")), PathBuf::from("/data/b/c"));
/// ```
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(part) => out.push(part),
        }
    }

    out
}

/// Joins `relative` onto `root` and normalizes the result.
///
/// An absolute `relative` replaces `root` entirely, which callers must then
/// reject through [`is_within`].
pub fn resolve_under(root: &Path, relative: &str) -> PathBuf {
    normalize(&root.join(relative))
}

/// Whether `path` is `root` or lies beneath it, compared component by component.
///
/// `/data2` is not within `/data`.
pub fn is_within(root: &Path, path: &Path) -> bool {
    path.starts_with(root)
}

/// Whether `path` contains characters no filesystem path may hold.
pub fn has_forbidden_chars(path: &str) -> bool {
    path.contains('\0')
}

/// Renders `path` relative to `root` with `/` separators.
pub fn relative_slash_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);

    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_removes_dots() {
        assert_eq!(
            normalize(Path::new("/data/a/../b/./c")),
            PathBuf::from("/data/b/c")
        );
        assert_eq!(normalize(Path::new("/data/./")), PathBuf::from("/data"));
    }

    #[test]
    fn test_normalize_parent_at_root_stays_at_root() {
        assert_eq!(normalize(Path::new("/../../etc")), PathBuf::from("/etc"));
    }

    #[test]
    fn test_normalize_relative_keeps_leading_parents() {
        assert_eq!(normalize(Path::new("../a/../b")), PathBuf::from("../b"));
    }

    #[test]
    fn test_resolve_under_escapes_are_detected() {
        let root = Path::new("/srv/data");

        assert!(is_within(root, &resolve_under(root, "")));
        assert!(is_within(root, &resolve_under(root, "sub/file.txt")));
        assert!(is_within(root, &resolve_under(root, "sub/../file.txt")));

        assert!(!is_within(root, &resolve_under(root, "..")));
        assert!(!is_within(root, &resolve_under(root, "../data2/x")));
        assert!(!is_within(root, &resolve_under(root, "sub/../../other")));
        assert!(!is_within(root, &resolve_under(root, "/etc/passwd")));
    }

    #[test]
    fn test_is_within_is_component_wise() {
        assert!(!is_within(Path::new("/srv/data"), Path::new("/srv/data2")));
        assert!(is_within(Path::new("/srv/data"), Path::new("/srv/data")));
    }

    #[test]
    fn test_forbidden_chars() {
        assert!(has_forbidden_chars("bad\0path"));
        assert!(!has_forbidden_chars("spécial@file.txt"));
    }

    #[test]
    fn test_relative_slash_path() {
        let root = Path::new("/srv/data");
        assert_eq!(
            relative_slash_path(root, Path::new("/srv/data/sub/file.txt")),
            "sub/file.txt"
        );
        assert_eq!(relative_slash_path(root, Path::new("/srv/data/子")), "子");
    }
}
