//! Query parameters for browsing the data root.

use serde::Deserialize;
use validator::Validate;

/// Longest accepted `path` value, in bytes.
pub const MAX_PATH_LENGTH: u64 = 4096;

/// `?path=` relative to the data root. Absent or empty targets the root.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct FilesQuery {
    #[validate(length(max = MAX_PATH_LENGTH, message = "Path is too long"))]
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_length_limit() {
        let ok = FilesQuery {
            path: Some("a".repeat(MAX_PATH_LENGTH as usize)),
        };
        assert!(ok.validate().is_ok());

        let too_long = FilesQuery {
            path: Some("a".repeat(MAX_PATH_LENGTH as usize + 1)),
        };
        assert!(too_long.validate().is_err());

        assert!(FilesQuery::default().validate().is_ok());
    }
}
