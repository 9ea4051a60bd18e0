//! File category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Content category of a file.
///
/// The set is closed: client-supplied category strings are coerced with
/// [`FileCategory::from_str_lossy`], and anything unrecognized lands in
/// [`FileCategory::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "file_category", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileCategory {
    /// Design assets (sketches, mockups, CAD).
    Design,
    /// Text documents, spreadsheets, presentations.
    Document,
    /// Raster and vector images.
    Image,
    /// Video content.
    Video,
    /// Audio content.
    Audio,
    /// Compressed archives.
    Archive,
    /// Source code and scripts.
    Code,
    /// Everything else.
    Other,
}

impl FileCategory {
    /// Coerce a client-supplied string into the closed set.
    ///
    /// Matching is case-insensitive; unknown values become `Other`.
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "DESIGN" => Self::Design,
            "DOCUMENT" => Self::Document,
            "IMAGE" => Self::Image,
            "VIDEO" => Self::Video,
            "AUDIO" => Self::Audio,
            "ARCHIVE" => Self::Archive,
            "CODE" => Self::Code,
            _ => Self::Other,
        }
    }

    /// Return the category as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Design => "DESIGN",
            Self::Document => "DOCUMENT",
            Self::Image => "IMAGE",
            Self::Video => "VIDEO",
            Self::Audio => "AUDIO",
            Self::Archive => "ARCHIVE",
            Self::Code => "CODE",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lossy_coercion_is_case_insensitive() {
        assert_eq!(FileCategory::from_str_lossy("design"), FileCategory::Design);
        assert_eq!(FileCategory::from_str_lossy("Design"), FileCategory::Design);
        assert_eq!(FileCategory::from_str_lossy(" CODE "), FileCategory::Code);
    }

    #[test]
    fn test_unknown_becomes_other() {
        assert_eq!(
            FileCategory::from_str_lossy("blueprint"),
            FileCategory::Other
        );
        assert_eq!(FileCategory::from_str_lossy(""), FileCategory::Other);
    }

    #[test]
    fn test_wire_form() {
        assert_eq!(FileCategory::Design.to_string(), "DESIGN");
        let json = serde_json::to_string(&FileCategory::Design).unwrap();
        assert_eq!(json, "\"DESIGN\"");
    }
}
