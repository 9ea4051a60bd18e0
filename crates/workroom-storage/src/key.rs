//! Storage key derivation for uploaded files.
//!
//! Keys are plain path-like strings the object store treats as opaque. The
//! layout groups objects by project, then optionally by folder, with a
//! millisecond timestamp prefix so repeated uploads of the same file name
//! never collide.

use chrono::Utc;

use workroom_core::error::AppError;
use workroom_core::result::AppResult;
use workroom_core::types::ObjectId;

/// Replace every character outside `[A-Za-z0-9._-]` with an underscore.
///
/// File names arrive from browsers and can contain anything, including
/// path separators. The sanitized name is what gets embedded in the
/// storage key, so it must be safe as a single path segment.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Derive the storage key for a new upload.
///
/// Layout: `projects/{project_id}/folders/{folder_id}/{millis}-{name}`,
/// with the `folders/` segment omitted for project-root uploads. Fails
/// with a validation error when the name sanitizes down to nothing.
pub fn derive_storage_key(
    project_id: ObjectId,
    folder_id: Option<ObjectId>,
    file_name: &str,
) -> AppResult<String> {
    let sanitized = sanitize_file_name(file_name.trim());
    if sanitized.is_empty() {
        return Err(AppError::validation("File name must not be empty"));
    }

    let millis = Utc::now().timestamp_millis();
    let key = match folder_id {
        Some(folder_id) => {
            format!("projects/{project_id}/folders/{folder_id}/{millis}-{sanitized}")
        }
        None => format!("projects/{project_id}/{millis}-{sanitized}"),
    };
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_safe_characters() {
        assert_eq!(sanitize_file_name("report_v2.final-1.pdf"), "report_v2.final-1.pdf");
    }

    #[test]
    fn test_sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize_file_name("q3 report (draft).pdf"), "q3_report__draft_.pdf");
        assert_eq!(sanitize_file_name("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_file_name("résumé.doc"), "r_sum_.doc");
    }

    #[test]
    fn test_derive_key_project_root() {
        let project_id = ObjectId::new();
        let key = derive_storage_key(project_id, None, "plan.pdf").unwrap();
        assert!(key.starts_with(&format!("projects/{project_id}/")));
        assert!(key.ends_with("-plan.pdf"));
        assert!(!key.contains("/folders/"));
    }

    #[test]
    fn test_derive_key_with_folder() {
        let project_id = ObjectId::new();
        let folder_id = ObjectId::new();
        let key = derive_storage_key(project_id, Some(folder_id), "plan.pdf").unwrap();
        assert!(key.starts_with(&format!("projects/{project_id}/folders/{folder_id}/")));
        assert!(key.ends_with("-plan.pdf"));
    }

    #[test]
    fn test_derive_key_rejects_empty_name() {
        let err = derive_storage_key(ObjectId::new(), None, "   ").unwrap_err();
        assert_eq!(err.kind, workroom_core::error::ErrorKind::Validation);
    }
}
