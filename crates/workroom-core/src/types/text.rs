//! Display-name sanitization.

/// Sanitize a user-supplied folder name.
///
/// Control characters are stripped, path separators become spaces, and
/// whitespace runs collapse to a single space with the ends trimmed. An
/// empty result means the name carried nothing displayable; callers treat
/// that as invalid input.
pub fn sanitize_folder_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_unchanged() {
        assert_eq!(sanitize_folder_name("Design Assets"), "Design Assets");
    }

    #[test]
    fn test_separators_become_spaces() {
        assert_eq!(sanitize_folder_name("Design/Assets\\Final"), "Design Assets Final");
    }

    #[test]
    fn test_whitespace_collapses_and_trims() {
        assert_eq!(sanitize_folder_name("  Design   Assets \t Final  "), "Design Assets Final");
    }

    #[test]
    fn test_control_characters_stripped() {
        assert_eq!(sanitize_folder_name("Desi\u{0007}gn"), "Design");
        assert_eq!(sanitize_folder_name("\u{0000}\u{001b}"), "");
    }

    #[test]
    fn test_empty_after_sanitize() {
        assert_eq!(sanitize_folder_name("  / \\  "), "");
    }
}
