//! Canonicalization of free-text skills fields.

/// Characters dropped outright from a skills field.
const STRIPPED_CHARS: [char; 7] = ['{', '}', '[', ']', '(', ')', '"'];

/// Characters treated as alternative separators and rewritten to `", "`.
const ALT_SEPARATORS: [char; 2] = ['|', '/'];

/// Produces the canonical form of a raw skills field: lowercase, no
/// brackets/braces/parentheses/quotes, `", "` as the only separator.
///
/// Missing, empty and whitespace-only input all map to `""`.
/// The result is trimmed once more after separator rewriting so that
/// `normalize_skills(Some(&normalize_skills(s))) == normalize_skills(s)`.
pub fn normalize_skills(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(s) if !s.trim().is_empty() => s,
        _ => return String::new(),
    };

    let cleaned: String = raw
        .to_lowercase()
        .trim()
        .chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .collect();

    cleaned.replace(ALT_SEPARATORS, ", ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(s: &str) -> String {
        normalize_skills(Some(s))
    }

    #[test]
    fn test_missing_and_blank_input_is_empty() {
        assert_eq!(normalize_skills(None), "");
        assert_eq!(norm(""), "");
        assert_eq!(norm("   \t\n"), "");
    }

    #[test]
    fn test_braces_and_pipe_round_trip() {
        assert_eq!(norm("{Python}|SQL"), "python, sql");
    }

    #[test]
    fn test_strips_every_bracket_kind_and_quotes() {
        let out = norm(r#"["React", (Node.js), {AWS}]"#);
        assert_eq!(out, "react, node.js, aws");
        for c in STRIPPED_CHARS {
            assert!(!out.contains(c), "found {c:?} in {out:?}");
        }
    }

    #[test]
    fn test_slash_becomes_separator() {
        assert_eq!(norm("UI/UX Design"), "ui, ux design");
    }

    #[test]
    fn test_lowercases_and_trims() {
        assert_eq!(norm("  Excel, Power BI  "), "excel, power bi");
    }

    #[test]
    fn test_only_stripped_chars_yields_empty() {
        assert_eq!(norm("[]"), "");
        assert_eq!(norm(r#"{ "" }"#), "");
    }

    #[test]
    fn test_is_idempotent() {
        let inputs = [
            "",
            "   ",
            "{Python}|SQL",
            "{ a }",
            "a|",
            "/",
            " / ",
            r#""Machine Learning" / (NLP) | [PyTorch]"#,
            "Go, Rust, C++",
            "ÄÖÜ | Straße",
        ];
        for input in inputs {
            let once = norm(input);
            assert_eq!(norm(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_output_contains_no_alt_separators() {
        let out = norm("a|b/c|d");
        assert_eq!(out, "a, b, c, d");
        assert!(!out.contains('|'));
        assert!(!out.contains('/'));
    }
}
