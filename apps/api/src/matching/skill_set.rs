use std::collections::BTreeSet;
use std::fmt;

/// Separator between tokens in a normalized skills string.
pub const SKILL_SEPARATOR: &str = ", ";

/// A set of lowercase, trimmed skill tokens.
///
/// Empty tokens are never stored: splitting `""` gives an empty set, so a
/// blank query cannot match a job whose skills field is blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    /// Builds a set from an already-normalized skills string.
    pub fn from_normalized(skills: &str) -> Self {
        SkillSet(
            skills
                .split(SKILL_SEPARATOR)
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Parses the free-text skills a user typed: quotes removed, lowercased,
    /// split on `", "`.
    pub fn parse_user_input(raw: &str) -> Self {
        let cleaned = raw.replace('"', "").to_lowercase();
        Self::from_normalized(&cleaned)
    }

    /// Number of tokens present in both sets.
    pub fn overlap(&self, other: &SkillSet) -> usize {
        let (small, large) = if self.0.len() <= other.0.len() {
            (&self.0, &other.0)
        } else {
            (&other.0, &self.0)
        };
        small.iter().filter(|token| large.contains(*token)).count()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }
}

impl fmt::Display for SkillSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<&str> = self.0.iter().map(String::as_str).collect();
        write!(f, "{{{}}}", tokens.join(", "))
    }
}
