//! The closed set of employee roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The role an employee holds.
///
/// # Example
///
/// ```
/// use employee_roster::models::Role;
///
/// assert_eq!(Role::Intern.to_string(), "Intern");
/// assert_eq!(Role::Intern.article(), "an");
/// assert_eq!(Role::Worker.article(), "a");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A regular worker.
    Worker,
    /// A (usually temporary) intern.
    Intern,
    /// A software developer who tracks the languages they use.
    Developer,
    /// A manager who supervises other employees by name.
    Manager,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 4] = [Role::Worker, Role::Intern, Role::Developer, Role::Manager];

    /// Returns the display text of the role.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::Worker => "Worker",
            Role::Intern => "Intern",
            Role::Developer => "Developer",
            Role::Manager => "Manager",
        }
    }

    /// Returns "an" when the display text starts with a vowel, "a" otherwise.
    pub fn article(self) -> &'static str {
        indefinite_article(self.display_name())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Picks the indefinite article for `word`, case-insensitively.
pub(crate) fn indefinite_article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Role::Worker.to_string(), "Worker");
        assert_eq!(Role::Intern.to_string(), "Intern");
        assert_eq!(Role::Developer.to_string(), "Developer");
        assert_eq!(Role::Manager.to_string(), "Manager");
    }

    #[test]
    fn test_articles_follow_first_letter() {
        assert_eq!(Role::Worker.article(), "a");
        assert_eq!(Role::Intern.article(), "an");
        assert_eq!(Role::Developer.article(), "a");
        assert_eq!(Role::Manager.article(), "a");
    }

    #[test]
    fn test_indefinite_article_is_case_insensitive() {
        assert_eq!(indefinite_article("engineer"), "an");
        assert_eq!(indefinite_article("Engineer"), "an");
        assert_eq!(indefinite_article("Umpire"), "an");
        assert_eq!(indefinite_article("clerk"), "a");
        assert_eq!(indefinite_article(""), "a");
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Worker).unwrap(), "\"worker\"");
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"manager\"");
        let role: Role = serde_json::from_str("\"intern\"").unwrap();
        assert_eq!(role, Role::Intern);
    }
}
