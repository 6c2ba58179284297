//! Domain Value Objects
//!
//! Immutable value types for the game domain.

/// Registered player name: trimmed, 1-50 characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub const MIN_LEN: usize = 1;
    pub const MAX_LEN: usize = 50;

    /// Validate and normalize a raw name. Leading/trailing whitespace is
    /// trimmed before the length check.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if (Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            Some(Self(trimmed.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Username> for String {
    fn from(u: Username) -> Self {
        u.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
