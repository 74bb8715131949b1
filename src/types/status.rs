use std::fmt;

use serde::{Deserialize, Serialize};

/// Status is the privilege level of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Normal,
    Admin,
}

impl Status {
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Converts a status string to its value.
    pub fn parse(s: &str) -> Option<Status> {
        match s {
            "normal" => Some(Self::Normal),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status() {
        assert_eq!(Status::parse("admin"), Some(Status::Admin));
        assert_eq!(Status::parse("normal"), Some(Status::Normal));
        assert_eq!(Status::parse("Admin"), None);
        assert_eq!(Status::parse("root"), None);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Admin).unwrap(), "\"admin\"");
        let parsed: Status = serde_json::from_str("\"normal\"").unwrap();
        assert_eq!(parsed, Status::Normal);
    }
}
