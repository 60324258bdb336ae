//! Session role types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Permission level bound to an auth token.
///
/// Storage format: lowercase string (`"guest"`, `"user"`, `"owner"`).
/// Ordered by privilege: `Guest < User < Owner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthRole {
    Guest,
    User,
    Owner,
}

/// Returned when a role string is outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role {0:?} (expected one of: guest, user, owner)")]
pub struct UnknownRole(pub String);

impl AuthRole {
    /// Role assigned when a token is issued without an explicit role.
    pub const BASELINE: Self = Self::User;

    pub const ALL: [Self; 3] = [Self::Guest, Self::User, Self::Owner];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::User => "user",
            Self::Owner => "owner",
        }
    }

    fn rank(self) -> u8 {
        match self {
            Self::Guest => 0,
            Self::User => 1,
            Self::Owner => 2,
        }
    }

    /// Whether this role grants at least the privileges of `required`.
    pub fn permits(self, required: Self) -> bool {
        self >= required
    }
}

impl Default for AuthRole {
    fn default() -> Self {
        Self::BASELINE
    }
}

impl fmt::Display for AuthRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_owned()))
    }
}

impl PartialOrd for AuthRole {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AuthRole {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}
