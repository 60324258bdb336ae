use chrono::{DateTime, Utc};
use uuid::Uuid;

use stockroom_domain::role::AuthRole;

/// Persisted session token. `token_hash` is the SHA-256 digest of the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: Vec<u8>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl AuthToken {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// The role row attached to a token. `id` is generated by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleBinding {
    pub id: i32,
    pub token_id: Uuid,
    pub role: AuthRole,
}

/// A validated token and its role, ready to be written.
#[derive(Debug, Clone)]
pub struct NewToken {
    pub token: AuthToken,
    pub role: AuthRole,
}

/// A token joined with its (optional) role row.
#[derive(Debug, Clone)]
pub struct TokenWithRole {
    pub token: AuthToken,
    pub role: Option<RoleBinding>,
}

/// Result of issuing a token. `secret` is handed to the client once and never stored.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: AuthToken,
    pub role: RoleBinding,
    pub secret: String,
}

/// Resolved session for an authenticated request.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: AuthToken,
    pub role: Option<AuthRole>,
}

impl Session {
    /// A missing role grants nothing.
    pub fn permits(&self, required: AuthRole) -> bool {
        self.role.is_some_and(|r| r.permits(required))
    }
}

/// Conjunction of optional conditions selecting tokens for deletion.
/// An empty filter matches every token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenFilter {
    pub ids: Option<Vec<Uuid>>,
    pub user_id: Option<Uuid>,
    pub expired_as_of: Option<DateTime<Utc>>,
}

impl TokenFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn ids(mut self, ids: impl IntoIterator<Item = Uuid>) -> Self {
        self.ids = Some(ids.into_iter().collect());
        self
    }

    pub fn user(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Tokens whose expiration is at or before `now`.
    pub fn expired_as_of(mut self, now: DateTime<Utc>) -> Self {
        self.expired_as_of = Some(now);
        self
    }

    pub fn matches(&self, token: &AuthToken) -> bool {
        self.ids.as_ref().is_none_or(|ids| ids.contains(&token.id))
            && self.user_id.is_none_or(|u| u == token.user_id)
            && self.expired_as_of.is_none_or(|now| token.is_expired_at(now))
    }
}

/// Length of the plaintext secret handed to clients.
pub const TOKEN_SECRET_LEN: usize = 48;
