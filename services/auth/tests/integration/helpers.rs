use std::sync::{Arc, Mutex};

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use uuid::Uuid;

use stockroom_auth::config::AuthConfig;
use stockroom_auth::domain::repository::{RoleRepository, TokenRepository};
use stockroom_auth::domain::types::{NewToken, RoleBinding, TokenFilter, TokenWithRole};
use stockroom_auth::error::AuthServiceError;
use stockroom_auth::state::AuthState;
use stockroom_auth_schema::users;
use stockroom_core::config::Config;
use stockroom_domain::role::AuthRole;

// ── MockTokenStore ───────────────────────────────────────────────────────────

#[derive(Default)]
pub struct StoreData {
    pub tokens: Vec<NewToken>,
    pub roles: Vec<RoleBinding>,
    pub next_role_id: i32,
}

/// In-memory stand-in for the store. Batches are all-or-nothing, roles are
/// unique per token and are dropped with their token.
#[derive(Clone, Default)]
pub struct MockTokenStore {
    pub data: Arc<Mutex<StoreData>>,
    /// Fail every batch write as the store would on a constraint violation.
    pub reject_writes: bool,
}

impl MockTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting_writes() -> Self {
        Self {
            reject_writes: true,
            ..Self::default()
        }
    }

    pub fn token_count(&self) -> usize {
        self.data.lock().unwrap().tokens.len()
    }

    pub fn role_count(&self) -> usize {
        self.data.lock().unwrap().roles.len()
    }

    /// Insert a token with no role row (only reachable through raw storage).
    pub fn insert_bare_token(&self, new: NewToken) {
        self.data.lock().unwrap().tokens.push(new);
    }
}

fn with_role(data: &StoreData, new: &NewToken) -> TokenWithRole {
    TokenWithRole {
        token: new.token.clone(),
        role: data
            .roles
            .iter()
            .find(|r| r.token_id == new.token.id)
            .copied(),
    }
}

impl TokenRepository for MockTokenStore {
    async fn create_batch(&self, tokens: &[NewToken]) -> Result<Vec<RoleBinding>, AuthServiceError> {
        if self.reject_writes {
            return Err(AuthServiceError::Internal(anyhow::anyhow!(
                "mock store rejected batch"
            )));
        }
        let mut data = self.data.lock().unwrap();
        let mut out = Vec::with_capacity(tokens.len());
        for new in tokens {
            data.next_role_id += 1;
            let binding = RoleBinding {
                id: data.next_role_id,
                token_id: new.token.id,
                role: new.role,
            };
            data.tokens.push(new.clone());
            data.roles.push(binding);
            out.push(binding);
        }
        Ok(out)
    }

    async fn find_with_role(&self, id: Uuid) -> Result<Option<TokenWithRole>, AuthServiceError> {
        let data = self.data.lock().unwrap();
        Ok(data
            .tokens
            .iter()
            .find(|t| t.token.id == id)
            .map(|t| with_role(&data, t)))
    }

    async fn find_by_hash(&self, hash: &[u8]) -> Result<Option<TokenWithRole>, AuthServiceError> {
        let data = self.data.lock().unwrap();
        Ok(data
            .tokens
            .iter()
            .find(|t| t.token.token_hash == hash)
            .map(|t| with_role(&data, t)))
    }

    async fn delete_where(&self, filter: &TokenFilter) -> Result<u64, AuthServiceError> {
        let mut data = self.data.lock().unwrap();
        let doomed: Vec<Uuid> = data
            .tokens
            .iter()
            .filter(|t| filter.matches(&t.token))
            .map(|t| t.token.id)
            .collect();
        data.tokens.retain(|t| !doomed.contains(&t.token.id));
        data.roles.retain(|r| !doomed.contains(&r.token_id));
        Ok(doomed.len() as u64)
    }
}

impl RoleRepository for MockTokenStore {
    async fn attach(
        &self,
        token_id: Uuid,
        role: AuthRole,
    ) -> Result<Option<RoleBinding>, AuthServiceError> {
        let mut data = self.data.lock().unwrap();
        if !data.tokens.iter().any(|t| t.token.id == token_id) {
            return Ok(None);
        }
        if data.roles.iter().any(|r| r.token_id == token_id) {
            return Err(AuthServiceError::Constraint {
                message: "UNIQUE constraint failed: auth_roles.token_id".to_owned(),
                source: sea_orm::DbErr::Custom("unique".to_owned()),
            });
        }
        data.next_role_id += 1;
        let binding = RoleBinding {
            id: data.next_role_id,
            token_id,
            role,
        };
        data.roles.push(binding);
        Ok(Some(binding))
    }
}

// ── SQLite-backed store ──────────────────────────────────────────────────────

/// Fresh in-memory store with the auth schema applied.
pub async fn sqlite_state() -> AuthState {
    let config = AuthConfig::from_vars([
        ("DATABASE_URL", "sqlite::memory:"),
        ("TOKEN_TTL_SECS", "3600"),
    ])
    .unwrap();
    AuthState::connect(&config).await.unwrap()
}

pub async fn insert_user(state: &AuthState, email: &str) -> Uuid {
    let id = Uuid::new_v4();
    users::ActiveModel {
        id: Set(id),
        email: Set(email.to_owned()),
        name: Set(email.split('@').next().unwrap_or(email).to_owned()),
        created_at: Set(Utc::now()),
    }
    .insert(&state.db)
    .await
    .unwrap();
    id
}

pub const TEST_TTL_HOURS: i64 = 1;
