use chrono::{Duration, Utc};
use rand::RngExt;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use stockroom_core::context::OpContext;
use stockroom_domain::role::AuthRole;

use crate::domain::repository::TokenRepository;
use crate::domain::types::{AuthToken, IssuedToken, NewToken, Session, TOKEN_SECRET_LEN};
use crate::error::AuthServiceError;

/// Charset for session secrets (URL-safe alphanumeric).
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

fn generate_secret() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_SECRET_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Digest stored in place of a session secret.
pub fn hash_secret(secret: &str) -> Vec<u8> {
    Sha256::digest(secret.as_bytes()).to_vec()
}

/// Check the role field; `None` falls back to the baseline role.
pub fn parse_role(role: Option<&str>) -> Result<AuthRole, AuthServiceError> {
    match role {
        None => Ok(AuthRole::BASELINE),
        Some(value) => value
            .parse()
            .map_err(|e: stockroom_domain::role::UnknownRole| {
                AuthServiceError::validation("role", e.to_string())
            }),
    }
}

// ── CreateToken (login) ───────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct CreateTokenInput {
    pub user_id: Uuid,
    /// Raw role value from the caller; `None` means the baseline role.
    pub role: Option<String>,
}

impl CreateTokenInput {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            role: None,
        }
    }

    pub fn with_role(user_id: Uuid, role: impl Into<String>) -> Self {
        Self {
            user_id,
            role: Some(role.into()),
        }
    }
}

/// Validate one input and build the rows to write plus the plaintext secret.
fn prepare(
    input: &CreateTokenInput,
    ttl: Duration,
) -> Result<(NewToken, String), AuthServiceError> {
    if input.user_id.is_nil() {
        return Err(AuthServiceError::validation(
            "user_id",
            "missing required owning user",
        ));
    }
    let role = parse_role(input.role.as_deref())?;
    let secret = generate_secret();
    let now = Utc::now();
    let token = AuthToken {
        id: Uuid::new_v4(),
        user_id: input.user_id,
        token_hash: hash_secret(&secret),
        expires_at: now + ttl,
        created_at: now,
    };
    Ok((NewToken { token, role }, secret))
}

pub struct CreateTokenUseCase<T: TokenRepository> {
    pub tokens: T,
    pub token_ttl: Duration,
}

impl<T: TokenRepository> CreateTokenUseCase<T> {
    pub async fn execute(
        &self,
        ctx: &OpContext,
        input: CreateTokenInput,
    ) -> Result<IssuedToken, AuthServiceError> {
        let (new, secret) = prepare(&input, self.token_ttl).inspect_err(|e| {
            tracing::warn!(user_id = %input.user_id, error = %e, "rejected token request");
        })?;

        let mut roles = ctx
            .run(self.tokens.create_batch(std::slice::from_ref(&new)))
            .await?;
        let role = roles
            .pop()
            .ok_or_else(|| anyhow::anyhow!("no role binding returned for new token"))?;

        tracing::info!(
            token_id = %new.token.id,
            user_id = %new.token.user_id,
            role = %role.role,
            "issued auth token"
        );
        Ok(IssuedToken {
            token: new.token,
            role,
            secret,
        })
    }
}

// ── CreateTokensBulk ──────────────────────────────────────────────────────────

pub struct CreateTokensBulkUseCase<T: TokenRepository> {
    pub tokens: T,
    pub token_ttl: Duration,
}

impl<T: TokenRepository> CreateTokensBulkUseCase<T> {
    /// All inputs are validated before anything is written; the writes then
    /// commit or roll back together. Output order matches input order.
    pub async fn execute(
        &self,
        ctx: &OpContext,
        inputs: Vec<CreateTokenInput>,
    ) -> Result<Vec<IssuedToken>, AuthServiceError> {
        let mut prepared = Vec::with_capacity(inputs.len());
        for (index, input) in inputs.iter().enumerate() {
            let item = prepare(input, self.token_ttl).inspect_err(|e| {
                tracing::warn!(index, user_id = %input.user_id, error = %e, "rejected bulk token request");
            })?;
            prepared.push(item);
        }
        if prepared.is_empty() {
            return Ok(vec![]);
        }

        let (news, secrets): (Vec<NewToken>, Vec<String>) = prepared.into_iter().unzip();
        let roles = ctx.run(self.tokens.create_batch(&news)).await?;
        if roles.len() != news.len() {
            return Err(anyhow::anyhow!(
                "expected {} role bindings, store returned {}",
                news.len(),
                roles.len()
            )
            .into());
        }

        tracing::info!(count = news.len(), "issued auth tokens in bulk");
        Ok(news
            .into_iter()
            .zip(roles)
            .zip(secrets)
            .map(|((new, role), secret)| IssuedToken {
                token: new.token,
                role,
                secret,
            })
            .collect())
    }
}

// ── ResolveSession ────────────────────────────────────────────────────────────

pub struct ResolveSessionUseCase<T: TokenRepository> {
    pub tokens: T,
}

impl<T: TokenRepository> ResolveSessionUseCase<T> {
    /// Resolve the session behind a presented secret. Expiration is checked here,
    /// at read time; a token without a role resolves with `role: None`.
    pub async fn execute(&self, ctx: &OpContext, secret: &str) -> Result<Session, AuthServiceError> {
        let found = ctx
            .run(self.tokens.find_by_hash(&hash_secret(secret)))
            .await?
            .ok_or_else(AuthServiceError::token_not_found)?;

        if found.token.is_expired_at(Utc::now()) {
            tracing::debug!(token_id = %found.token.id, "rejected expired auth token");
            return Err(AuthServiceError::TokenExpired);
        }

        Ok(Session {
            token: found.token,
            role: found.role.map(|b| b.role),
        })
    }
}
