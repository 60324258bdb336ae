use chrono::{DateTime, Utc};
use uuid::Uuid;

use stockroom_core::context::OpContext;

use crate::domain::repository::TokenRepository;
use crate::domain::types::TokenFilter;
use crate::error::AuthServiceError;

// ── DeleteTokenById ───────────────────────────────────────────────────────────

pub struct DeleteTokenUseCase<T: TokenRepository> {
    pub tokens: T,
}

impl<T: TokenRepository> DeleteTokenUseCase<T> {
    /// Delete exactly one token. Zero rows affected is `NotFound`.
    pub async fn execute(&self, ctx: &OpContext, id: Uuid) -> Result<(), AuthServiceError> {
        let deleted = ctx
            .run(self.tokens.delete_where(&TokenFilter::all().ids([id])))
            .await?;
        if deleted == 0 {
            return Err(AuthServiceError::token_not_found());
        }
        tracing::info!(token_id = %id, "revoked auth token");
        Ok(())
    }
}

// ── DeleteTokens (filter) ─────────────────────────────────────────────────────

pub struct DeleteTokensUseCase<T: TokenRepository> {
    pub tokens: T,
}

impl<T: TokenRepository> DeleteTokensUseCase<T> {
    /// Delete every token matching `filter`. Zero matches is not an error.
    pub async fn execute(
        &self,
        ctx: &OpContext,
        filter: &TokenFilter,
    ) -> Result<u64, AuthServiceError> {
        let deleted = ctx.run(self.tokens.delete_where(filter)).await?;
        tracing::info!(deleted, ?filter, "revoked auth tokens");
        Ok(deleted)
    }

    /// Remove tokens whose expiration is at or before `now`.
    pub async fn purge_expired(
        &self,
        ctx: &OpContext,
        now: DateTime<Utc>,
    ) -> Result<u64, AuthServiceError> {
        self.execute(ctx, &TokenFilter::all().expired_as_of(now))
            .await
    }

    /// Sign a user out everywhere.
    pub async fn revoke_all_for_user(
        &self,
        ctx: &OpContext,
        user_id: Uuid,
    ) -> Result<u64, AuthServiceError> {
        self.execute(ctx, &TokenFilter::all().user(user_id)).await
    }
}

// ── Logout ────────────────────────────────────────────────────────────────────

pub struct LogoutUseCase<T: TokenRepository> {
    pub tokens: T,
}

impl<T: TokenRepository> LogoutUseCase<T> {
    /// Idempotent: a token that is already gone counts as logged out.
    pub async fn execute(&self, ctx: &OpContext, id: Uuid) -> Result<(), AuthServiceError> {
        let deleted = ctx
            .run(self.tokens.delete_where(&TokenFilter::all().ids([id])))
            .await?;
        if deleted == 0 {
            tracing::debug!(token_id = %id, "logout for unknown auth token");
        } else {
            tracing::info!(token_id = %id, "logged out");
        }
        Ok(())
    }
}
