use chrono::Utc;
use uuid::Uuid;

use stockroom_core::context::OpContext;
use stockroom_domain::role::AuthRole;

use crate::domain::repository::{RoleRepository, TokenRepository};
use crate::domain::types::RoleBinding;
use crate::error::AuthServiceError;
use crate::usecase::token::parse_role;

// ── AttachRole ────────────────────────────────────────────────────────────────

pub struct AttachRoleUseCase<R: RoleRepository> {
    pub roles: R,
}

impl<R: RoleRepository> AttachRoleUseCase<R> {
    /// Bind `role` to a token that has none yet. A second role fails with
    /// `Constraint` and leaves the existing binding untouched.
    pub async fn execute(
        &self,
        ctx: &OpContext,
        token_id: Uuid,
        role: &str,
    ) -> Result<RoleBinding, AuthServiceError> {
        let role = parse_role(Some(role))?;
        let binding = ctx
            .run(self.roles.attach(token_id, role))
            .await
            .inspect_err(|e| {
                if matches!(e, AuthServiceError::Constraint { .. }) {
                    tracing::warn!(%token_id, "auth token already has a role");
                }
            })?
            .ok_or_else(AuthServiceError::token_not_found)?;
        tracing::info!(%token_id, role = %binding.role, "attached role to auth token");
        Ok(binding)
    }
}

// ── ResolveRole ───────────────────────────────────────────────────────────────

pub struct ResolveRoleUseCase<T: TokenRepository> {
    pub tokens: T,
}

impl<T: TokenRepository> ResolveRoleUseCase<T> {
    /// Effective role of a token. `Ok(None)` means the token carries no role and
    /// therefore no permissions; callers must not treat it as an error.
    pub async fn execute(
        &self,
        ctx: &OpContext,
        token_id: Uuid,
    ) -> Result<Option<AuthRole>, AuthServiceError> {
        let found = ctx
            .run(self.tokens.find_with_role(token_id))
            .await?
            .ok_or_else(AuthServiceError::token_not_found)?;

        if found.token.is_expired_at(Utc::now()) {
            tracing::debug!(%token_id, "rejected expired auth token");
            return Err(AuthServiceError::TokenExpired);
        }
        Ok(found.role.map(|b| b.role))
    }
}
