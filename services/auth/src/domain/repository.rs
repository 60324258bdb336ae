#![allow(async_fn_in_trait)]

use uuid::Uuid;

use stockroom_domain::role::AuthRole;

use crate::domain::types::{NewToken, RoleBinding, TokenFilter, TokenWithRole};
use crate::error::AuthServiceError;

/// Repository for session tokens.
pub trait TokenRepository: Send + Sync {
    /// Insert every token and its role row in one transaction (all or nothing).
    /// Returns the role bindings, with store-generated IDs, in input order.
    async fn create_batch(&self, tokens: &[NewToken]) -> Result<Vec<RoleBinding>, AuthServiceError>;

    async fn find_with_role(&self, id: Uuid) -> Result<Option<TokenWithRole>, AuthServiceError>;

    /// Look a token up by the digest of its secret.
    async fn find_by_hash(&self, hash: &[u8]) -> Result<Option<TokenWithRole>, AuthServiceError>;

    /// Delete all tokens matching `filter` in one statement; role rows go with them.
    /// Returns the number of tokens deleted.
    async fn delete_where(&self, filter: &TokenFilter) -> Result<u64, AuthServiceError>;
}

/// Repository for the token → role binding.
pub trait RoleRepository: Send + Sync {
    /// Attach a role to an existing token.
    ///
    /// Returns `None` if the token does not exist. A token that already has a
    /// role fails with [`AuthServiceError::Constraint`].
    async fn attach(
        &self,
        token_id: Uuid,
        role: AuthRole,
    ) -> Result<Option<RoleBinding>, AuthServiceError>;
}
