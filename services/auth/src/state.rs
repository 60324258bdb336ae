use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;

use stockroom_auth_migration::Migrator;
use stockroom_core::db;
use stockroom_core::tracing::init_tracing;

use crate::config::AuthConfig;
use crate::infra::db::{DbRoleRepository, DbTokenRepository};
use crate::usecase::revoke::{DeleteTokenUseCase, DeleteTokensUseCase, LogoutUseCase};
use crate::usecase::role::{AttachRoleUseCase, ResolveRoleUseCase};
use crate::usecase::token::{CreateTokenUseCase, CreateTokensBulkUseCase, ResolveSessionUseCase};

/// Shared service state. Holds no per-request mutable data; every accessor
/// hands out a fresh use case over a cloned connection handle.
#[derive(Clone)]
pub struct AuthState {
    pub db: DatabaseConnection,
    pub token_ttl: chrono::Duration,
}

impl AuthState {
    /// Install logging in the configured format, connect to the store and
    /// bring its schema up to date.
    pub async fn connect(config: &AuthConfig) -> anyhow::Result<Self> {
        init_tracing(config.log_format);
        let db = db::connect(&config.database_url, config.max_connections).await?;
        Migrator::up(&db, None).await?;
        tracing::info!(token_ttl_secs = config.token_ttl_secs, "auth store ready");
        Ok(Self {
            db,
            token_ttl: config.token_ttl(),
        })
    }

    pub fn token_repo(&self) -> DbTokenRepository {
        DbTokenRepository {
            db: self.db.clone(),
        }
    }

    pub fn role_repo(&self) -> DbRoleRepository {
        DbRoleRepository {
            db: self.db.clone(),
        }
    }

    pub fn create_token(&self) -> CreateTokenUseCase<DbTokenRepository> {
        CreateTokenUseCase {
            tokens: self.token_repo(),
            token_ttl: self.token_ttl,
        }
    }

    pub fn create_tokens_bulk(&self) -> CreateTokensBulkUseCase<DbTokenRepository> {
        CreateTokensBulkUseCase {
            tokens: self.token_repo(),
            token_ttl: self.token_ttl,
        }
    }

    pub fn resolve_session(&self) -> ResolveSessionUseCase<DbTokenRepository> {
        ResolveSessionUseCase {
            tokens: self.token_repo(),
        }
    }

    pub fn attach_role(&self) -> AttachRoleUseCase<DbRoleRepository> {
        AttachRoleUseCase {
            roles: self.role_repo(),
        }
    }

    pub fn resolve_role(&self) -> ResolveRoleUseCase<DbTokenRepository> {
        ResolveRoleUseCase {
            tokens: self.token_repo(),
        }
    }

    pub fn delete_token(&self) -> DeleteTokenUseCase<DbTokenRepository> {
        DeleteTokenUseCase {
            tokens: self.token_repo(),
        }
    }

    pub fn delete_tokens(&self) -> DeleteTokensUseCase<DbTokenRepository> {
        DeleteTokensUseCase {
            tokens: self.token_repo(),
        }
    }

    pub fn logout(&self) -> LogoutUseCase<DbTokenRepository> {
        LogoutUseCase {
            tokens: self.token_repo(),
        }
    }
}
