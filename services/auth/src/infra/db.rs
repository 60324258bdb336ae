use std::collections::HashMap;

use anyhow::anyhow;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, Condition,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, TransactionTrait,
};
use uuid::Uuid;

use stockroom_auth_schema::{auth_roles, auth_tokens};
use stockroom_domain::role::AuthRole;

use crate::domain::repository::{RoleRepository, TokenRepository};
use crate::domain::types::{AuthToken, NewToken, RoleBinding, TokenFilter, TokenWithRole};
use crate::error::AuthServiceError;

/// Rows per multi-row statement. Five binds per token row keeps each
/// statement under SQLite's historical 999-variable limit.
const INSERT_CHUNK: usize = 150;

// ── Token repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTokenRepository {
    pub db: DatabaseConnection,
}

impl TokenRepository for DbTokenRepository {
    async fn create_batch(&self, tokens: &[NewToken]) -> Result<Vec<RoleBinding>, AuthServiceError> {
        if tokens.is_empty() {
            return Ok(vec![]);
        }

        let models = self
            .db
            .transaction::<_, Vec<auth_roles::Model>, DbErr>(|txn| {
                let tokens = tokens.to_vec();
                Box::pin(async move {
                    let mut models = Vec::with_capacity(tokens.len());
                    for chunk in tokens.chunks(INSERT_CHUNK) {
                        auth_tokens::Entity::insert_many(chunk.iter().map(token_active_model))
                            .exec_without_returning(txn)
                            .await?;
                        auth_roles::Entity::insert_many(chunk.iter().map(|t| auth_roles::ActiveModel {
                            id: NotSet,
                            role: Set(t.role.as_str().to_owned()),
                            token_id: Set(t.token.id),
                        }))
                        .exec_without_returning(txn)
                        .await?;
                        // Batched inserts don't hand back generated keys on every backend.
                        models.extend(
                            auth_roles::Entity::find()
                                .filter(
                                    auth_roles::Column::TokenId
                                        .is_in(chunk.iter().map(|t| t.token.id)),
                                )
                                .all(txn)
                                .await?,
                        );
                    }
                    Ok(models)
                })
            })
            .await
            .map_err(|e| AuthServiceError::from_transaction(e, "create auth tokens"))?;

        let mut by_token: HashMap<Uuid, auth_roles::Model> =
            models.into_iter().map(|m| (m.token_id, m)).collect();
        tokens
            .iter()
            .map(|t| {
                let model = by_token
                    .remove(&t.token.id)
                    .ok_or_else(|| anyhow!("role row missing for token {}", t.token.id))?;
                role_from_model(model)
            })
            .collect()
    }

    async fn find_with_role(&self, id: Uuid) -> Result<Option<TokenWithRole>, AuthServiceError> {
        let row = auth_tokens::Entity::find_by_id(id)
            .find_also_related(auth_roles::Entity)
            .one(&self.db)
            .await
            .map_err(|e| AuthServiceError::from_db(e, "find auth token by id"))?;
        row.map(token_with_role_from_models).transpose()
    }

    async fn find_by_hash(&self, hash: &[u8]) -> Result<Option<TokenWithRole>, AuthServiceError> {
        let row = auth_tokens::Entity::find()
            .filter(auth_tokens::Column::Token.eq(hash.to_vec()))
            .find_also_related(auth_roles::Entity)
            .one(&self.db)
            .await
            .map_err(|e| AuthServiceError::from_db(e, "find auth token by hash"))?;
        row.map(token_with_role_from_models).transpose()
    }

    async fn delete_where(&self, filter: &TokenFilter) -> Result<u64, AuthServiceError> {
        let result = auth_tokens::Entity::delete_many()
            .filter(filter_condition(filter))
            .exec(&self.db)
            .await
            .map_err(|e| AuthServiceError::from_db(e, "delete auth tokens"))?;
        Ok(result.rows_affected)
    }
}

fn filter_condition(filter: &TokenFilter) -> Condition {
    let mut cond = Condition::all();
    if let Some(ids) = &filter.ids {
        cond = cond.add(auth_tokens::Column::Id.is_in(ids.iter().copied()));
    }
    if let Some(user_id) = filter.user_id {
        cond = cond.add(auth_tokens::Column::UserId.eq(user_id));
    }
    if let Some(now) = filter.expired_as_of {
        cond = cond.add(auth_tokens::Column::ExpiresAt.lte(now));
    }
    cond
}

fn token_active_model(new: &NewToken) -> auth_tokens::ActiveModel {
    auth_tokens::ActiveModel {
        id: Set(new.token.id),
        user_id: Set(new.token.user_id),
        token: Set(new.token.token_hash.clone()),
        expires_at: Set(new.token.expires_at),
        created_at: Set(new.token.created_at),
    }
}

fn token_from_model(model: auth_tokens::Model) -> AuthToken {
    AuthToken {
        id: model.id,
        user_id: model.user_id,
        token_hash: model.token,
        expires_at: model.expires_at,
        created_at: model.created_at,
    }
}

fn role_from_model(model: auth_roles::Model) -> Result<RoleBinding, AuthServiceError> {
    let role = model
        .role
        .parse::<AuthRole>()
        .map_err(|e| anyhow!(e).context(format!("stored role for auth_roles.id={}", model.id)))?;
    Ok(RoleBinding {
        id: model.id,
        token_id: model.token_id,
        role,
    })
}

fn token_with_role_from_models(
    (token, role): (auth_tokens::Model, Option<auth_roles::Model>),
) -> Result<TokenWithRole, AuthServiceError> {
    Ok(TokenWithRole {
        token: token_from_model(token),
        role: role.map(role_from_model).transpose()?,
    })
}

// ── Role repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRoleRepository {
    pub db: DatabaseConnection,
}

impl RoleRepository for DbRoleRepository {
    async fn attach(
        &self,
        token_id: Uuid,
        role: AuthRole,
    ) -> Result<Option<RoleBinding>, AuthServiceError> {
        let model = self
            .db
            .transaction::<_, Option<auth_roles::Model>, DbErr>(|txn| {
                Box::pin(async move {
                    if auth_tokens::Entity::find_by_id(token_id)
                        .one(txn)
                        .await?
                        .is_none()
                    {
                        return Ok(None);
                    }
                    let model = auth_roles::ActiveModel {
                        id: NotSet,
                        role: Set(role.as_str().to_owned()),
                        token_id: Set(token_id),
                    }
                    .insert(txn)
                    .await?;
                    Ok(Some(model))
                })
            })
            .await
            .map_err(|e| AuthServiceError::from_transaction(e, "attach auth role"))?;
        model.map(role_from_model).transpose()
    }
}
