use chrono::{Duration, Utc};
use uuid::Uuid;

use stockroom_auth::domain::types::{AuthToken, NewToken};
use stockroom_auth::error::AuthServiceError;
use stockroom_auth::usecase::role::{AttachRoleUseCase, ResolveRoleUseCase};
use stockroom_auth::usecase::token::{CreateTokenInput, CreateTokenUseCase, hash_secret};
use stockroom_core::context::OpContext;
use stockroom_domain::role::AuthRole;

use crate::helpers::MockTokenStore;

async fn issue(store: &MockTokenStore, role: &str) -> Uuid {
    CreateTokenUseCase {
        tokens: store.clone(),
        token_ttl: Duration::hours(1),
    }
    .execute(
        &OpContext::background(),
        CreateTokenInput::with_role(Uuid::new_v4(), role),
    )
    .await
    .unwrap()
    .token
    .id
}

fn bare_token(store: &MockTokenStore) -> Uuid {
    let now = Utc::now();
    let id = Uuid::new_v4();
    store.insert_bare_token(NewToken {
        token: AuthToken {
            id,
            user_id: Uuid::new_v4(),
            token_hash: hash_secret(&id.to_string()),
            expires_at: now + Duration::hours(1),
            created_at: now,
        },
        role: AuthRole::User,
    });
    id
}

// ── AttachRoleUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_attach_role_to_token_without_one() {
    let store = MockTokenStore::new();
    let token_id = bare_token(&store);

    let binding = AttachRoleUseCase {
        roles: store.clone(),
    }
    .execute(&OpContext::background(), token_id, "guest")
    .await
    .unwrap();

    assert_eq!(binding.token_id, token_id);
    assert_eq!(binding.role, AuthRole::Guest);
}

#[tokio::test]
async fn should_reject_second_role_and_keep_first() {
    let store = MockTokenStore::new();
    let token_id = issue(&store, "owner").await;

    let result = AttachRoleUseCase {
        roles: store.clone(),
    }
    .execute(&OpContext::background(), token_id, "guest")
    .await;
    assert!(
        matches!(result, Err(AuthServiceError::Constraint { .. })),
        "expected Constraint, got {result:?}"
    );

    let role = ResolveRoleUseCase { tokens: store }
        .execute(&OpContext::background(), token_id)
        .await
        .unwrap();
    assert_eq!(role, Some(AuthRole::Owner));
}

#[tokio::test]
async fn should_reject_invalid_role_value_on_attach() {
    let store = MockTokenStore::new();
    let token_id = bare_token(&store);
    let result = AttachRoleUseCase { roles: store }
        .execute(&OpContext::background(), token_id, "root")
        .await;
    assert!(
        matches!(result, Err(AuthServiceError::Validation { field: "role", .. })),
        "expected Validation, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_not_found_when_attaching_to_missing_token() {
    let store = MockTokenStore::new();
    let result = AttachRoleUseCase { roles: store }
        .execute(&OpContext::background(), Uuid::new_v4(), "user")
        .await;
    assert!(
        matches!(result, Err(AuthServiceError::NotFound { .. })),
        "expected NotFound, got {result:?}"
    );
}

// ── ResolveRoleUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_resolve_none_for_token_without_role() {
    let store = MockTokenStore::new();
    let token_id = bare_token(&store);
    let role = ResolveRoleUseCase { tokens: store }
        .execute(&OpContext::background(), token_id)
        .await
        .unwrap();
    assert_eq!(role, None);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_token() {
    let store = MockTokenStore::new();
    let result = ResolveRoleUseCase { tokens: store }
        .execute(&OpContext::background(), Uuid::new_v4())
        .await;
    assert!(
        matches!(result, Err(ref e) if e.is_not_found()),
        "expected NotFound, got {result:?}"
    );
}
