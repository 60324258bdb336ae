//! Seeding against SQLite with the inventory schema applied.

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use stockroom_core::context::OpContext;
use stockroom_domain::defaults::SeedDefaults;
use stockroom_inventory::error::InventoryServiceError;
use stockroom_inventory::state::InventoryState;
use stockroom_inventory_schema::{groups, labels, locations};

use crate::helpers::{seed, sqlite_state, sqlite_state_with};

async fn location_names(state: &InventoryState, group_id: Uuid) -> Vec<String> {
    locations::Entity::find()
        .filter(locations::Column::GroupId.eq(group_id))
        .order_by_asc(locations::Column::Name)
        .all(&state.db)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect()
}

#[tokio::test]
async fn should_create_group_with_built_in_defaults() {
    let state = sqlite_state().await;
    let created = state
        .create_group()
        .execute(&OpContext::background(), "Home")
        .await
        .unwrap();

    assert_eq!(created.seeded, 14);
    let locs = locations::Entity::find()
        .filter(locations::Column::GroupId.eq(created.group.id))
        .count(&state.db)
        .await
        .unwrap();
    let labs = labels::Entity::find()
        .filter(labels::Column::GroupId.eq(created.group.id))
        .count(&state.db)
        .await
        .unwrap();
    assert_eq!(locs, 8);
    assert_eq!(labs, 6);
}

#[tokio::test]
async fn should_seed_configured_overrides() {
    let state = sqlite_state_with([("SEED_LOCATIONS", "Shed,Loft")]).await;
    let created = state
        .create_group()
        .execute(&OpContext::background(), "Cabin")
        .await
        .unwrap();

    assert_eq!(
        location_names(&state, created.group.id).await,
        vec!["Loft", "Shed"]
    );
    assert_eq!(created.seeded, 2 + SeedDefaults::default().labels.len());
}

#[tokio::test]
async fn should_seed_existing_group() {
    let state = sqlite_state().await;
    let ctx = OpContext::background();
    let group = state
        .create_group()
        .execute(&ctx, "Home")
        .await
        .unwrap()
        .group;

    let created = state
        .seed_defaults()
        .execute(&ctx, group.id, &seed(&["Workshop"], &["Fragile"]))
        .await
        .unwrap();

    assert_eq!(created, 2);
    assert!(location_names(&state, group.id)
        .await
        .contains(&"Workshop".to_owned()));
}

#[tokio::test]
async fn should_report_unknown_group_as_constraint_and_write_nothing() {
    let state = sqlite_state().await;
    let result = state
        .seed_defaults()
        .execute(
            &OpContext::background(),
            Uuid::new_v4(),
            &SeedDefaults::default(),
        )
        .await;

    assert!(
        matches!(result, Err(InventoryServiceError::Constraint { .. })),
        "expected Constraint, got {result:?}"
    );
    assert_eq!(locations::Entity::find().count(&state.db).await.unwrap(), 0);
    assert_eq!(labels::Entity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn should_cascade_seeded_rows_when_group_is_deleted() {
    let state = sqlite_state().await;
    let created = state
        .create_group()
        .execute(&OpContext::background(), "Home")
        .await
        .unwrap();

    groups::Entity::delete_by_id(created.group.id)
        .exec(&state.db)
        .await
        .unwrap();

    assert_eq!(locations::Entity::find().count(&state.db).await.unwrap(), 0);
    assert_eq!(labels::Entity::find().count(&state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn should_seed_lists_longer_than_one_statement() {
    let state = sqlite_state().await;
    let ctx = OpContext::background();
    let group = state.create_group().execute(&ctx, "Warehouse").await.unwrap().group;

    let names: Vec<String> = (0..9_000).map(|i| format!("Shelf {i}")).collect();
    let defaults = SeedDefaults {
        locations: names,
        labels: vec![],
    };
    let created = state
        .seed_defaults()
        .execute(&ctx, group.id, &defaults)
        .await
        .unwrap();

    assert_eq!(created, 9_000);
    let locs = locations::Entity::find()
        .filter(locations::Column::GroupId.eq(group.id))
        .count(&state.db)
        .await
        .unwrap();
    assert_eq!(locs, 9_000 + 8);
}

#[tokio::test]
async fn should_install_logging_in_configured_format() {
    let _state = sqlite_state_with([("LOG_FORMAT", "pretty")]).await;
    assert!(tracing::dispatcher::has_been_set());
}
