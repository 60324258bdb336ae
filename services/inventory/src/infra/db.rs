use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    TransactionTrait,
};
use uuid::Uuid;

use stockroom_domain::defaults::SeedDefaults;
use stockroom_inventory_schema::{groups, labels, locations};

use crate::domain::repository::GroupRepository;
use crate::domain::types::Group;
use crate::error::InventoryServiceError;

/// Rows per multi-row insert; keeps binds under SQLite's variable limit.
const INSERT_CHUNK: usize = 200;

#[derive(Clone)]
pub struct DbGroupRepository {
    pub db: DatabaseConnection,
}

impl GroupRepository for DbGroupRepository {
    async fn create_seeded(
        &self,
        group: &Group,
        seed: &SeedDefaults,
    ) -> Result<usize, InventoryServiceError> {
        let group = group.clone();
        let seed = seed.clone();
        self.db
            .transaction::<_, usize, DbErr>(|txn| {
                Box::pin(async move {
                    groups::ActiveModel {
                        id: Set(group.id),
                        name: Set(group.name),
                        created_at: Set(group.created_at),
                    }
                    .insert(txn)
                    .await?;
                    insert_seed(txn, group.id, &seed, group.created_at).await
                })
            })
            .await
            .map_err(|e| InventoryServiceError::from_transaction(e, "create group"))
    }

    async fn seed(
        &self,
        group_id: Uuid,
        seed: &SeedDefaults,
    ) -> Result<usize, InventoryServiceError> {
        let seed = seed.clone();
        self.db
            .transaction::<_, usize, DbErr>(|txn| {
                Box::pin(async move { insert_seed(txn, group_id, &seed, Utc::now()).await })
            })
            .await
            .map_err(|e| InventoryServiceError::from_transaction(e, "seed group defaults"))
    }
}

async fn insert_seed<C: ConnectionTrait>(
    conn: &C,
    group_id: Uuid,
    seed: &SeedDefaults,
    now: DateTime<Utc>,
) -> Result<usize, DbErr> {
    // Chunks are never empty, so no zero-row insert_many is issued.
    for chunk in seed.locations.chunks(INSERT_CHUNK) {
        locations::Entity::insert_many(chunk.iter().map(|name| locations::ActiveModel {
            id: Set(Uuid::now_v7()),
            group_id: Set(group_id),
            name: Set(name.clone()),
            created_at: Set(now),
        }))
        .exec_without_returning(conn)
        .await?;
    }
    for chunk in seed.labels.chunks(INSERT_CHUNK) {
        labels::Entity::insert_many(chunk.iter().map(|name| labels::ActiveModel {
            id: Set(Uuid::now_v7()),
            group_id: Set(group_id),
            name: Set(name.clone()),
            created_at: Set(now),
        }))
        .exec_without_returning(conn)
        .await?;
    }
    Ok(seed.locations.len() + seed.labels.len())
}
