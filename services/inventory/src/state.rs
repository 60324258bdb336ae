use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;

use stockroom_core::db;
use stockroom_core::tracing::init_tracing;
use stockroom_domain::defaults::SeedDefaults;
use stockroom_inventory_migration::Migrator;

use crate::config::InventoryConfig;
use crate::infra::db::DbGroupRepository;
use crate::usecase::group::CreateGroupUseCase;
use crate::usecase::seed::SeedDefaultsUseCase;

#[derive(Clone)]
pub struct InventoryState {
    pub db: DatabaseConnection,
    pub defaults: SeedDefaults,
}

impl InventoryState {
    pub async fn connect(config: &InventoryConfig) -> anyhow::Result<Self> {
        init_tracing(config.log_format);
        let db = db::connect(&config.database_url, config.max_connections).await?;
        Migrator::up(&db, None).await?;
        let defaults = config.seed_defaults();
        tracing::info!(
            locations = defaults.locations.len(),
            labels = defaults.labels.len(),
            "inventory store ready"
        );
        Ok(Self { db, defaults })
    }

    pub fn group_repo(&self) -> DbGroupRepository {
        DbGroupRepository {
            db: self.db.clone(),
        }
    }

    pub fn create_group(&self) -> CreateGroupUseCase<DbGroupRepository> {
        CreateGroupUseCase {
            repo: self.group_repo(),
            defaults: self.defaults.clone(),
        }
    }

    pub fn seed_defaults(&self) -> SeedDefaultsUseCase<DbGroupRepository> {
        SeedDefaultsUseCase {
            repo: self.group_repo(),
        }
    }
}
