#![allow(async_fn_in_trait)]

use uuid::Uuid;

use stockroom_domain::defaults::SeedDefaults;

use crate::domain::types::Group;
use crate::error::InventoryServiceError;

pub trait GroupRepository: Send + Sync {
    /// Insert `group` and its seed rows in one transaction.
    /// Returns the number of seed rows written.
    async fn create_seeded(
        &self,
        group: &Group,
        seed: &SeedDefaults,
    ) -> Result<usize, InventoryServiceError>;

    /// Insert one location per `seed.locations` entry and one label per
    /// `seed.labels` entry for an existing group, all or nothing.
    async fn seed(
        &self,
        group_id: Uuid,
        seed: &SeedDefaults,
    ) -> Result<usize, InventoryServiceError>;
}
