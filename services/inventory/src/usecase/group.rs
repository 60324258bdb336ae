use chrono::Utc;
use uuid::Uuid;

use stockroom_core::context::OpContext;
use stockroom_domain::defaults::SeedDefaults;

use crate::domain::repository::GroupRepository;
use crate::domain::types::{CreatedGroup, Group};
use crate::error::InventoryServiceError;
use crate::usecase::seed::normalize;

// ── CreateGroup ──────────────────────────────────────────────────────────────

pub struct CreateGroupUseCase<R: GroupRepository> {
    pub repo: R,
    /// Seeded into every new group alongside the group row.
    pub defaults: SeedDefaults,
}

impl<R: GroupRepository> CreateGroupUseCase<R> {
    pub async fn execute(
        &self,
        ctx: &OpContext,
        name: &str,
    ) -> Result<CreatedGroup, InventoryServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InventoryServiceError::validation(
                "name",
                "group name must not be blank",
            ));
        }
        let seed = normalize(&self.defaults)?;
        let group = Group {
            id: Uuid::now_v7(),
            name: name.to_owned(),
            created_at: Utc::now(),
        };

        let seeded = ctx.run(self.repo.create_seeded(&group, &seed)).await?;
        tracing::info!(group_id = %group.id, seeded, "created group");
        Ok(CreatedGroup { group, seeded })
    }
}
