use uuid::Uuid;

use stockroom_core::context::OpContext;
use stockroom_domain::defaults::SeedDefaults;

use crate::domain::repository::GroupRepository;
use crate::error::InventoryServiceError;

/// Trim every name; a blank one rejects the whole list.
pub(crate) fn normalize(seed: &SeedDefaults) -> Result<SeedDefaults, InventoryServiceError> {
    Ok(SeedDefaults {
        locations: normalize_names("locations", &seed.locations)?,
        labels: normalize_names("labels", &seed.labels)?,
    })
}

fn normalize_names(
    field: &'static str,
    names: &[String],
) -> Result<Vec<String>, InventoryServiceError> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let name = name.trim();
            if name.is_empty() {
                return Err(InventoryServiceError::validation(
                    field,
                    format!("entry {i} is blank"),
                ));
            }
            Ok(name.to_owned())
        })
        .collect()
}

// ── SeedDefaults ─────────────────────────────────────────────────────────────

pub struct SeedDefaultsUseCase<R: GroupRepository> {
    pub repo: R,
}

impl<R: GroupRepository> SeedDefaultsUseCase<R> {
    /// Create the configured locations and labels for `group_id` in one
    /// transaction. Returns the number of rows created.
    pub async fn execute(
        &self,
        ctx: &OpContext,
        group_id: Uuid,
        defaults: &SeedDefaults,
    ) -> Result<usize, InventoryServiceError> {
        if group_id.is_nil() {
            return Err(InventoryServiceError::validation(
                "group_id",
                "missing required group",
            ));
        }
        let seed = normalize(defaults).inspect_err(|e| {
            tracing::warn!(%group_id, error = %e, "rejected seed defaults");
        })?;
        if seed.is_empty() {
            ctx.check()?;
            return Ok(0);
        }

        let created = ctx.run(self.repo.seed(group_id, &seed)).await?;
        tracing::info!(
            %group_id,
            locations = seed.locations.len(),
            labels = seed.labels.len(),
            "seeded group defaults"
        );
        Ok(created)
    }
}
