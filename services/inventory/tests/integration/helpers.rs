use std::sync::{Arc, Mutex};

use uuid::Uuid;

use stockroom_core::config::Config;
use stockroom_domain::defaults::SeedDefaults;
use stockroom_inventory::config::InventoryConfig;
use stockroom_inventory::domain::repository::GroupRepository;
use stockroom_inventory::domain::types::Group;
use stockroom_inventory::error::InventoryServiceError;
use stockroom_inventory::state::InventoryState;

// ── MockGroupStore ───────────────────────────────────────────────────────────

#[derive(Default)]
pub struct GroupData {
    pub groups: Vec<Group>,
    /// (group_id, name) pairs.
    pub locations: Vec<(Uuid, String)>,
    pub labels: Vec<(Uuid, String)>,
    pub calls: usize,
}

#[derive(Clone, Default)]
pub struct MockGroupStore {
    pub data: Arc<Mutex<GroupData>>,
}

impl MockGroupStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(id: Uuid) -> Self {
        let store = Self::default();
        store.data.lock().unwrap().groups.push(Group {
            id,
            name: "Home".to_owned(),
            created_at: chrono::Utc::now(),
        });
        store
    }

    pub fn calls(&self) -> usize {
        self.data.lock().unwrap().calls
    }

    pub fn location_names(&self, group_id: Uuid) -> Vec<String> {
        names_for(&self.data.lock().unwrap().locations, group_id)
    }

    pub fn label_names(&self, group_id: Uuid) -> Vec<String> {
        names_for(&self.data.lock().unwrap().labels, group_id)
    }
}

fn names_for(rows: &[(Uuid, String)], group_id: Uuid) -> Vec<String> {
    rows.iter()
        .filter(|(g, _)| *g == group_id)
        .map(|(_, n)| n.clone())
        .collect()
}

fn push_seed(data: &mut GroupData, group_id: Uuid, seed: &SeedDefaults) -> usize {
    for name in &seed.locations {
        data.locations.push((group_id, name.clone()));
    }
    for name in &seed.labels {
        data.labels.push((group_id, name.clone()));
    }
    seed.locations.len() + seed.labels.len()
}

impl GroupRepository for MockGroupStore {
    async fn create_seeded(
        &self,
        group: &Group,
        seed: &SeedDefaults,
    ) -> Result<usize, InventoryServiceError> {
        let mut data = self.data.lock().unwrap();
        data.calls += 1;
        data.groups.push(group.clone());
        Ok(push_seed(&mut data, group.id, seed))
    }

    async fn seed(
        &self,
        group_id: Uuid,
        seed: &SeedDefaults,
    ) -> Result<usize, InventoryServiceError> {
        let mut data = self.data.lock().unwrap();
        data.calls += 1;
        if !data.groups.iter().any(|g| g.id == group_id) {
            return Err(InventoryServiceError::Constraint {
                message: "FOREIGN KEY constraint failed".to_owned(),
                source: sea_orm::DbErr::Custom("foreign key".to_owned()),
            });
        }
        Ok(push_seed(&mut data, group_id, seed))
    }
}

// ── SQLite-backed store ──────────────────────────────────────────────────────

pub async fn sqlite_state() -> InventoryState {
    sqlite_state_with(Vec::<(String, String)>::new()).await
}

/// Fresh in-memory store with extra config vars (e.g. seed overrides).
pub async fn sqlite_state_with<I, K, V>(vars: I) -> InventoryState
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let vars = vars
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .chain([("DATABASE_URL".to_owned(), "sqlite::memory:".to_owned())]);
    let config = InventoryConfig::from_vars(vars).unwrap();
    InventoryState::connect(&config).await.unwrap()
}

pub fn seed(locations: &[&str], labels: &[&str]) -> SeedDefaults {
    SeedDefaults {
        locations: locations.iter().map(|s| (*s).to_owned()).collect(),
        labels: labels.iter().map(|s| (*s).to_owned()).collect(),
    }
}
