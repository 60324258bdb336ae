use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A group together with the number of location and label rows seeded into it.
#[derive(Debug, Clone)]
pub struct CreatedGroup {
    pub group: Group,
    pub seeded: usize,
}
