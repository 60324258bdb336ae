//! Baseline inventory data created for a new group.

use serde::{Deserialize, Serialize};

/// Location and label names seeded into a freshly created inventory group.
///
/// Passed explicitly to the seeding use case; there is no global list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedDefaults {
    pub locations: Vec<String>,
    pub labels: Vec<String>,
}

impl SeedDefaults {
    pub fn empty() -> Self {
        Self {
            locations: vec![],
            labels: vec![],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty() && self.labels.is_empty()
    }
}

impl Default for SeedDefaults {
    fn default() -> Self {
        Self {
            locations: [
                "客厅",
                "车库",
                "厨房",
                "卧室",
                "浴室",
                "办公室",
                "阁楼",
                "地下室",
            ]
            .map(str::to_owned)
            .to_vec(),
            labels: [
                "家用电器",
                "物联网",
                "电子产品",
                "服务器",
                "常规",
                "重要",
            ]
            .map(str::to_owned)
            .to_vec(),
        }
    }
}
