use serde::{Deserialize, Serialize};

use crate::domain::{BuildingCount, Category, FacilityId};

/// Outcome of the funnel: only the answers to steps that apply to the chosen category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FunnelSummary {
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_count: Option<BuildingCount>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facilities: Vec<FacilityId>,
}

impl FunnelSummary {
    pub fn is_complete(&self) -> bool {
        self.category.is_some()
    }

    pub fn facility_names(&self) -> Vec<&'static str> {
        self.facilities.iter().map(|id| id.info().name).collect()
    }
}
