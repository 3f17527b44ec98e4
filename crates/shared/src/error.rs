use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Category, FunnelStep};

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "code", content = "detail", rename_all = "snake_case")]
pub enum FunnelError {
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("unknown facility id '{0}'")]
    UnknownFacility(String),
    #[error("building count must be at least 1 (got {0})")]
    InvalidBuildingCount(u32),
    #[error("building count '{0}' is not a number")]
    MalformedBuildingCount(String),
    #[error("step {step:?} cannot be active for category {category:?}")]
    UnreachableStep {
        step: FunnelStep,
        category: Option<Category>,
    },
}
