use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use shared::{
    catalog::FacilityInfo,
    domain::{BuildingCount, Category, FacilityId, FunnelStep},
    error::FunnelError,
    summary::FunnelSummary,
};
use tracing::debug;

use crate::{derive_step, is_step_renderable, shows_building_count_step, shows_facility_step};

/// User intents accepted by [`WizardState::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum FunnelAction {
    SelectCategory(Category),
    /// Click on a collapsed step header.
    ReopenStep(FunnelStep),
    /// Edit of the numeric field. Zero is rejected; nothing is committed until
    /// `SubmitBuildingCount`.
    EditBuildingCount(u32),
    SubmitBuildingCount,
    ToggleFacility(FacilityId),
    Reset,
}

/// How a step slot should be drawn for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSlot {
    Absent,
    Collapsed,
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWizardState")]
pub struct WizardState {
    step: FunnelStep,
    category: Option<Category>,
    building_count: BuildingCount,
    building_count_draft: BuildingCount,
    selected_facilities: BTreeSet<FacilityId>,
}

#[derive(Deserialize)]
struct RawWizardState {
    step: FunnelStep,
    category: Option<Category>,
    building_count: BuildingCount,
    building_count_draft: BuildingCount,
    selected_facilities: BTreeSet<FacilityId>,
}

/// Steps the reducer can leave active for `category`. Besides every renderable step this
/// includes the facility step after a count was submitted for a residential category.
fn is_step_reachable(step: FunnelStep, category: Option<Category>) -> bool {
    is_step_renderable(step, category)
        || (step == FunnelStep::FacilityCheck && shows_building_count_step(category))
}

impl TryFrom<RawWizardState> for WizardState {
    type Error = FunnelError;

    fn try_from(raw: RawWizardState) -> Result<Self, Self::Error> {
        if !is_step_reachable(raw.step, raw.category) {
            return Err(FunnelError::UnreachableStep {
                step: raw.step,
                category: raw.category,
            });
        }
        Ok(Self {
            step: raw.step,
            category: raw.category,
            building_count: raw.building_count,
            building_count_draft: raw.building_count_draft,
            selected_facilities: raw.selected_facilities,
        })
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            step: FunnelStep::Category,
            category: None,
            building_count: BuildingCount::DEFAULT,
            building_count_draft: BuildingCount::DEFAULT,
            selected_facilities: BTreeSet::new(),
        }
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> FunnelStep {
        self.step
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn building_count(&self) -> BuildingCount {
        self.building_count
    }

    pub fn building_count_draft(&self) -> u32 {
        self.building_count_draft.get()
    }

    pub fn is_selected(&self, id: FacilityId) -> bool {
        self.selected_facilities.contains(&id)
    }

    /// Selected facilities in catalog order.
    pub fn selected_facilities(&self) -> impl Iterator<Item = &'static FacilityInfo> + '_ {
        self.selected_facilities.iter().map(|id| id.info())
    }

    /// Applies one user action and returns the step that is active afterwards.
    ///
    /// On error the state is left untouched.
    pub fn apply(&mut self, action: FunnelAction) -> Result<FunnelStep, FunnelError> {
        match action {
            FunnelAction::SelectCategory(category) => {
                let previous = self.category.replace(category);
                if !shows_building_count_step(self.category) {
                    self.building_count_draft = self.building_count;
                }
                self.step = derive_step(self.category);
                debug!(?previous, ?category, step = ?self.step, "category selected");
            }
            FunnelAction::ReopenStep(step) => {
                if is_step_renderable(step, self.category) {
                    self.step = step;
                    debug!(?step, "step reopened");
                } else {
                    debug!(?step, category = ?self.category, "ignored reopen of hidden step");
                }
            }
            FunnelAction::EditBuildingCount(count) => {
                self.building_count_draft = BuildingCount::new(count)?;
            }
            FunnelAction::SubmitBuildingCount => {
                let count = self.building_count_draft;
                self.building_count = count;
                self.step = FunnelStep::FacilityCheck;
                debug!(building_count = count.get(), "building count submitted");
            }
            FunnelAction::ToggleFacility(id) => {
                let selected = if self.selected_facilities.remove(&id) {
                    false
                } else {
                    self.selected_facilities.insert(id)
                };
                debug!(facility = %id, selected, "facility toggled");
            }
            FunnelAction::Reset => {
                *self = Self::default();
                debug!("funnel reset");
            }
        }
        Ok(self.step)
    }

    pub fn slot(&self, step: FunnelStep) -> StepSlot {
        match step {
            FunnelStep::Category
                if self.step == FunnelStep::Category || self.category.is_none() =>
            {
                StepSlot::Open
            }
            FunnelStep::Category => StepSlot::Collapsed,
            _ if !is_step_renderable(step, self.category) => StepSlot::Absent,
            _ if self.step == step => StepSlot::Open,
            _ => StepSlot::Collapsed,
        }
    }

    pub fn summary(&self) -> FunnelSummary {
        FunnelSummary {
            category: self.category,
            building_count: shows_building_count_step(self.category)
                .then_some(self.building_count),
            facilities: if shows_facility_step(self.category) {
                self.selected_facilities.iter().copied().collect()
            } else {
                Vec::new()
            },
        }
    }
}
