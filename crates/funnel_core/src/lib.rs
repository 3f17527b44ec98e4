//! Funnel controller for the building overview form: step derivation, visibility gates
//! and the reducer that owns all wizard state transitions.

use shared::domain::{Category, FunnelStep};

mod state;
pub use state::{FunnelAction, StepSlot, WizardState};

/// Step that becomes active right after `category` is chosen (or cleared).
pub fn derive_step(category: Option<Category>) -> FunnelStep {
    match category {
        None => FunnelStep::Category,
        Some(Category::Apartment | Category::OfficeTel) => FunnelStep::BuildingCount,
        Some(
            Category::CommunityFacility | Category::CommercialFacility | Category::RetailFacility,
        ) => FunnelStep::FacilityCheck,
    }
}

pub fn shows_building_count_step(category: Option<Category>) -> bool {
    matches!(category, Some(Category::Apartment | Category::OfficeTel))
}

pub fn shows_facility_step(category: Option<Category>) -> bool {
    matches!(
        category,
        Some(Category::CommunityFacility | Category::CommercialFacility | Category::RetailFacility)
    )
}

/// Whether `step` may be rendered at all for `category`.
pub fn is_step_renderable(step: FunnelStep, category: Option<Category>) -> bool {
    match step {
        FunnelStep::Category => true,
        FunnelStep::BuildingCount => shows_building_count_step(category),
        FunnelStep::FacilityCheck => shows_facility_step(category),
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
