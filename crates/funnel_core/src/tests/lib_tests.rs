use super::*;
use shared::{
    domain::{BuildingCount, FacilityId},
    error::FunnelError,
};

const BUILDING_COUNT_CATEGORIES: [Category; 2] = [Category::Apartment, Category::OfficeTel];
const FACILITY_CATEGORIES: [Category; 3] = [
    Category::CommunityFacility,
    Category::CommercialFacility,
    Category::RetailFacility,
];

fn state_with(category: Category) -> WizardState {
    let mut state = WizardState::new();
    state
        .apply(FunnelAction::SelectCategory(category))
        .expect("select category");
    state
}

#[test]
fn derive_step_covers_unset_and_every_category() {
    assert_eq!(derive_step(None), FunnelStep::Category);
    for category in BUILDING_COUNT_CATEGORIES {
        assert_eq!(derive_step(Some(category)), FunnelStep::BuildingCount);
    }
    for category in FACILITY_CATEGORIES {
        assert_eq!(derive_step(Some(category)), FunnelStep::FacilityCheck);
    }
}

#[test]
fn visibility_gates_are_mutually_exclusive() {
    assert!(!shows_building_count_step(None));
    assert!(!shows_facility_step(None));
    for category in Category::ALL {
        assert_ne!(
            shows_building_count_step(Some(category)),
            shows_facility_step(Some(category)),
            "{category} should show exactly one follow-up step"
        );
    }
}

#[test]
fn fresh_state_only_opens_category_step() {
    let state = WizardState::new();
    assert_eq!(state.step(), FunnelStep::Category);
    assert_eq!(state.category(), None);
    assert_eq!(state.building_count(), BuildingCount::DEFAULT);
    assert_eq!(state.building_count_draft(), 1);
    assert_eq!(state.slot(FunnelStep::Category), StepSlot::Open);
    assert_eq!(state.slot(FunnelStep::BuildingCount), StepSlot::Absent);
    assert_eq!(state.slot(FunnelStep::FacilityCheck), StepSlot::Absent);
}

#[test]
fn residential_categories_open_building_count_step() {
    for category in BUILDING_COUNT_CATEGORIES {
        let state = state_with(category);
        assert_eq!(state.step(), FunnelStep::BuildingCount);
        assert_eq!(state.slot(FunnelStep::Category), StepSlot::Collapsed);
        assert_eq!(state.slot(FunnelStep::BuildingCount), StepSlot::Open);
        assert_eq!(state.slot(FunnelStep::FacilityCheck), StepSlot::Absent);
    }
}

#[test]
fn facility_categories_open_facility_step() {
    for category in FACILITY_CATEGORIES {
        let state = state_with(category);
        assert_eq!(state.step(), FunnelStep::FacilityCheck);
        assert_eq!(state.slot(FunnelStep::BuildingCount), StepSlot::Absent);
        assert_eq!(state.slot(FunnelStep::FacilityCheck), StepSlot::Open);
    }
}

#[test]
fn submitting_count_advances_to_facility_step_even_when_hidden() {
    let mut state = state_with(Category::OfficeTel);
    state.apply(FunnelAction::EditBuildingCount(4)).expect("edit");
    let step = state.apply(FunnelAction::SubmitBuildingCount).expect("submit");

    assert_eq!(step, FunnelStep::FacilityCheck);
    assert_eq!(state.building_count().get(), 4);
    assert_eq!(state.slot(FunnelStep::BuildingCount), StepSlot::Collapsed);
    assert_eq!(state.slot(FunnelStep::FacilityCheck), StepSlot::Absent);
}

#[test]
fn zero_count_is_rejected_without_touching_state() {
    let mut state = state_with(Category::Apartment);
    state.apply(FunnelAction::EditBuildingCount(2)).expect("edit");
    let before = state.clone();

    let err = state
        .apply(FunnelAction::EditBuildingCount(0))
        .expect_err("zero count");
    assert_eq!(err, FunnelError::InvalidBuildingCount(0));
    assert_eq!(state, before);
    assert_eq!(state.building_count_draft(), 2);
}

#[test]
fn reopening_category_keeps_previous_answers() {
    let mut state = state_with(Category::Apartment);
    state.apply(FunnelAction::EditBuildingCount(2)).expect("edit");
    state.apply(FunnelAction::SubmitBuildingCount).expect("submit");

    let step = state
        .apply(FunnelAction::ReopenStep(FunnelStep::Category))
        .expect("reopen");
    assert_eq!(step, FunnelStep::Category);
    assert_eq!(state.category(), Some(Category::Apartment));
    assert_eq!(state.building_count().get(), 2);
    assert_eq!(state.slot(FunnelStep::Category), StepSlot::Open);
    assert_eq!(state.slot(FunnelStep::BuildingCount), StepSlot::Collapsed);
}

#[test]
fn reopening_hidden_step_is_ignored() {
    let mut state = state_with(Category::RetailFacility);
    let step = state
        .apply(FunnelAction::ReopenStep(FunnelStep::BuildingCount))
        .expect("reopen");
    assert_eq!(step, FunnelStep::FacilityCheck);

    let mut fresh = WizardState::new();
    let step = fresh
        .apply(FunnelAction::ReopenStep(FunnelStep::FacilityCheck))
        .expect("reopen");
    assert_eq!(step, FunnelStep::Category);
}

#[test]
fn reselecting_category_reruns_derivation() {
    let mut state = state_with(Category::Apartment);
    state
        .apply(FunnelAction::ReopenStep(FunnelStep::Category))
        .expect("reopen");
    let step = state
        .apply(FunnelAction::SelectCategory(Category::Apartment))
        .expect("reselect");
    assert_eq!(step, FunnelStep::BuildingCount);
}

#[test]
fn toggle_is_keyed_by_id_and_involutive() {
    let mut state = state_with(Category::CommunityFacility);
    state
        .apply(FunnelAction::ToggleFacility(FacilityId::PumpRoom))
        .expect("toggle");
    let before = state.clone();

    for _ in 0..2 {
        state
            .apply(FunnelAction::ToggleFacility(FacilityId::Storage))
            .expect("toggle");
    }
    assert_eq!(state, before);
    assert!(state.is_selected(FacilityId::PumpRoom));
    assert!(!state.is_selected(FacilityId::Storage));
}

#[test]
fn selected_facilities_follow_catalog_order() {
    let mut state = state_with(Category::CommercialFacility);
    for id in [
        FacilityId::SecurityOffice,
        FacilityId::UndergroundParking,
        FacilityId::ElectricRoom,
    ] {
        state.apply(FunnelAction::ToggleFacility(id)).expect("toggle");
    }
    let names: Vec<_> = state.selected_facilities().map(|info| info.name).collect();
    assert_eq!(names, vec!["지하주차장", "전기실", "경비실"]);
}

#[test]
fn summary_reports_only_applicable_answers() {
    let mut state = state_with(Category::RetailFacility);
    state
        .apply(FunnelAction::ToggleFacility(FacilityId::GroundParking))
        .expect("toggle");
    let summary = state.summary();
    assert_eq!(summary.category, Some(Category::RetailFacility));
    assert_eq!(summary.building_count, None);
    assert_eq!(summary.facilities, vec![FacilityId::GroundParking]);

    state
        .apply(FunnelAction::ReopenStep(FunnelStep::Category))
        .expect("reopen");
    state
        .apply(FunnelAction::SelectCategory(Category::Apartment))
        .expect("switch");
    let summary = state.summary();
    assert_eq!(summary.building_count, Some(BuildingCount::DEFAULT));
    assert!(summary.facilities.is_empty());
    assert!(state.is_selected(FacilityId::GroundParking));
}

#[test]
fn reset_restores_initial_state() {
    let mut state = state_with(Category::Apartment);
    state.apply(FunnelAction::EditBuildingCount(7)).expect("edit");
    state.apply(FunnelAction::SubmitBuildingCount).expect("submit");
    state.apply(FunnelAction::Reset).expect("reset");
    assert_eq!(state, WizardState::default());
}

#[test]
fn actions_round_trip_through_json() {
    let action = FunnelAction::ToggleFacility(FacilityId::UndergroundParking);
    let json = serde_json::to_string(&action).expect("json");
    assert_eq!(
        json,
        r#"{"type":"toggle_facility","payload":"UNDERGROUND_PARKING"}"#
    );
    let decoded: FunnelAction = serde_json::from_str(&json).expect("decode");
    assert_eq!(decoded, action);
}

#[test]
fn reachable_states_survive_a_json_round_trip() {
    let mut state = state_with(Category::Apartment);
    state.apply(FunnelAction::EditBuildingCount(3)).expect("edit");
    state.apply(FunnelAction::SubmitBuildingCount).expect("submit");
    assert_eq!(state.step(), FunnelStep::FacilityCheck);

    let json = serde_json::to_string(&state).expect("json");
    let decoded: WizardState = serde_json::from_str(&json).expect("decode");
    assert_eq!(decoded, state);
}

fn decode_state(step: &str, category: Option<&str>, draft: u32) -> serde_json::Result<WizardState> {
    serde_json::from_value(serde_json::json!({
        "step": step,
        "category": category,
        "building_count": 1,
        "building_count_draft": draft,
        "selected_facilities": [],
    }))
}

#[test]
fn decoding_rejects_step_hidden_by_category() {
    let err = decode_state("BUILDING_COUNT_STEP", Some("RETAIL_FACILITY"), 1)
        .expect_err("retail has no building count step");
    assert!(err.to_string().contains("cannot be active"));

    assert!(decode_state("FACILITY_CHECK_STEP", None, 1).is_err());
    assert!(decode_state("FACILITY_CHECK_STEP", Some("OFFICE_TEL"), 1).is_ok());
}

#[test]
fn decoding_rejects_zero_draft() {
    assert!(decode_state("BUILDING_COUNT_STEP", Some("APARTMENT"), 0).is_err());
    assert!(decode_state("BUILDING_COUNT_STEP", Some("APARTMENT"), 2).is_ok());
}
