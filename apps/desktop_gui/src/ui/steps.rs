//! Step views. Each one reads the wizard state and only emits events; none mutates it.

use crossbeam_channel::Sender;
use eframe::egui;
use funnel_core::{FunnelAction, StepSlot, WizardState};
use shared::{
    catalog::group_by_category,
    domain::{Category, FunnelStep},
};

use crate::controller::{events::UiEvent, orchestration::dispatch_ui_event};
use crate::ui::theme::step_frame;

const MAX_BUILDING_COUNT: u32 = 999;

/// Collapsed count header. Shows the draft so an uncommitted edit survives a reopen.
fn building_count_header(state: &WizardState) -> String {
    format!("선택된 동 갯수: {}", state.building_count_draft())
}

fn facility_header(state: &WizardState) -> String {
    format!("선택된 부대 시설: {}", state.summary().facility_names().join(", "))
}

fn collapsed_header(ui: &mut egui::Ui, text: String) -> egui::Response {
    ui.add(egui::Label::new(text).sense(egui::Sense::click()))
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

pub fn category_step(
    ui: &mut egui::Ui,
    state: &WizardState,
    ui_tx: &Sender<UiEvent>,
    status: &mut String,
) {
    match (state.slot(FunnelStep::Category), state.category()) {
        (StepSlot::Absent, _) => {}
        (StepSlot::Collapsed, Some(category)) => {
            let text = format!("선택된 카테고리: {}", category.label());
            if collapsed_header(ui, text).clicked() {
                dispatch_ui_event(
                    ui_tx,
                    FunnelAction::ReopenStep(FunnelStep::Category),
                    status,
                );
            }
        }
        _ => {
            step_frame(ui).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label("구분을 선택해주세요.");
                    let selected_text = state.category().map(Category::label).unwrap_or("선택");
                    egui::ComboBox::from_id_salt("category_selector")
                        .selected_text(selected_text)
                        .show_ui(ui, |ui| {
                            for category in Category::ALL {
                                let selected = state.category() == Some(category);
                                if ui.selectable_label(selected, category.label()).clicked() {
                                    dispatch_ui_event(
                                        ui_tx,
                                        FunnelAction::SelectCategory(category),
                                        status,
                                    );
                                }
                            }
                        });
                });
            });
        }
    }
}

pub fn building_count_step(
    ui: &mut egui::Ui,
    state: &WizardState,
    ui_tx: &Sender<UiEvent>,
    status: &mut String,
) {
    match state.slot(FunnelStep::BuildingCount) {
        StepSlot::Absent => {}
        StepSlot::Collapsed => {
            if collapsed_header(ui, building_count_header(state)).clicked() {
                dispatch_ui_event(
                    ui_tx,
                    FunnelAction::ReopenStep(FunnelStep::BuildingCount),
                    status,
                );
            }
        }
        StepSlot::Open => {
            step_frame(ui).show(ui, |ui| {
                ui.label("몇개의 동을 작성하시나요?");
                ui.horizontal(|ui| {
                    let mut draft = state.building_count_draft();
                    let field =
                        ui.add(egui::DragValue::new(&mut draft).range(1..=MAX_BUILDING_COUNT));
                    if field.changed() {
                        dispatch_ui_event(ui_tx, FunnelAction::EditBuildingCount(draft), status);
                    }
                    let enter_pressed =
                        field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("확인").clicked() || enter_pressed {
                        dispatch_ui_event(ui_tx, FunnelAction::SubmitBuildingCount, status);
                    }
                });
            });
        }
    }
}

pub fn facility_step(
    ui: &mut egui::Ui,
    state: &WizardState,
    ui_tx: &Sender<UiEvent>,
    status: &mut String,
) {
    match state.slot(FunnelStep::FacilityCheck) {
        StepSlot::Absent => {}
        StepSlot::Collapsed => {
            if collapsed_header(ui, facility_header(state)).clicked() {
                dispatch_ui_event(
                    ui_tx,
                    FunnelAction::ReopenStep(FunnelStep::FacilityCheck),
                    status,
                );
            }
        }
        StepSlot::Open => {
            step_frame(ui).show(ui, |ui| {
                ui.label("부대 시설을 선택해주세요.");
                ui.add_space(6.0);
                for (group, facilities) in group_by_category() {
                    ui.horizontal_top(|ui| {
                        ui.label(egui::RichText::new(group.label()).strong());
                        ui.vertical(|ui| {
                            for facility in facilities {
                                // Checked state comes from the id set, never the row object.
                                let mut checked = state.is_selected(facility.id);
                                let mut response = ui.checkbox(&mut checked, facility.name);
                                if let Some(description) = facility.description {
                                    response = response.on_hover_text(description);
                                }
                                if response.changed() {
                                    dispatch_ui_event(
                                        ui_tx,
                                        FunnelAction::ToggleFacility(facility.id),
                                        status,
                                    );
                                }
                            }
                        });
                    });
                    ui.add_space(4.0);
                }
            });
        }
    }
}
