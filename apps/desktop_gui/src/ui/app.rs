use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use funnel_core::{FunnelAction, WizardState};

use crate::controller::{
    events::UiEvent,
    orchestration::{apply_ui_event, dispatch_ui_event},
};
use crate::ui::steps::{building_count_step, category_step, facility_step};

const UI_EVENT_QUEUE_CAPACITY: usize = 256;

/// Top-level view. Owns the only copy of the wizard state.
pub struct FunnelApp {
    ui_tx: Sender<UiEvent>,
    ui_rx: Receiver<UiEvent>,
    state: WizardState,
    status: String,
}

impl Default for FunnelApp {
    fn default() -> Self {
        Self::new()
    }
}

impl FunnelApp {
    pub fn new() -> Self {
        let (ui_tx, ui_rx) = bounded::<UiEvent>(UI_EVENT_QUEUE_CAPACITY);
        Self {
            ui_tx,
            ui_rx,
            state: WizardState::new(),
            status: String::new(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_ui_event(&mut self.state, event, &mut self.status);
        }
    }

    fn show_funnel(&mut self, ctx: &egui::Context) {
        let Self {
            ui_tx,
            state,
            status,
            ..
        } = self;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.heading("건축 개요");
                });
                ui.add_space(16.0);

                ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 14.0);
                category_step(ui, state, ui_tx, status);
                building_count_step(ui, state, ui_tx, status);
                facility_step(ui, state, ui_tx, status);

                ui.add_space(12.0);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("처음부터").clicked() {
                        dispatch_ui_event(ui_tx, FunnelAction::Reset, status);
                    }
                    if ui.button("요약 출력").clicked() {
                        dispatch_ui_event(ui_tx, UiEvent::SummaryRequested, status);
                    }
                });
                if !status.is_empty() {
                    ui.small(egui::RichText::new(status.as_str()).weak());
                }
            });
        });
    }
}

impl eframe::App for FunnelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_funnel(ctx);

        if !self.ui_rx.is_empty() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use shared::domain::{Category, FunnelStep};

    use super::*;

    #[test]
    fn queued_events_are_applied_on_next_frame() {
        let mut app = FunnelApp::new();
        let mut status = String::new();
        dispatch_ui_event(
            &app.ui_tx,
            FunnelAction::SelectCategory(Category::CommercialFacility),
            &mut status,
        );
        assert_eq!(app.state.step(), FunnelStep::Category);

        app.process_ui_events();
        assert_eq!(app.state.step(), FunnelStep::FacilityCheck);
        assert!(app.ui_rx.is_empty());
    }
}
