//! Events emitted by step views and drained by the app once per frame.

use funnel_core::FunnelAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Funnel(FunnelAction),
    SummaryRequested,
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::Funnel(action) => match action {
                FunnelAction::SelectCategory(_) => "select_category",
                FunnelAction::ReopenStep(_) => "reopen_step",
                FunnelAction::EditBuildingCount(_) => "edit_building_count",
                FunnelAction::SubmitBuildingCount => "submit_building_count",
                FunnelAction::ToggleFacility(_) => "toggle_facility",
                FunnelAction::Reset => "reset",
            },
            UiEvent::SummaryRequested => "summary_requested",
        }
    }
}

impl From<FunnelAction> for UiEvent {
    fn from(action: FunnelAction) -> Self {
        Self::Funnel(action)
    }
}
