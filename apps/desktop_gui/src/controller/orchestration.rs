//! Queueing of view events and their application to the wizard state.

use crossbeam_channel::{Sender, TrySendError};
use funnel_core::WizardState;
use tracing::{debug, info, warn};

use crate::controller::events::UiEvent;

pub fn dispatch_ui_event(ui_tx: &Sender<UiEvent>, event: impl Into<UiEvent>, status: &mut String) {
    let event = event.into();
    let event_name = event.name();

    match ui_tx.try_send(event) {
        Ok(()) => debug!(event = event_name, "queued ui event"),
        Err(TrySendError::Full(_)) => {
            *status = "입력이 너무 많습니다. 잠시 후 다시 시도해주세요.".to_string();
            warn!(event = event_name, "ui event queue is full");
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "입력 처리기가 종료되었습니다.".to_string();
            warn!(event = event_name, "ui event queue disconnected");
        }
    }
}

pub fn apply_ui_event(state: &mut WizardState, event: UiEvent, status: &mut String) {
    match event {
        UiEvent::Funnel(action) => match state.apply(action) {
            Ok(_) => status.clear(),
            Err(err) => {
                warn!(%err, ?action, "rejected funnel action");
                *status = format!("입력 오류: {err}");
            }
        },
        UiEvent::SummaryRequested => {
            let summary = state.summary();
            if !summary.is_complete() {
                *status = "구분을 먼저 선택해주세요.".to_string();
                return;
            }
            match serde_json::to_string(&summary) {
                Ok(json) => {
                    info!(summary = %json, "building overview summary");
                    *status = "요약을 로그에 기록했습니다.".to_string();
                }
                Err(err) => {
                    warn!(%err, "failed to serialize summary");
                    *status = format!("요약 생성 실패: {err}");
                }
            }
        }
    }
}
