//! Controller layer: UI events and their application to the wizard state.

pub mod events;
pub mod orchestration;
