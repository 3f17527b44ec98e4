//! UI layer: app shell, step views and font/theme setup.

pub mod app;
pub mod steps;
pub mod theme;

pub use app::FunnelApp;
