//! Domain vocabulary shared by the funnel controller, the desktop GUI and the tools CLI.

pub mod catalog;
pub mod domain;
pub mod error;
pub mod summary;
