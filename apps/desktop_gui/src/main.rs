use std::path::PathBuf;

mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::{config::GuiSettings, ui::FunnelApp};

#[derive(Parser, Debug)]
#[command(about = "Building overview funnel (desktop)")]
struct Args {
    /// Settings file; defaults to ./funnel.toml or the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log filter directive, e.g. `funnel_core=debug`.
    #[arg(long)]
    log_filter: Option<String>,
}

fn init_tracing(settings: &GuiSettings, cli_filter: Option<&str>) {
    let filter = match cli_filter {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = config::load_settings(args.config.as_deref()).context("loading settings")?;
    init_tracing(&settings, args.log_filter.as_deref());
    tracing::info!(title = %settings.window_title, "starting desktop funnel");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size(settings.inner_size)
            .with_min_inner_size(settings.min_inner_size),
        ..Default::default()
    };
    let font_path = settings.font_path.clone();
    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(move |cc| {
            ui::theme::install_hangul_font(&cc.egui_ctx, font_path.as_deref());
            Ok(Box::new(FunnelApp::new()))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop GUI exited with an error: {err}"))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Args;

    #[test]
    fn parses_optional_flags() {
        let args = Args::parse_from(["desktop_gui", "--config", "alt.toml"]);
        assert_eq!(args.config.as_deref(), Some(std::path::Path::new("alt.toml")));
        assert!(args.log_filter.is_none());

        let args = Args::parse_from(["desktop_gui", "--log-filter", "debug"]);
        assert_eq!(args.log_filter.as_deref(), Some("debug"));
    }
}
