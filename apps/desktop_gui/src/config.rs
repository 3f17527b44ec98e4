use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

const SETTINGS_FILE_NAME: &str = "funnel.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct GuiSettings {
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    pub font_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_title: "건축 개요".into(),
            inner_size: [560.0, 720.0],
            min_inner_size: [420.0, 480.0],
            font_path: None,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    window_title: Option<String>,
    inner_size: Option<[f32; 2]>,
    min_inner_size: Option<[f32; 2]>,
    font_path: Option<PathBuf>,
    log_filter: Option<String>,
}

/// Defaults, then the settings file, then environment overrides.
///
/// An explicitly requested file must exist; the implicit locations are optional.
pub fn load_settings(explicit_path: Option<&Path>) -> anyhow::Result<GuiSettings> {
    let mut settings = GuiSettings::default();

    let file_cfg = match explicit_path {
        Some(path) => Some(read_settings_file(path)?),
        None => default_settings_paths()
            .into_iter()
            .find(|path| path.is_file())
            .map(|path| read_settings_file(&path))
            .transpose()?,
    };
    if let Some(file_cfg) = file_cfg {
        merge_file_settings(&mut settings, file_cfg);
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn default_settings_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SETTINGS_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("building_funnel").join(SETTINGS_FILE_NAME));
    }
    paths
}

fn read_settings_file(path: &Path) -> anyhow::Result<FileSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))
}

fn merge_file_settings(settings: &mut GuiSettings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.window_title {
        settings.window_title = v;
    }
    if let Some(v) = file_cfg.inner_size {
        settings.inner_size = v;
    }
    if let Some(v) = file_cfg.min_inner_size {
        settings.min_inner_size = v;
    }
    if let Some(v) = file_cfg.font_path {
        settings.font_path = Some(v);
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
}

fn apply_env_overrides(settings: &mut GuiSettings, lookup: impl Fn(&str) -> Option<String>) {
    let read = |names: &[&str]| {
        names
            .iter()
            .filter_map(|name| lookup(*name))
            .filter(|value| !value.trim().is_empty())
            .last()
    };

    if let Some(v) = read(&["FUNNEL_WINDOW_TITLE", "APP__WINDOW_TITLE"]) {
        settings.window_title = v;
    }
    if let Some(v) = read(&["FUNNEL_FONT_PATH", "APP__FONT_PATH"]) {
        settings.font_path = Some(PathBuf::from(v));
    }
    if let Some(v) = read(&["FUNNEL_LOG", "APP__LOG_FILTER"]) {
        settings.log_filter = v;
    }
}
