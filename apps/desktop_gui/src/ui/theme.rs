use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use eframe::egui;
use tracing::{info, warn};

const HANGUL_FONT_NAME: &str = "hangul";

/// Fonts with Hangul coverage commonly present on desktop installs.
const SYSTEM_HANGUL_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "C:\\Windows\\Fonts\\malgun.ttf",
];

pub fn resolve_font_path(configured: Option<&Path>, candidates: &[&str]) -> Option<PathBuf> {
    if let Some(path) = configured {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        warn!(path = %path.display(), "configured font not found; trying system fonts");
    }
    candidates
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

/// egui's bundled fonts have no Hangul glyphs; register one as a fallback family.
pub fn install_hangul_font(ctx: &egui::Context, configured: Option<&Path>) {
    let Some(path) = resolve_font_path(configured, SYSTEM_HANGUL_FONTS) else {
        warn!("no Hangul font found; Korean labels will render as boxes");
        return;
    };

    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to read Hangul font");
            return;
        }
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        HANGUL_FONT_NAME.to_owned(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(HANGUL_FONT_NAME.to_owned());
    }
    ctx.set_fonts(fonts);
    info!(path = %path.display(), "installed Hangul font");
}

/// Card frame shared by the open step views.
pub fn step_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(12.0)
        .stroke(egui::Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
        .inner_margin(egui::Margin::symmetric(14, 12))
}
