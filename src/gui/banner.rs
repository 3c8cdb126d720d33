//! Colored message boxes for errors, warnings and confirmations.

use egui::{Color32, RichText};

pub const ERROR_COLOR: Color32 = Color32::from_rgb(220, 53, 69);
pub const WARNING_COLOR: Color32 = Color32::from_rgb(255, 193, 7);
pub const SUCCESS_COLOR: Color32 = Color32::from_rgb(40, 167, 69);
pub const INFO_COLOR: Color32 = Color32::from_rgb(100, 149, 237);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Warning,
    Success,
    Info,
}

impl BannerKind {
    fn color(&self) -> Color32 {
        match self {
            BannerKind::Error => ERROR_COLOR,
            BannerKind::Warning => WARNING_COLOR,
            BannerKind::Success => SUCCESS_COLOR,
            BannerKind::Info => INFO_COLOR,
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            BannerKind::Error => "⛔",
            BannerKind::Warning => "⚠",
            BannerKind::Success => "✓",
            BannerKind::Info => "ℹ",
        }
    }
}

pub fn show(ui: &mut egui::Ui, kind: BannerKind, message: &str) {
    let color = kind.color();
    egui::Frame::none()
        .fill(color.gamma_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, color))
        .rounding(5.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(format!("{}  {}", kind.icon(), message))
                    .size(13.0)
                    .color(color),
            );
        });
}

pub fn error(ui: &mut egui::Ui, message: &str) {
    show(ui, BannerKind::Error, message);
}

pub fn warning(ui: &mut egui::Ui, message: &str) {
    show(ui, BannerKind::Warning, message);
}

pub fn success(ui: &mut egui::Ui, message: &str) {
    show(ui, BannerKind::Success, message);
}

pub fn info(ui: &mut egui::Ui, message: &str) {
    show(ui, BannerKind::Info, message);
}
