//! Introduction page: decorative image and dataset overview.

use crate::data::Dataset;
use crate::gui::banner;
use anyhow::{Context, Result};
use egui::{RichText, TextureHandle};
use std::path::{Path, PathBuf};

const IMAGE_MAX_WIDTH: f32 = 640.0;

/// Decode an image file into egui's pixel format.
fn decode_image(path: &Path) -> Result<egui::ColorImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?;
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        rgba.as_flat_samples().as_slice(),
    ))
}

enum HeroImage {
    Pending,
    Ready(TextureHandle),
    Failed(String),
}

pub struct IntroductionPage {
    image_path: Option<PathBuf>,
    image: HeroImage,
}

impl IntroductionPage {
    pub fn new(image_path: Option<PathBuf>) -> Self {
        Self {
            image_path,
            image: HeroImage::Pending,
        }
    }

    /// Decode the image on first display; failures stay visible on the page.
    fn ensure_image(&mut self, ctx: &egui::Context) {
        if !matches!(self.image, HeroImage::Pending) {
            return;
        }
        let Some(path) = &self.image_path else {
            return;
        };

        self.image = match decode_image(path) {
            Ok(pixels) => HeroImage::Ready(ctx.load_texture(
                "hero_image",
                pixels,
                egui::TextureOptions::LINEAR,
            )),
            Err(e) => {
                log::error!("{:#}", e);
                HeroImage::Failed(format!("{:#}", e))
            }
        };
    }

    pub fn show(&mut self, ui: &mut egui::Ui, dataset: &Dataset) {
        self.ensure_image(ui.ctx());

        match &self.image {
            HeroImage::Ready(texture) => {
                let size = texture.size_vec2();
                let scale = (IMAGE_MAX_WIDTH / size.x).min(1.0);
                ui.add(egui::Image::new(egui::load::SizedTexture::new(
                    texture.id(),
                    size * scale,
                )));
            }
            HeroImage::Failed(error) => banner::error(ui, error),
            HeroImage::Pending => {}
        }

        ui.add_space(10.0);
        ui.label(RichText::new("About this dashboard").size(16.0).strong());
        ui.label(
            "This dashboard explores a dataset of diabetes health indicators. \
             Use the sidebar to preview the raw data and its summary statistics on \
             the Data Exploration page, or compare variables and their correlations \
             on the Visualization page.",
        );

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            Self::metric(ui, "Rows", dataset.row_count());
            Self::metric(ui, "Columns", dataset.column_count());
            Self::metric(ui, "Numeric columns", dataset.numeric_column_names().len());
        });
    }

    fn metric(ui: &mut egui::Ui, label: &str, value: usize) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(label).size(11.0));
                    ui.label(RichText::new(value.to_string()).size(22.0).strong());
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_image_reports_path() {
        let err = decode_image(Path::new("/no/such/diabetes.png")).unwrap_err();
        assert!(format!("{:#}", err).contains("/no/such/diabetes.png"));
    }

    #[test]
    fn test_decode_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let decoded = decode_image(&path).unwrap();
        assert_eq!(decoded.size, [3, 2]);
    }
}
