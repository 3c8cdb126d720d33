//! Static Chart Renderer
//! Writes the correlation heatmap to a PNG with plotters.
//!
//! Layout:
//! 1. Title: "Correlation Matrix" centered
//! 2. Row labels on the left, column labels below the grid
//! 3. One square per column pair, colored coolwarm and annotated to two decimals

use crate::charts::heatmap;
use crate::stats::CorrelationMatrix;
use anyhow::{anyhow, bail, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 800;
const LEFT_GUTTER: i32 = 220;
const TOP_MARGIN: i32 = 70;
const BOTTOM_GUTTER: i32 = 90;
const RIGHT_MARGIN: i32 = 40;

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Side length of one heatmap cell for an `n`-column matrix.
    pub fn cell_size(n: usize) -> i32 {
        if n == 0 {
            return 0;
        }
        let grid_w = WIDTH as i32 - LEFT_GUTTER - RIGHT_MARGIN;
        let grid_h = HEIGHT as i32 - TOP_MARGIN - BOTTOM_GUTTER;
        grid_w.min(grid_h) / n as i32
    }

    /// Render the matrix to `path` as a PNG.
    pub fn save_heatmap_png(matrix: &CorrelationMatrix, path: &Path) -> Result<()> {
        if matrix.is_empty() {
            bail!("No numeric columns to correlate");
        }

        let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| anyhow!("Render error: {}", e))?;

        let centered = Pos::new(HPos::Center, VPos::Center);
        let title_style = ("sans-serif", 26).into_font().color(&BLACK).pos(centered);
        root.draw(&Text::new(
            "Correlation Matrix",
            (WIDTH as i32 / 2, TOP_MARGIN / 2),
            title_style,
        ))
        .map_err(|e| anyhow!("Render error: {}", e))?;

        let n = matrix.size();
        let cell = Self::cell_size(n);
        let cell_font = (cell as f64 * 0.22).clamp(10.0, 20.0);
        let label_style = ("sans-serif", 15).into_font().color(&BLACK);

        for row in 0..n {
            for col in 0..n {
                let value = matrix.get(row, col);
                let x0 = LEFT_GUTTER + col as i32 * cell;
                let y0 = TOP_MARGIN + row as i32 * cell;
                let (r, g, b) = heatmap::coolwarm(value);

                root.draw(&Rectangle::new(
                    [(x0, y0), (x0 + cell, y0 + cell)],
                    RGBColor(r, g, b).filled(),
                ))
                .map_err(|e| anyhow!("Render error: {}", e))?;

                let text_color = if heatmap::label_is_light(value) { WHITE } else { BLACK };
                let style = ("sans-serif", cell_font)
                    .into_font()
                    .color(&text_color)
                    .pos(centered);
                root.draw(&Text::new(
                    heatmap::format_cell(value),
                    (x0 + cell / 2, y0 + cell / 2),
                    style,
                ))
                .map_err(|e| anyhow!("Render error: {}", e))?;
            }
        }

        let grid_bottom = TOP_MARGIN + n as i32 * cell;
        for (i, name) in matrix.columns().iter().enumerate() {
            let center = i as i32 * cell + cell / 2;

            root.draw(&Text::new(
                name.clone(),
                (LEFT_GUTTER - 10, TOP_MARGIN + center),
                label_style.clone().pos(Pos::new(HPos::Right, VPos::Center)),
            ))
            .map_err(|e| anyhow!("Render error: {}", e))?;

            let offset = if i % 2 == 0 { 8 } else { 30 };
            root.draw(&Text::new(
                name.clone(),
                (LEFT_GUTTER + center, grid_bottom + offset),
                label_style.clone().pos(Pos::new(HPos::Center, VPos::Top)),
            ))
            .map_err(|e| anyhow!("Render error: {}", e))?;
        }

        root.present().map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;
        log::info!("Saved correlation heatmap to {}", path.display());
        Ok(())
    }
}
