//! Heatmap colors and cell geometry, shared by the interactive and static renderers.

use egui::{pos2, vec2, Pos2, Rect, Vec2};

const COOL: (u8, u8, u8) = (59, 76, 192);
const NEUTRAL: (u8, u8, u8) = (221, 221, 221);
const WARM: (u8, u8, u8) = (180, 4, 38);
const UNDEFINED: (u8, u8, u8) = (160, 160, 160);

/// Diverging blue-grey-red color for a correlation in [-1, 1].
pub fn coolwarm(value: f64) -> (u8, u8, u8) {
    if value.is_nan() {
        return UNDEFINED;
    }
    let v = value.clamp(-1.0, 1.0);
    if v < 0.0 {
        lerp(NEUTRAL, COOL, -v)
    } else {
        lerp(NEUTRAL, WARM, v)
    }
}

fn lerp(from: (u8, u8, u8), to: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    (mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

/// White annotations on saturated cells, black elsewhere.
pub fn label_is_light(value: f64) -> bool {
    !value.is_nan() && value.abs() > 0.6
}

/// Two-decimal annotation used on every heatmap cell.
pub fn format_cell(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.2}", value)
    }
}

/// Grid geometry: `n` square cells placed right of a label gutter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapLayout {
    pub origin: Pos2,
    pub cell: f32,
    pub n: usize,
}

impl HeatmapLayout {
    /// Fit an `n`×`n` grid into `available`, leaving `gutter` for labels on the
    /// left and bottom.
    pub fn fit(origin: Pos2, available: Vec2, gutter: f32, n: usize) -> Self {
        let usable = (available.x - gutter).min(available.y - gutter).max(0.0);
        let cell = if n == 0 { 0.0 } else { (usable / n as f32).clamp(0.0, 90.0) };
        Self {
            origin: pos2(origin.x + gutter, origin.y),
            cell,
            n,
        }
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let min = pos2(
            self.origin.x + col as f32 * self.cell,
            self.origin.y + row as f32 * self.cell,
        );
        Rect::from_min_size(min, vec2(self.cell, self.cell))
    }

    pub fn grid_rect(&self) -> Rect {
        let side = self.cell * self.n as f32;
        Rect::from_min_size(self.origin, vec2(side, side))
    }

    /// Cell under `pos`, as (row, col).
    pub fn cell_at(&self, pos: Pos2) -> Option<(usize, usize)> {
        if self.cell <= 0.0 || !self.grid_rect().contains(pos) {
            return None;
        }
        let col = ((pos.x - self.origin.x) / self.cell) as usize;
        let row = ((pos.y - self.origin.y) / self.cell) as usize;
        (row < self.n && col < self.n).then_some((row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coolwarm_endpoints() {
        assert_eq!(coolwarm(-1.0), COOL);
        assert_eq!(coolwarm(0.0), NEUTRAL);
        assert_eq!(coolwarm(1.0), WARM);
        assert_eq!(coolwarm(5.0), WARM);
        assert_eq!(coolwarm(f64::NAN), UNDEFINED);
    }

    #[test]
    fn test_coolwarm_midpoint() {
        let (r, g, b) = coolwarm(0.5);
        assert_eq!((r, g, b), (201, 113, 130));
    }

    #[test]
    fn test_cell_annotation() {
        assert_eq!(format_cell(0.4666), "0.47");
        assert_eq!(format_cell(1.0), "1.00");
        assert_eq!(format_cell(f64::NAN), "nan");
        assert!(label_is_light(-0.9));
        assert!(!label_is_light(0.2));
    }

    #[test]
    fn test_layout_hit_testing() {
        let layout = HeatmapLayout::fit(pos2(0.0, 0.0), vec2(500.0, 420.0), 100.0, 4);

        assert_eq!(layout.cell, 80.0);
        assert_eq!(layout.cell_at(pos2(105.0, 5.0)), Some((0, 0)));
        assert_eq!(layout.cell_at(pos2(100.0 + 80.0 * 2.5, 80.0 * 3.5)), Some((3, 2)));
        assert_eq!(layout.cell_at(pos2(50.0, 5.0)), None);
        assert_eq!(layout.cell_at(pos2(105.0, 400.0)), None);
        assert_eq!(layout.cell_rect(1, 2).min, pos2(260.0, 80.0));
    }

    #[test]
    fn test_layout_caps_cell_size() {
        let layout = HeatmapLayout::fit(pos2(0.0, 0.0), vec2(2000.0, 2000.0), 100.0, 2);
        assert_eq!(layout.cell, 90.0);

        let empty = HeatmapLayout::fit(pos2(0.0, 0.0), vec2(400.0, 400.0), 100.0, 0);
        assert_eq!(empty.cell_at(pos2(150.0, 10.0)), None);
    }
}
