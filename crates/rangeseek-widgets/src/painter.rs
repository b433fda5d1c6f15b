//! [`Surface`] implementation on top of an egui painter.

use egui::{Color32, CornerRadius, Painter, Pos2, Stroke, vec2};
use kurbo::{BezPath, PathEl, Rect};
use peniko::Color;
use rangeseek_core::Surface;

/// Paints widget-local shapes into screen space at `origin`.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> PainterSurface<'a> {
    /// Wrap a painter; local `(0, 0)` maps to `origin`.
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }
}

impl Surface for PainterSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_zero_area() {
            return;
        }
        self.painter
            .rect_filled(to_egui_rect(rect, self.origin), CornerRadius::ZERO, to_color32(color));
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        let points = path_points(path, self.origin);
        if points.len() < 3 {
            return;
        }
        self.painter
            .add(egui::Shape::convex_polygon(points, to_color32(color), Stroke::NONE));
    }
}

/// Convert a peniko color to an egui color.
pub fn to_color32(color: Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Convert a local kurbo rect to a screen-space egui rect.
///
/// Inverted rectangles are normalized first.
pub fn to_egui_rect(rect: Rect, origin: Pos2) -> egui::Rect {
    let rect = rect.abs();
    egui::Rect::from_min_max(
        origin + vec2(rect.x0 as f32, rect.y0 as f32),
        origin + vec2(rect.x1 as f32, rect.y1 as f32),
    )
}

/// Polygon vertices of a path; curves contribute their end point only.
fn path_points(path: &BezPath, origin: Pos2) -> Vec<Pos2> {
    path.elements()
        .iter()
        .filter_map(|el| match *el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) | PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => {
                Some(origin + vec2(p.x as f32, p.y as f32))
            }
            PathEl::ClosePath => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn test_color_conversion() {
        let color = Color::from_rgba8(0x3A, 0x78, 0xE5, 0xFF);
        assert_eq!(to_color32(color), Color32::from_rgb(0x3A, 0x78, 0xE5));
    }

    #[test]
    fn test_rect_offset_by_origin() {
        let rect = to_egui_rect(Rect::new(45.0, 13.0, 255.0, 87.0), Pos2::new(10.0, 20.0));
        assert_eq!(rect.min, Pos2::new(55.0, 33.0));
        assert_eq!(rect.max, Pos2::new(265.0, 107.0));
    }

    #[test]
    fn test_inverted_rect_is_normalized() {
        let rect = to_egui_rect(Rect::new(200.0, 0.0, 100.0, 10.0), Pos2::ZERO);
        assert_eq!(rect.min.x, 100.0);
        assert_eq!(rect.max.x, 200.0);
    }

    #[test]
    fn test_path_points_skip_close() {
        let mut path = BezPath::new();
        path.move_to(Point::new(0.0, 0.0));
        path.line_to(Point::new(10.0, 5.0));
        path.line_to(Point::new(0.0, 10.0));
        path.close_path();

        let points = path_points(&path, Pos2::new(1.0, 1.0));
        assert_eq!(points, vec![Pos2::new(1.0, 1.0), Pos2::new(11.0, 6.0), Pos2::new(1.0, 11.0)]);
    }
}
