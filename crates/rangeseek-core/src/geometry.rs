//! Track geometry: thumb placement and the rectangles derived from it.

use kurbo::{Point, Rect, Size};

/// Initial thumb rectangles for a widget of the given size.
///
/// The left thumb occupies a `thumb_width` band at the left edge, the right
/// thumb the same band at the right edge. Both span the full height.
pub fn initial_thumb_rects(size: Size, thumb_width: f64) -> (Rect, Rect) {
    let left = Rect::new(0.0, 0.0, thumb_width, size.height);
    let right = Rect::new(size.width - thumb_width, 0.0, size.width, size.height);
    (left, right)
}

/// Half-open containment test (`x0 <= x < x1`, `y0 <= y < y1`).
pub fn hit_test(point: Point, rect: Rect) -> bool {
    rect.contains(point)
}

/// Rectangles derived from the two thumb positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackLayout {
    /// Accent line along the top edge of the selection.
    pub top_line: Rect,
    /// Accent line along the bottom edge of the selection.
    pub bottom_line: Rect,
    /// Band between the thumbs, inside the two accent lines.
    pub content: Rect,
}

impl TrackLayout {
    /// Derive the layout from the current thumb rectangles.
    ///
    /// All three rectangles span horizontally from the left thumb's right
    /// edge to the right thumb's left edge.
    pub fn derive(left: Rect, right: Rect, size: Size, line_height: f64) -> Self {
        let x0 = left.x1;
        let x1 = right.x0;
        let height = size.height;
        Self {
            top_line: Rect::new(x0, 0.0, x1, line_height),
            bottom_line: Rect::new(x0, height - line_height, x1, height),
            content: Rect::new(x0, line_height, x1, height - line_height),
        }
    }
}
