//! Thumb icons and the host collaborator that supplies them.

use std::fmt;

use kurbo::{BezPath, Point, Rect};
use peniko::Color;
use thiserror::Error;

use crate::surface::Surface;
use crate::thumb::ThumbSide;

/// Icon resolution errors.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("No icon available for the {0} thumb")]
    MissingIcon(ThumbSide),
}

/// A drawable that is painted at a host-assigned rectangle.
pub trait Icon: fmt::Debug {
    /// Set the rectangle the icon is drawn into.
    fn set_bounds(&mut self, bounds: Rect);

    /// Current draw bounds.
    fn bounds(&self) -> Rect;

    /// Draw the icon at its current bounds.
    fn draw(&self, surface: &mut dyn Surface);
}

/// Host resource collaborator that resolves the icon for each thumb.
pub trait IconSource {
    /// Resolve the icon for `side`, or `None` if the host has none.
    fn icon(&self, side: ThumbSide) -> Option<Box<dyn Icon>>;
}

impl<F> IconSource for F
where
    F: Fn(ThumbSide) -> Option<Box<dyn Icon>>,
{
    fn icon(&self, side: ThumbSide) -> Option<Box<dyn Icon>> {
        self(side)
    }
}

/// Built-in vector icon: a solid handle with an arrow pointing into the
/// selected range.
#[derive(Debug, Clone)]
pub struct ChevronIcon {
    side: ThumbSide,
    bounds: Rect,
    /// Handle fill color.
    pub handle_color: Color,
    /// Arrow fill color.
    pub arrow_color: Color,
}

impl ChevronIcon {
    /// Create an icon for the given thumb side.
    pub fn new(side: ThumbSide, handle_color: Color) -> Self {
        Self {
            side,
            bounds: Rect::ZERO,
            handle_color,
            arrow_color: Color::WHITE,
        }
    }

    /// Set the arrow color.
    pub fn with_arrow_color(mut self, color: Color) -> Self {
        self.arrow_color = color;
        self
    }

    /// Build the arrow triangle for the current bounds.
    pub fn arrow_path(&self) -> BezPath {
        let center = self.bounds.center();
        let half = self.bounds.width().min(self.bounds.height()) * 0.2;
        // Left thumb points right (into the range), right thumb points left.
        let dir = match self.side {
            ThumbSide::Left => 1.0,
            ThumbSide::Right => -1.0,
        };
        let mut path = BezPath::new();
        path.move_to(Point::new(center.x - dir * half * 0.5, center.y - half));
        path.line_to(Point::new(center.x + dir * half * 0.5, center.y));
        path.line_to(Point::new(center.x - dir * half * 0.5, center.y + half));
        path.close_path();
        path
    }
}

impl Icon for ChevronIcon {
    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn draw(&self, surface: &mut dyn Surface) {
        if self.bounds.area() <= 0.0 {
            return;
        }
        surface.fill_rect(self.bounds, self.handle_color);
        surface.fill_path(&self.arrow_path(), self.arrow_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn test_chevron_draws_handle_then_arrow() {
        let mut icon = ChevronIcon::new(ThumbSide::Left, Color::BLACK);
        icon.set_bounds(Rect::new(0.0, 0.0, 45.0, 100.0));

        let mut surface = RecordingSurface::new();
        icon.draw(&mut surface);

        let commands = surface.commands();
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], DrawCommand::FillRect { rect, .. } if rect == icon.bounds()));
        assert!(matches!(commands[1], DrawCommand::FillPath { .. }));
    }

    #[test]
    fn test_chevron_skips_empty_bounds() {
        let icon = ChevronIcon::new(ThumbSide::Right, Color::BLACK);
        let mut surface = RecordingSurface::new();
        icon.draw(&mut surface);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_arrow_points_inward() {
        let mut left = ChevronIcon::new(ThumbSide::Left, Color::BLACK);
        left.set_bounds(Rect::new(0.0, 0.0, 40.0, 100.0));
        let mut right = ChevronIcon::new(ThumbSide::Right, Color::BLACK);
        right.set_bounds(Rect::new(0.0, 0.0, 40.0, 100.0));

        // The tip is the second vertex.
        let tip = |icon: &ChevronIcon| match icon.arrow_path().elements()[1] {
            kurbo::PathEl::LineTo(p) => p.x,
            _ => panic!("unexpected path element"),
        };
        assert!(tip(&left) > 20.0);
        assert!(tip(&right) < 20.0);
    }

    #[test]
    fn test_closure_icon_source() {
        let source = |side: ThumbSide| match side {
            ThumbSide::Left => Some(Box::new(ChevronIcon::new(side, Color::BLACK)) as Box<dyn Icon>),
            ThumbSide::Right => None,
        };
        assert!(source.icon(ThumbSide::Left).is_some());
        assert!(source.icon(ThumbSide::Right).is_none());
    }
}
