//! Drawing surface abstraction.
//!
//! The widget never talks to a platform API directly. Backends implement
//! [`Surface`] over whatever they draw into (a vello scene, an egui painter).

use kurbo::{BezPath, Rect};
use peniko::Color;

/// A target that accepts filled shapes in widget-local coordinates.
pub trait Surface {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a closed path made of straight segments.
    fn fill_path(&mut self, path: &BezPath, color: Color);
}

/// A single recorded drawing operation.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: Color },
    FillPath { path: BezPath, color: Color },
}

/// Surface that records every operation in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Only the rectangle fills, in order.
    pub fn filled_rects(&self) -> Vec<(Rect, Color)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillRect { rect, color } => Some((*rect, *color)),
                DrawCommand::FillPath { .. } => None,
            })
            .collect()
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            color,
        });
    }
}
