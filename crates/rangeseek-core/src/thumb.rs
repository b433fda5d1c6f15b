//! Draggable thumb handles.

use std::fmt;

use kurbo::Rect;
use serde::{Deserialize, Serialize};

use crate::icon::Icon;
use crate::surface::Surface;

/// Which edge of the selection a thumb bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThumbSide {
    Left,
    Right,
}

impl fmt::Display for ThumbSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThumbSide::Left => write!(f, "left"),
            ThumbSide::Right => write!(f, "right"),
        }
    }
}

/// A draggable handle: a mutable position plus the icon drawn there.
///
/// The thumb performs no validation of its own; the owning widget moves it.
#[derive(Debug)]
pub struct Thumb {
    side: ThumbSide,
    /// Bounding box in widget-local coordinates.
    pub position: Rect,
    icon: Box<dyn Icon>,
}

impl Thumb {
    /// Create a thumb and push its position into the icon.
    pub fn new(side: ThumbSide, position: Rect, icon: Box<dyn Icon>) -> Self {
        let mut thumb = Self { side, position, icon };
        thumb.update_bounds();
        thumb
    }

    /// Which side this thumb is on.
    pub fn side(&self) -> ThumbSide {
        self.side
    }

    /// The icon drawn for this thumb.
    pub fn icon(&self) -> &dyn Icon {
        self.icon.as_ref()
    }

    /// Push the current position into the icon's draw bounds.
    pub fn update_bounds(&mut self) {
        self.icon.set_bounds(self.position);
    }

    /// Draw the icon at its last pushed bounds.
    pub fn draw(&self, surface: &mut dyn Surface) {
        self.icon.draw(surface);
    }
}
