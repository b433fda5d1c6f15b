//! Pointer input for the range widget.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event in widget-local coordinates.
///
/// Mouse and touch are handled the same way: press, drag, release.
/// Serialized flat as `{"kind": "down" | "move" | "up", "x": .., "y": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "FlatPointerEvent", into = "FlatPointerEvent")]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum PointerKind {
    Down,
    Move,
    Up,
}

/// Wire shape of a [`PointerEvent`].
#[derive(Serialize, Deserialize)]
struct FlatPointerEvent {
    kind: PointerKind,
    x: f64,
    y: f64,
}

impl From<FlatPointerEvent> for PointerEvent {
    fn from(event: FlatPointerEvent) -> Self {
        let position = Point::new(event.x, event.y);
        match event.kind {
            PointerKind::Down => Self::Down { position },
            PointerKind::Move => Self::Move { position },
            PointerKind::Up => Self::Up { position },
        }
    }
}

impl From<PointerEvent> for FlatPointerEvent {
    fn from(event: PointerEvent) -> Self {
        let kind = match event {
            PointerEvent::Down { .. } => PointerKind::Down,
            PointerEvent::Move { .. } => PointerKind::Move,
            PointerEvent::Up { .. } => PointerKind::Up,
        };
        let position = event.position();
        Self {
            kind,
            x: position.x,
            y: position.y,
        }
    }
}

impl PointerEvent {
    /// Create a pointer-down event.
    pub fn down(x: f64, y: f64) -> Self {
        Self::Down {
            position: Point::new(x, y),
        }
    }

    /// Create a pointer-move event.
    pub fn moved(x: f64, y: f64) -> Self {
        Self::Move {
            position: Point::new(x, y),
        }
    }

    /// Create a pointer-up event.
    pub fn up(x: f64, y: f64) -> Self {
        Self::Up {
            position: Point::new(x, y),
        }
    }

    /// Position carried by the event.
    pub fn position(&self) -> Point {
        match *self {
            Self::Down { position } | Self::Move { position } | Self::Up { position } => position,
        }
    }
}

/// Whether a handler consumed an event or left it to default handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    /// The widget handled the event.
    Consumed,
    /// The host should apply its default handling.
    Ignored,
}

impl EventStatus {
    /// Check if the event was consumed.
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}
