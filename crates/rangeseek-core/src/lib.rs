//! RangeSeek Core Library
//!
//! Platform-agnostic model for a dual-thumb range slider: thumb geometry,
//! derived track layout, pointer handling and the drawing capabilities a
//! host backend has to provide.

pub mod config;
pub mod geometry;
pub mod icon;
pub mod input;
pub mod seekbar;
pub mod surface;
pub mod thumb;

pub use config::{BoundsPolicy, ConfigError, RangeSeekConfig, SerializableColor};
pub use geometry::{TrackLayout, hit_test, initial_thumb_rects};
pub use icon::{ChevronIcon, Icon, IconSource, ResourceError};
pub use input::{EventStatus, PointerEvent};
pub use seekbar::{RangeSeekBar, Selection};
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use thumb::{Thumb, ThumbSide};
