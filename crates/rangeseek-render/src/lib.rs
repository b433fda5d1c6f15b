//! RangeSeek Render Library
//!
//! Renderer abstraction and implementations for the range widget.
//! The default implementation records into a Vello scene.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{RenderContext, Renderer};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::{SceneSurface, VelloRenderer};
