//! Renderer trait abstraction.

use kurbo::{Affine, Point, Rect, Size};
use peniko::Color;
use rangeseek_core::RangeSeekBar;

/// Context for a single render frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Top-left corner of the widget in viewport coordinates.
    pub origin: Point,
    /// Viewport size in physical pixels.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Background color, or `None` to leave the viewport untouched.
    pub background_color: Option<Color>,
}

impl RenderContext {
    /// Create a new render context.
    pub fn new(viewport_size: Size) -> Self {
        Self {
            origin: Point::ZERO,
            viewport_size,
            scale_factor: 1.0,
            background_color: None,
        }
    }

    /// Set where the widget sits in the viewport.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Transform from widget-local to physical viewport coordinates.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale_factor) * Affine::translate(self.origin.to_vec2())
    }

    /// The viewport rectangle in physical pixels.
    pub fn viewport(&self) -> Rect {
        self.viewport_size.to_rect()
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the frame for a widget.
    ///
    /// Called once per frame; drains the widget's redraw request.
    fn build_scene(&mut self, bar: &mut RangeSeekBar, ctx: &RenderContext);
}
