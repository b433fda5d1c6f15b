//! egui integration for the range widget.
//!
//! - **Painter**: a [`Surface`](rangeseek_core::Surface) over an `egui::Painter`
//! - **Slider**: an `egui::Widget` that feeds pointer input into a
//!   [`RangeSeekBar`](rangeseek_core::RangeSeekBar) and paints it

pub mod painter;
pub mod slider;

pub use painter::PainterSurface;
pub use slider::RangeSlider;

/// Standard sizing constants.
pub mod sizing {
    /// Default slider width
    pub const WIDTH: f32 = 300.0;
    /// Default slider height
    pub const HEIGHT: f32 = 48.0;
}

/// Standard colors.
pub mod theme {
    use egui::Color32;

    /// Track background behind the thumbs
    pub const TRACK_BG: Color32 = Color32::from_rgb(235, 235, 235);
}
