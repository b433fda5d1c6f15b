//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, Renderer};
use kurbo::{Affine, BezPath, Rect};
use peniko::{Color, Fill};
use rangeseek_core::{RangeSeekBar, Surface};
use vello::Scene;

/// [`Surface`] that appends fills to a Vello scene under a fixed transform.
pub struct SceneSurface<'a> {
    scene: &'a mut Scene,
    transform: Affine,
}

impl<'a> SceneSurface<'a> {
    /// Wrap a scene; shapes are mapped through `transform`.
    pub fn new(scene: &'a mut Scene, transform: Affine) -> Self {
        Self { scene, transform }
    }
}

impl Surface for SceneSurface<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_zero_area() {
            return;
        }
        self.scene.fill(Fill::NonZero, self.transform, color, None, &rect.abs());
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.scene.fill(Fill::NonZero, self.transform, color, None, path);
    }
}

/// Vello-based renderer for range widgets.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
}

impl VelloRenderer {
    /// Create a new renderer with an empty scene.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, bar: &mut RangeSeekBar, ctx: &RenderContext) {
        self.scene.reset();

        if let Some(background) = ctx.background_color {
            self.scene
                .fill(Fill::NonZero, Affine::IDENTITY, background, None, &ctx.viewport());
        }

        bar.take_redraw_request();
        let mut surface = SceneSurface::new(&mut self.scene, ctx.transform());
        bar.render(&mut surface);
        log::trace!("Built range widget scene at {:?}", ctx.origin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;
    use rangeseek_core::RangeSeekConfig;

    #[test]
    fn test_renderer_creation() {
        let renderer = VelloRenderer::new();
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_unsized_bar_draws_nothing() {
        let mut renderer = VelloRenderer::new();
        let mut bar = RangeSeekBar::with_chevrons(RangeSeekConfig::default());
        renderer.build_scene(&mut bar, &RenderContext::new(Size::new(800.0, 600.0)));
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_scene_with_bar() {
        let mut renderer = VelloRenderer::new();
        let mut bar = RangeSeekBar::with_chevrons(RangeSeekConfig::default());
        bar.set_size(Size::new(300.0, 100.0));

        renderer.build_scene(&mut bar, &RenderContext::new(Size::new(800.0, 600.0)));
        assert!(!renderer.scene().encoding().is_empty());
        assert!(!bar.take_redraw_request());
    }

    #[test]
    fn test_take_scene_resets() {
        let mut renderer = VelloRenderer::new();
        let mut bar = RangeSeekBar::with_chevrons(RangeSeekConfig::default());
        bar.set_size(Size::new(300.0, 100.0));
        renderer.build_scene(&mut bar, &RenderContext::new(Size::new(800.0, 600.0)));

        let scene = renderer.take_scene();
        assert!(!scene.encoding().is_empty());
        assert!(renderer.scene().encoding().is_empty());
    }
}
