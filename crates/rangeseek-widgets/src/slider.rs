//! The range slider as an egui widget.

use egui::{CursorIcon, Pos2, Response, Sense, Ui, Vec2, Widget, vec2};
use kurbo::{Point, Size};
use rangeseek_core::{RangeSeekBar, ThumbSide, hit_test};

use crate::painter::PainterSurface;
use crate::{sizing, theme};

/// egui front end for a [`RangeSeekBar`].
///
/// The response is marked changed whenever a drag moves the selection.
pub struct RangeSlider<'a> {
    bar: &'a mut RangeSeekBar,
    size: Vec2,
    show_background: bool,
}

impl<'a> RangeSlider<'a> {
    pub fn new(bar: &'a mut RangeSeekBar) -> Self {
        Self {
            bar,
            size: vec2(sizing::WIDTH, sizing::HEIGHT),
            show_background: true,
        }
    }

    /// Set the allocated widget size.
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    /// Paint the track background behind the thumbs.
    pub fn background(mut self, show: bool) -> Self {
        self.show_background = show;
        self
    }
}

impl Widget for RangeSlider<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, mut response) = ui.allocate_exact_size(self.size, Sense::click_and_drag());
        let bar = self.bar;

        let size = Size::new(rect.width() as f64, rect.height() as f64);
        if bar.size() != size {
            bar.set_size(size);
        }

        let to_local = |pos: Pos2| Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64);
        let before = bar.selection();

        if response.drag_started() {
            if let Some(origin) = ui.input(|i| i.pointer.press_origin()) {
                bar.pointer_down(to_local(origin));
            }
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                bar.pointer_move(to_local(pos));
            }
        }
        if response.drag_stopped() {
            let pos = response.interact_pointer_pos().unwrap_or(rect.min);
            bar.pointer_up(to_local(pos));
        }

        if bar.selection() != before {
            response.mark_changed();
        }
        if bar.take_redraw_request() {
            ui.ctx().request_repaint();
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            if self.show_background {
                painter.rect_filled(rect, egui::CornerRadius::ZERO, theme::TRACK_BG);
            }
            let mut surface = PainterSurface::new(&painter, rect.min);
            bar.render(&mut surface);
        }

        let over_thumb = response.hover_pos().is_some_and(|pos| {
            let local = to_local(pos);
            hit_test(local, bar.thumb(ThumbSide::Left).position)
                || hit_test(local, bar.thumb(ThumbSide::Right).position)
        });
        if over_thumb || bar.is_dragging() {
            response = response.on_hover_cursor(CursorIcon::ResizeHorizontal);
        }
        response
    }
}
