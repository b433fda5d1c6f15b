//! The dual-thumb range widget.
//!
//! Owns a left and a right [`Thumb`], derives the accent lines and content
//! band from their positions, and turns pointer events into thumb drags.
//! The selection is never stored; it is read back from the content band as
//! fractions of the widget width.

use std::fmt;

use kurbo::{Point, Rect, Size, Vec2};

use crate::config::{BoundsPolicy, RangeSeekConfig};
use crate::geometry::{TrackLayout, hit_test, initial_thumb_rects};
use crate::icon::{ChevronIcon, Icon, IconSource, ResourceError};
use crate::input::{EventStatus, PointerEvent};
use crate::surface::Surface;
use crate::thumb::{Thumb, ThumbSide};

/// Selected sub-range as fractions of the widget width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Left edge fraction.
    pub left: f64,
    /// Right edge fraction.
    pub right: f64,
}

impl Selection {
    /// Width of the selected range as a fraction of the total width.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Callback invoked with the selection width while a thumb is dragged.
type SlideCallback = Box<dyn FnMut(f64)>;

/// A range-selection slider with two draggable thumbs.
pub struct RangeSeekBar {
    config: RangeSeekConfig,
    size: Size,
    left: Thumb,
    right: Thumb,
    layout: TrackLayout,
    /// Thumb currently being dragged (at most one).
    selected: Option<ThumbSide>,
    /// Pointer x of the previous drag step.
    last_pointer_x: f64,
    needs_redraw: bool,
    on_slide: Option<SlideCallback>,
}

impl fmt::Debug for RangeSeekBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSeekBar")
            .field("config", &self.config)
            .field("size", &self.size)
            .field("left", &self.left)
            .field("right", &self.right)
            .field("layout", &self.layout)
            .field("selected", &self.selected)
            .field("last_pointer_x", &self.last_pointer_x)
            .field("needs_redraw", &self.needs_redraw)
            .field("on_slide", &self.on_slide.is_some())
            .finish()
    }
}

impl RangeSeekBar {
    /// Create a widget with the given thumb icons.
    ///
    /// Thumbs have empty rectangles until [`set_size`](Self::set_size) is called.
    pub fn new(config: RangeSeekConfig, left_icon: Box<dyn Icon>, right_icon: Box<dyn Icon>) -> Self {
        Self {
            config,
            size: Size::ZERO,
            left: Thumb::new(ThumbSide::Left, Rect::ZERO, left_icon),
            right: Thumb::new(ThumbSide::Right, Rect::ZERO, right_icon),
            layout: TrackLayout::default(),
            selected: None,
            last_pointer_x: 0.0,
            needs_redraw: false,
            on_slide: None,
        }
    }

    /// Create a widget with icons resolved from a host resource source.
    ///
    /// Fails if the host cannot supply either icon.
    pub fn from_source(config: RangeSeekConfig, source: &dyn IconSource) -> Result<Self, ResourceError> {
        let left = source
            .icon(ThumbSide::Left)
            .ok_or(ResourceError::MissingIcon(ThumbSide::Left))?;
        let right = source
            .icon(ThumbSide::Right)
            .ok_or(ResourceError::MissingIcon(ThumbSide::Right))?;
        Ok(Self::new(config, left, right))
    }

    /// Create a widget drawing the built-in chevron icons in the accent color.
    pub fn with_chevrons(config: RangeSeekConfig) -> Self {
        let accent = config.accent();
        Self::new(
            config,
            Box::new(ChevronIcon::new(ThumbSide::Left, accent)),
            Box::new(ChevronIcon::new(ThumbSide::Right, accent)),
        )
    }

    /// Register the slide observer, replacing any previous one.
    pub fn set_on_slide(&mut self, callback: impl FnMut(f64) + 'static) {
        self.on_slide = Some(Box::new(callback));
    }

    /// Remove the slide observer.
    pub fn clear_on_slide(&mut self) {
        self.on_slide = None;
    }

    /// The active configuration.
    pub fn config(&self) -> &RangeSeekConfig {
        &self.config
    }

    /// Current widget size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Whether a size has been established.
    pub fn is_laid_out(&self) -> bool {
        self.size.width > 0.0 && self.size.height > 0.0
    }

    /// Derived accent-line and content rectangles.
    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    /// Get a thumb by side.
    pub fn thumb(&self, side: ThumbSide) -> &Thumb {
        match side {
            ThumbSide::Left => &self.left,
            ThumbSide::Right => &self.right,
        }
    }

    fn thumb_mut(&mut self, side: ThumbSide) -> &mut Thumb {
        match side {
            ThumbSide::Left => &mut self.left,
            ThumbSide::Right => &mut self.right,
        }
    }

    /// The thumb currently being dragged, if any.
    pub fn selected_thumb(&self) -> Option<&Thumb> {
        self.selected.map(|side| self.thumb(side))
    }

    /// Check if a thumb is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.selected.is_some()
    }

    /// Return and clear the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Establish a new widget size and place both thumbs at the edges.
    ///
    /// Must be called whenever the host surface changes size.
    pub fn set_size(&mut self, size: Size) {
        if 2.0 * self.config.thumb_width > size.width {
            log::warn!(
                "Thumbs ({} px each) do not fit a {} px wide track",
                self.config.thumb_width,
                size.width
            );
        }
        log::debug!("Range track size established: {}x{}", size.width, size.height);
        self.size = size;
        self.place_thumbs();
    }

    /// Restore both thumbs to the edges for the current size.
    pub fn reset(&mut self) {
        log::debug!("Resetting range selection");
        self.place_thumbs();
    }

    fn place_thumbs(&mut self) {
        let (left, right) = initial_thumb_rects(self.size, self.config.thumb_width);
        self.left.position = left;
        self.right.position = right;
        self.recalculate();
    }

    fn recalculate(&mut self) {
        self.layout = TrackLayout::derive(
            self.left.position,
            self.right.position,
            self.size,
            self.config.line_height,
        );
        self.needs_redraw = true;
    }

    /// Draw the thumbs, the accent lines and the content overlay.
    pub fn render(&mut self, surface: &mut dyn Surface) {
        if !self.is_laid_out() {
            return;
        }

        self.left.update_bounds();
        self.left.draw(surface);
        self.right.update_bounds();
        self.right.draw(surface);

        let accent = self.config.accent();
        surface.fill_rect(self.layout.top_line, accent);
        surface.fill_rect(self.layout.bottom_line, accent);
        surface.fill_rect(self.layout.content, self.config.content());
    }

    /// Dispatch a pointer event to the matching handler.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> EventStatus {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position } => self.pointer_up(position),
        }
    }

    /// Grab the thumb under the pointer, left thumb first.
    pub fn pointer_down(&mut self, position: Point) -> EventStatus {
        if !self.is_laid_out() {
            return EventStatus::Ignored;
        }

        let side = if hit_test(position, self.left.position) {
            ThumbSide::Left
        } else if hit_test(position, self.right.position) {
            ThumbSide::Right
        } else {
            return EventStatus::Ignored;
        };

        log::debug!("Grabbed {} thumb at x={}", side, position.x);
        self.selected = Some(side);
        self.last_pointer_x = position.x;
        EventStatus::Consumed
    }

    /// Drag the grabbed thumb horizontally and report the new selection width.
    pub fn pointer_move(&mut self, position: Point) -> EventStatus {
        let Some(side) = self.selected else {
            return EventStatus::Ignored;
        };

        let dx = self.constrain_delta(side, position.x - self.last_pointer_x);
        log::trace!("Moving {} thumb by {}", side, dx);
        let thumb = self.thumb_mut(side);
        thumb.position = thumb.position + Vec2::new(dx, 0.0);
        self.last_pointer_x = position.x;
        self.recalculate();

        let width = self.selection().width();
        if let Some(on_slide) = self.on_slide.as_mut() {
            on_slide(width);
        }
        EventStatus::Consumed
    }

    /// Release the grabbed thumb.
    pub fn pointer_up(&mut self, _position: Point) -> EventStatus {
        self.last_pointer_x = 0.0;
        match self.selected.take() {
            Some(side) => {
                log::debug!("Released {} thumb", side);
                EventStatus::Consumed
            }
            None => EventStatus::Ignored,
        }
    }

    fn constrain_delta(&self, side: ThumbSide, dx: f64) -> f64 {
        if self.config.bounds_policy == BoundsPolicy::Unclamped {
            return dx;
        }
        let (left, right) = (self.left.position, self.right.position);
        let (min, max) = match side {
            ThumbSide::Left => (-left.x0, right.x0 - left.x1),
            ThumbSide::Right => (left.x1 - right.x0, self.size.width - right.x1),
        };
        // Overlapping thumbs stay frozen.
        if min > max {
            return 0.0;
        }
        dx.clamp(min, max)
    }

    /// Left edge of the selection as a fraction of the widget width.
    pub fn left_fraction(&self) -> f64 {
        self.fraction(self.layout.content.x0)
    }

    /// Right edge of the selection as a fraction of the widget width.
    pub fn right_fraction(&self) -> f64 {
        self.fraction(self.layout.content.x1)
    }

    /// Both edges of the selection.
    pub fn selection(&self) -> Selection {
        Selection {
            left: self.left_fraction(),
            right: self.right_fraction(),
        }
    }

    fn fraction(&self, x: f64) -> f64 {
        if self.size.width <= 0.0 {
            return 0.0;
        }
        x / self.size.width
    }
}
