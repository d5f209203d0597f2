use std::ops::{Deref, DerefMut};

use kurbo::{Point, Rect};

use crate::render::{Color, StrokeStyle, TextPrimitive};

/// Immediate-mode drawing surface the axis renderer draws into.
///
/// Implementations keep a stack of graphics states (clip and stroke).
/// `save_state`/`restore_state` must pair up; renderer code never calls them
/// directly and goes through [`StateGuard`] instead.
pub trait DrawContext {
    fn save_state(&mut self);

    fn restore_state(&mut self);

    /// Intersects the current clip with `rect`.
    fn clip_to_rect(&mut self, rect: Rect);

    fn set_stroke(&mut self, stroke: &StrokeStyle);

    /// Strokes one segment with the current stroke state.
    fn stroke_segment(&mut self, from: Point, to: Point);

    /// Fills and strokes a closed polygon.
    fn fill_stroke_polygon(&mut self, points: &[Point], fill: Color, stroke: Color);

    fn draw_text(&mut self, text: TextPrimitive);
}

/// Saves graphics state on creation and restores it on drop.
///
/// Early returns and nested scopes therefore never leak clip or stroke changes
/// into unrelated drawing.
pub struct StateGuard<'a, C: DrawContext + ?Sized> {
    context: &'a mut C,
}

impl<'a, C: DrawContext + ?Sized> StateGuard<'a, C> {
    pub fn new(context: &'a mut C) -> Self {
        context.save_state();
        Self { context }
    }
}

impl<C: DrawContext + ?Sized> Deref for StateGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.context
    }
}

impl<C: DrawContext + ?Sized> DerefMut for StateGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.context
    }
}

impl<C: DrawContext + ?Sized> Drop for StateGuard<'_, C> {
    fn drop(&mut self) {
        self.context.restore_state();
    }
}

impl<C: DrawContext + ?Sized> std::fmt::Debug for StateGuard<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateGuard").finish_non_exhaustive()
    }
}
