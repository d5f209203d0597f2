use kurbo::{Point, Rect};
use smallvec::SmallVec;
use tracing::warn;

use crate::core::Viewport;
use crate::render::{
    Color, DrawContext, LinePrimitive, PolygonPrimitive, RenderFrame, StrokeStyle, TextPrimitive,
};

#[derive(Debug, Clone, PartialEq)]
struct RecordedState {
    clip: Option<Rect>,
    stroke: StrokeStyle,
}

/// `DrawContext` that resolves graphics state into self-contained primitives.
///
/// Every recorded primitive carries the clip and stroke that were active when
/// it was drawn, so the resulting [`RenderFrame`] can be replayed by any
/// [`crate::render::Renderer`] without re-running the axis renderer.
#[derive(Debug)]
pub struct RecordingContext {
    frame: RenderFrame,
    current: RecordedState,
    saved: Vec<RecordedState>,
    unbalanced_restores: usize,
}

impl RecordingContext {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            frame: RenderFrame::new(viewport),
            current: RecordedState {
                clip: None,
                stroke: StrokeStyle::default(),
            },
            saved: Vec::new(),
            unbalanced_restores: 0,
        }
    }

    /// Number of currently open `save_state` scopes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    #[must_use]
    pub fn unbalanced_restores(&self) -> usize {
        self.unbalanced_restores
    }

    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.current.clip
    }

    #[must_use]
    pub fn current_stroke(&self) -> &StrokeStyle {
        &self.current.stroke
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn into_frame(self) -> RenderFrame {
        if !self.saved.is_empty() {
            warn!(
                open_scopes = self.saved.len(),
                "recording finished with unrestored graphics state"
            );
        }
        self.frame
    }
}

impl DrawContext for RecordingContext {
    fn save_state(&mut self) {
        self.saved.push(self.current.clone());
    }

    fn restore_state(&mut self) {
        match self.saved.pop() {
            Some(state) => self.current = state,
            None => {
                self.unbalanced_restores += 1;
                warn!("restore_state called without matching save_state");
            }
        }
    }

    fn clip_to_rect(&mut self, rect: Rect) {
        self.current.clip = Some(match self.current.clip {
            Some(existing) => existing.intersect(rect),
            None => rect,
        });
    }

    fn set_stroke(&mut self, stroke: &StrokeStyle) {
        self.current.stroke = stroke.clone();
    }

    fn stroke_segment(&mut self, from: Point, to: Point) {
        let mut line = LinePrimitive::new(from, to, self.current.stroke.clone());
        line.clip = self.current.clip;
        self.frame.lines.push(line);
    }

    fn fill_stroke_polygon(&mut self, points: &[Point], fill: Color, stroke: Color) {
        self.frame.polygons.push(PolygonPrimitive {
            points: SmallVec::from_slice(points),
            fill_color: fill,
            stroke_color: stroke,
            stroke_width: self.current.stroke.width,
            clip: self.current.clip,
        });
    }

    fn draw_text(&mut self, mut text: TextPrimitive) {
        text.clip = self.current.clip;
        self.frame.texts.push(text);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::RecordingContext;
    use crate::core::Viewport;
    use crate::render::{Color, DrawContext, StateGuard, StrokeStyle};

    #[test]
    fn guard_restores_clip_and_stroke_on_drop() {
        let mut ctx = RecordingContext::new(Viewport::new(100.0, 100.0));
        {
            let mut scoped = StateGuard::new(&mut ctx);
            scoped.clip_to_rect(Rect::new(0.0, 0.0, 50.0, 50.0));
            scoped.set_stroke(&StrokeStyle::solid(Color::RED, 3.0));
            scoped.stroke_segment(Point::new(0.0, 10.0), Point::new(50.0, 10.0));
            assert_eq!(scoped.depth(), 1);
        }
        assert_eq!(ctx.depth(), 0);
        assert_eq!(ctx.current_clip(), None);
        assert_eq!(ctx.current_stroke(), &StrokeStyle::default());

        let frame = ctx.into_frame();
        assert_eq!(frame.lines.len(), 1);
        assert_eq!(frame.lines[0].clip, Some(Rect::new(0.0, 0.0, 50.0, 50.0)));
        assert_eq!(frame.lines[0].stroke.width, 3.0);
    }

    #[test]
    fn nested_clips_intersect() {
        let mut ctx = RecordingContext::new(Viewport::new(100.0, 100.0));
        let mut outer = StateGuard::new(&mut ctx);
        outer.clip_to_rect(Rect::new(0.0, 0.0, 60.0, 60.0));
        {
            let mut inner = StateGuard::new(&mut *outer);
            inner.clip_to_rect(Rect::new(20.0, 20.0, 100.0, 100.0));
            assert_eq!(inner.current_clip(), Some(Rect::new(20.0, 20.0, 60.0, 60.0)));
        }
        assert_eq!(outer.current_clip(), Some(Rect::new(0.0, 0.0, 60.0, 60.0)));
    }

    #[test]
    fn unmatched_restore_is_counted_not_fatal() {
        let mut ctx = RecordingContext::new(Viewport::new(10.0, 10.0));
        ctx.restore_state();
        assert_eq!(ctx.unbalanced_restores(), 1);
        assert_eq!(ctx.depth(), 0);
    }
}
