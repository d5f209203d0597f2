use kurbo::{Point, Rect};

use crate::axis::AxisDependency;
use crate::render::{DrawContext, StateGuard, StrokeStyle};

use super::YAxisRenderer;

impl YAxisRenderer {
    /// Vertical axis line along the content edge of the dependency side.
    pub fn render_axis_line<C: DrawContext + ?Sized>(&self, ctx: &mut C) {
        let Some(axis) = &self.axis else {
            return;
        };
        let config = &axis.config;
        if !config.enabled || !config.draw_axis_line {
            return;
        }

        let x = match config.dependency {
            AxisDependency::Left => self.viewport.content_left(),
            AxisDependency::Right => self.viewport.content_right(),
        };

        let mut scoped = StateGuard::new(ctx);
        scoped.set_stroke(&config.axis_line);
        scoped.stroke_segment(
            Point::new(x, self.viewport.content_top()),
            Point::new(x, self.viewport.content_bottom()),
        );
    }

    /// Horizontal grid line per tick, then the zero line when enabled.
    pub fn render_grid_lines<C: DrawContext + ?Sized>(&self, ctx: &mut C) {
        let positions = self.transformed_positions();
        self.draw_grid_lines(ctx, &positions);
    }

    /// Content rectangle padded vertically by half the grid line width so
    /// caps of the outermost lines are not cut off.
    #[must_use]
    pub fn grid_clipping_rect(&self) -> Rect {
        let width = self.axis.as_ref().map_or(0.0, |axis| axis.config.grid.width);
        padded_content_rect(self.viewport.content_rect(), width)
    }

    pub(super) fn draw_grid_lines<C: DrawContext + ?Sized>(&self, ctx: &mut C, positions: &[Point]) {
        let Some(axis) = &self.axis else {
            return;
        };
        let config = &axis.config;
        if !config.enabled {
            return;
        }

        if config.draw_grid_lines {
            let mut scoped = StateGuard::new(&mut *ctx);
            scoped.clip_to_rect(self.grid_clipping_rect());
            scoped.set_stroke(&config.grid);
            for position in positions {
                scoped.stroke_segment(
                    Point::new(self.viewport.content_left(), position.y),
                    Point::new(self.viewport.content_right(), position.y),
                );
            }
        }

        if config.draw_zero_line {
            self.draw_zero_line(ctx);
        }
    }

    /// Horizontal line at domain value zero.
    ///
    /// Requires a transformer and a configured zero-line color.
    pub fn draw_zero_line<C: DrawContext + ?Sized>(&self, ctx: &mut C) {
        let (Some(axis), Some(transformer)) = (&self.axis, &self.transformer) else {
            return;
        };
        let config = &axis.config;
        let Some(color) = config.zero_line_color else {
            return;
        };

        let mut scoped = StateGuard::new(ctx);
        scoped.clip_to_rect(padded_content_rect(
            self.viewport.content_rect(),
            config.zero_line_width,
        ));

        let mut stroke = StrokeStyle::solid(color, config.zero_line_width);
        stroke.dash = config.zero_line_dash.clone();
        scoped.set_stroke(&stroke);

        let zero = transformer.pixel_for_value(0.0, 0.0);
        scoped.stroke_segment(
            Point::new(self.viewport.content_left(), zero.y),
            Point::new(self.viewport.content_right(), zero.y),
        );
    }
}

pub(super) fn padded_content_rect(content: Rect, line_width: f64) -> Rect {
    content.inflate(0.0, line_width / 2.0)
}
