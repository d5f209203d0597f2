use kurbo::Point;
use tracing::{debug, trace};

use crate::axis::{LimitLabelPosition, LimitLine};
use crate::core::Viewport;
use crate::render::{DrawContext, StateGuard, TextHAlign, TextPrimitive};

use super::YAxisRenderer;
use super::lines::padded_content_rect;

/// Horizontal gap between a limit label and the content edge.
const LIMIT_LABEL_X_PADDING: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitLabelPlacement {
    pub x: f64,
    pub y: f64,
    pub align: TextHAlign,
}

/// Top-left anchor of a limit line label drawn next to a line at pixel `y`.
#[must_use]
pub fn limit_label_placement(viewport: Viewport, line: &LimitLine, y: f64) -> LimitLabelPlacement {
    let line_height = line.value_font.line_height_px;
    let x_offset = LIMIT_LABEL_X_PADDING + line.x_offset;
    let y_offset = line.line_width + line_height + line.y_offset;

    match line.label_position {
        LimitLabelPosition::RightTop => LimitLabelPlacement {
            x: viewport.content_right() - x_offset,
            y: y - y_offset,
            align: TextHAlign::Right,
        },
        LimitLabelPosition::RightBottom => LimitLabelPlacement {
            x: viewport.content_right() - x_offset,
            y: y + y_offset - line_height,
            align: TextHAlign::Right,
        },
        LimitLabelPosition::LeftTop => LimitLabelPlacement {
            x: viewport.content_left() + x_offset,
            y: y - y_offset,
            align: TextHAlign::Left,
        },
        LimitLabelPosition::LeftBottom => LimitLabelPlacement {
            x: viewport.content_left() + x_offset,
            y: y + y_offset - line_height,
            align: TextHAlign::Left,
        },
    }
}

impl YAxisRenderer {
    /// Draws every enabled limit line and its label.
    pub fn render_limit_lines<C: DrawContext + ?Sized>(&self, ctx: &mut C) {
        let (Some(axis), Some(transformer)) = (&self.axis, &self.transformer) else {
            return;
        };
        let limit_lines = axis.limit_lines();
        if limit_lines.is_empty() {
            return;
        }

        let matrix = transformer.value_to_pixel_matrix();
        let mut outer = StateGuard::new(ctx);

        for line in limit_lines.iter().filter(|line| line.enabled) {
            if !line.limit.is_finite() {
                debug!(limit = line.limit, "skipping limit line with non-finite value");
                continue;
            }
            let mut scoped = StateGuard::new(&mut *outer);
            scoped.clip_to_rect(padded_content_rect(
                self.viewport.content_rect(),
                line.line_width,
            ));

            let position = matrix * Point::new(0.0, line.limit);
            trace!(limit = line.limit, y = position.y, "limit line");

            scoped.set_stroke(&line.stroke());
            scoped.stroke_segment(
                Point::new(self.viewport.content_left(), position.y),
                Point::new(self.viewport.content_right(), position.y),
            );

            if line.draw_label && !line.label.is_empty() {
                let placement = limit_label_placement(self.viewport, line, position.y);
                scoped.draw_text(TextPrimitive::new(
                    line.label.clone(),
                    placement.x,
                    placement.y,
                    line.value_font,
                    line.value_text_color,
                    placement.align,
                ));
            }
        }
    }
}
