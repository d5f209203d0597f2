use std::ops::Range;

use kurbo::Point;

use crate::axis::{AxisDependency, YAxisLabelPosition};
use crate::core::Viewport;
use crate::render::{DrawContext, FontSpec, TextHAlign, TextPrimitive};

use super::YAxisRenderer;

/// Fixed x and alignment shared by all tick labels of one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchor {
    pub x: f64,
    pub align: TextHAlign,
}

#[must_use]
pub fn label_anchor(
    viewport: Viewport,
    dependency: AxisDependency,
    position: YAxisLabelPosition,
    x_offset: f64,
) -> LabelAnchor {
    match (dependency, position) {
        (AxisDependency::Left, YAxisLabelPosition::OutsideChart) => LabelAnchor {
            x: viewport.content_left() - x_offset,
            align: TextHAlign::Right,
        },
        (AxisDependency::Left, YAxisLabelPosition::InsideChart) => LabelAnchor {
            x: viewport.content_left() + x_offset,
            align: TextHAlign::Left,
        },
        (AxisDependency::Right, YAxisLabelPosition::OutsideChart) => LabelAnchor {
            x: viewport.content_right() + x_offset,
            align: TextHAlign::Left,
        },
        (AxisDependency::Right, YAxisLabelPosition::InsideChart) => LabelAnchor {
            x: viewport.content_right() - x_offset,
            align: TextHAlign::Right,
        },
    }
}

/// Tick indices whose labels are drawn, honoring first/last suppression.
#[must_use]
pub fn label_index_range(entry_count: usize, draw_bottom: bool, draw_top: bool) -> Range<usize> {
    let from = if draw_bottom { 0 } else { 1 };
    let to = if draw_top {
        entry_count
    } else {
        entry_count.saturating_sub(1)
    };
    from..to.max(from)
}

/// Shift from a tick's pixel y to the top of its label box.
///
/// Text is anchored at its top edge, so a full line height is taken off the
/// baseline-style offset.
#[must_use]
pub fn label_vertical_offset(font: FontSpec, y_offset: f64) -> f64 {
    (font.line_height_px / 2.5 + y_offset) - font.line_height_px
}

impl YAxisRenderer {
    /// Draws tick labels followed by the indicator block.
    pub fn render_axis_labels<C: DrawContext + ?Sized>(&self, ctx: &mut C) {
        let positions = self.transformed_positions();
        self.draw_axis_labels(ctx, &positions);
    }

    #[must_use]
    pub fn axis_label_anchor(&self) -> Option<LabelAnchor> {
        let axis = self.axis.as_ref()?;
        Some(label_anchor(
            self.viewport,
            axis.config.dependency,
            axis.config.label_position,
            axis.config.x_offset,
        ))
    }

    pub(super) fn draw_axis_labels<C: DrawContext + ?Sized>(&self, ctx: &mut C, positions: &[Point]) {
        let Some(axis) = &self.axis else {
            return;
        };
        let config = &axis.config;
        if !config.enabled || !config.draw_labels {
            return;
        }
        let Some(anchor) = self.axis_label_anchor() else {
            return;
        };

        let offset = label_vertical_offset(config.label_font, config.y_offset);
        let range = label_index_range(
            axis.entry_count(),
            config.draw_bottom_label_entry,
            config.draw_top_label_entry,
        );
        for index in range {
            let Some(position) = positions.get(index) else {
                break;
            };
            let text = axis.formatted_label(index);
            if text.is_empty() {
                continue;
            }
            ctx.draw_text(TextPrimitive::new(
                text,
                anchor.x,
                position.y + offset,
                config.label_font,
                config.label_color,
                anchor.align,
            ));
        }

        self.draw_indicator_block(ctx, anchor, positions);
    }
}
