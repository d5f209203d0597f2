//! Indicator block: a pointer-shaped flag on the axis marking where a limit
//! value sits between two tick positions.

use kurbo::Point;
use tracing::debug;

use crate::error::{AxisError, AxisResult};
use crate::render::{Color, DrawContext, StateGuard, StrokeStyle, TextPrimitive};

use super::YAxisRenderer;
use super::labels::LabelAnchor;

/// Relative gap below which two tick values count as the same value.
pub const ANCHOR_RELATIVE_TOLERANCE: f64 = 1e-9;

const BLOCK_RAISE: f64 = 10.0;
const BLOCK_HEIGHT: f64 = 20.0;
const BLOCK_WIDTH: f64 = 52.0;
const POINTER_TIP_X: f64 = -4.0;
const POINTER_BASE_X: f64 = 2.0;
const TEXT_SHIFT_X: f64 = -1.0;
const TEXT_RAISE: f64 = 6.0;

/// Resolved geometry and label of one indicator block.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorBlock {
    /// Interpolated pixel y of the limit value.
    pub y: f64,
    /// Tick indices used as interpolation anchors.
    pub anchors: (usize, usize),
    pub outline: [Point; 6],
    pub color: Color,
    pub label: TextPrimitive,
}

/// True when `a` and `b` differ only by floating-point noise.
///
/// The gap is measured against the larger magnitude, so tiny tick steps stay
/// distinct while `0.1 + 0.2` still matches `0.3`.
#[must_use]
pub fn values_coincide(a: f64, b: f64) -> bool {
    (a - b).abs() <= ANCHOR_RELATIVE_TOLERANCE * a.abs().max(b.abs())
}

/// Adjacent tick pair bracketing `threshold`, or the nearest pair when the
/// threshold lies outside every pair.
///
/// Works on unsorted and descending tick sequences; the first bracketing pair
/// in index order wins.
pub fn bracketing_anchors(values: &[f64], threshold: f64) -> AxisResult<(usize, usize)> {
    if values.len() < 2 {
        return Err(AxisError::InsufficientTicks {
            required: 2,
            available: values.len(),
        });
    }
    if let Some(index) = values.iter().position(|value| !value.is_finite()) {
        return Err(AxisError::NonFiniteTick { index });
    }

    let mut nearest = (0, f64::INFINITY);
    for (index, pair) in values.windows(2).enumerate() {
        let (low, high) = if pair[0] <= pair[1] {
            (pair[0], pair[1])
        } else {
            (pair[1], pair[0])
        };
        if (low..=high).contains(&threshold) {
            return Ok((index, index + 1));
        }
        let distance = (threshold - low).abs().min((threshold - high).abs());
        if distance < nearest.1 {
            nearest = (index, distance);
        }
    }
    Ok((nearest.0, nearest.0 + 1))
}

/// Linear interpolation of `threshold` between anchor `a` and anchor `b`.
///
/// Exact for affine value-to-pixel mappings; extrapolates past the anchors.
#[must_use]
pub fn interpolate_pixel_y(threshold: f64, anchor_a: (f64, f64), anchor_b: (f64, f64)) -> f64 {
    let (value_a, pixel_a) = anchor_a;
    let (value_b, pixel_b) = anchor_b;
    let value_span = value_b - value_a;
    let pixel_span = pixel_a - pixel_b;
    let offset = threshold - value_b;
    pixel_b - (offset * pixel_span) / value_span
}

/// Closed pointer outline with its tip at `(x - 4, top + 10)`.
#[must_use]
pub fn pointer_outline(x: f64, top: f64) -> [Point; 6] {
    let tip = Point::new(x + POINTER_TIP_X, top + BLOCK_HEIGHT / 2.0);
    [
        tip,
        Point::new(x + POINTER_BASE_X, top),
        Point::new(x + BLOCK_WIDTH, top),
        Point::new(x + BLOCK_WIDTH, top + BLOCK_HEIGHT),
        Point::new(x + POINTER_BASE_X, top + BLOCK_HEIGHT),
        tip,
    ]
}

/// Plain numeric text for a limit value; whole numbers keep one decimal.
#[must_use]
pub fn format_limit_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

impl YAxisRenderer {
    /// Computes the indicator block for the tracked limit line.
    ///
    /// `Ok(None)` means there is nothing to show (no axis, indicator disabled,
    /// no limit lines, or the tracked line is missing or disabled). Errors
    /// report why a configured indicator cannot be placed.
    pub fn indicator_block(
        &self,
        anchor: LabelAnchor,
        positions: &[Point],
    ) -> AxisResult<Option<IndicatorBlock>> {
        let Some(axis) = &self.axis else {
            return Ok(None);
        };
        let style = axis.config.indicator;
        if !style.enabled {
            return Ok(None);
        }
        let limit_lines = axis.limit_lines();
        if limit_lines.is_empty() {
            return Ok(None);
        }
        let Some(line) = limit_lines.get(style.limit_line_index) else {
            debug!(
                index = style.limit_line_index,
                available = limit_lines.len(),
                "indicator tracks a missing limit line"
            );
            return Ok(None);
        };
        if !line.enabled {
            return Ok(None);
        }
        if !line.limit.is_finite() {
            return Err(AxisError::InvalidData(
                "indicator limit value must be finite".to_owned(),
            ));
        }

        let count = axis.entry_count().min(positions.len());
        let values = &axis.entries()[..count];
        let (a, b) = bracketing_anchors(values, line.limit)?;
        if values_coincide(values[a], values[b]) {
            return Err(AxisError::DegenerateAnchors {
                first: a,
                second: b,
            });
        }

        let y = interpolate_pixel_y(
            line.limit,
            (values[a], positions[a].y),
            (values[b], positions[b].y),
        );
        debug!(limit = line.limit, y, anchor_a = a, anchor_b = b, "indicator block");

        Ok(Some(IndicatorBlock {
            y,
            anchors: (a, b),
            outline: pointer_outline(anchor.x, y - BLOCK_RAISE),
            color: line.line_color,
            label: TextPrimitive::new(
                format_limit_value(line.limit),
                anchor.x + TEXT_SHIFT_X,
                y - TEXT_RAISE,
                line.value_font,
                style.text_color,
                anchor.align,
            ),
        }))
    }

    /// Draws the indicator block at the tick-label anchor.
    pub fn render_indicator_block<C: DrawContext + ?Sized>(&self, ctx: &mut C) {
        let Some(anchor) = self.axis_label_anchor() else {
            return;
        };
        let positions = self.transformed_positions();
        self.draw_indicator_block(ctx, anchor, &positions);
    }

    pub(super) fn draw_indicator_block<C: DrawContext + ?Sized>(
        &self,
        ctx: &mut C,
        anchor: LabelAnchor,
        positions: &[Point],
    ) {
        let block = match self.indicator_block(anchor, positions) {
            Ok(Some(block)) => block,
            Ok(None) => return,
            Err(err) => {
                debug!(error = %err, "indicator block suppressed");
                return;
            }
        };

        let mut scoped = StateGuard::new(ctx);
        scoped.set_stroke(&StrokeStyle::solid(block.color, 1.0));
        scoped.fill_stroke_polygon(&block.outline, block.color, block.color);
        scoped.draw_text(block.label);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use kurbo::Point;

    use super::{
        bracketing_anchors, format_limit_value, interpolate_pixel_y, pointer_outline,
        values_coincide,
    };
    use crate::axis::{LimitLine, YAxis, YAxisConfig};
    use crate::core::Transformer;
    use crate::error::AxisError;
    use crate::render::{Color, RecordingContext, TextHAlign};
    use crate::renderer::{LabelAnchor, YAxisRenderer};
    use crate::renderer::test_support::{renderer_with, viewport};

    fn anchor(x: f64) -> LabelAnchor {
        LabelAnchor {
            x,
            align: TextHAlign::Right,
        }
    }

    fn config_with_limit(limit: f64) -> YAxisConfig {
        let mut config = YAxisConfig::default();
        config
            .limit_lines
            .push(LimitLine::new(limit, "limit").with_color(Color::RED));
        config
    }

    #[test]
    fn threshold_between_ticks_interpolates_linearly() {
        let renderer = renderer_with(config_with_limit(15.0), vec![0.0, 10.0, 20.0]);
        let positions = renderer.transformed_positions();
        let block = renderer
            .indicator_block(anchor(35.0), &positions)
            .expect("computable")
            .expect("present");
        assert_eq!(block.anchors, (1, 2));
        assert_relative_eq!(block.y, 40.0);
        assert_eq!(block.color, Color::RED);
        assert_eq!(block.label.text, "15.0");
        assert_relative_eq!(block.label.x, 34.0);
        assert_relative_eq!(block.label.y, 34.0);
        assert_eq!(block.outline, pointer_outline(35.0, 30.0));
    }

    #[test]
    fn anchors_no_longer_hardwired_to_second_and_third_tick() {
        let renderer = renderer_with(config_with_limit(2.5), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
        let positions = renderer.transformed_positions();
        let block = renderer
            .indicator_block(anchor(0.0), &positions)
            .expect("computable")
            .expect("present");
        assert_eq!(block.anchors, (0, 1));
        assert_relative_eq!(block.y, 90.0);
    }

    #[test]
    fn two_ticks_are_enough() {
        let renderer = renderer_with(config_with_limit(5.0), vec![0.0, 20.0]);
        let positions = renderer.transformed_positions();
        let block = renderer
            .indicator_block(anchor(0.0), &positions)
            .expect("computable")
            .expect("present");
        assert_relative_eq!(block.y, 80.0);
    }

    #[test]
    fn single_tick_reports_insufficient_ticks() {
        let renderer = renderer_with(config_with_limit(5.0), vec![10.0]);
        let positions = renderer.transformed_positions();
        let err = renderer
            .indicator_block(anchor(0.0), &positions)
            .expect_err("cannot interpolate");
        assert!(matches!(
            err,
            AxisError::InsufficientTicks {
                required: 2,
                available: 1
            }
        ));
    }

    #[test]
    fn duplicate_tick_values_are_degenerate() {
        let renderer = renderer_with(config_with_limit(30.0), vec![10.0, 10.0]);
        let positions = renderer.transformed_positions();
        let err = renderer
            .indicator_block(anchor(0.0), &positions)
            .expect_err("degenerate");
        assert!(matches!(err, AxisError::DegenerateAnchors { .. }));
    }

    #[test]
    fn sub_micro_tick_steps_keep_their_own_anchors() {
        let vp = viewport();
        let transformer =
            Transformer::for_ranges(vp, 0.0, 1.0, 0.0, 1e-5, false).expect("transformer");
        let axis = YAxis::new(config_with_limit(1e-6))
            .with_entries(vec![0.0, 2e-6, 4e-6, 6e-6, 8e-6, 1e-5]);
        let renderer = YAxisRenderer::new(vp, Some(axis), Some(transformer));
        let positions = renderer.transformed_positions();

        let block = renderer
            .indicator_block(anchor(0.0), &positions)
            .expect("computable")
            .expect("present");
        assert_eq!(block.anchors, (0, 1));
        assert_relative_eq!(block.y, 92.0, epsilon = 1e-9);
    }

    #[test]
    fn non_finite_limit_is_reported() {
        let renderer = renderer_with(config_with_limit(f64::NAN), vec![0.0, 10.0, 20.0]);
        let positions = renderer.transformed_positions();
        let err = renderer
            .indicator_block(anchor(0.0), &positions)
            .expect_err("nan limit");
        assert!(matches!(err, AxisError::InvalidData(_)));

        let mut ctx = RecordingContext::new(viewport());
        renderer.render_indicator_block(&mut ctx);
        assert!(ctx.frame().polygons.is_empty());
    }

    #[test]
    fn no_limit_lines_produces_no_drawing_calls() {
        let renderer = renderer_with(YAxisConfig::default(), vec![0.0, 10.0, 20.0]);
        let mut ctx = RecordingContext::new(viewport());
        renderer.render_indicator_block(&mut ctx);
        assert!(ctx.frame().is_empty());
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn disabled_limit_line_hides_indicator() {
        let mut config = YAxisConfig::default();
        config
            .limit_lines
            .push(LimitLine::new(15.0, "limit").with_enabled(false));
        let renderer = renderer_with(config, vec![0.0, 10.0, 20.0]);
        let positions = renderer.transformed_positions();
        assert_eq!(renderer.indicator_block(anchor(0.0), &positions).expect("ok"), None);
    }

    #[test]
    fn indicator_can_track_another_limit_line() {
        let mut config = config_with_limit(15.0);
        config.limit_lines.push(LimitLine::new(5.0, "low"));
        config.indicator.limit_line_index = 1;
        let renderer = renderer_with(config, vec![0.0, 10.0, 20.0]);
        let positions = renderer.transformed_positions();
        let block = renderer
            .indicator_block(anchor(0.0), &positions)
            .expect("computable")
            .expect("present");
        assert_relative_eq!(block.y, 80.0);
    }

    #[test]
    fn drawn_block_is_filled_with_limit_color_and_black_label() {
        let renderer = renderer_with(config_with_limit(15.0), vec![0.0, 10.0, 20.0]);
        let mut ctx = RecordingContext::new(viewport());
        renderer.render_indicator_block(&mut ctx);
        assert_eq!(ctx.depth(), 0);

        let frame = ctx.into_frame();
        assert_eq!(frame.polygons.len(), 1);
        assert_eq!(frame.polygons[0].fill_color, Color::RED);
        assert_eq!(frame.polygons[0].stroke_color, Color::RED);
        assert_eq!(frame.polygons[0].points.len(), 6);
        assert_eq!(frame.texts.len(), 1);
        assert_eq!(frame.texts[0].color, Color::BLACK);
        assert_eq!(frame.texts[0].h_align, TextHAlign::Right);
    }

    #[test]
    fn bracketing_search_handles_out_of_range_and_descending() {
        let ascending = [0.0, 10.0, 20.0, 30.0];
        assert_eq!(bracketing_anchors(&ascending, 25.0).expect("ok"), (2, 3));
        assert_eq!(bracketing_anchors(&ascending, -4.0).expect("ok"), (0, 1));
        assert_eq!(bracketing_anchors(&ascending, 99.0).expect("ok"), (2, 3));

        let descending = [30.0, 20.0, 10.0];
        assert_eq!(bracketing_anchors(&descending, 12.0).expect("ok"), (1, 2));

        assert!(matches!(
            bracketing_anchors(&[0.0, f64::NAN], 1.0),
            Err(AxisError::NonFiniteTick { index: 1 })
        ));
    }

    #[test]
    fn interpolation_hits_anchor_pixels_exactly() {
        let a = (10.0, 60.0);
        let b = (20.0, 20.0);
        assert_relative_eq!(interpolate_pixel_y(10.0, a, b), 60.0);
        assert_relative_eq!(interpolate_pixel_y(20.0, a, b), 20.0);
        assert_relative_eq!(interpolate_pixel_y(15.0, a, b), 40.0);
        // extrapolates along the same line
        assert_relative_eq!(interpolate_pixel_y(25.0, a, b), 0.0);
    }

    #[test]
    fn outline_is_closed_pointer() {
        let outline = pointer_outline(10.0, 50.0);
        assert_eq!(outline[0], Point::new(6.0, 60.0));
        assert_eq!(outline[1], Point::new(12.0, 50.0));
        assert_eq!(outline[2], Point::new(62.0, 50.0));
        assert_eq!(outline[3], Point::new(62.0, 70.0));
        assert_eq!(outline[4], Point::new(12.0, 70.0));
        assert_eq!(outline[0], outline[5]);
    }

    #[test]
    fn noise_level_comparison_and_formatting() {
        assert!(values_coincide(0.1 + 0.2, 0.3));
        assert!(values_coincide(0.0, 0.0));
        assert!(!values_coincide(0.0, 2e-6));
        assert!(!values_coincide(4e-6, 6e-6));
        assert_eq!(format_limit_value(15.0), "15.0");
        assert_eq!(format_limit_value(15.25), "15.25");
        assert_eq!(format_limit_value(-3.0), "-3.0");
    }
}
