//! Value-axis renderer.
//!
//! A draw pass maps tick values to pixel space once and hands the positions to
//! the grid, limit-line, axis-line and label stages. Each stage is also exposed
//! on its own for hosts that interleave axis drawing with series drawing.
//!
//! Missing inputs (no axis, no transformer, disabled flags) make a stage a
//! silent no-op; nothing is propagated to the host.

mod indicator;
mod labels;
mod limit_lines;
mod lines;

pub use indicator::{
    ANCHOR_RELATIVE_TOLERANCE, IndicatorBlock, bracketing_anchors, format_limit_value,
    interpolate_pixel_y, pointer_outline, values_coincide,
};
pub use labels::{LabelAnchor, label_anchor, label_index_range, label_vertical_offset};
pub use limit_lines::{LimitLabelPlacement, limit_label_placement};

use kurbo::Point;
use tracing::trace;

use crate::axis::YAxis;
use crate::core::{Transformer, Viewport};
use crate::error::{AxisError, AxisResult};
use crate::render::DrawContext;

const FLAT_RANGE_PADDING: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct YAxisRenderer {
    viewport: Viewport,
    axis: Option<YAxis>,
    transformer: Option<Transformer>,
}

impl YAxisRenderer {
    #[must_use]
    pub fn new(viewport: Viewport, axis: Option<YAxis>, transformer: Option<Transformer>) -> Self {
        Self {
            viewport,
            axis,
            transformer,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[must_use]
    pub fn axis(&self) -> Option<&YAxis> {
        self.axis.as_ref()
    }

    pub fn axis_mut(&mut self) -> Option<&mut YAxis> {
        self.axis.as_mut()
    }

    pub fn set_axis(&mut self, axis: Option<YAxis>) {
        self.axis = axis;
    }

    #[must_use]
    pub fn transformer(&self) -> Option<&Transformer> {
        self.transformer.as_ref()
    }

    pub fn set_transformer(&mut self, transformer: Option<Transformer>) {
        self.transformer = transformer;
    }

    /// Pixel position of every tick, index-aligned with `YAxis::entries`.
    ///
    /// Empty when the axis or the transformer is missing.
    #[must_use]
    pub fn transformed_positions(&self) -> Vec<Point> {
        let (Some(axis), Some(transformer)) = (&self.axis, &self.transformer) else {
            return Vec::new();
        };

        let mut positions: Vec<Point> = axis
            .entries()
            .iter()
            .map(|&value| Point::new(0.0, value))
            .collect();
        transformer.points_to_pixels(&mut positions);
        trace!(count = positions.len(), "transformed axis positions");
        positions
    }

    /// Recomputes ticks for `[y_min, y_max]` and fits a fresh transformer to
    /// the content area, honoring the axis `inverted` flag.
    ///
    /// A flat range (constant data) is widened by one unit on each side.
    pub fn fit_to_range(&mut self, y_min: f64, y_max: f64) -> AxisResult<()> {
        let Some(axis) = self.axis.as_mut() else {
            return Err(AxisError::InvalidData(
                "cannot fit a renderer without an axis".to_owned(),
            ));
        };
        let (mut low, mut high) = if y_min <= y_max {
            (y_min, y_max)
        } else {
            (y_max, y_min)
        };
        if low == high {
            low -= FLAT_RANGE_PADDING;
            high += FLAT_RANGE_PADDING;
        }
        let transformer = Transformer::for_ranges(
            self.viewport,
            0.0,
            1.0,
            low,
            high - low,
            axis.config.inverted,
        )?;
        axis.set_range(low, high)?;
        self.transformer = Some(transformer);
        Ok(())
    }

    /// Full draw pass: grid, limit lines, axis line, then labels and indicator.
    pub fn render<C: DrawContext + ?Sized>(&self, ctx: &mut C) {
        let positions = self.transformed_positions();
        self.draw_grid_lines(ctx, &positions);
        self.render_limit_lines(ctx);
        self.render_axis_line(ctx);
        self.draw_axis_labels(ctx, &positions);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::axis::{YAxis, YAxisConfig};
    use crate::core::{Transformer, Viewport};

    use super::YAxisRenderer;

    /// Content area 20..100 vertically: ticks [0, 10, 20] land on y [100, 60, 20].
    pub(crate) fn viewport() -> Viewport {
        Viewport::new(200.0, 120.0).with_offsets(40.0, 20.0, 20.0, 20.0)
    }

    pub(crate) fn renderer_with(config: YAxisConfig, entries: Vec<f64>) -> YAxisRenderer {
        let viewport = viewport();
        let axis = YAxis::new(config).with_entries(entries);
        let transformer =
            Transformer::for_ranges(viewport, 0.0, 1.0, 0.0, 20.0, false).expect("transformer");
        YAxisRenderer::new(viewport, Some(axis), Some(transformer))
    }
}
