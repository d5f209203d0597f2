use kurbo::{Affine, Point};

use crate::core::Viewport;
use crate::error::{AxisError, AxisResult};

/// Affine value-to-pixel mapping for one chart axis pair.
///
/// Every batch call reads the same matrix snapshot, so all points of a draw
/// pass land in one consistent pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformer {
    value_to_pixel: Affine,
}

impl Transformer {
    /// Wraps an explicit matrix supplied by the host.
    #[must_use]
    pub fn new(value_to_pixel: Affine) -> Self {
        Self { value_to_pixel }
    }

    /// Builds the matrix mapping domain ranges onto the viewport content area.
    ///
    /// Non-inverted axes grow upward from `content_bottom`; inverted axes grow
    /// downward from `content_top`. A zero `x_range` collapses x onto
    /// `content_left`, which is all a value axis needs.
    pub fn for_ranges(
        viewport: Viewport,
        x_min: f64,
        x_range: f64,
        y_min: f64,
        y_range: f64,
        inverted: bool,
    ) -> AxisResult<Self> {
        viewport.validate()?;
        if !x_min.is_finite() || !x_range.is_finite() {
            return Err(AxisError::InvalidData(
                "x domain must be finite".to_owned(),
            ));
        }
        if !y_min.is_finite() || !y_range.is_finite() || y_range == 0.0 {
            return Err(AxisError::InvalidData(
                "y domain must be finite and non-zero".to_owned(),
            ));
        }

        let scale_x = if x_range == 0.0 {
            0.0
        } else {
            viewport.content_width() / x_range
        };
        let scale_y = viewport.content_height() / y_range;
        let translate_x = viewport.content_left() - x_min * scale_x;

        let (d, f) = if inverted {
            (scale_y, viewport.content_top() - y_min * scale_y)
        } else {
            (-scale_y, viewport.content_bottom() + y_min * scale_y)
        };

        Ok(Self::new(Affine::new([scale_x, 0.0, 0.0, d, translate_x, f])))
    }

    #[must_use]
    pub fn value_to_pixel_matrix(&self) -> Affine {
        self.value_to_pixel
    }

    #[must_use]
    pub fn pixel_for_value(&self, x: f64, y: f64) -> Point {
        self.value_to_pixel * Point::new(x, y)
    }

    /// Transforms domain points to pixel space in place, preserving order.
    pub fn points_to_pixels(&self, points: &mut [Point]) {
        let matrix = self.value_to_pixel;
        for point in points.iter_mut() {
            *point = matrix * *point;
        }
    }

    pub fn value_for_pixel(&self, x: f64, y: f64) -> AxisResult<Point> {
        let det = self.value_to_pixel.determinant();
        if !det.is_finite() || det == 0.0 {
            return Err(AxisError::NonInvertibleTransform);
        }
        Ok(self.value_to_pixel.inverse() * Point::new(x, y))
    }
}
