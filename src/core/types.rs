use kurbo::Rect;
use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// Chart surface size plus the margins reserved around the plot content.
///
/// The content rectangle is what remains after removing the offsets; axis
/// labels live in the margins when placed outside the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub offset_left: f64,
    #[serde(default)]
    pub offset_top: f64,
    #[serde(default)]
    pub offset_right: f64,
    #[serde(default)]
    pub offset_bottom: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            offset_left: 0.0,
            offset_top: 0.0,
            offset_right: 0.0,
            offset_bottom: 0.0,
        }
    }

    #[must_use]
    pub fn with_offsets(mut self, left: f64, top: f64, right: f64, bottom: f64) -> Self {
        self.offset_left = left;
        self.offset_top = top;
        self.offset_right = right;
        self.offset_bottom = bottom;
        self
    }

    #[must_use]
    pub fn content_left(self) -> f64 {
        self.offset_left
    }

    #[must_use]
    pub fn content_right(self) -> f64 {
        self.width - self.offset_right
    }

    #[must_use]
    pub fn content_top(self) -> f64 {
        self.offset_top
    }

    #[must_use]
    pub fn content_bottom(self) -> f64 {
        self.height - self.offset_bottom
    }

    #[must_use]
    pub fn content_width(self) -> f64 {
        self.content_right() - self.content_left()
    }

    #[must_use]
    pub fn content_height(self) -> f64 {
        self.content_bottom() - self.content_top()
    }

    #[must_use]
    pub fn content_rect(self) -> Rect {
        Rect::new(
            self.content_left(),
            self.content_top(),
            self.content_right(),
            self.content_bottom(),
        )
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        let all_finite = [
            self.width,
            self.height,
            self.offset_left,
            self.offset_top,
            self.offset_right,
            self.offset_bottom,
        ]
        .into_iter()
        .all(f64::is_finite);

        all_finite
            && self.width > 0.0
            && self.height > 0.0
            && self.content_left() <= self.content_right()
            && self.content_top() <= self.content_bottom()
    }

    pub fn validate(self) -> AxisResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(AxisError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}
