//! chart-yaxis: value-axis rendering for charts.
//!
//! The crate maps tick values to pixel space through an affine
//! [`core::Transformer`] and draws the axis line, tick labels, grid lines, the
//! zero line, limit lines and an interpolated indicator block into any
//! [`render::DrawContext`].

pub mod axis;
pub mod core;
pub mod error;
pub mod render;
pub mod renderer;
pub mod telemetry;

pub use axis::{YAxis, YAxisConfig};
pub use error::{AxisError, AxisResult};
pub use renderer::YAxisRenderer;
