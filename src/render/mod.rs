mod context;
mod frame;
mod null_renderer;
mod primitives;
mod recording;

pub use context::{DrawContext, StateGuard};
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, FontSpec, LineCap, LineDash, LinePrimitive, PolygonPrimitive, StrokeStyle, TextHAlign,
    TextPrimitive,
};
pub use recording::RecordingContext;

use crate::error::AxisResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from axis layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> AxisResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
