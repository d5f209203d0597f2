use cairo::{Antialias, Context, Format, ImageSurface};
use kurbo::Rect;
use pango::FontDescription;

use crate::error::{AxisError, AxisResult};
use crate::render::{Color, LineCap, RenderFrame, Renderer, StrokeStyle, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub polygons_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> AxisResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Supports offscreen image-surface rendering through `Renderer::render` and
/// in-place rendering on an external Cairo context through
/// `CairoContextRenderer`.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> AxisResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(AxisError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> AxisResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> AxisResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for line in &frame.lines {
            with_saved_state(context, line.clip, |context| {
                apply_stroke(context, &line.stroke);
                context.move_to(line.from.x, line.from.y);
                context.line_to(line.to.x, line.to.y);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke line", err))
            })?;
            stats.lines_drawn += 1;
        }

        for polygon in &frame.polygons {
            with_saved_state(context, polygon.clip, |context| {
                context.new_path();
                let mut points = polygon.points.iter();
                if let Some(first) = points.next() {
                    context.move_to(first.x, first.y);
                }
                for point in points {
                    context.line_to(point.x, point.y);
                }
                context.close_path();
                apply_color(context, polygon.fill_color);
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill polygon", err))?;
                apply_color(context, polygon.stroke_color);
                context.set_line_width(polygon.stroke_width);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke polygon", err))
            })?;
            stats.polygons_drawn += 1;
        }

        for text in &frame.texts {
            with_saved_state(context, text.clip, |context| {
                let layout = pangocairo::functions::create_layout(context);
                let font_description =
                    FontDescription::from_string(&format!("Sans {}", text.font.size_px));
                layout.set_font_description(Some(&font_description));
                layout.set_text(&text.text);

                let (text_width, _text_height) = layout.pixel_size();
                let x = match text.h_align {
                    TextHAlign::Left => text.x,
                    TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                    TextHAlign::Right => text.x - f64::from(text_width),
                };

                apply_color(context, text.color);
                context.move_to(x, text.y);
                pangocairo::functions::show_layout(context, &layout);
                Ok(())
            })?;
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> AxisResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> AxisResult<()> {
        self.render_with_context(context, frame)
    }
}

fn with_saved_state(
    context: &Context,
    clip: Option<Rect>,
    draw: impl FnOnce(&Context) -> AxisResult<()>,
) -> AxisResult<()> {
    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;
    if let Some(clip) = clip {
        context.rectangle(clip.x0, clip.y0, clip.width(), clip.height());
        context.clip();
    }
    let result = draw(context);
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
    result
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn apply_stroke(context: &Context, stroke: &StrokeStyle) {
    apply_color(context, stroke.color);
    context.set_line_width(stroke.width);
    context.set_line_cap(match stroke.cap {
        LineCap::Butt => cairo::LineCap::Butt,
        LineCap::Round => cairo::LineCap::Round,
        LineCap::Square => cairo::LineCap::Square,
    });
    context.set_antialias(if stroke.antialias {
        Antialias::Default
    } else {
        Antialias::None
    });
    match &stroke.dash {
        Some(dash) => context.set_dash(&dash.lengths, dash.phase),
        None => context.set_dash(&[], 0.0),
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> AxisError {
    AxisError::Backend(format!("{prefix}: {err}"))
}
