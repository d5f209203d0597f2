use approx::assert_relative_eq;
use chart_yaxis::axis::{AxisDependency, LimitLine, YAxis, YAxisConfig, YAxisLabelPosition};
use chart_yaxis::core::{Transformer, Viewport};
use chart_yaxis::render::{
    Color, NullRenderer, RecordingContext, RenderFrame, Renderer, TextHAlign,
};
use chart_yaxis::YAxisRenderer;

fn viewport() -> Viewport {
    Viewport::new(320.0, 120.0).with_offsets(40.0, 20.0, 40.0, 20.0)
}

fn renderer(config: YAxisConfig, entries: Vec<f64>) -> YAxisRenderer {
    let viewport = viewport();
    let transformer =
        Transformer::for_ranges(viewport, 0.0, 1.0, 0.0, 20.0, false).expect("transformer");
    YAxisRenderer::new(
        viewport,
        Some(YAxis::new(config).with_entries(entries)),
        Some(transformer),
    )
}

fn record(renderer: &YAxisRenderer) -> RenderFrame {
    let mut ctx = RecordingContext::new(renderer.viewport());
    renderer.render(&mut ctx);
    assert_eq!(ctx.depth(), 0, "graphics state must be restored");
    ctx.into_frame()
}

#[test]
fn limit_between_ticks_places_indicator_at_interpolated_pixel() {
    let mut config = YAxisConfig::default();
    config
        .limit_lines
        .push(LimitLine::new(15.0, "alarm").with_color(Color::RED));
    let renderer = renderer(config, vec![0.0, 10.0, 20.0]);

    let frame = record(&renderer);
    assert_eq!(frame.polygons.len(), 1);
    // outline tip sits at (x - 4, y), y = 40 for limit 15
    let tip = frame.polygons[0].points[0];
    assert_relative_eq!(tip.y, 40.0);
    assert_relative_eq!(tip.x, 35.0 - 4.0);

    let indicator_label = frame
        .texts
        .iter()
        .find(|text| text.text == "15.0")
        .expect("indicator label");
    assert_relative_eq!(indicator_label.y, 34.0);
    assert_eq!(indicator_label.color, Color::BLACK);
}

#[test]
fn null_renderer_receives_recorded_counts() {
    let mut config = YAxisConfig {
        draw_zero_line: true,
        ..YAxisConfig::default()
    };
    config.limit_lines.push(LimitLine::new(5.0, "low"));
    config
        .limit_lines
        .push(LimitLine::new(18.0, "high").with_enabled(false));
    let renderer = renderer(config, vec![0.0, 5.0, 10.0, 15.0, 20.0]);

    let frame = record(&renderer);
    let mut null = NullRenderer::default();
    null.render(&frame).expect("valid frame");

    // 5 grid + zero + 1 enabled limit + axis line
    assert_eq!(null.last_line_count, 8);
    assert_eq!(null.last_polygon_count, 1);
    // 5 ticks + limit label + indicator label
    assert_eq!(null.last_text_count, 7);
}

#[test]
fn right_inside_axis_aligns_labels_right_of_content_edge() {
    let config = YAxisConfig {
        dependency: AxisDependency::Right,
        label_position: YAxisLabelPosition::InsideChart,
        x_offset: 6.0,
        ..YAxisConfig::default()
    };
    let renderer = renderer(config, vec![0.0, 10.0, 20.0]);

    let frame = record(&renderer);
    assert_eq!(frame.texts.len(), 3);
    for text in &frame.texts {
        assert_eq!(text.h_align, TextHAlign::Right);
        assert_relative_eq!(text.x, 274.0);
    }
}

#[test]
fn disabled_axis_only_keeps_limit_lines() {
    let mut config = YAxisConfig {
        enabled: false,
        ..YAxisConfig::default()
    };
    config.limit_lines.push(LimitLine::new(10.0, "mid"));
    let renderer = renderer(config, vec![0.0, 10.0, 20.0]);

    let frame = record(&renderer);
    assert_eq!(frame.lines.len(), 1);
    assert_eq!(frame.texts.len(), 1);
    assert!(frame.polygons.is_empty());
}

#[test]
fn computed_range_feeds_labels_and_grid() {
    let viewport = viewport();
    let mut axis = YAxis::new(YAxisConfig::default());
    axis.set_range(0.0, 100.0).expect("range");
    let transformer =
        Transformer::for_ranges(viewport, 0.0, 1.0, 0.0, 100.0, false).expect("transformer");
    let renderer = YAxisRenderer::new(viewport, Some(axis), Some(transformer));

    let frame = record(&renderer);
    let labels: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, vec!["0", "20", "40", "60", "80", "100"]);
    // 6 grid + axis line
    assert_eq!(frame.lines.len(), 7);
}

#[test]
fn non_finite_limit_line_leaves_frame_renderable() {
    let mut config = YAxisConfig::default();
    config.limit_lines.push(LimitLine::new(f64::NAN, "broken"));
    config.limit_lines.push(LimitLine::new(5.0, "low"));
    let renderer = renderer(config, vec![0.0, 10.0, 20.0]);

    let frame = record(&renderer);
    let mut null = NullRenderer::default();
    null.render(&frame).expect("finite frame");
    // 3 grid + 1 finite limit + axis line; indicator tracks the broken line
    assert_eq!(null.last_line_count, 5);
    assert_eq!(null.last_polygon_count, 0);
    assert_eq!(null.last_text_count, 4);
}
