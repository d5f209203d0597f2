use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};
use crate::render::{Color, FontSpec, LineDash, StrokeStyle};

pub const AXIS_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Side of the chart the value axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisDependency {
    #[default]
    Left,
    Right,
}

/// Whether tick labels sit in the margin or inside the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YAxisLabelPosition {
    #[default]
    OutsideChart,
    InsideChart,
}

/// Corner of a limit line its label is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LimitLabelPosition {
    LeftTop,
    LeftBottom,
    #[default]
    RightTop,
    RightBottom,
}

/// Horizontal threshold marker with its own style and label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitLine {
    pub limit: f64,
    pub line_color: Color,
    pub line_width: f64,
    pub line_dash: Option<LineDash>,
    pub label: String,
    pub label_position: LimitLabelPosition,
    pub enabled: bool,
    pub draw_label: bool,
    pub value_font: FontSpec,
    pub value_text_color: Color,
    pub x_offset: f64,
    pub y_offset: f64,
}

impl Default for LimitLine {
    fn default() -> Self {
        Self {
            limit: 0.0,
            line_color: Color::rgb(237.0 / 255.0, 91.0 / 255.0, 91.0 / 255.0),
            line_width: 2.0,
            line_dash: None,
            label: String::new(),
            label_position: LimitLabelPosition::RightTop,
            enabled: true,
            draw_label: true,
            value_font: FontSpec::new(13.0),
            value_text_color: Color::BLACK,
            x_offset: 0.0,
            y_offset: 0.0,
        }
    }
}

impl LimitLine {
    #[must_use]
    pub fn new(limit: f64, label: impl Into<String>) -> Self {
        Self {
            limit,
            label: label.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, dash: LineDash) -> Self {
        self.line_dash = Some(dash);
        self
    }

    #[must_use]
    pub fn with_label_position(mut self, position: LimitLabelPosition) -> Self {
        self.label_position = position;
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_draw_label(mut self, draw_label: bool) -> Self {
        self.draw_label = draw_label;
        self
    }

    #[must_use]
    pub fn with_offsets(mut self, x_offset: f64, y_offset: f64) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    /// Stroke applied when drawing the line itself.
    #[must_use]
    pub fn stroke(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.line_color,
            width: self.line_width,
            dash: self.line_dash.clone(),
            ..StrokeStyle::default()
        }
    }

    fn validate(&self) -> AxisResult<()> {
        if !self.limit.is_finite() {
            return Err(AxisError::InvalidData(
                "limit line value must be finite".to_owned(),
            ));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(AxisError::InvalidData(
                "limit line width must be finite and > 0".to_owned(),
            ));
        }
        self.line_color.validate()?;
        self.value_text_color.validate()
    }
}

/// Controls the pointer-shaped block that marks a limit value on the axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorBlockStyle {
    pub enabled: bool,
    /// Index into `YAxisConfig::limit_lines` of the tracked limit line.
    pub limit_line_index: usize,
    pub text_color: Color,
}

impl Default for IndicatorBlockStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            limit_line_index: 0,
            text_color: Color::BLACK,
        }
    }
}

/// Serializable styling and behavior of a value axis.
///
/// Tick values live on [`crate::axis::YAxis`]; this type only holds what a
/// host would persist between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YAxisConfig {
    pub enabled: bool,
    pub draw_labels: bool,
    pub draw_axis_line: bool,
    pub draw_grid_lines: bool,
    pub draw_zero_line: bool,
    pub draw_bottom_label_entry: bool,
    pub draw_top_label_entry: bool,
    pub dependency: AxisDependency,
    pub label_position: YAxisLabelPosition,
    pub label_font: FontSpec,
    pub label_color: Color,
    pub x_offset: f64,
    pub y_offset: f64,
    pub axis_line: StrokeStyle,
    pub grid: StrokeStyle,
    pub zero_line_color: Option<Color>,
    pub zero_line_width: f64,
    pub zero_line_dash: Option<LineDash>,
    pub inverted: bool,
    pub label_count: usize,
    pub force_label_count: bool,
    pub granularity: Option<f64>,
    pub limit_lines: Vec<LimitLine>,
    pub indicator: IndicatorBlockStyle,
}

impl Default for YAxisConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            draw_labels: true,
            draw_axis_line: true,
            draw_grid_lines: true,
            draw_zero_line: false,
            draw_bottom_label_entry: true,
            draw_top_label_entry: true,
            dependency: AxisDependency::Left,
            label_position: YAxisLabelPosition::OutsideChart,
            label_font: FontSpec::new(10.0),
            label_color: Color::BLACK,
            x_offset: 5.0,
            y_offset: 0.0,
            axis_line: StrokeStyle::solid(Color::GRAY, 0.5),
            grid: StrokeStyle::solid(Color::rgb(0.9, 0.9, 0.9), 0.5),
            zero_line_color: Some(Color::GRAY),
            zero_line_width: 1.0,
            zero_line_dash: None,
            inverted: false,
            label_count: 6,
            force_label_count: false,
            granularity: None,
            limit_lines: Vec::new(),
            indicator: IndicatorBlockStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct YAxisConfigJsonContractV1 {
    schema_version: u32,
    config: YAxisConfig,
}

impl YAxisConfig {
    pub fn validate(&self) -> AxisResult<()> {
        if !(2..=25).contains(&self.label_count) {
            return Err(AxisError::InvalidData(format!(
                "label count must be in [2, 25], got {}",
                self.label_count
            )));
        }
        if let Some(granularity) = self.granularity {
            if !granularity.is_finite() || granularity <= 0.0 {
                return Err(AxisError::InvalidData(
                    "granularity must be finite and > 0".to_owned(),
                ));
            }
        }
        for stroke in [&self.axis_line, &self.grid] {
            if !stroke.width.is_finite() || stroke.width <= 0.0 {
                return Err(AxisError::InvalidData(
                    "axis stroke widths must be finite and > 0".to_owned(),
                ));
            }
            stroke.color.validate()?;
        }
        if !self.zero_line_width.is_finite() || self.zero_line_width <= 0.0 {
            return Err(AxisError::InvalidData(
                "zero line width must be finite and > 0".to_owned(),
            ));
        }
        if !self.x_offset.is_finite() || !self.y_offset.is_finite() {
            return Err(AxisError::InvalidData(
                "label offsets must be finite".to_owned(),
            ));
        }
        self.label_color.validate()?;
        for line in &self.limit_lines {
            line.validate()?;
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> AxisResult<String> {
        let payload = YAxisConfigJsonContractV1 {
            schema_version: AXIS_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AxisError::InvalidData(format!("failed to serialize axis config: {e}"))
        })
    }

    /// Accepts either the versioned contract or a bare config object.
    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        let config = match serde_json::from_str::<YAxisConfigJsonContractV1>(input) {
            Ok(payload) => {
                if payload.schema_version != AXIS_CONFIG_JSON_SCHEMA_V1 {
                    return Err(AxisError::InvalidData(format!(
                        "unsupported axis config schema version: {}",
                        payload.schema_version
                    )));
                }
                payload.config
            }
            Err(_) => serde_json::from_str::<YAxisConfig>(input).map_err(|e| {
                AxisError::InvalidData(format!("failed to parse axis config json: {e}"))
            })?,
        };
        config.validate()?;
        Ok(config)
    }
}
