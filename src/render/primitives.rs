use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{AxisError, AxisResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Deserializes from the channel object it serializes to, or from a
/// `#RRGGBB`/`#RRGGBBAA` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgba_u8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            f64::from(alpha) / 255.0,
        )
    }

    /// Parses `#RRGGBBAA`, or `#RRGGBB` with full opacity.
    pub fn from_hex(input: &str) -> AxisResult<Self> {
        let invalid = || AxisError::InvalidData(format!("invalid hex color `{input}`"));
        let digits = input.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let packed = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        let [red, green, blue, alpha] = match digits.len() {
            8 => packed.to_be_bytes(),
            6 => (packed << 8 | 0xff).to_be_bytes(),
            _ => return Err(invalid()),
        };
        Ok(Self::from_rgba_u8(red, green, blue, alpha))
    }

    pub fn validate(self) -> AxisResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(AxisError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Channels {
        red: f64,
        green: f64,
        blue: f64,
        alpha: f64,
    },
}

impl TryFrom<ColorRepr> for Color {
    type Error = AxisError;

    fn try_from(repr: ColorRepr) -> AxisResult<Self> {
        match repr {
            ColorRepr::Hex(hex) => Self::from_hex(&hex),
            ColorRepr::Channels {
                red,
                green,
                blue,
                alpha,
            } => Ok(Self::rgba(red, green, blue, alpha)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Dash pattern; an empty `lengths` list means a solid stroke.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineDash {
    pub phase: f64,
    pub lengths: Vec<f64>,
}

impl LineDash {
    #[must_use]
    pub fn new(phase: f64, lengths: Vec<f64>) -> Self {
        Self { phase, lengths }
    }

    #[must_use]
    pub fn is_solid(&self) -> bool {
        self.lengths.is_empty()
    }

    pub fn validate(&self) -> AxisResult<()> {
        if !self.phase.is_finite() {
            return Err(AxisError::InvalidData(
                "dash phase must be finite".to_owned(),
            ));
        }
        if self
            .lengths
            .iter()
            .any(|len| !len.is_finite() || *len < 0.0)
        {
            return Err(AxisError::InvalidData(
                "dash lengths must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Stroke state applied to subsequent segment draws.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    #[serde(default)]
    pub dash: Option<LineDash>,
    #[serde(default)]
    pub cap: LineCap,
    #[serde(default = "default_antialias")]
    pub antialias: bool,
}

fn default_antialias() -> bool {
    true
}

impl StrokeStyle {
    #[must_use]
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: None,
            cap: LineCap::Butt,
            antialias: true,
        }
    }

    #[must_use]
    pub fn with_dash(mut self, dash: LineDash) -> Self {
        self.dash = Some(dash);
        self
    }

    #[must_use]
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(Color::GRAY, 1.0)
    }
}

/// Font size plus the line height used for label placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub size_px: f64,
    pub line_height_px: f64,
}

impl FontSpec {
    /// Line height defaults to 1.2 times the font size.
    #[must_use]
    pub fn new(size_px: f64) -> Self {
        Self {
            size_px,
            line_height_px: size_px * 1.2,
        }
    }

    #[must_use]
    pub fn with_line_height(mut self, line_height_px: f64) -> Self {
        self.line_height_px = line_height_px;
        self
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(10.0)
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one stroked segment in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitive {
    pub from: Point,
    pub to: Point,
    pub stroke: StrokeStyle,
    pub clip: Option<Rect>,
}

impl LinePrimitive {
    #[must_use]
    pub fn new(from: Point, to: Point, stroke: StrokeStyle) -> Self {
        Self {
            from,
            to,
            stroke,
            clip: None,
        }
    }

    pub fn validate(&self) -> AxisResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(AxisError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke.width.is_finite() || self.stroke.width <= 0.0 {
            return Err(AxisError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let Some(dash) = &self.stroke.dash {
            dash.validate()?;
        }
        self.stroke.color.validate()
    }
}

/// Draw command for one closed polygon, filled then stroked.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonPrimitive {
    pub points: SmallVec<[Point; 6]>,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub clip: Option<Rect>,
}

impl PolygonPrimitive {
    pub fn validate(&self) -> AxisResult<()> {
        if self.points.len() < 3 {
            return Err(AxisError::InvalidData(
                "polygon needs at least 3 points".to_owned(),
            ));
        }
        if self.points.iter().any(|point| !point.is_finite()) {
            return Err(AxisError::InvalidData(
                "polygon coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(AxisError::InvalidData(
                "polygon stroke width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.stroke_color.validate()
    }
}

/// Draw command for one label in pixel space; `y` is the top of the text box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font: FontSpec,
    pub color: Color,
    pub h_align: TextHAlign,
    pub clip: Option<Rect>,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font: FontSpec,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font,
            color,
            h_align,
            clip: None,
        }
    }

    pub fn validate(&self) -> AxisResult<()> {
        if self.text.is_empty() {
            return Err(AxisError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(AxisError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font.size_px.is_finite() || self.font.size_px <= 0.0 {
            return Err(AxisError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
