use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
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

    /// Parses `#rgb`, `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
    pub fn from_css(input: &str) -> ChartResult<Self> {
        let text = input.trim();
        let invalid = || ChartError::InvalidData(format!("unsupported css color `{input}`"));

        if let Some(hex) = text.strip_prefix('#') {
            let expanded: String = match hex.len() {
                3 => hex.chars().flat_map(|c| [c, c]).collect(),
                6 => hex.to_owned(),
                _ => return Err(invalid()),
            };
            let channel = |range: std::ops::Range<usize>| {
                expanded
                    .get(range)
                    .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                    .map(|value| f64::from(value) / 255.0)
                    .ok_or_else(invalid)
            };
            return Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
        }

        let (body, expects_alpha) = if let Some(body) = text.strip_prefix("rgba(") {
            (body, true)
        } else if let Some(body) = text.strip_prefix("rgb(") {
            (body, false)
        } else {
            return Err(invalid());
        };
        let body = body.strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<f64> = body
            .split(',')
            .map(|part| part.trim().parse::<f64>().map_err(|_| invalid()))
            .collect::<ChartResult<_>>()?;

        let color = match (parts.as_slice(), expects_alpha) {
            ([r, g, b], false) => Self::rgb(r / 255.0, g / 255.0, b / 255.0),
            ([r, g, b, a], true) => Self::rgba(r / 255.0, g / 255.0, b / 255.0, *a),
            _ => return Err(invalid()),
        };
        color.validate()?;
        Ok(color)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Stroke pattern of a line primitive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed {
        dash_px: f64,
        gap_px: f64,
    },
}

impl LineStrokeStyle {
    /// Maps a dash pattern (`[dash, gap]`) to a stroke style; empty is solid.
    #[must_use]
    pub fn from_pattern(pattern: &[f64]) -> Self {
        match pattern {
            [dash, gap, ..] => Self::Dashed {
                dash_px: *dash,
                gap_px: *gap,
            },
            [dash] => Self::Dashed {
                dash_px: *dash,
                gap_px: *dash,
            },
            [] => Self::Solid,
        }
    }

    fn validate(self) -> ChartResult<()> {
        match self {
            Self::Solid => Ok(()),
            Self::Dashed { dash_px, gap_px } => {
                if !dash_px.is_finite() || !gap_px.is_finite() || dash_px <= 0.0 || gap_px < 0.0 {
                    return Err(ChartError::InvalidData(
                        "dash pattern must be finite with dash > 0 and gap >= 0".to_owned(),
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub stroke_style: LineStrokeStyle,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            stroke_style: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn with_stroke_style(mut self, stroke_style: LineStrokeStyle) -> Self {
        self.stroke_style = stroke_style;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.stroke_style.validate()?;
        self.color.validate()
    }
}

/// Draw command for one filled rectangle, optionally rounded and bordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_color: Color,
    pub border_width: f64,
    pub corner_radius: f64,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_color: fill_color,
            border_width: 0.0,
            corner_radius: 0.0,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    #[must_use]
    pub const fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(ChartError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "rect corner radius must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
///
/// `rotation_deg` rotates clockwise around the anchor point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub rotation_deg: f64,
    pub bold: bool,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            rotation_deg: 0.0,
            bold: false,
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    #[must_use]
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation_deg.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
