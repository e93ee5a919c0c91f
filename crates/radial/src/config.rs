use crate::text::FontSpec;
use derive_more::{AsRef, Deref, Display, From, Into};
use palette::{FromColor, Hsl, Srgb, Srgba};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    Deref,
    From,
    Into,
    AsRef,
)]
#[serde(transparent)]
pub struct Label(String);

crate::impl_string_newtype!(Label);

#[derive(Error, Debug, PartialEq)]
pub enum ColorParseError {
    #[error("Unsupported color '{0}': expected #rgb, #rrggbb or #rrggbbaa")]
    Format(String),
    #[error("Invalid hex digits in color '{0}'")]
    Hex(String),
}

/// An sRGB color with alpha, written in config files as a hex string.
#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr, SerializeDisplay)]
pub struct Color(Srgba<f64>);

impl Color {
    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self(Srgba::new(red, green, blue, alpha))
    }

    pub fn white() -> Self {
        Self::rgba(1.0, 1.0, 1.0, 1.0)
    }

    /// `hue` in degrees, `saturation` and `lightness` in `[0, 1]`.
    pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let hsl: Hsl<palette::encoding::Srgb, f64> = Hsl::new(hue, saturation, lightness);
        let rgb = Srgb::<f64>::from_color(hsl);
        Self::rgba(rgb.red, rgb.green, rgb.blue, 1.0)
    }

    pub fn into_components(self) -> (f64, f64, f64, f64) {
        self.0.into_components()
    }
}

impl From<Srgba<f64>> for Color {
    fn from(color: Srgba<f64>) -> Self {
        Self(color)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !hex.is_ascii() {
            return Err(ColorParseError::Format(s.to_string()));
        }

        let (rgb_part, alpha_part) = match hex.len() {
            3 | 6 => (hex, None),
            8 => (&hex[..6], Some(&hex[6..])),
            _ => return Err(ColorParseError::Format(s.to_string())),
        };

        let rgb: Srgb<u8> = rgb_part
            .parse()
            .map_err(|_| ColorParseError::Hex(s.to_string()))?;
        let alpha = alpha_part
            .map(|a| u8::from_str_radix(a, 16))
            .transpose()
            .map_err(|_| ColorParseError::Hex(s.to_string()))?
            .unwrap_or(u8::MAX);

        let rgb = rgb.into_format::<f64>();
        Ok(Self::rgba(
            rgb.red,
            rgb.green,
            rgb.blue,
            f64::from(alpha) / 255.0,
        ))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c: Srgba<u8> = self.0.into_format();
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            c.red, c.green, c.blue, c.alpha
        )
    }
}

/// Per-render wheel configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub labels: Vec<Label>,
    pub size: f64,
    pub inner_radius: f64,
    pub keep_text_horizontal: bool,
    pub font_family: String,
    pub font_size: f64,
    pub text_padding: f64,
    pub slice_colors: Option<Vec<Color>>,
    pub text_color: Color,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            size: 480.0,
            inner_radius: 40.0,
            keep_text_horizontal: true,
            font_family: "Sans".to_string(),
            font_size: 14.0,
            text_padding: 8.0,
            slice_colors: None,
            text_color: Color::white(),
        }
    }
}

impl WheelConfig {
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Label::new).collect(),
            ..Self::default()
        }
    }

    /// Number of slices; an empty label list still yields one slice.
    pub fn slice_count(&self) -> usize {
        self.labels.len().max(1)
    }

    pub fn label(&self, index: usize) -> &str {
        self.labels.get(index).map_or("", Label::as_str)
    }

    /// Explicit colors cycle by index; otherwise hues are spread evenly.
    pub fn slice_color(&self, index: usize) -> Color {
        match self.slice_colors.as_deref() {
            Some(colors) if !colors.is_empty() => colors[index % colors.len()],
            _ => {
                let hue = 360.0 * index as f64 / self.slice_count() as f64;
                Color::hsl(hue, 0.7, 0.45)
            }
        }
    }

    pub fn font(&self) -> FontSpec {
        FontSpec::new(self.font_family.clone(), self.font_size)
    }
}
