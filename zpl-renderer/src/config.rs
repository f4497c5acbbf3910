//! Renderer settings.
//!
//! Every field is optional when loading from JSON:
//!
//! ```
//! use zpl_renderer::{LabelOrientation, RendererOptions};
//!
//! let options = RendererOptions::from_json(r#"{ "dpi": 300, "dimensions": "4x2_5" }"#).unwrap();
//! assert_eq!(options.label_size().unwrap(), (4.0, 2.5));
//! assert_eq!(options.orientation, LabelOrientation::Portrait);
//! ```

use serde::Deserialize;
use tiny_skia::Color;

use crate::error::OptionsError;

const SUPPORTED_DPI: [u32; 4] = [152, 203, 300, 600];

/// Canvas units per inch of label.
const UNITS_PER_INCH: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelOrientation {
    #[default]
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RendererOptions {
    /// Printer resolution in dots per inch.
    pub dpi: u32,
    /// Label size in inches as `<width>x<height>`. `_` may stand in for the
    /// decimal point (`4x2_5`).
    pub dimensions: String,
    pub orientation: LabelOrientation,
    pub scale: f32,
    #[serde(alias = "device_pixel_ratio")]
    pub device_pixel_ratio: f32,
    #[serde(alias = "foregroundColor")]
    pub foreground: String,
    #[serde(alias = "backgroundColor")]
    pub background: String,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            dpi: 203,
            dimensions: "4x6".to_string(),
            orientation: LabelOrientation::Portrait,
            scale: 1.0,
            device_pixel_ratio: 1.0,
            foreground: "#000000".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }
}

impl RendererOptions {
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if !SUPPORTED_DPI.contains(&self.dpi) {
            return Err(OptionsError::Dpi(self.dpi));
        }
        if self.scale <= 0.0 || !self.scale.is_finite() {
            return Err(OptionsError::NotPositive("scale"));
        }
        if self.device_pixel_ratio <= 0.0 || !self.device_pixel_ratio.is_finite() {
            return Err(OptionsError::NotPositive("device_pixel_ratio"));
        }
        self.label_size()?;
        self.foreground_color()?;
        self.background_color()?;
        Ok(())
    }

    /// Width and height in inches, as seen on the canvas.
    pub fn label_size(&self) -> Result<(f32, f32), OptionsError> {
        let invalid = || OptionsError::Dimensions(self.dimensions.clone());
        let (width, height) = self
            .dimensions
            .split_once(['x', 'X'])
            .ok_or_else(invalid)?;
        let width = parse_inches(width).ok_or_else(invalid)?;
        let height = parse_inches(height).ok_or_else(invalid)?;

        Ok(match self.orientation {
            LabelOrientation::Portrait => (width, height),
            LabelOrientation::Landscape => (height, width),
        })
    }

    /// Canvas size in pixels.
    pub fn canvas_size(&self) -> Result<(u32, u32), OptionsError> {
        let (width, height) = self.label_size()?;
        let to_pixels = |inches: f32| (inches * UNITS_PER_INCH * self.device_pixel_ratio).round() as u32;
        Ok((to_pixels(width), to_pixels(height)))
    }

    /// Pixels per dot before the `scale` option is applied.
    pub fn base_scale(&self) -> f32 {
        self.device_pixel_ratio * 100.8 / self.dpi as f32
    }

    /// Longest label side in dots. Text taller than this can not show on the
    /// label and is rasterized at this size.
    pub fn max_font_size(&self) -> Result<f32, OptionsError> {
        let (width, height) = self.label_size()?;
        Ok(width.max(height) * self.dpi as f32)
    }

    /// Default QR module size, one module per hundredth of an inch.
    pub fn dots_per_module(&self) -> u32 {
        (self.dpi / 100).max(1)
    }

    pub fn foreground_color(&self) -> Result<Color, OptionsError> {
        parse_hex_color(&self.foreground)
    }

    pub fn background_color(&self) -> Result<Color, OptionsError> {
        parse_hex_color(&self.background)
    }
}

fn parse_inches(value: &str) -> Option<f32> {
    let inches: f32 = value.trim().replace('_', ".").parse().ok()?;
    (inches > 0.0 && inches.is_finite()).then_some(inches)
}

fn parse_hex_color(value: &str) -> Result<Color, OptionsError> {
    let invalid = || OptionsError::Color(value.to_string());
    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).map_err(|_| invalid());
    Ok(Color::from_rgba8(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255))
}
