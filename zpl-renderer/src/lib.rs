//! Rasterizes [`Label`] documents with `tiny-skia`.
//!
//! ```
//! use zpl_interpreter::LabelParser;
//! use zpl_renderer::{Renderer, RendererOptions};
//!
//! let label = LabelParser::new("^XA^FO50,50^GB100,100,100^FS^XZ").parse().label.unwrap();
//! let renderer = Renderer::new(RendererOptions::default()).unwrap();
//! let pixmap = renderer.render(&label).unwrap();
//! assert_eq!((pixmap.width(), pixmap.height()), (400, 600));
//! ```

mod barcode;
mod bitmap;
mod config;
pub mod encoding;
mod error;
mod shapes;
mod text;

use log::{debug, warn};
use tiny_skia::{BlendMode, Color, Paint, Pixmap, Transform};
use zpl_interpreter::{GraphicBoxItem, Label, LayoutItem, TextItem};
use zpl_parser::{Color as ZplColor, Orientation};

use crate::{
    barcode::Barcode,
    bitmap::Bitmap,
    encoding::{encode, encode_with_indicator},
    shapes::{RectDim, Rectangle},
    text::{Fonts, Text, TextLine, adjust_for_font, font_size, split_lines},
};

pub use crate::config::{LabelOrientation, RendererOptions};
pub use crate::error::{EncodeError, OptionsError, RenderError};

const FALLBACK_FONT_SIZE: f32 = 14.;

pub(crate) trait Drawable {
    /// Paints onto `target`; `transform` maps label dots to canvas pixels.
    fn draw(&self, target: &mut Pixmap, transform: Transform) -> Result<(), RenderError>;
}

/// Color and compositing of a drawable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Ink {
    color: Color,
    blend_mode: BlendMode,
}

impl Ink {
    pub(crate) fn solid(color: Color) -> Self {
        Self {
            color,
            blend_mode: BlendMode::SourceOver,
        }
    }

    /// Reverse video: white under a difference blend flips whatever is
    /// already on the canvas.
    pub(crate) fn reversed() -> Self {
        Self {
            color: Color::WHITE,
            blend_mode: BlendMode::Difference,
        }
    }

    pub(crate) fn paint(&self) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(self.color);
        paint.blend_mode = self.blend_mode;
        paint
    }
}

pub struct Renderer {
    options: RendererOptions,
    fonts: Fonts,
    foreground: Color,
    background: Color,
}

impl Renderer {
    pub fn new(options: RendererOptions) -> Result<Self, RenderError> {
        options.validate()?;
        Ok(Self {
            fonts: Fonts::load()?,
            foreground: options.foreground_color()?,
            background: options.background_color()?,
            options,
        })
    }

    pub fn options(&self) -> &RendererOptions {
        &self.options
    }

    /// Draws every item of `label` in document order onto a fresh canvas.
    ///
    /// An item that can not be drawn is replaced by a short error text in red;
    /// only canvas setup errors are returned.
    pub fn render(&self, label: &Label) -> Result<Pixmap, RenderError> {
        let (width, height) = self.options.canvas_size()?;
        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Canvas { width, height })?;
        pixmap.fill(self.background);

        let scale = self.options.base_scale() * self.options.scale;
        let transform = Transform::from_scale(scale, scale);

        for item in &label.items {
            debug!("rendering {} at {:?}", item.kind(), item.position());
            if let Err(err) = self.draw_item(item, label, &mut pixmap, transform) {
                warn!("failed to render {} at {:?}: {err}", item.kind(), item.position());
                if let Err(err) = self.draw_fallback(item, &mut pixmap, transform) {
                    warn!("failed to render fallback text: {err}");
                }
            }
        }

        Ok(pixmap)
    }

    fn draw_item(
        &self,
        item: &LayoutItem,
        label: &Label,
        target: &mut Pixmap,
        transform: Transform,
    ) -> Result<(), RenderError> {
        match item {
            LayoutItem::Text(text) => self.text(text)?.draw(target, transform),
            LayoutItem::Barcode(barcode) => {
                let data = encode_field(&barcode.data, barcode.hex_indicator)?;
                let ink = self.ink(barcode.reversed, ZplColor::Black);
                Barcode::new(
                    barcode,
                    label,
                    &data,
                    self.options.dots_per_module(),
                    &self.fonts,
                    ink,
                )?
                .draw(target, transform)
            }
            LayoutItem::GraphicBox(graphic_box) => match self.rectangle(graphic_box) {
                Some(rectangle) => rectangle.draw(target, transform),
                None => {
                    debug!("skipping graphic box without size");
                    Ok(())
                }
            },
            LayoutItem::GraphicField(field) => Bitmap::new(
                field.x as f32,
                field.y as f32,
                &field.bitmap,
                self.ink(field.reversed, ZplColor::Black),
            )
            .draw(target, transform),
        }
    }

    fn text(&self, item: &TextItem) -> Result<Text, RenderError> {
        let font = self.fonts.for_name(&item.font.name);
        let size = font_size(item.font.height, self.options.max_font_size()?);
        let to_line = |raw: &str| -> Result<TextLine, RenderError> {
            let encoded = encode_field(raw, item.hex_indicator)?;
            Ok(TextLine::new(font, &adjust_for_font(&item.font.name, &encoded), size))
        };

        let lines = match item.block_format {
            Some(_) => split_lines(&item.data)
                .into_iter()
                .map(to_line)
                .collect::<Result<Vec<_>, _>>()?,
            None => vec![to_line(&item.data)?],
        };

        let text = Text::new(
            lines,
            (item.x as f32, item.y as f32),
            size,
            item.font.orientation,
            self.ink(item.reversed, ZplColor::Black),
        );
        Ok(match item.block_format {
            Some(block) => text.with_block(block),
            None => text,
        })
    }

    /// `None` when the box has no width or height to draw.
    fn rectangle(&self, item: &GraphicBoxItem) -> Option<Rectangle> {
        let dim = RectDim::new(
            item.width? as f32,
            item.height? as f32,
            item.thickness.unwrap_or(1) as f32,
            item.roundedness,
        );
        let ink = self.ink(item.reversed, item.color);
        Some(Rectangle::new(item.x as f32, item.y as f32, dim, item.is_solid(), ink))
    }

    fn ink(&self, reversed: bool, color: ZplColor) -> Ink {
        if reversed {
            return Ink::reversed();
        }
        match color {
            ZplColor::Black => Ink::solid(self.foreground),
            ZplColor::White => Ink::solid(self.background),
        }
    }

    fn draw_fallback(
        &self,
        item: &LayoutItem,
        target: &mut Pixmap,
        transform: Transform,
    ) -> Result<(), RenderError> {
        let message = match item {
            LayoutItem::Barcode(barcode) => format!("Invalid barcode: {}", barcode.processed_data()),
            other => format!("Invalid {}", other.kind()),
        };
        let line = TextLine::new(self.fonts.for_name("0"), &message, FALLBACK_FONT_SIZE);
        let (x, y) = item.position();
        let red = Color::from_rgba8(255, 0, 0, 255);
        Text::new(
            vec![line],
            (x as f32, y as f32),
            FALLBACK_FONT_SIZE,
            Orientation::Normal,
            Ink::solid(red),
        )
        .draw(target, transform)
    }
}

fn encode_field(data: &str, hex_indicator: Option<char>) -> Result<String, EncodeError> {
    match hex_indicator {
        Some(indicator) => encode_with_indicator(data, indicator),
        None => encode(data, false),
    }
}

/// Renders `label` with [`RendererOptions::default`].
pub fn render(label: &Label) -> Result<Pixmap, RenderError> {
    Renderer::new(RendererOptions::default())?.render(label)
}
