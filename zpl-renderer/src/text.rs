use std::fmt::Debug;

use fontdue::{Font, FontSettings};
use tiny_skia::{FilterQuality, IntSize, Pixmap, PixmapPaint, Transform};
use zpl_interpreter::TextBlockFormat;
use zpl_parser::{Orientation, TextBlockJustification};

use crate::{Drawable, Ink, error::RenderError};

const DEFAULT_FONT_SIZE: f32 = 20.0;
const LINE_HEIGHT: f32 = 1.2;

/// The two families every label font maps onto.
pub(crate) struct Fonts {
    proportional: Font,
    mono: Font,
}

impl Fonts {
    pub(crate) fn load() -> Result<Self, RenderError> {
        let proportional: &'static [u8] = include_bytes!("../../fonts/DejaVuSansCondensed-Bold.ttf");
        let mono: &'static [u8] = include_bytes!("../../fonts/DejaVuSansMono.ttf");
        Ok(Self {
            proportional: Font::from_bytes(proportional, FontSettings::default())
                .map_err(|_| RenderError::Font("DejaVuSansCondensed-Bold"))?,
            mono: Font::from_bytes(mono, FontSettings::default())
                .map_err(|_| RenderError::Font("DejaVuSansMono"))?,
        })
    }

    /// Font `0` is the scalable proportional font, everything else is drawn
    /// fixed width.
    pub(crate) fn for_name(&self, name: &str) -> &Font {
        if is_proportional(name) {
            &self.proportional
        } else {
            &self.mono
        }
    }

    pub(crate) fn mono(&self) -> &Font {
        &self.mono
    }
}

fn is_proportional(name: &str) -> bool {
    name == "0"
}

/// Text as printed with font `0`: hyphens get some air around them.
pub(crate) fn adjust_for_font(name: &str, text: &str) -> String {
    if is_proportional(name) {
        text.replace('-', " – ")
    } else {
        text.to_string()
    }
}

/// Font height in dots, never taller than `max_size`.
pub(crate) fn font_size(height: Option<u32>, max_size: f32) -> f32 {
    height
        .map_or(DEFAULT_FONT_SIZE, |height| height as f32)
        .min(max_size)
}

/// Splits block text on real newlines and the `\&` line break.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').flat_map(|line| line.split("\\&")).collect()
}

#[derive(Clone, PartialEq)]
struct Glyph {
    ch: char,
    x: f32,
    width: usize,
    height: usize,
    advance_width: f32,
    xmin: i32,
    ymin: i32,
    bitmap: Vec<u8>,
}

impl Debug for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Glyph")
            .field("char", &self.ch)
            .field("x", &self.x)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("advance_width", &self.advance_width)
            .field("xmin", &self.xmin)
            .field("ymin", &self.ymin)
            .field("bitmap", &"...")
            .finish()
    }
}

impl Glyph {
    fn new(font: &Font, ch: char, size: f32) -> Self {
        let (metrics, bitmap) = font.rasterize(ch, size);
        Self {
            ch,
            x: 0.,
            width: metrics.width,
            height: metrics.height,
            advance_width: metrics.advance_width,
            xmin: metrics.xmin,
            ymin: metrics.ymin,
            bitmap,
        }
    }

    fn position_next_to(&mut self, previous: &Self) {
        self.x = previous.x + previous.advance_width;
    }

    /// Premultiplied RGBA of the coverage bitmap in `ink`.
    fn to_rgba(&self, ink: &Ink) -> Vec<u8> {
        let color = ink.color.to_color_u8();
        let mut buf = Vec::with_capacity(self.bitmap.len() * 4);
        for &alpha in &self.bitmap {
            let premultiply = |channel: u8| ((channel as u16 * alpha as u16) / 255) as u8;
            buf.push(premultiply(color.red()));
            buf.push(premultiply(color.green()));
            buf.push(premultiply(color.blue()));
            buf.push(alpha);
        }
        buf
    }

    fn to_pixmap(&self, ink: &Ink) -> Result<Option<Pixmap>, RenderError> {
        let Some(size) = IntSize::from_wh(self.width as u32, self.height as u32) else {
            // whitespace has no bitmap
            return Ok(None);
        };
        Pixmap::from_vec(self.to_rgba(ink), size)
            .map(Some)
            .ok_or(RenderError::InvalidShape)
    }
}

/// One line of glyphs laid out from a zero origin, top aligned.
#[derive(Debug, Clone)]
pub(crate) struct TextLine {
    glyphs: Vec<Glyph>,
    ascent: f32,
    height: f32,
}

impl TextLine {
    pub(crate) fn new(font: &Font, text: &str, size: f32) -> Self {
        let mut glyphs: Vec<Glyph> = Vec::with_capacity(text.len());
        for ch in text.chars() {
            let mut glyph = Glyph::new(font, ch, size);
            if let Some(previous) = glyphs.last() {
                glyph.position_next_to(previous);
            }
            glyphs.push(glyph);
        }

        let (ascent, height) = match font.horizontal_line_metrics(size) {
            Some(metrics) => (metrics.ascent, metrics.ascent - metrics.descent),
            None => (size, size),
        };

        Self {
            glyphs,
            ascent,
            height,
        }
    }

    pub(crate) fn width(&self) -> f32 {
        self.glyphs
            .last()
            .map_or(0., |glyph| glyph.x + glyph.advance_width)
    }

    fn to_pixmap(&self, ink: &Ink) -> Result<Option<Pixmap>, RenderError> {
        let width = self.width().ceil() as u32;
        let height = self.height.ceil() as u32;
        let Some(mut pixmap) = Pixmap::new(width, height) else {
            return Ok(None);
        };

        for glyph in &self.glyphs {
            let Some(glyph_pixmap) = glyph.to_pixmap(ink)? else {
                continue;
            };
            let x = (glyph.x + glyph.xmin as f32).round() as i32;
            let y = (self.ascent - (glyph.ymin as f32 + glyph.height as f32)).round() as i32;
            pixmap.draw_pixmap(
                x,
                y,
                glyph_pixmap.as_ref(),
                &PixmapPaint::default(),
                Transform::identity(),
                None,
            );
        }
        Ok(Some(pixmap))
    }
}

/// Field text placed at a label position, in dots.
#[derive(Debug, Clone)]
pub(crate) struct Text {
    lines: Vec<TextLine>,
    x: f32,
    y: f32,
    size: f32,
    orientation: Orientation,
    block: Option<TextBlockFormat>,
    ink: Ink,
}

impl Text {
    pub(crate) fn new(
        lines: Vec<TextLine>,
        (x, y): (f32, f32),
        size: f32,
        orientation: Orientation,
        ink: Ink,
    ) -> Self {
        Self {
            lines,
            x,
            y,
            size,
            orientation,
            block: None,
            ink,
        }
    }

    /// Wraps the text into a `^FB` block. Lines past `max_lines` are dropped.
    pub(crate) fn with_block(mut self, block: TextBlockFormat) -> Self {
        self.lines.truncate(block.max_lines as usize);
        self.block = Some(block);
        self
    }

    fn line_advance(&self) -> f32 {
        let spacing = self.block.map_or(0, |block| block.line_spacing) as f32;
        self.size * LINE_HEIGHT + spacing
    }

    /// Offset and horizontal compression of line `index` inside the block.
    fn fit_line(&self, index: usize, line: &TextLine) -> (f32, f32) {
        let Some(block) = self.block else {
            return (0., 1.);
        };
        let indent = if index > 0 {
            block.hanging_indent as f32
        } else {
            0.
        };
        let available = (block.width as f32 - indent).max(0.);
        let width = line.width();
        if block.width == 0 || width <= 0. {
            return (indent, 1.);
        }
        if width > available {
            return (indent, available / width);
        }

        let slack = available - width;
        let offset = match block.justification {
            TextBlockJustification::Center => slack / 2.,
            TextBlockJustification::Right => slack,
            TextBlockJustification::Left | TextBlockJustification::Justified => 0.,
        };
        (indent + offset, 1.)
    }
}

impl Drawable for Text {
    fn draw(&self, target: &mut Pixmap, transform: Transform) -> Result<(), RenderError> {
        let origin = transform
            .pre_translate(self.x, self.y)
            .pre_rotate(self.orientation.degrees());
        let paint = PixmapPaint {
            blend_mode: self.ink.blend_mode,
            quality: FilterQuality::Bilinear,
            ..Default::default()
        };

        for (index, line) in self.lines.iter().enumerate() {
            let Some(pixmap) = line.to_pixmap(&self.ink)? else {
                continue;
            };
            let (offset, compression) = self.fit_line(index, line);
            let line_transform = origin
                .pre_translate(offset, index as f32 * self.line_advance())
                .pre_scale(compression, 1.);
            target.draw_pixmap(0, 0, pixmap.as_ref(), &paint, line_transform, None);
        }
        Ok(())
    }
}
