//! Barcode symbols generated with `rxing`.
//!
//! Symbols are encoded at one pixel per module and scaled to their dot size
//! when drawn.

use rxing::{
    BarcodeFormat, EncodeHintValue, EncodeHints, MultiFormatWriter, Writer, common::BitMatrix,
};
use tiny_skia::{Pixmap, Transform};
use zpl_interpreter::{BarcodeItem, BarcodeType, Label, MonochromeBitmap};
use zpl_parser::{Code128Mode, Orientation};

use crate::{
    Drawable, Ink,
    bitmap::Bitmap,
    error::RenderError,
    text::{Fonts, Text, TextLine},
};

const CODE39_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ-. $/+%";
/// Code 128 writers read this char as FNC1.
const FNC1: char = '\u{00f1}';
const CAPTION_GAP: f32 = 2.;

#[derive(Debug, Clone)]
pub(crate) struct Barcode {
    x: f32,
    y: f32,
    symbol: MonochromeBitmap,
    /// Dots per module, horizontally and vertically.
    module: (f32, f32),
    orientation: Orientation,
    caption: Option<Text>,
    ink: Ink,
}

impl Barcode {
    /// Encodes `data`, already translated through the code page, for `item`.
    pub(crate) fn new(
        item: &BarcodeItem,
        label: &Label,
        data: &str,
        default_module: u32,
        fonts: &Fonts,
        ink: Ink,
    ) -> Result<Self, RenderError> {
        let settings = item.render_settings(label);
        let content = symbol_content(&item.kind, data)?;
        let symbol = to_bitmap(&encode_symbol(&item.kind, &content)?);

        let module = match item.kind {
            BarcodeType::QrCode(options) => {
                let size = options.magnification.unwrap_or(default_module) as f32;
                (size, size)
            }
            BarcodeType::DataMatrix(options) => {
                let size = options.height.unwrap_or(default_module) as f32;
                (size, size)
            }
            _ => (settings.module_width as f32, settings.height as f32),
        };

        let caption = settings.display_value.then(|| {
            let size = (settings.module_width * 10) as f32;
            let line = TextLine::new(fonts.mono(), &content.text, size);
            let symbol_width = symbol.width as f32 * module.0;
            let x = ((symbol_width - line.width()) / 2.).max(0.);
            let y = if item.kind.content_above() {
                -(size + CAPTION_GAP)
            } else {
                symbol.height as f32 * module.1 + CAPTION_GAP
            };
            Text::new(vec![line], (x, y), size, Orientation::Normal, ink)
        });

        Ok(Self {
            x: item.x as f32,
            y: item.y as f32,
            symbol,
            module,
            orientation: settings.orientation,
            caption,
            ink,
        })
    }
}

impl Drawable for Barcode {
    fn draw(&self, target: &mut Pixmap, transform: Transform) -> Result<(), RenderError> {
        let origin = transform
            .pre_translate(self.x, self.y)
            .pre_rotate(self.orientation.degrees());

        Bitmap::new(0., 0., &self.symbol, self.ink)
            .scaled(self.module.0, self.module.1)
            .draw(target, origin)?;

        if let Some(caption) = &self.caption {
            caption.draw(target, origin)?;
        }
        Ok(())
    }
}

/// What goes into the writer and what is printed under the bars.
#[derive(Debug, Clone, PartialEq)]
struct SymbolContent {
    content: String,
    text: String,
    error_correction: Option<char>,
}

impl SymbolContent {
    fn new(content: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            text: text.into(),
            error_correction: None,
        }
    }
}

fn symbol_content(kind: &BarcodeType, data: &str) -> Result<SymbolContent, RenderError> {
    Ok(match kind {
        BarcodeType::Code39(options) => {
            let mut content = data.to_string();
            if options.mod43_check_digit {
                content.extend(code39_check_char(data));
            }
            let text = format!("*{content}*");
            SymbolContent::new(content, text)
        }
        BarcodeType::Code128(options) => match options.mode {
            Code128Mode::Ean => SymbolContent::new(format!("{FNC1}{data}"), data),
            _ => SymbolContent::new(data, data),
        },
        BarcodeType::Ean13(_) => {
            let content = check_ean_content(data)?;
            SymbolContent::new(content.clone(), content)
        }
        BarcodeType::QrCode(_) => {
            let (error_correction, payload) = strip_qr_header(data);
            SymbolContent {
                error_correction,
                ..SymbolContent::new(payload, "")
            }
        }
        BarcodeType::DataMatrix(_) => SymbolContent::new(data, ""),
    })
}

fn encode_symbol(kind: &BarcodeType, symbol: &SymbolContent) -> Result<BitMatrix, RenderError> {
    let mut hints = EncodeHints::default().with(EncodeHintValue::Margin("0".into()));
    if let Some(level) = symbol.error_correction {
        hints = hints.with(EncodeHintValue::ErrorCorrection(level.to_string()));
    }
    let format = match kind {
        BarcodeType::Code39(_) => BarcodeFormat::CODE_39,
        BarcodeType::Code128(_) => BarcodeFormat::CODE_128,
        BarcodeType::Ean13(_) => BarcodeFormat::EAN_13,
        BarcodeType::QrCode(_) => BarcodeFormat::QR_CODE,
        BarcodeType::DataMatrix(_) => BarcodeFormat::DATA_MATRIX,
    };

    MultiFormatWriter::default()
        .encode_with_hints(&symbol.content, &format, 1, 1, &hints)
        .map_err(|err| RenderError::Barcode(err.to_string()))
}

fn to_bitmap(bitmatrix: &BitMatrix) -> MonochromeBitmap {
    let width = bitmatrix.width() as usize;
    let height = bitmatrix.height() as usize;

    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            pixels.push(u8::from(bitmatrix.get(x as u32, y as u32)));
        }
    }

    MonochromeBitmap {
        width,
        height,
        pixels,
    }
}

/// Splits the `^BQ` field data header (`QA,`) off a QR payload, returning the
/// error correction level it names.
fn strip_qr_header(data: &str) -> (Option<char>, &str) {
    let mut chars = data.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(level @ ('H' | 'Q' | 'M' | 'L')), Some('A' | 'M'), Some(',')) => {
            (Some(level), &data[3..])
        }
        _ => (None, data),
    }
}

fn code39_check_char(data: &str) -> Option<char> {
    let sum = data.chars().try_fold(0, |sum, ch| {
        CODE39_CHARSET.find(ch).map(|value| sum + value)
    })?;
    CODE39_CHARSET.chars().nth(sum % CODE39_CHARSET.len())
}

/// Normalizes EAN-13 data to twelve digits plus check digit. Non digits count
/// as `0`; thirteen characters are taken as already checked.
fn check_ean_content(input: &str) -> Result<String, RenderError> {
    let mut content: String = input
        .chars()
        .map(|ch| if ch.is_ascii_digit() { ch } else { '0' })
        .collect();

    if content.chars().count() == 13 {
        return Ok(content);
    }

    if content.len() < 12 {
        content = format!("{content:0>12}");
    } else {
        content.truncate(12);
    }
    let check_digit = ean13_check_digit(&content)?;
    content.push(char::from(b'0' + check_digit));
    Ok(content)
}

fn ean13_check_digit(ean12: &str) -> Result<u8, RenderError> {
    let digits = ean12
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<_>>>()
        .filter(|digits| digits.len() == 12)
        .ok_or_else(|| RenderError::Barcode("EAN-13 needs exactly 12 digits".to_string()))?;

    // weights alternate 3, 1 starting from the rightmost digit
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, digit)| if i % 2 == 0 { digit * 3 } else { *digit })
        .sum();

    Ok(((10 - (sum % 10)) % 10) as u8)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tiny_skia::Color;
    use zpl_interpreter::{Code39Options, Code128Options, Ean13Options, QrCodeOptions};

    use super::*;

    fn item(kind: BarcodeType, data: &str) -> BarcodeItem {
        BarcodeItem {
            x: 10,
            y: 10,
            data: data.into(),
            kind,
            defaults: None,
            reversed: false,
            hex_indicator: None,
        }
    }

    fn barcode(item: &BarcodeItem) -> Result<Barcode, RenderError> {
        let fonts = Fonts::load().unwrap();
        Barcode::new(item, &Label::default(), &item.data, 2, &fonts, Ink::solid(Color::BLACK))
    }

    #[test]
    fn ean13_check_digit_test() {
        assert_eq!(ean13_check_digit("400638133393").unwrap(), 1);
        assert_eq!(ean13_check_digit("590123412345").unwrap(), 7);
        assert!(ean13_check_digit("12345").is_err());
    }

    #[test]
    fn check_ean_content_test() {
        assert_eq!(check_ean_content("400638133393").unwrap(), "4006381333931");
        assert_eq!(check_ean_content("12345").unwrap(), "0000000123457");
        assert_eq!(check_ean_content("4006381333931").unwrap(), "4006381333931");
        assert_eq!(check_ean_content("40063813339312345").unwrap(), "4006381333931");
    }

    #[test]
    fn strip_qr_header_test() {
        assert_eq!(strip_qr_header("QA,https://example.com"), (Some('Q'), "https://example.com"));
        assert_eq!(strip_qr_header("HM,12"), (Some('H'), "12"));
        assert_eq!(strip_qr_header("plain"), (None, "plain"));
        assert_eq!(strip_qr_header("QA"), (None, "QA"));
    }

    #[test]
    fn code39_check_char_test() {
        assert_eq!(code39_check_char("CODE39"), Some('W'));
        assert_eq!(code39_check_char("abc"), None);
    }

    #[test]
    fn code39_caption_keeps_sentinels_test() {
        let kind = BarcodeType::Code39(Code39Options::default());
        let content = symbol_content(&kind, "123456").unwrap();
        assert_eq!(content.content, "123456");
        assert_eq!(content.text, "*123456*");

        let kind = BarcodeType::QrCode(QrCodeOptions::default());
        let content = symbol_content(&kind, "MA,Hello").unwrap();
        assert_eq!(content.content, "Hello");
        assert_eq!(content.error_correction, Some('M'));
    }

    #[test]
    fn code128_symbol_test() {
        let item = item(BarcodeType::Code128(Code128Options::default()), "ABC123");
        let barcode = barcode(&item).unwrap();
        let (width, height) = (barcode.symbol.width, barcode.symbol.height);
        assert!(width > 0);
        assert_eq!(height, 1);
        assert_eq!(barcode.module, (2., 10.));
        assert!(barcode.caption.is_some());
    }

    #[test]
    fn ean13_symbol_test() {
        let options = Ean13Options {
            height: Some(50),
            print_interpretation_line: false,
            ..Default::default()
        };
        let barcode = barcode(&item(BarcodeType::Ean13(options), "400638133393")).unwrap();
        assert_eq!(barcode.symbol.width, 95);
        assert_eq!(barcode.module.1, 50.);
        assert!(barcode.caption.is_none());
    }

    #[test]
    fn qr_symbol_test() {
        let options = QrCodeOptions {
            magnification: Some(5),
            ..Default::default()
        };
        let barcode = barcode(&item(BarcodeType::QrCode(options), "QA,Hello")).unwrap();
        let (width, height) = (barcode.symbol.width, barcode.symbol.height);
        assert_eq!(width, height);
        assert!(width >= 21);
        assert_eq!(barcode.module, (5., 5.));
    }

    #[test]
    fn invalid_data_fails_test() {
        let options = Ean13Options::default();
        assert!(barcode(&item(BarcodeType::Ean13(options), "4006381333932")).is_err());
    }

    #[test]
    fn draws_bars_test() {
        let item = item(BarcodeType::Code128(Code128Options::default()), "ABC123");
        let barcode = barcode(&item).unwrap();
        let mut pixmap = Pixmap::new(400, 100).unwrap();
        pixmap.fill(Color::WHITE);
        barcode.draw(&mut pixmap, Transform::identity()).unwrap();
        // start pattern of every code 128 symbol begins with a bar
        assert_eq!(pixmap.pixel(10, 12).unwrap().red(), 0);
        assert_eq!(pixmap.pixel(5, 12).unwrap().red(), 255);
    }
}
