use zpl_parser::{Code128Mode, Color, Orientation, TextBlockJustification};

use crate::decode_image::MonochromeBitmap;

/// A parsed label, ready to be rendered.
///
/// Items keep the order in which their fields appeared; that is also the paint
/// order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Label {
    pub items: Vec<LayoutItem>,
    pub home_position: (i32, i32),
    pub default_font: FontSettings,
    pub barcode_defaults: Option<BarcodeDefaults>,
}

impl Label {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSettings {
    pub name: String,
    pub orientation: Orientation,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            name: "0".to_string(),
            orientation: Orientation::Normal,
            height: None,
            width: None,
        }
    }
}

/// Word wrapping box set up by `^FB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBlockFormat {
    pub width: u32,
    pub max_lines: u32,
    pub line_spacing: i32,
    pub justification: TextBlockJustification,
    pub hanging_indent: u32,
}

impl Default for TextBlockFormat {
    fn default() -> Self {
        Self {
            width: 0,
            max_lines: 1,
            line_spacing: 0,
            justification: TextBlockJustification::Left,
            hanging_indent: 0,
        }
    }
}

/// Label wide barcode settings from `^BY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarcodeDefaults {
    pub module_width: u32,
    pub wide_bar_ratio: f64,
    pub height: u32,
}

impl Default for BarcodeDefaults {
    fn default() -> Self {
        Self {
            module_width: 2,
            wide_bar_ratio: 3.0,
            height: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code39Options {
    pub orientation: Orientation,
    pub mod43_check_digit: bool,
    pub height: Option<u32>,
    pub print_interpretation_line: bool,
    pub interpretation_line_above: bool,
}

impl Default for Code39Options {
    fn default() -> Self {
        Self {
            orientation: Orientation::Normal,
            mod43_check_digit: false,
            height: None,
            print_interpretation_line: true,
            interpretation_line_above: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code128Options {
    pub orientation: Orientation,
    pub height: Option<u32>,
    pub print_interpretation_line: bool,
    pub interpretation_line_above: bool,
    pub ucc_check_digit: bool,
    pub mode: Code128Mode,
}

impl Default for Code128Options {
    fn default() -> Self {
        Self {
            orientation: Orientation::Normal,
            height: None,
            print_interpretation_line: true,
            interpretation_line_above: false,
            ucc_check_digit: false,
            mode: Code128Mode::Auto,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ean13Options {
    pub orientation: Orientation,
    pub height: Option<u32>,
    pub print_interpretation_line: bool,
    pub interpretation_line_above: bool,
}

impl Default for Ean13Options {
    fn default() -> Self {
        Self {
            orientation: Orientation::Normal,
            height: None,
            print_interpretation_line: true,
            interpretation_line_above: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrCodeOptions {
    pub orientation: Orientation,
    pub model: u8,
    /// Dots per module. `None` lets the renderer pick one from its resolution.
    pub magnification: Option<u32>,
}

impl Default for QrCodeOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Normal,
            model: 2,
            magnification: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataMatrixOptions {
    pub orientation: Orientation,
    /// Dots per module.
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeType {
    Code39(Code39Options),
    Code128(Code128Options),
    Ean13(Ean13Options),
    QrCode(QrCodeOptions),
    DataMatrix(DataMatrixOptions),
}

impl BarcodeType {
    pub fn symbology(&self) -> &'static str {
        match self {
            BarcodeType::Code39(_) => "code39",
            BarcodeType::Code128(_) => "code128",
            BarcodeType::Ean13(_) => "ean13",
            BarcodeType::QrCode(_) => "qrcode",
            BarcodeType::DataMatrix(_) => "datamatrix",
        }
    }

    pub fn orientation(&self) -> Orientation {
        match self {
            BarcodeType::Code39(options) => options.orientation,
            BarcodeType::Code128(options) => options.orientation,
            BarcodeType::Ean13(options) => options.orientation,
            BarcodeType::QrCode(options) => options.orientation,
            BarcodeType::DataMatrix(options) => options.orientation,
        }
    }

    /// Bar height for linear symbologies, `None` when it comes from `^BY`.
    pub fn height(&self) -> Option<u32> {
        match self {
            BarcodeType::Code39(options) => options.height,
            BarcodeType::Code128(options) => options.height,
            BarcodeType::Ean13(options) => options.height,
            BarcodeType::QrCode(_) | BarcodeType::DataMatrix(_) => None,
        }
    }

    pub fn show_content(&self) -> bool {
        match self {
            BarcodeType::Code39(options) => options.print_interpretation_line,
            BarcodeType::Code128(options) => options.print_interpretation_line,
            BarcodeType::Ean13(options) => options.print_interpretation_line,
            BarcodeType::QrCode(_) | BarcodeType::DataMatrix(_) => false,
        }
    }

    pub fn content_above(&self) -> bool {
        match self {
            BarcodeType::Code39(options) => options.interpretation_line_above,
            BarcodeType::Code128(options) => options.interpretation_line_above,
            BarcodeType::Ean13(options) => options.interpretation_line_above,
            BarcodeType::QrCode(_) | BarcodeType::DataMatrix(_) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub x: i32,
    pub y: i32,
    /// Field data as written, before code page translation.
    pub data: String,
    pub font: FontSettings,
    pub block_format: Option<TextBlockFormat>,
    pub reversed: bool,
    /// Escape character of a `^FH` field.
    pub hex_indicator: Option<char>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarcodeItem {
    pub x: i32,
    pub y: i32,
    pub data: String,
    pub kind: BarcodeType,
    /// `^BY` settings in effect when the field was created.
    pub defaults: Option<BarcodeDefaults>,
    pub reversed: bool,
    pub hex_indicator: Option<char>,
}

/// Resolved sizes for drawing a barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodeRenderSettings {
    pub module_width: u32,
    pub height: u32,
    pub display_value: bool,
    pub orientation: Orientation,
}

impl BarcodeItem {
    pub fn symbology(&self) -> &'static str {
        self.kind.symbology()
    }

    /// Item snapshot first, then the label's `^BY`, then printer defaults.
    pub fn render_settings(&self, label: &Label) -> BarcodeRenderSettings {
        let defaults = self
            .defaults
            .or(label.barcode_defaults)
            .unwrap_or_default();

        BarcodeRenderSettings {
            module_width: defaults.module_width,
            height: self.kind.height().unwrap_or(defaults.height),
            display_value: self.kind.show_content(),
            orientation: self.kind.orientation(),
        }
    }

    /// Human readable text, with the `*` start/stop characters for Code 39.
    pub fn processed_data(&self) -> String {
        match self.kind {
            BarcodeType::Code39(_) => format!("*{}*", self.data),
            _ => self.data.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphicBoxItem {
    pub x: i32,
    pub y: i32,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub thickness: Option<u32>,
    pub color: Color,
    pub roundedness: u8,
    pub reversed: bool,
}

impl GraphicBoxItem {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            width: None,
            height: None,
            thickness: None,
            color: Color::Black,
            roundedness: 0,
            reversed: false,
        }
    }

    /// A box whose border eats the whole area is drawn filled.
    pub fn is_solid(&self) -> bool {
        let thickness = self.thickness.unwrap_or(1);
        Some(thickness) == self.width && Some(thickness) == self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraphicFieldItem {
    pub x: i32,
    pub y: i32,
    pub bitmap: MonochromeBitmap,
    pub reversed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutItem {
    Text(TextItem),
    Barcode(BarcodeItem),
    GraphicBox(GraphicBoxItem),
    GraphicField(GraphicFieldItem),
}

impl LayoutItem {
    pub fn position(&self) -> (i32, i32) {
        match self {
            LayoutItem::Text(item) => (item.x, item.y),
            LayoutItem::Barcode(item) => (item.x, item.y),
            LayoutItem::GraphicBox(item) => (item.x, item.y),
            LayoutItem::GraphicField(item) => (item.x, item.y),
        }
    }

    pub fn is_reversed(&self) -> bool {
        match self {
            LayoutItem::Text(item) => item.reversed,
            LayoutItem::Barcode(item) => item.reversed,
            LayoutItem::GraphicBox(item) => item.reversed,
            LayoutItem::GraphicField(item) => item.reversed,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LayoutItem::Text(_) => "text",
            LayoutItem::Barcode(_) => "barcode",
            LayoutItem::GraphicBox(_) => "graphic box",
            LayoutItem::GraphicField(_) => "graphic field",
        }
    }
}
