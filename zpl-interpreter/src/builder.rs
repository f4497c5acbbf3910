use log::debug;
use zpl_parser::{Color, TextBlockJustification, catalog, parse_int, split_params};

use crate::{
    barcode::{
        parse_barcode_defaults, parse_code39, parse_code128, parse_data_matrix, parse_ean13,
        parse_qr_code,
    },
    decode_image::decode_graphic_field,
    error::CommandError,
    label::{
        BarcodeItem, BarcodeType, FontSettings, GraphicBoxItem, GraphicFieldItem, Label,
        LayoutItem, TextBlockFormat, TextItem,
    },
};

pub const DEFAULT_HEX_INDICATOR: char = '_';

/// Commands the builder gives meaning to.
///
/// Everything else in the catalog maps to [`CommandKind::Unsupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    FieldOrigin,
    FieldTypeset,
    LabelHome,
    ChangeFont,
    Font,
    FieldBlock,
    FieldReverse,
    FieldHex,
    BarcodeDefaults,
    Code39,
    Code128,
    Ean13,
    QrCode,
    DataMatrix,
    FieldData,
    GraphicBox,
    GraphicField,
    FieldSeparator,
    Comment,
    Unsupported,
}

impl CommandKind {
    /// `None` when the command is not in the catalog at all.
    pub fn from_command(command: &str) -> Option<Self> {
        if !catalog::has(command) {
            return None;
        }

        let kind = match command {
            "^FO" => CommandKind::FieldOrigin,
            "^FT" => CommandKind::FieldTypeset,
            "^LH" => CommandKind::LabelHome,
            "^CF" => CommandKind::ChangeFont,
            "^A" => CommandKind::Font,
            "^FB" => CommandKind::FieldBlock,
            "^FR" => CommandKind::FieldReverse,
            "^FH" => CommandKind::FieldHex,
            "^BY" => CommandKind::BarcodeDefaults,
            "^B3" => CommandKind::Code39,
            "^BC" => CommandKind::Code128,
            "^BE" => CommandKind::Ean13,
            "^BQ" => CommandKind::QrCode,
            "^BX" => CommandKind::DataMatrix,
            "^FD" => CommandKind::FieldData,
            "^GB" => CommandKind::GraphicBox,
            "^GF" => CommandKind::GraphicField,
            "^FS" => CommandKind::FieldSeparator,
            "^FX" => CommandKind::Comment,
            _ => CommandKind::Unsupported,
        };
        Some(kind)
    }
}

/// Mutable state of a single parse pass.
#[derive(Debug, Default)]
pub struct LabelBuilder {
    label: Label,
    /// Set by `^FO`/`^FT`, fields before the first one sit at the home offset.
    cursor: Option<(i32, i32)>,
    field_font: Option<FontSettings>,
    block_format: Option<TextBlockFormat>,
    reverse: bool,
    hex_indicator: Option<char>,
    pending_barcode: Option<BarcodeType>,
}

fn coordinate(value: &str) -> Result<Option<i32>, CommandError> {
    match parse_int(value) {
        None => Ok(None),
        Some(value @ 0..=32000) => Ok(Some(value as i32)),
        Some(_) => Err(CommandError::FieldOriginOutOfRange),
    }
}

/// `0` or an empty field leave the size unset.
fn font_dimension(value: Option<&&str>) -> Result<Option<u32>, CommandError> {
    match value.and_then(|value| parse_int(value)) {
        None | Some(0) => Ok(None),
        Some(value @ 10..=32000) => Ok(Some(value as u32)),
        Some(_) => Err(CommandError::FontSize),
    }
}

fn box_dimension(value: &str, error: CommandError) -> Result<u32, CommandError> {
    match parse_int(value) {
        Some(value @ 1..=32000) => Ok(value as u32),
        _ => Err(error),
    }
}

impl LabelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self) -> (i32, i32) {
        self.cursor.unwrap_or(self.label.home_position)
    }

    pub fn apply(&mut self, kind: CommandKind, params: &str) -> Result<(), CommandError> {
        debug!("applying {kind:?} with {params:?}");
        match kind {
            CommandKind::FieldOrigin | CommandKind::FieldTypeset => self.field_origin(params),
            CommandKind::LabelHome => self.label_home(params),
            CommandKind::ChangeFont => self.change_font(params),
            CommandKind::Font => self.field_font(params),
            CommandKind::FieldBlock => self.field_block(params),
            CommandKind::FieldReverse => {
                self.reverse = true;
                Ok(())
            }
            CommandKind::FieldHex => {
                self.hex_indicator = Some(params.chars().next().unwrap_or(DEFAULT_HEX_INDICATOR));
                Ok(())
            }
            CommandKind::BarcodeDefaults => {
                self.label.barcode_defaults = Some(parse_barcode_defaults(params)?);
                Ok(())
            }
            CommandKind::Code39 => self.barcode(BarcodeType::Code39(parse_code39(params)?)),
            CommandKind::Code128 => self.barcode(BarcodeType::Code128(parse_code128(params)?)),
            CommandKind::Ean13 => self.barcode(BarcodeType::Ean13(parse_ean13(params)?)),
            CommandKind::QrCode => self.barcode(BarcodeType::QrCode(parse_qr_code(params)?)),
            CommandKind::DataMatrix => {
                self.barcode(BarcodeType::DataMatrix(parse_data_matrix(params)?))
            }
            CommandKind::FieldData => self.field_data(params),
            CommandKind::GraphicBox => self.graphic_box(params),
            CommandKind::GraphicField => self.graphic_field(params),
            CommandKind::FieldSeparator => {
                self.field_font = None;
                self.block_format = None;
                Ok(())
            }
            CommandKind::Comment => Ok(()),
            CommandKind::Unsupported => Err(CommandError::NotImplemented),
        }
    }

    pub fn finish(self) -> Label {
        self.label
    }

    fn field_origin(&mut self, params: &str) -> Result<(), CommandError> {
        let params = split_params(params);
        if params.len() < 2 {
            return Ok(());
        }
        let (home_x, home_y) = self.label.home_position;
        let (x, y) = self.position();
        let x = coordinate(params[0])?.map_or(x, |x| home_x + x);
        let y = coordinate(params[1])?.map_or(y, |y| home_y + y);
        self.cursor = Some((x, y));
        Ok(())
    }

    fn label_home(&mut self, params: &str) -> Result<(), CommandError> {
        let params = split_params(params);
        if params.len() < 2 {
            return Err(CommandError::HomeIncomplete);
        }
        match (parse_int(params[0]), parse_int(params[1])) {
            (Some(x @ 0..=32000), Some(y @ 0..=32000)) => {
                self.label.home_position = (x as i32, y as i32);
                Ok(())
            }
            _ => Err(CommandError::HomeOutOfRange),
        }
    }

    fn change_font(&mut self, params: &str) -> Result<(), CommandError> {
        let params = split_params(params);
        let name = params
            .first()
            .filter(|name| !name.is_empty())
            .map(|name| name.to_string())
            .unwrap_or_else(|| self.label.default_font.name.clone());

        // ^CF changes the label default, later fields pick it up
        self.label.default_font = FontSettings {
            name,
            orientation: self.label.default_font.orientation,
            height: font_dimension(params.get(1))?,
            width: font_dimension(params.get(2))?,
        };
        Ok(())
    }

    fn field_font(&mut self, params: &str) -> Result<(), CommandError> {
        let params = split_params(params);
        let mut font = self.label.default_font.clone();

        // first field is the font name glued to the orientation, e.g. "0N"
        if let Some(name_orientation) = params.first() {
            let mut chars = name_orientation.chars();
            if let Some(name) = chars.next() {
                font.name = name.to_string();
            }
            let orientation = chars.as_str();
            if !orientation.is_empty() {
                font.orientation = orientation.parse()?;
            }
        }
        if params.get(1).is_some_and(|h| parse_int(h).is_some()) {
            font.height = font_dimension(params.get(1))?;
        }
        if params.get(2).is_some_and(|w| parse_int(w).is_some()) {
            font.width = font_dimension(params.get(2))?;
        }

        self.field_font = Some(font);
        Ok(())
    }

    fn field_block(&mut self, params: &str) -> Result<(), CommandError> {
        let params = split_params(params);
        let mut format = TextBlockFormat::default();

        if let Some(width) = params.first().and_then(|w| parse_int(w)) {
            format.width = width.clamp(0, 32000) as u32;
        }
        if let Some(lines) = params.get(1).and_then(|l| parse_int(l)) {
            format.max_lines = lines.clamp(1, 9999) as u32;
        }
        if let Some(spacing) = params.get(2).and_then(|s| parse_int(s)) {
            format.line_spacing = spacing.clamp(-9999, 9999) as i32;
        }
        if let Some(justification) = params.get(3) {
            format.justification = TextBlockJustification::from_param(justification);
        }
        if let Some(indent) = params.get(4).and_then(|i| parse_int(i)) {
            format.hanging_indent = indent.clamp(0, 9999) as u32;
        }

        self.block_format = Some(format);
        Ok(())
    }

    fn barcode(&mut self, kind: BarcodeType) -> Result<(), CommandError> {
        self.pending_barcode = Some(kind);
        Ok(())
    }

    fn field_data(&mut self, data: &str) -> Result<(), CommandError> {
        let (x, y) = self.position();
        let item = match self.pending_barcode.take() {
            Some(kind) => LayoutItem::Barcode(BarcodeItem {
                x,
                y,
                data: data.to_string(),
                kind,
                defaults: self.label.barcode_defaults,
                reversed: self.reverse,
                hex_indicator: self.hex_indicator,
            }),
            None => LayoutItem::Text(TextItem {
                x,
                y,
                data: data.to_string(),
                font: self.field_font.clone().unwrap_or_else(|| self.label.default_font.clone()),
                block_format: self.block_format,
                reversed: self.reverse,
                hex_indicator: self.hex_indicator,
            }),
        };

        debug!("adding {} at ({x}, {y})", item.kind());
        self.label.items.push(item);
        self.reverse = false;
        self.hex_indicator = None;
        Ok(())
    }

    fn graphic_box(&mut self, params: &str) -> Result<(), CommandError> {
        let params = split_params(params);
        let field = |index: usize| params.get(index).copied().filter(|v| !v.is_empty());
        let (x, y) = self.position();
        let mut item = GraphicBoxItem::new(x, y);

        if let Some(width) = field(0) {
            item.width = Some(box_dimension(width, CommandError::BoxWidth)?);
        }
        if let Some(height) = field(1) {
            item.height = Some(box_dimension(height, CommandError::BoxHeight)?);
        }
        if let Some(thickness) = field(2) {
            item.thickness = Some(box_dimension(thickness, CommandError::BorderThickness)?);
        }
        if let Some(color) = field(3) {
            item.color = color.parse::<Color>()?;
        }
        if let Some(roundedness) = field(4) {
            item.roundedness = match parse_int(roundedness) {
                Some(value @ 0..=8) => value as u8,
                _ => return Err(CommandError::Roundedness),
            };
        }

        item.reversed = std::mem::take(&mut self.reverse);
        debug!("adding graphic box at ({}, {})", item.x, item.y);
        self.label.items.push(LayoutItem::GraphicBox(item));
        Ok(())
    }

    fn graphic_field(&mut self, params: &str) -> Result<(), CommandError> {
        let bitmap = decode_graphic_field(params)?;
        let (x, y) = self.position();
        let item = GraphicFieldItem {
            x,
            y,
            bitmap,
            reversed: std::mem::take(&mut self.reverse),
        };
        debug!(
            "adding {}x{} graphic field at ({}, {})",
            item.bitmap.width, item.bitmap.height, item.x, item.y
        );
        self.label.items.push(LayoutItem::GraphicField(item));
        Ok(())
    }
}
