use thiserror::Error;
use zpl_parser::ParseError;

/// Why a single command could not be applied to the label.
///
/// The display text is what ends up after `Error processing command ^XX: `.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Barcode height must be between 1 and 32000 dots")]
    BarcodeHeight,
    #[error("Module width must be between 1 and 10 dots")]
    ModuleWidth,
    #[error("Wide bar to narrow bar ratio must be between 2.0 and 3.0")]
    WideBarRatio,
    #[error("Height must be greater than 0")]
    DefaultHeight,
    #[error("QR model must be 1 or 2")]
    QrModel,
    #[error("Magnification factor must be between 1 and 10")]
    QrMagnification,
    #[error("Box width must be between 1 and 32000 dots")]
    BoxWidth,
    #[error("Box height must be between 1 and 32000 dots")]
    BoxHeight,
    #[error("Border thickness must be between 1 and 32000 dots")]
    BorderThickness,
    #[error("Roundedness must be between 0 and 8")]
    Roundedness,
    #[error("Field origin coordinates must be between 0 and 32000")]
    FieldOriginOutOfRange,
    #[error("Font height and width must be between 10 and 32000 dots")]
    FontSize,
    #[error("^LH coordinates must be between 0 and 32000")]
    HomeOutOfRange,
    #[error("^LH command requires both x and y coordinates")]
    HomeIncomplete,
    #[error(transparent)]
    Graphic(#[from] GraphicError),
    #[error("Command not implemented")]
    NotImplemented,
}

#[derive(Debug, Error)]
pub enum GraphicError {
    #[error("^GF requires compression type, byte counts and data")]
    MissingParameters,
    #[error("Bytes per row must be greater than 0")]
    ZeroRowBytes,
    #[error("Graphic width must not exceed 32000 dots, got {0} bytes per row")]
    TooWide(usize),
    #[error("Graphic height must not exceed 32000 dots, got {0} rows")]
    TooTall(usize),
    #[error("Unsupported graphic compression type {0}")]
    UnsupportedCompression(String),
    #[error("Invalid character '{0}' in ASCII hex graphic data")]
    InvalidHex(char),
    #[error("Invalid base64 graphic data: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Could not inflate graphic data: {0}")]
    Inflate(#[from] std::io::Error),
    #[error("Graphic data too small: expected {expected} bytes, got {actual}")]
    TooSmall { expected: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProduceError {
    #[error("Label is not valid")]
    InvalidLabel,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Maximum ZPL length must be a positive number")]
    ZeroMaxLength,
}
