use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("Byte {0:#04x} has no code page entry")]
    Unmapped(u8),
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Unsupported resolution {0} dpi. Must be 152, 203, 300 or 600")]
    Dpi(u32),
    #[error("Invalid label dimensions \"{0}\". Expected <width>x<height> in inches")]
    Dimensions(String),
    #[error("Invalid color \"{0}\". Expected #RRGGBB")]
    Color(String),
    #[error("{0} must be greater than 0")]
    NotPositive(&'static str),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("Failed to load font {0}")]
    Font(&'static str),
    #[error("Canvas of {width}x{height} pixels can not be allocated")]
    Canvas { width: u32, height: u32 },
    #[error("Barcode could not be encoded: {0}")]
    Barcode(String),
    #[error("Shape has an invalid size")]
    InvalidShape,
    #[error("Failed to encode PNG: {0}")]
    Png(String),
}
