use std::str::FromStr;

use crate::error::{ParseError, ParseErrorKind};

/// One command of a ZPL stream together with the raw text that follows it.
///
/// Both fields borrow from the scanned input. `params` runs up to (not
/// including) the next `^` or `~` and is not trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub command: &'a str,
    pub params: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(command: &'a str, params: &'a str) -> Self {
        Self { command, params }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Normal, // 0°
    Rotate,     // 90°
    Invert,     // 180°
    BackRotate, // 270°
}

impl Orientation {
    /// Clockwise rotation in degrees.
    pub fn degrees(&self) -> f32 {
        match self {
            Orientation::Normal => 0.,
            Orientation::Rotate => 90.,
            Orientation::Invert => 180.,
            Orientation::BackRotate => 270.,
        }
    }
}

impl FromStr for Orientation {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "N" => Ok(Orientation::Normal),
            "R" => Ok(Orientation::Rotate),
            "I" => Ok(Orientation::Invert),
            "B" => Ok(Orientation::BackRotate),
            _ => Err(ParseError::new(ParseErrorKind::InvalidOrientation)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Black,
    White,
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "B" => Ok(Self::Black),
            "W" => Ok(Self::White),
            _ => Err(ParseError::new(ParseErrorKind::InvalidColor)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Code128Mode {
    Normal,
    Ucc,
    #[default]
    Auto,
    Ean,
}

impl FromStr for Code128Mode {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "N" => Ok(Code128Mode::Normal),
            "U" => Ok(Code128Mode::Ucc),
            "A" => Ok(Code128Mode::Auto),
            "D" => Ok(Code128Mode::Ean),
            _ => Err(ParseError::new(ParseErrorKind::InvalidCode128Mode)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBlockJustification {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

impl TextBlockJustification {
    /// Unknown values fall back to left, as printers do.
    pub fn from_param(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "C" => Self::Center,
            "R" => Self::Right,
            "J" => Self::Justified,
            _ => Self::Left,
        }
    }
}

/// `Y` (any case) is yes, everything else is no.
pub fn yes_no(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("Y")
}
