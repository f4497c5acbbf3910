//! Zebra code page 850 emulation.
//!
//! Printers interpret field data byte by byte, so UTF-8 input shows up as the
//! code page glyph of each of its bytes (`é` prints as `├®`).

use zpl_interpreter::DEFAULT_HEX_INDICATOR;

use crate::error::EncodeError;

const CODE_PAGE_850: [&str; 256] = [
    "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", "", // 0x00
    "", "", "", "", "", "", "", "", "", "", "0", "⅓", "⅔", "Ĳ", "ĳ", "\\", // 0x10
    " ", "!", "\"", "#", "$", "%", "&", "'", "(", ")", "*", "+", ",", "-", ".", "/", // 0x20
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ":", ";", "<", "=", ">", "?", // 0x30
    "@", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", // 0x40
    "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z", "[", "\\", "]", "^", "_", // 0x50
    "`", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", // 0x60
    "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z", "{", "|", "}", "~", "⌂", // 0x70
    "Ç", "ü", "é", "â", "ä", "à", "å", "ç", "ê", "ë", "è", "ï", "î", "ì", "Ä", "Å", // 0x80
    "É", "æ", "Æ", "ô", "ö", "ò", "û", "ù", "ÿ", "Ö", "Ü", "ø", "£", "Ø", "×", "ƒ", // 0x90
    "á", "í", "ó", "ú", "ñ", "Ñ", "ª", "º", "¿", "®", "¬", "½", "¼", "¡", "«", "»", // 0xa0
    "░", "▒", "▓", "│", "┤", "Á", "Â", "À", "©", "╣", "║", "╗", "╝", "¢", "¥", "┐", // 0xb0
    "└", "┴", "┬", "├", "─", "┼", "ã", "Ã", "╚", "╔", "╩", "╦", "╠", "═", "╬", "¤", // 0xc0
    "ð", "Ð", "Ê", "Ë", "È", "i", "Í", "Î", "Ï", "┘", "┌", "█", "▄", "¦", "Ì", "▀", // 0xd0
    "Ó", "ß", "Ô", "Ò", "õ", "Õ", "µ", "þ", "Þ", "Ú", "Û", "Ù", "ý", "Ý", "¯", "´", // 0xe0
    "-", "Ð", "±", "¾", "¶", "§", "÷", "¸", "°", "¨", "·", "¹", "³", "²", "■", " ", // 0xf0
];

fn lookup(byte: u8) -> Result<&'static str, EncodeError> {
    CODE_PAGE_850
        .get(byte as usize)
        .copied()
        .ok_or(EncodeError::Unmapped(byte))
}

fn map_bytes(bytes: &[u8]) -> Result<String, EncodeError> {
    bytes.iter().try_fold(String::new(), |mut out, byte| {
        out.push_str(lookup(*byte)?);
        Ok(out)
    })
}

/// Translates field data into the glyphs a printer would show.
///
/// With `hex_mode` set, `_` followed by two hex digits stands for a single
/// byte, as with `^FH`.
pub fn encode(text: &str, hex_mode: bool) -> Result<String, EncodeError> {
    if hex_mode {
        encode_with_indicator(text, DEFAULT_HEX_INDICATOR)
    } else {
        map_bytes(text.as_bytes())
    }
}

/// Hex mode encoding with a custom escape character.
pub fn encode_with_indicator(text: &str, indicator: char) -> Result<String, EncodeError> {
    let mut bytes = Vec::with_capacity(text.len());
    let mut chars = text.chars();
    let mut buf = [0; 4];

    while let Some(c) = chars.next() {
        if c == indicator {
            let mut lookahead = chars.clone();
            if let (Some(high), Some(low)) = (
                lookahead.next().and_then(|c| c.to_digit(16)),
                lookahead.next().and_then(|c| c.to_digit(16)),
            ) {
                bytes.push(((high << 4) | low) as u8);
                chars = lookahead;
                continue;
            }
        }
        bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }

    map_bytes(&bytes)
}

/// Maps every UTF-8 byte to the char with the same code point.
pub fn raw_encode(text: &str) -> String {
    text.bytes().map(char::from).collect()
}

pub fn character_codes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ascii_passes_through_test() {
        assert_eq!(encode("Hello, World! 123", false).unwrap(), "Hello, World! 123");
    }

    #[test]
    fn multibyte_input_test() {
        assert_eq!(encode("é", false).unwrap(), "├®");
        assert_eq!(encode("Ü", false).unwrap(), "├£");
    }

    #[test]
    fn control_bytes_are_dropped_test() {
        assert_eq!(encode("a\tb\nc", false).unwrap(), "abc");
        assert_eq!(encode("\u{1f}", false).unwrap(), "\\");
    }

    #[test]
    fn hex_mode_test() {
        assert_eq!(encode("_81", true).unwrap(), "ü");
        assert_eq!(encode("Price _9C5", true).unwrap(), "Price £5");
        assert_eq!(encode("_C3_A9", true).unwrap(), "├®");
    }

    #[test]
    fn hex_mode_incomplete_escape_test() {
        assert_eq!(encode("50_", true).unwrap(), "50_");
        assert_eq!(encode("_G1", true).unwrap(), "_G1");
        assert_eq!(encode("_8", true).unwrap(), "_8");
    }

    #[test]
    fn custom_indicator_test() {
        assert_eq!(encode_with_indicator("#81_81", '#').unwrap(), "ü_81");
    }

    #[test]
    fn non_hex_mode_keeps_escapes_test() {
        assert_eq!(encode("_81", false).unwrap(), "_81");
    }

    #[test]
    fn raw_encode_test() {
        assert_eq!(raw_encode("é"), "\u{c3}\u{a9}");
        assert_eq!(character_codes("é"), vec![0xC3, 0xA9]);
    }

    #[test]
    fn table_is_complete_test() {
        assert!((0..=255u8).all(|byte| lookup(byte).is_ok()));
        assert_eq!(lookup(0x7F).unwrap(), "⌂");
        assert_eq!(lookup(0x1A).unwrap(), "0");
    }
}
