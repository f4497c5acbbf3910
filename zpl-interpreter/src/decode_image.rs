use base64::{Engine, engine::general_purpose};

use crate::error::GraphicError;

/// Largest graphic side in dots.
const MAX_DOTS: usize = 32000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonochromeBitmap {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>, // 0 = white, 1 = black
}

/// Decodes the parameters of `^GFa,b,c,d,data` into a bitmap.
///
/// ASCII hex data may use the row shorthands (`,` `!` `:`) and repeat count
/// letters. `:Z64:` and `:B64:` payloads are accepted with any compression
/// type letter.
pub fn decode_graphic_field(params: &str) -> Result<MonochromeBitmap, GraphicError> {
    let mut fields = params.splitn(5, ',');
    let (Some(compression), Some(_binary_bytes), Some(total_bytes), Some(row_bytes), Some(data)) = (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    ) else {
        return Err(GraphicError::MissingParameters);
    };

    let total_bytes = parse_count(total_bytes)?;
    let bytes_per_row = parse_count(row_bytes)?;
    if bytes_per_row == 0 {
        return Err(GraphicError::ZeroRowBytes);
    }
    let width = bytes_per_row
        .checked_mul(8)
        .filter(|width| *width <= MAX_DOTS)
        .ok_or(GraphicError::TooWide(bytes_per_row))?;
    let height = total_bytes / bytes_per_row;
    if height > MAX_DOTS {
        return Err(GraphicError::TooTall(height));
    }
    let data = data.trim();

    let packed = if let Some(encoded) = data.strip_prefix(":Z64:") {
        let compressed = decode_base64(encoded)?;
        decompress_zlib(&compressed, bytes_per_row * height)?
    } else if let Some(encoded) = data.strip_prefix(":B64:") {
        decode_base64(encoded)?
    } else {
        match compression.trim().to_ascii_uppercase().as_str() {
            "A" => decode_ascii_hex(data, bytes_per_row, height)?,
            other => return Err(GraphicError::UnsupportedCompression(other.to_string())),
        }
    };

    let pixels = expand_monochrome_bitmap(&packed, width, height, bytes_per_row)?;
    Ok(MonochromeBitmap {
        width,
        height,
        pixels,
    })
}

fn parse_count(value: &str) -> Result<usize, GraphicError> {
    value.trim().parse().map_err(|_| GraphicError::MissingParameters)
}

fn repeat_count(c: char) -> Option<usize> {
    match c {
        'G'..='Y' => Some(c as usize - 'G' as usize + 1),
        'g'..='z' => Some((c as usize - 'g' as usize + 1) * 20),
        _ => None,
    }
}

/// Expands ASCII hex graphic data into `height` rows of packed bytes.
fn decode_ascii_hex(
    data: &str,
    bytes_per_row: usize,
    height: usize,
) -> Result<Vec<u8>, GraphicError> {
    let nibbles_per_row = bytes_per_row * 2;
    let mut rows: Vec<Vec<u8>> = Vec::with_capacity(height);
    let mut row: Vec<u8> = Vec::with_capacity(nibbles_per_row);
    let mut repeat = 0;

    for c in data.chars() {
        if rows.len() >= height {
            break;
        }
        if let Some(nibble) = c.to_digit(16) {
            for _ in 0..repeat.max(1) {
                if rows.len() >= height {
                    break;
                }
                row.push(nibble as u8);
                if row.len() == nibbles_per_row {
                    rows.push(std::mem::take(&mut row));
                }
            }
            repeat = 0;
        } else if let Some(count) = repeat_count(c) {
            repeat += count;
        } else {
            match c {
                ',' => {
                    row.resize(nibbles_per_row, 0x0);
                    rows.push(std::mem::take(&mut row));
                }
                '!' => {
                    row.resize(nibbles_per_row, 0xF);
                    rows.push(std::mem::take(&mut row));
                }
                ':' => {
                    if !row.is_empty() {
                        row.resize(nibbles_per_row, 0x0);
                        rows.push(std::mem::take(&mut row));
                    }
                    let previous = rows
                        .last()
                        .cloned()
                        .unwrap_or_else(|| vec![0; nibbles_per_row]);
                    rows.push(previous);
                }
                c if c.is_whitespace() => {}
                c => return Err(GraphicError::InvalidHex(c)),
            }
            repeat = 0;
        }
    }

    if !row.is_empty() {
        row.resize(nibbles_per_row, 0x0);
        rows.push(row);
    }
    rows.resize(height, vec![0; nibbles_per_row]);

    Ok(rows
        .iter()
        .flat_map(|row| row.chunks(2).map(|pair| (pair[0] << 4) | pair[1]))
        .collect())
}

fn decode_base64(s: &str) -> Result<Vec<u8>, GraphicError> {
    // trailing ":CRC" is not part of the payload
    let payload = s.split(':').next().unwrap_or_default();
    let cleaned = payload.replace(char::is_whitespace, "");
    Ok(general_purpose::STANDARD.decode(cleaned)?)
}

/// Inflates at most `limit` bytes, the rest of the stream is never read.
fn decompress_zlib(data: &[u8], limit: usize) -> Result<Vec<u8>, GraphicError> {
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    let mut decoder = ZlibDecoder::new(data).take(limit as u64);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

fn expand_monochrome_bitmap(
    packed: &[u8],
    width: usize,
    height: usize,
    bytes_per_row: usize,
) -> Result<Vec<u8>, GraphicError> {
    let expected = bytes_per_row * height;
    if packed.len() < expected {
        return Err(GraphicError::TooSmall {
            expected,
            actual: packed.len(),
        });
    }

    let mut pixels = Vec::with_capacity(width * height);
    for row in packed[..expected].chunks(bytes_per_row) {
        for byte in row {
            for bit in 0..8 {
                pixels.push((byte >> (7 - bit)) & 1);
            }
        }
    }
    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use base64::{Engine, engine::general_purpose};
    use flate2::{Compression, write::ZlibEncoder};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ascii_hex_test() {
        let bitmap = decode_graphic_field("A,2,2,1,F081").unwrap();
        assert_eq!(bitmap.width, 8);
        assert_eq!(bitmap.height, 2);
        assert_eq!(
            bitmap.pixels,
            vec![1, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1]
        );
    }

    #[test]
    fn ascii_hex_row_shorthands_test() {
        // 2 bytes per row: "F," pads with zeros, ":" repeats, "!" pads with ones
        let packed = decode_ascii_hex("F,:8!", 2, 4).unwrap();
        assert_eq!(packed, vec![0xF0, 0x00, 0xF0, 0x00, 0x8F, 0xFF, 0x00, 0x00]);
    }

    #[test]
    fn ascii_hex_repeat_count_test() {
        // "I" repeats the next digit three times, "g" twenty times
        let packed = decode_ascii_hex("IF0", 2, 1).unwrap();
        assert_eq!(packed, vec![0xFF, 0xF0]);
        let packed = decode_ascii_hex("gF", 10, 1).unwrap();
        assert_eq!(packed, vec![0xFF; 10]);
    }

    #[test]
    fn ascii_hex_invalid_char_test() {
        let err = decode_ascii_hex("F0#", 2, 1).unwrap_err();
        assert!(matches!(err, GraphicError::InvalidHex('#')));
    }

    #[test]
    fn z64_test() {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&[0xAA, 0x55]).unwrap();
        let compressed = encoder.finish().unwrap();
        let encoded = general_purpose::STANDARD.encode(compressed);

        let bitmap = decode_graphic_field(&format!("A,2,2,1,:Z64:{encoded}:1A2B")).unwrap();
        assert_eq!(bitmap.height, 2);
        assert_eq!(
            bitmap.pixels,
            vec![1, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0, 1]
        );
    }

    #[test]
    fn b64_test() {
        let encoded = general_purpose::STANDARD.encode([0xFF]);
        let bitmap = decode_graphic_field(&format!("B,1,1,1,:B64:{encoded}:0000")).unwrap();
        assert_eq!(bitmap.pixels, vec![1; 8]);
    }

    #[test]
    fn unsupported_compression_test() {
        let err = decode_graphic_field("C,2,2,1,0000").unwrap_err();
        assert!(matches!(err, GraphicError::UnsupportedCompression(_)));
    }

    #[test]
    fn oversized_graphic_test() {
        assert!(matches!(
            decode_graphic_field("A,1,1,2305843009213693952,00").unwrap_err(),
            GraphicError::TooWide(2305843009213693952)
        ));
        assert!(matches!(
            decode_graphic_field("A,1,400000000000,1,FF").unwrap_err(),
            GraphicError::TooTall(400000000000)
        ));
        assert!(matches!(
            decode_graphic_field("A,1,4001,4001,FF").unwrap_err(),
            GraphicError::TooWide(4001)
        ));

        let bitmap = decode_graphic_field("A,1,32000,4000,").unwrap();
        assert_eq!((bitmap.width, bitmap.height), (32000, 8));
    }

    #[test]
    fn repeat_count_stops_at_last_row_test() {
        let data = format!("{}F", "z".repeat(1000));
        let packed = decode_ascii_hex(&data, 1, 2).unwrap();
        assert_eq!(packed, vec![0xFF, 0xFF]);
    }

    #[test]
    fn z64_inflates_only_the_bitmap_test() {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&[0xFF; 4096]).unwrap();
        let encoded = general_purpose::STANDARD.encode(encoder.finish().unwrap());

        let bitmap = decode_graphic_field(&format!("A,2,2,1,:Z64:{encoded}:0000")).unwrap();
        assert_eq!(bitmap.pixels, vec![1; 16]);
    }

    #[test]
    fn missing_parameters_test() {
        assert!(matches!(
            decode_graphic_field("A,2,2").unwrap_err(),
            GraphicError::MissingParameters
        ));
        assert!(matches!(
            decode_graphic_field("A,2,2,0,FF").unwrap_err(),
            GraphicError::ZeroRowBytes
        ));
    }
}
