//! Parameter parsing for the barcode commands.
//!
//! Every reader starts from the command's defaults and only overrides a value
//! when its field is present and not blank.

use zpl_parser::{Code128Mode, Orientation, parse_float, parse_int, split_params, yes_no};

use crate::{
    error::CommandError,
    label::{
        BarcodeDefaults, Code39Options, Code128Options, DataMatrixOptions, Ean13Options,
        QrCodeOptions,
    },
};

fn field<'a>(params: &[&'a str], index: usize) -> Option<&'a str> {
    params.get(index).copied().filter(|value| !value.is_empty())
}

fn barcode_height(value: &str) -> Result<u32, CommandError> {
    match parse_int(value) {
        Some(height @ 1..=32000) => Ok(height as u32),
        _ => Err(CommandError::BarcodeHeight),
    }
}

/// `^B3o,e,h,f,g`
pub fn parse_code39(params: &str) -> Result<Code39Options, CommandError> {
    let params = split_params(params);
    let mut options = Code39Options::default();

    if let Some(orientation) = field(&params, 0) {
        options.orientation = orientation.parse()?;
    }
    if let Some(check_digit) = field(&params, 1) {
        options.mod43_check_digit = yes_no(check_digit);
    }
    if let Some(height) = field(&params, 2) {
        options.height = Some(barcode_height(height)?);
    }
    if let Some(line) = field(&params, 3) {
        options.print_interpretation_line = yes_no(line);
    }
    if let Some(above) = field(&params, 4) {
        options.interpretation_line_above = yes_no(above);
    }

    Ok(options)
}

/// `^BCo,h,f,g,e,m`
pub fn parse_code128(params: &str) -> Result<Code128Options, CommandError> {
    let params = split_params(params);
    let mut options = Code128Options::default();

    if let Some(orientation) = field(&params, 0) {
        options.orientation = orientation.parse()?;
    }
    if let Some(height) = field(&params, 1) {
        options.height = Some(barcode_height(height)?);
    }
    if let Some(line) = field(&params, 2) {
        options.print_interpretation_line = yes_no(line);
    }
    if let Some(above) = field(&params, 3) {
        options.interpretation_line_above = yes_no(above);
    }
    if let Some(check_digit) = field(&params, 4) {
        options.ucc_check_digit = yes_no(check_digit);
    }
    if let Some(mode) = field(&params, 5) {
        options.mode = mode.parse::<Code128Mode>()?;
    }

    Ok(options)
}

/// `^BEo,h,f,g`
pub fn parse_ean13(params: &str) -> Result<Ean13Options, CommandError> {
    let params = split_params(params);
    let mut options = Ean13Options::default();

    if let Some(orientation) = field(&params, 0) {
        options.orientation = orientation.parse()?;
    }
    if let Some(height) = field(&params, 1) {
        options.height = Some(barcode_height(height)?);
    }
    if let Some(line) = field(&params, 2) {
        options.print_interpretation_line = yes_no(line);
    }
    if let Some(above) = field(&params, 3) {
        options.interpretation_line_above = yes_no(above);
    }

    Ok(options)
}

/// `^BQa,b,c`. The orientation field only accepts what `^FW` would.
pub fn parse_qr_code(params: &str) -> Result<QrCodeOptions, CommandError> {
    let params = split_params(params);
    let mut options = QrCodeOptions::default();

    if let Some(orientation) = field(&params, 0) {
        options.orientation = orientation.parse::<Orientation>()?;
    }
    if let Some(model) = field(&params, 1) {
        options.model = match parse_int(model) {
            Some(1) => 1,
            Some(2) => 2,
            _ => return Err(CommandError::QrModel),
        };
    }
    if let Some(magnification) = field(&params, 2) {
        options.magnification = match parse_int(magnification) {
            Some(factor @ 1..=10) => Some(factor as u32),
            _ => return Err(CommandError::QrMagnification),
        };
    }

    Ok(options)
}

/// `^BXo,h,...`, only orientation and element height are read.
pub fn parse_data_matrix(params: &str) -> Result<DataMatrixOptions, CommandError> {
    let params = split_params(params);
    let mut options = DataMatrixOptions::default();

    if let Some(orientation) = field(&params, 0) {
        options.orientation = orientation.parse()?;
    }
    if let Some(height) = field(&params, 1) {
        options.height = Some(barcode_height(height)?);
    }

    Ok(options)
}

/// `^BYw,r,h`
pub fn parse_barcode_defaults(params: &str) -> Result<BarcodeDefaults, CommandError> {
    let params = split_params(params);
    let mut defaults = BarcodeDefaults::default();

    if let Some(width) = field(&params, 0) {
        defaults.module_width = match parse_int(width) {
            Some(width @ 1..=10) => width as u32,
            _ => return Err(CommandError::ModuleWidth),
        };
    }
    if let Some(ratio) = field(&params, 1) {
        defaults.wide_bar_ratio = match parse_float(ratio) {
            Some(ratio) if (2.0..=3.0).contains(&ratio) => ratio,
            _ => return Err(CommandError::WideBarRatio),
        };
    }
    if let Some(height) = field(&params, 2) {
        defaults.height = match parse_int(height) {
            Some(height) if height > 0 => u32::try_from(height).unwrap_or(u32::MAX),
            _ => return Err(CommandError::DefaultHeight),
        };
    }

    Ok(defaults)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_code39_test() {
        let options = parse_code39("N,N,50,Y,N").unwrap();
        assert_eq!(
            options,
            Code39Options {
                orientation: Orientation::Normal,
                mod43_check_digit: false,
                height: Some(50),
                print_interpretation_line: true,
                interpretation_line_above: false,
            }
        );
        assert_eq!(parse_code39("").unwrap(), Code39Options::default());
    }

    #[test]
    fn parse_code39_height_out_of_range_test() {
        let err = parse_code39("N,N,40000,Y,N").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Barcode height must be between 1 and 32000 dots"
        );
        assert!(parse_code39("N,N,0").is_err());
        assert!(parse_code39("N,N,abc").is_err());
    }

    #[test]
    fn parse_code128_test() {
        let options = parse_code128("R,100,N,Y,Y,D").unwrap();
        assert_eq!(
            options,
            Code128Options {
                orientation: Orientation::Rotate,
                height: Some(100),
                print_interpretation_line: false,
                interpretation_line_above: true,
                ucc_check_digit: true,
                mode: Code128Mode::Ean,
            }
        );
    }

    #[test]
    fn parse_code128_blank_test() {
        let options = parse_code128("").unwrap();
        assert_eq!(options.mode, Code128Mode::Auto);
        assert_eq!(options.height, None);
        assert!(options.print_interpretation_line);
    }

    #[test]
    fn parse_code128_invalid_values_test() {
        assert_eq!(
            parse_code128("X").unwrap_err().to_string(),
            "Invalid orientation value. Must be N, R, I, or B"
        );
        assert_eq!(
            parse_code128("N,50,Y,N,N,Q").unwrap_err().to_string(),
            "Invalid Code 128 mode. Must be N, U, A, or D"
        );
    }

    #[test]
    fn parse_ean13_test() {
        let options = parse_ean13("N,50,Y,N").unwrap();
        assert_eq!(options.height, Some(50));
        assert!(!options.interpretation_line_above);
    }

    #[test]
    fn parse_qr_code_test() {
        let options = parse_qr_code("N,2,5").unwrap();
        assert_eq!(options.model, 2);
        assert_eq!(options.magnification, Some(5));
        assert!(matches!(parse_qr_code("N,3"), Err(CommandError::QrModel)));
        assert!(matches!(
            parse_qr_code("N,2,11"),
            Err(CommandError::QrMagnification)
        ));
    }

    #[test]
    fn parse_data_matrix_test() {
        let options = parse_data_matrix("N,8").unwrap();
        assert_eq!(options.height, Some(8));
    }

    #[test]
    fn parse_barcode_defaults_test() {
        assert_eq!(
            parse_barcode_defaults("5,2,270").unwrap(),
            BarcodeDefaults {
                module_width: 5,
                wide_bar_ratio: 2.0,
                height: 270,
            }
        );
        assert_eq!(
            parse_barcode_defaults("3").unwrap(),
            BarcodeDefaults {
                module_width: 3,
                ..Default::default()
            }
        );
        assert!(matches!(
            parse_barcode_defaults("11"),
            Err(CommandError::ModuleWidth)
        ));
        assert!(matches!(
            parse_barcode_defaults("2,3.5"),
            Err(CommandError::WideBarRatio)
        ));
        assert!(matches!(
            parse_barcode_defaults("2,3,0"),
            Err(CommandError::DefaultHeight)
        ));
    }
}
