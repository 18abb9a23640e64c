//! Inspection report rendering.
//!
//! Parses an input literal into a [`PointValue`], writes it into a zeroed
//! [`PointCell`] and renders both interpretations of the resulting storage.

use log::debug;

use svgbird_core::{PointCell, PointValue};

use crate::{
    SvgbirdError,
    args::InputKind,
    config::{Radix, ReportConfig},
};

/// Parse an input literal under the requested interpretation.
///
/// Floats accept anything [`f64::from_str`](std::str::FromStr) does. Tags
/// accept decimal or `0x`-prefixed hexadecimal.
///
/// # Errors
///
/// Returns [`SvgbirdError::Input`] if the literal is not valid for `kind`.
pub fn parse_input(input: &str, kind: InputKind) -> Result<PointValue, SvgbirdError> {
    let trimmed = input.trim();
    match kind {
        InputKind::Value => trimmed
            .parse::<f64>()
            .map(PointValue::Value)
            .map_err(|e| SvgbirdError::new_input_error(input, e)),
        InputKind::Type => {
            let (digits, radix) = match trimmed
                .strip_prefix("0x")
                .or_else(|| trimmed.strip_prefix("0X"))
            {
                Some(hex) => (hex, 16),
                None => (trimmed, 10),
            };

            // from_str_radix accepts a leading `+`
            if !digits.starts_with(|c: char| c.is_ascii_hexdigit()) {
                return Err(SvgbirdError::new_input_error(
                    input,
                    "expected decimal or 0x-prefixed hexadecimal digits",
                ));
            }

            u32::from_str_radix(digits, radix)
                .map(PointValue::Type)
                .map_err(|e| SvgbirdError::new_input_error(input, e))
        }
    }
}

/// Render the report for a point value written into a zeroed cell.
pub fn render(point: PointValue, config: &ReportConfig) -> String {
    let cell = PointCell::from(point);

    debug!(point:% = point, bits = cell.bits(); "Rendering cell report");

    let bytes = cell
        .to_le_bytes()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "written: {} {}\n\
         bytes:   {bytes}\n\
         bits:    {}\n\
         value:   {}\n\
         type:    {}\n",
        point.kind(),
        format_point(point, config),
        format_bits(cell.bits(), config.radix),
        format_float(cell.value(), config.precision),
        format_tag(cell.type_bits(), config.radix),
    )
}

fn format_point(point: PointValue, config: &ReportConfig) -> String {
    match point {
        PointValue::Value(value) => format_float(value, config.precision),
        PointValue::Type(tag) => format_tag(tag, config.radix),
    }
}

fn format_float(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(precision) => format!("{value:.precision$}"),
        None => format!("{value:?}"),
    }
}

fn format_bits(bits: u64, radix: Radix) -> String {
    match radix {
        Radix::Hex => format!("{bits:#018x}"),
        Radix::Decimal => bits.to_string(),
    }
}

fn format_tag(tag: u32, radix: Radix) -> String {
    match radix {
        Radix::Hex => format!("{tag:#010x}"),
        Radix::Decimal => tag.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        assert_eq!(
            parse_input("1.5", InputKind::Value).unwrap(),
            PointValue::Value(1.5)
        );
        assert_eq!(
            parse_input(" -2 ", InputKind::Value).unwrap(),
            PointValue::Value(-2.0)
        );
    }

    #[test]
    fn test_parse_tag_decimal_and_hex() {
        assert_eq!(
            parse_input("42", InputKind::Type).unwrap(),
            PointValue::Type(42)
        );
        assert_eq!(
            parse_input("0xFF", InputKind::Type).unwrap(),
            PointValue::Type(255)
        );
        assert_eq!(
            parse_input("0XdeadBEEF", InputKind::Type).unwrap(),
            PointValue::Type(0xDEAD_BEEF)
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            parse_input("abc", InputKind::Value),
            Err(SvgbirdError::Input { .. })
        ));
        assert!(matches!(
            parse_input("1.5", InputKind::Type),
            Err(SvgbirdError::Input { .. })
        ));
        assert!(matches!(
            parse_input("4294967296", InputKind::Type),
            Err(SvgbirdError::Input { .. })
        ));
        assert!(matches!(
            parse_input("-1", InputKind::Type),
            Err(SvgbirdError::Input { .. })
        ));
        assert!(matches!(
            parse_input("+7", InputKind::Type),
            Err(SvgbirdError::Input { .. })
        ));
        assert!(matches!(
            parse_input("0x+ff", InputKind::Type),
            Err(SvgbirdError::Input { .. })
        ));
        assert!(matches!(
            parse_input("0x-1", InputKind::Type),
            Err(SvgbirdError::Input { .. })
        ));
        assert!(matches!(
            parse_input("0x", InputKind::Type),
            Err(SvgbirdError::Input { .. })
        ));
    }

    #[test]
    fn test_render_value_hex() {
        let report = render(PointValue::value(1.5), &ReportConfig::default());
        assert_eq!(
            report,
            "written: value 1.5\n\
             bytes:   00 00 00 00 00 00 f8 3f\n\
             bits:    0x3ff8000000000000\n\
             value:   1.5\n\
             type:    0x00000000\n"
        );
    }

    #[test]
    fn test_render_tag_decimal() {
        let config = ReportConfig {
            radix: Radix::Decimal,
            precision: None,
        };
        let report = render(PointValue::tag(1), &config);
        assert_eq!(
            report,
            "written: type 1\n\
             bytes:   01 00 00 00 00 00 00 00\n\
             bits:    1\n\
             value:   5e-324\n\
             type:    1\n"
        );
    }

    #[test]
    fn test_render_with_precision() {
        let config = ReportConfig {
            radix: Radix::Hex,
            precision: Some(2),
        };
        let report = render(PointValue::value(0.1), &config);
        assert!(report.starts_with("written: value 0.10\n"));
        assert!(report.contains("value:   0.10\n"));
        assert!(report.contains("type:    0x9999999a\n"));
    }

    #[test]
    fn test_render_special_floats() {
        let config = ReportConfig::default();

        let report = render(PointValue::value(-0.0), &config);
        assert!(report.contains("bits:    0x8000000000000000\n"));
        assert!(report.contains("value:   -0.0\n"));

        let report = render(PointValue::value(f64::INFINITY), &config);
        assert!(report.contains("value:   inf\n"));

        let report = render(PointValue::value(f64::NAN), &config);
        assert!(report.contains("value:   NaN\n"));

        let report = render(PointValue::tag(u32::MAX), &config);
        assert!(report.contains("bits:    0x00000000ffffffff\n"));
        assert!(report.contains("type:    0xffffffff\n"));
    }
}
