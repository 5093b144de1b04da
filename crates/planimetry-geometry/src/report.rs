//! Report rendering.
//!
//! A figure's report line has a fixed layout:
//!
//! ```text
//! {name:<13} => Area......: {area:>12} Perimeter: {perimeter:>12}
//! ```
//!
//! Numbers always use `.` as the decimal separator and `,` to group
//! thousands, with exactly [`DECIMALS`] fractional digits, regardless of the
//! host locale.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::figures::{Figure, Planar};
use crate::kind::FigureKind;

/// Minimum width of the name column.
pub const NAME_WIDTH: usize = 13;
/// Minimum width of each numeric column.
pub const NUMBER_WIDTH: usize = 12;
/// Fractional digits printed for area and perimeter.
pub const DECIMALS: usize = 5;

/// Fractional digits in the exact decimal expansion of any finite `f64`.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Format `value` with `decimals` fractional digits and comma-grouped
/// thousands, e.g. `1234567.891` → `1,234,567.89100`.
///
/// Rounding works on the exact decimal expansion of `value`, with halfway
/// cases rounded away from zero (`0.015625` → `0.01563`).
///
/// Non-finite values render as `NaN`, `Infinity` and `-Infinity`.
pub fn format_invariant(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let (int_part, frac_part) = round_half_away(value.abs(), decimals);

    let mut out = String::with_capacity(int_part.len() * 4 / 3 + decimals + 2);
    if value < 0.0 {
        out.push('-');
    }
    let len = int_part.len();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if decimals > 0 {
        out.push('.');
        out.push_str(&frac_part);
    }
    out
}

/// Integer and fractional digits of a non-negative `value` rounded to
/// `decimals` places, halfway cases away from zero.
fn round_half_away(value: f64, decimals: usize) -> (String, String) {
    // `{:.N}` prints exact digits once N covers the whole expansion.
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS.max(decimals + 1), value);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .collect();
    let round_up = matches!(frac_part.as_bytes().get(decimals), Some(d) if *d >= b'5');
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - decimals;
    let frac = digits.split_off(split);
    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&frac).into_owned(),
    )
}

/// Render one report line from a name and its two results.
///
/// The name column is padded to [`NAME_WIDTH`] UTF-16 code units, so a
/// character outside the Basic Multilingual Plane counts as two.
pub fn report_line(name: &str, area: f64, perimeter: f64) -> String {
    let padding = NAME_WIDTH.saturating_sub(name.encode_utf16().count());
    format!(
        "{}{:padding$} => Area......: {:>num_w$} Perimeter: {:>num_w$}",
        name,
        "",
        format_invariant(area, DECIMALS),
        format_invariant(perimeter, DECIMALS),
        padding = padding,
        num_w = NUMBER_WIDTH,
    )
}

/// Computed results for one figure, suitable for JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureReport {
    pub name: String,
    pub kind: FigureKind,
    pub area: f64,
    pub perimeter: f64,
}

impl From<&Figure> for FigureReport {
    fn from(figure: &Figure) -> Self {
        Self {
            name: figure.name().to_string(),
            kind: figure.kind(),
            area: figure.area(),
            perimeter: figure.perimeter(),
        }
    }
}

impl fmt::Display for FigureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&report_line(&self.name, self.area, self.perimeter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_invariant(1234567.891, 5), "1,234,567.89100");
        assert_eq!(format_invariant(999.0, 5), "999.00000");
        assert_eq!(format_invariant(1000.0, 5), "1,000.00000");
        assert_eq!(format_invariant(100000.0, 2), "100,000.00");
    }

    #[test]
    fn test_small_and_negative_values() {
        assert_eq!(format_invariant(0.0, 5), "0.00000");
        assert_eq!(format_invariant(0.5, 5), "0.50000");
        assert_eq!(format_invariant(-1234.5, 1), "-1,234.5");
    }

    #[test]
    fn test_zero_decimals_has_no_point() {
        assert_eq!(format_invariant(1234.0, 0), "1,234");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_invariant(f64::NAN, 5), "NaN");
        assert_eq!(format_invariant(f64::INFINITY, 5), "Infinity");
        assert_eq!(format_invariant(f64::NEG_INFINITY, 5), "-Infinity");
    }

    #[test]
    fn test_halfway_rounds_away_from_zero() {
        assert_eq!(format_invariant(0.015625, 5), "0.01563");
        assert_eq!(format_invariant(0.125, 2), "0.13");
        assert_eq!(format_invariant(2.5, 0), "3");
        assert_eq!(format_invariant(-0.5, 0), "-1");
        assert_eq!(format_invariant(0.0156249, 5), "0.01562");
    }

    #[test]
    fn test_rounding_carries_into_grouping() {
        assert_eq!(format_invariant(99999.5, 0), "100,000");
        assert_eq!(format_invariant(999.999995117, 5), "1,000.00000");
    }

    #[test]
    fn test_name_padding_counts_utf16_units() {
        let emoji = report_line("\u{1F642}", 1.0, 1.0);
        assert!(emoji.starts_with(&format!("\u{1F642}{} =>", " ".repeat(11))));

        let accented = report_line("\u{e9}", 1.0, 1.0);
        assert!(accented.starts_with(&format!("\u{e9}{} =>", " ".repeat(12))));
    }

    #[test]
    fn test_report_line_layout() {
        let line = report_line("Sq", 25.0, 20.0);
        assert_eq!(
            line,
            "Sq            => Area......:     25.00000 Perimeter:     20.00000"
        );
    }

    #[test]
    fn test_long_values_overflow_column() {
        let line = report_line("Big", 123456789.0, 1.0);
        assert!(line.contains("Area......: 123,456,789.00000 Perimeter:"));
    }

    #[test]
    fn test_long_name_is_not_truncated() {
        let line = report_line("AVeryLongFigureName", 1.0, 1.0);
        assert!(line.starts_with("AVeryLongFigureName => Area"));
    }
}
