//! Direction-aware number formatting

use super::Direction;

const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];
const ARABIC_THOUSANDS_SEPARATOR: char = '\u{066C}';
const ARABIC_DECIMAL_SEPARATOR: char = '\u{066B}';
const ARABIC_LETTER_MARK: char = '\u{061C}';
const MAX_FRACTION_DIGITS: usize = 3;
/// Magnitudes at or above this print in exponent form
const EXPONENT_ABOVE: f64 = 1e21;
/// Non-zero magnitudes below this print in exponent form
const EXPONENT_BELOW: f64 = 1e-6;

/// Format `value` for display in a document of the given direction.
///
/// LTR output is the shortest decimal form, switching to exponent form
/// (`1e+21`, `1.5e-7`) outside `[1e-6, 1e21)`. RTL output uses
/// Arabic-Indic digits with Arabic separators and at most three fraction
/// digits, matching the `ar-EG` locale.
pub fn format_number(value: f64, direction: Direction) -> String {
    match direction {
        Direction::Ltr => format_plain(value),
        Direction::Rtl => format_arabic(value),
    }
}

fn format_plain(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let name = if value > 0.0 { "Infinity" } else { "-Infinity" };
        name.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= EXPONENT_ABOVE || value.abs() < EXPONENT_BELOW {
        let scientific = format!("{value:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => scientific,
        }
    } else {
        value.to_string()
    }
}

fn format_arabic(value: f64) -> String {
    if value.is_nan() {
        return "ليس رقمًا".to_string();
    }

    let mut out = String::new();
    if value.is_infinite() {
        if value < 0.0 {
            out.push(ARABIC_LETTER_MARK);
            out.push('-');
        }
        out.push('∞');
        return out;
    }

    let rounded = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((&rounded, ""));
    let frac_part = frac_part.trim_end_matches('0');

    if value < 0.0 && !(int_part.bytes().all(|b| b == b'0') && frac_part.is_empty()) {
        out.push(ARABIC_LETTER_MARK);
        out.push('-');
    }

    let len = int_part.len();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(ARABIC_THOUSANDS_SEPARATOR);
        }
        out.push(to_arabic_indic(digit));
    }

    if !frac_part.is_empty() {
        out.push(ARABIC_DECIMAL_SEPARATOR);
        out.extend(frac_part.chars().map(to_arabic_indic));
    }

    out
}

fn to_arabic_indic(digit: char) -> char {
    digit
        .to_digit(10)
        .map(|d| ARABIC_INDIC_DIGITS[d as usize])
        .unwrap_or(digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ltr_plain() {
        assert_eq!(format_number(1234.0, Direction::Ltr), "1234");
        assert_eq!(format_number(1.5, Direction::Ltr), "1.5");
        assert_eq!(format_number(-0.0, Direction::Ltr), "0");
        assert_eq!(format_number(f64::NAN, Direction::Ltr), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY, Direction::Ltr), "-Infinity");
    }

    #[test]
    fn test_ltr_extreme_magnitudes() {
        assert_eq!(format_number(1e21, Direction::Ltr), "1e+21");
        assert_eq!(format_number(-2.5e22, Direction::Ltr), "-2.5e+22");
        assert_eq!(format_number(1e-7, Direction::Ltr), "1e-7");
        assert_eq!(format_number(1.5e-7, Direction::Ltr), "1.5e-7");
        assert_eq!(format_number(1e20, Direction::Ltr), "100000000000000000000");
        assert_eq!(format_number(0.000001, Direction::Ltr), "0.000001");
        assert_eq!(format_number(f64::MAX, Direction::Ltr), "1.7976931348623157e+308");
    }

    #[test]
    fn test_rtl_digits_and_grouping() {
        assert_eq!(format_number(0.0, Direction::Rtl), "٠");
        assert_eq!(format_number(42.0, Direction::Rtl), "٤٢");
        assert_eq!(format_number(1234.0, Direction::Rtl), "١٬٢٣٤");
        assert_eq!(format_number(1234567.0, Direction::Rtl), "١٬٢٣٤٬٥٦٧");
        assert_eq!(format_number(123.0, Direction::Rtl), "١٢٣");
    }

    #[test]
    fn test_rtl_fraction_rounding() {
        assert_eq!(format_number(3.5, Direction::Rtl), "٣٫٥");
        assert_eq!(format_number(3.14159, Direction::Rtl), "٣٫١٤٢");
        assert_eq!(format_number(2.0004, Direction::Rtl), "٢");
    }

    #[test]
    fn test_rtl_negative() {
        assert_eq!(format_number(-1234.5, Direction::Rtl), "\u{061C}-١٬٢٣٤٫٥");
        assert_eq!(format_number(-0.0001, Direction::Rtl), "٠");
    }

    #[test]
    fn test_rtl_non_finite() {
        assert_eq!(format_number(f64::INFINITY, Direction::Rtl), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY, Direction::Rtl), "\u{061C}-∞");
        assert_eq!(format_number(f64::NAN, Direction::Rtl), "ليس رقمًا");
    }
}
