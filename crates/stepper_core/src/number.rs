//! Numeric helpers with browser-compatible semantics.
//!
//! Numeric inputs store their value and constraints as strings. These helpers
//! parse and format them the way the browser does (lenient prefix parsing,
//! fixed-point formatting with ties rounded away from zero) so a stepped value
//! looks exactly like one produced by the platform itself.

/// Parse the longest numeric prefix of `text`, ignoring leading whitespace.
///
/// Returns `None` when no digits can be read at all.
///
/// ```
/// use stepper_core::number::parse_float;
///
/// assert_eq!(parse_float("12px"), Some(12.0));
/// assert_eq!(parse_float("  .5"), Some(0.5));
/// assert_eq!(parse_float("abc"), None);
/// ```
pub fn parse_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // The exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Number of fractional digits needed to display multiples of `step`.
///
/// Whole steps need none; otherwise this counts the digits after the point in
/// the shortest decimal rendering of `step` (`0.25` -> 2, `0.1` -> 1).
pub fn decimal_places(step: f64) -> usize {
    if !step.is_finite() || step.fract() == 0.0 {
        return 0;
    }

    let rendered = step.to_string();
    rendered
        .find('.')
        .map_or(0, |point| rendered.len() - point - 1)
}

/// Format `value` with exactly `places` fractional digits.
///
/// Differs from `format!("{:.*}")` in two ways: a value sitting exactly halfway
/// between two candidates rounds away from zero (`2.5` -> `"3"`), and negative
/// zero renders as `"0"`.
pub fn to_fixed(value: f64, places: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return format!("{:.*}", places, 0.0);
    }

    if is_exact_tie(value, places) {
        return round_tie_away_from_zero(value, places);
    }

    format!("{:.*}", places, value)
}

/// Round an exact tie to the candidate with the larger magnitude.
///
/// One extra digit renders a tie exactly, ending in `5`; that digit is dropped
/// and the remaining digits are incremented with carry.
fn round_tie_away_from_zero(value: f64, places: usize) -> String {
    let exact = format!("{:.*}", places + 1, value.abs());
    let mut digits = exact.into_bytes();
    digits.pop();
    if places == 0 {
        digits.pop(); // the point
    }

    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        match *digit {
            b'.' => continue,
            b'9' => *digit = b'0',
            _ => {
                *digit += 1;
                carry = false;
                break;
            }
        }
    }

    let mut text = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        text.push('-');
    }
    if carry {
        text.push('1');
    }
    text.extend(digits.into_iter().map(char::from));
    text
}

/// Whether `value` lies exactly halfway between two `places`-digit decimals.
///
/// With `value = m * 2^e` (m odd), `value * 10^places * 2` is an odd integer
/// exactly when `e == -(places + 1)`.
fn is_exact_tie(value: f64, places: usize) -> bool {
    let bits = value.to_bits();
    let exponent_bits = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);

    let (mantissa, exponent) = if exponent_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exponent_bits - 1075)
    };

    if mantissa == 0 {
        return false;
    }

    let Ok(places) = i64::try_from(places) else {
        return false;
    };

    exponent + i64::from(mantissa.trailing_zeros()) == -(places + 1)
}

/// Drop a fractional part made only of zeros: `"3.00"` -> `"3"`.
///
/// Only a separator (`.` or `,`) directly followed by zeros up to the end of
/// the string is removed; `"2.50"` and `"100"` are returned unchanged.
pub fn trim_zero_fraction(text: &str) -> &str {
    let without_zeros = text.trim_end_matches('0');
    if without_zeros.len() == text.len() {
        return text;
    }

    without_zeros.strip_suffix(['.', ',']).unwrap_or(text)
}

/// Clamp `value` into the optional bounds, applying `min` before `max`.
///
/// An inverted range (`min > max`) therefore resolves to `max`.
pub fn clamp(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let value = min.map_or(value, |min| value.max(min));
    max.map_or(value, |max| value.min(max))
}
