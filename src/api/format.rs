//! Display formatters shared by ticks, tooltips and legends.
//!
//! All functions are pure and total: malformed input degrades to an empty
//! string or is passed through unchanged.

/// Default maximum number of fraction digits for amounts below one thousand.
pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 2;

/// Currency prefix used by tooltip body lines.
pub const TOOLTIP_CURRENCY_SYMBOL: &str = "S$";

const THOUSAND: f64 = 1_000.0;
const MILLION: f64 = 1_000_000.0;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FractionDigits {
    min: usize,
    max: usize,
}

/// Formats an amount with a magnitude suffix.
///
/// `|value| >= 1_000_000` renders millions with two fixed fraction digits and
/// an `M` suffix, `|value| >= 1_000` renders thousands with up to one fraction
/// digit and a `K` suffix. Smaller magnitudes keep up to
/// `max_fraction_digits` digits. The integer part uses `,` grouping.
///
/// `None`, NaN and infinities format as an empty string.
#[must_use]
pub fn format_currency_value(value: impl Into<Option<f64>>, max_fraction_digits: usize) -> String {
    let Some(value) = value.into().filter(|value| value.is_finite()) else {
        return String::new();
    };

    let magnitude = value.abs();
    let (display_value, suffix, digits) = if magnitude >= MILLION {
        (value / MILLION, "M", FractionDigits { min: 2, max: 2 })
    } else if magnitude >= THOUSAND {
        (value / THOUSAND, "K", FractionDigits { min: 0, max: 1 })
    } else {
        (
            value,
            "",
            FractionDigits {
                min: 0,
                max: max_fraction_digits,
            },
        )
    };

    let mut text = format_grouped_decimal(display_value, digits);
    text.push_str(suffix);
    text
}

/// Value-axis variant of [`format_currency_value`] without fraction digits
/// below one thousand.
#[must_use]
pub fn format_y_axis_value(value: impl Into<Option<f64>>) -> String {
    format_currency_value(value, 0)
}

/// Converts `"YYYY-MM"` into `"Mon YYYY"`.
///
/// Input that is not exactly seven characters, has no `-`, or whose month is
/// outside `1..=12` is returned unchanged.
#[must_use]
pub fn format_date_to_month_year(year_month: &str) -> String {
    if year_month.chars().count() != 7 || !year_month.contains('-') {
        return year_month.to_owned();
    }

    let mut parts = year_month.split('-');
    let year = parts.next().unwrap_or_default();
    let month = parts.next().unwrap_or_default();

    let month_name = parse_leading_integer(month)
        .and_then(|month| usize::try_from(month - 1).ok())
        .and_then(|index| MONTH_NAMES.get(index));
    match month_name {
        Some(name) => format!("{name} {year}"),
        None => year_month.to_owned(),
    }
}

/// Builds one tooltip body line: `"{label}: S$ {amount}"`.
#[must_use]
pub fn format_tooltip_label(label: &str, value: impl Into<Option<f64>>) -> String {
    let amount = format_currency_value(value, DEFAULT_MAX_FRACTION_DIGITS);
    format!("{label}: {TOOLTIP_CURRENCY_SYMBOL} {amount}")
}

// Integer prefix parsing: optional whitespace and sign, then at least one
// ASCII digit. Trailing garbage is ignored.
fn parse_leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn format_grouped_decimal(value: f64, digits: FractionDigits) -> String {
    let (integer, mut fraction) = round_half_away_from_zero(value.abs(), digits.max);

    let keep = fraction.trim_end_matches('0').len().max(digits.min);
    fraction.truncate(keep);

    // Negative values keep their sign even when they round to zero ("-0").
    let mut text = String::with_capacity(integer.len() + fraction.len() + 8);
    if value.is_sign_negative() {
        text.push('-');
    }
    text.push_str(&group_thousands(&integer));
    if !fraction.is_empty() {
        text.push('.');
        text.push_str(&fraction);
    }
    text
}

/// Rounds a non-negative finite value to `precision` fraction digits, ties
/// away from zero. Returns the integer and fraction digit strings.
///
/// Rounding works on the shortest decimal text that round-trips to the same
/// float, so `1.005` rounds to `1.01` even though its binary value is lower.
fn round_half_away_from_zero(magnitude: f64, precision: usize) -> (String, String) {
    let shortest = format!("{magnitude}");
    let (integer, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(precision))
        .collect();
    let round_up = fraction.as_bytes().get(precision).is_some_and(|d| *d >= b'5');

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

    let split = digits.len() - precision;
    let fraction_digits = digits.split_off(split);
    (
        String::from_utf8(digits).unwrap_or_default(),
        String::from_utf8(fraction_digits).unwrap_or_default(),
    )
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, ch) in integer.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
