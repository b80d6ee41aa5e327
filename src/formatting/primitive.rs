//! Renderer for the built-in scalar types

use crate::formatting::directive::{Alignment, Directive, Sign};
use crate::formatting::layout;
use crate::values::Value;

/// Render one of the closed set of primitive values under the directive
/// set. Numbers default to right alignment, text to left. Non-primitive
/// values are routed to the generic renderer before this is reached.
pub(crate) fn render(directive: &Directive, value: &Value) -> String {
    match value {
        Value::Bool(value) => textual(directive, if *value { "true" } else { "false" }),
        Value::Char(value) => character(directive, *value),
        Value::Integer(value) => signed(directive, i64::from(*value), 32),
        Value::Long(value) => signed(directive, *value, 64),
        Value::Unsigned(value) => unsigned(directive, u64::from(*value), 32),
        Value::UnsignedLong(value) => unsigned(directive, *value, 64),
        Value::Float(value) => floating(directive, f64::from(*value)),
        Value::Double(value) => floating(directive, *value),
        Value::Text(value) => textual(directive, value),
        _ => String::new(),
    }
}

fn signed(directive: &Directive, value: i64, bits: u32) -> String {
    let negative = value < 0;
    let magnitude = value.unsigned_abs();
    match directive.conversion {
        Some('x') => radix(directive, format!("{:x}", magnitude), negative),
        Some('X') => radix(directive, format!("{:X}", magnitude), negative),
        Some('o') => radix(directive, format!("{:o}", magnitude), negative),
        Some('b') => layout::pad(directive, Alignment::Right, binary(magnitude, bits, negative)),
        _ => decimal(directive, magnitude.to_string(), negative),
    }
}

fn unsigned(directive: &Directive, value: u64, bits: u32) -> String {
    match directive.conversion {
        Some('x') => radix(directive, format!("{:x}", value), false),
        Some('X') => radix(directive, format!("{:X}", value), false),
        Some('o') => radix(directive, format!("{:o}", value), false),
        Some('b') => layout::pad(directive, Alignment::Right, binary(value, bits, false)),
        _ => decimal(directive, value.to_string(), false),
    }
}

/// Decimal digits with the precision applied as a minimum digit count and
/// the sign attached per the directive.
fn decimal(directive: &Directive, digits: String, negative: bool) -> String {
    let digits = match directive.precision {
        Some(precision) if precision > digits.len() => {
            format!("{:0>1$}", digits, precision)
        }
        _ => digits,
    };
    let sign = sign_for(directive, negative);
    layout::pad(directive, Alignment::Right, format!("{}{}", sign, digits))
}

/// Hex and octal renderings of negative values carry the magnitude behind
/// a minus sign rather than the raw two's-complement encoding.
fn radix(directive: &Directive, body: String, negative: bool) -> String {
    let body = match directive.precision {
        Some(precision) if precision > body.len() => {
            format!("{:0>1$}", body, precision)
        }
        _ => body,
    };
    let text = if negative {
        format!("-{}", body)
    } else {
        body
    };
    layout::pad(directive, Alignment::Right, text)
}

/// The fixed-width bit pattern of the value, one character per bit. For
/// negative values the top bit is set explicitly over the magnitude's
/// bits, making the result sign-magnitude rather than the hardware
/// encoding.
fn binary(magnitude: u64, bits: u32, negative: bool) -> String {
    let mut out = String::with_capacity(bits as usize);
    for position in (0..bits).rev() {
        out.push(if magnitude >> position & 1 == 1 { '1' } else { '0' });
    }
    if negative {
        out.replace_range(..1, "1");
    }
    out
}

fn floating(directive: &Directive, value: f64) -> String {
    let body = match directive.conversion {
        Some('e') => exponential(value, directive.precision.unwrap_or(6), false),
        Some('E') => exponential(value, directive.precision.unwrap_or(6), true),
        Some('f') => fixed(value, directive.precision.unwrap_or(6), false),
        Some('F') => fixed(value, directive.precision.unwrap_or(6), true),
        Some('G') => general(value, directive.precision, true),
        _ => general(value, directive.precision, false),
    };
    let text = if body.starts_with('-') || value.is_nan() {
        body
    } else {
        format!("{}{}", sign_for(directive, false), body)
    };
    layout::pad(directive, Alignment::Right, text)
}

fn fixed(value: f64, precision: usize, upper: bool) -> String {
    match special(value, upper) {
        Some(text) => text,
        None => format!("{:.*}", precision, value),
    }
}

/// Scientific notation with a signed, two-digit-minimum exponent.
fn exponential(value: f64, precision: usize, upper: bool) -> String {
    if let Some(text) = special(value, upper) {
        return text;
    }
    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent
                .parse()
                .unwrap_or(0);
            format!("{}{}{:+03}", mantissa, if upper { 'E' } else { 'e' }, exponent)
        }
        None => formatted,
    }
}

/// General notation: the precision is the number of significant digits
/// (default 6), the shorter of fixed and scientific is chosen, and
/// trailing fractional zeros are dropped.
fn general(value: f64, precision: Option<usize>, upper: bool) -> String {
    let significant = match precision {
        None => 6,
        Some(0) => 1,
        Some(precision) => precision,
    };
    if let Some(text) = special(value, upper) {
        return text;
    }
    if value == 0.0 {
        return if value.is_sign_negative() {
            "-0".to_string()
        } else {
            "0".to_string()
        };
    }

    // the decimal exponent, taken from the shortest scientific rendering
    // because log10().floor() misrounds at exact powers of ten
    let exponent: i32 = match format!("{:e}", value).split_once('e') {
        Some((_, exponent)) => exponent
            .parse()
            .unwrap_or(0),
        None => 0,
    };

    if exponent < -4 || exponent >= significant as i32 {
        let marker = if upper { 'E' } else { 'e' };
        let text = exponential(value, significant - 1, upper);
        match text.split_once(marker) {
            Some((mantissa, exponent)) => {
                format!("{}{}{}", trim_fraction(mantissa), marker, exponent)
            }
            None => text,
        }
    } else {
        let decimals = (significant as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&fixed(value, decimals, upper)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0')
            .trim_end_matches('.')
    } else {
        text
    }
}

fn special(value: f64, upper: bool) -> Option<String> {
    if value.is_nan() {
        Some(if upper { "NAN" } else { "nan" }.to_string())
    } else if value.is_infinite() {
        let body = if upper { "INF" } else { "inf" };
        Some(if value < 0.0 {
            format!("-{}", body)
        } else {
            body.to_string()
        })
    } else {
        None
    }
}

fn character(directive: &Directive, value: char) -> String {
    layout::pad(directive, Alignment::Left, value.to_string())
}

/// Text renders at most `precision` characters, left aligned by default.
fn textual(directive: &Directive, text: &str) -> String {
    let text: String = match directive.precision {
        Some(precision) => text
            .chars()
            .take(precision)
            .collect(),
        None => text.to_string(),
    };
    layout::pad(directive, Alignment::Left, text)
}

fn sign_for(directive: &Directive, negative: bool) -> &'static str {
    if negative {
        "-"
    } else {
        match directive.sign {
            Some(Sign::Always) => "+",
            Some(Sign::Space) => " ",
            _ => "",
        }
    }
}
