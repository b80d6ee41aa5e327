//! Implicit conversions between representation classes

use crate::formatting::{Directive, ExpandError};
use crate::values::Value;

/// The representation class a conversion character asks for.
enum Class {
    Integer,
    Floating,
    Character,
}

fn requested(conversion: char) -> Option<Class> {
    match conversion {
        'x' | 'X' | 'o' | 'b' | 'd' => Some(Class::Integer),
        'e' | 'E' | 'f' | 'F' | 'g' | 'G' | '%' => Some(Class::Floating),
        'c' => Some(Class::Character),
        // 's' asks for the value's natural rendering, no conversion implied
        _ => None,
    }
}

/// When the conversion character implies a representation class other than
/// the value's own, convert to the nearest representative of that class so
/// the formatter can proceed. Values that cannot reach the requested class
/// are an error naming the argument and both types.
pub(crate) fn adapt<'a>(
    value: Value<'a>,
    directive: &Directive,
    offset: usize,
    index: usize,
) -> Result<Value<'a>, ExpandError> {
    let conversion = match directive.conversion {
        Some(conversion) => conversion,
        None => return Ok(value),
    };

    // a custom-formattable value renders itself whatever the field says
    if let Value::Custom(_) = value {
        return Ok(value);
    }

    let class = match requested(conversion) {
        Some(class) => class,
        None => return Ok(value),
    };

    match class {
        Class::Integer => {
            if value.is_integer() {
                return Ok(value);
            }
            match value {
                Value::Bool(value) => Ok(Value::Integer(if value { 1 } else { 0 })),
                Value::Char(value) => Ok(Value::Integer(value as i32)),
                // truncation toward zero, saturating at the type bounds
                Value::Float(value) => Ok(Value::Integer(value as i32)),
                Value::Double(value) => Ok(Value::Integer(value as i32)),
                other => Err(ExpandError::UnsupportedConversion(
                    offset,
                    index,
                    other.type_name(),
                    "integer",
                )),
            }
        }
        Class::Floating => {
            if value.is_floating() {
                return Ok(value);
            }
            match value {
                Value::Bool(value) => Ok(Value::Double(if value { 1.0 } else { 0.0 })),
                Value::Char(value) => Ok(Value::Double(value as u32 as f64)),
                Value::Integer(value) => Ok(Value::Double(value as f64)),
                Value::Unsigned(value) => Ok(Value::Double(value as f64)),
                Value::Long(value) => Ok(Value::Double(value as f64)),
                Value::UnsignedLong(value) => Ok(Value::Double(value as f64)),
                other => Err(ExpandError::UnsupportedConversion(
                    offset,
                    index,
                    other.type_name(),
                    "floating point",
                )),
            }
        }
        Class::Character => {
            if let Value::Char(_) = value {
                return Ok(value);
            }
            let code = match &value {
                Value::Integer(value) => u32::try_from(*value).ok(),
                Value::Unsigned(value) => Some(*value),
                Value::Long(value) => u32::try_from(*value).ok(),
                Value::UnsignedLong(value) => u32::try_from(*value).ok(),
                other => {
                    return Err(ExpandError::UnsupportedConversion(
                        offset,
                        index,
                        other.type_name(),
                        "character",
                    ))
                }
            };
            match code.and_then(char::from_u32) {
                Some(converted) => Ok(Value::Char(converted)),
                None => Err(ExpandError::UnsupportedConversion(
                    offset,
                    index,
                    value.type_name(),
                    "character",
                )),
            }
        }
    }
}

#[cfg(test)]
mod check {
    use super::*;

    fn conversion(c: char) -> Directive {
        Directive {
            conversion: Some(c),
            ..Directive::default()
        }
    }

    #[test]
    fn integers_pass_through() {
        let result = adapt(Value::Long(-9), &conversion('x'), 0, 0).unwrap();
        assert_eq!(format!("{:?}", result), "Long(-9)");
    }

    #[test]
    fn widening_to_floating() {
        let result = adapt(Value::Integer(3), &conversion('f'), 0, 0).unwrap();
        assert_eq!(format!("{:?}", result), "Double(3)");

        let result = adapt(Value::Bool(true), &conversion('e'), 0, 0).unwrap();
        assert_eq!(format!("{:?}", result), "Double(1)");
    }

    #[test]
    fn narrowing_to_integer() {
        let result = adapt(Value::Double(3.7), &conversion('d'), 0, 0).unwrap();
        assert_eq!(format!("{:?}", result), "Integer(3)");

        let result = adapt(Value::Char('A'), &conversion('d'), 0, 0).unwrap();
        assert_eq!(format!("{:?}", result), "Integer(65)");
    }

    #[test]
    fn code_points_to_characters() {
        let result = adapt(Value::Integer(97), &conversion('c'), 0, 0).unwrap();
        assert_eq!(format!("{:?}", result), "Char('a')");

        let result = adapt(Value::Integer(-1), &conversion('c'), 0, 2);
        assert_eq!(
            result.unwrap_err(),
            ExpandError::UnsupportedConversion(0, 2, "integer", "character")
        );
    }

    #[test]
    fn text_reaches_nothing() {
        let result = adapt(Value::Text("five"), &conversion('d'), 4, 1);
        assert_eq!(
            result.unwrap_err(),
            ExpandError::UnsupportedConversion(4, 1, "text", "integer")
        );
    }
}
