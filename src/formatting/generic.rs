//! Fallback renderer for values outside the primitive set

use crate::formatting::directive::{Alignment, Directive};
use crate::formatting::layout;
use crate::values::Value;

/// Render a display-insertable or list value: take its natural rendering,
/// then emulate the same precision/fill/width/alignment contract the
/// primitive renderer honors. These are textual renderings, so the default
/// alignment is left.
pub(crate) fn render(directive: &Directive, value: &Value) -> String {
    let text = natural(value);
    let text: String = match directive.precision {
        Some(precision) => text
            .chars()
            .take(precision)
            .collect(),
        None => text,
    };
    layout::pad(directive, Alignment::Left, text)
}

/// The value's rendering at natural width, with no directives applied.
fn natural(value: &Value) -> String {
    match value {
        Value::Bool(value) => value.to_string(),
        Value::Char(value) => value.to_string(),
        Value::Integer(value) => value.to_string(),
        Value::Unsigned(value) => value.to_string(),
        Value::Long(value) => value.to_string(),
        Value::UnsignedLong(value) => value.to_string(),
        Value::Float(value) => value.to_string(),
        Value::Double(value) => value.to_string(),
        Value::Text(value) => value.to_string(),
        Value::Shown(value) => value.to_string(),
        Value::Custom(custom) => custom.format(&Directive::default()),
        Value::List(elements) => {
            let mut out = String::from("[");
            for (i, element) in elements
                .iter()
                .enumerate()
            {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&natural(element));
            }
            out.push(']');
            out
        }
    }
}
