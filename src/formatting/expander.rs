//! Template expansion state machine

use tracing::debug;

use crate::formatting::parser::parse_directive;
use crate::formatting::{generic, primitive, Directive, ExpandError};
use crate::values::{adapt, Value};

/// Expand a template against an ordered argument list, substituting every
/// `{...}` replacement field with the formatted rendering of its argument.
///
/// Fields without an explicit index consume arguments left to right; the
/// cursor deliberately wraps back to argument 0 once every argument has
/// been consumed, so a template may have more auto-indexed fields than
/// there are arguments. A `{` with no matching `}` is an error, as is any
/// field whose specifier does not parse; no partial result is ever
/// returned.
pub fn expand<'a>(template: &str, arguments: &[Value<'a>]) -> Result<String, ExpandError> {
    let mut result = String::with_capacity(template.len());
    let mut remaining = template;
    let mut offset = 0;
    let mut cursor = 0;
    let mut fields = 0;

    loop {
        let open = match remaining.find('{') {
            Some(position) => position,
            None => {
                result.push_str(remaining);
                break;
            }
        };
        result.push_str(&remaining[..open]);

        // the offset of this '{' within the whole template
        let start = offset + open;

        let rest = &remaining[open + 1..];
        let close = match rest.find('}') {
            Some(position) => position,
            None => return Err(ExpandError::UnterminatedField(start)),
        };
        let field = &rest[..close];

        let directive = match parse_directive(field) {
            Ok(directive) => directive,
            Err(_) => return Err(ExpandError::InvalidSpecifier(start, field.to_string())),
        };

        let index = match directive.index {
            Some(index) => index,
            None => {
                let index = cursor;
                cursor += 1;
                if cursor >= arguments.len() {
                    cursor = 0;
                }
                index
            }
        };

        let value = resolve(arguments, start, index)?;
        let rendered = render_field(start, index, &directive, value)?;
        result.push_str(&rendered);
        fields += 1;

        remaining = &rest[close + 1..];
        offset = start + close + 2;
    }

    debug!(
        "Substituted {} field{}",
        fields,
        if fields == 1 { "" } else { "s" }
    );

    Ok(result)
}

/// Extract the argument at the resolved position.
fn resolve<'l, 'a>(
    arguments: &'l [Value<'a>],
    offset: usize,
    index: usize,
) -> Result<&'l Value<'a>, ExpandError> {
    match arguments.get(index) {
        Some(value) => Ok(value),
        None => Err(ExpandError::IndexOutOfRange(offset, index, arguments.len())),
    }
}

/// Take one resolved argument through subscripting, conversion, and
/// whichever of the three formatting strategies its type selects.
fn render_field(
    offset: usize,
    index: usize,
    directive: &Directive,
    value: &Value,
) -> Result<String, ExpandError> {
    let value = match directive.subscript {
        Some(subscript) => value.subscript(offset, index, subscript)?,
        None => value.clone(),
    };

    let value = adapt(value, directive, offset, index)?;

    Ok(match &value {
        Value::Custom(custom) => custom.format(directive),
        Value::List(_) | Value::Shown(_) => generic::render(directive, &value),
        _ => primitive::render(directive, &value),
    })
}
