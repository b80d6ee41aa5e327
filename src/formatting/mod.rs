//! The templating engine: replacement-field parsing and argument formatting

mod directive;
mod expander;
mod generic;
mod layout;
pub mod parser;
mod primitive;

pub use directive::{Alignment, Directive, Sign};
pub use expander::expand;

use std::fmt;

/// Failures raised while expanding a template. Each variant carries the
/// byte offset of the replacement field that caused it; every failure
/// aborts the whole expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// The field's specifier did not match the grammar.
    InvalidSpecifier(usize, String),
    /// A `{` was opened but the template ended before its `}`.
    UnterminatedField(usize),
    /// The resolved argument index is past the end of the argument list.
    IndexOutOfRange(usize, usize, usize),
    /// A subscript was requested on a value with no indexed access.
    UnsupportedSubscript(usize, usize, &'static str),
    /// The conversion character asks for a representation class the
    /// argument's type cannot reach.
    UnsupportedConversion(usize, usize, &'static str, &'static str),
}

impl ExpandError {
    /// The byte offset of the offending field within the template.
    pub fn offset(&self) -> usize {
        match self {
            ExpandError::InvalidSpecifier(offset, _) => *offset,
            ExpandError::UnterminatedField(offset) => *offset,
            ExpandError::IndexOutOfRange(offset, _, _) => *offset,
            ExpandError::UnsupportedSubscript(offset, _, _) => *offset,
            ExpandError::UnsupportedConversion(offset, _, _, _) => *offset,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ExpandError::InvalidSpecifier(_, text) => {
                format!("format specifier \"{}\" is not valid", text)
            }
            ExpandError::UnterminatedField(_) => {
                "replacement field opened but never closed".to_string()
            }
            ExpandError::IndexOutOfRange(_, index, count) => {
                format!(
                    "argument index (which is {}) >= argument count (which is {})",
                    index, count
                )
            }
            ExpandError::UnsupportedSubscript(_, index, name) => {
                format!(
                    "argument {} of type {} is not subscriptable, but the field requested a subscript",
                    index, name
                )
            }
            ExpandError::UnsupportedConversion(_, index, name, wanted) => {
                format!(
                    "argument {} of type {} is not convertible to {}",
                    index, name, wanted
                )
            }
        }
    }
}

impl fmt::Display for ExpandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {} (offset {})", self.message(), self.offset())
    }
}

impl std::error::Error for ExpandError {}
