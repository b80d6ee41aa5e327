//! A string templating engine in the style of `str.format`
//!
//! Templates are plain text with `{index[subscript]:specifier}` replacement
//! fields; arguments are an ordered, heterogeneous list of [`Value`]s bound
//! at the call site. [`expand`] substitutes each field with the formatted
//! rendering of its argument and returns the whole thing as one string, or
//! an [`ExpandError`] naming exactly what went wrong and where.
//!
//! ```
//! use templet::{expand, Value};
//!
//! let result = expand("{} answer{0[5]} {1:*^6}", &[Value::Text("plural"), Value::Integer(42)]);
//! assert_eq!(result.unwrap(), "plural answerl **42**");
//! ```
//!
//! A sibling [`logging`] facility covers level-tagged diagnostics with
//! placeholder-driven line layouts; it shares nothing with the engine
//! beyond living in the same crate.

pub mod error;
pub mod formatting;
pub mod logging;
pub mod values;

pub use formatting::{expand, Alignment, Directive, ExpandError, Sign};
pub use values::{Formattable, Value};
