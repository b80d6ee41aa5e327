use std::fmt;

use owo_colors::OwoColorize;

use crate::formatting::ExpandError;

/// An expansion failure paired with the template it arose in, ready to be
/// shown to a person with the offending field pointed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionFailure<'i> {
    pub problem: String,
    pub details: String,
    pub template: &'i str,
    pub offset: usize,
}

impl<'i> ExpansionFailure<'i> {
    pub fn new(error: &ExpandError, template: &'i str) -> ExpansionFailure<'i> {
        let (problem, details) = explain(error);
        ExpansionFailure {
            problem,
            details,
            template,
            offset: error.offset(),
        }
    }

    /// Verbose rendering: the problem, the template line, and a caret
    /// under the field that failed.
    pub fn full_details(&self) -> String {
        let i = calculate_line_number(self.template, self.offset);
        let j = calculate_column_number(self.template, self.offset);

        let code = self
            .template
            .lines()
            .nth(i)
            .unwrap_or("?");

        let line = i + 1;
        let column = j + 1;

        let width = line
            .to_string()
            .len();
        let width = 3.max(width);

        format!(
            r#"
{}: {}
template:{}:{}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>j$}

{}
            "#,
            "error".bright_red(),
            self.problem
                .bold(),
            line,
            column,
            ' ',
            '|'.bright_blue(),
            line.bright_blue(),
            '|'.bright_blue(),
            code,
            ' ',
            '|'.bright_blue(),
            '^'.bright_red(),
            self.details
        )
        .trim_ascii()
        .to_string()
    }
}

// Concise version for internal use
impl<'i> fmt::Display for ExpansionFailure<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let i = calculate_line_number(self.template, self.offset);
        let j = calculate_column_number(self.template, self.offset);

        write!(f, "error: {}:{} {}", i + 1, j + 1, self.problem)
    }
}

/// Generate problem and detail messages for each failure kind.
fn explain(error: &ExpandError) -> (String, String) {
    match error {
        ExpandError::InvalidSpecifier(_, text) => (
            format!("Invalid format specifier \"{}\"", text),
            r#"
The text between '{' and '}' must follow the form

    index[subscript]:fill align sign 0 width .precision conversion

with every part optional. Nothing may follow the conversion character.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ExpandError::UnterminatedField(_) => (
            "Unterminated replacement field".to_string(),
            r#"
Every '{' that opens a replacement field must have a matching '}' before
the end of the template.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ExpandError::IndexOutOfRange(_, index, count) => (
            format!(
                "Argument index (which is {}) >= argument count (which is {})",
                index, count
            ),
            "The field names an argument position past the end of the argument list."
                .to_string(),
        ),
        ExpandError::UnsupportedSubscript(_, index, name) => (
            format!("Argument {} (of type {}) is not subscriptable", index, name),
            "Subscripts like [0] only apply to list and text arguments.".to_string(),
        ),
        ExpandError::UnsupportedConversion(_, index, name, wanted) => (
            format!(
                "Argument {} (of type {}) is not convertible to {}",
                index, name, wanted
            ),
            r#"
The conversion character asks for a representation this argument cannot
take. Only numeric, boolean, and character values move between the
integer, floating point, and character classes.
            "#
            .trim_ascii()
            .to_string(),
        ),
    }
}

// This returns a zero-origin result so that it can subsequently be used for
// splitting; for display to humans you'll have to add 1.
fn calculate_line_number(content: &str, offset: usize) -> usize {
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

// Calculate the column number, also zero-origin for consistency.
fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => offset - start,
        None => offset,
    }
}
