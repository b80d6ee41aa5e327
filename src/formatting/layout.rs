//! Fill, width, and alignment composition

use crate::formatting::directive::{Alignment, Directive};

/// Pad the rendered text out to the directive's width. Each value type has
/// its own default alignment (right for numbers, left for text), supplied
/// by the caller. Widths count characters, not display columns.
pub(crate) fn pad(directive: &Directive, default: Alignment, text: String) -> String {
    let count = text
        .chars()
        .count();
    let width = match directive.width {
        Some(width) if width > count => width,
        _ => return text,
    };

    let fill = directive
        .fill
        .unwrap_or(' ');
    let alignment = directive
        .alignment
        .unwrap_or(default);
    let gap = width - count;

    match alignment {
        Alignment::Left => {
            let mut out = text;
            out.push_str(&filler(fill, gap));
            out
        }
        Alignment::Right => {
            let mut out = filler(fill, gap);
            out.push_str(&text);
            out
        }
        Alignment::Internal => {
            // padding goes between a leading sign and the digits
            match text
                .chars()
                .next()
            {
                Some(sign @ ('-' | '+' | ' ')) => {
                    let mut out = sign.to_string();
                    out.push_str(&filler(fill, gap));
                    out.push_str(&text[sign.len_utf8()..]);
                    out
                }
                _ => {
                    let mut out = filler(fill, gap);
                    out.push_str(&text);
                    out
                }
            }
        }
        Alignment::Center => {
            // the shorter run of padding goes on the left
            let mut out = filler(fill, gap / 2);
            out.push_str(&text);
            out.push_str(&filler(fill, gap - gap / 2));
            out
        }
    }
}

fn filler(fill: char, count: usize) -> String {
    std::iter::repeat(fill)
        .take(count)
        .collect()
}
