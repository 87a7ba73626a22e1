// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Inline markup substitution for titles and other single-line text.

/// Replace paired backtick spans with `<code>` markup.
///
/// Scans left to right; an opening backtick pairs with the next backtick
/// provided at least one other character lies between them. Adjacent
/// backticks are not a pair: the first stays verbatim and scanning resumes
/// at the second, which may still open a later span. A trailing unmatched
/// backtick stays verbatim. Surrounding text is copied through without any
/// HTML escaping.
pub fn format_inline_title(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('`') {
        let (before, from_open) = rest.split_at(open);
        out.push_str(before);
        let body = &from_open[1..];

        match body.find('`') {
            Some(close) if close > 0 => {
                out.push_str("<code>");
                out.push_str(&body[..close]);
                out.push_str("</code>");
                rest = &body[close + 1..];
            }
            _ => {
                out.push('`');
                rest = body;
            }
        }
    }

    out.push_str(rest);
    out
}
