//! Transforms applied to matched spans before they reach the AST.

use crate::chars::{is_ascii_punctuation, is_whitespace};

pub const TAB_STOP: usize = 4;

/// Removes U+0020 (and nothing else) from both ends.
pub fn strip_edge_spaces(text: &str) -> &str {
    text.trim_matches(' ')
}

pub fn strip_edge_spaces_and_newlines(text: &str) -> &str {
    text.trim_matches(|c: char| c == ' ' || c == '\n')
}

/// Joins the non-empty runs between ASCII whitespace with single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split(is_whitespace).filter(|word| !word.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Strips an ATX closing sequence (` ###`) from heading content.
///
/// Trailing spaces go first, then the `#` run; the run only counts as a
/// closing sequence when a space separates it from the content. Otherwise
/// the input is returned unchanged.
pub fn strip_atx_suffix(text: &str) -> &str {
    let without_spaces = text.trim_end_matches(' ');
    let without_hashes = without_spaces.trim_end_matches('#');
    match without_hashes.strip_suffix(' ') {
        Some(content) => content,
        None => text,
    }
}

/// Expands tabs to 4-column stops, counting columns from the start of `line`.
pub fn detab(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut width = 0usize;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_STOP - (width % TAB_STOP);
            out.extend(std::iter::repeat_n(' ', pad));
            width += pad;
        } else {
            out.push(ch);
            width += 1;
        }
    }
    out
}

/// Replaces U+0000 with U+FFFD.
pub fn replace_null_chars(text: &str) -> String {
    text.chars()
        .map(|ch| if ch == '\0' { '\u{FFFD}' } else { ch })
        .collect()
}

/// Matching key for link reference labels: whitespace collapsed, Unicode
/// case folded.
pub fn normalize_link_label(label: &str) -> String {
    let lowered = collapse_whitespace(label).to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        match fold_lowercase(ch) {
            Some(folded) => out.push_str(folded),
            None => out.push(ch),
        }
    }
    out
}

/// Full case folding for code points whose lowercase form is not yet folded.
///
/// `to_lowercase` turns a word-final `Σ` into `ς`, so final sigma has to be
/// folded here as well.
fn fold_lowercase(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'ß' => "ss",
        'ς' => "σ",
        'ſ' => "s",
        '\u{345}' => "ι",
        'ϐ' => "β",
        'ϑ' => "θ",
        'ϕ' => "φ",
        'ϖ' => "π",
        'ϰ' => "κ",
        'ϱ' => "ρ",
        'ϵ' => "ε",
        'ẛ' => "ṡ",
        'ﬀ' => "ff",
        'ﬁ' => "fi",
        'ﬂ' => "fl",
        'ﬃ' => "ffi",
        'ﬄ' => "ffl",
        'ﬅ' | 'ﬆ' => "st",
        _ => return None,
    };
    Some(folded)
}

/// Drops the backslash in front of escaped ASCII punctuation.
pub fn unescape_backslash_punct(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(&next) = chars.peek() {
                if is_ascii_punctuation(next) {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}
