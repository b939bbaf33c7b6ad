use crate::chars::is_line_ending;
use crate::span::Span;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineEnding {
    Lf,
    Cr,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Cr => "\r",
            LineEnding::CrLf => "\r\n",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Line<'a> {
    /// Line content without its ending.
    pub text: &'a str,
    pub span: Span,
    pub ending: Option<LineEnding>,
}

/// Splits `source` at LF, CR and CR LF.
///
/// The last line carries no ending, so input that ends in a line ending
/// yields a trailing empty line.
pub fn split_lines(source: &str) -> Vec<Line<'_>> {
    let bytes = source.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut idx = 0;
    while idx < bytes.len() {
        let ch = bytes[idx] as char;
        if !is_line_ending(ch) {
            idx += 1;
            continue;
        }
        let (ending, width) = if ch == '\r' && bytes.get(idx + 1) == Some(&b'\n') {
            (LineEnding::CrLf, 2)
        } else if ch == '\r' {
            (LineEnding::Cr, 1)
        } else {
            (LineEnding::Lf, 1)
        };
        lines.push(Line {
            text: &source[start..idx],
            span: Span { start, end: idx },
            ending: Some(ending),
        });
        idx += width;
        start = idx;
    }
    lines.push(Line {
        text: &source[start..],
        span: Span {
            start,
            end: source.len(),
        },
        ending: None,
    });
    lines
}
