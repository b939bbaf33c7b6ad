use std::fmt;
use std::str::FromStr;

use crate::line::split_lines;
use crate::normalize::{
    collapse_whitespace, detab, normalize_link_label, replace_null_chars, strip_atx_suffix,
    strip_edge_spaces, strip_edge_spaces_and_newlines, unescape_backslash_punct,
};

/// A text transform selectable by name from the command line or JavaScript.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Op {
    Collapse,
    Strip,
    StripNewlines,
    Atx,
    Detab,
    Nul,
    Label,
    Unescape,
}

impl Op {
    pub const ALL: [Op; 8] = [
        Op::Collapse,
        Op::Strip,
        Op::StripNewlines,
        Op::Atx,
        Op::Detab,
        Op::Nul,
        Op::Label,
        Op::Unescape,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Op::Collapse => "collapse",
            Op::Strip => "strip",
            Op::StripNewlines => "strip-newlines",
            Op::Atx => "atx",
            Op::Detab => "detab",
            Op::Nul => "nul",
            Op::Label => "label",
            Op::Unescape => "unescape",
        }
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            Op::Collapse => collapse_whitespace(text),
            Op::Strip => strip_edge_spaces(text).to_string(),
            Op::StripNewlines => strip_edge_spaces_and_newlines(text).to_string(),
            Op::Atx => strip_atx_suffix(text).to_string(),
            Op::Detab => detab(text),
            Op::Nul => replace_null_chars(text),
            Op::Label => normalize_link_label(text),
            Op::Unescape => unescape_backslash_punct(text),
        }
    }

    /// Applies the transform to each line separately and joins the results
    /// with `\n`. Original line endings are not preserved.
    pub fn apply_lines(self, text: &str) -> String {
        split_lines(text)
            .iter()
            .map(|line| self.apply(line.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromStr for Op {
    type Err = UnknownOp;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Op::ALL
            .into_iter()
            .find(|op| op.name() == value)
            .ok_or_else(|| UnknownOp(value.to_string()))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownOp(pub String);

impl fmt::Display for UnknownOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Op::ALL.iter().map(|op| op.name()).collect();
        write!(
            f,
            "unknown operation `{}` (expected one of: {})",
            self.0,
            names.join(", ")
        )
    }
}

impl std::error::Error for UnknownOp {}
