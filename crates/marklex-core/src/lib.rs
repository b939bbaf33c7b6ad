mod autolink;
mod chars;
mod line;
mod normalize;
mod op;
mod schemes;
mod span;

pub use autolink::{is_email_autolink, is_uri_autolink, split_scheme};
pub use chars::{
    ATEXT_SYMBOLS, CharClass, PUNCTUATION_SYMBOLS, classify, is_ascii_alphanumeric, is_ascii_letter,
    is_ascii_punctuation, is_atext, is_line_ending, is_non_space, is_punctuation,
    is_space_or_tab, is_unicode_whitespace, is_whitespace,
};
pub use line::{Line, LineEnding, split_lines};
pub use normalize::{
    TAB_STOP, collapse_whitespace, detab, normalize_link_label, replace_null_chars,
    strip_atx_suffix, strip_edge_spaces, strip_edge_spaces_and_newlines,
    unescape_backslash_punct,
};
pub use op::{Op, UnknownOp};
pub use schemes::{is_valid_scheme, schemes};
pub use span::{Span, SpanError};
