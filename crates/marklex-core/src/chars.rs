//! Character classes used by the block and inline scanners.
//!
//! Every predicate is total over `char`. Unassigned and private-use code
//! points fail every positive class.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Symbols that Unicode files under `S*` but CommonMark treats as punctuation.
pub const PUNCTUATION_SYMBOLS: [char; 9] = ['$', '+', '<', '=', '>', '^', '`', '|', '~'];

/// Non-alphanumeric characters allowed in the local part of an email autolink.
pub const ATEXT_SYMBOLS: [char; 20] = [
    '!', '#', '$', '%', '&', '\'', '*', '+', '\\', '/', '=', '?', '^', '_', '`', '{', '|', '}',
    '~', '-',
];

pub fn is_line_ending(c: char) -> bool {
    c == '\n' || c == '\r'
}

pub fn is_ascii_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

pub fn is_ascii_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// ASCII whitespace: space, tab, LF, VT, FF, CR.
///
/// Note that `char::is_ascii_whitespace` leaves out U+000B, so it cannot be
/// used here.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

pub fn is_non_space(c: char) -> bool {
    !is_whitespace(c)
}

/// Space separators (Zs) plus tab, CR, LF and form feed.
pub fn is_unicode_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\r' | '\n' | '\u{0C}')
        || general_category(c) == GeneralCategory::SpaceSeparator
}

pub fn is_space_or_tab(c: char) -> bool {
    c == ' ' || c == '\t'
}

pub fn is_ascii_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// ASCII punctuation, the Unicode `P*` categories, and [`PUNCTUATION_SYMBOLS`].
///
/// All three sources are consulted; `$`, `^` and `` ` `` for instance are
/// symbols to Unicode and only match through the ASCII set or the extra set.
pub fn is_punctuation(c: char) -> bool {
    is_ascii_punctuation(c)
        || matches!(
            general_category(c),
            GeneralCategory::ConnectorPunctuation
                | GeneralCategory::DashPunctuation
                | GeneralCategory::ClosePunctuation
                | GeneralCategory::FinalPunctuation
                | GeneralCategory::InitialPunctuation
                | GeneralCategory::OtherPunctuation
                | GeneralCategory::OpenPunctuation
        )
        || PUNCTUATION_SYMBOLS.contains(&c)
}

pub fn is_atext(c: char) -> bool {
    is_ascii_alphanumeric(c) || ATEXT_SYMBOLS.contains(&c)
}

fn general_category(c: char) -> GeneralCategory {
    c.general_category()
}

/// Named handle for each predicate, used by the front ends to report classes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CharClass {
    LineEnding,
    AsciiAlphanumeric,
    AsciiLetter,
    Whitespace,
    UnicodeWhitespace,
    NonSpace,
    AsciiPunctuation,
    Punctuation,
    Atext,
    SpaceOrTab,
}

impl CharClass {
    pub const ALL: [CharClass; 10] = [
        CharClass::LineEnding,
        CharClass::AsciiAlphanumeric,
        CharClass::AsciiLetter,
        CharClass::Whitespace,
        CharClass::UnicodeWhitespace,
        CharClass::NonSpace,
        CharClass::AsciiPunctuation,
        CharClass::Punctuation,
        CharClass::Atext,
        CharClass::SpaceOrTab,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CharClass::LineEnding => "line-ending",
            CharClass::AsciiAlphanumeric => "ascii-alphanumeric",
            CharClass::AsciiLetter => "ascii-letter",
            CharClass::Whitespace => "whitespace",
            CharClass::UnicodeWhitespace => "unicode-whitespace",
            CharClass::NonSpace => "non-space",
            CharClass::AsciiPunctuation => "ascii-punctuation",
            CharClass::Punctuation => "punctuation",
            CharClass::Atext => "atext",
            CharClass::SpaceOrTab => "space-or-tab",
        }
    }

    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::LineEnding => is_line_ending(c),
            CharClass::AsciiAlphanumeric => is_ascii_alphanumeric(c),
            CharClass::AsciiLetter => is_ascii_letter(c),
            CharClass::Whitespace => is_whitespace(c),
            CharClass::UnicodeWhitespace => is_unicode_whitespace(c),
            CharClass::NonSpace => is_non_space(c),
            CharClass::AsciiPunctuation => is_ascii_punctuation(c),
            CharClass::Punctuation => is_punctuation(c),
            CharClass::Atext => is_atext(c),
            CharClass::SpaceOrTab => is_space_or_tab(c),
        }
    }
}

/// Every class `c` belongs to, in [`CharClass::ALL`] order.
pub fn classify(c: char) -> Vec<CharClass> {
    CharClass::ALL
        .into_iter()
        .filter(|class| class.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

    #[test]
    fn ascii_punctuation_is_exactly_32_marks() {
        let matched: String = (0u8..=0x7f)
            .map(char::from)
            .filter(|c| is_ascii_punctuation(*c))
            .collect();
        assert_eq!(matched, ASCII_PUNCTUATION);
        assert_eq!(matched.chars().count(), 32);
    }

    #[test]
    fn whitespace_is_the_six_ascii_characters() {
        let matched: Vec<char> = (0u32..0x3000)
            .filter_map(char::from_u32)
            .filter(|c| is_whitespace(*c))
            .collect();
        assert_eq!(matched, vec!['\t', '\n', '\u{0B}', '\u{0C}', '\r', ' ']);
        assert!(!is_whitespace('\u{A0}'));
        assert!(is_non_space('\u{A0}'));
        assert!(!is_non_space('\u{0B}'));
    }

    #[test]
    fn unicode_whitespace_covers_space_separators() {
        for c in [' ', '\t', '\n', '\r', '\u{0C}', '\u{A0}', '\u{2003}', '\u{3000}'] {
            assert!(is_unicode_whitespace(c), "{:?}", c);
        }
        // Vertical tab is ASCII whitespace but neither Zs nor in the extra set.
        assert!(!is_unicode_whitespace('\u{0B}'));
        assert!(!is_unicode_whitespace('\u{2028}'));
        assert!(!is_unicode_whitespace('a'));
    }

    #[test]
    fn punctuation_union() {
        for c in ASCII_PUNCTUATION.chars() {
            assert!(is_punctuation(c), "{:?}", c);
        }
        for c in PUNCTUATION_SYMBOLS {
            assert!(is_punctuation(c), "{:?}", c);
            assert_ne!(general_category(c), GeneralCategory::OtherPunctuation);
        }
        for c in ['\u{2014}', '\u{00BF}', '\u{300C}', '\u{201C}', '\u{203F}'] {
            assert!(is_punctuation(c), "{:?}", c);
        }
        for c in ['a', '1', ' ', '\u{A3}', '\u{20AC}', '\u{E000}', '\u{10FFFF}'] {
            assert!(!is_punctuation(c), "{:?}", c);
        }
    }

    #[test]
    fn line_endings() {
        assert!(is_line_ending('\n'));
        assert!(is_line_ending('\r'));
        assert!(!is_line_ending('\u{0C}'));
        assert!(!is_line_ending('\u{2028}'));
    }

    #[test]
    fn atext_and_letters() {
        for c in "!#$%&'*+\\/=?^_`{|}~-azAZ09".chars() {
            assert!(is_atext(c), "{:?}", c);
        }
        for c in ['.', '@', '<', '>', '(', ' ', '\u{E9}'] {
            assert!(!is_atext(c), "{:?}", c);
        }
        assert!(is_ascii_letter('q'));
        assert!(!is_ascii_letter('\u{E9}'));
        assert!(!is_ascii_letter('7'));
        assert!(is_ascii_alphanumeric('7'));
    }

    #[test]
    fn classify_reports_every_matching_class() {
        assert_eq!(
            classify('$'),
            vec![
                CharClass::NonSpace,
                CharClass::AsciiPunctuation,
                CharClass::Punctuation,
                CharClass::Atext
            ]
        );
        assert_eq!(
            classify('\n'),
            vec![
                CharClass::LineEnding,
                CharClass::Whitespace,
                CharClass::UnicodeWhitespace
            ]
        );
        assert_eq!(classify('\u{E000}'), vec![CharClass::NonSpace]);
        assert_eq!(
            classify('\t'),
            vec![
                CharClass::Whitespace,
                CharClass::UnicodeWhitespace,
                CharClass::SpaceOrTab
            ]
        );
    }

    #[test]
    fn space_or_tab_excludes_other_blanks() {
        assert!(is_space_or_tab(' '));
        assert!(is_space_or_tab('\t'));
        for c in ['\u{0B}', '\u{0C}', '\n', '\r', '\u{A0}', '\u{3000}', 'a'] {
            assert!(!is_space_or_tab(c), "{:?}", c);
            assert!(!CharClass::SpaceOrTab.contains(c), "{:?}", c);
        }
    }
}
