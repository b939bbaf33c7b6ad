use std::fmt;

/// Byte range into a source string.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Result<Self, SpanError> {
        if start <= end {
            Ok(Self { start, end })
        } else {
            Err(SpanError::Inverted { start, end })
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The text this span covers, or `None` if it is out of bounds or splits a
    /// UTF-8 sequence.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpanError {
    Inverted { start: usize, end: usize },
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanError::Inverted { start, end } => {
                write!(f, "span start {} is past its end {}", start, end)
            }
        }
    }
}

impl std::error::Error for SpanError {}

#[cfg(test)]
mod tests {
    use super::{Span, SpanError};

    #[test]
    fn rejects_inverted_spans() {
        assert_eq!(
            Span::new(4, 2),
            Err(SpanError::Inverted { start: 4, end: 2 })
        );
        let span = Span::new(2, 2).expect("empty span");
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn slices_source() {
        let span = Span { start: 1, end: 3 };
        assert_eq!(span.slice("abcd"), Some("bc"));
        assert_eq!(Span { start: 2, end: 9 }.slice("abcd"), None);
        assert_eq!(Span { start: 0, end: 1 }.slice("\u{E9}"), None);
    }
}
