//! Validation of the text between `<` and `>` in an autolink.

use crate::chars::{is_ascii_alphanumeric, is_atext, is_unicode_whitespace, is_whitespace};
use crate::schemes::is_valid_scheme;

const MAX_DOMAIN_LABEL: usize = 63;

/// Splits `scheme:rest` at the first colon.
pub fn split_scheme(body: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = body.split_once(':')?;
    if scheme.is_empty() {
        return None;
    }
    Some((scheme, rest))
}

/// A URI autolink: a known scheme, a colon, then no whitespace, controls or
/// angle brackets.
pub fn is_uri_autolink(body: &str) -> bool {
    let (scheme, rest) = match split_scheme(body) {
        Some(parts) => parts,
        None => return false,
    };
    if !is_valid_scheme(scheme) {
        return false;
    }
    rest.chars().all(|ch| {
        !is_whitespace(ch)
            && !is_unicode_whitespace(ch)
            && !ch.is_ascii_control()
            && ch != '<'
            && ch != '>'
    })
}

pub fn is_email_autolink(body: &str) -> bool {
    let (local, domain) = match body.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || !local.chars().all(|ch| is_atext(ch) || ch == '.') {
        return false;
    }
    !domain.is_empty() && domain.split('.').all(is_domain_label)
}

fn is_domain_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    let (first, last) = match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => (*first as char, *last as char),
        _ => return false,
    };
    bytes.len() <= MAX_DOMAIN_LABEL
        && is_ascii_alphanumeric(first)
        && is_ascii_alphanumeric(last)
        && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
}

#[cfg(test)]
mod tests {
    use super::{is_email_autolink, is_uri_autolink, split_scheme};

    #[test]
    fn splits_at_first_colon() {
        assert_eq!(split_scheme("http://a:b"), Some(("http", "//a:b")));
        assert_eq!(split_scheme(":nothing"), None);
        assert_eq!(split_scheme("nocolon"), None);
    }

    #[test]
    fn uri_autolinks() {
        assert!(is_uri_autolink("http://foo.bar.baz"));
        assert!(is_uri_autolink("MAILTO:FOO@BAR.BAZ"));
        assert!(is_uri_autolink("irc://foo.bar:2233/baz"));
        assert!(is_uri_autolink("http:"));
        assert!(!is_uri_autolink("foo:bar"));
        assert!(!is_uri_autolink("http://foo.bar/baz bim"));
        assert!(!is_uri_autolink("http://a<b"));
        assert!(!is_uri_autolink("http://a\u{3000}b"));
        assert!(!is_uri_autolink("http://a\u{7}b"));
        assert!(!is_uri_autolink("foo.bar.baz"));
    }

    #[test]
    fn email_autolinks() {
        assert!(is_email_autolink("foo@bar.example.com"));
        assert!(is_email_autolink("foo+special@Bar.baz-bar0.com"));
        assert!(is_email_autolink("foo@bar"));
        assert!(!is_email_autolink("foo@"));
        assert!(!is_email_autolink("@bar.com"));
        assert!(!is_email_autolink("foo@bar@baz"));
        assert!(!is_email_autolink("foo@-bar.com"));
        assert!(!is_email_autolink("foo@bar..com"));
        assert!(!is_email_autolink("foo bar@baz.com"));
        let long_label = "a".repeat(64);
        assert!(!is_email_autolink(&format!("x@{}.com", long_label)));
    }
}
