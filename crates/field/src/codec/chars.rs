//! Byte classes of the RFC 7230 §3.2 field grammar.
//!
//! All predicates work on single bytes. The token class, the one the name state
//! hits on every byte, is a 256-entry table built at compile time.

/// `true` for every byte allowed in a field name.
static TOKEN_MAP: [bool; 256] = build_token_map();

const fn build_token_map() -> [bool; 256] {
    let mut map = [false; 256];
    let mut b: u8 = 0;
    // obs-text is not a token char, only 0..=0x7f can be set
    while b < 0x80 {
        map[b as usize] = !is_ctl(b) && !is_separator(b);
        b += 1;
    }
    map
}

/// CTL: 0x00–0x1F and DEL.
#[inline]
pub const fn is_ctl(b: u8) -> bool {
    b < 0x20 || b == 0x7f
}

/// VCHAR: visible ASCII, 0x21–0x7E.
#[inline]
pub const fn is_vchar(b: u8) -> bool {
    matches!(b, 0x21..=0x7e)
}

/// obs-text: 0x80–0xFF.
#[inline]
pub const fn is_obs_text(b: u8) -> bool {
    b >= 0x80
}

/// field-vchar: VCHAR or obs-text.
#[inline]
pub const fn is_field_vchar(b: u8) -> bool {
    is_vchar(b) || is_obs_text(b)
}

#[inline]
pub const fn is_separator(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')'
            | b'<'
            | b'>'
            | b'@'
            | b','
            | b';'
            | b':'
            | b'\\'
            | b'"'
            | b'/'
            | b'['
            | b']'
            | b'?'
            | b'='
            | b'{'
            | b'}'
            | b' '
            | b'\t'
    )
}

/// tchar: ASCII that is neither CTL nor a separator.
#[inline]
pub fn is_token_char(b: u8) -> bool {
    TOKEN_MAP[usize::from(b)]
}

/// SP or HTAB, the unit of OWS, RWS and fold whitespace.
#[inline]
pub const fn is_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\t')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_chars() {
        for b in b"!#$%&'*+-.^_`|~0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ" {
            assert!(is_token_char(*b), "{:?} should be a token char", *b as char);
        }

        for b in b"()<>@,;:\\\"/[]?={} \t" {
            assert!(!is_token_char(*b), "{:?} is a separator", *b as char);
        }
    }

    #[test]
    fn token_excludes_ctl_and_obs_text() {
        for b in 0u8..=0xff {
            if is_ctl(b) || is_obs_text(b) {
                assert!(!is_token_char(b), "{b:#04x} must not be a token char");
            }
        }
    }

    #[test]
    fn token_table_matches_definition() {
        for b in 0u8..=0xff {
            let expected = b.is_ascii() && !is_ctl(b) && !is_separator(b);
            assert_eq!(is_token_char(b), expected, "{b:#04x}");
        }
    }

    #[test]
    fn field_vchar_ranges() {
        assert!(!is_field_vchar(b' '));
        assert!(!is_field_vchar(b'\t'));
        assert!(!is_field_vchar(0x7f));
        assert!(!is_field_vchar(b'\r'));
        assert!(is_field_vchar(b'!'));
        assert!(is_field_vchar(b'~'));
        assert!(is_field_vchar(0x80));
        assert!(is_field_vchar(0xff));
    }

    #[test]
    fn classes_are_consistent() {
        for b in 0u8..=0xff {
            // every byte is exactly one of: CTL, SP, VCHAR, obs-text
            let classes = [is_ctl(b), b == b' ', is_vchar(b), is_obs_text(b)];
            assert_eq!(classes.iter().filter(|c| **c).count(), 1, "{b:#04x}");
            assert_eq!(is_ws(b), b == b' ' || b == b'\t');
        }
    }
}
