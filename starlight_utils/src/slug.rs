//! URL slug generation.
//!
//! [`slugify`] makes a single forward pass over the input and keeps one piece
//! of state: whether the last character written was a dash. That is enough to
//! collapse any run of separators (including mixed ones such as `" / "`) into
//! a single `-` without backtracking.
//!
//! Non-ASCII characters are only kept when they appear in a small remap table
//! of lowercase Latin letters. Uppercase accented letters are not in the table
//! and are dropped rather than lowercased.

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::trace;

/// Number of input characters scanned by [`slugify`].
pub const DEFAULT_MAX_LENGTH: usize = 80;

const REMAP_TABLE: &[(char, &str)] = &[
    ('à', "a"),
    ('å', "a"),
    ('á', "a"),
    ('â', "a"),
    ('ä', "a"),
    ('ã', "a"),
    ('ą', "a"),
    ('è', "e"),
    ('é', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('ę', "e"),
    ('ì', "i"),
    ('í', "i"),
    ('î', "i"),
    ('ï', "i"),
    ('ı', "i"),
    ('ò', "o"),
    ('ó', "o"),
    ('ô', "o"),
    ('õ', "o"),
    ('ö', "o"),
    ('ø', "o"),
    ('ő', "o"),
    ('ð', "o"),
    ('ù', "u"),
    ('ú', "u"),
    ('û', "u"),
    ('ü', "u"),
    ('ŭ', "u"),
    ('ů', "u"),
    ('ç', "c"),
    ('ć', "c"),
    ('č', "c"),
    ('ĉ', "c"),
    ('ż', "z"),
    ('ź', "z"),
    ('ž', "z"),
    ('ś', "s"),
    ('ş', "s"),
    ('š', "s"),
    ('ŝ', "s"),
    ('ñ', "n"),
    ('ń', "n"),
    ('ý', "y"),
    ('ÿ', "y"),
    ('ğ', "g"),
    ('ĝ', "g"),
    ('ř', "r"),
    ('ł', "l"),
    ('đ', "d"),
    ('ß', "ss"),
    ('Þ', "th"),
    ('ĥ', "h"),
    ('ĵ', "j"),
];

lazy_static! {
    static ref REMAP: HashMap<char, &'static str> = REMAP_TABLE.iter().copied().collect();
}

/// Returns the ASCII replacement for a non-ASCII character, if it has one.
pub fn remap_char(ch: char) -> Option<&'static str> {
    REMAP.get(&ch).copied()
}

/// Produce a URL-friendly version of `value`, "like-this-one", scanning at most
/// [`DEFAULT_MAX_LENGTH`] characters.
///
/// ```
/// use starlight_utils::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("Straße"), "strasse");
/// assert_eq!(slugify(None), "");
/// ```
pub fn slugify<'a>(value: impl Into<Option<&'a str>>) -> String {
    slugify_with_max(value, DEFAULT_MAX_LENGTH)
}

/// Like [`slugify`], but stops after `max_length` input characters.
///
/// The limit applies to the input position, not to the length of the result:
/// characters at index `max_length` and beyond are never looked at.
pub fn slugify_with_max<'a>(value: impl Into<Option<&'a str>>, max_length: usize) -> String {
    let Some(raw) = value.into() else {
        return String::new();
    };
    if raw.trim().is_empty() {
        return String::new();
    }

    let mut slug = String::with_capacity(raw.len().min(max_length));
    let mut last_was_dash = false;
    for (idx, ch) in raw.chars().enumerate() {
        if idx == max_length {
            trace!("slugify: input cut off after {max_length} characters");
            break;
        }

        match ch {
            'a'..='z' | '0'..='9' => {
                slug.push(ch);
                last_was_dash = false;
            },
            'A'..='Z' => {
                slug.push(ch.to_ascii_lowercase());
                last_was_dash = false;
            },
            ' ' | ',' | '.' | '/' | '\\' | '-' | '_' | '=' => {
                if !last_was_dash && !slug.is_empty() {
                    slug.push('-');
                    last_was_dash = true;
                }
            },
            _ if !ch.is_ascii() => {
                // unmapped characters leave the dash state alone
                if let Some(ascii) = remap_char(ch) {
                    slug.push_str(ascii);
                    last_was_dash = false;
                }
            },
            _ => {},
        }
    }

    let kept = slug.trim_end_matches('-').len();
    slug.truncate(kept);
    slug
}

/// Returns true if `value` is a non-empty slug: lowercase ASCII letters and
/// digits in groups joined by single dashes.
pub fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()))
}
