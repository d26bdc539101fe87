//! Plain-text helpers: HTML stripping, initials, and the [`TextExt`] trait
//! that exposes the string utilities as methods on `str`.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::slug::{slugify, slugify_with_max};

lazy_static! {
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]*>").expect("html tag pattern compiles");
    static ref BLANK_LINE: Regex = Regex::new(r"(?m)^\s*$\n").expect("blank line pattern compiles");
}

/// Strip HTML tags from `html`, keeping the inner text and dropping the blank
/// lines left behind.
///
/// Stripping is repeated on its own output until no tag pattern remains.
/// Absent or blank input gives an empty string.
///
/// ```
/// use starlight_utils::remove_html;
///
/// assert_eq!(remove_html("<p>Hi <b>there</b></p>"), "Hi there");
/// ```
pub fn remove_html<'a>(html: impl Into<Option<&'a str>>) -> String {
    let Some(html) = html.into() else {
        return String::new();
    };
    if html.trim().is_empty() {
        return String::new();
    }

    let mut output = html.to_string();
    let mut passes = 0_usize;
    loop {
        let stripped = HTML_TAG.replace_all(&output, "");
        output = BLANK_LINE.replace_all(&stripped, "").into_owned();
        passes += 1;
        if !HTML_TAG.is_match(&output) {
            break;
        }
    }
    debug!("remove_html: finished after {passes} pass(es)");
    output
}

/// Initials for `value`: the first letter of each space-delimited word.
///
/// Words that do not start with a letter are skipped. Only the ASCII space
/// separates words: tabs and non-breaking spaces stay part of the word.
pub fn initials<'a>(value: impl Into<Option<&'a str>>) -> String {
    let Some(value) = value.into() else {
        return String::new();
    };

    value
        .split(' ')
        .filter_map(|word| word.chars().next())
        .filter(|first| first.is_alphabetic())
        .collect()
}

/// Convenience trait exposing the text helpers as methods.
pub trait TextExt {
    fn slugify(&self) -> String;
    fn slugify_with_max(&self, max_length: usize) -> String;
    fn remove_html(&self) -> String;
    fn initials(&self) -> String;
}

impl TextExt for str {
    fn slugify(&self) -> String {
        slugify(self)
    }
    fn slugify_with_max(&self, max_length: usize) -> String {
        slugify_with_max(self, max_length)
    }
    fn remove_html(&self) -> String {
        remove_html(self)
    }
    fn initials(&self) -> String {
        initials(self)
    }
}
