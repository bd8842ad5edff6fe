//! # lettergram-tokenizer
//!
//! keeps only the latin letters of a text fragment, in uppercase.

#![forbid(unsafe_code)]
#![deny(dead_code, unused_imports, unused_mut, missing_docs)]

#[macro_use]
extern crate lazy_static;

use regex_lite::Regex;

lazy_static! {
    static ref NON_LETTERS: Regex = Regex::new(r"[^a-zA-Z]+").unwrap();
}

/// Removes every character that is not an ASCII letter and uppercases the
/// remaining ones.
///
/// Normalization never looks past the fragment it is given, so normalizing
/// two consecutive fragments gives the same letters as normalizing their
/// concatenation.
///
/// # Examples
/// ```rust
/// use lettergram_tokenizer::normalize;
///
/// assert_eq!(normalize("Hello, World! 42"), "HELLOWORLD");
/// ```
pub fn normalize<T: AsRef<str>>(fragment: T) -> String {
    NON_LETTERS
        .replace_all(fragment.as_ref(), "")
        .to_ascii_uppercase()
}
