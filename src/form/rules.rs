//! Value predicates shared by field validators.
//!
//! Lengths are counted in `char`s so multi-byte input is measured the way a
//! user reads it.

use std::sync::LazyLock;

use regex::Regex;

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn has_min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// `local@domain.tld` with dot-separated atoms on the left, hostname labels
/// on the right and an alphabetic TLD. It does not try to cover every
/// address RFC 5322 allows.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern must compile")
});

/// Checks the value as typed; surrounding whitespace makes it invalid.
pub fn is_email_shape(value: &str) -> bool {
    EMAIL.is_match(value)
}
