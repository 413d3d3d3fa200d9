//! # Input Predicates
//!
//! Pass/fail checks applied to a single candidate word. Each one is a plain
//! `fn(&str) -> bool`, so it can be handed straight to
//! [`Console::validated_word`](super::Console::validated_word).

use super::{ADMIN_MODE, NO, YES};
use record_list::caseless;

/// Minimum length of an owner password.
pub const PWD_MIN_CHARS: usize = 7;
/// Number of digits in a zip code.
pub const ZIP_SIZE: usize = 5;
/// Donations must be strictly greater than this.
pub const MIN_DONATION: f64 = 0.0;

/// What the donor typed at the donation prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DonationEntry {
    Amount(f64),
    /// The administrator escape that leads to the report mode.
    Admin,
}

pub fn is_yes_no(word: &str) -> bool {
    caseless::eq(word, YES) || caseless::eq(word, NO)
}

/// Any word is acceptable as a name, including an empty one.
pub fn is_name(_word: &str) -> bool {
    true
}

/// At least [`PWD_MIN_CHARS`] characters with one uppercase letter, one lowercase
/// letter and one digit.
pub fn is_password(word: &str) -> bool {
    word.chars().count() >= PWD_MIN_CHARS
        && word.chars().any(|c| c.is_ascii_uppercase())
        && word.chars().any(|c| c.is_ascii_lowercase())
        && word.chars().any(|c| c.is_ascii_digit())
}

/// Exactly [`ZIP_SIZE`] digits, not starting with `0`.
pub fn is_zip(word: &str) -> bool {
    word.len() == ZIP_SIZE
        && word.bytes().all(|b| b.is_ascii_digit())
        && !word.starts_with('0')
}

pub fn is_donation(word: &str) -> bool {
    parse_donation(word).is_some()
}

/// Parses a finite amount strictly greater than `min`.
pub fn parse_amount(word: &str, min: f64) -> Option<f64> {
    word.parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > min)
}

pub fn parse_donation(word: &str) -> Option<DonationEntry> {
    if caseless::eq(word, ADMIN_MODE) {
        return Some(DonationEntry::Admin);
    }
    parse_amount(word, MIN_DONATION).map(DonationEntry::Amount)
}
