//! Vertex names: the deterministic sequence used for automatically named
//! vertices, and the rules user-supplied names must follow.
//!
//! The sequence runs through the uppercase Latin letters, the lowercase Latin
//! letters, [`DEVANAGARI_NAMES`], the decimal numbers `0` to `999`, and
//! finally a timestamp-based name. [`generate_unique_name`] returns the first
//! candidate not already taken.

use std::{
    collections::HashSet,
    time::{SystemTime, UNIX_EPOCH},
};

/// Devanagari consonants and conjuncts in sequence order.
pub const DEVANAGARI_NAMES: [&str; 36] = [
    "क", "ख", "ग", "घ", "ङ", "च", "छ", "ज", "झ", "ञ", "ट", "ठ", "ड", "ढ", "ण", "त", "थ", "द",
    "ध", "न", "प", "फ", "ब", "भ", "म", "य", "र", "ल", "व", "श", "ष", "स", "ह", "क्ष", "त्र",
    "ज्ञ",
];

/// The conjuncts accepted as names in addition to single characters.
const CONJUNCTS: [&str; 3] = ["क्ष", "त्र", "ज्ञ"];

const DEVANAGARI_FIRST: char = 'क';
const DEVANAGARI_LAST: char = 'ह';

/// Largest accepted numeric name, also the last number in the sequence.
pub const MAX_NUMERIC_NAME: u16 = 999;

/// Every name of the sequence before the timestamp fallback, in order.
pub fn name_sequence() -> impl Iterator<Item = String> {
    let upper = ('A'..='Z').map(String::from);
    let lower = ('a'..='z').map(String::from);
    let devanagari = DEVANAGARI_NAMES.iter().map(|name| name.to_string());
    let numbers = (0..=MAX_NUMERIC_NAME).map(|n| n.to_string());
    upper.chain(lower).chain(devanagari).chain(numbers)
}

/// Returns the first name of the sequence not contained in `existing`.
pub fn generate_unique_name<'a, I>(existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: HashSet<&str> = existing.into_iter().collect();
    if let Some(name) = name_sequence().find(|name| !taken.contains(name.as_str())) {
        return name;
    }

    let mut stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    loop {
        let candidate = format!("Node{stamp}");
        if !taken.contains(candidate.as_str()) {
            tracing::debug!(name = %candidate, "naming sequence exhausted");
            return candidate;
        }
        stamp += 1;
    }
}

/// Returns true if `name` may be chosen by a user for a vertex.
///
/// Accepted: a single ASCII letter; a single Devanagari consonant from क to
/// ह; one of the conjuncts क्ष, त्र, ज्ञ; or a number from 0 to 999 written
/// without sign, padding, or leading zeros.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_alphabetic() || (DEVANAGARI_FIRST..=DEVANAGARI_LAST).contains(&c) {
            return true;
        }
    }

    if CONJUNCTS.contains(&name) {
        return true;
    }

    match name.parse::<u16>() {
        Ok(n) => n <= MAX_NUMERIC_NAME && n.to_string() == name,
        Err(_) => false,
    }
}
