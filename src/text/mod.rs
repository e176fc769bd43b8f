//! Locale-tolerant numeric parsing and text folding.
//!
//! # Numeric grammar
//!
//! [`parse_value`] accepts free-form descriptions such as `"5.000 mAh"`, `"R$ 1.599,90"` or
//! `"8 GB"` and applies, in order:
//!
//! 1. Surrounding whitespace is trimmed; an empty string has no value.
//! 2. A `.` immediately followed by exactly three ASCII digits and then a word boundary (end of
//!    input or a character that is not alphanumeric / `_`) is a thousands separator and is dropped.
//! 3. Every character other than ASCII digits, `,`, `.` and `-` is stripped.
//! 4. Each remaining `,` is a decimal separator and becomes `.`.
//! 5. The result is parsed as an `f64`; a parse failure or a non-finite result has no value.
//!
//! Absence of a value is an expected outcome, never an error.


use deunicode::deunicode_char;
use regex::Regex;
use std::sync::LazyLock;

use crate::level::Level;

static RE_LEVEL_TOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(top|excelente|perfeito|premium|flagship)").expect("Invalid regex")
});

static RE_LEVEL_BOA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(otim|boa|bom|superior|high)").expect("Invalid regex"));

static RE_LEVEL_OK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(medi|intermedi|ok|regular)").expect("Invalid regex"));

static RE_LEVEL_BASICA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(bas|simples|entrada|ruim|fraco)").expect("Invalid regex"));

/// Parses a locale-tolerant number out of `text` (see the module docs for the grammar).
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut cleaned = String::with_capacity(text.len());

    for (idx, &ch) in chars.iter().enumerate() {
        match ch {
            '.' if is_thousands_separator(&chars, idx) => {}
            '0'..='9' | '-' | '.' => cleaned.push(ch),
            ',' => cleaned.push('.'),
            _ => {}
        }
    }

    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn is_thousands_separator(chars: &[char], dot: usize) -> bool {
    let Some(group) = chars.get(dot + 1..dot + 4) else {
        return false;
    };
    if !group.iter().all(char::is_ascii_digit) {
        return false;
    }
    chars.get(dot + 4).is_none_or(|next| !is_word_char(*next))
}

#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Folds `text` for comparisons: strips diacritics from Latin letters, lowercases, trims.
///
/// Only accented Latin letters are folded to ASCII. Combining marks are dropped and every other
/// character is kept as-is.
pub fn normalize_text(text: &str) -> String {
    let folded: String = text
        .chars()
        .filter(|ch| !is_combining_mark(*ch))
        .map(|ch| {
            if is_accented_latin(ch) {
                deunicode_char(ch).unwrap_or_default().to_string()
            } else {
                ch.to_string()
            }
        })
        .collect();
    folded.to_lowercase().trim().to_string()
}

#[inline]
fn is_combining_mark(ch: char) -> bool {
    matches!(ch, '\u{0300}'..='\u{036F}' | '\u{1AB0}'..='\u{1AFF}' | '\u{1DC0}'..='\u{1DFF}')
}

/// Latin-1 Supplement, Latin Extended-A/B and Latin Extended Additional letters.
#[inline]
fn is_accented_latin(ch: char) -> bool {
    ch.is_alphabetic()
        && matches!(ch, '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}')
}

/// Clamps `value` into `[0, 1]`; `None` and NaN become `fallback`.
#[inline]
pub fn clamp_score(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if !v.is_nan() => v.clamp(0.0, 1.0),
        _ => fallback,
    }
}

/// Rounds `value` to `places` decimals (half away from zero).
#[inline]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Infers a quality level from adjectives in free text.
///
/// Keyword families are checked in priority order `top`, `boa`, `ok`, `basica`; the first family
/// with a match wins.
pub fn level_from_keywords(text: &str) -> Option<Level> {
    let normalized = normalize_text(text);
    if normalized.is_empty() {
        return None;
    }

    if RE_LEVEL_TOP.is_match(&normalized) {
        Some(Level::Top)
    } else if RE_LEVEL_BOA.is_match(&normalized) {
        Some(Level::Boa)
    } else if RE_LEVEL_OK.is_match(&normalized) {
        Some(Level::Ok)
    } else if RE_LEVEL_BASICA.is_match(&normalized) {
        Some(Level::Basica)
    } else {
        None
    }
}
