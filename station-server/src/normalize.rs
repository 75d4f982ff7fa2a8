//! Station name normalization.
//!
//! Queries and station names go through the same pipeline before they are
//! compared, so "St-Niklaas", "Sint Niklaas" and "saint niklaas" all end up
//! as the same string. Case is preserved; comparisons are case-insensitive.
//!
//! Steps, in order:
//! 1. drop parenthesized segments, e.g. "Brussel-Zuid (Bruxelles-Midi)"
//! 2. keep only the part before the first `/`
//! 3. strip diacritics (NFD, then drop combining marks) and unify dash
//!    variants to `-`
//! 4. synonym rewrites (`Bru.`, `l alleud`, `am`, `frankfurt fl`)
//! 5. `st`/`sint` abbreviations become `saint`
//! 6. dashes become spaces
//! 7. whitespace runs collapse to one space, ends are trimmed
//!
//! No step can produce text that an earlier step would rewrite, which makes
//! `normalize` idempotent.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// A parenthesized segment and the whitespace before it.
static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\s*\(.*?\)").expect("valid regex"));

/// Synonym rewrites, applied in this order.
static SYNONYMS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"-\s+", "-"),
        (r"(?i)\bam\b", " "),
        (r"(?i)\bbru\.", "Brussel"),
        (r"(?i)\bl[\s-]+alleud", "l'alleud"),
        (r"(?i)\bfrankfurt[\s-]+fl", "frankfurt main fl"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).expect("valid regex"), replacement))
    .collect()
});

/// `st-`, `st.-`, `st` before whitespace/period/end, and `sint` before
/// whitespace/dash/end. Only whole tokens.
static SAINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:st\.?-|st(?:\s|\.|$)|sint(?:[\s-]|$))").expect("valid regex")
});

/// Normalize a station name or query for matching.
///
/// # Examples
///
/// ```
/// use station_server::normalize::normalize;
///
/// assert_eq!(normalize("Gent-Sint-Pieters"), "Gent saint Pieters");
/// assert_eq!(normalize("St.-Niklaas"), "saint Niklaas");
/// assert_eq!(normalize("Bru. Centraal"), "Brussel Centraal");
/// assert_eq!(normalize("Liège-Guillemins"), "Liege Guillemins");
/// assert_eq!(normalize("Brussel-Zuid (Bruxelles-Midi)"), "Brussel Zuid");
/// ```
pub fn normalize(text: &str) -> String {
    let text = PARENTHESIZED.replace_all(text, "");
    let text = match text.find('/') {
        Some(slash) => &text[..slash],
        None => &text[..],
    };

    let mut text = fold_accents(text);

    for (pattern, replacement) in SYNONYMS.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }
    let text = SAINT.replace_all(&text, "saint ");

    text.replace('-', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip diacritics and replace every dash variant with `-`.
///
/// Text is decomposed (NFD) and combining marks are dropped, so precomposed
/// and decomposed spellings of "Liège" fold alike. Letters without a
/// decomposition (`ß`, `Ø`, `Ł`, `Þ`, ...) go through a fixed table. Other
/// characters pass through unchanged.
pub fn fold_accents(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.nfd().filter(|c| !is_combining_mark(*c)) {
        match fold_char(c) {
            Some(folded) => out.push_str(folded),
            None => out.push(c),
        }
    }
    out
}

fn fold_char(c: char) -> Option<&'static str> {
    let folded = match c {
        'Æ' => "A",
        'æ' => "a",
        'Đ' | 'Ð' => "D",
        'đ' => "d",
        'Ł' => "L",
        'ł' => "l",
        'Ø' => "O",
        'ø' | 'ð' => "o",
        'ß' => "ss",
        'Þ' => "B",
        'þ' => "b",
        // hyphen, non-breaking hyphen, figure/en/em dash, horizontal bar, minus
        '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}'
        | '\u{2212}' => "-",
        _ => return None,
    };
    Some(folded)
}
