//! Patterns derived from the lookup tables.
//!
//! Three patterns drive the corrector and the word extractor. All of them
//! are derived from the tables in [`crate::alphabet`], built exactly once
//! and cached for the lifetime of the process. A compile failure is kept in
//! the cache and surfaced as [`RaskladkaError::Pattern`] by the accessors,
//! so callers see the failure instead of a panic.

use lazy_static::lazy_static;
use regex::Regex;

use crate::alphabet::{
    HOMOGLYPH_PAIRS, KEYBOARD_PAIRS, is_cyrillic_letter, is_latin_letter, is_unique_cyrillic,
    is_unique_latin,
};
use crate::error::{RaskladkaError, Result};

/// Character class body matching any Latin letter.
const LATIN: &str = "a-zA-Z";

/// Character class body matching any Cyrillic letter of the Russian
/// alphabet (ёЁ sit outside the а-я range).
const CYRILLIC: &str = "а-яА-ЯёЁ";

lazy_static! {
    /// A maximal mixed-script word span: one-or-more letters of one script
    /// immediately followed by one-or-more of the other, then any run of
    /// letters from either script.
    static ref MIXED_WORD: std::result::Result<Regex, regex::Error> = Regex::new(&format!(
        "(?:[{CYRILLIC}]+[{LATIN}]+[{LATIN}{CYRILLIC}]*|[{LATIN}]+[{CYRILLIC}]+[{LATIN}{CYRILLIC}]*)"
    ));

    /// A script-homogeneous word: a run of Latin or Cyrillic letters, each
    /// class widened with every non-letter character reachable on the same
    /// physical keys in either layout.
    static ref WORDS: std::result::Result<Regex, regex::Error> = {
        let punct = keyboard_punctuation_class();
        Regex::new(&format!(
            "(?:[{LATIN}{punct}]+|[{CYRILLIC}{punct}]+)"
        ))
    };

    /// The glue boundary inside a token made of two words typed in
    /// different layouts.
    ///
    /// The first alternative captures a Latin word (possibly wrapped in
    /// borrowed Cyrillic homoglyphs) glued to a Cyrillic word, the second
    /// the symmetric case. The head group ends where the space belongs. The
    /// original formulation used lookahead; the `regex` crate has none, so
    /// the lookahead body is consumed as the `tail` group instead, with a
    /// trailing class that forbids the head script's exclusive letters for
    /// the rest of the span. The lazy all-letter prefix and the branch
    /// order reproduce leftmost-match semantics.
    static ref GLUE_BOUNDARY: std::result::Result<Regex, regex::Error> = {
        let sim_lat = homoglyph_class(Side::Latin);
        let sim_cyr = homoglyph_class(Side::Cyrillic);
        let uniq_lat = unique_latin_class();
        let uniq_cyr = unique_cyrillic_class();
        Regex::new(&format!(
            "^(?P<pre>[{LATIN}{CYRILLIC}]*?)(?:\
             (?P<lat_head>[{LATIN}][{sim_cyr}]*[{uniq_lat}]+[{sim_lat}]*)\
             (?P<lat_tail>[{sim_cyr}]*[{uniq_cyr}]+[{sim_lat}]*[{CYRILLIC}][{CYRILLIC}{sim_lat}]*)|\
             (?P<cyr_head>[{CYRILLIC}][{sim_lat}]*[{uniq_cyr}]+[{sim_cyr}]*)\
             (?P<cyr_tail>[{sim_lat}]*[{uniq_lat}]+[{sim_cyr}]*[{LATIN}][{LATIN}{sim_cyr}]*))$"
        ))
    };
}

/// Pattern matching a maximal mixed-script word span.
pub fn mixed_word_pattern() -> Result<&'static Regex> {
    MIXED_WORD
        .as_ref()
        .map_err(|e| RaskladkaError::pattern(e.to_string()))
}

/// Pattern matching a script-homogeneous word with its keyboard punctuation.
pub fn words_pattern() -> Result<&'static Regex> {
    WORDS
        .as_ref()
        .map_err(|e| RaskladkaError::pattern(e.to_string()))
}

/// Pattern locating the glue boundary inside a glued bilingual token.
pub fn glue_boundary_pattern() -> Result<&'static Regex> {
    GLUE_BOUNDARY
        .as_ref()
        .map_err(|e| RaskladkaError::pattern(e.to_string()))
}

enum Side {
    Latin,
    Cyrillic,
}

fn class_escape(ch: char, class: &mut String) {
    if matches!(ch, '\\' | '^' | '-' | '[' | ']' | '&' | '~') {
        class.push('\\');
    }
    class.push(ch);
}

/// Every non-letter character reachable on the shared physical keys, in
/// either layout, as a regex character class body.
fn keyboard_punctuation_class() -> String {
    let mut chars: Vec<char> = KEYBOARD_PAIRS
        .iter()
        .flat_map(|&(lat, cyr)| [lat, cyr])
        .filter(|&ch| !is_latin_letter(ch) && !is_cyrillic_letter(ch))
        .collect();
    chars.sort_unstable();
    chars.dedup();

    let mut class = String::new();
    for ch in chars {
        class_escape(ch, &mut class);
    }
    class
}

/// One side of the homoglyph pair table as a class body.
fn homoglyph_class(side: Side) -> String {
    let mut class = String::new();
    for &(cyr, lat) in HOMOGLYPH_PAIRS {
        let ch = match side {
            Side::Latin => lat,
            Side::Cyrillic => cyr,
        };
        class_escape(ch, &mut class);
    }
    class
}

/// Latin letters with no Cyrillic visual twin, as a class body.
fn unique_latin_class() -> String {
    let mut class = String::new();
    for ch in ('a'..='z').chain('A'..='Z').filter(|&ch| is_unique_latin(ch)) {
        class_escape(ch, &mut class);
    }
    class
}

/// Cyrillic letters with no Latin visual twin, as a class body.
fn unique_cyrillic_class() -> String {
    let mut class = String::new();
    for ch in ('а'..='я')
        .chain('А'..='Я')
        .chain(['ё', 'Ё'])
        .filter(|&ch| is_unique_cyrillic(ch))
    {
        class_escape(ch, &mut class);
    }
    class
}
