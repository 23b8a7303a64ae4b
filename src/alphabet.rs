//! Static lookup tables shared by the corrector, the pattern builder and the
//! layout converter.
//!
//! Two tables drive everything: the curated homoglyph pairs and the physical
//! key table. Both are plain constants; the hash maps derived from them are
//! built once on first use and never mutated afterwards, so concurrent first
//! use from multiple threads is safe.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Curated Cyrillic/Latin letter pairs that render identically (or
/// near-identically) in both alphabets.
///
/// The set is deliberately not exhaustive: only letters with a visual twin
/// are listed, so a genuinely foreign letter inside an otherwise consistent
/// word never triggers a rewrite.
pub const HOMOGLYPH_PAIRS: &[(char, char)] = &[
    // (cyrillic, latin)       (CYRILLIC, LATIN)
    ('\u{0430}', 'a'), ('\u{0410}', 'A'), // а/a
    /*                */ ('\u{0412}', 'B'), // В/B
    ('\u{0435}', 'e'), ('\u{0415}', 'E'), // е/e
    /*                */ ('\u{041a}', 'K'), // К/K
    /*                */ ('\u{041c}', 'M'), // М/M
    /*                */ ('\u{041d}', 'H'), // Н/H
    ('\u{043e}', 'o'), ('\u{041e}', 'O'), // о/o
    ('\u{0440}', 'p'), ('\u{0420}', 'P'), // р/p
    ('\u{0441}', 'c'), ('\u{0421}', 'C'), // с/c
    /*                */ ('\u{0422}', 'T'), // Т/T
    ('\u{0443}', 'y'), ('\u{0423}', 'Y'), // у/y
    ('\u{0445}', 'x'), ('\u{0425}', 'X'), // х/x
];

/// Physical key table: the character a key produces on the Latin QWERTY
/// layout and the character the same key produces on the Cyrillic ЙЦУКЕН
/// layout, with and without Shift.
pub const KEYBOARD_PAIRS: &[(char, char)] = &[
    // Shift off
    ('`', 'ё'),
    ('q', 'й'),
    ('w', 'ц'),
    ('e', 'у'),
    ('r', 'к'),
    ('t', 'е'),
    ('y', 'н'),
    ('u', 'г'),
    ('i', 'ш'),
    ('o', 'щ'),
    ('p', 'з'),
    ('[', 'х'),
    (']', 'ъ'),
    ('a', 'ф'),
    ('s', 'ы'),
    ('d', 'в'),
    ('f', 'а'),
    ('g', 'п'),
    ('h', 'р'),
    ('j', 'о'),
    ('k', 'л'),
    ('l', 'д'),
    (';', 'ж'),
    ('\'', 'э'),
    ('z', 'я'),
    ('x', 'ч'),
    ('c', 'с'),
    ('v', 'м'),
    ('b', 'и'),
    ('n', 'т'),
    ('m', 'ь'),
    (',', 'б'),
    ('.', 'ю'),
    ('/', '.'),
    // Shift on
    ('~', 'Ё'),
    ('@', '"'),
    ('#', '№'),
    ('$', ';'),
    ('^', ':'),
    ('&', '?'),
    ('|', '/'),
    ('Q', 'Й'),
    ('W', 'Ц'),
    ('E', 'У'),
    ('R', 'К'),
    ('T', 'Е'),
    ('Y', 'Н'),
    ('U', 'Г'),
    ('I', 'Ш'),
    ('O', 'Щ'),
    ('P', 'З'),
    ('{', 'Х'),
    ('}', 'Ъ'),
    ('A', 'Ф'),
    ('S', 'Ы'),
    ('D', 'В'),
    ('F', 'А'),
    ('G', 'П'),
    ('H', 'Р'),
    ('J', 'О'),
    ('K', 'Л'),
    ('L', 'Д'),
    (':', 'Ж'),
    ('"', 'Э'),
    ('Z', 'Я'),
    ('X', 'Ч'),
    ('C', 'С'),
    ('V', 'М'),
    ('B', 'И'),
    ('N', 'Т'),
    ('M', 'Ь'),
    ('<', 'Б'),
    ('>', 'Ю'),
    ('?', ','),
];

lazy_static! {
    /// Cyrillic homoglyph -> Latin counterpart.
    pub static ref CYRILLIC_TO_LATIN: HashMap<char, char> =
        HOMOGLYPH_PAIRS.iter().copied().collect();

    /// Latin homoglyph -> Cyrillic counterpart.
    pub static ref LATIN_TO_CYRILLIC: HashMap<char, char> =
        HOMOGLYPH_PAIRS.iter().map(|&(cyr, lat)| (lat, cyr)).collect();

    /// Union of both directions: any homoglyph to its visual twin.
    pub static ref HOMOGLYPHS: HashMap<char, char> = {
        let mut map = HashMap::with_capacity(HOMOGLYPH_PAIRS.len() * 2);
        for &(cyr, lat) in HOMOGLYPH_PAIRS {
            map.insert(cyr, lat);
            map.insert(lat, cyr);
        }
        map
    };

    /// Latin-layout character -> Cyrillic-layout character.
    pub static ref KEYBOARD_LATIN_TO_CYRILLIC: HashMap<char, char> =
        KEYBOARD_PAIRS.iter().copied().collect();

    /// Cached inverse of [`KEYBOARD_LATIN_TO_CYRILLIC`].
    pub static ref KEYBOARD_CYRILLIC_TO_LATIN: HashMap<char, char> =
        KEYBOARD_PAIRS.iter().map(|&(lat, cyr)| (cyr, lat)).collect();
}

/// Check whether `ch` is a Latin letter.
pub fn is_latin_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Check whether `ch` is a Cyrillic letter of the Russian alphabet.
pub fn is_cyrillic_letter(ch: char) -> bool {
    matches!(ch, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
}

/// A Latin letter with no Cyrillic visual twin.
pub fn is_unique_latin(ch: char) -> bool {
    is_latin_letter(ch) && !LATIN_TO_CYRILLIC.contains_key(&ch)
}

/// A Cyrillic letter with no Latin visual twin.
pub fn is_unique_cyrillic(ch: char) -> bool {
    is_cyrillic_letter(ch) && !CYRILLIC_TO_LATIN.contains_key(&ch)
}
