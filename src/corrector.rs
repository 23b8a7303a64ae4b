//! Homoglyph typo corrector.
//!
//! Fixes words typed on the wrong keyboard layout where the stray letters
//! happen to look identical in both alphabets: a Latin `c` inside a
//! Cyrillic word becomes `с`, a Cyrillic `о` inside a Latin word becomes
//! `o`. The algorithm is simple, fast and conservative: an uncertain
//! correction is worse than no correction, so every ambiguous case resolves
//! to "leave the input unchanged".
//!
//! For each mixed-script word span:
//!
//! 1. Count the letters exclusive to each script (no visual twin).
//! 2. If both scripts have exclusive letters, the span is most likely two
//!    words in different layouts glued together; try to split it at the
//!    glue boundary and re-run correction on the two words.
//! 3. Otherwise rewrite the minority script's homoglyphs into the dominant
//!    script; ties on exclusive counts fall back to total per-script
//!    counts, and a tie on totals leaves the span unchanged.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::alphabet::{HOMOGLYPHS, is_latin_letter, is_unique_cyrillic, is_unique_latin};
use crate::error::Result;
use crate::patterns::{glue_boundary_pattern, mixed_word_pattern};

/// Maximum recursion depth for glued-word splitting.
pub const MAX_SPLIT_DEPTH: usize = 10;

/// A recorded substitution: the replacement character and how many times it
/// was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// The character written into the corrected text.
    pub to: char,
    /// Number of occurrences replaced.
    pub count: u32,
}

/// Substitutions accumulated over one [`correct`] call, keyed by the
/// original (pre-replacement) character.
pub type ReplacementLedger = HashMap<char, Replacement>;

/// Result of homoglyph correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// The corrected text.
    pub text: String,
    /// Every substitution that was applied, including those made inside
    /// recursive glued-word splits.
    pub replaced: ReplacementLedger,
}

/// Correct wrong-layout homoglyph typos in `text`.
///
/// The input is a complete text, not a single word; spans containing
/// letters of only one script are never touched. Fails only when the
/// pattern engine itself fails, never for heuristic indecision.
///
/// # Examples
///
/// ```
/// use raskladka::correct;
///
/// // Latin 'e' and 'p' inside a Cyrillic word.
/// let correction = correct("двepь")?;
/// assert_eq!(correction.text, "дверь");
///
/// // Cyrillic 'о' inside a Latin word.
/// let correction = correct("Зайди в Gооgle")?;
/// assert_eq!(correction.text, "Зайди в Google");
/// assert_eq!(correction.replaced[&'о'].to, 'o');
/// assert_eq!(correction.replaced[&'о'].count, 2);
/// # Ok::<(), raskladka::RaskladkaError>(())
/// ```
pub fn correct(text: &str) -> Result<Correction> {
    let mut replaced = ReplacementLedger::new();
    let text = correct_with_depth(text, &mut replaced, 0)?;
    Ok(Correction { text, replaced })
}

fn correct_with_depth(
    text: &str,
    replaced: &mut ReplacementLedger,
    depth: usize,
) -> Result<String> {
    // A correctable span holds at least one Cyrillic letter (two bytes in
    // UTF-8) and one Latin letter, so anything under three bytes is clean.
    if text.len() < 3 {
        return Ok(text.to_string());
    }

    let pattern = mixed_word_pattern()?;
    let corrected = pattern.replace_all(text, |caps: &regex::Captures<'_>| {
        correct_span(&caps[0], replaced, depth)
    });
    Ok(corrected.into_owned())
}

/// Correct one mixed-script word span.
fn correct_span(span: &str, replaced: &mut ReplacementLedger, depth: usize) -> String {
    let chars: Vec<char> = span.chars().collect();

    let unique_latin = chars.iter().filter(|&&ch| is_unique_latin(ch)).count();
    let unique_cyrillic = chars.iter().filter(|&&ch| is_unique_cyrillic(ch)).count();

    // Exclusive letters of both scripts at once: most likely two words in
    // different layouts glued together. Try to pull them apart; every
    // failure path returns the span as-is, a forced split must never fail
    // the caller's request.
    if unique_latin > 0 && unique_cyrillic > 0 {
        if depth >= MAX_SPLIT_DEPTH {
            return span.to_string();
        }
        return match split_glued(span) {
            Some(split) => correct_with_depth(&split, replaced, depth + 1)
                .unwrap_or_else(|_| span.to_string()),
            None => span.to_string(),
        };
    }

    let latin_dominant = match unique_latin.cmp(&unique_cyrillic) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => {
            // Spans contain only letters, so the totals partition the span.
            let total_latin = chars.iter().filter(|&&ch| is_latin_letter(ch)).count();
            let total_cyrillic = chars.len() - total_latin;
            match total_latin.cmp(&total_cyrillic) {
                Ordering::Greater => true,
                Ordering::Less => false,
                // Truly ambiguous, no safe correction.
                Ordering::Equal => return span.to_string(),
            }
        }
    };

    let mut out = String::with_capacity(span.len());
    for &ch in &chars {
        match HOMOGLYPHS.get(&ch) {
            Some(&twin) if latin_dominant != is_latin_letter(ch) => {
                out.push(twin);
                replaced
                    .entry(ch)
                    .and_modify(|r| r.count += 1)
                    .or_insert(Replacement { to: twin, count: 1 });
            }
            // Letters already in the dominant script, and letters with no
            // visual twin, stay as they are.
            _ => out.push(ch),
        }
    }
    out
}

/// Insert a single space at the glue boundary between two words typed in
/// different layouts. Returns `None` when no boundary is found.
fn split_glued(span: &str) -> Option<String> {
    let pattern = glue_boundary_pattern().ok()?;
    let caps = pattern.captures(span)?;
    let pre = caps.name("pre")?.as_str();
    let (head, tail) = match (caps.name("lat_head"), caps.name("cyr_head")) {
        (Some(head), _) => (head.as_str(), caps.name("lat_tail")?.as_str()),
        (_, Some(head)) => (head.as_str(), caps.name("cyr_tail")?.as_str()),
        _ => return None,
    };
    Some(format!("{pre}{head} {tail}"))
}
