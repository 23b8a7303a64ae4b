//! Word and separator extraction, and the converted-word reverse map.
//!
//! Supports "retry the search in the other layout" workflows: after a query
//! is flipped with [`convert_auto`], the map built here translates matched
//! words back to the user's original spelling.

use std::collections::HashMap;

use crate::error::Result;
use crate::layout::convert_auto;
use crate::patterns::words_pattern;

/// Extract every script-homogeneous word from `text`, left to right.
///
/// A word is a maximal run of Latin letters or Cyrillic letters, together
/// with any punctuation sitting on the same physical keys (a word typed in
/// the wrong layout keeps its layout-specific punctuation). Separators are
/// discarded.
pub fn extract_words(text: &str) -> Result<Vec<String>> {
    let pattern = words_pattern()?;
    Ok(pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect())
}

/// Split `text` into words and the verbatim separators around them.
///
/// The complementary operation to [`extract_words`]: every piece of the
/// input appears exactly once, in order, with no empty chunks, so
/// concatenating the chunks reproduces the input.
pub fn extract_chunks(text: &str) -> Result<Vec<String>> {
    let pattern = words_pattern()?;
    let mut chunks = Vec::new();
    let mut last_end = 0;

    for mat in pattern.find_iter(text) {
        if mat.start() > last_end {
            chunks.push(text[last_end..mat.start()].to_string());
        }
        chunks.push(mat.as_str().to_string());
        last_end = mat.end();
    }
    if last_end < text.len() {
        chunks.push(text[last_end..].to_string());
    }

    Ok(chunks)
}

/// Build a reverse-lookup map from the layout-converted form of the whole
/// text and of every extracted word back to its original spelling.
///
/// Returns an empty map when the text contains no words. Two originals
/// converting to the same form collide; the last writer wins.
pub fn build_words_map(text: &str) -> Result<HashMap<String, String>> {
    let words = extract_words(text)?;
    if words.is_empty() {
        return Ok(HashMap::new());
    }

    let mut map = HashMap::with_capacity(words.len() + 1);
    let (converted, _) = convert_auto(text);
    map.insert(converted, text.to_string());
    for word in words {
        let (converted, _) = convert_auto(&word);
        map.insert(converted, word);
    }
    Ok(map)
}
