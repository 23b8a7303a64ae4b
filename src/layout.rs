//! Keyboard layout conversion between the Latin (QWERTY) and Cyrillic
//! (ЙЦУКЕН) physical layouts.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::alphabet::{
    KEYBOARD_CYRILLIC_TO_LATIN, KEYBOARD_LATIN_TO_CYRILLIC, is_cyrillic_letter, is_latin_letter,
};
use crate::error::{RaskladkaError, Result};

/// A physical keyboard layout identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// The Latin QWERTY layout.
    Latin,
    /// The Cyrillic ЙЦУКЕН layout.
    Cyrillic,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Latin => write!(f, "latin"),
            Layout::Cyrillic => write!(f, "cyrillic"),
        }
    }
}

/// Convert `text` typed on the `input` layout into what the same key presses
/// produce on the `output` layout.
///
/// Substitution is a pure 1:1 character replacement; characters outside the
/// keyboard map pass through unchanged. Only the Latin→Cyrillic and
/// Cyrillic→Latin directions are supported, any other pair fails with
/// [`RaskladkaError::UnsupportedLayouts`].
///
/// # Examples
///
/// ```
/// use raskladka::{Layout, convert};
///
/// let text = convert("ghbdtn", Layout::Latin, Layout::Cyrillic)?;
/// assert_eq!(text, "привет");
/// # Ok::<(), raskladka::RaskladkaError>(())
/// ```
pub fn convert(text: &str, input: Layout, output: Layout) -> Result<String> {
    match (input, output) {
        (Layout::Latin, Layout::Cyrillic) => Ok(substitute(text, &KEYBOARD_LATIN_TO_CYRILLIC)),
        (Layout::Cyrillic, Layout::Latin) => Ok(substitute(text, &KEYBOARD_CYRILLIC_TO_LATIN)),
        _ => Err(RaskladkaError::UnsupportedLayouts { input, output }),
    }
}

/// Convert `text` to the other layout when it contains letters of exactly
/// one script; otherwise return it unchanged.
///
/// Returns the (possibly converted) text and whether a conversion happened.
/// Text with both scripts, or with neither, is assumed to already be in the
/// intended layout. Intended for "nothing found, retry the search in the
/// other layout" workflows.
pub fn convert_auto(text: &str) -> (String, bool) {
    let has_latin = text.chars().any(is_latin_letter);
    let has_cyrillic = text.chars().any(is_cyrillic_letter);
    match (has_latin, has_cyrillic) {
        (true, false) => (substitute(text, &KEYBOARD_LATIN_TO_CYRILLIC), true),
        (false, true) => (substitute(text, &KEYBOARD_CYRILLIC_TO_LATIN), true),
        _ => (text.to_string(), false),
    }
}

fn substitute(text: &str, map: &HashMap<char, char>) -> String {
    text.chars()
        .map(|ch| map.get(&ch).copied().unwrap_or(ch))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_latin_to_cyrillic() {
        let text = convert("ghbdtn", Layout::Latin, Layout::Cyrillic).unwrap();
        assert_eq!(text, "привет");

        let text = convert("Ghbdtn vbh!", Layout::Latin, Layout::Cyrillic).unwrap();
        assert_eq!(text, "Привет мир!");
    }

    #[test]
    fn test_convert_cyrillic_to_latin() {
        let text = convert("привет", Layout::Cyrillic, Layout::Latin).unwrap();
        assert_eq!(text, "ghbdtn");
    }

    #[test]
    fn test_convert_round_trip() {
        let original = "Hello, world? {Rfr ltkf}";
        let there = convert(original, Layout::Latin, Layout::Cyrillic).unwrap();
        let back = convert(&there, Layout::Cyrillic, Layout::Latin).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_convert_passes_unmapped_characters_through() {
        let text = convert("100% gr1", Layout::Latin, Layout::Cyrillic).unwrap();
        assert_eq!(text, "100% пк1");
    }

    #[test]
    fn test_convert_rejects_unsupported_pairs() {
        let err = convert("text", Layout::Latin, Layout::Latin).unwrap_err();
        assert_eq!(
            err,
            RaskladkaError::UnsupportedLayouts {
                input: Layout::Latin,
                output: Layout::Latin,
            }
        );

        assert!(convert("text", Layout::Cyrillic, Layout::Cyrillic).is_err());
    }

    #[test]
    fn test_convert_auto_single_script() {
        let (text, converted) = convert_auto("ghbdtn");
        assert_eq!(text, "привет");
        assert!(converted);

        let (text, converted) = convert_auto("привет");
        assert_eq!(text, "ghbdtn");
        assert!(converted);
    }

    #[test]
    fn test_convert_auto_leaves_mixed_or_scriptless_text_alone() {
        let (text, converted) = convert_auto("abc абв");
        assert_eq!(text, "abc абв");
        assert!(!converted);

        let (text, converted) = convert_auto("12345");
        assert_eq!(text, "12345");
        assert!(!converted);

        let (text, converted) = convert_auto("");
        assert_eq!(text, "");
        assert!(!converted);
    }

    #[test]
    fn test_layout_display() {
        assert_eq!(Layout::Latin.to_string(), "latin");
        assert_eq!(Layout::Cyrillic.to_string(), "cyrillic");
    }
}
