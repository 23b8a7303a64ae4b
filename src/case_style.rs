//! Case-style transfer between same-script strings.

use serde::{Deserialize, Serialize};

/// The casing shape of a sample string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// Entirely lowercase.
    Lower,
    /// First letter of each word uppercase, the rest lowercase.
    Title,
    /// Entirely uppercase.
    Upper,
    /// Anything else; not reproducible.
    Mixed,
}

/// Classify the casing of `sample`.
///
/// A string matching several shapes gets the first one in the order
/// lowercase, Title Case, UPPERCASE.
pub fn case_style_of(sample: &str) -> CaseStyle {
    if sample.to_lowercase() == sample {
        CaseStyle::Lower
    } else if to_title_case(sample) == sample {
        CaseStyle::Title
    } else if sample.to_uppercase() == sample {
        CaseStyle::Upper
    } else {
        CaseStyle::Mixed
    }
}

/// Rewrite `target` with the casing shape of `sample`.
///
/// A mixed sample returns the target unchanged: arbitrary casing patterns
/// are not reproduced.
///
/// # Examples
///
/// ```
/// use raskladka::apply_case_style;
///
/// assert_eq!(apply_case_style("Hello World", "foo bar"), "Foo Bar");
/// assert_eq!(apply_case_style("HeLLo", "world"), "world");
/// ```
pub fn apply_case_style(sample: &str, target: &str) -> String {
    match case_style_of(sample) {
        CaseStyle::Lower => target.to_lowercase(),
        CaseStyle::Title => to_title_case(target),
        CaseStyle::Upper => target.to_uppercase(),
        CaseStyle::Mixed => target.to_string(),
    }
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
fn to_title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_style_classification() {
        assert_eq!(case_style_of("hello world"), CaseStyle::Lower);
        assert_eq!(case_style_of("Hello World"), CaseStyle::Title);
        assert_eq!(case_style_of("HELLO"), CaseStyle::Upper);
        assert_eq!(case_style_of("HeLLo"), CaseStyle::Mixed);
        // No letters at all: lowercase wins by check order.
        assert_eq!(case_style_of("123"), CaseStyle::Lower);
    }

    #[test]
    fn test_apply_lowercase() {
        assert_eq!(apply_case_style("hello", "WORLD"), "world");
        assert_eq!(apply_case_style("привет", "МИР"), "мир");
    }

    #[test]
    fn test_apply_title_case() {
        assert_eq!(apply_case_style("Hello World", "foo bar"), "Foo Bar");
        assert_eq!(apply_case_style("Привет", "мир и труд"), "Мир И Труд");
    }

    #[test]
    fn test_apply_uppercase() {
        assert_eq!(apply_case_style("HELLO", "world"), "WORLD");
        assert_eq!(apply_case_style("ПРИВЕТ", "мир"), "МИР");
    }

    #[test]
    fn test_mixed_sample_leaves_target_unchanged() {
        assert_eq!(apply_case_style("HeLLo", "world"), "world");
        assert_eq!(apply_case_style("приВЕТ", "World"), "World");
    }

    #[test]
    fn test_punctuation_restarts_title_words() {
        assert_eq!(apply_case_style("Hello", "foo-bar"), "Foo-Bar");
    }
}
