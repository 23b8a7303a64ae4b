//! # Raskladka
//!
//! Wrong-keyboard-layout typo correction for Cyrillic/Latin text.
//!
//! ## Features
//!
//! - Homoglyph typo correction: letters typed in the other alphabet that
//!   happen to look identical are rewritten into the word's dominant script
//! - Glued-word splitting for bilingual tokens typed with a missing space
//! - Keyboard layout conversion between QWERTY and ЙЦУКЕН, with automatic
//!   direction detection
//! - Word extraction and a reverse-lookup map for "retry the search in the
//!   other layout" workflows
//! - Case-style transfer from a sample string onto a replacement
//!
//! ## Example
//!
//! ```
//! use raskladka::{Layout, convert, correct};
//!
//! // The Cyrillic 'о' letters look like Latin 'o' but break the search.
//! let correction = correct("Зайди в Gооgle")?;
//! assert_eq!(correction.text, "Зайди в Google");
//!
//! // A query typed with the wrong layout switched on.
//! let query = convert("ghbdtn", Layout::Latin, Layout::Cyrillic)?;
//! assert_eq!(query, "привет");
//! # Ok::<(), raskladka::RaskladkaError>(())
//! ```

pub mod alphabet;
pub mod case_style;
pub mod corrector;
pub mod error;
pub mod layout;
pub mod patterns;
pub mod words;

pub use case_style::{CaseStyle, apply_case_style, case_style_of};
pub use corrector::{Correction, MAX_SPLIT_DEPTH, Replacement, ReplacementLedger, correct};
pub use error::{RaskladkaError, Result};
pub use layout::{Layout, convert, convert_auto};
pub use words::{build_words_map, extract_chunks, extract_words};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
