//! Error types for the raskladka library.
//!
//! The taxonomy is narrow by design: a pattern-engine failure and a caller
//! error for an unsupported conversion direction. Algorithmic ambiguity
//! (equal script counts, a failed glue-boundary split, recursion-depth
//! exhaustion) is never an error; it resolves to "return the input
//! unchanged".

use thiserror::Error;

use crate::layout::Layout;

/// The main error type for raskladka operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RaskladkaError {
    /// The underlying pattern engine reported an error.
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// The requested conversion direction is not one of the two supported
    /// layout pairs.
    #[error("Unsupported keyboard layouts combination: input '{input}' and output '{output}'")]
    UnsupportedLayouts {
        /// The requested input layout.
        input: Layout,
        /// The requested output layout.
        output: Layout,
    },
}

/// Result type alias for operations that may fail with [`RaskladkaError`].
pub type Result<T> = std::result::Result<T, RaskladkaError>;

impl RaskladkaError {
    /// Create a new pattern error.
    pub fn pattern<S: Into<String>>(msg: S) -> Self {
        RaskladkaError::Pattern(msg.into())
    }
}
