//! Error types for isotherm-synth.

use isotherm_pathway::PathwayError;

/// Error type for all fallible operations in the isotherm-synth crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SynthError {
    /// Returned when an indicator id is not part of the grid catalogue.
    #[error("unknown grid indicator '{name}'")]
    UnknownIndicator {
        /// The identifier as supplied.
        name: String,
    },

    /// Returned when a grid specification cannot produce valid points.
    #[error("invalid grid: {reason}")]
    InvalidGrid {
        /// Description of the problem.
        reason: String,
    },

    /// Wrapped error from the pathway crate.
    #[error(transparent)]
    Pathway(#[from] PathwayError),
}
