//! Error types for isotherm-impact.

/// Error type for all fallible operations in the isotherm-impact crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImpactError {
    /// Returned when an impact indicator id is not in the catalogue.
    #[error("unknown impact indicator '{name}'")]
    UnknownIndicator {
        /// The identifier as supplied.
        name: String,
    },
}
