//! Error types for isotherm-pathway.

/// Error type for all fallible operations in the isotherm-pathway crate.
///
/// Every variant is a configuration problem: an identifier or coordinate
/// that falls outside the fixed enumerations this crate models.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathwayError {
    /// Returned when a scenario identifier is not one of the modelled SSPs.
    #[error("unknown scenario '{name}' (expected one of ssp126, ssp245, ssp370, ssp585)")]
    UnknownScenario {
        /// The identifier as supplied.
        name: String,
    },

    /// Returned when a time-period identifier is not recognised.
    #[error("unknown time period '{name}' (expected historical, 2030, 2050, 2070 or 2090)")]
    UnknownPeriod {
        /// The identifier as supplied.
        name: String,
    },

    /// Returned when a coordinate is non-finite or out of range.
    #[error("invalid coordinate: {reason}")]
    InvalidCoordinate {
        /// Description of the problem.
        reason: String,
    },
}
