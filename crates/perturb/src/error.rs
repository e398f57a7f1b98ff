//! Error types for the isotherm-perturb crate.

/// Error type for all fallible operations in the isotherm-perturb crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PerturbError {
    /// Returned when a noise standard deviation is negative or non-finite.
    #[error("invalid noise sigma: {sigma} (must be finite and >= 0)")]
    InvalidSigma {
        /// The rejected value.
        sigma: f64,
    },
}
