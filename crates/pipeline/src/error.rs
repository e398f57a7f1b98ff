//! Error types for isotherm-pipeline.

use isotherm_io::IoError;
use isotherm_pathway::PathwayError;
use isotherm_synth::SynthError;

/// Error type for all fallible operations in the isotherm-pipeline crate.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Returned when a run configuration is unusable.
    #[error("invalid run configuration: {reason}")]
    Config {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the sink rejects a write. Earlier batches stay written.
    #[error("sink write failed: {0}")]
    Sink(#[from] IoError),

    /// Returned when a produced value cannot form a valid record.
    #[error("record rejected: {0}")]
    Record(IoError),

    /// Synthesis error.
    #[error(transparent)]
    Synth(#[from] SynthError),

    /// Invalid point or identifier.
    #[error(transparent)]
    Pathway(#[from] PathwayError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_config() {
        let e = PipelineError::Config {
            reason: "no scenarios selected".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid run configuration: no scenarios selected"
        );
    }

    #[test]
    fn display_sink() {
        let e: PipelineError = IoError::DuplicateRecord {
            key: "k".to_string(),
        }
        .into();
        assert_eq!(e.to_string(), "sink write failed: duplicate record k");
    }

    #[test]
    fn display_record() {
        let e = PipelineError::Record(IoError::NonFiniteValue {
            indicator_id: "pr".to_string(),
            latitude: 1.0,
            longitude: 2.0,
        });
        assert_eq!(
            e.to_string(),
            "record rejected: non-finite value for 'pr' at (1, 2)"
        );
    }

    #[test]
    fn from_synth() {
        let e: PipelineError = SynthError::InvalidGrid {
            reason: "empty".to_string(),
        }
        .into();
        assert!(matches!(e, PipelineError::Synth(_)));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<PipelineError>();
    }
}
