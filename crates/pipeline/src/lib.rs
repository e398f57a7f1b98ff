//! # isotherm-pipeline
//!
//! Enumerates point × scenario × period × indicator combinations, turns
//! each into an [`IndicatorRecord`](isotherm_io::IndicatorRecord) and
//! streams the records into a [`RecordSink`](isotherm_io::RecordSink) in
//! bounded batches.
//!
//! ## Runs
//!
//! ```mermaid
//! graph LR
//!     A["GridRunConfig"] -->|"run_grid()"| B["SynthesisEngine (rayon per slice)"]
//!     C["ImpactRunConfig"] -->|"run_impact()"| D{"raster bound?"}
//!     D -->|"yes"| E["extract_at_points()"]
//!     D -->|"no / failed"| F["synthetic_value()"]
//!     B --> G["BatchedWriter"]
//!     E --> G
//!     F --> G
//!     G --> H["RecordSink"]
//!     G --> I["RunSummary"]
//! ```
//!
//! Each run clears its source once, before the first batch, so repeating a
//! run leaves the sink in the same state.

mod batch;
mod cancel;
mod config;
mod error;
mod grid;
mod impact;
mod summary;

pub use batch::BatchedWriter;
pub use cancel::CancellationToken;
pub use config::{
    DEFAULT_GRID_BATCH_SIZE, DEFAULT_IMPACT_BATCH_SIZE, GridRunConfig, ImpactRunConfig,
    RasterBinding,
};
pub use error::PipelineError;
pub use grid::run_grid;
pub use impact::{run_impact, run_impact_with};
pub use summary::RunSummary;
