//! Analysis pipeline: orchestration, outputs and observation hooks.
//!
//! ## Submodules
//!
//! - [`runner`]: [`process`], [`process_document`] and [`Analyzer`]
//! - [`artifacts`]: [`Analysis`] and the report types it carries
//! - [`observer`]: per-stage hooks and timing

pub mod artifacts;
pub mod observer;
pub mod runner;

pub use artifacts::{Analysis, AnalysisReport, InsufficientInput};
pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use runner::{process, process_document, process_with_observer, Analyzer};
