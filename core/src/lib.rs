//! Core waveform-table generation for the Rust strobe platform.
//!
//! The modules mirror the legacy drive-table tooling while providing safe
//! abstractions, scoped buffers, and well-defined processing stages.

pub mod firmware;
pub mod math;
pub mod prelude;
pub mod table;
pub mod telemetry;

pub use prelude::{StageInput, StageOutput, TableStage};
