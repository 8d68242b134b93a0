//! itemlab-report — output surfaces for a completed analysis.
//!
//! The engine in `itemlab-core` produces an [`itemlab_core::model::AnalysisResult`];
//! this crate renders it for the consumers at the engine's boundary: a
//! two-section CSV export, JSON persistence, and the reduced item digest that
//! narrative report generators read.

pub mod csv;
pub mod digest;
pub mod json;
