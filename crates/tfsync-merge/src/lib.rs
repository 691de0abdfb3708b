//! State merge for tfsync.
//!
//! Reconciles the last-known state of a resource with newly observed state.
//! Unset or undetermined attributes of the old state are filled in from the
//! new state, nested objects are merged recursively, and attributes that
//! were already known are kept. Anomalies are reported as diagnostics rather
//! than failing the merge.
//!
//! # Key Types
//!
//! - [`merge_objects`] — Recursive object merge
//! - [`MergeOutcome`] — Merged value plus accumulated diagnostics

pub mod merge;


pub use merge::{merge_objects, MergeOutcome};
