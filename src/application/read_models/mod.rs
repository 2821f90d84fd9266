//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of an assembled BOM for queries.

pub mod bom_summary;

pub use bom_summary::{BomSummary, SeverityCount};
