//! Planar geometry for alignments.
//!
//! Purpose
//! - Hold alignment vertices as `nalgebra` vectors in one projected CRS.
//! - Provide the clamped segment foot that the projector scans over.
//!
//! Policy
//! - Multi-part inputs keep only their first part (`Polyline::from_parts`);
//!   later parts are dropped without error.
//! - Zero-length segments never divide: their foot is the start vertex.

mod segment;
mod types;

pub use segment::{foot_on_segment, SegmentFoot};
pub use types::{distance, Polyline, Vertex};
