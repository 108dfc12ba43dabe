//! Batch runner: every alignment against every survey point.
//!
//! Purpose
//! - Build one `AlignmentModel` per alignment, project all points against it,
//!   and emit exactly one `OutputRow` per (alignment, point) pair in
//!   alignment-then-point input order.
//!
//! Policy
//! - Alignments with fewer than two vertices produce no rows; they are listed
//!   in `RunOutcome::skipped` instead of failing the run.
//! - Cancellation is polled before each alignment and before each point. A
//!   cancelled run returns the rows produced so far; nothing is rolled back.
//! - With the `parallel` feature, points of one alignment are projected on the
//!   rayon pool and collected back in input order; cancellation is then polled
//!   per alignment only.

mod cancel;
mod row;
mod runner;

pub use cancel::{CancelSignal, Never};
pub use row::{Alignment, Measure, OutputRow, RunOutcome, SkippedAlignment};
pub use runner::run;
