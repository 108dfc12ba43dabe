//! Station/offset computation for survey points against reference alignments.
//!
//! Layout
//! - `geom2`: planar vertices, polylines, and the clamped segment foot.
//! - `alignment`: cumulative-distance table turning (segment, distance) into a station.
//! - `projector`: nearest-segment search with a maximum-offset cutoff.
//! - `batch`: alignments × points driver producing output rows, with cooperative cancel.
//! - `report`: the comma-and-space text form consumed by downstream tools.
//!
//! All inputs share one planar coordinate system; nothing here reprojects.

pub mod alignment;
pub mod batch;
pub mod cfg;
pub mod error;
pub mod geom2;
pub mod projector;
pub mod report;
pub mod survey;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use alignment::AlignmentModel;
pub use batch::{run, Alignment, CancelSignal, Measure, OutputRow, RunOutcome, SkippedAlignment};
pub use cfg::StationCfg;
pub use error::{StationError, StationResult};
pub use geom2::{Polyline, Vertex};
pub use projector::{project, ProjectionResult};
pub use survey::{Numeric, SurveyPoint};

/// Common exports for callers wiring inputs to a run.
pub mod prelude {
    pub use crate::alignment::AlignmentModel;
    pub use crate::batch::{run, Alignment, CancelSignal, Measure, OutputRow, RunOutcome};
    pub use crate::cfg::StationCfg;
    pub use crate::geom2::{Polyline, Vertex};
    pub use crate::projector::{project, ProjectionResult};
    pub use crate::report::write_report;
    pub use crate::survey::{Numeric, SurveyPoint};
    pub use nalgebra::Vector2 as Vec2;
}
