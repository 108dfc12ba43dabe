//! Run inputs and outputs.

use crate::geom2::Polyline;
use crate::survey::Numeric;

/// Named reference polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct Alignment {
    pub name: String,
    pub polyline: Polyline,
}

impl Alignment {
    pub fn new(name: impl Into<String>, polyline: Polyline) -> Self {
        Self {
            name: name.into(),
            polyline,
        }
    }
}

/// Station or offset cell: a value, or the out-of-range marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Measure {
    Value(f64),
    OutOfRange,
}

impl Measure {
    #[inline]
    pub fn value(&self) -> Option<f64> {
        match *self {
            Measure::Value(v) => Some(v),
            Measure::OutOfRange => None,
        }
    }
}

/// One (alignment, point) result. Written once, never revised.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputRow {
    pub alignment: String,
    pub point_number: Numeric,
    pub station: Measure,
    pub offset: Measure,
    pub elevation: Numeric,
    pub description: String,
}

/// Alignment dropped for having fewer than two vertices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedAlignment {
    /// Position in the input sequence.
    pub index: usize,
    pub name: String,
    pub vertices: usize,
}

/// Everything a run produced, including partial output on cancellation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunOutcome {
    pub rows: Vec<OutputRow>,
    pub skipped: Vec<SkippedAlignment>,
    pub cancelled: bool,
}
