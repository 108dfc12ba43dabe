//! Point projector: nearest clamped segment under a maximum-offset cutoff.
//!
//! Scan every segment `[v[i], v[i+1]]`, keep the running minimum of the foot
//! distance with a strict `<`, and report the winner unless it lies farther
//! than `max_offset`. Ties go to the lower segment index.

use crate::error::{StationError, StationResult};
use crate::geom2::{foot_on_segment, SegmentFoot, Vertex};

/// Outcome of projecting one point onto one polyline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProjectionResult {
    InRange {
        /// Segment `[v[i], v[i+1]]` holding the closest approach.
        segment_index: usize,
        /// Nearest point on that segment, clamped to its endpoints.
        foot: Vertex,
        /// Distance from the point to `foot`; always `<= max_offset`.
        distance: f64,
    },
    OutOfRange,
}

impl ProjectionResult {
    #[inline]
    pub fn is_in_range(&self) -> bool {
        matches!(self, ProjectionResult::InRange { .. })
    }
}

/// Project `point` onto `vertices`.
///
/// Fails with `InvalidAlignment` for fewer than two vertices. A NaN distance
/// never compares as in range.
pub fn project(
    vertices: &[Vertex],
    point: Vertex,
    max_offset: f64,
) -> StationResult<ProjectionResult> {
    if vertices.len() < 2 {
        return Err(StationError::invalid_alignment(vertices.len()));
    }
    let mut best: Option<(usize, SegmentFoot)> = None;
    for (i, w) in vertices.windows(2).enumerate() {
        let foot = foot_on_segment(w[0], w[1], point);
        if best.map_or(true, |(_, b)| foot.distance < b.distance) {
            best = Some((i, foot));
        }
    }
    let Some((segment_index, foot)) = best else {
        return Ok(ProjectionResult::OutOfRange);
    };
    if foot.distance <= max_offset {
        Ok(ProjectionResult::InRange {
            segment_index,
            foot: foot.point,
            distance: foot.distance,
        })
    } else {
        Ok(ProjectionResult::OutOfRange)
    }
}
