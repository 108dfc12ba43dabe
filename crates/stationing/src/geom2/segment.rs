//! Closest point on a clamped segment.

use super::types::Vertex;

/// Nearest point on segment `[a, b]` to a query point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentFoot {
    /// Foot point, never beyond the segment's endpoints.
    pub point: Vertex,
    /// Segment parameter in `[0, 1]`; 0 at `a`.
    pub t: f64,
    /// Euclidean distance from the query point to `point`.
    pub distance: f64,
}

/// Project `p` on the line through `a, b`, clamp the parameter to `[0, 1]`,
/// and measure the distance to the resulting foot.
///
/// A zero-length segment yields the foot `a` with `t = 0`.
#[inline]
pub fn foot_on_segment(a: Vertex, b: Vertex, p: Vertex) -> SegmentFoot {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq <= 0.0 {
        return SegmentFoot {
            point: a,
            t: 0.0,
            distance: (p - a).norm(),
        };
    }
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    let point = a + d * t;
    SegmentFoot {
        point,
        t,
        distance: (p - point).norm(),
    }
}
