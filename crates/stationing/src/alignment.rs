//! Alignment model: cumulative-distance table over a polyline.
//!
//! `stations[i]` is the path length from `v[0]` through `v[i]`, so
//! `stations[0] = 0` and the table is non-decreasing. A model is built once per
//! alignment and dropped after that alignment's points are processed; it is
//! never mutated in place.

use crate::error::{StationError, StationResult};
use crate::geom2::{distance, Polyline, Vertex};
use crate::projector::{project, ProjectionResult};

/// Polyline plus its cumulative-distance table.
#[derive(Clone, Debug)]
pub struct AlignmentModel {
    vertices: Vec<Vertex>,
    stations: Vec<f64>,
}

impl AlignmentModel {
    /// Build the table in one pass. Fails with `InvalidAlignment` for fewer
    /// than two vertices; callers skip such alignments.
    pub fn build(polyline: &Polyline) -> StationResult<Self> {
        let vertices = polyline.vertices();
        if vertices.len() < 2 {
            return Err(StationError::invalid_alignment(vertices.len()));
        }
        let mut stations = Vec::with_capacity(vertices.len());
        stations.push(0.0);
        for w in vertices.windows(2) {
            let prev = stations[stations.len() - 1];
            stations.push(prev + distance(w[0], w[1]));
        }
        Ok(Self {
            vertices: vertices.to_vec(),
            stations,
        })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Cumulative-distance table, parallel to `vertices()`.
    #[inline]
    pub fn stations(&self) -> &[f64] {
        &self.stations
    }

    /// Total path length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.stations[self.stations.len() - 1]
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.vertices.len() - 1
    }

    /// Station of a point `distance_into_segment` along segment `segment_index`.
    ///
    /// No clamping happens here: the distance must already lie in
    /// `[0, segment_length]`. Panics if `segment_index` is out of bounds.
    #[inline]
    pub fn station_at(&self, segment_index: usize, distance_into_segment: f64) -> f64 {
        self.stations[segment_index] + distance_into_segment
    }

    /// Project `point` and convert an in-range hit into `(station, offset)`.
    /// Returns `None` when the nearest approach exceeds `max_offset`.
    pub fn locate(&self, point: Vertex, max_offset: f64) -> Option<(f64, f64)> {
        match project(&self.vertices, point, max_offset) {
            Ok(ProjectionResult::InRange {
                segment_index,
                foot,
                distance: offset,
            }) => {
                let along = distance(self.vertices[segment_index], foot);
                Some((self.station_at(segment_index, along), offset))
            }
            // `build` guarantees at least two vertices.
            Ok(ProjectionResult::OutOfRange) | Err(_) => None,
        }
    }
}
