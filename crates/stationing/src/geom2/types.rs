//! Vertex and polyline types.

use nalgebra::Vector2;

/// Planar coordinate `(x, y)`; x is easting, y is northing.
pub type Vertex = Vector2<f64>;

/// Euclidean distance between two vertices.
#[inline]
pub fn distance(a: Vertex, b: Vertex) -> f64 {
    (b - a).norm()
}

/// Ordered vertex sequence of one alignment.
///
/// May hold fewer than two vertices; such polylines carry no stations and are
/// rejected by `AlignmentModel::build`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    vertices: Vec<Vertex>,
}

impl Polyline {
    #[inline]
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    /// Build from `(x, y)` pairs.
    pub fn from_xy(points: &[(f64, f64)]) -> Self {
        Self::new(points.iter().map(|&(x, y)| Vertex::new(x, y)).collect())
    }

    /// Keep the first part of a multi-part geometry; remaining parts are ignored.
    pub fn from_parts<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Vec<Vertex>>,
    {
        Self::new(parts.into_iter().next().unwrap_or_default())
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of segments `[v[i], v[i+1]]`.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

impl From<Vec<Vertex>> for Polyline {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self::new(vertices)
    }
}
