//! Survey point records as handed over by the point-import side.

use std::fmt;

use crate::geom2::Vertex;
use crate::report::fmt_decimal;

/// Numeric attribute cell: point numbers and elevations.
///
/// Integer-typed sources keep their integer rendering (`101`), real-typed
/// sources render in decimal form (`101.0`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Numeric {
    Int(i64),
    Real(f64),
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Numeric::Int(n) => write!(f, "{n}"),
            Numeric::Real(x) => f.write_str(&fmt_decimal(x)),
        }
    }
}

impl Numeric {
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Numeric::Int(n) => n as f64,
            Numeric::Real(x) => x,
        }
    }
}

impl From<i64> for Numeric {
    fn from(n: i64) -> Self {
        Numeric::Int(n)
    }
}

impl From<f64> for Numeric {
    fn from(x: f64) -> Self {
        Numeric::Real(x)
    }
}

/// One surveyed point. Read-only to the projection core.
#[derive(Clone, Debug, PartialEq)]
pub struct SurveyPoint {
    /// Point number; not required to be unique.
    pub number: Numeric,
    pub coord: Vertex,
    pub elevation: Numeric,
    pub description: String,
}

impl SurveyPoint {
    pub fn new(
        number: impl Into<Numeric>,
        coord: Vertex,
        elevation: impl Into<Numeric>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            coord,
            elevation: elevation.into(),
            description: description.into(),
        }
    }

    /// Build from a PNEZD record: northing is y, easting is x.
    pub fn from_pnezd(
        number: impl Into<Numeric>,
        northing: f64,
        easting: f64,
        elevation: impl Into<Numeric>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(number, Vertex::new(easting, northing), elevation, description)
    }

    #[inline]
    pub fn northing(&self) -> f64 {
        self.coord.y
    }

    #[inline]
    pub fn easting(&self) -> f64 {
        self.coord.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pnezd_swaps_to_xy() {
        let p = SurveyPoint::from_pnezd(7, 5000.0, 2000.0, 101.5, "TOE");
        assert_eq!(p.coord, Vertex::new(2000.0, 5000.0));
        assert_eq!(p.northing(), 5000.0);
        assert_eq!(p.easting(), 2000.0);
        assert_eq!(p.number, Numeric::Int(7));
        assert_eq!(p.elevation, Numeric::Real(101.5));
    }

    #[test]
    fn integer_elevation_stays_integer() {
        let p = SurveyPoint::from_pnezd(Numeric::Real(7.0), 5000.0, 2000.0, 100, "CL");
        assert_eq!(p.elevation, Numeric::Int(100));
        assert_eq!(p.elevation.to_string(), "100");
        assert_eq!(p.elevation.as_f64(), 100.0);
        assert_eq!(p.number.to_string(), "7.0");
    }

    #[test]
    fn numeric_rendering_follows_source_type() {
        assert_eq!(Numeric::Int(101).to_string(), "101");
        assert_eq!(Numeric::Real(101.0).to_string(), "101.0");
        assert_eq!(Numeric::Real(101.25).to_string(), "101.25");
    }
}
