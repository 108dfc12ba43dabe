//! Text report sink.
//!
//! One header line, then one `", "`-separated line per row. Numbers use the
//! shortest round-trip form with a `.0` kept on integral values and exponent
//! notation outside `[1e-4, 1e16)`; the
//! two measure cells read `Out of Range` when the cutoff rejected the point.
//! Downstream spreadsheets parse this exact layout, header included.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::batch::{Measure, OutputRow};
use crate::error::{StationError, StationResult};

/// Header line, byte-for-byte as existing station/offset files carry it.
pub const HEADER: &str = "Alignment, Point Number, Station, Offset, Elevation, Description \n";

/// Marker written in place of station and offset for rejected points.
pub const OUT_OF_RANGE: &str = "Out of Range";

/// Render a float the way spreadsheets downstream expect: `5.0`, `12.25`,
/// `-0.5`, switching to `1e-05` / `1.2e+16` when the decimal exponent is
/// below -4 or at least 16.
///
/// Non-finite values render as `nan`, `inf`, `-inf`.
pub fn fmt_decimal(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let sci = format!("{x:e}");
    if let Some((mantissa, exp)) = sci.split_once('e') {
        if let Ok(exp) = exp.parse::<i32>() {
            if !(-4..16).contains(&exp) {
                let sign = if exp < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exp.unsigned_abs());
            }
        }
    }
    let s = x.to_string();
    if s.contains('.') {
        s
    } else {
        s + ".0"
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Measure::Value(v) => f.write_str(&fmt_decimal(v)),
            Measure::OutOfRange => f.write_str(OUT_OF_RANGE),
        }
    }
}

impl fmt::Display for OutputRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}, {}",
            self.alignment,
            self.point_number,
            self.station,
            self.offset,
            self.elevation,
            self.description
        )
    }
}

/// Write header and rows to `w`. I/O failures map to `SinkUnavailable`.
pub fn write_report<W: Write>(mut w: W, rows: &[OutputRow]) -> StationResult<()> {
    w.write_all(HEADER.as_bytes())
        .map_err(StationError::SinkUnavailable)?;
    for row in rows {
        writeln!(w, "{row}").map_err(StationError::SinkUnavailable)?;
    }
    w.flush().map_err(StationError::SinkUnavailable)
}

/// Create (or truncate) `path` and write the report into it.
pub fn write_report_file(path: &Path, rows: &[OutputRow]) -> StationResult<()> {
    let file = File::create(path).map_err(StationError::SinkUnavailable)?;
    write_report(BufWriter::new(file), rows)
}
