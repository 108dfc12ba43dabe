//! PNEZD point files: `PointNumber,Northing,Easting,Elevation,Description`.
//!
//! Header-less, comma-delimited, types detected from the data. Integer point
//! numbers and elevations stay integers. A missing description column reads
//! as empty text.

use std::path::Path;

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use stationing::{Numeric, SurveyPoint};

const PN: usize = 0;
const NORTHING: usize = 1;
const EASTING: usize = 2;
const ELEVATION: usize = 3;
const DESCRIPTION: usize = 4;

/// Read every record of a PNEZD file, in file order.
pub fn read_pnezd(path: &Path) -> Result<Vec<SurveyPoint>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(false)
        .with_infer_schema_length(None)
        .with_truncate_ragged_lines(true)
        .finish()
        .with_context(|| format!("opening PNEZD file {}", path.display()))?
        .collect()
        .with_context(|| format!("reading PNEZD file {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "pnezd_shape");
    if df.width() < 4 {
        bail!(
            "{}: expected at least 4 columns (P,N,E,Z[,D]), found {}",
            path.display(),
            df.width()
        );
    }

    let numbers = numeric_column(&df, PN)?;
    let northing = float_column(&df, NORTHING)?;
    let easting = float_column(&df, EASTING)?;
    let elevation = numeric_column(&df, ELEVATION)?;
    let description = text_column(&df, DESCRIPTION)?;

    let mut points = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let line = row + 1;
        let Some(pn) = numbers[row] else {
            bail!("{} row {line}: missing or non-numeric point number", path.display());
        };
        let (Some(n), Some(e), Some(z)) = (northing[row], easting[row], elevation[row]) else {
            bail!(
                "{} row {line}: northing, easting and elevation must be numeric",
                path.display()
            );
        };
        points.push(SurveyPoint::from_pnezd(
            pn,
            n,
            e,
            z,
            description[row].clone(),
        ));
    }
    Ok(points)
}

fn column(df: &DataFrame, idx: usize) -> Result<&Series> {
    df.select_at_idx(idx)
        .with_context(|| format!("PNEZD column {} missing", idx + 1))
}

/// Integer-typed columns stay `Numeric::Int`, everything else reads as real.
fn numeric_column(df: &DataFrame, idx: usize) -> Result<Vec<Option<Numeric>>> {
    let s = column(df, idx)?;
    if s.dtype().is_integer() {
        let ints = s.cast(&DataType::Int64)?;
        Ok(ints.i64()?.into_iter().map(|v| v.map(Numeric::Int)).collect())
    } else {
        let reals = s.cast(&DataType::Float64)?;
        Ok(reals.f64()?.into_iter().map(|v| v.map(Numeric::Real)).collect())
    }
}

fn float_column(df: &DataFrame, idx: usize) -> Result<Vec<Option<f64>>> {
    let s = column(df, idx)?.cast(&DataType::Float64)?;
    Ok(s.f64()?.into_iter().collect())
}

fn text_column(df: &DataFrame, idx: usize) -> Result<Vec<String>> {
    if idx >= df.width() {
        return Ok(vec![String::new(); df.height()]);
    }
    let s = column(df, idx)?.cast(&DataType::String)?;
    Ok(s.str()?
        .into_iter()
        .map(|v| v.unwrap_or_default().trim().to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_records_in_file_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("survey.csv");
        fs::write(
            &path,
            "101,5000.0,2000.0,100.25,EP\n102,5003.5,2010.0,99.75,TOE\n103,5010.0,2020.5,101.0,CL\n",
        )
        .unwrap();
        let pts = read_pnezd(&path).unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0].number, Numeric::Int(101));
        assert_eq!(pts[0].easting(), 2000.0);
        assert_eq!(pts[0].northing(), 5000.0);
        assert_eq!(pts[0].elevation, Numeric::Real(100.25));
        assert_eq!(pts[0].description, "EP");
        assert_eq!(pts[2].number, Numeric::Int(103));
        assert_eq!(pts[2].description, "CL");
    }

    #[test]
    fn integer_elevations_stay_integer() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("survey.csv");
        fs::write(&path, "1,3,5,100,EP\n2,4,6,101,TOE\n").unwrap();
        let pts = read_pnezd(&path).unwrap();
        assert_eq!(pts[0].elevation, Numeric::Int(100));
        assert_eq!(pts[1].elevation, Numeric::Int(101));
        assert_eq!(pts[0].coord, stationing::Vertex::new(5.0, 3.0));
    }

    #[test]
    fn real_point_numbers_stay_real() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("survey.csv");
        fs::write(&path, "1.5,10.0,20.0,3.0,A\n2,11.0,21.0,4.0,B\n").unwrap();
        let pts = read_pnezd(&path).unwrap();
        assert_eq!(pts[0].number, Numeric::Real(1.5));
        assert_eq!(pts[1].number, Numeric::Real(2.0));
    }

    #[test]
    fn missing_description_column_reads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pnez.csv");
        fs::write(&path, "1,10.0,20.0,3.0\n2,11.0,21.0,4.0\n").unwrap();
        let pts = read_pnezd(&path).unwrap();
        assert_eq!(pts.len(), 2);
        assert!(pts.iter().all(|p| p.description.is_empty()));
    }

    #[test]
    fn non_numeric_coordinate_names_the_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "1,10.0,20.0,3.0,A\n2,11.0,oops,4.0,B\n").unwrap();
        let err = read_pnezd(&path).unwrap_err();
        assert!(format!("{err:#}").contains("row 2"));
    }
}
