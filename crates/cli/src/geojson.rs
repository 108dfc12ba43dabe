//! Minimal GeoJSON I/O for alignments and survey points.
//!
//! Only what the tool exchanges: `Point`, `LineString` and `MultiLineString`
//! geometries with a flat property map. Coordinates are taken as planar
//! `[x, y, ...]`; any third ordinate is ignored.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use stationing::{Alignment, Numeric, Polyline, SurveyPoint, Vertex};

#[derive(Debug, Deserialize, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<Value>,
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Vec<f64> },
    LineString { coordinates: Vec<Vec<f64>> },
    MultiLineString { coordinates: Vec<Vec<Vec<f64>>> },
    #[serde(other)]
    Unsupported,
}

/// Attribute names used to read survey points from a point layer.
#[derive(Clone, Debug)]
pub struct PointFields {
    pub number: String,
    pub elevation: String,
    pub description: String,
}

impl Default for PointFields {
    fn default() -> Self {
        Self {
            number: "PN".into(),
            elevation: "Elevation".into(),
            description: "Description".into(),
        }
    }
}

pub fn read_collection(path: &Path) -> Result<FeatureCollection> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing GeoJSON {}", path.display()))
}

pub fn write_collection(path: &Path, fc: &FeatureCollection) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(fc)?)
        .with_context(|| format!("writing {}", path.display()))
}

fn vertex(pos: &[f64], feature: usize) -> Result<Vertex> {
    match pos {
        [x, y, ..] => Ok(Vertex::new(*x, *y)),
        _ => bail!("feature {feature}: position needs at least 2 ordinates"),
    }
}

fn vertices(line: &[Vec<f64>], feature: usize) -> Result<Vec<Vertex>> {
    line.iter().map(|p| vertex(p, feature)).collect()
}

fn property<'a>(feature: &'a Feature, key: &str) -> Option<&'a Value> {
    feature
        .properties
        .as_ref()
        .and_then(|m| m.get(key))
        .filter(|v| !v.is_null())
}

fn value_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JSON integers stay `Numeric::Int`; floats and numeric strings read as real.
fn value_numeric(v: &Value) -> Option<Numeric> {
    match v {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(Numeric::Int(i)),
            None => n.as_f64().map(Numeric::Real),
        },
        Value::String(s) => s.trim().parse().ok().map(Numeric::Real),
        _ => None,
    }
}

/// Alignments in feature order. Multi-part lines keep their first part;
/// non-line features are skipped.
pub fn alignments_from(fc: &FeatureCollection, name_field: &str) -> Result<Vec<Alignment>> {
    let mut out = Vec::with_capacity(fc.features.len());
    for (idx, feature) in fc.features.iter().enumerate() {
        let name = match property(feature, name_field) {
            Some(v) => value_text(v),
            None => {
                tracing::warn!(feature = idx, name_field, "alignment has no name attribute");
                format!("alignment {idx}")
            }
        };
        let polyline = match &feature.geometry {
            Some(Geometry::LineString { coordinates }) => Polyline::new(vertices(coordinates, idx)?),
            Some(Geometry::MultiLineString { coordinates }) => {
                if coordinates.len() > 1 {
                    tracing::info!(
                        alignment = %name,
                        parts = coordinates.len(),
                        "multipart geometry, using first part only"
                    );
                }
                let parts = coordinates
                    .iter()
                    .map(|part| vertices(part, idx))
                    .collect::<Result<Vec<_>>>()?;
                Polyline::from_parts(parts)
            }
            _ => {
                tracing::warn!(feature = idx, alignment = %name, "not a line feature, skipped");
                continue;
            }
        };
        out.push(Alignment::new(name, polyline));
    }
    Ok(out)
}

/// Survey points from a point layer, reading attributes named by `fields`.
pub fn points_from(fc: &FeatureCollection, fields: &PointFields) -> Result<Vec<SurveyPoint>> {
    let mut out = Vec::with_capacity(fc.features.len());
    for (idx, feature) in fc.features.iter().enumerate() {
        let Some(Geometry::Point { coordinates }) = &feature.geometry else {
            bail!("feature {idx}: expected Point geometry");
        };
        let coord = vertex(coordinates, idx)?;
        let number = property(feature, &fields.number)
            .and_then(value_numeric)
            .with_context(|| format!("feature {idx}: missing numeric '{}'", fields.number))?;
        let elevation = property(feature, &fields.elevation)
            .and_then(value_numeric)
            .with_context(|| format!("feature {idx}: missing numeric '{}'", fields.elevation))?;
        let description = property(feature, &fields.description)
            .map(value_text)
            .unwrap_or_default();
        out.push(SurveyPoint::new(number, coord, elevation, description));
    }
    Ok(out)
}

fn number_value(n: Numeric) -> Value {
    match n {
        Numeric::Int(i) => Value::from(i),
        Numeric::Real(x) => Value::from(x),
    }
}

/// Point layer with `PN, Northing, Easting, Elevation, Description` attributes
/// and a named CRS member. The CRS is recorded, not applied.
pub fn points_collection(points: &[SurveyPoint], crs: &str) -> FeatureCollection {
    let features = points
        .iter()
        .map(|p| {
            let mut props = Map::new();
            props.insert("PN".into(), number_value(p.number));
            props.insert("Northing".into(), Value::from(p.northing()));
            props.insert("Easting".into(), Value::from(p.easting()));
            props.insert("Elevation".into(), number_value(p.elevation));
            props.insert("Description".into(), Value::from(p.description.clone()));
            Feature {
                kind: "Feature".into(),
                geometry: Some(Geometry::Point {
                    coordinates: vec![p.easting(), p.northing()],
                }),
                properties: Some(props),
            }
        })
        .collect();
    FeatureCollection {
        kind: "FeatureCollection".into(),
        crs: Some(json!({ "type": "name", "properties": { "name": crs } })),
        features,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> FeatureCollection {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn alignments_keep_order_and_first_part() {
        let fc = parse(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"name":"CL-A"},
                 "geometry":{"type":"LineString","coordinates":[[0,0],[10,0,5.5]]}},
                {"type":"Feature","properties":{"name":7},
                 "geometry":{"type":"MultiLineString","coordinates":[[[0,0],[0,10]],[[50,50],[60,60]]]}},
                {"type":"Feature","properties":{"name":"pt"},
                 "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}},
                {"type":"Feature","properties":{},
                 "geometry":{"type":"LineString","coordinates":[[1,1]]}}
            ]}"#,
        );
        let als = alignments_from(&fc, "name").unwrap();
        assert_eq!(als.len(), 3);
        assert_eq!(als[0].name, "CL-A");
        assert_eq!(als[0].polyline.vertices()[1], Vertex::new(10.0, 0.0));
        assert_eq!(als[1].name, "7");
        assert_eq!(als[1].polyline.len(), 2);
        assert_eq!(als[1].polyline.vertices()[1], Vertex::new(0.0, 10.0));
        // Unnamed, single-vertex line still comes through; the runner skips it.
        assert_eq!(als[2].name, "alignment 3");
        assert_eq!(als[2].polyline.len(), 1);
    }

    #[test]
    fn points_read_configured_fields() {
        let fc = parse(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"pt":12,"z":"101.5","desc":"EP"},
                 "geometry":{"type":"Point","coordinates":[2000.0,5000.0]}},
                {"type":"Feature","properties":{"pt":13.5,"z":99},
                 "geometry":{"type":"Point","coordinates":[2001.0,5001.0]}}
            ]}"#,
        );
        let fields = PointFields {
            number: "pt".into(),
            elevation: "z".into(),
            description: "desc".into(),
        };
        let pts = points_from(&fc, &fields).unwrap();
        assert_eq!(pts[0].number, Numeric::Int(12));
        assert_eq!(pts[0].elevation, Numeric::Real(101.5));
        assert_eq!(pts[0].description, "EP");
        assert_eq!(pts[0].coord, Vertex::new(2000.0, 5000.0));
        assert_eq!(pts[1].number, Numeric::Real(13.5));
        assert_eq!(pts[1].elevation, Numeric::Int(99));
        assert_eq!(pts[1].description, "");
    }

    #[test]
    fn point_without_elevation_is_an_error() {
        let fc = parse(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"PN":1},
                 "geometry":{"type":"Point","coordinates":[0,0]}}
            ]}"#,
        );
        let err = points_from(&fc, &PointFields::default()).unwrap_err();
        assert!(format!("{err:#}").contains("Elevation"));
    }

    #[test]
    fn point_layer_reads_back() {
        let pts = vec![
            SurveyPoint::from_pnezd(5, 5000.0, 2000.0, 100.0, "CL"),
            SurveyPoint::from_pnezd(6, 5001.0, 2001.0, 101, "EP"),
        ];
        let fc = points_collection(&pts, "EPSG:6529");
        let text = serde_json::to_string(&fc).unwrap();
        assert!(text.contains("EPSG:6529"));
        let back = points_from(&parse(&text), &PointFields::default()).unwrap();
        assert_eq!(back, pts);
    }
}
