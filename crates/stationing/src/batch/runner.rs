//! Alignment × point loop.

use tracing::{debug, info, warn};

use super::cancel::CancelSignal;
use super::row::{Alignment, Measure, OutputRow, RunOutcome, SkippedAlignment};
use crate::alignment::AlignmentModel;
use crate::cfg::StationCfg;
use crate::survey::SurveyPoint;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Project every point against every alignment.
///
/// Rows come out in alignment-then-point input order. Degenerate alignments
/// are skipped and recorded. When `cancel` fires the partial rows are returned
/// with `cancelled = true`.
pub fn run<C>(
    alignments: &[Alignment],
    points: &[SurveyPoint],
    cfg: StationCfg,
    cancel: &C,
) -> RunOutcome
where
    C: CancelSignal + ?Sized,
{
    let mut out = RunOutcome {
        rows: Vec::with_capacity(alignments.len() * points.len()),
        ..RunOutcome::default()
    };
    for (index, alignment) in alignments.iter().enumerate() {
        if cancel.is_cancelled() {
            out.cancelled = true;
            break;
        }
        let Ok(model) = AlignmentModel::build(&alignment.polyline) else {
            let vertices = alignment.polyline.len();
            warn!(
                alignment = %alignment.name,
                vertices, "skipping alignment with fewer than 2 vertices"
            );
            out.skipped.push(SkippedAlignment {
                index,
                name: alignment.name.clone(),
                vertices,
            });
            continue;
        };
        debug!(
            alignment = %alignment.name,
            vertices = model.vertices().len(),
            length = model.length(),
            "processing alignment"
        );
        if !project_points(&model, &alignment.name, points, cfg, cancel, &mut out.rows) {
            out.cancelled = true;
            break;
        }
    }
    if out.cancelled {
        info!(rows = out.rows.len(), "run cancelled, returning partial rows");
    }
    out
}

fn row_for(model: &AlignmentModel, name: &str, p: &SurveyPoint, cfg: StationCfg) -> OutputRow {
    let (station, offset) = match model.locate(p.coord, cfg.max_offset) {
        Some((s, o)) => (Measure::Value(s), Measure::Value(o)),
        None => (Measure::OutOfRange, Measure::OutOfRange),
    };
    OutputRow {
        alignment: name.to_string(),
        point_number: p.number,
        station,
        offset,
        elevation: p.elevation,
        description: p.description.clone(),
    }
}

/// Append one row per point. Returns `false` if cancelled midway.
#[cfg(not(feature = "parallel"))]
fn project_points<C>(
    model: &AlignmentModel,
    name: &str,
    points: &[SurveyPoint],
    cfg: StationCfg,
    cancel: &C,
    rows: &mut Vec<OutputRow>,
) -> bool
where
    C: CancelSignal + ?Sized,
{
    for p in points {
        if cancel.is_cancelled() {
            return false;
        }
        rows.push(row_for(model, name, p, cfg));
    }
    true
}

/// Append one row per point, projected on the rayon pool. Cancellation is
/// left to the per-alignment check.
#[cfg(feature = "parallel")]
fn project_points<C>(
    model: &AlignmentModel,
    name: &str,
    points: &[SurveyPoint],
    cfg: StationCfg,
    _cancel: &C,
    rows: &mut Vec<OutputRow>,
) -> bool
where
    C: CancelSignal + ?Sized,
{
    let batch: Vec<OutputRow> = points
        .par_iter()
        .map(|p| row_for(model, name, p, cfg))
        .collect();
    rows.extend(batch);
    true
}
