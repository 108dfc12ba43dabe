use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use stationing::cfg::DEFAULT_MAX_OFFSET;
use stationing::report::write_report_file;
use stationing::{CancelSignal, StationCfg, SurveyPoint};
use tracing_subscriber::fmt::SubscriberBuilder;

mod geojson;
mod pnezd;
mod provenance;

use geojson::PointFields;

#[derive(Parser)]
#[command(name = "station-offset")]
#[command(about = "Station and offset of survey points along alignment polylines")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convert a PNEZD file into a GeoJSON point layer
    Import {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// CRS identifier recorded on the layer (not applied)
        #[arg(long, default_value = "EPSG:6529")]
        crs: String,
    },
    /// Compute station and offset of every point against every alignment
    Run(RunArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug)]
struct RunArgs {
    /// GeoJSON with LineString/MultiLineString alignments
    #[arg(long)]
    alignments: PathBuf,
    /// PNEZD file (.csv/.txt) or GeoJSON point layer (.geojson/.json)
    #[arg(long)]
    points: PathBuf,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, default_value_t = DEFAULT_MAX_OFFSET)]
    max_offset: f64,
    /// Alignment attribute holding its name
    #[arg(long, default_value = "name")]
    name_field: String,
    #[arg(long, default_value = "PN")]
    pn_field: String,
    #[arg(long, default_value = "Elevation")]
    elevation_field: String,
    #[arg(long, default_value = "Description")]
    description_field: String,
    /// Skip the provenance sidecar
    #[arg(long)]
    no_provenance: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Import { input, out, crs } => import(&input, &out, &crs),
        Action::Run(args) => {
            let cancel = Arc::new(AtomicBool::new(false));
            let flag = cancel.clone();
            ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
                .context("installing Ctrl-C handler")?;
            run(&args, &cancel).map(|_| ())
        }
        Action::Report => report(),
    }
}

fn import(input: &Path, out: &Path, crs: &str) -> Result<()> {
    let points = pnezd::read_pnezd(input)?;
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        crs,
        points = points.len(),
        "import"
    );
    geojson::write_collection(out, &geojson::points_collection(&points, crs))
}

fn load_points(args: &RunArgs) -> Result<Vec<SurveyPoint>> {
    let ext = args
        .points
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("geojson") | Some("json") => {
            let fields = PointFields {
                number: args.pn_field.clone(),
                elevation: args.elevation_field.clone(),
                description: args.description_field.clone(),
            };
            geojson::points_from(&geojson::read_collection(&args.points)?, &fields)
        }
        _ => pnezd::read_pnezd(&args.points),
    }
}

/// Returns the number of rows written.
fn run<C: CancelSignal + ?Sized>(args: &RunArgs, cancel: &C) -> Result<usize> {
    let cfg = StationCfg::with_max_offset(args.max_offset);
    cfg.validate()?;
    let alignments =
        geojson::alignments_from(&geojson::read_collection(&args.alignments)?, &args.name_field)?;
    let points = load_points(args)?;
    tracing::info!(
        alignments = alignments.len(),
        points = points.len(),
        max_offset = cfg.max_offset,
        "run"
    );

    let outcome = stationing::run(&alignments, &points, cfg, cancel);
    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    write_report_file(&args.out, &outcome.rows)
        .with_context(|| format!("writing report {}", args.out.display()))?;
    if !outcome.skipped.is_empty() {
        tracing::warn!(
            skipped = outcome.skipped.len(),
            "alignments with fewer than 2 vertices produced no rows"
        );
    }
    if outcome.cancelled {
        tracing::warn!(rows = outcome.rows.len(), "cancelled, report is partial");
    }

    if !args.no_provenance {
        let record = provenance::RunRecord {
            code_rev: provenance::current_git_rev(),
            version: stationing::VERSION,
            alignments: args.alignments.display().to_string(),
            points: args.points.display().to_string(),
            max_offset: cfg.max_offset,
            rows: outcome.rows.len(),
            skipped_alignments: outcome.skipped.iter().map(|s| s.name.clone()).collect(),
            cancelled: outcome.cancelled,
            outputs: vec![args.out.display().to_string()],
        };
        provenance::write_sidecar(&args.out, &record)?;
    }
    Ok(outcome.rows.len())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": stationing::VERSION,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
