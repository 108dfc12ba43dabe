use anyhow::{Context, Result};
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What a station/offset run consumed and produced.
#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub code_rev: String,
    pub version: &'static str,
    pub alignments: String,
    pub points: String,
    pub max_offset: f64,
    pub rows: usize,
    pub skipped_alignments: Vec<String>,
    pub cancelled: bool,
    pub outputs: Vec<String>,
}

/// Write `<artifact-stem>.provenance.json` next to the artifact.
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, record: &RunRecord) -> Result<PathBuf> {
    let path = provenance_path(artifact.as_ref());
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    fs::write(&path, serde_json::to_vec_pretty(record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("report"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash from the build env, the runtime env, or `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()))
        .or_else(|| {
            Command::new("git")
                .args(["rev-parse", "HEAD"])
                .output()
                .ok()
                .filter(|o| o.status.success())
                .and_then(|o| String::from_utf8(o.stdout).ok())
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_report() {
        let derived = provenance_path(Path::new("/tmp/out/stations.csv"));
        assert_eq!(derived, Path::new("/tmp/out/stations.provenance.json"));
    }

    #[test]
    fn sidecar_records_run_counts() {
        let dir = tempdir().unwrap();
        let report = dir.path().join("so.csv");
        let record = RunRecord {
            code_rev: "abc".into(),
            version: stationing::VERSION,
            alignments: "lines.geojson".into(),
            points: "pts.csv".into(),
            max_offset: 50.0,
            rows: 6,
            skipped_alignments: vec!["stub".into()],
            cancelled: false,
            outputs: vec![report.to_string_lossy().into_owned()],
        };
        let path = write_sidecar(&report, &record).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["rows"], 6);
        assert_eq!(parsed["skipped_alignments"][0], "stub");
        assert_eq!(parsed["outputs"][0], report.to_string_lossy().as_ref());
    }
}
