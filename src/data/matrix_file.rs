use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::{MATRIX_VERSION, OUTPUT_PATH, matrix_filename};
use crate::passage::WaitingTimeMatrix;

/// On-disk encoding, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixFormat {
    /// `.bin`: compact cache format.
    Bincode,
    /// `.json`: for external plotting tools.
    Json,
}

impl MatrixFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("bin") => Ok(MatrixFormat::Bincode),
            Some("json") => Ok(MatrixFormat::Json),
            other => bail!(
                "Unsupported matrix file extension {:?} for {:?} (expected .bin or .json)",
                other,
                path
            ),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            MatrixFormat::Bincode => "bin",
            MatrixFormat::Json => "json",
        }
    }
}

/// Serialized wrapper around a computed matrix.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MatrixFile {
    pub version: f64,
    pub timestamp_ms: i64,
    /// Width of one series step; offsets are in steps.
    pub step_seconds: u64,
    pub matrix: WaitingTimeMatrix,
}

impl MatrixFile {
    pub fn new(step_seconds: u64, matrix: WaitingTimeMatrix) -> Self {
        Self {
            version: MATRIX_VERSION,
            timestamp_ms: Utc::now().timestamp_millis(),
            step_seconds,
            matrix,
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let format = MatrixFormat::from_path(path)?;
        let file = File::open(path).context(format!("Failed to open matrix file: {:?}", path))?;
        let mut reader = BufReader::new(file);
        let matrix_file: MatrixFile = match format {
            MatrixFormat::Bincode => bincode::deserialize_from(&mut reader)
                .context(format!("Failed to deserialize matrix: {:?}", path))?,
            MatrixFormat::Json => serde_json::from_reader(&mut reader)
                .context(format!("Failed to parse matrix JSON: {:?}", path))?,
        };

        if matrix_file.version != MATRIX_VERSION {
            bail!(
                "Matrix file {:?} has version {}, expected {}",
                path,
                matrix_file.version,
                MATRIX_VERSION
            );
        }
        Ok(matrix_file)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let format = MatrixFormat::from_path(path)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        match format {
            MatrixFormat::Bincode => bincode::serialize_into(&mut writer, self)
                .context(format!("Failed to serialize matrix to: {}", path.display())),
            MatrixFormat::Json => serde_json::to_writer_pretty(&mut writer, self)
                .context(format!("Failed to write matrix JSON to: {}", path.display())),
        }
    }

    pub fn default_path(step_seconds: u64, format: MatrixFormat) -> PathBuf {
        PathBuf::from(OUTPUT_PATH).join(matrix_filename(step_seconds, format.extension()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passage::{BuildOptions, compute_waiting_times};

    fn sample_matrix() -> WaitingTimeMatrix {
        compute_waiting_times(
            vec![100.0, 102.0, 101.0, 105.0, 99.0],
            [5.0, 2.0],
            BuildOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn round_trips_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let original = MatrixFile::new(60, sample_matrix());

        for name in ["nested/out.bin", "out.json"] {
            let path = dir.path().join(name);
            original.save_to_path(&path).unwrap();
            let loaded = MatrixFile::load_from_path(&path).unwrap();
            assert_eq!(loaded, original, "{name}");
        }
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = MatrixFile::new(60, sample_matrix())
            .save_to_path(&dir.path().join("out.csv"))
            .unwrap_err();
        assert!(err.to_string().contains("Unsupported matrix file extension"));
    }

    #[test]
    fn version_mismatch_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.json");
        let mut stale = MatrixFile::new(60, sample_matrix());
        stale.version = MATRIX_VERSION + 1.0;
        stale.save_to_path(&path).unwrap();

        let err = MatrixFile::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("has version"), "{err}");
    }

    #[test]
    fn default_path_uses_output_directory() {
        let path = MatrixFile::default_path(60, MatrixFormat::Json);
        assert_eq!(path, PathBuf::from("waiting_times/waiting_times_1m_v1.json"));
    }
}
