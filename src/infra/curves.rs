// ============================================================
// Layer 6 — ROC Curve Export
// ============================================================
// The CurveSink implementation behind the plotting collaborator
// boundary. Each per-class ROC curve becomes a run of CSV rows
//
//   class,auc,fpr,tpr
//
// in {out_dir}/roc_curves.csv — enough for any external tool to
// draw one curve per class (FPR on the x axis, TPR on the y
// axis, diagonal reference line) without recomputing anything.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::roc::RocCurve;
use crate::domain::traits::CurveSink;

/// Writes ROC curve points to a CSV file for external plotting.
pub struct CsvCurveSink {
    dir: PathBuf,
}

impl CsvCurveSink {
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: PathBuf::from(dir.into()) }
    }

    fn csv_path(&self) -> PathBuf {
        self.dir.join("roc_curves.csv")
    }
}

impl CurveSink for CsvCurveSink {
    fn consume(&self, curves: &[RocCurve]) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create output directory '{}'", self.dir.display()))?;

        let path = self.csv_path();
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("Cannot create '{}'", path.display()))?;

        writer.write_record(["class", "auc", "fpr", "tpr"])?;
        for curve in curves {
            for point in &curve.points {
                writer.write_record([
                    curve.class.to_string(),
                    format!("{:.6}", curve.auc),
                    format!("{:.6}", point.fpr),
                    format!("{:.6}", point.tpr),
                ])?;
            }
        }
        writer.flush()?;

        tracing::info!("ROC curve points written to '{}'", path.display());
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roc::RocPoint;

    #[test]
    fn test_writes_one_row_per_point() {
        let dir = std::env::temp_dir().join("rs_curves_test");
        let _ = fs::remove_dir_all(&dir);

        let sink = CsvCurveSink::new(dir.to_str().unwrap().to_string());
        let curves = vec![
            RocCurve {
                class: 0,
                points: vec![
                    RocPoint { fpr: 0.0, tpr: 0.0 },
                    RocPoint { fpr: 0.5, tpr: 1.0 },
                    RocPoint { fpr: 1.0, tpr: 1.0 },
                ],
                auc: 0.75,
            },
            RocCurve {
                class: 1,
                points: vec![
                    RocPoint { fpr: 0.0, tpr: 0.0 },
                    RocPoint { fpr: 1.0, tpr: 1.0 },
                ],
                auc: 0.5,
            },
        ];
        sink.consume(&curves).unwrap();

        let content = fs::read_to_string(sink.csv_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        // header + 3 points + 2 points
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "class,auc,fpr,tpr");
        assert!(lines[1].starts_with("0,0.750000,"));
        assert!(lines[4].starts_with("1,0.500000,"));
    }
}
