use crate::rename::{FolderOutcome, RenameSummary};
use std::fmt;
use std::path::Path;

/// Text report formatter for a renaming run
pub struct TextReport<'a> {
    summary: &'a RenameSummary,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(summary: &'a RenameSummary) -> Self {
        Self { summary }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.summary;

        writeln!(f, "Sequence Folder Renaming")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(f, "Root:            {}", summary.root.display())?;
        writeln!(f, "Patient folders: {}", summary.patient_folders)?;
        writeln!(f, "Sequence folders: {}", summary.folders.len())?;
        if summary.dry_run {
            writeln!(f, "Mode:            dry run")?;
        }
        writeln!(f)?;

        let changed: Vec<_> = summary
            .filter(|o| {
                matches!(
                    o,
                    FolderOutcome::Renamed { .. } | FolderOutcome::WouldRename { .. }
                )
            })
            .collect();
        if !changed.is_empty() {
            writeln!(
                f,
                "{}",
                if summary.dry_run {
                    "Would rename"
                } else {
                    "Renamed"
                }
            )?;
            writeln!(f, "-------")?;
            for report in changed {
                if let Some(to) = report.outcome.destination() {
                    writeln!(f, "  {} -> {}", relative(summary, &report.path), file_name(to))?;
                }
            }
            writeln!(f)?;
        }

        let failed: Vec<_> = summary
            .filter(|o| matches!(o, FolderOutcome::RenameFailed { .. }))
            .collect();
        if !failed.is_empty() {
            writeln!(f, "Failed")?;
            writeln!(f, "------")?;
            for report in failed {
                if let FolderOutcome::RenameFailed { reason, .. } = &report.outcome {
                    writeln!(f, "  {}: {}", relative(summary, &report.path), reason)?;
                }
            }
            writeln!(f)?;
        }

        writeln!(f, "Skipped")?;
        writeln!(f, "-------")?;
        for outcome in [
            FolderOutcome::AlreadyNamed,
            FolderOutcome::NoDicomFile,
            FolderOutcome::NoSequenceName,
        ] {
            let count = summary.filter(|o| *o == outcome).count();
            writeln!(f, "  {:<20}{}", format!("{}:", outcome.simple_name()), count)?;
        }
        let exists = summary
            .filter(|o| matches!(o, FolderOutcome::DestinationExists { .. }))
            .count();
        writeln!(f, "  {:<20}{}", "destination exists:", exists)?;
        writeln!(f)?;

        if summary.dry_run {
            write!(
                f,
                "Done. {} sequence folders would be renamed.",
                summary.would_rename_count()
            )
        } else {
            write!(
                f,
                "Done. Renamed {} sequence folders in total.",
                summary.renamed_count()
            )
        }
    }
}

fn relative(summary: &RenameSummary, path: &Path) -> String {
    path.strip_prefix(&summary.root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_text_report_format() {
        let mut summary = RenameSummary::new(Path::new("/data"), false);
        summary.patient_folders = 1;
        summary.record(
            PathBuf::from("/data/p1/5"),
            FolderOutcome::Renamed {
                to: PathBuf::from("/data/p1/5_T1_AXIAL"),
            },
        );
        summary.record(PathBuf::from("/data/p1/6"), FolderOutcome::NoDicomFile);
        summary.record(
            PathBuf::from("/data/p1/7"),
            FolderOutcome::RenameFailed {
                to: PathBuf::from("/data/p1/7_DWI"),
                reason: "permission denied".to_string(),
            },
        );

        let output = format!("{}", TextReport::new(&summary));

        assert!(output.contains("Sequence Folder Renaming"));
        assert!(output.contains("Patient folders: 1"));
        assert!(output.contains("Sequence folders: 3"));
        assert!(output.contains(&format!(
            "  {} -> 5_T1_AXIAL",
            Path::new("p1/5").display()
        )));
        assert!(output.contains("permission denied"));
        assert!(output.contains("no DICOM file:      1"));
        assert!(output.contains("Done. Renamed 1 sequence folders in total."));
        assert!(!output.contains("dry run"));
    }

    #[test]
    fn test_text_report_dry_run() {
        let mut summary = RenameSummary::new(Path::new("/data"), true);
        summary.patient_folders = 1;
        summary.record(
            PathBuf::from("/data/p1/5"),
            FolderOutcome::WouldRename {
                to: PathBuf::from("/data/p1/5_T2"),
            },
        );

        let output = format!("{}", TextReport::new(&summary));

        assert!(output.contains("Mode:            dry run"));
        assert!(output.contains("Would rename"));
        assert!(output.contains("Done. 1 sequence folders would be renamed."));
    }

    #[test]
    fn test_text_report_empty_run() {
        let summary = RenameSummary::new(Path::new("/data"), false);
        let output = format!("{}", TextReport::new(&summary));

        assert!(output.contains("Sequence folders: 0"));
        assert!(!output.contains("Failed"));
        assert!(output.contains("Done. Renamed 0 sequence folders in total."));
    }
}
