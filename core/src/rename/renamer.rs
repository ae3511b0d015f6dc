use crate::discovery::find_first_dicom;
use crate::error::{Result, SeqnameError};
use crate::extraction::read_sequence_name;
use crate::types::RenameConfig;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use super::outcome::{FolderOutcome, RenameSummary};

/// Walks a root folder and renames sequence folders after their sequence name
///
/// Layout: `root/<patient>/<sequence>/<files>`. Each sequence folder is
/// renamed to `<sequence>_<SequenceName>` when the first DICOM file found in
/// it carries a usable name.
///
/// # Example
///
/// ```no_run
/// use seqname_core::{RenameConfig, Renamer};
/// use std::path::Path;
///
/// let summary = Renamer::new(RenameConfig::default())
///     .run(Path::new("/data/mr_exports"))
///     .unwrap();
/// println!("renamed {} folders", summary.renamed_count());
/// ```
pub struct Renamer {
    config: RenameConfig,
}

impl Renamer {
    pub fn new(config: RenameConfig) -> Self {
        Self { config }
    }

    /// Processes every patient folder under `root`
    ///
    /// # Errors
    ///
    /// Only fails if `root` itself cannot be listed. Problems with
    /// individual patient or sequence folders are logged and recorded in
    /// the summary.
    pub fn run(&self, root: &Path) -> Result<RenameSummary> {
        info!("Processing root folder: {}", root.display());
        let mut summary = RenameSummary::new(root, self.config.dry_run);

        let patients = list_subdirectories(root)?;
        if patients.is_empty() {
            error!("No patient folders found in {}", root.display());
            return Ok(summary);
        }

        for patient in patients {
            summary.patient_folders += 1;
            self.process_patient(&patient, &mut summary);
        }

        info!(
            "Done: {} renamed, {} failed, {} skipped",
            summary.renamed_count(),
            summary.failed_count(),
            summary.skipped_count()
        );
        Ok(summary)
    }

    /// Processes the sequence folders of one patient folder
    pub fn process_patient(&self, patient: &Path, summary: &mut RenameSummary) {
        info!("Processing patient folder: {}", display_name(patient));

        let sequences: Vec<PathBuf> = match list_subdirectories(patient) {
            Ok(dirs) => dirs
                .into_iter()
                .filter(|dir| self.config.filter.accepts(&display_name(dir)))
                .collect(),
            Err(e) => {
                warn!("Skipping {}: {}", patient.display(), e);
                return;
            }
        };

        if sequences.is_empty() {
            warn!(
                "No sequence folders in '{}', skipping",
                display_name(patient)
            );
            return;
        }

        let progress = self.progress_bar(sequences.len() as u64, &display_name(patient));
        for sequence in sequences {
            let outcome = self.process_sequence_folder(&sequence);
            if let FolderOutcome::RenameFailed { reason, .. } = &outcome {
                progress.suspend(|| error!("{}", reason));
            }
            summary.record(sequence, outcome);
            progress.inc(1);
        }
        progress.finish_and_clear();
    }

    /// Discovers, reads and conditionally renames one sequence folder
    pub fn process_sequence_folder(&self, folder: &Path) -> FolderOutcome {
        let Some(file) = find_first_dicom(folder, &self.config.discovery) else {
            return FolderOutcome::NoDicomFile;
        };

        let Some(name) = read_sequence_name(&file, self.config.tag) else {
            debug!("No sequence name for {}", folder.display());
            return FolderOutcome::NoSequenceName;
        };

        let old_name = display_name(folder);
        let Some(new_name) = name.renamed_folder(&old_name) else {
            debug!("'{}' already carries '{}'", old_name, name);
            return FolderOutcome::AlreadyNamed;
        };

        let to = folder.with_file_name(&new_name);
        if fs::symlink_metadata(&to).is_ok() {
            debug!("Destination {} already exists", to.display());
            return FolderOutcome::DestinationExists { to };
        }

        if self.config.dry_run {
            info!("Would rename '{}' -> '{}'", old_name, new_name);
            return FolderOutcome::WouldRename { to };
        }

        match rename_folder(folder, &to) {
            Ok(()) => {
                debug!("Renamed '{}' -> '{}'", old_name, new_name);
                FolderOutcome::Renamed { to }
            }
            Err(e) => FolderOutcome::RenameFailed {
                to,
                reason: e.to_string(),
            },
        }
    }

    fn progress_bar(&self, len: u64, patient: &str) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }
        let style = ProgressStyle::with_template("   {prefix} [{bar:30}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        ProgressBar::new(len)
            .with_style(style)
            .with_prefix(patient.to_string())
    }
}

fn rename_folder(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|source| SeqnameError::RenameError {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

/// Directories directly inside `dir`, sorted by name
fn list_subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
