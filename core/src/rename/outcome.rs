use std::path::{Path, PathBuf};

/// What happened to a single sequence folder
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(
    feature = "json",
    serde(tag = "outcome", rename_all = "kebab-case")
)]
pub enum FolderOutcome {
    /// Folder was renamed
    Renamed { to: PathBuf },

    /// Dry run: folder would have been renamed
    WouldRename { to: PathBuf },

    /// Folder name already carries the sequence name
    AlreadyNamed,

    /// Something already exists at the computed destination
    DestinationExists { to: PathBuf },

    /// No qualifying file in the folder
    NoDicomFile,

    /// File found, but no usable sequence name in it
    NoSequenceName,

    /// The filesystem refused the rename
    RenameFailed { to: PathBuf, reason: String },
}

impl FolderOutcome {
    /// Short label for reports
    pub fn simple_name(&self) -> &'static str {
        match self {
            FolderOutcome::Renamed { .. } => "renamed",
            FolderOutcome::WouldRename { .. } => "would rename",
            FolderOutcome::AlreadyNamed => "already named",
            FolderOutcome::DestinationExists { .. } => "destination exists",
            FolderOutcome::NoDicomFile => "no DICOM file",
            FolderOutcome::NoSequenceName => "no sequence name",
            FolderOutcome::RenameFailed { .. } => "rename failed",
        }
    }

    /// Destination path, for outcomes that computed one
    pub fn destination(&self) -> Option<&Path> {
        match self {
            FolderOutcome::Renamed { to }
            | FolderOutcome::WouldRename { to }
            | FolderOutcome::DestinationExists { to }
            | FolderOutcome::RenameFailed { to, .. } => Some(to),
            _ => None,
        }
    }
}

/// Outcome for one sequence folder, keyed by its original path
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct FolderReport {
    pub path: PathBuf,
    #[cfg_attr(feature = "json", serde(flatten))]
    pub outcome: FolderOutcome,
}

/// Result of a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct RenameSummary {
    /// Root folder that was processed
    pub root: PathBuf,

    /// Number of patient folders visited
    pub patient_folders: usize,

    /// One entry per sequence folder examined
    pub folders: Vec<FolderReport>,

    /// Whether the run was a dry run
    pub dry_run: bool,
}

impl RenameSummary {
    pub fn new(root: &Path, dry_run: bool) -> Self {
        Self {
            root: root.to_path_buf(),
            dry_run,
            ..Self::default()
        }
    }

    pub fn record(&mut self, path: PathBuf, outcome: FolderOutcome) {
        self.folders.push(FolderReport { path, outcome });
    }

    /// Number of folders actually renamed
    pub fn renamed_count(&self) -> usize {
        self.count(|o| matches!(o, FolderOutcome::Renamed { .. }))
    }

    /// Number of folders a dry run would have renamed
    pub fn would_rename_count(&self) -> usize {
        self.count(|o| matches!(o, FolderOutcome::WouldRename { .. }))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, FolderOutcome::RenameFailed { .. }))
    }

    /// Number of folders left alone for any reason other than failure
    pub fn skipped_count(&self) -> usize {
        self.folders.len()
            - self.renamed_count()
            - self.would_rename_count()
            - self.failed_count()
    }

    /// Reports whose outcome matches the predicate
    pub fn filter<'a>(
        &'a self,
        pred: impl Fn(&FolderOutcome) -> bool + 'a,
    ) -> impl Iterator<Item = &'a FolderReport> + 'a {
        self.folders.iter().filter(move |r| pred(&r.outcome))
    }

    fn count(&self, pred: impl Fn(&FolderOutcome) -> bool) -> usize {
        self.folders.iter().filter(|r| pred(&r.outcome)).count()
    }
}
