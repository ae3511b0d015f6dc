//! Locating a representative DICOM file inside a sequence folder

use crate::types::{DiscoveryDepth, DiscoveryOptions};
use log::debug;
use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Finds the first file in `folder` that looks like a DICOM file
///
/// A file qualifies when its name has no `.` at all, or ends in `.dcm` or
/// `.dicom` (any case). With `require_preamble`, extensionless files must
/// also carry the `DICM` magic. The first match in directory enumeration
/// order wins; that order is whatever the filesystem yields.
pub fn find_first_dicom(folder: &Path, options: &DiscoveryOptions) -> Option<PathBuf> {
    let found = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(options.depth.max_depth())
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .find(|path| qualifies(path, options));

    if found.is_none() {
        let scope = match options.depth {
            DiscoveryDepth::Direct => "directly in",
            DiscoveryDepth::Recursive => "anywhere under",
        };
        debug!("No DICOM file {} {}", scope, folder.display());
    }
    found
}

fn qualifies(path: &Path, options: &DiscoveryOptions) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    match classify_name(name) {
        NameKind::DicomExtension => true,
        NameKind::Extensionless => !options.require_preamble || has_dicom_preamble(path),
        NameKind::Other => false,
    }
}

#[derive(Debug, PartialEq, Eq)]
enum NameKind {
    DicomExtension,
    Extensionless,
    Other,
}

/// Classifies a file name by its extension
///
/// Any `.` in the name counts, so dotfiles such as `.DS_Store` are not
/// extensionless.
fn classify_name(name: &OsStr) -> NameKind {
    let name = name.to_string_lossy().to_lowercase();
    if !name.contains('.') {
        NameKind::Extensionless
    } else if name.ends_with(".dcm") || name.ends_with(".dicom") {
        NameKind::DicomExtension
    } else {
        NameKind::Other
    }
}

/// Checks if a file has a DICOM header
///
/// Part 10 files start with a 128-byte preamble followed by the 4-byte
/// `DICM` magic.
pub fn has_dicom_preamble(path: &Path) -> bool {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };

    let mut buffer = [0u8; 132];
    match file.read_exact(&mut buffer) {
        Ok(()) => &buffer[128..132] == b"DICM",
        Err(_) => false,
    }
}
