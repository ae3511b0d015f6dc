use crate::error::Result;
use crate::types::{NameTag, SequenceName};
use dicom_dictionary_std::tags::PIXEL_DATA;
use dicom_object::OpenFileOptions;
use log::debug;
use std::path::Path;

use super::tags::require_string_value;

/// Reads the naming tag from a DICOM file and sanitizes it
///
/// The file is parsed only up to PixelData. Any failure (unreadable file,
/// not DICOM, tag missing, value empty after sanitization) yields `None`;
/// the cause is logged at debug level and not surfaced.
pub fn read_sequence_name(path: &Path, tag: NameTag) -> Option<SequenceName> {
    let raw = match read_raw_tag(path, tag) {
        Ok(raw) => raw,
        Err(e) => {
            debug!("No {} in {}: {}", tag.keyword(), path.display(), e);
            return None;
        }
    };

    let name = SequenceName::sanitize(&raw);
    if name.is_none() {
        debug!(
            "{} '{}' in {} is empty after sanitization",
            tag.keyword(),
            raw,
            path.display()
        );
    }
    name
}

/// Opens the file without pixel data and returns the raw tag value
fn read_raw_tag(path: &Path, tag: NameTag) -> Result<String> {
    let dcm = OpenFileOptions::new()
        .read_until(PIXEL_DATA)
        .open_file(path)?;
    require_string_value(&dcm, tag.tag())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeqnameError;
    use crate::test_utils::{write_dicom, write_dicom_with};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_reads_and_sanitizes_sequence_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("IM0001.dcm");
        write_dicom(&path, Some("T1 AXIAL"));

        let name = read_sequence_name(&path, NameTag::SequenceName).unwrap();
        assert_eq!(name.as_str(), "T1_AXIAL");
    }

    #[test]
    fn test_missing_tag_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("IM0001");
        write_dicom(&path, None);

        assert!(read_sequence_name(&path, NameTag::SequenceName).is_none());
    }

    #[test]
    fn test_tag_empty_after_sanitization_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("IM0001");
        write_dicom(&path, Some("**"));

        assert!(read_sequence_name(&path, NameTag::SequenceName).is_none());
    }

    #[test]
    fn test_not_dicom_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fake.dcm");
        fs::write(&path, b"definitely not a DICOM file").unwrap();

        assert!(read_sequence_name(&path, NameTag::SequenceName).is_none());
    }

    #[test]
    fn test_nonexistent_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.dcm");

        assert!(read_sequence_name(&path, NameTag::SequenceName).is_none());
    }

    #[test]
    fn test_alternate_tag() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("IM0001.dcm");
        write_dicom_with(&path, Some("*se2d1"), Some("t2_tse_sag 384"));

        let seq = read_sequence_name(&path, NameTag::SequenceName).unwrap();
        assert_eq!(seq.as_str(), "se2d1");

        let desc = read_sequence_name(&path, NameTag::SeriesDescription).unwrap();
        assert_eq!(desc.as_str(), "t2_tse_sag_384");

        assert!(read_sequence_name(&path, NameTag::ProtocolName).is_none());
    }

    #[test]
    fn test_read_raw_tag_errors_are_typed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("IM0001");
        write_dicom(&path, None);

        let err = read_raw_tag(&path, NameTag::SequenceName).unwrap_err();
        assert!(matches!(err, SeqnameError::TagNotFound(_)));

        let bogus = temp_dir.path().join("bogus.dcm");
        fs::write(&bogus, [0u8; 16]).unwrap();
        let err = read_raw_tag(&bogus, NameTag::SequenceName).unwrap_err();
        assert!(matches!(err, SeqnameError::DicomError(_)));
    }
}
