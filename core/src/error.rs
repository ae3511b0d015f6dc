use std::path::PathBuf;
use thiserror::Error;

/// Result type for seqname operations
pub type Result<T> = std::result::Result<T, SeqnameError>;

/// Error types for seqname operations
#[derive(Error, Debug)]
pub enum SeqnameError {
    /// DICOM reading error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// Tag not found in DICOM file
    #[error("Tag not found: {0}")]
    TagNotFound(String),

    /// Tag present but unusable as a folder name
    #[error("Invalid tag value: {0}")]
    InvalidValue(String),

    /// Folder rename failed
    #[error("Failed to rename '{}' to '{}': {source}", from.display(), to.display())]
    RenameError {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for SeqnameError {
    fn from(e: dicom_object::ReadError) -> Self {
        SeqnameError::DicomError(format!("{}", e))
    }
}

impl From<dicom_core::value::ConvertValueError> for SeqnameError {
    fn from(e: dicom_core::value::ConvertValueError) -> Self {
        SeqnameError::InvalidValue(format!("{}", e))
    }
}
