pub mod cli;
pub mod discovery;
pub mod error;
pub mod extraction;
pub mod rename;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use cli::report::TextReport;
pub use discovery::find_first_dicom;
pub use error::{Result, SeqnameError};
pub use extraction::read_sequence_name;
pub use rename::{FolderOutcome, FolderReport, RenameSummary, Renamer};
pub use types::*;
