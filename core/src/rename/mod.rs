//! Sequence folder renaming
//!
//! Drives discovery and tag reading over a `root/<patient>/<sequence>` tree
//! and records what happened to each sequence folder.

mod outcome;
mod renamer;

pub use outcome::{FolderOutcome, FolderReport, RenameSummary};
pub use renamer::Renamer;
