pub mod report;

use crate::types::{DiscoveryDepth, NameTag, RenameConfig, SequenceFilter};
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Command-line arguments for seqname
#[derive(Parser, Debug)]
#[command(name = "seqname")]
#[command(about = "Rename DICOM sequence folders after the sequence name in their metadata")]
#[command(version)]
pub struct Cli {
    /// Root folder containing patient folders (prompted for if omitted)
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Search sequence folders recursively for a DICOM file
    #[arg(short, long)]
    pub recursive: bool,

    /// Only treat numeric subfolders (e.g. "5", "12") as sequence folders
    #[arg(short, long)]
    pub numeric_only: bool,

    /// Require the DICM preamble for files without an extension
    #[arg(long)]
    pub require_preamble: bool,

    /// Metadata attribute used to build the new folder name
    #[arg(short, long, default_value = "sequence-name")]
    pub tag: TagArg,

    /// Report what would be renamed without renaming anything
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Hide progress bars
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the library configuration from the parsed flags
    pub fn rename_config(&self) -> RenameConfig {
        let depth = if self.recursive {
            DiscoveryDepth::Recursive
        } else {
            DiscoveryDepth::Direct
        };
        let filter = if self.numeric_only {
            SequenceFilter::Numeric
        } else {
            SequenceFilter::All
        };
        RenameConfig::default()
            .with_depth(depth)
            .require_preamble(self.require_preamble)
            .with_filter(filter)
            .with_tag(self.tag.clone().into())
            .dry_run(self.dry_run)
            .show_progress(!self.quiet)
    }
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// Naming attribute options
#[derive(Debug, Clone, ValueEnum)]
pub enum TagArg {
    /// SequenceName (0018,0024)
    SequenceName,
    /// SeriesDescription (0008,103E)
    SeriesDescription,
    /// ProtocolName (0018,1030)
    ProtocolName,
}

impl From<TagArg> for NameTag {
    fn from(arg: TagArg) -> Self {
        match arg {
            TagArg::SequenceName => NameTag::SequenceName,
            TagArg::SeriesDescription => NameTag::SeriesDescription,
            TagArg::ProtocolName => NameTag::ProtocolName,
        }
    }
}

/// Asks for the root folder on the console
///
/// Blocks until a line is read. Surrounding quotes (as left by drag and
/// drop into a terminal) are stripped. Returns `None` on empty input or EOF.
pub fn prompt_for_root(
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<Option<PathBuf>> {
    write!(output, "Enter the root folder containing all patient folders: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed = line.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| trimmed.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(trimmed);

    if unquoted.is_empty() {
        Ok(None)
    } else {
        Ok(Some(PathBuf::from(unquoted)))
    }
}
