use super::options::{DiscoveryDepth, NameTag, SequenceFilter};

/// Options controlling how a representative DICOM file is located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscoveryOptions {
    /// Direct children only, or the whole subtree
    pub depth: DiscoveryDepth,

    /// Extensionless files must carry the `DICM` magic at offset 128
    pub require_preamble: bool,
}

/// Configuration for a renaming run
///
/// # Example
///
/// ```
/// use seqname_core::{DiscoveryDepth, NameTag, RenameConfig, SequenceFilter};
///
/// let config = RenameConfig::default()
///     .with_depth(DiscoveryDepth::Recursive)
///     .with_filter(SequenceFilter::Numeric)
///     .dry_run(true);
///
/// assert_eq!(config.tag, NameTag::SequenceName);
/// assert!(config.dry_run);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct RenameConfig {
    /// How discovery searches each sequence folder
    pub discovery: DiscoveryOptions,

    /// Which patient subfolders are treated as sequence folders
    pub filter: SequenceFilter,

    /// Attribute the new folder name is built from
    pub tag: NameTag,

    /// Report renames without touching the filesystem
    pub dry_run: bool,

    /// Draw a progress bar per patient folder
    pub show_progress: bool,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            discovery: DiscoveryOptions::default(),
            filter: SequenceFilter::All,
            tag: NameTag::SequenceName,
            dry_run: false,
            show_progress: true,
        }
    }
}

impl RenameConfig {
    /// Builder: Set discovery depth
    pub fn with_depth(mut self, depth: DiscoveryDepth) -> Self {
        self.discovery.depth = depth;
        self
    }

    /// Builder: Require the DICM preamble for extensionless files
    pub fn require_preamble(mut self, require: bool) -> Self {
        self.discovery.require_preamble = require;
        self
    }

    /// Builder: Set sequence folder filter
    pub fn with_filter(mut self, filter: SequenceFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Builder: Set the naming tag
    pub fn with_tag(mut self, tag: NameTag) -> Self {
        self.tag = tag;
        self
    }

    /// Builder: Enable dry run
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Builder: Toggle the progress bar
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenameConfig::default();
        assert_eq!(config.discovery.depth, DiscoveryDepth::Direct);
        assert!(!config.discovery.require_preamble);
        assert_eq!(config.filter, SequenceFilter::All);
        assert_eq!(config.tag, NameTag::SequenceName);
        assert!(!config.dry_run);
        assert!(config.show_progress);
    }

    #[test]
    fn test_builder_chain() {
        let config = RenameConfig::default()
            .with_depth(DiscoveryDepth::Recursive)
            .require_preamble(true)
            .with_filter(SequenceFilter::Numeric)
            .with_tag(NameTag::ProtocolName)
            .dry_run(true)
            .show_progress(false);

        assert_eq!(config.discovery.depth, DiscoveryDepth::Recursive);
        assert!(config.discovery.require_preamble);
        assert_eq!(config.filter, SequenceFilter::Numeric);
        assert_eq!(config.tag, NameTag::ProtocolName);
        assert!(config.dry_run);
        assert!(!config.show_progress);
    }
}
