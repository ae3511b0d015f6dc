use dicom_core::Tag;
use std::fmt;

use crate::extraction::tags::{PROTOCOL_NAME, SEQUENCE_NAME, SERIES_DESCRIPTION};

/// How deep discovery looks for a representative file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "kebab-case"))]
pub enum DiscoveryDepth {
    /// Only files directly inside the sequence folder
    #[default]
    Direct,

    /// Files at any depth below the sequence folder
    Recursive,
}

impl DiscoveryDepth {
    /// Maximum walk depth relative to the searched folder
    pub fn max_depth(&self) -> usize {
        match self {
            DiscoveryDepth::Direct => 1,
            DiscoveryDepth::Recursive => usize::MAX,
        }
    }
}

/// Which subdirectories of a patient folder count as sequence folders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "kebab-case"))]
pub enum SequenceFilter {
    /// Every subdirectory
    #[default]
    All,

    /// Subdirectories whose name is made only of ASCII digits
    Numeric,
}

impl SequenceFilter {
    /// Checks whether a folder name passes this filter
    ///
    /// # Example
    ///
    /// ```
    /// use seqname_core::SequenceFilter;
    ///
    /// assert!(SequenceFilter::Numeric.accepts("12"));
    /// assert!(!SequenceFilter::Numeric.accepts("12_T1"));
    /// assert!(SequenceFilter::All.accepts("12_T1"));
    /// ```
    pub fn accepts(&self, folder_name: &str) -> bool {
        match self {
            SequenceFilter::All => true,
            SequenceFilter::Numeric => {
                !folder_name.is_empty() && folder_name.bytes().all(|b| b.is_ascii_digit())
            }
        }
    }
}

/// Metadata attribute used to name sequence folders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "kebab-case"))]
pub enum NameTag {
    /// SequenceName (0018,0024)
    #[default]
    SequenceName,

    /// SeriesDescription (0008,103E)
    SeriesDescription,

    /// ProtocolName (0018,1030)
    ProtocolName,
}

impl NameTag {
    /// DICOM tag read for this attribute
    pub fn tag(&self) -> Tag {
        match self {
            NameTag::SequenceName => SEQUENCE_NAME,
            NameTag::SeriesDescription => SERIES_DESCRIPTION,
            NameTag::ProtocolName => PROTOCOL_NAME,
        }
    }

    /// DICOM keyword of the attribute
    pub fn keyword(&self) -> &'static str {
        match self {
            NameTag::SequenceName => "SequenceName",
            NameTag::SeriesDescription => "SeriesDescription",
            NameTag::ProtocolName => "ProtocolName",
        }
    }
}

impl fmt::Display for NameTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.tag();
        write!(f, "{} ({:04X},{:04X})", self.keyword(), tag.0, tag.1)
    }
}
