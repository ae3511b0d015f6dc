use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Filesystem-safe sequence name
///
/// Only obtainable through [`SequenceName::sanitize`], so every value is
/// non-empty and contains nothing but alphanumeric characters, `_` and `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct SequenceName(String);

impl SequenceName {
    /// Sanitizes a raw tag value into a folder-name token
    ///
    /// Characters other than alphanumerics, `_` and `-` become `_`, runs of
    /// `_` collapse to one, and leading/trailing `_` are trimmed.
    /// Returns `None` when nothing is left.
    ///
    /// # Example
    ///
    /// ```
    /// use seqname_core::SequenceName;
    ///
    /// let name = SequenceName::sanitize("*tfl3d1 / T1 AXIAL").unwrap();
    /// assert_eq!(name.as_str(), "tfl3d1_T1_AXIAL");
    ///
    /// assert!(SequenceName::sanitize(" ** ").is_none());
    /// ```
    pub fn sanitize(raw: &str) -> Option<Self> {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| Regex::new(r"_{2,}").expect("Failed to compile regex"));

        let mapped: String = raw
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        let collapsed = re.replace_all(&mapped, "_");
        let trimmed = collapsed.trim_matches('_');

        if trimmed.is_empty() {
            None
        } else {
            Some(SequenceName(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Folder name with this sequence name appended as a `_` suffix
    ///
    /// Returns `None` when `folder_name` already carries the suffix, which is
    /// what makes repeated runs no-ops.
    ///
    /// # Example
    ///
    /// ```
    /// use seqname_core::SequenceName;
    ///
    /// let name = SequenceName::sanitize("T1_AXIAL").unwrap();
    /// assert_eq!(name.renamed_folder("5").as_deref(), Some("5_T1_AXIAL"));
    /// assert_eq!(name.renamed_folder("5_T1_AXIAL"), None);
    /// ```
    pub fn renamed_folder(&self, folder_name: &str) -> Option<String> {
        let suffix = format!("_{}", self.0);
        if folder_name.ends_with(&suffix) {
            return None;
        }
        Some(format!("{}{}", folder_name, suffix))
    }
}

impl fmt::Display for SequenceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SequenceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
