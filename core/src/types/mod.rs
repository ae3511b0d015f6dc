//! Core type definitions for sequence folder renaming
//!
//! - [`SequenceName`]: Sanitized, filesystem-safe sequence name
//! - [`DiscoveryDepth`], [`SequenceFilter`], [`NameTag`]: Run policies
//! - [`DiscoveryOptions`], [`RenameConfig`]: Run configuration

mod config;
mod options;
mod sequence_name;

pub use config::{DiscoveryOptions, RenameConfig};
pub use options::{DiscoveryDepth, NameTag, SequenceFilter};
pub use sequence_name::SequenceName;
