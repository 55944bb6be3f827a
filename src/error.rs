//! Error types for scale construction
//!
//! `ScaleError` covers everything that can go wrong while answering a single
//! query. `CatalogError` covers loading and validating a mode catalog, and
//! wraps `ScaleError` for entries that fail validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{Letter, PitchClass};

/// Query-time failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    /// No catalog entry has this name
    #[error("Unknown mode: '{0}'")]
    ModeNotFound(String),

    /// Root text is not a letter a-g with at most one sharp/flat
    #[error("Invalid root note: '{0}'")]
    MalformedRoot(String),

    /// Catalog entry whose tones do not form an octave
    #[error("Mode '{mode}' is malformed: {reason}")]
    MalformedMode { mode: String, reason: String },

    /// Pitch would need more than a double accidental on this letter
    #[error("Cannot spell pitch class {pitch_class} on the letter {letter} with at most a double accidental")]
    UnspellableInterval { letter: Letter, pitch_class: PitchClass },
}

/// Catalog loading failures (fatal at startup)
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read mode catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid mode catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Duplicate mode name: '{0}'")]
    DuplicateMode(String),

    #[error("Mode catalog is empty")]
    Empty,

    #[error(transparent)]
    Mode(#[from] ScaleError),
}
