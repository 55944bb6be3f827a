//! Scale Builder
//!
//! Turns a root note and a mode name into the correctly spelled notes of
//! the scale: F# harmonic minor is F# G# A B C# D E# F#, never "... D F F#".
//!
//! Pipeline: `parse` (typed text) -> `modes` (catalog lookup) ->
//! `transposition` (degree walk + enharmonic spelling) -> `renderers`.

pub mod config;
pub mod error;
pub mod models;
pub mod modes;
pub mod parse;
pub mod renderers;
pub mod repl;
pub mod transposition;

// Re-export commonly used types
pub use error::{CatalogError, ScaleError};
pub use models::{Accidental, Letter, Note, PitchClass, Scale};
pub use modes::{ModeCatalog, ModeDefinition};
pub use transposition::{build, build_named};
