//! Mode catalog: named modes described as alterations of Major

pub mod catalog;
pub mod definition;

pub use catalog::{normalize_name, ModeCatalog};
pub use definition::{major_offset, Alterations, ModeDefinition, ModeEntry, Pattern, Tone, MAJOR_STEPS};
