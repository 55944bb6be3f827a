//! Parsing typed queries such as "F Sharp Harmonic Minor"
//!
//! Grammar (case-insensitive, any amount of whitespace between words):
//!
//!   query    := "show modes" | "help" | "-1" | scale
//!   scale    := letter [ "sharp" | "flat" ] mode-name
//!   letter   := a | b | c | d | e | f | g
//!
//! The bare mode name "minor" means harmonic minor.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ScaleError;
use crate::models::{Accidental, Letter, Note};
use crate::modes::normalize_name;

static SCALE_QUERY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-g])(?: (sharp|flat))? (\S.*)$").expect("scale query pattern is valid")
});

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Leave the prompt
    Exit,
    /// List the catalog
    ShowModes,
    /// Repeat the instructions
    Help,
    /// Build a scale; `mode` is normalized (lowercase, single spaces)
    Scale { root: Note, mode: String },
}

pub fn parse_query(input: &str) -> Result<Query, ScaleError> {
    let normalized = normalize_name(input);

    match normalized.as_str() {
        "-1" => return Ok(Query::Exit),
        "show modes" => return Ok(Query::ShowModes),
        "help" | "?" => return Ok(Query::Help),
        _ => {}
    }

    let captures = SCALE_QUERY
        .captures(&normalized)
        .ok_or_else(|| ScaleError::MalformedRoot(input.trim().to_string()))?;

    let letter = captures
        .get(1)
        .and_then(|m| m.as_str().chars().next())
        .and_then(Letter::from_char)
        .ok_or_else(|| ScaleError::MalformedRoot(input.trim().to_string()))?;

    let accidental = match captures.get(2).map(|m| m.as_str()) {
        Some("sharp") => Accidental::Sharp,
        Some("flat") => Accidental::Flat,
        _ => Accidental::Natural,
    };

    let mode = captures.get(3).map(|m| m.as_str()).unwrap_or_default();

    // only one modifier is allowed: "c sharp flat major" is not a root
    let first_word = mode.split(' ').next().unwrap_or_default();
    if first_word == "sharp" || first_word == "flat" {
        log::warn!("Rejecting root with more than one modifier: '{}'", input.trim());
        return Err(ScaleError::MalformedRoot(input.trim().to_string()));
    }

    let mode = match mode {
        "minor" => "harmonic minor".to_string(),
        other => other.to_string(),
    };

    Ok(Query::Scale {
        root: Note::new(letter, accidental),
        mode,
    })
}
