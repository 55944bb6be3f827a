//! Interactive prompt
//!
//! Reads one query per line, answers it, and keeps going until `-1` or end
//! of input. Every parse or lookup problem is reported and the user is
//! prompted again; nothing typed at the prompt can end the session early.

use std::io::{self, BufRead, Write};

use crate::error::ScaleError;
use crate::modes::ModeCatalog;
use crate::parse::{parse_query, Query};
use crate::renderers::{json, text};
use crate::transposition::build_named;

const DIVIDER: &str =
    "---------------------------------------------------------------------------------------------";

const INVALID_INPUT: &str = "Please enter a valid scale such as 'C Sharp Harmonic Minor', or 'F Major'";

const LISTING_COLUMNS: usize = 4;
const LISTING_WIDTH: usize = 21;

/// How answers are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplOptions {
    /// Print scales as JSON instead of "Root Mode: notes"
    pub json: bool,
    /// Skip the instructions banner
    pub quiet: bool,
}

pub fn instructions() -> String {
    [
        "Instructions:",
        "",
        "    Simply type in the scale you would like in the form 'root-note mode-type'. For example:",
        "",
        "      - 'C Major'                     (shows: C, D, E, F, G, A, B, C)",
        "      - 'F Sharp Harmonic Minor'      (shows: F#, G#, A, B, C#, D, E#, F#)",
        "      - 'G Lydian'                    (shows: G, A, B, C#, D, E, F#, G)",
        "      - 'B Flat Major'                (shows: Bb, C, D, Eb, F, G, A, Bb)",
        "      - 'C Sharp Melodic Minor'       (shows: C#, D#, E, F#, G#, A#, B#, C#, B, A, G#, F#, E, D#, C#)",
        "",
        "    Type 'Show Modes' to see a complete list of available modes.",
        "",
        "    To exit the application enter '-1'",
    ]
    .join("\n")
}

/// Numbered catalog listing, four names per row
pub fn mode_listing(catalog: &ModeCatalog) -> String {
    let cells: Vec<String> = catalog
        .names()
        .enumerate()
        .map(|(i, name)| format!("{}.{}", i + 1, name))
        .collect();

    let rows: Vec<String> = cells
        .chunks(LISTING_COLUMNS)
        .map(|row| {
            let line: String = row
                .iter()
                .map(|cell| format!("{:<width$}", cell, width = LISTING_WIDTH))
                .collect();
            format!("    {}", line.trim_end())
        })
        .collect();

    format!("Possible Modes:\n\n{}", rows.join("\n"))
}

/// Answer a single line of input; `None` means the user asked to leave
pub fn answer(catalog: &ModeCatalog, line: &str, options: ReplOptions) -> Option<String> {
    let query = match parse_query(line) {
        Ok(query) => query,
        Err(err) => {
            log::warn!("{}", err);
            return Some(INVALID_INPUT.to_string());
        }
    };

    match query {
        Query::Exit => None,
        Query::ShowModes => Some(mode_listing(catalog)),
        Query::Help => Some(instructions()),
        Query::Scale { root, mode } => match build_named(catalog, root, &mode) {
            Ok(scale) if options.json => Some(json::to_json(&scale).unwrap_or_else(|err| {
                log::error!("Failed to serialize scale: {}", err);
                text::render_scale(&scale)
            })),
            Ok(scale) => Some(text::render_scale(&scale)),
            // a real scale that needs more than a double accidental somewhere
            Err(err @ ScaleError::UnspellableInterval { .. }) => Some(err.to_string()),
            Err(err) => {
                log::warn!("{}", err);
                Some(INVALID_INPUT.to_string())
            }
        },
    }
}

/// Run the prompt until `-1` or end of input
pub fn run<R: BufRead, W: Write>(
    catalog: &ModeCatalog,
    input: R,
    output: &mut W,
    options: ReplOptions,
) -> io::Result<()> {
    if !options.quiet {
        writeln!(output, "{}", instructions())?;
        write_divider(output)?;
    }

    let mut lines = input.lines();
    loop {
        write!(output, "Enter a scale: ")?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        match answer(catalog, &line, options) {
            Some(reply) => {
                writeln!(output, "{}", reply)?;
                write_divider(output)?;
            }
            None => break,
        }
    }

    writeln!(output)?;
    log::debug!("Prompt closed");
    Ok(())
}

fn write_divider<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", DIVIDER)?;
    writeln!(output)
}
