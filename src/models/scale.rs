//! A mode anchored on a concrete root

use serde::{Deserialize, Serialize};

use super::note::Note;

/// A fully spelled scale.
///
/// `ascending` starts on the root and ends on the root an octave up.
/// `descending` is empty unless the mode descends differently from how it
/// ascends; it then runs from the degree below the top root down to the
/// bottom root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    pub root: Note,
    pub mode: String,
    pub ascending: Vec<Note>,
    #[serde(default)]
    pub descending: Vec<Note>,
}

impl Scale {
    /// Every note in display order: the ascending pass, then the descending one
    pub fn notes(&self) -> impl Iterator<Item = &Note> {
        self.ascending.iter().chain(self.descending.iter())
    }

    pub fn len(&self) -> usize {
        self.ascending.len() + self.descending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_descending(&self) -> bool {
        !self.descending.is_empty()
    }
}
