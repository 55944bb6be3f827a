//! Mode definitions as alterations of the Major mode
//!
//! A mode is stored the way a musician describes it: "Dorian is Major with a
//! flat 3rd and a flat 7th". The catalog only records what differs from
//! Major; `Pattern` expands that into the ordered tones of the mode.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ScaleError;
use crate::models::accidental::MAX_ACCIDENTAL;
use crate::models::pitch_class::SEMITONES;

/// Ascending steps of the Major mode, degree 1->2 through 7->1
pub const MAJOR_STEPS: [u8; 7] = [2, 2, 1, 2, 2, 2, 1];

/// Semitones from the root to a Major degree (1-7)
pub fn major_offset(degree: u8) -> u8 {
    MAJOR_STEPS
        .iter()
        .take(degree.saturating_sub(1) as usize)
        .sum()
}

/// Changes to the Major mode, as authored in the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Alterations {
    /// degree -> semitone delta
    #[serde(default)]
    pub alter: BTreeMap<u8, i8>,
    /// Degrees left out of the mode
    #[serde(default)]
    pub omit: Vec<u8>,
    /// degree -> delta of an extra tone spelled on the same letter
    #[serde(default)]
    pub add: BTreeMap<u8, i8>,
}

/// One catalog entry before validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModeEntry {
    pub name: String,
    #[serde(default)]
    pub alter: BTreeMap<u8, i8>,
    #[serde(default)]
    pub omit: Vec<u8>,
    #[serde(default)]
    pub add: BTreeMap<u8, i8>,
    #[serde(default)]
    pub descending: Option<Alterations>,
}

impl ModeEntry {
    pub fn ascending(&self) -> Alterations {
        Alterations {
            alter: self.alter.clone(),
            omit: self.omit.clone(),
            add: self.add.clone(),
        }
    }
}

/// A single tone of a mode: a Major degree and how far it is moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tone {
    pub degree: u8,
    pub alteration: i8,
}

impl Tone {
    /// Semitones above the root
    pub fn offset(&self) -> i32 {
        major_offset(self.degree) as i32 + self.alteration as i32
    }
}

/// The ordered tones of one pass through a mode, starting on the root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pattern {
    tones: Vec<Tone>,
}

impl Pattern {
    /// Expand alterations into tones, rejecting anything that does not form
    /// a strictly ascending set inside one octave.
    pub fn from_alterations(mode: &str, alterations: &Alterations) -> Result<Pattern, ScaleError> {
        let malformed = |reason: String| ScaleError::MalformedMode {
            mode: mode.to_string(),
            reason,
        };

        let keyed = alterations
            .alter
            .iter()
            .chain(alterations.add.iter())
            .map(|(degree, delta)| (*degree, Some(*delta)));
        let omitted = alterations.omit.iter().map(|degree| (*degree, None));

        for (degree, delta) in keyed.chain(omitted) {
            if !(1..=7).contains(&degree) {
                return Err(malformed(format!("degree {} is outside 1-7", degree)));
            }
            if let Some(delta) = delta {
                if delta.unsigned_abs() > MAX_ACCIDENTAL as u8 {
                    return Err(malformed(format!(
                        "alteration {} on degree {} exceeds a double accidental",
                        delta, degree
                    )));
                }
            }
        }

        if alterations.alter.contains_key(&1) || alterations.omit.contains(&1) {
            return Err(malformed("the root (degree 1) cannot be altered or omitted".to_string()));
        }
        if let Some(degree) = alterations.add.keys().find(|&&d| alterations.omit.contains(&d)) {
            return Err(malformed(format!("degree {} is both omitted and added", degree)));
        }

        let mut tones = Vec::new();
        for degree in 1..=7u8 {
            if alterations.omit.contains(&degree) {
                continue;
            }
            let mut on_degree = vec![alterations.alter.get(&degree).copied().unwrap_or(0)];
            if let Some(extra) = alterations.add.get(&degree) {
                on_degree.push(*extra);
            }
            on_degree.sort();
            tones.extend(on_degree.into_iter().map(|alteration| Tone { degree, alteration }));
        }

        if tones.first() != Some(&Tone { degree: 1, alteration: 0 }) {
            return Err(malformed("an added tone lies below the root".to_string()));
        }
        for pair in tones.windows(2) {
            if pair[1].offset() <= pair[0].offset() {
                return Err(malformed(format!(
                    "degree {} ({} semitones) does not lie above degree {} ({} semitones)",
                    pair[1].degree,
                    pair[1].offset(),
                    pair[0].degree,
                    pair[0].offset()
                )));
            }
        }
        if let Some(top) = tones.last() {
            if top.offset() >= SEMITONES as i32 {
                return Err(malformed(format!("degree {} reaches the octave", top.degree)));
            }
        }

        Ok(Pattern { tones })
    }

    pub fn tones(&self) -> &[Tone] {
        &self.tones
    }

    pub fn len(&self) -> usize {
        self.tones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }

    /// One tone per letter, none skipped
    pub fn is_heptatonic(&self) -> bool {
        self.tones.len() == 7 && self.tones.iter().enumerate().all(|(i, t)| t.degree as usize == i + 1)
    }

    /// Ascending steps between consecutive tones, closing back to the octave
    pub fn steps(&self) -> Vec<i32> {
        let mut offsets: Vec<i32> = self.tones.iter().map(Tone::offset).collect();
        offsets.push(SEMITONES as i32);
        offsets.windows(2).map(|w| w[1] - w[0]).collect()
    }
}

/// A validated, immutable catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeDefinition {
    name: String,
    ascending: Pattern,
    descending: Option<Pattern>,
}

impl ModeDefinition {
    pub fn new(
        name: &str,
        ascending: &Alterations,
        descending: Option<&Alterations>,
    ) -> Result<ModeDefinition, ScaleError> {
        let name = name.split_whitespace().collect::<Vec<_>>().join(" ");
        if name.is_empty() {
            return Err(ScaleError::MalformedMode {
                mode: name,
                reason: "mode name is empty".to_string(),
            });
        }

        let ascending = Pattern::from_alterations(&name, ascending)?;
        let descending = descending
            .map(|alterations| Pattern::from_alterations(&name, alterations))
            .transpose()?;

        Ok(ModeDefinition {
            name,
            ascending,
            descending,
        })
    }

    pub fn from_entry(entry: &ModeEntry) -> Result<ModeDefinition, ScaleError> {
        ModeDefinition::new(&entry.name, &entry.ascending(), entry.descending.as_ref())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ascending(&self) -> &Pattern {
        &self.ascending
    }

    pub fn descending(&self) -> Option<&Pattern> {
        self.descending.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alter(pairs: &[(u8, i8)]) -> Alterations {
        Alterations {
            alter: pairs.iter().copied().collect(),
            ..Alterations::default()
        }
    }

    #[test]
    fn test_major_offsets() {
        let offsets: Vec<u8> = (1..=7).map(major_offset).collect();
        assert_eq!(offsets, vec![0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(MAJOR_STEPS.iter().map(|s| *s as u32).sum::<u32>(), 12);
    }

    #[test]
    fn test_unaltered_pattern_is_major() {
        let pattern = Pattern::from_alterations("Major", &Alterations::default()).unwrap();
        assert!(pattern.is_heptatonic());
        assert_eq!(pattern.steps(), vec![2, 2, 1, 2, 2, 2, 1]);
    }

    #[test]
    fn test_harmonic_minor_steps() {
        let pattern = Pattern::from_alterations("Harmonic Minor", &alter(&[(3, -1), (6, -1)])).unwrap();
        assert_eq!(pattern.steps(), vec![2, 1, 2, 2, 1, 3, 1]);
    }

    #[test]
    fn test_omitted_degrees_are_skipped() {
        let pentatonic = Alterations {
            omit: vec![4, 7],
            ..Alterations::default()
        };
        let pattern = Pattern::from_alterations("Major Pentatonic", &pentatonic).unwrap();
        let degrees: Vec<u8> = pattern.tones().iter().map(|t| t.degree).collect();
        assert_eq!(degrees, vec![1, 2, 3, 5, 6]);
        assert_eq!(pattern.steps(), vec![2, 2, 3, 2, 3]);
        assert!(!pattern.is_heptatonic());
    }

    #[test]
    fn test_added_tone_sorted_within_degree() {
        let bebop = Alterations {
            alter: [(7, -1)].into_iter().collect(),
            add: [(7, 0)].into_iter().collect(),
            ..Alterations::default()
        };
        let pattern = Pattern::from_alterations("Bebop dominant", &bebop).unwrap();
        let last_two: Vec<Tone> = pattern.tones()[6..].to_vec();
        assert_eq!(
            last_two,
            vec![
                Tone { degree: 7, alteration: -1 },
                Tone { degree: 7, alteration: 0 },
            ]
        );
        assert_eq!(pattern.steps().iter().sum::<i32>(), 12);
    }

    #[test]
    fn test_rejects_root_alteration() {
        let err = Pattern::from_alterations("Bad", &alter(&[(1, 1)])).unwrap_err();
        assert!(matches!(err, ScaleError::MalformedMode { .. }));
    }

    #[test]
    fn test_rejects_degree_out_of_range() {
        let err = Pattern::from_alterations("Bad", &alter(&[(8, -1)])).unwrap_err();
        assert_eq!(
            err,
            ScaleError::MalformedMode {
                mode: "Bad".to_string(),
                reason: "degree 8 is outside 1-7".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_crossing_tones() {
        // a raised 2nd lands on the same pitch as a flat 3rd
        let err = Pattern::from_alterations("Bad", &alter(&[(2, 1), (3, -1)])).unwrap_err();
        assert!(matches!(err, ScaleError::MalformedMode { .. }));
    }

    #[test]
    fn test_rejects_raised_seventh_reaching_octave() {
        let err = Pattern::from_alterations("Bad", &alter(&[(7, 1)])).unwrap_err();
        assert_eq!(
            err,
            ScaleError::MalformedMode {
                mode: "Bad".to_string(),
                reason: "degree 7 reaches the octave".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_triple_alteration() {
        let err = Pattern::from_alterations("Bad", &alter(&[(5, -3)])).unwrap_err();
        assert!(err.to_string().contains("exceeds a double accidental"));
    }

    #[test]
    fn test_rejects_added_tone_below_root() {
        let under = Alterations {
            add: [(1, -1)].into_iter().collect(),
            ..Alterations::default()
        };
        let err = Pattern::from_alterations("Under", &under).unwrap_err();
        assert_eq!(
            err,
            ScaleError::MalformedMode {
                mode: "Under".to_string(),
                reason: "an added tone lies below the root".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_added_tone_on_omitted_degree() {
        let dropped = Alterations {
            omit: vec![4],
            add: [(4, 1)].into_iter().collect(),
            ..Alterations::default()
        };
        let err = Pattern::from_alterations("Drop", &dropped).unwrap_err();
        assert_eq!(
            err,
            ScaleError::MalformedMode {
                mode: "Drop".to_string(),
                reason: "degree 4 is both omitted and added".to_string(),
            }
        );
    }

    #[test]
    fn test_definition_normalizes_name_whitespace() {
        let mode = ModeDefinition::new("  Harmonic   Minor ", &alter(&[(3, -1), (6, -1)]), None).unwrap();
        assert_eq!(mode.name(), "Harmonic Minor");
        assert!(mode.descending().is_none());
    }

    #[test]
    fn test_definition_rejects_empty_name() {
        assert!(ModeDefinition::new("   ", &Alterations::default(), None).is_err());
    }
}
