//! Accidentals from double flat to double sharp
//!
//! Serialized as the signed semitone offset (-2..=2).

use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;

/// Largest accidental the speller will produce, in either direction
pub const MAX_ACCIDENTAL: i8 = 2;

#[repr(i8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
pub enum Accidental {
    DoubleFlat = -2,
    Flat = -1,
    #[default]
    Natural = 0,
    Sharp = 1,
    DoubleSharp = 2,
}

impl Accidental {
    /// Signed semitone offset applied to the letter's natural pitch class
    pub fn offset(self) -> i8 {
        self as i8
    }

    /// Accidental for a signed offset, or None beyond a double sharp/flat
    pub fn from_offset(offset: i8) -> Option<Accidental> {
        match offset {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    /// Display symbol ("" for natural)
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        }
    }

    /// Parse a display symbol back into an accidental
    pub fn parse(text: &str) -> Option<Accidental> {
        match text {
            "bb" => Some(Accidental::DoubleFlat),
            "b" => Some(Accidental::Flat),
            "" => Some(Accidental::Natural),
            "#" => Some(Accidental::Sharp),
            "##" => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert_eq!(Accidental::DoubleFlat.offset(), -2);
        assert_eq!(Accidental::Natural.offset(), 0);
        assert_eq!(Accidental::DoubleSharp.offset(), 2);
    }

    #[test]
    fn test_default_is_natural() {
        assert_eq!(Accidental::default(), Accidental::Natural);
        assert_eq!(Accidental::default().offset(), 0);
    }

    #[test]
    fn test_from_offset_rejects_triples() {
        assert_eq!(Accidental::from_offset(1), Some(Accidental::Sharp));
        assert_eq!(Accidental::from_offset(-2), Some(Accidental::DoubleFlat));
        assert_eq!(Accidental::from_offset(3), None);
        assert_eq!(Accidental::from_offset(-3), None);
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!(Accidental::parse("##"), Some(Accidental::DoubleSharp));
        assert_eq!(Accidental::parse("b"), Some(Accidental::Flat));
        assert_eq!(Accidental::parse(""), Some(Accidental::Natural));
        assert_eq!(Accidental::parse("###"), None);
    }

    #[test]
    fn test_serializes_as_signed_integer() {
        assert_eq!(serde_json::to_string(&Accidental::Flat).unwrap(), "-1");
        assert_eq!(serde_json::to_string(&Accidental::DoubleSharp).unwrap(), "2");
        let parsed: Accidental = serde_json::from_str("-2").unwrap();
        assert_eq!(parsed, Accidental::DoubleFlat);
    }
}
