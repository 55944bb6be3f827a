//! JSON rendering of scales (serde_json)

use crate::models::Scale;

/// Compact JSON: {"root":"C","mode":"Major","ascending":[...],"descending":[...]}
pub fn to_json(scale: &Scale) -> Result<String, serde_json::Error> {
    serde_json::to_string(scale)
}

pub fn to_json_pretty(scale: &Scale) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(scale)
}
