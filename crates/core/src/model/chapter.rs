use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseKeyError;
use crate::model::ids::ChapterId;

/// Where a chapter was revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevelationPlace {
    Makkah,
    Madinah,
}

impl fmt::Display for RevelationPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevelationPlace::Makkah => write!(f, "makkah"),
            RevelationPlace::Madinah => write!(f, "madinah"),
        }
    }
}

impl FromStr for RevelationPlace {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "makkah" | "makka" | "mecca" => Ok(RevelationPlace::Makkah),
            "madinah" | "madina" | "medina" => Ok(RevelationPlace::Madinah),
            _ => Err(ParseKeyError::new("RevelationPlace", s)),
        }
    }
}

/// Localized display name of a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedName {
    pub name: String,
    pub language_name: String,
}

/// One of the 114 top-level divisions of the text.
///
/// Immutable once fetched and never persisted locally; always sourced fresh
/// from the retrieval layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: ChapterId,
    pub name_simple: String,
    pub name_arabic: String,
    pub name_complex: String,
    pub verses_count: u16,
    pub revelation_place: RevelationPlace,
    pub translated_name: TranslatedName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revelation_place_parse_variants() {
        assert_eq!(
            "Makkah".parse::<RevelationPlace>().unwrap(),
            RevelationPlace::Makkah
        );
        assert_eq!(
            "madinah".parse::<RevelationPlace>().unwrap(),
            RevelationPlace::Madinah
        );
        assert!("elsewhere".parse::<RevelationPlace>().is_err());
    }

    #[test]
    fn test_revelation_place_display_roundtrip() {
        let place: RevelationPlace = RevelationPlace::Madinah.to_string().parse().unwrap();
        assert_eq!(place, RevelationPlace::Madinah);
    }
}
