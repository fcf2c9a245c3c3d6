//! Reply language tags and a light-weight detector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Language a template table is authored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Nl,
    Ar,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Nl => "nl",
            Language::Ar => "ar",
        }
    }

    /// Guesses the language of a chat message.
    ///
    /// Any Arabic-script letter selects Arabic. Dutch needs at least two
    /// distinct Dutch function words, so short topic phrases such as
    /// "rotonde regels" stay undecided. Returns `None` when unsure.
    pub fn detect(text: &str) -> Option<Language> {
        if text.chars().any(is_arabic) {
            return Some(Language::Ar);
        }

        let lowered = text.to_lowercase();
        let dutch_hits = DUTCH_MARKERS
            .iter()
            .filter(|marker| {
                lowered
                    .split(|c: char| !c.is_alphanumeric())
                    .any(|word| word == **marker)
            })
            .count();

        if dutch_hits >= 2 {
            Some(Language::Nl)
        } else {
            None
        }
    }
}

const DUTCH_MARKERS: &[&str] = &[
    "de", "het", "een", "ik", "je", "jij", "mijn", "wat", "hoe", "waar", "moet", "kan", "niet",
    "wel", "voor", "met", "van", "bij", "heb", "ben", "zijn", "hoeveel", "welke", "graag",
];

fn is_arabic(c: char) -> bool {
    matches!(c, '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}' | '\u{FB50}'..='\u{FDFF}' | '\u{FE70}'..='\u{FEFF}')
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "nl" | "dutch" | "nederlands" => Ok(Language::Nl),
            "ar" | "arabic" => Ok(Language::Ar),
            other => Err(AppError::Config(format!("unsupported language '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_arabic_script() {
        assert_eq!(Language::detect("كم يكلف الامتحان؟"), Some(Language::Ar));
    }

    #[test]
    fn test_detect_dutch_needs_two_markers() {
        assert_eq!(
            Language::detect("Hoeveel kost het theorie-examen?"),
            Some(Language::Nl)
        );
        assert_eq!(Language::detect("rotonde regels"), None);
        assert_eq!(Language::detect("How much does the CBR exam cost?"), None);
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("NL".parse::<Language>().unwrap(), Language::Nl);
        assert_eq!("arabic".parse::<Language>().unwrap(), Language::Ar);
        assert!("fr".parse::<Language>().is_err());
    }
}
