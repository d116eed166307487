//! ARPABET phoneme model.
//!
//! A `Phoneme` is an uppercase base symbol with an optional stress digit.
//! Vowels come from a fixed 15-symbol inventory; every other symbol is a
//! consonant. `Pronunciation` is a non-empty phoneme sequence with the
//! positional queries the rhyme rules are written against.

mod stress;

pub use stress::{add_stress_markers, has_stress_markers};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhonemeError {
    #[error("empty phoneme symbol")]
    Empty,
    #[error("invalid phoneme symbol: {0:?}")]
    InvalidSymbol(String),
    #[error("invalid stress digit in {0:?}")]
    InvalidStress(String),
    #[error("empty pronunciation")]
    EmptyPronunciation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vowel {
    AA,
    AE,
    AH,
    AO,
    AW,
    AY,
    EH,
    ER,
    EY,
    IH,
    IY,
    OW,
    OY,
    UH,
    UW,
}

impl Vowel {
    pub const ALL: [Vowel; 15] = [
        Vowel::AA,
        Vowel::AE,
        Vowel::AH,
        Vowel::AO,
        Vowel::AW,
        Vowel::AY,
        Vowel::EH,
        Vowel::ER,
        Vowel::EY,
        Vowel::IH,
        Vowel::IY,
        Vowel::OW,
        Vowel::OY,
        Vowel::UH,
        Vowel::UW,
    ];

    pub fn from_symbol(symbol: &str) -> Option<Vowel> {
        Vowel::ALL.into_iter().find(|v| v.as_str() == symbol)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Vowel::AA => "AA",
            Vowel::AE => "AE",
            Vowel::AH => "AH",
            Vowel::AO => "AO",
            Vowel::AW => "AW",
            Vowel::AY => "AY",
            Vowel::EH => "EH",
            Vowel::ER => "ER",
            Vowel::EY => "EY",
            Vowel::IH => "IH",
            Vowel::IY => "IY",
            Vowel::OW => "OW",
            Vowel::OY => "OY",
            Vowel::UH => "UH",
            Vowel::UW => "UW",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stress {
    Unstressed,
    Primary,
    Secondary,
}

impl Stress {
    pub fn from_digit(d: char) -> Option<Stress> {
        match d {
            '0' => Some(Stress::Unstressed),
            '1' => Some(Stress::Primary),
            '2' => Some(Stress::Secondary),
            _ => None,
        }
    }

    pub fn digit(self) -> char {
        match self {
            Stress::Unstressed => '0',
            Stress::Primary => '1',
            Stress::Secondary => '2',
        }
    }
}

/// One phoneme: base symbol plus optional stress digit.
///
/// The stress digit is only meaningful on vowels, but it is kept on whatever
/// symbol carried it so that `Display` reproduces the source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPhoneme")]
pub struct Phoneme {
    base: String,
    stress: Option<Stress>,
}

/// Unchecked wire shape of [`Phoneme`]; deserialized records go through
/// [`Phoneme::new`] before they are handed out.
#[derive(Deserialize)]
struct RawPhoneme {
    base: String,
    stress: Option<Stress>,
}

impl TryFrom<RawPhoneme> for Phoneme {
    type Error = PhonemeError;

    fn try_from(raw: RawPhoneme) -> Result<Self, Self::Error> {
        Phoneme::new(&raw.base, raw.stress)
    }
}

impl Phoneme {
    pub fn new(base: &str, stress: Option<Stress>) -> Result<Self, PhonemeError> {
        if base.is_empty() {
            return Err(PhonemeError::Empty);
        }
        if !base.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(PhonemeError::InvalidSymbol(base.to_string()));
        }
        Ok(Self {
            base: base.to_string(),
            stress,
        })
    }

    /// Base symbol with the stress digit removed.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn stress(&self) -> Option<Stress> {
        self.stress
    }

    pub fn vowel(&self) -> Option<Vowel> {
        Vowel::from_symbol(&self.base)
    }

    pub fn is_vowel(&self) -> bool {
        self.vowel().is_some()
    }

    /// Vowel carrying primary or secondary stress.
    pub fn is_stressed_vowel(&self) -> bool {
        self.is_vowel() && matches!(self.stress, Some(Stress::Primary | Stress::Secondary))
    }

    pub(crate) fn with_stress(&self, stress: Stress) -> Self {
        Self {
            base: self.base.clone(),
            stress: Some(stress),
        }
    }
}

impl FromStr for Phoneme {
    type Err = PhonemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(last) = s.chars().last() else {
            return Err(PhonemeError::Empty);
        };
        if last.is_ascii_digit() {
            let stress = Stress::from_digit(last)
                .ok_or_else(|| PhonemeError::InvalidStress(s.to_string()))?;
            Phoneme::new(&s[..s.len() - 1], Some(stress))
        } else {
            Phoneme::new(s, None)
        }
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        if let Some(stress) = self.stress {
            write!(f, "{}", stress.digit())?;
        }
        Ok(())
    }
}

/// A non-empty phoneme sequence for one word or phrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Phoneme>")]
pub struct Pronunciation(Vec<Phoneme>);

impl TryFrom<Vec<Phoneme>> for Pronunciation {
    type Error = PhonemeError;

    fn try_from(phonemes: Vec<Phoneme>) -> Result<Self, Self::Error> {
        Self::new(phonemes)
    }
}

impl Pronunciation {
    pub fn new(phonemes: Vec<Phoneme>) -> Result<Self, PhonemeError> {
        if phonemes.is_empty() {
            return Err(PhonemeError::EmptyPronunciation);
        }
        Ok(Self(phonemes))
    }

    /// Parse a whitespace-separated phoneme string such as `"K AE1 T"`.
    pub fn parse(s: &str) -> Result<Self, PhonemeError> {
        let phonemes = s
            .split_whitespace()
            .map(Phoneme::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(phonemes)
    }

    pub fn phonemes(&self) -> &[Phoneme] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// False for every value built by `new`, `parse`, or deserialization,
    /// all of which reject an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> &Phoneme {
        // Non-empty by construction.
        &self.0[self.0.len() - 1]
    }

    pub fn final_base(&self) -> &str {
        self.last().base()
    }

    pub fn last_stressed_vowel_index(&self) -> Option<usize> {
        self.0.iter().rposition(Phoneme::is_stressed_vowel)
    }

    pub fn stressed_vowel_indices(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_stressed_vowel())
            .map(|(i, _)| i)
            .collect()
    }

    /// All vowels in order, stress ignored.
    pub fn vowels(&self) -> Vec<Vowel> {
        self.0.iter().filter_map(Phoneme::vowel).collect()
    }

    pub fn syllable_count(&self) -> usize {
        self.0.iter().filter(|p| p.is_vowel()).count()
    }

    pub fn last_vowel(&self) -> Option<Vowel> {
        self.0.iter().rev().find_map(Phoneme::vowel)
    }

    pub fn has_vowel(&self) -> bool {
        self.0.iter().any(Phoneme::is_vowel)
    }

    /// Concatenate two pronunciations (used for two-word phrases).
    pub fn concat(&self, other: &Pronunciation) -> Pronunciation {
        let mut phonemes = Vec::with_capacity(self.len() + other.len());
        phonemes.extend_from_slice(&self.0);
        phonemes.extend_from_slice(&other.0);
        Pronunciation(phonemes)
    }

    /// Slice the phonemes covering characters `start..end` of a word that is
    /// `char_len` characters long.
    ///
    /// There is no grapheme alignment: the phoneme range is the character
    /// range scaled by `len() / char_len`, floored at the start and ceiled at
    /// the end. Returns `None` when the scaled range is empty.
    pub fn slice_proportional(&self, start: usize, end: usize, char_len: usize) -> Option<Self> {
        if char_len == 0 || start >= end {
            return None;
        }
        let n = self.0.len();
        let from = (start * n) / char_len;
        let to = (end * n).div_ceil(char_len).min(n);
        if from >= to {
            return None;
        }
        Some(Self(self.0[from..to].to_vec()))
    }
}

impl fmt::Display for Pronunciation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

impl FromStr for Pronunciation {
    type Err = PhonemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Pronunciation {
        Pronunciation::parse(s).unwrap()
    }

    #[test]
    fn test_parse_phoneme_with_stress() {
        let ph: Phoneme = "AE1".parse().unwrap();
        assert_eq!(ph.base(), "AE");
        assert_eq!(ph.stress(), Some(Stress::Primary));
        assert_eq!(ph.vowel(), Some(Vowel::AE));
        assert!(ph.is_stressed_vowel());
        assert_eq!(ph.to_string(), "AE1");
    }

    #[test]
    fn test_parse_consonant() {
        let ph: Phoneme = "NG".parse().unwrap();
        assert_eq!(ph.base(), "NG");
        assert!(ph.stress().is_none());
        assert!(!ph.is_vowel());
    }

    #[test]
    fn test_unknown_uppercase_symbol_is_consonant() {
        let ph: Phoneme = "H".parse().unwrap();
        assert!(!ph.is_vowel());
    }

    #[test]
    fn test_reject_bad_symbols() {
        assert_eq!("".parse::<Phoneme>(), Err(PhonemeError::Empty));
        assert!(matches!(
            "ae1".parse::<Phoneme>(),
            Err(PhonemeError::InvalidSymbol(_))
        ));
        assert!(matches!(
            "AE3".parse::<Phoneme>(),
            Err(PhonemeError::InvalidStress(_))
        ));
        assert_eq!(
            Pronunciation::parse("   "),
            Err(PhonemeError::EmptyPronunciation)
        );
    }

    #[test]
    fn test_unstressed_vowel_is_not_stressed() {
        let ph: Phoneme = "AH0".parse().unwrap();
        assert!(ph.is_vowel());
        assert!(!ph.is_stressed_vowel());
        let bare: Phoneme = "AH".parse().unwrap();
        assert!(!bare.is_stressed_vowel());
    }

    #[test]
    fn test_positional_queries() {
        let landscape = p("L AE1 N D S K EY2 P");
        assert_eq!(landscape.last_stressed_vowel_index(), Some(6));
        assert_eq!(landscape.stressed_vowel_indices(), vec![1, 6]);
        assert_eq!(landscape.vowels(), vec![Vowel::AE, Vowel::EY]);
        assert_eq!(landscape.syllable_count(), 2);
        assert_eq!(landscape.last_vowel(), Some(Vowel::EY));
        assert_eq!(landscape.final_base(), "P");
    }

    #[test]
    fn test_no_stressed_vowel() {
        let the = p("DH AH0");
        assert_eq!(the.last_stressed_vowel_index(), None);
        assert!(the.has_vowel());
    }

    #[test]
    fn test_proportional_slice_floors_start_and_ceils_end() {
        // 8 phonemes over 9 characters.
        let landscape = p("L AE1 N D S K EY2 P");
        assert_eq!(
            landscape.slice_proportional(0, 4, 9).unwrap().to_string(),
            "L AE1 N D"
        );
        assert_eq!(
            landscape.slice_proportional(4, 9, 9).unwrap().to_string(),
            "D S K EY2 P"
        );
        assert!(landscape.slice_proportional(4, 4, 9).is_none());
        assert!(landscape.slice_proportional(0, 4, 0).is_none());
    }

    #[test]
    fn test_concat_phrase() {
        let more_or = p("M AO1 R").concat(&p("AO1 R"));
        assert_eq!(more_or.to_string(), "M AO1 R AO1 R");
    }
}
