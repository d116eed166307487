use crate::phoneme::{Phoneme, Pronunciation, Vowel};

/// Pre-computed phonetic view of one occurrence, shared by every rule.
pub(crate) struct Profile<'a> {
    pub phrase: bool,
    pub pronunciation: &'a Pronunciation,
    /// Base symbols, stress stripped.
    pub bases: Vec<&'a str>,
    /// Indices of stressed vowels (stress 1 or 2).
    pub stressed: Vec<usize>,
    /// Index of the last stressed vowel.
    pub idx: usize,
    /// The last stressed vowel.
    pub vowel: Vowel,
    /// Every vowel in order, stress ignored.
    pub vowels: Vec<Vowel>,
}

impl<'a> Profile<'a> {
    /// `None` when there is no stressed vowel.
    pub fn new(phonemes: &'a Pronunciation, phrase: bool) -> Option<Self> {
        let idx = phonemes.last_stressed_vowel_index()?;
        let vowel = phonemes.phonemes()[idx].vowel()?;
        Some(Self {
            phrase,
            pronunciation: phonemes,
            bases: phonemes.phonemes().iter().map(Phoneme::base).collect(),
            stressed: phonemes.stressed_vowel_indices(),
            idx,
            vowel,
            vowels: phonemes.vowels(),
        })
    }

    pub fn final_base(&self) -> &'a str {
        self.pronunciation.final_base()
    }

    pub fn ends_with(&self, base: &str) -> bool {
        self.final_base() == base
    }

    pub fn final_is_vowel(&self) -> bool {
        Vowel::from_symbol(self.final_base()).is_some()
    }

    pub fn ends_nasal(&self) -> bool {
        matches!(self.final_base(), "N" | "NG" | "M")
    }

    pub fn syllables(&self) -> usize {
        self.pronunciation.syllable_count()
    }

    pub fn single_syllable(&self) -> bool {
        self.syllables() == 1
    }

    pub fn last_vowel(&self) -> Option<Vowel> {
        self.pronunciation.last_vowel()
    }

    /// Second-to-last vowel by position, stress ignored.
    pub fn penultimate_vowel(&self) -> Option<Vowel> {
        self.vowels.len().checked_sub(2).map(|i| self.vowels[i])
    }

    /// Second-to-last stressed vowel.
    pub fn penultimate_stressed(&self) -> Option<Vowel> {
        let i = self.stressed.len().checked_sub(2)?;
        Vowel::from_symbol(self.bases[self.stressed[i]])
    }

    /// The word ends on its last stressed vowel.
    pub fn ends_at_vowel(&self) -> bool {
        self.idx + 1 == self.bases.len()
    }

    /// Phonemes after the last stressed vowel.
    pub fn coda(&self) -> &[&'a str] {
        &self.bases[self.idx + 1..]
    }

    pub fn has_stressed(&self, vowel: Vowel) -> bool {
        self.stressed
            .iter()
            .any(|&i| Vowel::from_symbol(self.bases[i]) == Some(vowel))
    }

    pub fn contains(&self, base: &str) -> bool {
        self.bases.contains(&base)
    }

    pub fn position(&self, base: &str) -> Option<usize> {
        self.bases.iter().position(|b| *b == base)
    }
}

/// Same vowel, or the AO~AA near pair.
pub(crate) fn equivalent(a: Vowel, b: Vowel) -> bool {
    a == b || matches!((a, b), (Vowel::AO, Vowel::AA) | (Vowel::AA, Vowel::AO))
}

pub(crate) fn ah_er_pair(a: Vowel, b: Vowel) -> bool {
    matches!((a, b), (Vowel::AH, Vowel::ER) | (Vowel::ER, Vowel::AH))
}

fn similar_to(c: &str) -> &'static [&'static str] {
    match c {
        "S" => &["Z"],
        "Z" => &["S"],
        "F" => &["V", "TH"],
        "V" => &["F"],
        "TH" => &["DH", "F"],
        "DH" => &["TH"],
        "T" => &["D", "P", "B"],
        "D" => &["T"],
        "K" => &["G"],
        "G" => &["K"],
        "P" => &["B"],
        "B" => &["P"],
        "SH" => &["ZH"],
        "ZH" => &["SH"],
        _ => &[],
    }
}

/// Consonants close enough for a slant rhyme. Symmetric.
pub(crate) fn similar_consonants(a: &str, b: &str) -> bool {
    a == b || similar_to(a).contains(&b) || similar_to(b).contains(&a)
}
