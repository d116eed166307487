use super::{Phoneme, Stress};

/// True when any vowel in `phonemes` already carries a stress digit.
pub fn has_stress_markers(phonemes: &[Phoneme]) -> bool {
    phonemes.iter().any(|p| p.is_vowel() && p.stress().is_some())
}

/// Synthesize stress for a vowel sequence that has none.
///
/// The first vowel gets primary stress and every later vowel is unstressed;
/// consonants pass through untouched. This is an approximation of English
/// stress, not a phonological model, and the rhyme rules rely on exactly this
/// placement for remote-service pronunciations.
pub fn add_stress_markers(phonemes: &[Phoneme]) -> Vec<Phoneme> {
    let mut seen_vowel = false;
    phonemes
        .iter()
        .map(|p| {
            if !p.is_vowel() {
                return p.clone();
            }
            if seen_vowel {
                p.with_stress(Stress::Unstressed)
            } else {
                seen_vowel = true;
                p.with_stress(Stress::Primary)
            }
        })
        .collect()
}
