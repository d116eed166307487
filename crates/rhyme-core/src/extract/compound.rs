//! Compound-word sub-part derivation.
//!
//! Given a normalized ASCII word, find character spans that are plausible
//! stand-alone rhyme candidates: halves of a compound, stems left after
//! stripping a known prefix or suffix, and a few targeted patterns.

use std::collections::HashSet;

use crate::phoneme::{Pronunciation, Vowel};
use crate::resolver::PhonemeResolver;
use crate::settings::settings;

const PREFIXES: &[&str] = &[
    "anti", "dis", "inter", "mis", "non", "out", "over", "post", "pre", "self", "sub", "super",
    "under", "ultra",
];

const SUFFIXES: &[&str] = &[
    "able", "ance", "ation", "ence", "eous", "ful", "hood", "ible", "ical", "ious", "ism", "ity",
    "ize", "less", "ment", "ness", "ous", "ville", "ware",
];

/// Character span `start..end` within the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SubPart {
    pub start: usize,
    pub end: usize,
}

struct Parts<'r> {
    resolver: &'r PhonemeResolver,
    len: usize,
    min_part: usize,
    seen: HashSet<SubPart>,
    out: Vec<SubPart>,
}

impl Parts<'_> {
    fn resolves(&self, s: &str) -> bool {
        self.resolver.resolve(s).is_some()
    }

    fn resolves_with_vowel(&self, s: &str) -> bool {
        self.resolver
            .resolve(s)
            .is_some_and(|p| p.has_vowel())
    }

    fn push(&mut self, start: usize, end: usize) {
        let part = SubPart { start, end };
        if start < end && end <= self.len && (start, end) != (0, self.len) && self.seen.insert(part)
        {
            self.out.push(part);
        }
    }

    /// Push `0..cut` if any of `stems` resolves and `cut` is long enough.
    fn push_stem(&mut self, cut: usize, stems: &[String]) -> bool {
        if cut < self.min_part || !stems.iter().any(|s| self.resolves(s)) {
            return false;
        }
        self.push(0, cut);
        true
    }
}

/// Derive sub-parts of `word` (normalized, ASCII).
///
/// `phonemes` is the whole word's pronunciation, used only by the
/// stressed-EY heuristic.
pub(crate) fn sub_parts(
    word: &str,
    phonemes: Option<&Pronunciation>,
    resolver: &PhonemeResolver,
) -> Vec<SubPart> {
    let cfg = &settings().analysis;
    let len = word.len();
    if len < cfg.min_compound_length || !word.is_ascii() {
        return Vec::new();
    }
    let mut parts = Parts {
        resolver,
        len,
        min_part: cfg.min_part_length,
        seen: HashSet::new(),
        out: Vec::new(),
    };

    split_points(word, &mut parts);
    affixes(word, &mut parts);
    agentive(word, &mut parts);
    inflections(word, &mut parts);
    leading_for(word, &mut parts);
    if let Some(p) = phonemes {
        stressed_ey(p, &mut parts);
    }
    parts.out
}

/// Every split with both halves pronounceable and voiced.
fn split_points(word: &str, parts: &mut Parts<'_>) {
    let min = parts.min_part;
    for i in min..=parts.len - min {
        let (a, b) = word.split_at(i);
        if parts.resolves_with_vowel(a) && parts.resolves_with_vowel(b) {
            parts.push(0, i);
            parts.push(i, parts.len);
        }
    }
}

fn affixes(word: &str, parts: &mut Parts<'_>) {
    for prefix in PREFIXES {
        if let Some(rest) = word.strip_prefix(prefix) {
            if rest.len() >= parts.min_part && parts.resolves(rest) {
                parts.push(prefix.len(), parts.len);
            }
        }
    }
    for suffix in SUFFIXES {
        if let Some(base) = word.strip_suffix(suffix) {
            if base.len() >= parts.min_part && parts.resolves(base) {
                parts.push(0, base.len());
            }
        }
    }
}

/// "-er" / "-or" agent nouns and "-a" colloquial endings: keep the stem.
fn agentive(word: &str, parts: &mut Parts<'_>) {
    let len = parts.len;
    if word.ends_with("er") || word.ends_with("or") {
        // "player" → "play"; "shaper" → "shap" (as "shape")
        let stem = &word[..len - 2];
        if !parts.push_stem(len - 2, &[stem.to_string(), format!("{stem}e")]) {
            parts.push_stem(len - 1, &[word[..len - 1].to_string()]);
        }
    } else if word.ends_with('a') {
        parts.push_stem(len - 1, &[word[..len - 1].to_string()]);
    }
}

/// "-ing" and "-ed": keep the stem, allowing a dropped "e" or a doubled
/// final consonant.
fn inflections(word: &str, parts: &mut Parts<'_>) {
    let len = parts.len;
    if let Some(stem) = word.strip_suffix("ing") {
        let cut = stem.len();
        if !parts.push_stem(cut, &[stem.to_string(), format!("{stem}e")]) {
            try_undoubled(stem, parts);
        }
    } else if word.ends_with("ed") {
        // "hoped" → "hope", "played" → "play", "stopped" → "stop"
        if !parts.push_stem(len - 1, &[word[..len - 1].to_string()])
            && !parts.push_stem(len - 2, &[word[..len - 2].to_string()])
        {
            try_undoubled(&word[..len - 2], parts);
        }
    }
}

fn try_undoubled(stem: &str, parts: &mut Parts<'_>) {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n >= 2 && bytes[n - 1] == bytes[n - 2] && !b"aeiou".contains(&bytes[n - 1]) {
        parts.push_stem(n - 1, &[stem[..n - 1].to_string()]);
    }
}

/// "forget" → "get", "forever" → "ever".
fn leading_for(word: &str, parts: &mut Parts<'_>) {
    if let Some(rest) = word.strip_prefix("for") {
        if rest.len() >= parts.min_part && parts.resolves(rest) {
            parts.push(3, parts.len);
        }
    }
}

/// A stressed EY inside the word, with its onset and the phoneme after it,
/// mapped back to characters by the phoneme-to-character ratio.
fn stressed_ey(phonemes: &Pronunciation, parts: &mut Parts<'_>) {
    let n = phonemes.len();
    let len = parts.len;
    for (p, ph) in phonemes.phonemes().iter().enumerate() {
        if p == 0 || p + 1 >= n || ph.vowel() != Some(Vowel::EY) || !ph.is_stressed_vowel() {
            continue;
        }
        let start = ((p - 1) * len) / n;
        let end = ((p + 2).min(n) * len).div_ceil(n).min(len);
        if end >= start + parts.min_part {
            parts.push(start, end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::test_resolver;

    fn spans(word: &str) -> Vec<(usize, usize, String)> {
        let resolver = test_resolver();
        let phonemes = resolver.resolve(word);
        sub_parts(word, phonemes.as_ref(), &resolver)
            .into_iter()
            .map(|p| (p.start, p.end, word[p.start..p.end].to_string()))
            .collect()
    }

    fn texts(word: &str) -> Vec<String> {
        spans(word).into_iter().map(|(_, _, t)| t).collect()
    }

    #[test]
    fn test_landscape_split() {
        let parts = spans("landscape");
        assert!(parts.contains(&(0, 4, "land".to_string())));
        assert!(parts.contains(&(4, 9, "scape".to_string())));
        // "lands" + "cape" is also a valid split.
        assert!(parts.contains(&(0, 5, "lands".to_string())));
        assert!(parts.contains(&(5, 9, "cape".to_string())));
    }

    #[test]
    fn test_short_word_not_split() {
        assert!(spans("handy").is_empty());
    }

    #[test]
    fn test_no_duplicates() {
        let parts = spans("landscape");
        let unique: HashSet<_> = parts.iter().collect();
        assert_eq!(unique.len(), parts.len());
    }

    #[test]
    fn test_prefix_strip() {
        // "un" is not a listed prefix, "mis" is.
        assert!(texts("misplay").contains(&"play".to_string()));
    }

    #[test]
    fn test_suffix_strip() {
        assert!(texts("soulless").contains(&"soul".to_string()));
        assert!(texts("handful").contains(&"hand".to_string()));
    }

    #[test]
    fn test_agentive() {
        assert!(texts("player").contains(&"play".to_string()));
        // Below the compound length.
        assert!(texts("maker").is_empty());
    }

    #[test]
    fn test_ing_and_ed() {
        assert!(texts("playing").contains(&"play".to_string()));
        assert!(texts("played").contains(&"play".to_string()));
        assert!(texts("running").contains(&"run".to_string()));
        assert!(texts("plated").contains(&"plate".to_string()));
    }

    #[test]
    fn test_leading_for() {
        assert!(texts("forget").contains(&"get".to_string()));
        assert!(texts("forever").contains(&"ever".to_string()));
    }

    #[test]
    fn test_stressed_ey_span() {
        // EY2 at phoneme 6 of 8 in a 9-letter word: phonemes 5..8 → chars 5..9.
        assert!(spans("landscape").contains(&(5, 9, "cape".to_string())));
    }
}
