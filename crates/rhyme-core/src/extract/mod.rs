//! Word-occurrence extraction.
//!
//! Every token of every line becomes a [`WordOccurrence`]. Long tokens also
//! yield partial occurrences for their compound sub-parts, and every adjacent
//! token pair on a line yields a two-word phrase occurrence.

mod compound;
mod tokenize;

use std::ops::Range;

use tracing::{debug, debug_span, warn};

use crate::phoneme::Pronunciation;
use crate::resolver::PhonemeResolver;
use crate::text::{is_excluded, is_stopword, normalize_word, spell_digit};

use compound::{sub_parts, SubPart};
use tokenize::{tokenize, Token};

/// An occurrence whose span does not fit the text it came from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("line {line} out of range ({lines} lines)")]
    LineOutOfRange { line: usize, lines: usize },
    #[error("span {start}..{end} invalid on line {line} of {len} characters")]
    InvalidSpan {
        line: usize,
        start: usize,
        end: usize,
        len: usize,
    },
}

/// Where a partial occurrence came from.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialOf {
    /// Index of the parent's full-word occurrence.
    pub parent: usize,
    /// Normalized parent text.
    pub parent_text: String,
    pub parent_phonemes: Option<Pronunciation>,
    /// Character range within the parent token.
    pub range: Range<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OccurrenceKind {
    Word,
    Partial(PartialOf),
    /// Two adjacent tokens; holds their normalized texts.
    Phrase { first: String, second: String },
}

/// A span of the input considered as a rhyme candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct WordOccurrence {
    /// Text as written.
    pub text: String,
    /// Lowercased, punctuation stripped, single digits spelled out.
    pub normalized: String,
    pub line: usize,
    /// Character offsets within the line, half-open.
    pub start: usize,
    pub end: usize,
    pub kind: OccurrenceKind,
    pub phonemes: Option<Pronunciation>,
}

impl WordOccurrence {
    /// A stand-alone word at line 0, for pairwise comparisons outside a text.
    pub fn standalone(word: &str, resolver: &PhonemeResolver) -> Self {
        let token = Token {
            text: word,
            start: 0,
            end: word.chars().count(),
        };
        Self::word(&token, 0, resolver)
    }

    fn word(token: &Token<'_>, line: usize, resolver: &PhonemeResolver) -> Self {
        let spoken = spell_digit(token.text).unwrap_or(token.text);
        Self {
            text: token.text.to_string(),
            normalized: normalize_word(spoken),
            line,
            start: token.start,
            end: token.end,
            kind: OccurrenceKind::Word,
            phonemes: resolver.resolve(spoken),
        }
    }

    /// Sub-part `part` of this word, or `None` if it is never a candidate.
    ///
    /// Phonemes are sliced from the parent's by character proportion, kept
    /// even when the slice holds no stressed vowel. Only a parent without
    /// phonemes sends the part to the resolver on its own.
    fn partial(&self, parent: usize, part: SubPart, resolver: &PhonemeResolver) -> Option<Self> {
        let normalized = self.normalized.get(part.start..part.end)?.to_string();
        if is_excluded(&normalized) {
            return None;
        }
        let phonemes = match &self.phonemes {
            Some(p) => p.slice_proportional(part.start, part.end, self.normalized.len()),
            None => resolver.resolve(&normalized),
        };
        Some(Self {
            text: self.text.get(part.start..part.end)?.to_string(),
            normalized,
            line: self.line,
            start: self.start + part.start,
            end: self.start + part.end,
            kind: OccurrenceKind::Partial(PartialOf {
                parent,
                parent_text: self.normalized.clone(),
                parent_phonemes: self.phonemes.clone(),
                range: part.start..part.end,
            }),
            phonemes,
        })
    }

    /// Phrase spanning `first` and `second`, which must be adjacent on one
    /// line. Phonemes are the concatenation of both words', if both resolved.
    fn phrase(first: &Self, second: &Self) -> Self {
        let phonemes = match (&first.phonemes, &second.phonemes) {
            (Some(a), Some(b)) => Some(a.concat(b)),
            _ => None,
        };
        Self {
            text: format!("{} {}", first.text, second.text),
            normalized: format!("{} {}", first.normalized, second.normalized),
            line: first.line,
            start: first.start,
            end: second.end,
            kind: OccurrenceKind::Phrase {
                first: first.normalized.clone(),
                second: second.normalized.clone(),
            },
            phonemes,
        }
    }

    pub fn is_phrase(&self) -> bool {
        matches!(self.kind, OccurrenceKind::Phrase { .. })
    }

    pub fn partial_of(&self) -> Option<&PartialOf> {
        match &self.kind {
            OccurrenceKind::Partial(p) => Some(p),
            _ => None,
        }
    }

    pub fn char_len(&self) -> usize {
        self.end - self.start
    }

    /// Half-open overlap on the same line.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.line == other.line && self.start < other.end && other.start < self.end
    }

    /// Check this occurrence against the character counts of the text's
    /// lines.
    pub fn check_position(&self, line_lengths: &[usize]) -> Result<(), PositionError> {
        let len = *line_lengths
            .get(self.line)
            .ok_or(PositionError::LineOutOfRange {
                line: self.line,
                lines: line_lengths.len(),
            })?;
        check_span(self.line, self.start, self.end, len)
    }
}

fn check_span(line: usize, start: usize, end: usize, len: usize) -> Result<(), PositionError> {
    if start < end && end <= len {
        Ok(())
    } else {
        Err(PositionError::InvalidSpan {
            line,
            start,
            end,
            len,
        })
    }
}

/// Character count of each `\n`-separated line.
pub fn line_lengths(text: &str) -> Vec<usize> {
    text.split('\n').map(|l| l.chars().count()).collect()
}

/// Word tokens of `text` in reading order, as written.
pub fn words(text: &str) -> Vec<&str> {
    text.split('\n')
        .flat_map(|line| tokenize(line).into_iter().map(|t| t.text))
        .collect()
}

/// Extract every rhyme candidate from `text`.
///
/// Order: for each line, each token followed by its sub-parts; then, for
/// each line, its phrases.
pub fn extract(text: &str, resolver: &PhonemeResolver) -> Vec<WordOccurrence> {
    let _span = debug_span!("extract").entered();
    let mut out = Vec::new();
    let mut line_words: Vec<(usize, Vec<usize>)> = Vec::new();

    for (line_idx, line) in text.split('\n').enumerate() {
        let len = line.chars().count();
        let mut words = Vec::new();
        for token in tokenize(line) {
            let occ = WordOccurrence::word(&token, line_idx, resolver);
            let Some(index) = push_checked(&mut out, len, occ) else {
                continue;
            };
            words.push(index);
            push_parts(&mut out, index, len, resolver);
        }
        line_words.push((len, words));
    }

    for (len, words) in &line_words {
        for pair in words.windows(2) {
            let (first, second) = (&out[pair[0]], &out[pair[1]]);
            if is_stopword(&first.text) && is_stopword(&second.text) {
                continue;
            }
            let phrase = WordOccurrence::phrase(first, second);
            push_checked(&mut out, *len, phrase);
        }
    }

    debug!(occurrences = out.len(), lines = line_words.len());
    out
}

fn push_parts(
    out: &mut Vec<WordOccurrence>,
    parent: usize,
    line_len: usize,
    resolver: &PhonemeResolver,
) {
    let word = &out[parent];
    // Sub-part offsets are taken in the normalized form; only derive them
    // when it lines up with the written token.
    if word.normalized.len() != word.text.len() {
        return;
    }
    let parts: Vec<WordOccurrence> = sub_parts(&word.normalized, word.phonemes.as_ref(), resolver)
        .into_iter()
        .filter_map(|part| word.partial(parent, part, resolver))
        .collect();
    for part in parts {
        push_checked(out, line_len, part);
    }
}

fn push_checked(
    out: &mut Vec<WordOccurrence>,
    line_len: usize,
    occ: WordOccurrence,
) -> Option<usize> {
    if let Err(e) = check_span(occ.line, occ.start, occ.end, line_len) {
        warn!(error = %e, text = %occ.text, "skipping occurrence");
        return None;
    }
    out.push(occ);
    Some(out.len() - 1)
}
