use std::collections::HashMap;

use super::{DictError, Dictionary};
use crate::phoneme::Pronunciation;

/// CMU pronouncing dictionary.
///
/// Text format, one entry per line:
///
/// ```text
/// ;;; comment
/// landscape  L AE1 N D S K EY2 P
/// read(2)  R EH1 D  # past tense
/// ```
///
/// Only the first listed variant of a word is kept; `(N)` variants that
/// follow are ignored.
pub struct CmuDictionary {
    pub(super) entries: HashMap<String, Pronunciation>,
}

impl CmuDictionary {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Pronunciation)>,
    {
        let mut map = HashMap::new();
        for (word, pron) in entries {
            map.entry(word.to_lowercase()).or_insert(pron);
        }
        Self { entries: map }
    }

    pub fn from_text(text: &str) -> Result<Self, DictError> {
        let mut entries: HashMap<String, Pronunciation> = HashMap::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }
            let Some((term, phones)) = line.split_once(char::is_whitespace) else {
                return Err(DictError::Parse {
                    line: idx + 1,
                    reason: format!("missing pronunciation for {line:?}"),
                });
            };
            let (word, variant) = split_variant(term);
            if word.is_empty() {
                return Err(DictError::Parse {
                    line: idx + 1,
                    reason: "empty headword".to_string(),
                });
            }
            let pron = Pronunciation::parse(phones).map_err(|e| DictError::Parse {
                line: idx + 1,
                reason: e.to_string(),
            })?;
            if variant.is_some() {
                continue;
            }
            entries.entry(word.to_lowercase()).or_insert(pron);
        }
        Ok(Self { entries })
    }

    /// Iterate over all (word, pronunciation) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Pronunciation)> {
        self.entries.iter().map(|(w, p)| (w.as_str(), p))
    }
}

/// Split `word(2)` into `("word", Some(2))`.
fn split_variant(term: &str) -> (&str, Option<u32>) {
    if let Some(open) = term.rfind('(') {
        if let Some(num) = term[open + 1..].strip_suffix(')') {
            if let Ok(n) = num.parse() {
                return (&term[..open], Some(n));
            }
        }
    }
    (term, None)
}

impl Dictionary for CmuDictionary {
    fn lookup(&self, word: &str) -> Option<Pronunciation> {
        self.entries.get(word).cloned()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
