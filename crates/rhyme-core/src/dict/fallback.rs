use std::collections::HashMap;
use std::sync::OnceLock;

use super::Dictionary;
use crate::phoneme::Pronunciation;

/// Hand-authored pronunciations for slang and informal spellings that the
/// pronouncing dictionary does not cover.
const BUILTIN: &[(&str, &str)] = &[
    ("voice", "V OY1 S"),
    ("moist", "M OY1 S T"),
    ("heard", "HH ER1 D"),
    ("nerd", "N ER1 D"),
    ("emcee", "EH1 M S IY0"),
    ("mc", "EH1 M S IY0"),
    ("yo", "Y OW1"),
    ("dope", "D OW1 P"),
    ("homie", "HH OW1 M IY0"),
    ("addy", "AE1 D IY0"),
    ("bando", "B AE1 N D OW0"),
    ("blicky", "B L IH1 K IY0"),
    ("blocka", "B L AA1 K AH0"),
    ("pourin", "P AO1 R IH0 N"),
    ("cryin", "K R AY1 IH0 N"),
    ("lightnin", "L AY1 T N IH0 N"),
    ("flyin", "F L AY1 IH0 N"),
    ("lyin", "L AY1 IH0 N"),
    ("tryin", "T R AY1 IH0 N"),
    ("callin", "K AO1 L IH0 N"),
    ("chokin", "CH OW1 K IH0 N"),
    ("soakin", "S OW1 K IH0 N"),
    ("hopin", "HH OW1 P IH0 N"),
    ("dyin", "D AY1 IH0 N"),
    ("elopin", "IY1 L OW0 P IH0 N"),
    ("tellin", "T EH1 L IH0 N"),
    ("holdin", "HH OW1 L D IH0 N"),
    ("stretchin", "S T R EH1 CH IH0 N"),
    ("collectin", "K AH0 L EH1 K T IH0 N"),
    ("masseuse", "M AH0 S UW1 Z"),
    ("lettin", "L EH1 T IH0 N"),
    ("skatin", "S K EY1 T IH0 N"),
    ("prolly", "P R AA1 L IY0"),
    ("weaklings", "W IY1 K L IH0 NG Z"),
    ("mohicans", "M OW0 HH IY1 K AH0 N Z"),
    ("choppa", "CH AA1 P AH0"),
    ("crodie", "K R OW1 D IY0"),
    ("cack", "K AE1 K"),
    ("holla", "HH AA1 L AH0"),
    ("shoppa", "SH AA1 P AH0"),
    ("toppa", "T AA1 P AH0"),
    ("chakra", "CH AA1 K R AH0"),
    ("cred", "K R EH1 D"),
    ("empty", "EH1 M P T IY0"),
    ("with", "W IH1 TH"),
    ("teacher", "T IY1 CH ER0"),
    ("preacher", "P R IY1 CH ER0"),
    ("reefer", "R IY1 F ER0"),
    ("ether", "IY1 TH ER0"),
    ("calculus", "K AE1 L K Y AH0 L AH0 S"),
    ("demon", "D IY1 M AH0 N"),
    ("drip", "D R IH1 P"),
    ("drippy", "D R IH1 P IY0"),
    ("fam", "F AE1 M"),
    ("finna", "F IH1 N AH0"),
    ("flossin", "F L AO1 S IH0 N"),
    ("flexin", "F L EH1 K S IH0 N"),
    ("gangsta", "G AE1 NG S T AH0"),
    ("glizzy", "G L IH1 Z IY0"),
    ("gotta", "G AA1 T AH0"),
    ("grindin", "G R AY1 N D IH0 N"),
    ("guap", "G W AA1 P"),
    ("hitta", "HH IH1 T AH0"),
    ("icy", "AY1 S IY0"),
    ("lowkey", "L OW1 K IY0"),
    ("mobbin", "M AA1 B IH0 N"),
    ("opp", "AA1 P"),
    ("ima", "AY1 M AH0"),
    ("perkies", "P ER1 K IY0 Z"),
    ("poppin", "P AA1 P IH0 N"),
    ("pullup", "P UH1 L AH0 P"),
    ("rack", "R AE1 K"),
    ("realer", "R IY1 L ER0"),
    ("ridin", "R AY1 D IH0 N"),
    ("rollie", "R OW1 L IY0"),
    ("roley", "R OW1 L IY0"),
    ("shawty", "SH AO1 T IY0"),
    ("sippin", "S IH1 P IH0 N"),
    ("slime", "S L AY1 M"),
    ("slippin", "S L IH1 P IH0 N"),
    ("spitta", "S P IH1 T AH0"),
    ("stoppa", "S T AA1 P AH0"),
    ("stunna", "S T AH1 N AH0"),
    ("swole", "S W OW1 L"),
    ("thot", "TH AA1 T"),
    ("thuggin", "TH AH1 G IH0 N"),
    ("trill", "T R IH1 L"),
    ("tryna", "T R AY1 N AH0"),
    ("twin", "T W IH1 N"),
    ("wanna", "W AA1 N AH0"),
    ("woo", "W UW1"),
    ("ye", "Y EY1"),
    ("yoself", "Y OW1 S EH0 L F"),
    ("zooted", "Z UW1 T IH0 D"),
    ("zirconia", "Z ER0 K OW1 N IY0 AH0"),
    ("shrooms", "SH R UW1 M Z"),
    ("xannies", "Z AE1 N IY0 Z"),
    ("xan", "Z AE1 N"),
];

/// Curated fallback pronunciations keyed by punctuation-stripped lowercase form.
pub struct FallbackTable {
    entries: HashMap<&'static str, Pronunciation>,
}

impl FallbackTable {
    /// The built-in table, parsed once per process.
    pub fn builtin() -> &'static FallbackTable {
        static INSTANCE: OnceLock<FallbackTable> = OnceLock::new();
        INSTANCE.get_or_init(|| FallbackTable {
            entries: BUILTIN
                .iter()
                .filter_map(|(word, phones)| {
                    Pronunciation::parse(phones).ok().map(|p| (*word, p))
                })
                .collect(),
        })
    }
}

impl Dictionary for FallbackTable {
    fn lookup(&self, word: &str) -> Option<Pronunciation> {
        self.entries.get(word).cloned()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_entry_parses() {
        assert_eq!(FallbackTable::builtin().len(), BUILTIN.len());
    }

    #[test]
    fn test_every_builtin_entry_has_a_stressed_vowel() {
        for (word, phones) in BUILTIN {
            let p = Pronunciation::parse(phones).unwrap();
            assert!(
                p.last_stressed_vowel_index().is_some(),
                "{word} has no stressed vowel"
            );
        }
    }

    #[test]
    fn test_lookup_slang() {
        let table = FallbackTable::builtin();
        assert_eq!(table.lookup("finna").unwrap().to_string(), "F IH1 N AH0");
        assert!(table.lookup("landscape").is_none());
    }
}
