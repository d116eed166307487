//! Text → rhyme groups.

use std::collections::HashSet;

use tracing::{debug_span, warn};

use crate::extract::{extract, line_lengths, words, WordOccurrence};
use crate::graph::build_graph;
use crate::group::{extract_groups, RhymeGroup};
use crate::resolver::PhonemeResolver;
use crate::rhyme::{explain, RhymeExplanation};
use crate::settings::settings;
use crate::text::{normalize_word, spell_digit};

/// Find the rhyme groups in `text`.
///
/// Synchronous and deterministic for a given text and resolver cache state.
/// Words the resolver cannot pronounce simply take no part.
pub fn detect_rhymes(text: &str, resolver: &PhonemeResolver) -> Vec<RhymeGroup> {
    detect(text, resolver, settings().analysis.max_occurrences)
}

fn detect(text: &str, resolver: &PhonemeResolver, max_occurrences: usize) -> Vec<RhymeGroup> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let _span = debug_span!("detect_rhymes", lines = text.lines().count()).entered();

    let mut occurrences = extract(text, resolver);
    if occurrences.len() > max_occurrences {
        // Parents precede their parts, so truncation never orphans a part.
        warn!(
            found = occurrences.len(),
            limit = max_occurrences,
            "too many candidates, truncating"
        );
        occurrences.truncate(max_occurrences);
    }

    let graph = build_graph(&occurrences);
    let mut groups = extract_groups(&occurrences, &graph);

    let lens = line_lengths(text);
    for group in &mut groups {
        group
            .members
            .retain(|m| position_ok(&occurrences[m.index], &lens));
    }
    groups.retain(|g| g.members.len() >= 2);
    groups
}

fn position_ok(occ: &WordOccurrence, line_lengths: &[usize]) -> bool {
    match occ.check_position(line_lengths) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, text = %occ.text, "dropping group member");
            false
        }
    }
}

/// Decide two stand-alone words.
pub fn explain_words(a: &str, b: &str, resolver: &PhonemeResolver) -> RhymeExplanation {
    explain(
        &WordOccurrence::standalone(a, resolver),
        &WordOccurrence::standalone(b, resolver),
    )
}

/// Distinct normalized words of `text` the resolver cannot pronounce yet,
/// in order of first appearance. Digits are spelled out first.
pub fn unknown_words(text: &str, resolver: &PhonemeResolver) -> Vec<String> {
    let mut seen = HashSet::new();
    words(text)
        .into_iter()
        .map(|w| spell_digit(w).map_or_else(|| normalize_word(w), str::to_string))
        .filter(|w| !w.is_empty() && seen.insert(w.clone()))
        .filter(|w| resolver.resolve(w).is_none())
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::testutil::{test_resolver, TEST_DICT};

    const VERSE: &str = "\
I got a landscape painted on my brain
late night plate and a DNA chain
the cat in the hat got a feel for these
happy and snappy with money and honey

mother and brother, feature and creature
bowl for the soul and a goal for the feature";

    #[test]
    fn test_empty_and_blank() {
        let resolver = test_resolver();
        assert!(detect_rhymes("", &resolver).is_empty());
        assert!(detect_rhymes("  \n\t \n", &resolver).is_empty());
    }

    #[test]
    fn test_verse() {
        let resolver = test_resolver();
        let groups = detect_rhymes(VERSE, &resolver);
        assert!(!groups.is_empty());
        let find = |word: &str| {
            groups
                .iter()
                .position(|g| g.members.iter().any(|m| m.text == word))
        };
        let cat = find("cat").unwrap();
        assert_eq!(find("hat"), Some(cat));
        assert_eq!(find("bowl"), find("soul"));
        assert!(find("bowl").is_some());
        // "the" is never a member.
        assert_eq!(find("the"), None);
    }

    #[test]
    fn test_members_ordered_by_position() {
        let resolver = test_resolver();
        for g in detect_rhymes(VERSE, &resolver) {
            let keys: Vec<_> = g.members.iter().map(|m| (m.line, m.start, m.end)).collect();
            let mut sorted = keys.clone();
            sorted.sort();
            assert_eq!(keys, sorted);
        }
    }

    #[test]
    fn test_occurrence_cap() {
        let resolver = test_resolver();
        // Only "cat" and "hat" fit under a cap of two.
        let groups = detect("cat hat bat", &resolver, 2);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].members.len(), 2);
        assert!(detect("cat hat", &resolver, 1).is_empty());
    }

    #[test]
    fn test_explain_words() {
        let resolver = test_resolver();
        assert!(explain_words("cat", "hat", &resolver).rhymes());
        assert!(!explain_words("bowl", "bone", &resolver).rhymes());
    }

    #[test]
    fn test_unknown_words() {
        let resolver = test_resolver();
        assert_eq!(
            unknown_words("Skrrt cat, skrrt\n7 qwzx'", &resolver),
            vec!["skrrt", "seven", "qwzx"]
        );
        assert!(unknown_words("", &resolver).is_empty());
    }

    fn vocabulary() -> Vec<&'static str> {
        TEST_DICT
            .lines()
            .filter(|l| !l.starts_with(";;;"))
            .filter_map(|l| l.split_whitespace().next())
            .chain(["skrrt", "qwzx", "7", "don't", "'cause"])
            .collect()
    }

    fn arb_text() -> impl Strategy<Value = String> {
        let line = prop::collection::vec(prop::sample::select(vocabulary()), 0..6)
            .prop_map(|words| words.join(" "));
        prop::collection::vec(line, 1..9).prop_map(|lines| lines.join("\n"))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn groups_are_disjoint_and_non_trivial(text in arb_text()) {
            let resolver = test_resolver();
            let groups = detect_rhymes(&text, &resolver);
            let mut seen = HashSet::new();
            let mut ids = HashSet::new();
            for g in &groups {
                prop_assert!(g.members.len() >= 2);
                prop_assert!(ids.insert(g.id.clone()));
                for m in &g.members {
                    prop_assert!(seen.insert(m.index), "occurrence {} in two groups", m.index);
                }
            }
        }

        #[test]
        fn detection_is_idempotent(text in arb_text()) {
            let resolver = test_resolver();
            let first = detect_rhymes(&text, &resolver);
            let second = detect_rhymes(&text, &resolver);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn nearby_groups_differ_in_color(text in arb_text()) {
            let resolver = test_resolver();
            let groups = detect_rhymes(&text, &resolver);
            let palette = settings().color.palette.len();
            let lines = settings().color.adjacency_lines;
            let degree = |i: usize| {
                (0..groups.len())
                    .filter(|&j| j != i && groups[i].is_near(&groups[j], lines))
                    .count()
            };
            for i in 0..groups.len() {
                for j in i + 1..groups.len() {
                    if groups[i].is_near(&groups[j], lines) && degree(j) < palette {
                        prop_assert_ne!(&groups[i].color, &groups[j].color);
                    }
                }
            }
        }

        #[test]
        fn member_spans_fit_their_lines(text in arb_text()) {
            let resolver = test_resolver();
            let lens = line_lengths(&text);
            for g in detect_rhymes(&text, &resolver) {
                for m in &g.members {
                    prop_assert!(m.start < m.end);
                    prop_assert!(m.end <= lens[m.line]);
                }
            }
        }
    }
}
