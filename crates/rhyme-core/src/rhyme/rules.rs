//! The rhyme rule chain.
//!
//! Rules run in order. The first `Match` or `Reject` decides the pair;
//! `Abstain` passes to the next rule. Several rules exist only to reject
//! pairs a later, looser rule would accept, so the order is significant.

use super::profile::{ah_er_pair, equivalent, similar_consonants, Profile};
use super::Verdict;
use crate::phoneme::Vowel;

use Verdict::{Abstain, Match, Reject};

type Eval = fn(&Profile<'_>, &Profile<'_>) -> Verdict;

pub(crate) struct Rule {
    pub name: &'static str,
    pub eval: Eval,
}

pub(crate) const RULES: [Rule; 16] = [
    Rule {
        name: "penultimate-stress",
        eval: penultimate_stress,
    },
    Rule {
        name: "ah-er-near",
        eval: ah_er_near,
    },
    Rule {
        name: "er-ah-ending",
        eval: er_ah_ending,
    },
    Rule {
        name: "single-syllable-ey",
        eval: single_syllable_ey,
    },
    Rule {
        name: "open-vs-one-consonant",
        eval: open_vs_one_consonant,
    },
    Rule {
        name: "same-final",
        eval: same_final,
    },
    Rule {
        name: "open-ending",
        eval: open_ending,
    },
    Rule {
        name: "similar-consonants",
        eval: similar_final_consonants,
    },
    Rule {
        name: "shared-coda-sz",
        eval: shared_coda_sz,
    },
    Rule {
        name: "iy-endings",
        eval: iy_endings,
    },
    Rule {
        name: "single-syllable-eh-iy",
        eval: single_syllable_eh_iy,
    },
    Rule {
        name: "single-syllable-vowel",
        eval: single_syllable_vowel,
    },
    Rule {
        name: "nasal-z",
        eval: nasal_z,
    },
    Rule {
        name: "phrase-ay-nasal",
        eval: phrase_ay_nasal,
    },
    Rule {
        name: "oy-r",
        eval: oy_r,
    },
    Rule {
        name: "ow-iy",
        eval: ow_iy,
    },
];

fn verdict(cond: bool) -> Verdict {
    if cond {
        Match
    } else {
        Abstain
    }
}

fn veto(cond: bool) -> Verdict {
    if cond {
        Reject
    } else {
        Abstain
    }
}

/// Multi-stress words: same second-to-last stressed vowel, same (or AH/ER)
/// last vowel, syllable counts within one.
fn penultimate_stress(a: &Profile<'_>, b: &Profile<'_>) -> Verdict {
    let (Some(pa), Some(pb)) = (a.penultimate_stressed(), b.penultimate_stressed()) else {
        return Abstain;
    };
    let (Some(la), Some(lb)) = (a.last_vowel(), b.last_vowel()) else {
        return Abstain;
    };
    verdict(
        pa == pb
            && (la == lb || ah_er_pair(la, lb))
            && a.syllables().abs_diff(b.syllables()) <= 1,
    )
}

/// Two-plus syllables, same second-to-last vowel, ending AH against ER.
fn ah_er_near(a: &Profile<'_>, b: &Profile<'_>) -> Verdict {
    if a.syllables() < 2 || b.syllables() < 2 {
        return Abstain;
    }
    match (a.last_vowel(), b.last_vowel()) {
        (Some(la), Some(lb)) => {
            verdict(a.penultimate_vowel() == b.penultimate_vowel() && ah_er_pair(la, lb))
        }
        _ => Abstain,
    }
}

/// A word ending on ER or AH only rhymes with another such word.
fn er_ah_ending(a: &Profile<'_>, b: &Profile<'_>) -> Verdict {
    let er_ah = |p: &Profile<'_>| matches!(p.last_vowel(), Some(Vowel::ER | Vowel::AH));
    veto(er_ah(a) != er_ah(b))
}

fn single_syllable_ey(a: &Profile<'_>, b: &Profile<'_>) -> Verdict {
    verdict(
        a.single_syllable()
            && b.single_syllable()
            && a.vowel == Vowel::EY
            && b.vowel == Vowel::EY,
    )
}

/// One word ends on the vowel, the other adds exactly one consonant.
fn open_vs_one_consonant(a: &Profile<'_>, b: &Profile<'_>) -> Verdict {
    if !equivalent(a.vowel, b.vowel) {
        return Abstain;
    }
    let one_more = |open: &Profile<'_>, closed: &Profile<'_>| {
        open.ends_at_vowel() && closed.coda().len() == 1 && !closed.final_is_vowel()
    };
    verdict(one_more(a, b) || one_more(b, a))
}

fn same_final(a: &Profile<'_>, b: &Profile<'_>) -> Verdict {
    verdict(equivalent(a.vowel, b.vowel) && a.final_base() == b.final_base())
}

/// Exactly one word ends on the vowel: fine for a one-syllable open word
/// unless the other closes on L; rejected otherwise.
fn open_ending(a: &Profile<'_>, b: &Profile<'_>) -> Verdict {
    if !equivalent(a.vowel, b.vowel) || a.ends_at_vowel() == b.ends_at_vowel() {
        return Abstain;
    }
    let (open, closed) = if a.ends_at_vowel() { (a, b) } else { (b, a) };
    if !open.single_syllable() || closed.ends_with("L") {
        Reject
    } else {
        Match
    }
}

fn similar_final_consonants(a: &Profile<'_>, b: &Profile<'_>) -> Verdict {
    verdict(
        equivalent(a.vowel, b.vowel)
            && !a.final_is_vowel()
            && !b.final_is_vowel()
            && similar_consonants(a.final_base(), b.final_base()),
    )
}

/// Same phoneme right after the vowel, and an S or Z ending on either side.
fn shared_coda_sz(a: &Profile<'_>, b: &Profile<'_>) -> Verdict {
    if !equivalent(a.vowel, b.vowel) {
        return Abstain;
    }
    let sz = |p: &Profile<'_>| p.ends_with("S") || p.ends_with("Z");
    match (a.coda().first(), b.coda().first()) {
        (Some(x), Some(y)) => verdict(x == y && (sz(a) || sz(b))),
        _ => Abstain,
    }
}

fn iy_endings(a: &Profile<'_>, b: &Profile<'_>) -> Verdict {
    if !a.ends_with("IY") || !b.ends_with("IY") {
        return Abstain;
    }
    let eligible = (a.single_syllable() && b.single_syllable())
        || (a.vowel == Vowel::IY && b.vowel == Vowel::IY);
    if !eligible {
        return Abstain;
    }
    let first_vowel = a.syllables() >= 2 && b.syllables() >= 2 && a.vowels[0] == b.vowels[0];
    let penultimate = a.stressed.len() >= 2
        && b.stressed.len() >= 2
        && a.penultimate_stressed() == b.penultimate_stressed();
    verdict(first_vowel || penultimate)
}

/// One-syllable EH pairs (unless only one ends on L) and IY pairs.
fn single_syllable_eh_iy(a: &Profile<'_>, b: &Profile<'_>) -> Verdict {
    if !a.single_syllable() || !b.single_syllable() {
        return Abstain;
    }
    if a.has_stressed(Vowel::EH) && b.has_stressed(Vowel::EH) {
        return if a.ends_with("L") != b.ends_with("L") {
            Reject
        } else {
            Match
        };
    }
    verdict(a.has_stressed(Vowel::IY) && b.has_stressed(Vowel::IY))
}

/// One-syllable words with the same vowel, minus the ending mismatches
/// that do not sound like rhymes.
fn single_syllable_vowel(a: &Profile<'_>, b: &Profile<'_>) -> Verdict {
    if !a.single_syllable() || !b.single_syllable() || a.vowels[0] != b.vowels[0] {
        return Abstain;
    }
    let vowel = a.vowels[0];
    let l_after = |p: &Profile<'_>| {
        p.position(Vowel::OW.as_str())
            .is_some_and(|i| p.bases.get(i + 1) == Some(&"L"))
    };
    let r_before = |p: &Profile<'_>| {
        p.position(Vowel::UW.as_str())
            .is_some_and(|i| i > 0 && p.bases[i - 1] == "R")
    };
    let mismatch = match vowel {
        Vowel::EH => a.ends_with("L") != b.ends_with("L"),
        Vowel::AY => {
            let n_or_m = |p: &Profile<'_>| p.ends_with("N") || p.ends_with("M");
            n_or_m(a) != n_or_m(b)
        }
        Vowel::OW => l_after(a) != l_after(b),
        Vowel::UW => r_before(a) != r_before(b),
        Vowel::UH | Vowel::AH => a.ends_with("R") != b.ends_with("R"),
        _ => false,
    };
    if mismatch || a.ends_nasal() != b.ends_nasal() {
        Reject
    } else {
        Match
    }
}

/// "-ing" / "-ine" families: N after the vowel, Z at the end.
fn nasal_z(a: &Profile<'_>, b: &Profile<'_>) -> Verdict {
    verdict(
        equivalent(a.vowel, b.vowel)
            && a.coda().contains(&"N")
            && b.coda().contains(&"N")
            && a.ends_with("Z")
            && b.ends_with("Z"),
    )
}

/// Phrases around AY with an N somewhere, and compatible vowels after AY.
fn phrase_ay_nasal(a: &Profile<'_>, b: &Profile<'_>) -> Verdict {
    if !(a.phrase || b.phrase)
        || !equivalent(a.vowel, b.vowel)
        || !(a.vowel == Vowel::AY || b.vowel == Vowel::AY)
        || !a.contains("N")
        || !b.contains("N")
    {
        return Abstain;
    }
    let after_ay = |p: &Profile<'_>| -> Vec<Vowel> {
        let from = p.position(Vowel::AY.as_str()).map_or(0, |i| i + 1);
        p.bases[from..]
            .iter()
            .filter_map(|b| Vowel::from_symbol(b))
            .collect()
    };
    let (va, vb) = (after_ay(a), after_ay(b));
    let has = |v: &[Vowel], x: Vowel| v.contains(&x);
    let cross = |x: Vowel, y: Vowel| (has(&va, x) && has(&vb, y)) || (has(&va, y) && has(&vb, x));
    verdict(
        (va.is_empty() && vb.is_empty())
            || cross(Vowel::AH, Vowel::AA)
            || cross(Vowel::IH, Vowel::IH)
            || cross(Vowel::AH, Vowel::IH),
    )
}

/// OY against AO+R or OW+R ("boy" / "more"), unless either ends on IY.
fn oy_r(a: &Profile<'_>, b: &Profile<'_>) -> Verdict {
    let r_after = |p: &Profile<'_>| {
        matches!(p.vowel, Vowel::AO | Vowel::OW) && p.coda().first() == Some(&"R")
    };
    let pair = (a.vowel == Vowel::OY && r_after(b)) || (b.vowel == Vowel::OY && r_after(a));
    verdict(pair && !a.ends_with("IY") && !b.ends_with("IY"))
}

/// Multi-syllable "-o" / "-y" forms: stressed OW, last vowel IY.
fn ow_iy(a: &Profile<'_>, b: &Profile<'_>) -> Verdict {
    let fits = |p: &Profile<'_>| {
        p.syllables() >= 2 && p.vowel == Vowel::OW && p.last_vowel() == Some(Vowel::IY)
    };
    verdict(fits(a) && fits(b))
}
