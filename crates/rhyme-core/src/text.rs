//! Character classification and word normalization for English lyrics.

/// Common function words that would otherwise link unrelated rhyme families.
const STOPLIST: &[&str] = &[
    "the", "a", "an", "with", "and", "is", "i'm", "he", "me", "be", "we", "she", "no", "so",
    "to", "of", "in", "on", "for", "it", "was", "your", "at", "by", "as", "do", "my", "or",
    "if", "but", "not", "you",
];

/// Word-token characters: ASCII letters, digits and the apostrophe.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '\''
}

/// Lowercase, trim, and strip `.,!?;:'"`.
pub fn normalize_word(word: &str) -> String {
    word.trim()
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '\'' | '"'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Stoplist membership, checked on the lowercased form with apostrophes kept
/// (so "i'm" matches) and on the fully normalized form.
pub fn is_stopword(word: &str) -> bool {
    let lower = word.trim().to_lowercase();
    STOPLIST.contains(&lower.as_str()) || STOPLIST.contains(&normalize_word(word).as_str())
}

/// Words never considered for rhyming: stoplisted or shorter than two
/// characters once normalized.
pub fn is_excluded(word: &str) -> bool {
    is_stopword(word) || normalize_word(word).chars().count() < 2
}

/// Spell out a single-digit token ("7" → "seven"). Longer numbers are not
/// spelled out.
pub fn spell_digit(token: &str) -> Option<&'static str> {
    let mut chars = token.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    Some(match c {
        '0' => "zero",
        '1' => "one",
        '2' => "two",
        '3' => "three",
        '4' => "four",
        '5' => "five",
        '6' => "six",
        '7' => "seven",
        '8' => "eight",
        '9' => "nine",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("  Don't!"), "dont");
        assert_eq!(normalize_word("\"Hello,\""), "hello");
        assert_eq!(normalize_word("LANDSCAPE"), "landscape");
    }

    #[test]
    fn test_stoplist() {
        assert!(is_stopword("The"));
        assert!(is_stopword("I'm"));
        assert!(!is_stopword("cat"));
    }

    #[test]
    fn test_excluded() {
        assert!(is_excluded("the"));
        assert!(is_excluded("x"));
        assert!(is_excluded("'"));
        assert!(!is_excluded("ox"));
    }

    #[test]
    fn test_spell_digit() {
        assert_eq!(spell_digit("0"), Some("zero"));
        assert_eq!(spell_digit("9"), Some("nine"));
        assert_eq!(spell_digit("10"), None);
        assert_eq!(spell_digit("a"), None);
        assert_eq!(spell_digit(""), None);
    }

    #[test]
    fn test_is_word_char() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('7'));
        assert!(is_word_char('\''));
        assert!(!is_word_char('-'));
        assert!(!is_word_char('é'));
    }
}
