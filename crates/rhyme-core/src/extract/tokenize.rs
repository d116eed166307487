use crate::text::is_word_char;

/// A word token within one line. Offsets are character indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Split a line into maximal runs of ASCII letters, digits and apostrophes.
///
/// Apostrophes at either edge of a run are not part of the word ("'cause"
/// yields "cause", "dogs'" yields "dogs").
pub(crate) fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    // (byte, char) position where the current run started
    let mut run: Option<(usize, usize)> = None;
    let mut char_pos = 0;
    for (byte_pos, c) in line.char_indices() {
        if is_word_char(c) {
            run.get_or_insert((byte_pos, char_pos));
        } else if let Some((b, ch)) = run.take() {
            push_trimmed(&mut tokens, &line[b..byte_pos], ch);
        }
        char_pos += 1;
    }
    if let Some((b, ch)) = run {
        push_trimmed(&mut tokens, &line[b..], ch);
    }
    tokens
}

/// Push `run` minus edge apostrophes. Runs are ASCII, so byte and char
/// lengths agree.
fn push_trimmed<'a>(tokens: &mut Vec<Token<'a>>, run: &'a str, char_start: usize) {
    let lead = run.len() - run.trim_start_matches('\'').len();
    let text = run.trim_matches('\'');
    if text.is_empty() {
        return;
    }
    let start = char_start + lead;
    tokens.push(Token {
        text,
        start,
        end: start + text.len(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str) -> Vec<(&str, usize, usize)> {
        tokenize(line)
            .into_iter()
            .map(|t| (t.text, t.start, t.end))
            .collect()
    }

    #[test]
    fn test_basic_words() {
        assert_eq!(
            texts("The cat, the hat!"),
            vec![("The", 0, 3), ("cat", 4, 7), ("the", 9, 12), ("hat", 13, 16)]
        );
    }

    #[test]
    fn test_apostrophes() {
        assert_eq!(
            texts("don't 'cause dogs' '''"),
            vec![("don't", 0, 5), ("cause", 7, 12), ("dogs", 13, 17)]
        );
    }

    #[test]
    fn test_digits_and_hyphens() {
        assert_eq!(
            texts("top-5 in 2024"),
            vec![("top", 0, 3), ("5", 4, 5), ("in", 6, 8), ("2024", 9, 13)]
        );
    }

    #[test]
    fn test_char_offsets_after_multibyte() {
        // "é" is one character but two bytes.
        assert_eq!(texts("café cat"), vec![("caf", 0, 3), ("cat", 5, 8)]);
    }

    #[test]
    fn test_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ... !!").is_empty());
    }
}
