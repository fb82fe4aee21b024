//! Slug-to-title conversion shared by every tree and trail.
//!
//! Documentation records are keyed by identifier-style slugs (`2d_primitives`,
//! `string_functions`). Navigation needs human-readable labels, so every
//! display name is derived from its slug with [`title_case`]:
//!
//! - `2d_primitives` → "2d Primitives"
//! - `string_functions` → "String Functions"
//! - `lights_and_camera` → "Lights and Camera"
//!
//! ## Title-Casing Rules
//!
//! Casing is applied per token, where a token is a run of characters other
//! than whitespace, `:`, and the dashes `-` `–` `—`. Each token is either left
//! alone or has its first alphanumeric character uppercased:
//!
//! - **Manual case is kept**: `iPhone`, `createGraphics`, `p5.js` are untouched.
//! - **Connector words stay lowercase** (`and`, `of`, `the`, ...) unless the
//!   token starts or ends the title.
//! - **Label colons** (`a:b`) suppress capitalization of the word before them.
//! - Nothing is ever lowercased; the rest of a token keeps its casing.

/// Connector words that are not capitalized mid-title.
const SMALL_WORDS: &[&str] = &[
    "a", "ad", "an", "and", "as", "at", "because", "but", "by", "en", "for", "if", "in", "neither",
    "nor", "of", "on", "only", "or", "over", "per", "so", "some", "than", "that", "the", "to",
    "up", "upon", "v", "versus", "via", "vs", "when", "with", "without", "yet",
];

/// Convert an identifier-style slug into a display title.
///
/// Underscores become spaces, then title-casing is applied:
/// - `"shape"` → `"Shape"`
/// - `"2d_primitives"` → `"2d Primitives"`
/// - `"lights_and_camera"` → `"Lights and Camera"`
/// - `"p5.sound"` → `"p5.sound"` (manual case)
/// - `""` → `""`
pub fn title_case(slug: &str) -> String {
    let input = slug.replace('_', " ");
    let mut result = String::with_capacity(input.len());

    for (start, token) in tokens(&input) {
        let end = start + token.len();
        let first_or_last = start == 0 || end == input.len();
        let mut after = input[end..].chars();
        let label_colon = after.next() == Some(':') && !after.next().is_some_and(char::is_whitespace);

        if !is_manual_case(token) && (first_or_last || !contains_small_word(token)) && !label_colon
        {
            capitalize_first_alphanumeric(token, &mut result);
        } else {
            result.push_str(token);
        }
    }
    result
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ':' | '-' | '\u{2013}' | '\u{2014}')
}

/// Split into `(byte offset, token)` pairs: word runs, and single separators.
fn tokens(input: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut word_start: Option<usize> = None;
    for (i, c) in input.char_indices() {
        if is_separator(c) {
            if let Some(start) = word_start.take() {
                out.push((start, &input[start..i]));
            }
            out.push((i, &input[i..i + c.len_utf8()]));
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    if let Some(start) = word_start {
        out.push((start, &input[start..]));
    }
    out
}

/// A token is manually cased when any character after the first is an ASCII
/// capital, or a `.` after the first character is followed by something.
fn is_manual_case(token: &str) -> bool {
    let chars: Vec<char> = token.chars().collect();
    chars
        .iter()
        .enumerate()
        .skip(1)
        .any(|(i, &c)| c.is_ascii_uppercase() || (c == '.' && i + 1 < chars.len()))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whether a small word occurs in `token` on ASCII word boundaries.
fn contains_small_word(token: &str) -> bool {
    let lower = token.to_ascii_lowercase();
    let mut start = 0;
    // Scan each maximal run of word characters; a small word must be a whole run.
    for (i, c) in lower.char_indices().chain(std::iter::once((lower.len(), ' '))) {
        if !is_word_char(c) {
            if start < i && SMALL_WORDS.contains(&&lower[start..i]) {
                return true;
            }
            start = i + c.len_utf8();
        }
    }
    false
}

fn is_title_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('\u{00C0}'..='\u{00FF}').contains(&c)
}

fn capitalize_first_alphanumeric(token: &str, out: &mut String) {
    match token.char_indices().find(|&(_, c)| is_title_alphanumeric(c)) {
        Some((i, c)) => {
            out.push_str(&token[..i]);
            out.extend(c.to_uppercase());
            out.push_str(&token[i + c.len_utf8()..]);
        }
        None => out.push_str(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word() {
        assert_eq!(title_case("shape"), "Shape");
    }

    #[test]
    fn underscores_become_spaces() {
        assert_eq!(title_case("string_functions"), "String Functions");
    }

    #[test]
    fn leading_digit_stays_lowercase_word() {
        // First alphanumeric is the digit, so the letter after it is untouched
        assert_eq!(title_case("2d_primitives"), "2d Primitives");
        assert_eq!(title_case("motion_2d"), "Motion 2d");
    }

    #[test]
    fn connector_words_stay_lowercase_mid_title() {
        assert_eq!(title_case("lights_and_camera"), "Lights and Camera");
        assert_eq!(title_case("the_shape_of_things"), "The Shape of Things");
    }

    #[test]
    fn connector_word_capitalized_at_edges() {
        assert_eq!(title_case("on"), "On");
        assert_eq!(title_case("what_to_look_for"), "What to Look For");
    }

    #[test]
    fn manual_case_preserved() {
        assert_eq!(title_case("createGraphics"), "createGraphics");
        assert_eq!(title_case("p5.sound"), "p5.sound");
        assert_eq!(title_case("input_PImage"), "Input PImage");
    }

    #[test]
    fn existing_case_never_lowered() {
        assert_eq!(title_case("SVG_export"), "SVG Export");
    }

    #[test]
    fn dashes_split_tokens() {
        assert_eq!(title_case("non-verbal"), "Non-Verbal");
    }

    #[test]
    fn label_colon_suppresses_capitalization() {
        assert_eq!(title_case("key:value"), "key:Value");
        assert_eq!(title_case("note: draft"), "Note: Draft");
    }

    #[test]
    fn latin1_letters_capitalized() {
        assert_eq!(title_case("élan"), "Élan");
    }

    #[test]
    fn leading_punctuation_skipped() {
        assert_eq!(title_case("(beta)_tools"), "(Beta) Tools");
    }

    #[test]
    fn empty_is_empty() {
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn repeated_separators_preserved() {
        assert_eq!(title_case("color__setting"), "Color  Setting");
    }
}
