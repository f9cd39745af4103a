use std::path::Path;

use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::scan::types::StyleMatch;

// Quote styles are separate alternation arms so a match never mixes them.
static CLASS_ATTR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"class=(?:"([^"]+)"|'([^']+)')"#).unwrap());

static VALID_CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[A-Za-z_][A-Za-z0-9_-]*$").unwrap());

static NOISE_CHAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[$?<>{}()%]").unwrap());

/// Check a candidate token against the class-name grammar.
///
/// A token is valid iff it contains none of the noise characters
/// `$ ? < > { } ( ) %` and matches `^-?[A-Za-z_][A-Za-z0-9_-]*$`. The
/// character screen and the grammar are both applied; together they are the
/// single gate deciding what counts as a real CSS class rather than
/// template or interpolation leakage.
pub fn is_valid_class(token: &str) -> bool {
    !NOISE_CHAR_RE.is_match(token) && VALID_CLASS_RE.is_match(token)
}

/// Extractor for class tokens in cleaned markup text
#[derive(Debug, Default)]
pub struct ClassExtractor;

impl ClassExtractor {
    /// Create a new class extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract every valid, tag-attributed class token from cleaned content.
    ///
    /// Works line by line (1-indexed). Each `class="..."` or `class='...'`
    /// attribute value is split on whitespace; tokens failing the grammar
    /// are silently dropped. A token is only recorded when its enclosing
    /// tag can be bounded on the same physical line — an occurrence with no
    /// `<` before it or no `>` after it yields no records at all.
    pub fn extract(&self, content: &str, file_path: &Path) -> Vec<StyleMatch> {
        let mut matches = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;

            for caps in CLASS_ATTR_RE.captures_iter(line) {
                let attr = match caps.get(0) {
                    Some(m) => m,
                    None => continue,
                };
                if !is_literal_attribute_name(line, attr.start()) {
                    trace!(
                        "Skipping non-literal class attribute on line {} of {}",
                        line_number,
                        file_path.display()
                    );
                    continue;
                }
                let value = match caps.get(1).or_else(|| caps.get(2)) {
                    Some(v) => v.as_str(),
                    None => continue,
                };
                let tag = match enclosing_tag(line, attr.start()) {
                    Some(tag) => tag,
                    None => {
                        trace!(
                            "No tag boundary for class attribute on line {} of {}",
                            line_number,
                            file_path.display()
                        );
                        continue;
                    }
                };

                for token in value.split_whitespace() {
                    let token = token.trim();
                    if token.is_empty() || !is_valid_class(token) {
                        continue;
                    }
                    matches.push(StyleMatch {
                        class_name: token.to_string(),
                        tag: tag.clone(),
                        line: line_number,
                        file_path: file_path.to_path_buf(),
                    });
                }
            }
        }

        debug!(
            "Found {} class tokens in {}",
            matches.len(),
            file_path.display()
        );
        matches
    }
}

/// The attribute name must be exactly `class`: an occurrence preceded by a
/// word character or `-` (e.g. `data-class=`) is not a match.
fn is_literal_attribute_name(line: &str, attr_start: usize) -> bool {
    match line[..attr_start].bytes().last() {
        Some(b) => !(b.is_ascii_alphanumeric() || b == b'_' || b == b'-'),
        None => true,
    }
}

/// Bound the enclosing tag on one physical line: the nearest `<` left of
/// the attribute and the nearest `>` at or right of it, both inclusive.
fn enclosing_tag(line: &str, attr_start: usize) -> Option<String> {
    let tag_start = line[..attr_start].rfind('<')?;
    let tag_end = attr_start + line[attr_start..].find('>')?;
    Some(line[tag_start..=tag_end].trim().to_string())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use test_case::test_case;

    use super::*;

    #[test_case("btn", true; "plain name")]
    #[test_case("-modifier", true; "leading dash")]
    #[test_case("_private", true; "leading underscore")]
    #[test_case("a1-b2_c", true; "digits and separators")]
    #[test_case("1abc", false; "leading digit")]
    #[test_case("$var", false; "dollar sign")]
    #[test_case("%s", false; "format placeholder")]
    #[test_case("a(b)", false; "parentheses")]
    #[test_case("x{y}", false; "braces")]
    #[test_case("a?b", false; "question mark")]
    #[test_case("", false; "empty token")]
    fn class_grammar(token: &str, expected: bool) {
        assert_eq!(is_valid_class(token), expected);
    }

    fn extract(content: &str) -> Vec<StyleMatch> {
        ClassExtractor::new().extract(content, Path::new("test.html"))
    }

    fn names(matches: &[StyleMatch]) -> Vec<&str> {
        matches.iter().map(|m| m.class_name.as_str()).collect()
    }

    #[test]
    fn splits_multi_class_attributes() {
        let matches = extract(r#"<div class="btn primary">"#);
        assert_eq!(names(&matches), ["btn", "primary"]);
        assert_eq!(matches[0].tag, r#"<div class="btn primary">"#);
        assert_eq!(matches[0].line, 1);
        assert_eq!(matches[0].file_path, Path::new("test.html"));
    }

    #[test]
    fn accepts_single_quoted_attributes() {
        let matches = extract("<span class='badge'>x</span>");
        assert_eq!(names(&matches), ["badge"]);
        assert_eq!(matches[0].tag, "<span class='badge'>");
    }

    #[test]
    fn rejects_mixed_quote_styles() {
        assert!(extract(r#"<div class="btn'>"#).is_empty());
    }

    #[test]
    fn keeps_valid_siblings_of_rejected_tokens() {
        let matches = extract(r#"<div class="card $invalid">"#);
        assert_eq!(names(&matches), ["card"]);
        assert_eq!(matches[0].tag, r#"<div class="card $invalid">"#);
    }

    #[test]
    fn duplicate_tokens_produce_duplicate_records() {
        let matches = extract(r#"<p class="a b a">"#);
        assert_eq!(names(&matches), ["a", "b", "a"]);
    }

    #[test]
    fn unterminated_tag_produces_no_records() {
        assert!(extract(r#"<div class="btn""#).is_empty());
    }

    #[test]
    fn missing_open_bracket_produces_no_records() {
        assert!(extract(r#"div class="btn">"#).is_empty());
    }

    #[test]
    fn ignores_attribute_names_containing_class_as_substring() {
        assert!(extract(r#"<div data-class="btn">"#).is_empty());
        assert!(extract(r#"<div xclass="btn">"#).is_empty());
    }

    #[test]
    fn handles_several_attributes_on_one_line() {
        let matches = extract(r#"<a class="x"></a><b class="y z"></b>"#);
        assert_eq!(names(&matches), ["x", "y", "z"]);
        assert_eq!(matches[0].tag, r#"<a class="x">"#);
        assert_eq!(matches[1].tag, r#"<b class="y z">"#);
    }

    #[test]
    fn line_numbers_are_one_indexed() {
        let matches = extract("<html>\n<body>\n<div class=\"card\">\n");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].line, 3);
    }

    #[test]
    fn empty_attribute_values_yield_nothing() {
        assert!(extract(r#"<div class="">"#).is_empty());
        assert!(extract(r#"<div class="   ">"#).is_empty());
    }
}
