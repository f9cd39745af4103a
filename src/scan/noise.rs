use once_cell::sync::Lazy;
use regex::Regex;

// Non-greedy and spanning newlines; first open to first close.
static PHP_BLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<\?php.*?\?>").unwrap());
static STATEMENT_BLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{%.*?%\}").unwrap());
static EXPRESSION_BLOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{\{.*?\}\}").unwrap());

/// Remove server-side code and templating regions from raw markup.
///
/// Strips `<?php ... ?>` blocks, `{% ... %}` statement blocks and
/// `{{ ... }}` expression blocks so class-like substrings inside them
/// cannot corrupt tag and line association. This is a heuristic, not a
/// parser: nested delimiters are not handled.
pub fn strip_noise(content: &str) -> String {
    let cleaned = PHP_BLOCK_RE.replace_all(content, "");
    let cleaned = STATEMENT_BLOCK_RE.replace_all(&cleaned, "");
    EXPRESSION_BLOCK_RE.replace_all(&cleaned, "").into_owned()
}
