use std::sync::LazyLock;

use regex::Regex;

/// `{sx|word||}`, `{a_link|word}` and friends: keep the displayed word
static LINK_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?:sx|a_link|d_link|i_link|et_link|mat|dxt)\|([^|}]*)[^}]*\}").unwrap());

/// Any other `{...}` formatting token
static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^}]*\}").unwrap());

/// Remove bracketed gloss markup from upstream text.
/// `a {bc}sense{/bc} of urgency` becomes `a sense of urgency`.
pub fn strip_markup(text: &str) -> String {
    let text = LINK_TOKEN.replace_all(text, "$1");
    let text = TOKEN.replace_all(&text, "");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
