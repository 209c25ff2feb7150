use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default query preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC), then case folding
        let text: String = text.nfkc().collect::<String>().to_lowercase();

        // Collapse inner whitespace/newlines to single spaces
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Comparable form of a headword: lowercase letters and digits, single spaces,
/// hyphens only between two letters/digits. `man*age` and `Manage` both give `manage`.
pub fn normalize_headword(text: &str) -> String {
    let chars: Vec<char> = text.nfkc().flat_map(char::to_lowercase).collect();
    let mut out = String::with_capacity(chars.len());
    let mut pending_space = false;

    for (i, &c) in chars.iter().enumerate() {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else if c == '-' {
            let after_word = i
                .checked_sub(1)
                .and_then(|p| chars.get(p))
                .is_some_and(|p| p.is_alphanumeric());
            let before_word = chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());
            if after_word && before_word {
                out.push('-');
            }
        } else if c.is_whitespace() {
            pending_space = true;
        }
    }

    out
}
