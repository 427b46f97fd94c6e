use once_cell::sync::Lazy;
use regex::Regex;

// MarkdownV2 characters that must be backslash-escaped in message text.
static SPECIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[_*\[\]()~`>#+\-=|{}.!]").expect("valid escape pattern"));

/// Prefix every MarkdownV2 special character with a backslash. Input is
/// expected to be unescaped text; re-escaping already-escaped text doubles
/// the backslashes.
pub fn escape_markdown_v2(text: &str) -> String {
    SPECIAL.replace_all(text, r"\$0").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_punctuation_in_sentence() {
        assert_eq!(
            escape_markdown_v2("Hello! [test] (ok)."),
            r"Hello\! \[test\] \(ok\)\."
        );
    }

    #[test]
    fn escapes_the_full_special_set() {
        assert_eq!(
            escape_markdown_v2("_*[]()~`>#+-=|{}.!"),
            r"\_\*\[\]\(\)\~\`\>\#\+\-\=\|\{\}\.\!"
        );
    }

    #[test]
    fn leaves_other_characters_untouched() {
        assert_eq!(escape_markdown_v2("plain text 123"), "plain text 123");
    }
}
