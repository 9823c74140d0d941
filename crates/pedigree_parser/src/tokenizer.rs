//! Line tokenization.
//!
//! Splits one physical line into tokens. Word characters and the
//! punctuation used by names and pointers (`.`, `*`, `/`, `@`) are kept;
//! everything else is a separator, and runs of separators collapse.

/// Returns true for characters that belong to a token.
#[must_use]
pub fn is_token_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '_' | '.' | '*' | '/' | '@')
}

/// Tokenizes level-tagged lines.
pub struct LineTokenizer;

impl LineTokenizer {
    /// Tokenizes a single line (without its trailing newline).
    ///
    /// Tokens borrow from the input. An empty or separator-only line yields
    /// no tokens.
    #[must_use]
    pub fn tokenize(line: &str) -> Vec<&str> {
        line.split(|ch: char| !is_token_char(ch))
            .filter(|token| !token.is_empty())
            .collect()
    }
}
