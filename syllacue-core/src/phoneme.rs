//! Phoneme tokens and input normalization

/// A transcription as handed over by a caller: either one
/// whitespace-delimited string (`"B AE1 T"`) or an explicit token list.
///
/// The engine only ever sees the canonical token list produced by
/// [`PhonemeInput::into_tokens`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhonemeInput {
    /// Whitespace-delimited transcription
    Text(String),
    /// Pre-split tokens
    Tokens(Vec<String>),
}

impl PhonemeInput {
    /// Create input from a whitespace-delimited transcription
    pub fn from_text(text: impl Into<String>) -> Self {
        PhonemeInput::Text(text.into())
    }

    /// Create input from an explicit token list
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PhonemeInput::Tokens(tokens.into_iter().map(Into::into).collect())
    }

    /// Canonical token list: trimmed, empty tokens dropped
    pub fn into_tokens(self) -> Vec<String> {
        match self {
            PhonemeInput::Text(text) => text.split_whitespace().map(str::to_string).collect(),
            PhonemeInput::Tokens(tokens) => tokens
                .into_iter()
                .filter_map(|t| {
                    let trimmed = t.trim();
                    if trimmed.is_empty() {
                        None
                    } else if trimmed.len() == t.len() {
                        Some(t)
                    } else {
                        Some(trimmed.to_string())
                    }
                })
                .collect(),
        }
    }
}

impl From<&str> for PhonemeInput {
    fn from(text: &str) -> Self {
        PhonemeInput::from_text(text)
    }
}

impl From<String> for PhonemeInput {
    fn from(text: String) -> Self {
        PhonemeInput::Text(text)
    }
}

impl From<Vec<String>> for PhonemeInput {
    fn from(tokens: Vec<String>) -> Self {
        PhonemeInput::Tokens(tokens)
    }
}

impl From<&[&str]> for PhonemeInput {
    fn from(tokens: &[&str]) -> Self {
        PhonemeInput::from_tokens(tokens.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for PhonemeInput {
    fn from(tokens: [&str; N]) -> Self {
        PhonemeInput::from_tokens(tokens)
    }
}

/// A token split into its bare symbol and optional stress digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phoneme<'a> {
    pub symbol: &'a str,
    pub stress: Option<u8>,
}

impl<'a> Phoneme<'a> {
    /// Strip one trailing ASCII digit off `token` and record it as stress
    pub fn parse(token: &'a str) -> Self {
        match token.as_bytes().last() {
            Some(&b) if b.is_ascii_digit() => Phoneme {
                symbol: &token[..token.len() - 1],
                stress: Some(b - b'0'),
            },
            _ => Phoneme {
                symbol: token,
                stress: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_tokens_agree() {
        let text = PhonemeInput::from("B AE1 T").into_tokens();
        let tokens = PhonemeInput::from(["B", "AE1", "T"]).into_tokens();
        assert_eq!(text, tokens);
        assert_eq!(text, vec!["B", "AE1", "T"]);
    }

    #[test]
    fn test_tokens_trimmed_and_empties_dropped() {
        let tokens = PhonemeInput::from_tokens([" B", "", "AE1 ", "  "]).into_tokens();
        assert_eq!(tokens, vec!["B", "AE1"]);
    }

    #[test]
    fn test_text_irregular_whitespace() {
        let tokens = PhonemeInput::from("  S\tT  R\nAA1 D ").into_tokens();
        assert_eq!(tokens, vec!["S", "T", "R", "AA1", "D"]);
    }

    #[test]
    fn test_parse_stress() {
        assert_eq!(
            Phoneme::parse("AE1"),
            Phoneme {
                symbol: "AE",
                stress: Some(1)
            }
        );
        assert_eq!(
            Phoneme::parse("T"),
            Phoneme {
                symbol: "T",
                stress: None
            }
        );
        assert_eq!(Phoneme::parse("AH0").stress, Some(0));
        assert_eq!(Phoneme::parse(".").symbol, ".");
    }

    #[test]
    fn test_parse_only_strips_one_digit() {
        let phoneme = Phoneme::parse("X12");
        assert_eq!(phoneme.symbol, "X1");
        assert_eq!(phoneme.stress, Some(2));
    }
}
