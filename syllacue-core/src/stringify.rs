//! Flatten syllables back into text

use crate::syllable::Syllable;

/// Render one syllable: onset, nucleus with stress digit, coda, no separator.
///
/// A degenerate (vowel-less) container renders as its consonants only.
pub fn render_syllable(syllable: &Syllable) -> String {
    let mut out = String::with_capacity(syllable.len() * 2 + 1);
    for symbol in &syllable.onset {
        out.push_str(symbol);
    }
    if let Some(nucleus) = syllable.stressed_nucleus() {
        out.push_str(&nucleus);
    }
    for symbol in &syllable.coda {
        out.push_str(symbol);
    }
    out
}

/// Join rendered syllables with a single space (`"AH0 BAW1T"`)
pub fn stringify(syllables: &[Syllable]) -> String {
    syllables
        .iter()
        .map(render_syllable)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::get_profile;
    use crate::syllabifier::syllabify;

    fn run(transcription: &str) -> String {
        let profile = get_profile("en").unwrap();
        stringify(&syllabify(&profile, transcription).unwrap())
    }

    #[test]
    fn test_single_syllable() {
        assert_eq!(run("B AE1 T"), "BAE1T");
    }

    #[test]
    fn test_multi_syllable() {
        assert_eq!(run("AH0 B AW1 T"), "AH0 BAW1T");
        assert_eq!(run("EH1 K S T R AH0"), "EH1K STRAH0");
    }

    #[test]
    fn test_unstressed_nucleus_has_no_digit() {
        assert_eq!(run("B AE T"), "BAET");
    }

    #[test]
    fn test_degenerate_renders_consonants() {
        assert_eq!(run("HH M"), "HHM");
    }

    #[test]
    fn test_empty() {
        assert_eq!(stringify(&[]), "");
    }
}
