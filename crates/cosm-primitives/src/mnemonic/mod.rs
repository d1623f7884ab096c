//! BIP-39 mnemonic phrases.
//!
//! Thin wrapper over the `bip39` crate restricted to the English wordlist.
//! Phrases are normalized (trimmed, lowercased, single-spaced) before
//! validation so that user-pasted input with stray whitespace still parses.

use ::bip39::{Language, MnemonicType, Seed};
use zeroize::Zeroize;

use crate::PrimitivesError;

/// A validated English BIP-39 mnemonic.
pub struct Mnemonic {
    inner: ::bip39::Mnemonic,
}

impl Mnemonic {
    /// Parse and validate a mnemonic phrase.
    ///
    /// # Arguments
    /// * `phrase` - Space separated English words (12, 15, 18, 21 or 24).
    ///
    /// # Returns
    /// `Ok(Mnemonic)` if every word is in the wordlist and the checksum matches.
    pub fn parse(phrase: &str) -> Result<Self, PrimitivesError> {
        let mut normalized = normalize(phrase);
        let result = ::bip39::Mnemonic::from_phrase(&normalized, Language::English);
        normalized.zeroize();
        let inner = result.map_err(|e| PrimitivesError::InvalidMnemonic(e.to_string()))?;
        Ok(Mnemonic { inner })
    }

    /// Generate a fresh random mnemonic with the given word count.
    pub fn generate(word_count: usize) -> Result<Self, PrimitivesError> {
        let kind = MnemonicType::for_word_count(word_count)
            .map_err(|e| PrimitivesError::InvalidMnemonic(e.to_string()))?;
        Ok(Mnemonic {
            inner: ::bip39::Mnemonic::new(kind, Language::English),
        })
    }

    /// The normalized phrase.
    pub fn phrase(&self) -> &str {
        self.inner.phrase()
    }

    /// Number of words in the phrase.
    pub fn word_count(&self) -> usize {
        self.inner.phrase().split(' ').count()
    }

    /// Derive the 64-byte BIP-39 seed (PBKDF2-HMAC-SHA512, 2048 rounds).
    ///
    /// # Arguments
    /// * `password` - Optional BIP-39 passphrase; empty string for none.
    pub fn to_seed(&self, password: &str) -> [u8; 64] {
        let seed = Seed::new(&self.inner, password);
        let mut out = [0u8; 64];
        out.copy_from_slice(seed.as_bytes());
        out
    }
}

impl std::fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mnemonic({} words)", self.word_count())
    }
}

fn normalize(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAUCET: &str = "economy stock theory fatal elder harbor betray wasp final emotion task crumble siren bottom lizard educate guess current outdoor pair theory focus wife stone";

    #[test]
    fn test_parse_normalizes_whitespace_and_case() {
        let messy = format!("  {}  ", FAUCET.to_uppercase().replace(' ', "\n  "));
        let m = Mnemonic::parse(&messy).unwrap();
        assert_eq!(m.phrase(), FAUCET);
        assert_eq!(m.word_count(), 24);
    }

    #[test]
    fn test_parse_rejects_bad_checksum() {
        let bad = FAUCET.replace("stone", "abandon");
        assert!(matches!(
            Mnemonic::parse(&bad),
            Err(PrimitivesError::InvalidMnemonic(_))
        ));
        assert!(Mnemonic::parse("not a mnemonic").is_err());
    }

    #[test]
    fn test_generate() {
        let m = Mnemonic::generate(12).unwrap();
        assert_eq!(m.word_count(), 12);
        let reparsed = Mnemonic::parse(m.phrase()).unwrap();
        assert_eq!(reparsed.to_seed(""), m.to_seed(""));
        assert!(Mnemonic::generate(13).is_err());
    }

    #[test]
    fn test_debug_hides_words() {
        let m = Mnemonic::parse(FAUCET).unwrap();
        assert_eq!(format!("{:?}", m), "Mnemonic(24 words)");
    }
}
