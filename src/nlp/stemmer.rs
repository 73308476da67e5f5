//! Affix stemming
//!
//! Bahasa Indonesia is morphologically regular enough that a rule-based
//! affix stripper merges most word variants (`membaca`, `dibaca`, `bacaan`
//! all reduce to `baca`). Without a root-word dictionary every rule is
//! guarded by a minimum root length instead.

/// A word stemmer for one language
pub trait WordStemmer: Send + Sync {
    /// Reduce a lowercase word to its stem
    fn stem(&self, word: &str) -> String;

    /// Human-readable stemmer name
    fn name(&self) -> &'static str;
}

/// Roots shorter than this are never produced by stripping an affix
const MIN_ROOT_LEN: usize = 4;

const PARTICLES: &[&str] = &["lah", "kah", "tah", "pun"];
const POSSESSIVES: &[&str] = &["nya", "ku", "mu"];
const DERIVATIONAL_SUFFIXES: &[&str] = &["kan", "an", "i"];

/// Rule-based Indonesian stemmer (particles, possessives, one prefix layer,
/// derivational suffixes)
#[derive(Debug, Clone, Copy, Default)]
pub struct IndonesianStemmer;

impl IndonesianStemmer {
    /// Create a new stemmer
    pub fn new() -> Self {
        Self
    }

    fn strip_suffix<'a>(word: &'a str, suffixes: &[&str]) -> &'a str {
        for suffix in suffixes {
            if let Some(root) = word.strip_suffix(suffix) {
                if root.len() >= MIN_ROOT_LEN {
                    return root;
                }
            }
        }
        word
    }

    /// `-i` is only taken after a consonant; roots such as `pakai` end in it.
    fn strip_derivational(word: &str) -> &str {
        for suffix in DERIVATIONAL_SUFFIXES {
            let Some(root) = word.strip_suffix(suffix) else { continue };
            if root.len() < MIN_ROOT_LEN {
                continue;
            }
            if *suffix == "i" && root.ends_with(['a', 'e', 'i', 'o', 'u']) {
                continue;
            }
            return root;
        }
        word
    }

    /// Remove one derivational prefix, restoring the elided initial
    /// consonant where the prefix assimilated it (`menulis` -> `tulis`).
    fn strip_prefix(word: &str) -> String {
        let candidate = Self::prefix_candidate(word);
        match candidate {
            Some(root) if root.len() >= MIN_ROOT_LEN => root,
            _ => word.to_string(),
        }
    }

    fn prefix_candidate(word: &str) -> Option<String> {
        let after = |prefix: &str| word.strip_prefix(prefix);
        let starts_vowel = |s: &str| s.starts_with(['a', 'e', 'i', 'o', 'u']);

        // Compound prefixes first so `memper-` is not read as `mem-`.
        for compound in ["memper", "diper"] {
            if let Some(rest) = after(compound) {
                return Some(rest.to_string());
            }
        }

        for nasal in ["me", "pe"] {
            let Some(rest) = after(nasal) else { continue };

            if let Some(tail) = rest.strip_prefix("ng") {
                // meng-/peng- before a vowel or g, h, k keeps the root as is
                return Some(tail.to_string());
            }
            if let Some(tail) = rest.strip_prefix("ny") {
                if starts_vowel(tail) {
                    return Some(format!("s{}", tail));
                }
                return Some(tail.to_string());
            }
            if let Some(tail) = rest.strip_prefix('m') {
                if starts_vowel(tail) {
                    return Some(format!("p{}", tail));
                }
                if tail.starts_with(['b', 'f', 'v', 'p']) {
                    return Some(tail.to_string());
                }
            }
            if let Some(tail) = rest.strip_prefix('n') {
                if starts_vowel(tail) {
                    return Some(format!("t{}", tail));
                }
                if tail.starts_with(['c', 'd', 'j', 'z', 't', 's']) {
                    return Some(tail.to_string());
                }
            }
            if nasal == "pe" {
                if let Some(tail) = rest.strip_prefix('r') {
                    return Some(tail.to_string());
                }
            }
            if rest.starts_with(['l', 'm', 'n', 'r', 'w', 'y']) {
                return Some(rest.to_string());
            }
            if nasal == "pe" && !rest.is_empty() && !starts_vowel(rest) {
                return Some(rest.to_string());
            }
        }

        if let Some(rest) = after("ber") {
            return Some(rest.to_string());
        }
        if let Some(rest) = after("be") {
            // bekerja -> kerja
            if rest.starts_with('k') && rest.get(1..3) == Some("er") {
                return Some(rest.to_string());
            }
        }
        if let Some(rest) = after("ter") {
            return Some(rest.to_string());
        }
        for simple in ["di", "ke", "se"] {
            if let Some(rest) = after(simple) {
                return Some(rest.to_string());
            }
        }

        None
    }
}

impl WordStemmer for IndonesianStemmer {
    fn stem(&self, word: &str) -> String {
        if !word.is_ascii() || word.len() <= MIN_ROOT_LEN {
            return word.to_string();
        }

        let word = Self::strip_suffix(word, PARTICLES);
        let word = Self::strip_suffix(word, POSSESSIVES);
        let without_prefix = Self::strip_prefix(word);
        Self::strip_derivational(&without_prefix).to_string()
    }

    fn name(&self) -> &'static str {
        "indonesian-affix"
    }
}
