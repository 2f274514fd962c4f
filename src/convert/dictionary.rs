use std::collections::{HashMap, HashSet};

use crate::error::LexError;
use crate::formats::Catalog;
use crate::phonemes::PhonemeId;

/// Source-spelling to destination-spelling map for one format pair.
///
/// Besides the map itself this records which destination spellings are
/// consonants, which are stress marks, and the reduced vowel (if any) that
/// the pair inserts before a syllabic n or l.
#[derive(Debug, Clone)]
pub struct Dictionary {
    source: String,
    dest: String,
    map: HashMap<String, String>,
    /// Longest key, in chars.
    max_key_len: usize,
    consonants: HashSet<String>,
    implicit_vowel: Option<String>,
    nasal_liquid: HashSet<String>,
    stress_marks: HashSet<String>,
    syllable_separator: Option<String>,
}

impl Dictionary {
    /// Connect `source` to `dest` through the shared phoneme registry.
    ///
    /// A source phoneme the destination lacks falls back to its base phoneme.
    /// If the base is missing too the spelling is left out of the map, so
    /// scanning will treat it as an unsupported character.
    pub fn build(catalog: &Catalog, source: &str, dest: &str) -> Result<Self, LexError> {
        let src = catalog.format(source)?;
        let dst = catalog.format(dest)?;
        let registry = catalog.registry();
        let p = catalog.phonemes();

        let mut map = HashMap::new();
        let mut consonants = HashSet::new();
        let mut implicit_vowel: Option<String> = None;

        for (spelling, id) in src.read_entries() {
            if spelling.is_empty() {
                continue;
            }
            let base = registry.base(id);
            let Some(out) = dst.spelling(id).or_else(|| dst.spelling(base)) else {
                log::debug!(
                    "No {dest} spelling for {} ({source} {spelling:?})",
                    registry.name(id)
                );
                continue;
            };

            if registry.is_consonant(id) {
                consonants.extend(out.split_whitespace().map(str::to_string));
            }
            if base == p.e_as_in_herd {
                // prefer the exact phoneme over one of its variants
                if implicit_vowel.is_none() || id == base {
                    implicit_vowel = Some(out.to_string());
                }
            }
            map.insert(spelling.to_string(), out.to_string());
        }

        let max_key_len = map.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        let exact = |id: PhonemeId| dst.spelling(id).filter(|s| !s.is_empty());
        let nasal_liquid = [p.n, p.l]
            .into_iter()
            .filter_map(exact)
            .map(str::to_string)
            .collect();
        let stress_marks = [p.primary_stress, p.secondary_stress, p.syllable_separator]
            .into_iter()
            .filter_map(exact)
            .map(str::to_string)
            .collect();
        let syllable_separator = exact(p.syllable_separator).map(str::to_string);

        log::debug!(
            "Built {source} -> {dest} dictionary with {} entries",
            map.len()
        );
        Ok(Self {
            source: source.to_string(),
            dest: dest.to_string(),
            map,
            max_key_len,
            consonants,
            implicit_vowel,
            nasal_liquid,
            stress_marks,
            syllable_separator,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn dest(&self) -> &str {
        &self.dest
    }

    pub fn is_for(&self, source: &str, dest: &str) -> bool {
        self.source == source && self.dest == dest
    }

    pub fn get(&self, spelling: &str) -> Option<&str> {
        self.map.get(spelling).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The longest key that prefixes `text`, as its byte length and value.
    pub fn longest_match(&self, text: &str) -> Option<(usize, &str)> {
        let ends: Vec<usize> = text
            .char_indices()
            .map(|(i, ch)| i + ch.len_utf8())
            .take(self.max_key_len)
            .collect();
        ends.into_iter()
            .rev()
            .find_map(|end| self.get(&text[..end]).map(|out| (end, out)))
    }

    /// True if every whitespace-separated part of `token` is a destination consonant.
    pub fn is_consonant(&self, token: &str) -> bool {
        let mut parts = token.split_whitespace().peekable();
        parts.peek().is_some() && parts.all(|part| self.consonants.contains(part))
    }

    pub fn is_stress_mark(&self, token: &str) -> bool {
        self.stress_marks.contains(token)
    }

    pub fn is_nasal_or_liquid(&self, token: &str) -> bool {
        self.nasal_liquid.contains(token)
    }

    pub fn implicit_vowel(&self) -> Option<&str> {
        self.implicit_vowel.as_deref()
    }

    pub fn syllable_separator(&self) -> Option<&str> {
        self.syllable_separator.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_source_spellings_to_destination_spellings() {
        let catalog = Catalog::standard().unwrap();
        let dict = Dictionary::build(&catalog, "festival", "espeak").unwrap();
        assert_eq!(dict.get("ou"), Some("oU"));
        assert_eq!(dict.get("1"), Some("'"));
        assert_eq!(dict.get("@@"), Some("3:"));
        assert!(dict.is_for("festival", "espeak"));
        assert!(!dict.is_for("espeak", "festival"));
    }

    #[test]
    fn variants_fall_back_to_their_base() {
        let catalog = Catalog::standard().unwrap();
        // espeak "A" is a variant of a_as_in_ah, which festival only has as "aa"
        let dict = Dictionary::build(&catalog, "espeak", "festival").unwrap();
        assert_eq!(dict.get("A"), Some("aa"));
    }

    #[test]
    fn write_only_spellings_are_not_keys() {
        let catalog = Catalog::standard().unwrap();
        // cmu also writes ar_as_in_year and a_as_in_air as "ER", but reads it as e_as_in_herd
        let dict = Dictionary::build(&catalog, "cmu", "festival").unwrap();
        assert_eq!(dict.get("ER"), Some("@@"));
        assert!(dict.get("B").is_none());
        assert_eq!(dict.get("B "), Some("b"));
    }

    #[test]
    fn records_consonants_and_stress_marks() {
        let catalog = Catalog::standard().unwrap();
        let dict = Dictionary::build(&catalog, "festival", "acapela-uk").unwrap();
        assert!(dict.is_consonant("t S"));
        assert!(dict.is_consonant("t"));
        assert!(!dict.is_consonant("e @"));
        assert!(!dict.is_consonant(""));

        let dict = Dictionary::build(&catalog, "festival", "espeak").unwrap();
        assert!(dict.is_stress_mark("'"));
        assert!(dict.is_stress_mark(","));
        assert!(dict.is_stress_mark("%"));
        assert_eq!(dict.syllable_separator(), Some("%"));
        assert!(dict.is_nasal_or_liquid("n"));
        assert!(dict.is_nasal_or_liquid("l"));
        assert_eq!(dict.implicit_vowel(), Some("3:"));
    }

    #[test]
    fn implicit_vowel_needs_a_source_spelling() {
        let catalog = Catalog::standard().unwrap();
        // kana-approx reads nothing as e_as_in_herd
        let dict = Dictionary::build(&catalog, "kana-approx", "festival").unwrap();
        assert_eq!(dict.implicit_vowel(), None);
    }

    #[test]
    fn longest_match_respects_char_boundaries() {
        let catalog = Catalog::standard().unwrap();
        let dict = Dictionary::build(&catalog, "unicode-ipa", "festival").unwrap();
        assert_eq!(dict.longest_match("a\u{28a}x"), Some(("a\u{28a}".len(), "au")));
        assert_eq!(dict.longest_match("\u{26a}\u{259}"), Some(("\u{26a}\u{259}".len(), "i@")));
        assert_eq!(dict.longest_match("\u{4e2d}"), None);
    }

    #[test]
    fn unknown_formats_are_rejected() {
        let catalog = Catalog::standard().unwrap();
        assert!(matches!(
            Dictionary::build(&catalog, "festival", "nope"),
            Err(LexError::UnknownFormat(name)) if name == "nope"
        ));
    }
}
