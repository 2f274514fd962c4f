use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::rewrite::RewritePasses;
use super::settings::FormatSettings;
use crate::error::LexError;
use crate::phonemes::{PhonemeId, PhonemeRegistry};

/// Which conversions an entry takes part in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Spelling is both recognised and produced.
    #[default]
    Both,
    /// Spelling is recognised when converting out of the format but never produced.
    ReadOnly,
    /// Spelling is produced when converting into the format but never recognised.
    WriteOnly,
}

impl Direction {
    fn reads(self) -> bool {
        matches!(self, Direction::Both | Direction::ReadOnly)
    }

    fn writes(self) -> bool {
        matches!(self, Direction::Both | Direction::WriteOnly)
    }
}

/// One spelling of one phoneme in a format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub spelling: String,
    pub phoneme: PhonemeId,
    pub direction: Direction,
}

impl Entry {
    pub fn both(spelling: impl Into<String>, phoneme: PhonemeId) -> Self {
        Self::new(spelling, phoneme, Direction::Both)
    }

    pub fn read_only(spelling: impl Into<String>, phoneme: PhonemeId) -> Self {
        Self::new(spelling, phoneme, Direction::ReadOnly)
    }

    pub fn write_only(phoneme: PhonemeId, spelling: impl Into<String>) -> Self {
        Self::new(spelling, phoneme, Direction::WriteOnly)
    }

    fn new(spelling: impl Into<String>, phoneme: PhonemeId, direction: Direction) -> Self {
        Self {
            spelling: spelling.into(),
            phoneme,
            direction,
        }
    }
}

/// An unvalidated format declaration.
#[derive(Debug, Clone, Default)]
pub struct FormatDecl {
    pub description: String,
    pub entries: Vec<Entry>,
    pub settings: FormatSettings,
}

/// A validated, immutable spelling table for one notation.
#[derive(Debug, Clone)]
pub struct FormatTable {
    name: String,
    description: String,
    to_phoneme: HashMap<String, PhonemeId>,
    to_spelling: HashMap<PhonemeId, String>,
    settings: FormatSettings,
    cleanup: RewritePasses,
    cvt_out: RewritePasses,
}

type Maps = (HashMap<String, PhonemeId>, HashMap<PhonemeId, String>);

impl FormatTable {
    /// Validate a declaration against `registry`.
    ///
    /// Duplicate keys and malformed rewrite rules are errors. Required
    /// phonemes the table cannot produce are logged as a warning.
    pub fn new(
        name: &str,
        decl: FormatDecl,
        registry: &PhonemeRegistry,
    ) -> Result<Self, LexError> {
        let (to_phoneme, to_spelling) = insert_entries(name, &decl.entries, registry)?;
        let table = Self::assemble(name, decl.description, to_phoneme, to_spelling, decl.settings)?;

        let missing = table.missing_phonemes(registry);
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|&id| registry.name(id)).collect();
            log::warn!(
                "Some non-optional vowels/consonants are missing from {:?}. The following are missing: {}",
                table.description,
                names.join(", ")
            );
        }

        Ok(table)
    }

    /// Derive a table from `base`: delta entries replace the base's entries
    /// for the same key, settings merge as described in [`FormatSettings::merged`].
    ///
    /// The delta is only checked for duplicates within itself, and no
    /// completeness warning is issued for it.
    pub fn variant_of(
        base: &FormatTable,
        name: &str,
        decl: FormatDecl,
        registry: &PhonemeRegistry,
    ) -> Result<Self, LexError> {
        let (read, write) = insert_entries(name, &decl.entries, registry)?;

        let mut to_phoneme = base.to_phoneme.clone();
        to_phoneme.extend(read);
        let mut to_spelling = base.to_spelling.clone();
        to_spelling.extend(write);

        let settings = base.settings.merged(&decl.settings);
        log::debug!("Derived format '{name}' from '{}'", base.name);
        Self::assemble(name, decl.description, to_phoneme, to_spelling, settings)
    }

    fn assemble(
        name: &str,
        description: String,
        to_phoneme: HashMap<String, PhonemeId>,
        to_spelling: HashMap<PhonemeId, String>,
        settings: FormatSettings,
    ) -> Result<Self, LexError> {
        let cleanup = RewritePasses::compile(name, settings.cleanup_regexps())?;
        let cvt_out = RewritePasses::compile(name, settings.cvt_out_regexps())?;
        Ok(Self {
            name: name.to_string(),
            description,
            to_phoneme,
            to_spelling,
            settings,
            cleanup,
            cvt_out,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn settings(&self) -> &FormatSettings {
        &self.settings
    }

    /// Phoneme recognised for `spelling` when reading this format.
    pub fn phoneme(&self, spelling: &str) -> Option<PhonemeId> {
        self.to_phoneme.get(spelling).copied()
    }

    /// Spelling produced for exactly `id` when writing this format.
    pub fn spelling(&self, id: PhonemeId) -> Option<&str> {
        self.to_spelling.get(&id).map(String::as_str)
    }

    /// All `(spelling, phoneme)` pairs recognised when reading this format.
    pub fn read_entries(&self) -> impl Iterator<Item = (&str, PhonemeId)> {
        self.to_phoneme.iter().map(|(s, &id)| (s.as_str(), id))
    }

    /// Every phoneme this format reads or writes.
    pub fn phonemes(&self) -> impl Iterator<Item = PhonemeId> + '_ {
        self.to_phoneme
            .values()
            .chain(self.to_spelling.keys())
            .copied()
    }

    /// Rewrites applied to output in this format.
    pub fn cleanup(&self) -> &RewritePasses {
        &self.cleanup
    }

    /// Rewrites applied to input in this format before scanning.
    pub fn cvt_out(&self) -> &RewritePasses {
        &self.cvt_out
    }

    /// Required phonemes this table has no spelling for, in registry order.
    pub fn missing_phonemes(&self, registry: &PhonemeRegistry) -> Vec<PhonemeId> {
        registry
            .required()
            .filter(|id| !self.to_spelling.contains_key(id))
            .collect()
    }

    /// Wrap one converted word for running text using `inline_format`.
    pub fn markup_inline_word(&self, pronunciation: &str) -> String {
        self.settings
            .inline_format()
            .replacen("%s", pronunciation, 1)
    }

    pub fn inline_header(&self) -> Option<&str> {
        self.settings.inline_header()
    }
}

fn insert_entries(
    format: &str,
    entries: &[Entry],
    registry: &PhonemeRegistry,
) -> Result<Maps, LexError> {
    let mut to_phoneme = HashMap::new();
    let mut to_spelling = HashMap::new();
    let mut dup_spellings: HashSet<&str> = HashSet::new();
    let mut dup_ids: HashSet<PhonemeId> = HashSet::new();

    for entry in entries {
        if entry.direction.reads()
            && to_phoneme
                .insert(entry.spelling.clone(), entry.phoneme)
                .is_some()
        {
            dup_spellings.insert(entry.spelling.as_str());
        }
        if entry.direction.writes()
            && to_spelling
                .insert(entry.phoneme, entry.spelling.clone())
                .is_some()
        {
            dup_ids.insert(entry.phoneme);
        }
    }

    if dup_spellings.is_empty() && dup_ids.is_empty() {
        return Ok((to_phoneme, to_spelling));
    }

    let mut spellings: Vec<String> = dup_spellings.iter().map(|s| format!("{s:?}")).collect();
    spellings.sort();
    let mut ids: Vec<PhonemeId> = dup_ids.into_iter().collect();
    ids.sort();
    let keys: Vec<String> = spellings
        .into_iter()
        .chain(
            ids.into_iter()
                .map(|id| format!("{} (={})", registry.label(id), registry.name(id))),
        )
        .collect();

    Err(LexError::DuplicateKeys {
        format: format.to_string(),
        keys: keys.join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::settings::{rules, FormatSettingsBuilder};

    fn registry() -> (PhonemeRegistry, [PhonemeId; 4]) {
        let mut reg = PhonemeRegistry::new();
        let a = reg.new_vowel("a").unwrap();
        let a1 = reg.new_variant("a1").unwrap();
        let k = reg.new_consonant("k").unwrap();
        let opt = reg.new_optional_vowel("opt").unwrap();
        (reg, [a, a1, k, opt])
    }

    #[test]
    fn bidirectional_entries_register_both_ways() {
        let (reg, [a, _, k, _]) = registry();
        let decl = FormatDecl {
            description: "test".into(),
            entries: vec![
                Entry::both("aa", a),
                Entry::read_only("A", a),
                Entry::both("k", k),
                Entry::write_only(k, "kk"),
            ],
            ..Default::default()
        };
        // the write-only k collides with the bidirectional one
        assert!(FormatTable::new("t", decl, &reg).is_err());

        let decl = FormatDecl {
            description: "test".into(),
            entries: vec![Entry::both("aa", a), Entry::read_only("A", a), Entry::both("k", k)],
            ..Default::default()
        };
        let table = FormatTable::new("t", decl, &reg).unwrap();
        assert_eq!(table.phoneme("A"), Some(a));
        assert_eq!(table.phoneme("aa"), Some(a));
        assert_eq!(table.spelling(a), Some("aa"));
        assert_eq!(table.read_entries().count(), 3);
    }

    #[test]
    fn duplicate_keys_are_named_in_the_error() {
        let (reg, [a, a1, k, _]) = registry();
        let decl = FormatDecl {
            description: "dups".into(),
            entries: vec![Entry::both("x", a), Entry::both("x", a1), Entry::both("k", k)],
            ..Default::default()
        };
        match FormatTable::new("dups", decl, &reg) {
            Err(LexError::DuplicateKeys { format, keys }) => {
                assert_eq!(format, "dups");
                assert!(keys.contains("\"x\""), "{keys}");
            }
            other => panic!("expected duplicate key error, got {other:?}"),
        }
    }

    #[test]
    fn one_directional_entries_suppress_duplicates() {
        let (reg, [a, a1, k, _]) = registry();
        let decl = FormatDecl {
            description: "ok".into(),
            entries: vec![
                Entry::both("x", a),
                Entry::read_only("y", a),
                Entry::write_only(a1, "x"),
                Entry::both("k", k),
            ],
            ..Default::default()
        };
        let table = FormatTable::new("ok", decl, &reg).unwrap();
        assert_eq!(table.spelling(a1), Some("x"));
        assert_eq!(table.phoneme("x"), Some(a));
    }

    #[test]
    fn missing_required_phonemes_are_reported_not_fatal() {
        let (reg, [a, _, k, _]) = registry();
        let decl = FormatDecl {
            description: "partial".into(),
            entries: vec![Entry::both("a", a), Entry::read_only("k", k)],
            ..Default::default()
        };
        let table = FormatTable::new("partial", decl, &reg).unwrap();
        // optional vowels never count as missing; read-only spellings do not produce k
        assert_eq!(table.missing_phonemes(&reg), vec![k]);
    }

    #[test]
    fn variant_table_overrides_entries_and_appends_rules() {
        let (reg, [a, a1, k, _]) = registry();
        let base = FormatTable::new(
            "base",
            FormatDecl {
                description: "base".into(),
                entries: vec![Entry::both("a", a), Entry::both("k", k)],
                settings: FormatSettingsBuilder::default()
                    .space_separates_words_not_phonemes(true)
                    .cleanup_regexps(rules(&[("a", "b")]))
                    .build()
                    .unwrap(),
            },
            &reg,
        )
        .unwrap();

        let derived = FormatTable::variant_of(
            &base,
            "derived",
            FormatDecl {
                description: "derived".into(),
                entries: vec![Entry::both("q", k), Entry::both("a1", a1)],
                settings: FormatSettingsBuilder::default()
                    .stress_comes_before_vowel(true)
                    .cleanup_regexps(rules(&[("b", "c")]))
                    .build()
                    .unwrap(),
            },
            &reg,
        )
        .unwrap();

        assert_eq!(derived.spelling(k), Some("q"));
        assert_eq!(derived.spelling(a), Some("a"));
        assert_eq!(derived.spelling(a1), Some("a1"));
        assert_eq!(derived.phoneme("k"), Some(k));
        assert!(derived.settings().space_separates_words_not_phonemes());
        assert!(derived.settings().stress_comes_before_vowel());
        assert_eq!(derived.cleanup().len(), 2);
        assert_eq!(derived.cleanup().apply("a"), "c");
        // the base table is untouched
        assert_eq!(base.spelling(k), Some("k"));
        assert!(!base.settings().stress_comes_before_vowel());
    }

    #[test]
    fn inline_markup_wraps_word() {
        let (reg, [a, ..]) = registry();
        let table = FormatTable::new(
            "t",
            FormatDecl {
                description: "t".into(),
                entries: vec![Entry::both("a", a)],
                settings: FormatSettingsBuilder::default()
                    .inline_format("[[%s]]")
                    .build()
                    .unwrap(),
            },
            &reg,
        )
        .unwrap();
        assert_eq!(table.markup_inline_word("h@loU"), "[[h@loU]]");
    }
}
