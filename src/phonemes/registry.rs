use std::collections::HashMap;
use std::fmt;

use crate::error::LexError;

/// Opaque handle for a canonical phoneme.
///
/// Handles are only meaningful for the registry that allocated them.
/// [`PhonemeRegistry`] methods panic on a handle it never allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhonemeId(u32);

impl PhonemeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Broad class of a base phoneme. Variants inherit the class of their base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Vowel,
    Consonant,
    /// Stress marks, syllable separators and punctuation-like markers.
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Vowel => "vowel",
            Category::Consonant => "consonant",
            Category::Other => "other",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone)]
enum Kind {
    Base {
        category: Category,
        optional: bool,
        number: u32,
    },
    Variant {
        base: PhonemeId,
        suffix: u32,
    },
}

#[derive(Debug, Clone)]
struct PhonemeInfo {
    name: String,
    kind: Kind,
}

/// Append-only store of phoneme identities.
///
/// Base phonemes are numbered `1, 2, 3, ...` in allocation order. A variant is
/// attached to the most recently allocated base and labelled `base.suffix`,
/// so truncating a variant's label always gives its base's label.
#[derive(Debug, Default, Clone)]
pub struct PhonemeRegistry {
    phonemes: Vec<PhonemeInfo>,
    by_name: HashMap<String, PhonemeId>,
    last_base: Option<PhonemeId>,
    base_count: u32,
    last_suffix: u32,
}

impl PhonemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_vowel(&mut self, name: &str) -> Result<PhonemeId, LexError> {
        self.new_base(name, Category::Vowel, false)
    }

    pub fn new_consonant(&mut self, name: &str) -> Result<PhonemeId, LexError> {
        self.new_base(name, Category::Consonant, false)
    }

    /// A vowel that formats may leave out without a completeness warning.
    pub fn new_optional_vowel(&mut self, name: &str) -> Result<PhonemeId, LexError> {
        self.new_base(name, Category::Vowel, true)
    }

    pub fn new_other(&mut self, name: &str) -> Result<PhonemeId, LexError> {
        self.new_base(name, Category::Other, false)
    }

    /// Allocate a variant of the most recently allocated base phoneme.
    pub fn new_variant(&mut self, name: &str) -> Result<PhonemeId, LexError> {
        let base = self
            .last_base
            .ok_or_else(|| LexError::OrphanVariant(name.to_string()))?;

        self.last_suffix += 1;
        while self.last_suffix % 10 == 0 {
            self.last_suffix += 1;
        }
        let suffix = self.last_suffix;
        self.insert(name, Kind::Variant { base, suffix })
    }

    fn new_base(
        &mut self,
        name: &str,
        category: Category,
        optional: bool,
    ) -> Result<PhonemeId, LexError> {
        let number = self.base_count + 1;
        let id = self.insert(
            name,
            Kind::Base {
                category,
                optional,
                number,
            },
        )?;
        self.base_count = number;
        self.last_base = Some(id);
        self.last_suffix = 0;
        Ok(id)
    }

    fn insert(&mut self, name: &str, kind: Kind) -> Result<PhonemeId, LexError> {
        if self.by_name.contains_key(name) {
            return Err(LexError::DuplicateKeys {
                format: "phoneme registry".to_string(),
                keys: format!("{name:?}"),
            });
        }
        let id = PhonemeId(self.phonemes.len() as u32);
        self.phonemes.push(PhonemeInfo {
            name: name.to_string(),
            kind,
        });
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    fn info(&self, id: PhonemeId) -> &PhonemeInfo {
        &self.phonemes[id.index()]
    }

    /// Fallback resolution: a variant resolves to its base, a base to itself.
    pub fn base(&self, id: PhonemeId) -> PhonemeId {
        match self.info(id).kind {
            Kind::Variant { base, .. } => base,
            Kind::Base { .. } => id,
        }
    }

    pub fn is_variant(&self, id: PhonemeId) -> bool {
        matches!(self.info(id).kind, Kind::Variant { .. })
    }

    pub fn category(&self, id: PhonemeId) -> Category {
        match self.info(id).kind {
            Kind::Base { category, .. } => category,
            Kind::Variant { base, .. } => self.category(base),
        }
    }

    pub fn is_consonant(&self, id: PhonemeId) -> bool {
        self.category(id) == Category::Consonant
    }

    /// True for the vowels and consonants every format table is expected to cover.
    pub fn is_required(&self, id: PhonemeId) -> bool {
        match self.info(id).kind {
            Kind::Base {
                category, optional, ..
            } => !optional && category != Category::Other,
            Kind::Variant { .. } => false,
        }
    }

    /// Symbolic name the phoneme was declared with.
    pub fn name(&self, id: PhonemeId) -> &str {
        &self.info(id).name
    }

    pub fn lookup(&self, name: &str) -> Result<PhonemeId, LexError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| LexError::UnknownPhoneme(name.to_string()))
    }

    /// Numeric label: `n` for the n-th base phoneme, `n.s` for its variants.
    pub fn label(&self, id: PhonemeId) -> String {
        match self.info(id).kind {
            Kind::Base { number, .. } => number.to_string(),
            Kind::Variant { base, suffix } => format!("{}.{suffix}", self.label(base)),
        }
    }

    /// All phonemes in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = PhonemeId> + '_ {
        (0..self.phonemes.len() as u32).map(PhonemeId)
    }

    /// Non-optional vowels and consonants.
    pub fn required(&self) -> impl Iterator<Item = PhonemeId> + '_ {
        self.ids().filter(|&id| self.is_required(id))
    }

    /// True if `id` is in range for this registry.
    pub fn contains(&self, id: PhonemeId) -> bool {
        id.index() < self.phonemes.len()
    }

    pub fn len(&self) -> usize {
        self.phonemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_attach_to_latest_base() {
        let mut reg = PhonemeRegistry::new();
        let a = reg.new_vowel("a").unwrap();
        let a1 = reg.new_variant("a1").unwrap();
        let k = reg.new_consonant("k").unwrap();
        let loch = reg.new_variant("loch").unwrap();

        assert_eq!(reg.base(a1), a);
        assert_eq!(reg.base(loch), k);
        assert_eq!(reg.base(k), k);
        assert_eq!(reg.category(a1), Category::Vowel);
        assert_eq!(reg.category(loch), Category::Consonant);
        assert!(reg.is_variant(loch));
        assert!(!reg.is_variant(k));
    }

    #[test]
    fn variant_before_any_base_is_rejected() {
        let mut reg = PhonemeRegistry::new();
        assert!(matches!(
            reg.new_variant("stray"),
            Err(LexError::OrphanVariant(name)) if name == "stray"
        ));
    }

    #[test]
    fn labels_truncate_to_base_label() {
        let mut reg = PhonemeRegistry::new();
        reg.new_other("sep").unwrap();
        let vowel = reg.new_vowel("v").unwrap();
        let variants: Vec<_> = (0..12)
            .map(|i| reg.new_variant(&format!("v{i}")).unwrap())
            .collect();

        assert_eq!(reg.label(vowel), "2");
        assert_eq!(reg.label(variants[0]), "2.1");
        // suffixes ending in zero would collide with a shorter suffix once truncated
        assert_eq!(reg.label(variants[8]), "2.9");
        assert_eq!(reg.label(variants[9]), "2.11");

        let mut labels: Vec<String> = variants.iter().map(|&v| reg.label(v)).collect();
        for label in &labels {
            let (base, _) = label.split_once('.').unwrap();
            assert_eq!(base, reg.label(vowel));
        }
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), variants.len());
    }

    #[test]
    fn optional_and_other_phonemes_are_not_required() {
        let mut reg = PhonemeRegistry::new();
        let v = reg.new_vowel("v").unwrap();
        reg.new_variant("v1").unwrap();
        let c = reg.new_consonant("c").unwrap();
        reg.new_optional_vowel("opt").unwrap();
        reg.new_other("stress").unwrap();

        let required: Vec<_> = reg.required().collect();
        assert_eq!(required, vec![v, c]);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut reg = PhonemeRegistry::new();
        reg.new_vowel("a").unwrap();
        assert!(matches!(
            reg.new_consonant("a"),
            Err(LexError::DuplicateKeys { .. })
        ));
        assert_eq!(reg.lookup("a").map(|id| reg.name(id).to_string()).unwrap(), "a");
        assert!(matches!(reg.lookup("zz"), Err(LexError::UnknownPhoneme(_))));
    }
}
