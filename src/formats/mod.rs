//! Built-in phoneme formats and the catalog that holds them.
//!
//! # Supported Formats
//!
//! | Name | Notation |
//! |---|---|
//! | `festival` | Festival's British voice (MRPA) |
//! | `espeak` | eSpeak's default British voice |
//! | `sapi` | Microsoft Speech API, American English |
//! | `cepstral` | Cepstral's British English SSML phoneset |
//! | `mac` | Apple US voices, `[[inpt PHON]]` notation |
//! | `mac-uk` | Scansoft/Nuance British voices on macOS |
//! | `x-sampa` | General X-SAMPA |
//! | `acapela-uk` | Acapela-optimised X-SAMPA for UK voices |
//! | `cmu` | CMU Pronouncing Dictionary |
//! | `bbcmicro` | BBC Micro "Speech" program (1985) |
//! | `unicode-ipa` | Unicode IPA |
//! | `latex-ipa` | LaTeX `tipa` package |
//! | `pinyin-approx` | Rough approximation in Pinyin spelling |
//! | `kana-approx` | Rough approximation in kana |
//! | `kana-approx-moreemph` | `kana-approx`, also doubling secondary-stressed vowels |
//! | `names` | Internal phoneme names |
//!
//! # Examples
//!
//! ```
//! use lexconvert_rs::formats::Catalog;
//!
//! let catalog = Catalog::standard()?;
//! let espeak = catalog.format("espeak")?;
//! assert!(espeak.settings().stress_comes_before_vowel());
//! assert!(catalog.format("no-such-format").is_err());
//! # Ok::<(), lexconvert_rs::LexError>(())
//! ```

mod acapela_uk;
mod bbcmicro;
mod cepstral;
mod cmu;
mod espeak;
mod festival;
mod kana_approx;
mod latex_ipa;
mod mac;
mod mac_uk;
mod names;
mod pinyin_approx;
mod sapi;
mod unicode_ipa;
mod x_sampa;

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::LexError;
use crate::format::json::load_format;
use crate::format::table::{Entry, FormatDecl, FormatTable};
use crate::phonemes::{PhonemeId, PhonemeRegistry, Phonemes};

/// Script used by the kana approximation formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KanaType {
    #[default]
    Hiragana,
    Katakana,
}

/// Parameters for building a [`Catalog`].
#[derive(Debug, Clone, Default, Builder)]
#[builder(default)]
pub struct CatalogParams {
    /// Script of the `kana-approx` output. Some voices sound different in katakana.
    pub kana_type: KanaType,
    /// Write bbcmicro lexicons as a sideways ROM image (`SPEECH.ROM`) rather than `BBCLEX`.
    pub bbc_speech_rom: bool,
}

/// Every format table, keyed by format name, plus the registry they share.
///
/// Immutable once built, except for [`Catalog::register`] and friends which
/// are meant for start-up code adding user formats.
#[derive(Debug)]
pub struct Catalog {
    registry: PhonemeRegistry,
    phonemes: Phonemes,
    tables: BTreeMap<String, FormatTable>,
}

impl Catalog {
    /// Build the standard catalog with default parameters.
    pub fn standard() -> Result<Self, LexError> {
        Self::with_params(&CatalogParams::default())
    }

    /// Build the standard catalog.
    pub fn with_params(params: &CatalogParams) -> Result<Self, LexError> {
        let mut registry = PhonemeRegistry::new();
        let p = Phonemes::declare(&mut registry)?;
        log::debug!("Declared {} canonical phonemes", registry.len());

        let mut catalog = Self {
            registry,
            phonemes: p,
            tables: BTreeMap::new(),
        };

        catalog.declare("festival", festival::declare(&p)?)?;
        catalog.declare("espeak", espeak::declare(&p)?)?;
        catalog.declare("sapi", sapi::declare(&p)?)?;
        catalog.declare("cepstral", cepstral::declare(&p)?)?;
        catalog.declare("mac", mac::declare(&p)?)?;
        catalog.declare("mac-uk", mac_uk::declare(&p)?)?;
        catalog.declare("x-sampa", x_sampa::declare(&p)?)?;
        catalog.declare("acapela-uk", acapela_uk::declare(&p)?)?;
        catalog.declare("cmu", cmu::declare(&p)?)?;
        catalog.declare("bbcmicro", bbcmicro::declare(&p, params)?)?;
        catalog.declare("unicode-ipa", unicode_ipa::declare(&p)?)?;
        catalog.declare("latex-ipa", latex_ipa::declare(&p)?)?;
        catalog.declare("pinyin-approx", pinyin_approx::declare(&p)?)?;
        catalog.declare("kana-approx", kana_approx::declare(&p, params)?)?;
        catalog.declare_variant(
            "kana-approx-moreemph",
            "kana-approx",
            kana_approx::more_emphasis(&p)?,
        )?;
        let names = names::declare(&catalog.registry);
        catalog.declare("names", names)?;

        log::info!("Built {} phoneme formats", catalog.tables.len());
        Ok(catalog)
    }

    /// The standard catalog, built on first use and shared for the process lifetime.
    pub fn global() -> Result<&'static Catalog, LexError> {
        static INSTANCE: OnceLock<Result<Catalog, String>> = OnceLock::new();
        INSTANCE
            .get_or_init(|| Catalog::standard().map_err(|e| e.to_string()))
            .as_ref()
            .map_err(|e| LexError::Config(e.clone()))
    }

    pub fn registry(&self) -> &PhonemeRegistry {
        &self.registry
    }

    pub fn phonemes(&self) -> &Phonemes {
        &self.phonemes
    }

    pub fn format(&self, name: &str) -> Result<&FormatTable, LexError> {
        self.tables
            .get(name)
            .ok_or_else(|| LexError::UnknownFormat(name.to_string()))
    }

    /// Format names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    /// Validate `decl` and add it as format `name`.
    pub fn declare(&mut self, name: &str, decl: FormatDecl) -> Result<(), LexError> {
        let table = FormatTable::new(name, decl, &self.registry)?;
        self.register(table)
    }

    /// Add format `name` as a variant of the already registered `base`.
    pub fn declare_variant(
        &mut self,
        name: &str,
        base: &str,
        decl: FormatDecl,
    ) -> Result<(), LexError> {
        let table = FormatTable::variant_of(self.format(base)?, name, decl, &self.registry)?;
        self.register(table)
    }

    /// Add an already validated table. Names must be unique, and the table
    /// must have been built against this catalog's registry.
    pub fn register(&mut self, table: FormatTable) -> Result<(), LexError> {
        if self.tables.contains_key(table.name()) {
            return Err(LexError::FormatExists(table.name().to_string()));
        }
        if !table.phonemes().all(|id| self.registry.contains(id)) {
            return Err(LexError::ForeignPhonemes(table.name().to_string()));
        }
        self.tables.insert(table.name().to_string(), table);
        Ok(())
    }

    /// Read a JSON format declaration and register it, returning its name.
    pub fn load_format(&mut self, path: &Path) -> Result<String, LexError> {
        let loaded = load_format(path, &self.registry)?;
        log::info!("Loading format '{}' from {}", loaded.name, path.display());
        match &loaded.variant_of {
            Some(base) => self.declare_variant(&loaded.name, base, loaded.decl)?,
            None => self.declare(&loaded.name, loaded.decl)?,
        }
        Ok(loaded.name)
    }
}

pub(crate) fn both(spelling: &str, phoneme: PhonemeId) -> Entry {
    Entry::both(spelling, phoneme)
}

pub(crate) fn read(spelling: &str, phoneme: PhonemeId) -> Entry {
    Entry::read_only(spelling, phoneme)
}

pub(crate) fn write(phoneme: PhonemeId, spelling: &str) -> Entry {
    Entry::write_only(phoneme, spelling)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::hooks::PostProcess;

    #[test]
    fn standard_catalog_builds() {
        let catalog = Catalog::standard().unwrap();
        let names = catalog.names();
        for expected in [
            "acapela-uk",
            "bbcmicro",
            "cepstral",
            "cmu",
            "espeak",
            "festival",
            "kana-approx",
            "kana-approx-moreemph",
            "latex-ipa",
            "mac",
            "mac-uk",
            "names",
            "pinyin-approx",
            "sapi",
            "unicode-ipa",
            "x-sampa",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn complete_formats_cover_every_required_phoneme() {
        let catalog = Catalog::standard().unwrap();
        for name in [
            "festival",
            "espeak",
            "sapi",
            "cepstral",
            "mac",
            "x-sampa",
            "cmu",
            "unicode-ipa",
            "latex-ipa",
            "pinyin-approx",
            "names",
        ] {
            let table = catalog.format(name).unwrap();
            let missing = table.missing_phonemes(catalog.registry());
            assert!(missing.is_empty(), "{name} is missing {missing:?}");
        }
    }

    #[test]
    fn unknown_format_is_an_error() {
        let catalog = Catalog::standard().unwrap();
        assert!(matches!(
            catalog.format("klingon"),
            Err(LexError::UnknownFormat(name)) if name == "klingon"
        ));
    }

    #[test]
    fn registering_a_name_twice_fails() {
        let mut catalog = Catalog::standard().unwrap();
        let again = catalog.format("cmu").unwrap().clone();
        assert!(matches!(
            catalog.register(again),
            Err(LexError::FormatExists(name)) if name == "cmu"
        ));
    }

    #[test]
    fn tables_from_a_larger_registry_are_rejected() {
        let mut catalog = Catalog::standard().unwrap();
        let mut registry = PhonemeRegistry::new();
        let mut last = None;
        for i in 0..=catalog.registry().len() {
            last = Some(registry.new_vowel(&format!("vowel{i}")).unwrap());
        }
        let decl = FormatDecl {
            entries: vec![Entry::both("q", last.unwrap())],
            ..FormatDecl::default()
        };
        let table = FormatTable::new("alien", decl, &registry).unwrap();
        assert!(matches!(
            catalog.register(table),
            Err(LexError::ForeignPhonemes(name)) if name == "alien"
        ));
        assert!(catalog.format("alien").is_err());
    }

    #[test]
    fn params_select_kana_script_and_rom_filename() {
        let params = CatalogParamsBuilder::default()
            .kana_type(KanaType::Katakana)
            .bbc_speech_rom(true)
            .build()
            .unwrap();
        let catalog = Catalog::with_params(&params).unwrap();
        assert_eq!(
            catalog.format("kana-approx").unwrap().settings().post_process(),
            Some(PostProcess::HiraganaToKatakana)
        );
        assert_eq!(
            catalog.format("bbcmicro").unwrap().settings().lex_filename(),
            Some("SPEECH.ROM")
        );

        let default = Catalog::standard().unwrap();
        assert_eq!(
            default.format("kana-approx").unwrap().settings().post_process(),
            None
        );
        assert_eq!(
            default.format("bbcmicro").unwrap().settings().lex_filename(),
            Some("BBCLEX")
        );
    }

    #[test]
    fn loads_a_user_format_variant() {
        let mut catalog = Catalog::standard().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("espeak-x.json");
        std::fs::write(
            &path,
            r#"{
                "name": "espeak-x",
                "description": "eSpeak with x for th",
                "variant_of": "espeak",
                "entries": [{"spelling": "x", "phoneme": "th"}],
                "settings": {"cleanup_regexps": [{"pattern": "xx", "replacement": "x"}]}
            }"#,
        )
        .unwrap();

        let name = catalog.load_format(&path).unwrap();
        assert_eq!(name, "espeak-x");
        let table = catalog.format("espeak-x").unwrap();
        let p = *catalog.phonemes();
        assert_eq!(table.spelling(p.th), Some("x"));
        assert_eq!(table.spelling(p.sh), Some("S"));
        assert_eq!(
            table.cleanup().len(),
            catalog.format("espeak").unwrap().cleanup().len() + 1
        );
    }

    #[test]
    fn global_catalog_is_shared() {
        let a = Catalog::global().unwrap();
        let b = Catalog::global().unwrap();
        assert!(std::ptr::eq(a, b));
    }
}
