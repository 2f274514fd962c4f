//! # lexconvert-rs
//!
//! A Rust library for converting phonetic transcriptions between the
//! notations used by speech synthesizers and pronouncing dictionaries.
//!
//! ## Features
//!
//! - **Shared phoneme registry**: every notation maps onto one canonical inventory
//! - **Fifteen built-in formats**: Festival, eSpeak, SAPI, CMU, X-SAMPA, Unicode IPA and more
//! - **Stress handling**: stress marks move between before-vowel and after-vowel conventions
//! - **User formats**: declare new notations in JSON and register them at start-up
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! lexconvert-rs = "2026.2"
//! ```
//!
//! ```
//! use lexconvert_rs::{Catalog, Converter, PhoneticConverter};
//!
//! let catalog = Catalog::global()?;
//! let mut converter = Converter::new(catalog);
//!
//! let espeak = converter.convert("h @ l ou1", "festival", "espeak")?;
//! assert_eq!(espeak, "h@l'oU");
//! println!("{}", catalog.format("espeak")?.markup_inline_word(&espeak));
//! # Ok::<(), lexconvert_rs::LexError>(())
//! ```

pub mod convert;
pub mod error;
pub mod format;
pub mod formats;
pub mod phonemes;

pub use convert::Converter;
pub use error::LexError;
pub use formats::Catalog;

/// Common interface for pronunciation converters.
///
/// Formats are named as in [`Catalog::names`]. Converting a format to itself
/// returns the text unchanged, even if it is not valid in that format.
pub trait PhoneticConverter {
    /// Convert one pronunciation from `source` to `dest` notation.
    ///
    /// Unknown format names are errors. Characters the pair cannot translate
    /// are dropped (with a warning unless the source marks them safe to drop).
    fn convert(&mut self, text: &str, source: &str, dest: &str) -> Result<String, LexError>;

    /// Convert the pronunciation of each `(word, pronunciation)` lexicon entry.
    ///
    /// Default implementation calls `convert()` on each pronunciation.
    fn convert_entries(
        &mut self,
        entries: &[(String, String)],
        source: &str,
        dest: &str,
    ) -> Result<Vec<(String, String)>, LexError> {
        entries
            .iter()
            .map(|(word, pronunciation)| {
                Ok((word.clone(), self.convert(pronunciation, source, dest)?))
            })
            .collect()
    }
}
