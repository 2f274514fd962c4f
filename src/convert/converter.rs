use std::collections::HashSet;

use super::dictionary::Dictionary;
use crate::error::LexError;
use crate::format::table::FormatTable;
use crate::formats::Catalog;
use crate::PhoneticConverter;

/// One emitted destination token.
#[derive(Debug, Clone)]
struct Token {
    text: String,
    /// Inserted by the implicit-vowel heuristic rather than read from the input.
    implicit: bool,
}

impl Token {
    fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            implicit: false,
        }
    }

    fn implicit(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            implicit: true,
        }
    }
}

/// A conversion session over a [`Catalog`].
///
/// Keeps the dictionary for the most recently used format pair, and the
/// set of unsupported characters already warned about. Switching pairs
/// rebuilds the dictionary, so hold one converter per pair if you
/// alternate between several in a loop.
///
/// # Examples
///
/// ```
/// use lexconvert_rs::{Catalog, Converter, PhoneticConverter};
///
/// let catalog = Catalog::standard()?;
/// let mut converter = Converter::new(&catalog);
/// assert_eq!(converter.convert("h @ l ou1", "festival", "espeak")?, "h@l'oU");
/// # Ok::<(), lexconvert_rs::LexError>(())
/// ```
#[derive(Debug)]
pub struct Converter<'c> {
    catalog: &'c Catalog,
    cached: Option<Dictionary>,
    warned: HashSet<(char, String)>,
}

impl<'c> Converter<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            cached: None,
            warned: HashSet::new(),
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Number of distinct unsupported-character warnings issued so far.
    pub fn warning_count(&self) -> usize {
        self.warned.len()
    }

    /// Convert running text word by word.
    ///
    /// When the source format separates words (not phonemes) with spaces,
    /// each word is converted on its own; otherwise the whole text is one
    /// pronunciation.
    pub fn convert_words(
        &mut self,
        text: &str,
        source: &str,
        dest: &str,
    ) -> Result<Vec<String>, LexError> {
        let src = self.catalog.format(source)?;
        if src.settings().space_separates_words_not_phonemes() {
            text.split_whitespace()
                .map(|word| self.convert(word, source, dest))
                .collect()
        } else {
            Ok(vec![self.convert(text, source, dest)?])
        }
    }

    fn scan(
        &mut self,
        dict: &Dictionary,
        src: &FormatTable,
        dst: &FormatTable,
        input: &str,
    ) -> Vec<Token> {
        let src_stress_first = src.settings().stress_comes_before_vowel();
        let dst_stress_first = dst.settings().stress_comes_before_vowel();
        let safe_to_drop = src.settings().safe_to_drop_characters();

        let mut out: Vec<Token> = Vec::new();
        // stress marks waiting for the next vowel, in input order
        let mut pending: Vec<String> = Vec::new();
        let mut context = String::new();
        let mut rest = input;

        while let Some(ch) = rest.chars().next() {
            let Some((len, value)) = dict.longest_match(rest) else {
                if !safe_to_drop.allows(ch) && self.warned.insert((ch, context.clone())) {
                    let after = if context.is_empty() {
                        String::new()
                    } else {
                        format!(" after {context}")
                    };
                    log::warn!(
                        "Ignoring {} character {ch:?}{after} (unsupported in {})",
                        src.name(),
                        dst.name()
                    );
                }
                rest = &rest[ch.len_utf8()..];
                continue;
            };
            context = rest[..len].to_string();
            rest = &rest[len..];

            let mut to_add = Some(value).filter(|v| !v.is_empty());
            if dict.is_stress_mark(value) && !dst_stress_first {
                if src_stress_first {
                    pending.push(value.to_string());
                } else {
                    // stress goes right after the vowel it follows
                    match out
                        .iter()
                        .rposition(|t| !t.implicit && !dict.is_consonant(&t.text))
                    {
                        Some(vowel) => out.insert(vowel + 1, Token::new(value)),
                        None => pending.push(value.to_string()),
                    }
                }
                to_add = None;
            } else if dict.is_stress_mark(value) && !src_stress_first {
                let mut i = out.len();
                while i > 0 && (out[i - 1].implicit || dict.is_consonant(&out[i - 1].text)) {
                    i -= 1;
                }
                out.insert(i.saturating_sub(1), Token::new(value));
                if let Some(sep) = dict.syllable_separator() {
                    out.push(Token::new(sep));
                }
                to_add = None;
            } else if let Some(vowel) = implicit_vowel_before(dict, &out, value) {
                out.push(Token::implicit(vowel));
            } else if out.len() > 2
                && out[out.len() - 2].implicit
                && !value.is_empty()
                && !dict.is_consonant(value)
                && dict.syllable_separator() != Some(value)
            {
                // a vowel follows after all; the implicit one was not needed
                out.remove(out.len() - 2);
            }

            if let Some(value) = to_add {
                let mut parts = value.split_whitespace();
                if let Some(first) = parts.next() {
                    out.push(Token::new(first));
                    if !dict.is_consonant(first) {
                        out.extend(pending.drain(..).map(Token::new));
                    }
                    out.extend(parts.map(Token::new));
                }
            }
        }

        out.extend(pending.into_iter().map(Token::new));
        if let (Some(sep), Some(last)) = (dict.syllable_separator(), out.last()) {
            if last.text == sep {
                out.pop();
            }
        }
        out
    }
}

/// The vowel to insert before `value` when it is a syllabic n or l
/// following a consonant.
fn implicit_vowel_before<'d>(
    dict: &'d Dictionary,
    out: &[Token],
    value: &str,
) -> Option<&'d str> {
    let vowel = dict.implicit_vowel()?;
    let follows_consonant = out.last().is_some_and(|t| dict.is_consonant(&t.text));
    (follows_consonant && dict.is_nasal_or_liquid(value)).then_some(vowel)
}

impl PhoneticConverter for Converter<'_> {
    fn convert(&mut self, text: &str, source: &str, dest: &str) -> Result<String, LexError> {
        if source == dest {
            return Ok(text.to_string());
        }
        let src = self.catalog.format(source)?;
        let dst = self.catalog.format(dest)?;

        let dict = match self.cached.take() {
            Some(dict) if dict.is_for(source, dest) => dict,
            _ => Dictionary::build(self.catalog, source, dest)?,
        };

        let text = match src.settings().pre_process() {
            Some(hook) => hook.apply(text).into_owned(),
            None => text.to_string(),
        };
        let text = src.cvt_out().apply(&text).into_owned();

        let tokens = self.scan(&dict, src, dst, &text);
        self.cached = Some(dict);

        let joiner = if dst.settings().space_separates_words_not_phonemes() {
            ""
        } else {
            " "
        };
        let joined = tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(joiner);
        let cleaned = dst.cleanup().apply(&joined).into_owned();
        Ok(match dst.settings().post_process() {
            Some(hook) => hook.apply(&cleaned).into_owned(),
            None => cleaned,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::settings::{rules, FormatSettingsBuilder, SafeToDrop};
    use crate::format::table::{Entry, FormatDecl};
    use crate::formats::{CatalogParamsBuilder, KanaType};

    fn toy_catalog() -> Catalog {
        let mut catalog = Catalog::standard().unwrap();
        let p = *catalog.phonemes();
        catalog
            .declare(
                "toy-src",
                FormatDecl {
                    description: "toy source".to_string(),
                    entries: vec![
                        Entry::both("'", p.primary_stress),
                        Entry::both("p", p.p),
                        Entry::both("a", p.a_as_in_apple),
                        Entry::both("ai", p.eye),
                        Entry::both("i", p.i_as_in_it),
                        Entry::both("x", p.var1_eye),
                    ],
                    settings: FormatSettingsBuilder::default()
                        .stress_comes_before_vowel(true)
                        .build()
                        .unwrap(),
                },
            )
            .unwrap();
        catalog
            .declare(
                "toy-dst",
                FormatDecl {
                    description: "toy destination".to_string(),
                    entries: vec![
                        Entry::both("1", p.primary_stress),
                        Entry::both("P", p.p),
                        Entry::both("X", p.a_as_in_apple),
                        Entry::both("Y", p.eye),
                        Entry::both("I", p.i_as_in_it),
                    ],
                    settings: FormatSettingsBuilder::default()
                        .cleanup_regexps(rules(&[("XX", "B"), ("B", "C")]))
                        .build()
                        .unwrap(),
                },
            )
            .unwrap();
        catalog
    }

    #[test]
    fn identical_formats_pass_text_through() {
        let catalog = Catalog::standard().unwrap();
        let mut converter = Converter::new(&catalog);
        let text = "not even ⟨valid⟩ espeak";
        assert_eq!(converter.convert(text, "espeak", "espeak").unwrap(), text);
        assert_eq!(converter.convert(text, "toy", "toy").unwrap(), text);
    }

    #[test]
    fn unknown_formats_are_errors() {
        let catalog = Catalog::standard().unwrap();
        let mut converter = Converter::new(&catalog);
        assert!(matches!(
            converter.convert("a", "festival", "nope"),
            Err(LexError::UnknownFormat(_))
        ));
    }

    #[test]
    fn longest_key_wins() {
        let catalog = toy_catalog();
        let mut converter = Converter::new(&catalog);
        assert_eq!(converter.convert("ai", "toy-src", "toy-dst").unwrap(), "Y");
        assert_eq!(converter.convert("ia", "toy-src", "toy-dst").unwrap(), "I X");
    }

    #[test]
    fn stress_moves_after_the_vowel() {
        let catalog = toy_catalog();
        let mut converter = Converter::new(&catalog);
        assert_eq!(converter.convert("'pa", "toy-src", "toy-dst").unwrap(), "P X 1");
    }

    #[test]
    fn stress_before_any_vowel_waits_for_one() {
        let catalog = Catalog::standard().unwrap();
        let mut converter = Converter::new(&catalog);
        // festival puts stress after the vowel, cepstral too; with no vowel yet
        // the mark attaches after the next vowel
        assert_eq!(converter.convert("p 1 a", "festival", "cepstral").unwrap(), "p ae1");
        assert_eq!(converter.convert("p 1", "festival", "cepstral").unwrap(), "p1");
    }

    #[test]
    fn every_waiting_stress_mark_is_kept() {
        let catalog = Catalog::standard().unwrap();
        let mut converter = Converter::new(&catalog);
        assert_eq!(
            converter.convert("w th 2 1 ae ow", "sapi", "cmu").unwrap(),
            "W TH AE 2 1 OW"
        );
        assert_eq!(converter.convert(",'bA", "espeak", "festival").unwrap(), "b aa 2 1");
        assert_eq!(converter.warning_count(), 0);
    }

    #[test]
    fn waiting_stress_follows_the_first_part_of_a_split_vowel() {
        let catalog = Catalog::standard().unwrap();
        let mut converter = Converter::new(&catalog);
        // cmu spells the vowel of "here" as two parts
        assert_eq!(converter.convert("h'i@", "espeak", "cmu").unwrap(), "HH EY 1 AH");
    }

    #[test]
    fn stress_moves_before_the_vowel() {
        let catalog = Catalog::standard().unwrap();
        let mut converter = Converter::new(&catalog);
        assert_eq!(
            converter.convert("h @ l ou1", "festival", "espeak").unwrap(),
            "h@l'oU"
        );
        assert_eq!(
            converter.convert("p ei1 p @", "festival", "espeak").unwrap(),
            "p'eI%p@"
        );
    }

    #[test]
    fn variants_fall_back_to_their_base() {
        let catalog = toy_catalog();
        let mut converter = Converter::new(&catalog);
        // var1_eye is unknown to toy-dst, so its base is used
        assert_eq!(converter.convert("x", "toy-src", "toy-dst").unwrap(), "Y");

        let catalog = Catalog::standard().unwrap();
        let mut converter = Converter::new(&catalog);
        assert_eq!(converter.convert("A", "espeak", "festival").unwrap(), "aa");
    }

    #[test]
    fn unsupported_characters_warn_once_and_drop() {
        let catalog = toy_catalog();
        let mut converter = Converter::new(&catalog);
        assert_eq!(converter.convert("a??", "toy-src", "toy-dst").unwrap(), "X");
        assert_eq!(converter.warning_count(), 1);
        assert_eq!(converter.convert("a?", "toy-src", "toy-dst").unwrap(), "X");
        assert_eq!(converter.warning_count(), 1);
        // same character in a different context is reported again
        assert_eq!(converter.convert("p?", "toy-src", "toy-dst").unwrap(), "P");
        assert_eq!(converter.warning_count(), 2);
    }

    #[test]
    fn safe_characters_drop_silently() {
        let catalog = Catalog::standard().unwrap();
        let mut converter = Converter::new(&catalog);
        // espeak declares underscore and space safe to drop
        assert_eq!(converter.convert("b_a", "espeak", "festival").unwrap(), "b a");
        assert_eq!(converter.warning_count(), 0);
        assert_eq!(converter.convert("b\u{436}a", "espeak", "festival").unwrap(), "b a");
        assert_eq!(converter.warning_count(), 1);
    }

    #[test]
    fn repeated_conversions_are_identical() {
        let catalog = Catalog::standard().unwrap();
        let mut converter = Converter::new(&catalog);
        let first = converter.convert("h@l'oU\u{436}", "espeak", "cmu").unwrap();
        converter.convert("b a", "festival", "sapi").unwrap();
        let second = converter.convert("h@l'oU\u{436}", "espeak", "cmu").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn word_formats_concatenate_phonemes() {
        let catalog = Catalog::standard().unwrap();
        let mut converter = Converter::new(&catalog);
        assert_eq!(converter.convert("b a", "festival", "espeak").unwrap(), "ba");
        assert_eq!(converter.convert("ba", "espeak", "festival").unwrap(), "b a");
    }

    #[test]
    fn cleanup_rewrites_apply_in_order() {
        let mut catalog = toy_catalog();
        let p = *catalog.phonemes();
        catalog
            .declare(
                "toy-chain",
                FormatDecl {
                    description: "toy rewrite chain".to_string(),
                    entries: vec![Entry::both("A", p.a_as_in_apple)],
                    settings: FormatSettingsBuilder::default()
                        .cleanup_regexps(rules(&[("A", "B"), ("B", "C")]))
                        .build()
                        .unwrap(),
                },
            )
            .unwrap();
        let mut converter = Converter::new(&catalog);
        assert_eq!(converter.convert("a", "toy-src", "toy-chain").unwrap(), "C");
        assert_eq!(converter.convert("aa", "toy-src", "toy-dst").unwrap(), "X X");
        assert_eq!(
            catalog.format("toy-dst").unwrap().cleanup().apply("XX"),
            "C"
        );
    }

    #[test]
    fn implicit_vowel_is_inserted_and_retracted() {
        let catalog = Catalog::standard().unwrap();
        let mut converter = Converter::new(&catalog);
        assert_eq!(converter.convert("b a t n", "festival", "espeak").unwrap(), "bat3:n");
        assert_eq!(converter.convert("b a t n i", "festival", "espeak").unwrap(), "batnI");
    }

    #[test]
    fn source_rewrites_run_before_scanning() {
        let catalog = Catalog::standard().unwrap();
        let mut converter = Converter::new(&catalog);
        // espeak's final e@r loses its r on the way out
        assert_eq!(converter.convert("he@r", "espeak", "festival").unwrap(), "h e@");
    }

    #[test]
    fn ipa_escapes_are_decoded() {
        let catalog = Catalog::standard().unwrap();
        let mut converter = Converter::new(&catalog);
        assert_eq!(
            converter.convert("\\u0283ip", "unicode-ipa", "festival").unwrap(),
            "sh ii p"
        );
    }

    #[test]
    fn katakana_post_step_runs_after_cleanup() {
        let params = CatalogParamsBuilder::default()
            .kana_type(KanaType::Katakana)
            .build()
            .unwrap();
        let catalog = Catalog::with_params(&params).unwrap();
        let mut converter = Converter::new(&catalog);
        assert_eq!(converter.convert("k a", "festival", "kana-approx").unwrap(), "カ");

        let catalog = Catalog::standard().unwrap();
        let mut converter = Converter::new(&catalog);
        assert_eq!(converter.convert("k a", "festival", "kana-approx").unwrap(), "か");
    }

    #[test]
    fn convert_words_splits_word_formats() {
        let catalog = Catalog::standard().unwrap();
        let mut converter = Converter::new(&catalog);
        assert_eq!(
            converter.convert_words("ba ab", "espeak", "festival").unwrap(),
            vec!["b a".to_string(), "a b".to_string()]
        );
        assert_eq!(
            converter.convert_words("b a", "festival", "espeak").unwrap(),
            vec!["ba".to_string()]
        );
    }

    #[test]
    fn convert_entries_keeps_words() {
        let catalog = Catalog::standard().unwrap();
        let mut converter = Converter::new(&catalog);
        let entries = vec![("hello".to_string(), "h @ l ou1".to_string())];
        assert_eq!(
            converter.convert_entries(&entries, "festival", "espeak").unwrap(),
            vec![("hello".to_string(), "h@l'oU".to_string())]
        );
    }

    #[test]
    fn silent_source_tables_never_warn() {
        let catalog = Catalog::standard().unwrap();
        let mut converter = Converter::new(&catalog);
        assert!(matches!(
            catalog.format("festival").unwrap().settings().safe_to_drop_characters(),
            SafeToDrop::All
        ));
        converter.convert("b \u{436} a", "festival", "sapi").unwrap();
        assert_eq!(converter.warning_count(), 0);
    }
}
