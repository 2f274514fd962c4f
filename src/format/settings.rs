use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::hooks::{PostProcess, PreProcess};

/// One `(pattern, replacement)` regex rewrite. Replacements use `${1}` group syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRule {
    pub pattern: String,
    pub replacement: String,
}

impl RewriteRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Build an ordered rule list from `(pattern, replacement)` pairs.
pub fn rules(pairs: &[(&str, &str)]) -> Vec<RewriteRule> {
    pairs
        .iter()
        .map(|&(pattern, replacement)| RewriteRule::new(pattern, replacement))
        .collect()
}

/// Which unsupported characters of a source format may be dropped without a warning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SafeToDropRepr", into = "SafeToDropRepr")]
pub enum SafeToDrop {
    /// Every unsupported character is reported.
    #[default]
    Nothing,
    /// Unsupported characters are dropped silently.
    All,
    /// Only these characters are dropped silently.
    Chars(String),
}

impl SafeToDrop {
    pub fn allows(&self, ch: char) -> bool {
        match self {
            SafeToDrop::Nothing => false,
            SafeToDrop::All => true,
            SafeToDrop::Chars(chars) => chars.contains(ch),
        }
    }
}

/// JSON shape: `true`/`false` or a string of characters.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SafeToDropRepr {
    Flag(bool),
    Chars(String),
}

impl From<SafeToDropRepr> for SafeToDrop {
    fn from(repr: SafeToDropRepr) -> Self {
        match repr {
            SafeToDropRepr::Flag(true) => SafeToDrop::All,
            SafeToDropRepr::Flag(false) => SafeToDrop::Nothing,
            SafeToDropRepr::Chars(chars) if chars.is_empty() => SafeToDrop::Nothing,
            SafeToDropRepr::Chars(chars) => SafeToDrop::Chars(chars),
        }
    }
}

impl From<SafeToDrop> for SafeToDropRepr {
    fn from(value: SafeToDrop) -> Self {
        match value {
            SafeToDrop::Nothing => SafeToDropRepr::Flag(false),
            SafeToDrop::All => SafeToDropRepr::Flag(true),
            SafeToDrop::Chars(chars) => SafeToDropRepr::Chars(chars),
        }
    }
}

/// Case forced on lexicon words (not pronunciations) by the lexicon writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordCase {
    Upper,
    Lower,
}

impl WordCase {
    pub fn apply(self, word: &str) -> String {
        match self {
            WordCase::Upper => word.to_uppercase(),
            WordCase::Lower => word.to_lowercase(),
        }
    }
}

/// Behavioural settings of one format table.
///
/// Scalar settings are optional so a variant table can tell "restated" from
/// "inherited"; the accessors supply the defaults. The `lex_*` and `inline_*`
/// settings are not read by the converter itself, they are carried for
/// lexicon readers/writers and inline renderers built on top of it.
///
/// ```
/// use lexconvert_rs::format::settings::{rules, FormatSettingsBuilder, SafeToDrop};
///
/// let settings = FormatSettingsBuilder::default()
///     .stress_comes_before_vowel(true)
///     .safe_to_drop_characters(SafeToDrop::Chars("_: !".into()))
///     .cleanup_regexps(rules(&[("gg", "g")]))
///     .build()?;
/// assert!(settings.stress_comes_before_vowel());
/// assert!(!settings.space_separates_words_not_phonemes());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(default)]
#[serde(default, deny_unknown_fields)]
pub struct FormatSettings {
    /// Stress marks precede the stressed vowel (otherwise they follow it).
    #[builder(setter(strip_option))]
    stress_comes_before_vowel: Option<bool>,
    /// Whitespace separates whole words, so phonemes are written without separators.
    #[builder(setter(strip_option))]
    space_separates_words_not_phonemes: Option<bool>,
    #[builder(setter(strip_option))]
    safe_to_drop_characters: Option<SafeToDrop>,
    /// Rewrites applied after converting INTO this format.
    #[builder(setter(into))]
    cleanup_regexps: Vec<RewriteRule>,
    /// Rewrites applied before converting OUT of this format.
    #[builder(setter(into))]
    #[serde(alias = "cvtOut_regexps")]
    cvt_out_regexps: Vec<RewriteRule>,
    #[builder(setter(strip_option))]
    pre_process: Option<PreProcess>,
    #[builder(setter(strip_option))]
    post_process: Option<PostProcess>,
    /// Template for one word in running text; `%s` is the pronunciation.
    #[builder(setter(into, strip_option))]
    inline_format: Option<String>,
    #[builder(setter(into, strip_option))]
    inline_header: Option<String>,
    #[builder(setter(into, strip_option))]
    lex_filename: Option<String>,
    #[builder(setter(into, strip_option))]
    lex_entry_format: Option<String>,
    #[builder(setter(into, strip_option))]
    lex_header: Option<String>,
    #[builder(setter(into, strip_option))]
    lex_footer: Option<String>,
    #[builder(setter(strip_option))]
    lex_word_case: Option<WordCase>,
}

impl FormatSettings {
    pub fn stress_comes_before_vowel(&self) -> bool {
        self.stress_comes_before_vowel.unwrap_or(false)
    }

    pub fn space_separates_words_not_phonemes(&self) -> bool {
        self.space_separates_words_not_phonemes.unwrap_or(false)
    }

    pub fn safe_to_drop_characters(&self) -> &SafeToDrop {
        static NOTHING: SafeToDrop = SafeToDrop::Nothing;
        self.safe_to_drop_characters.as_ref().unwrap_or(&NOTHING)
    }

    pub fn cleanup_regexps(&self) -> &[RewriteRule] {
        &self.cleanup_regexps
    }

    pub fn cvt_out_regexps(&self) -> &[RewriteRule] {
        &self.cvt_out_regexps
    }

    pub fn pre_process(&self) -> Option<PreProcess> {
        self.pre_process
    }

    pub fn post_process(&self) -> Option<PostProcess> {
        self.post_process
    }

    pub fn inline_format(&self) -> &str {
        self.inline_format.as_deref().unwrap_or("%s")
    }

    pub fn inline_header(&self) -> Option<&str> {
        self.inline_header.as_deref()
    }

    pub fn lex_filename(&self) -> Option<&str> {
        self.lex_filename.as_deref()
    }

    pub fn lex_entry_format(&self) -> Option<&str> {
        self.lex_entry_format.as_deref()
    }

    pub fn lex_header(&self) -> &str {
        self.lex_header.as_deref().unwrap_or("")
    }

    pub fn lex_footer(&self) -> &str {
        self.lex_footer.as_deref().unwrap_or("")
    }

    pub fn lex_word_case(&self) -> Option<WordCase> {
        self.lex_word_case
    }

    /// Settings of a variant table: restated scalars replace the base's,
    /// rule lists are appended to the base's lists.
    pub fn merged(&self, delta: &FormatSettings) -> FormatSettings {
        fn pick<T: Clone>(delta: &Option<T>, base: &Option<T>) -> Option<T> {
            delta.clone().or_else(|| base.clone())
        }
        fn concat(base: &[RewriteRule], delta: &[RewriteRule]) -> Vec<RewriteRule> {
            base.iter().chain(delta).cloned().collect()
        }

        FormatSettings {
            stress_comes_before_vowel: pick(
                &delta.stress_comes_before_vowel,
                &self.stress_comes_before_vowel,
            ),
            space_separates_words_not_phonemes: pick(
                &delta.space_separates_words_not_phonemes,
                &self.space_separates_words_not_phonemes,
            ),
            safe_to_drop_characters: pick(
                &delta.safe_to_drop_characters,
                &self.safe_to_drop_characters,
            ),
            cleanup_regexps: concat(&self.cleanup_regexps, &delta.cleanup_regexps),
            cvt_out_regexps: concat(&self.cvt_out_regexps, &delta.cvt_out_regexps),
            pre_process: pick(&delta.pre_process, &self.pre_process),
            post_process: pick(&delta.post_process, &self.post_process),
            inline_format: pick(&delta.inline_format, &self.inline_format),
            inline_header: pick(&delta.inline_header, &self.inline_header),
            lex_filename: pick(&delta.lex_filename, &self.lex_filename),
            lex_entry_format: pick(&delta.lex_entry_format, &self.lex_entry_format),
            lex_header: pick(&delta.lex_header, &self.lex_header),
            lex_footer: pick(&delta.lex_footer, &self.lex_footer),
            lex_word_case: pick(&delta.lex_word_case, &self.lex_word_case),
        }
    }
}
