use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Transform applied to source text before cleanup rewrites and scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreProcess {
    /// Decode literal `\uNNNN` escapes, e.g. text pasted from a browser's
    /// escaped clipboard. Skipped when the text contains a double quote.
    DecodeUnicodeEscapes,
}

impl PreProcess {
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            PreProcess::DecodeUnicodeEscapes => {
                if text.contains("\\u") && !text.contains('"') {
                    Cow::Owned(decode_unicode_escapes(text))
                } else {
                    Cow::Borrowed(text)
                }
            }
        }
    }
}

/// Transform applied to the assembled output after cleanup rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostProcess {
    /// Render hiragana as katakana.
    HiraganaToKatakana,
}

impl PostProcess {
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            PostProcess::HiraganaToKatakana => hiragana_to_katakana(text),
        }
    }
}

const HIRAGANA: std::ops::RangeInclusive<u32> = 0x3041..=0x3096;
const KATAKANA_OFFSET: u32 = 0x60;

fn hiragana_to_katakana(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|ch| HIRAGANA.contains(&(ch as u32))) {
        return Cow::Borrowed(text);
    }
    text.chars()
        .map(|ch| {
            let code = ch as u32;
            if HIRAGANA.contains(&code) {
                char::from_u32(code + KATAKANA_OFFSET).unwrap_or(ch)
            } else {
                ch
            }
        })
        .collect::<String>()
        .into()
}

/// Replace each well-formed `\uNNNN` with its character; anything else is kept verbatim.
fn decode_unicode_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find("\\u") {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 2..];
        let decoded = after
            .get(..4)
            .filter(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()))
            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
            .and_then(char::from_u32);

        match decoded {
            Some(ch) => {
                out.push(ch);
                rest = &after[4..];
            }
            None => {
                out.push_str("\\u");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_hiragana_only() {
        assert_eq!(
            PostProcess::HiraganaToKatakana.apply("はろー abc"),
            "ハロー abc"
        );
    }

    #[test]
    fn katakana_shift_borrows_when_nothing_to_do() {
        assert!(matches!(
            PostProcess::HiraganaToKatakana.apply("abc"),
            Cow::Borrowed("abc")
        ));
    }

    #[test]
    fn decodes_escaped_ipa() {
        let decoded = PreProcess::DecodeUnicodeEscapes.apply("\\u02c8\\u0279\\u026adn");
        assert_eq!(decoded, "\u{02c8}\u{0279}\u{026a}dn");
    }

    #[test]
    fn keeps_malformed_escapes() {
        assert_eq!(decode_unicode_escapes("a\\u02"), "a\\u02");
        assert_eq!(decode_unicode_escapes("\\uzzzzb"), "\\uzzzzb");
    }

    #[test]
    fn leaves_quoted_text_alone() {
        let text = "\"\\u0259\"";
        assert_eq!(PreProcess::DecodeUnicodeEscapes.apply(text), text);
    }
}
