use std::borrow::Cow;

use regex::Regex;

use super::settings::RewriteRule;
use crate::error::LexError;

/// An ordered list of compiled regex rewrites.
///
/// Each pass runs over the whole output of the previous pass, so a later rule
/// sees text produced by an earlier one.
#[derive(Debug, Clone, Default)]
pub struct RewritePasses {
    passes: Vec<(Regex, String)>,
}

impl RewritePasses {
    /// Compile `rules` for the format named `format`; a bad pattern is a configuration error.
    pub fn compile(format: &str, rules: &[RewriteRule]) -> Result<Self, LexError> {
        let passes = rules
            .iter()
            .map(|rule| {
                Regex::new(&rule.pattern)
                    .map(|re| (re, rule.replacement.clone()))
                    .map_err(|source| LexError::Rewrite {
                        format: format.to_string(),
                        pattern: rule.pattern.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { passes })
    }

    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(text);
        for (re, replacement) in &self.passes {
            let rewritten = match re.replace_all(&current, replacement.as_str()) {
                Cow::Owned(rewritten) => Some(rewritten),
                Cow::Borrowed(_) => None,
            };
            if let Some(rewritten) = rewritten {
                current = Cow::Owned(rewritten);
            }
        }
        current
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::settings::rules;

    #[test]
    fn passes_run_in_declared_order() {
        let passes = RewritePasses::compile("t", &rules(&[("A", "B"), ("B", "C")])).unwrap();
        assert_eq!(passes.apply("xAx"), "xCx");

        let reversed = RewritePasses::compile("t", &rules(&[("B", "C"), ("A", "B")])).unwrap();
        assert_eq!(reversed.apply("xAx"), "xBx");
    }

    #[test]
    fn replacements_use_capture_groups() {
        let passes =
            RewritePasses::compile("t", &rules(&[("([bdfg])[euo]0ei", "${1}ei")])).unwrap();
        assert_eq!(passes.apply("bu0ei5"), "bei5");
    }

    #[test]
    fn untouched_text_is_borrowed() {
        let passes = RewritePasses::compile("t", &rules(&[("q", "k")])).unwrap();
        assert!(matches!(passes.apply("abc"), Cow::Borrowed(_)));
    }

    #[test]
    fn bad_pattern_names_the_format() {
        let err = RewritePasses::compile("broken", &rules(&[("(", "")])).unwrap_err();
        assert!(matches!(err, LexError::Rewrite { ref format, .. } if format == "broken"));
    }
}
