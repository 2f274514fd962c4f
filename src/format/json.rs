use std::path::Path;

use serde::Deserialize;

use super::settings::FormatSettings;
use super::table::{Direction, Entry, FormatDecl};
use crate::error::LexError;
use crate::phonemes::PhonemeRegistry;

/// A format declaration read from disk, not yet validated into a table.
#[derive(Debug, Clone)]
pub struct LoadedFormat {
    pub name: String,
    /// Name of the table this one derives from, if any.
    pub variant_of: Option<String>,
    pub decl: FormatDecl,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FormatFile {
    name: String,
    description: String,
    #[serde(default)]
    variant_of: Option<String>,
    entries: Vec<EntryDecl>,
    #[serde(default)]
    settings: FormatSettings,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntryDecl {
    spelling: String,
    /// Symbolic phoneme name, as used by the `names` format.
    phoneme: String,
    #[serde(default)]
    direction: Direction,
}

/// Load a format declaration from a JSON file.
///
/// ```json
/// {
///   "name": "my-synth",
///   "description": "My synthesizer",
///   "entries": [
///     {"spelling": "aa", "phoneme": "a_as_in_ah"},
///     {"spelling": "A", "phoneme": "a_as_in_ah", "direction": "read_only"}
///   ],
///   "settings": {"stress_comes_before_vowel": true}
/// }
/// ```
pub fn load_format(path: &Path, registry: &PhonemeRegistry) -> Result<LoadedFormat, LexError> {
    let content = std::fs::read_to_string(path)?;
    parse_format(&content, registry)
}

/// Parse a format declaration; phoneme names must exist in `registry`.
pub fn parse_format(json: &str, registry: &PhonemeRegistry) -> Result<LoadedFormat, LexError> {
    let file: FormatFile = serde_json::from_str(json)
        .map_err(|e| LexError::Config(format!("Failed to parse JSON: {e}")))?;

    if file.name.trim().is_empty() {
        return Err(LexError::Config("Format name must not be empty".to_string()));
    }

    let entries = file
        .entries
        .into_iter()
        .map(|e| {
            let phoneme = registry.lookup(&e.phoneme)?;
            Ok(Entry {
                spelling: e.spelling,
                phoneme,
                direction: e.direction,
            })
        })
        .collect::<Result<Vec<_>, LexError>>()?;

    Ok(LoadedFormat {
        name: file.name,
        variant_of: file.variant_of,
        decl: FormatDecl {
            description: file.description,
            entries,
            settings: file.settings,
        },
    })
}
