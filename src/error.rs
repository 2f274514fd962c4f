use crate::format::settings::FormatSettingsBuilderError;

/// Errors raised while building phoneme tables or looking up formats.
///
/// Everything here is a configuration problem detected before scanning
/// starts. Per-character problems during a conversion are never errors:
/// they are logged and the character is dropped.
#[derive(thiserror::Error, Debug)]
pub enum LexError {
    #[error(
        "Duplicate key(s) in {format:?}: {keys}. \
         Did you forget to declare one of them read-only or write-only?"
    )]
    DuplicateKeys { format: String, keys: String },
    #[error("Format '{0}' not found. Call Catalog::names() to see available formats.")]
    UnknownFormat(String),
    #[error("Format '{0}' is already registered")]
    FormatExists(String),
    #[error("Phoneme '{0}' not found in the registry")]
    UnknownPhoneme(String),
    #[error("Variant '{0}' declared before any base phoneme")]
    OrphanVariant(String),
    #[error("Invalid rewrite rule {pattern:?} in {format:?}: {source}")]
    Rewrite {
        format: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Invalid format settings: {0}")]
    Settings(#[from] FormatSettingsBuilderError),
    #[error("Format '{0}' uses phonemes from another registry")]
    ForeignPhonemes(String),
    #[error("Invalid format file: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
