use super::both;
use crate::format::table::FormatDecl;
use crate::phonemes::PhonemeRegistry;

/// Every phoneme spelled by its own name, handy while developing new formats.
pub(super) fn declare(registry: &PhonemeRegistry) -> FormatDecl {
    FormatDecl {
        description: "Lexconvert internal phoneme names".to_string(),
        entries: registry
            .ids()
            .map(|id| both(registry.name(id), id))
            .collect(),
        ..FormatDecl::default()
    }
}
