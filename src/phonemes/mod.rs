//! Canonical phoneme identities.
//!
//! Every format table maps its spellings onto the ids handed out by a
//! [`PhonemeRegistry`]. The standard English inventory used by the built-in
//! formats is declared in [`Phonemes`].

pub mod inventory;
pub mod registry;

pub use inventory::Phonemes;
pub use registry::{Category, PhonemeId, PhonemeRegistry};
