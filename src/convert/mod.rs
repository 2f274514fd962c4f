//! Converting pronunciations between formats.

pub mod converter;
pub mod dictionary;

pub use converter::Converter;
pub use dictionary::Dictionary;
