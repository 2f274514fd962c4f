//! Format tables: per-notation spelling tables, their settings, and the
//! rewrite passes and hooks a table declares.

pub mod hooks;
pub mod json;
pub mod rewrite;
pub mod settings;
pub mod table;

pub use hooks::{PostProcess, PreProcess};
pub use settings::{FormatSettings, FormatSettingsBuilder, RewriteRule, SafeToDrop, WordCase};
pub use table::{Direction, Entry, FormatDecl, FormatTable};
