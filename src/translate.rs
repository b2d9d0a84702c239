//! Display-time translation of bank text.

use std::collections::HashMap;
use std::path::Path;

use crate::data::{LoadError, read_json};

/// Exact-match lookup from bank text to display text.
///
/// Unknown strings come back trimmed but otherwise untouched, so a bank with
/// no table entry for a question is still playable in either language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translator {
    table: HashMap<String, String>,
}

impl Translator {
    pub fn new(table: HashMap<String, String>) -> Self {
        let table = table
            .into_iter()
            .map(|(source, target)| (source.trim().to_string(), target))
            .collect();
        Self { table }
    }

    /// Arabic to English table for the bundled question bank.
    pub fn builtin() -> Self {
        Self::new(
            crate::data::BUILTIN_TRANSLATIONS
                .iter()
                .map(|&(source, target)| (source.to_string(), target.to_string()))
                .collect(),
        )
    }

    /// Load a `{ "source": "target" }` JSON object.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let table: HashMap<String, String> = read_json(path.as_ref())?;
        Ok(Self::new(table))
    }

    pub fn translate<'a>(&'a self, text: &'a str) -> &'a str {
        let text = text.trim();
        self.table.get(text).map_or(text, String::as_str)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::builtin()
    }
}
