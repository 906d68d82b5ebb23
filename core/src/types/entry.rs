use nutype::nutype;
use serde::{Deserialize, Serialize};

/// Headword of a dictionary entry. Display casing is preserved.
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Word(String);

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Definition(String);

/// A single word/definition pair.
///
/// Both halves are trimmed and non-empty. Entries never change after load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    word: Word,
    definition: Definition,
}

impl Entry {
    pub fn new(word: Word, definition: Definition) -> Self {
        Self { word, definition }
    }

    /// Builds an entry from raw strings, returning `None` if either side is
    /// blank after trimming.
    pub fn from_parts(word: impl Into<String>, definition: impl Into<String>) -> Option<Self> {
        let word = Word::try_new(word.into()).ok()?;
        let definition = Definition::try_new(definition.into()).ok()?;
        Some(Self::new(word, definition))
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    /// Lowercased word used for every comparison.
    pub fn folded_word(&self) -> String {
        self.word.to_lowercase()
    }
}

#[cfg(test)]
mod tests;
