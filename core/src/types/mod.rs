pub(crate) mod entry;
pub use entry::{Definition, DefinitionError, Entry, Word, WordError};
