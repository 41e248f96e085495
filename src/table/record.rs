//! The record abstraction the table is generic over.

use std::fmt::Debug;

use crate::error::FieldError;

/// A row of caller-owned data.
///
/// The table never assumes anything about a record beyond its identity and
/// the fields named by the column configuration. Field values travel as
/// strings, the same form the editors work in.
pub trait Record: Clone + 'static {
    /// Stable identity used to match edited and deleted rows.
    type Id: Clone + PartialEq + Debug + Send + 'static;

    /// The identity of this record.
    fn id(&self) -> Self::Id;

    /// Read a field by key. Unknown keys return `None`.
    fn field(&self, key: &str) -> Option<String>;

    /// Write a field by key from its string form.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::Missing` for unknown keys and
    /// `FieldError::Invalid` when the value does not convert.
    fn set_field(&mut self, key: &str, value: &str) -> Result<(), FieldError>;
}
