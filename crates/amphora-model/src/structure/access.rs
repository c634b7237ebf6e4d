//! Map-like field access over a structure.

use crate::{AmphoraError, Result};
use super::row::RowStructure;

/// Map-like access to a structure's field set.
///
/// Typed read, existence check, and typed write all behave as they would on
/// an indexed container. Removal does not:
/// [`remove_field`](Self::remove_field) always fails. A structure's field
/// set only grows, and dropping a column is a schema migration concern, not
/// a structure mutation; the operation exists so that the prohibition is an
/// explicit error rather than a silent no-op.
pub trait FieldAccess {
    /// Returns the database type of a field.
    ///
    /// # Errors
    ///
    /// Returns `AmphoraError::InvalidArgument` for an empty name and
    /// `AmphoraError::Structure` for an undefined field.
    fn get_field(&self, name: &str) -> Result<&str>;

    /// Returns whether `name` is a defined field. Never fails.
    fn contains_field(&self, name: &str) -> bool;

    /// Adds a field, or overwrites its type if already defined.
    ///
    /// # Errors
    ///
    /// Returns `AmphoraError::InvalidArgument` if `name` or `data_type` is
    /// empty.
    fn set_field(&mut self, name: &str, data_type: &str) -> Result<()>;

    /// Always fails: structure fields cannot be removed.
    ///
    /// # Errors
    ///
    /// Returns `AmphoraError::Structure` for every input, defined or not.
    fn remove_field(&mut self, name: &str) -> Result<()>;
}

impl FieldAccess for RowStructure {
    fn get_field(&self, name: &str) -> Result<&str> {
        self.type_for(name)
    }

    fn contains_field(&self, name: &str) -> bool {
        self.has_field(name)
    }

    fn set_field(&mut self, name: &str, data_type: &str) -> Result<()> {
        self.add_field(name, data_type).map(|_| ())
    }

    fn remove_field(&mut self, name: &str) -> Result<()> {
        Err(AmphoraError::Structure(format!(
            "Cannot remove a structure field ('{}').",
            name
        )))
    }
}
