//! Structure declaration on model types.

use crate::Result;
use super::definition::StructureDefinition;
use super::row::RowStructure;

/// Model types that describe their backing relation.
///
/// Implementors supply the declaration; [`structure`](Self::structure) runs
/// the usual construction validation, so an implementor whose declaration
/// lacks a relation name or fields surfaces the same structure errors as a
/// hand-built definition.
///
/// ```ignore
/// struct Employee;
///
/// impl Structured for Employee {
///     fn definition() -> StructureDefinition {
///         StructureDefinition::new("employee")
///             .field("employee_id", "uuid")
///             .field("name", "varchar")
///             .primary_key(["employee_id"])
///     }
/// }
/// ```
pub trait Structured {
    /// Declares the relation structure for this model type.
    fn definition() -> StructureDefinition;

    /// Builds and validates the declared structure.
    ///
    /// # Errors
    ///
    /// Returns `AmphoraError::Structure` if the declaration is incomplete.
    fn structure() -> Result<RowStructure> {
        Self::definition().build()
    }
}
