//! Row structure and schema model layer for the amphora PostgreSQL toolkit.
//!
//! This crate provides the schema description that the rest of the toolkit
//! builds on: a `RowStructure` describes one database relation as an ordered
//! set of named field definitions plus an optional primary key. Adjacent
//! layers (query building, persistence, fixtures) consume the structure to
//! derive column lists and key predicates; none of them are part of this
//! crate.
//!
//! # Architecture
//!
//! ```text
//! Model layer (persistence, query building)
//!           |
//!   RowStructure / Structured (crates/amphora-model)
//!           |
//!   AmphoraError / Result (crates/amphora-common)
//! ```
//!
//! # Key Features
//!
//! - **Validated construction**: a structure is built from an explicit
//!   [`StructureDefinition`] and is guaranteed to carry a relation name and
//!   at least one field once it exists.
//! - **Ordered field registry**: field definitions keep insertion order, so
//!   enumeration is stable and meaningful for column-list generation.
//! - **Structure inheritance**: one structure can merge another's field set
//!   without touching its own relation name or primary key.
//! - **Guarded field access**: the [`FieldAccess`] trait exposes read,
//!   existence, and write operations over the field map, while field removal
//!   is a deliberate, always-failing operation.
//!
//! # Usage Examples
//!
//! ## Declaring and extending a structure
//!
//! ```ignore
//! use amphora_model::{RowStructure, StructureDefinition};
//!
//! # fn example() -> amphora_model::Result<()> {
//! let mut employee = StructureDefinition::new("employee")
//!     .field("employee_id", "uuid")
//!     .field("name", "varchar")
//!     .primary_key(["employee_id"])
//!     .build()?;
//!
//! let audited = StructureDefinition::new("audited")
//!     .field("created_at", "timestamptz")
//!     .field("updated_at", "timestamptz")
//!     .build()?;
//!
//! // employee now also carries the audit columns, in audited's order.
//! employee.inherits(&audited);
//! assert!(employee.has_field("updated_at"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Declaring a structure on a model type
//!
//! ```ignore
//! use amphora_model::{Structured, StructureDefinition};
//!
//! struct Employee;
//!
//! impl Structured for Employee {
//!     fn definition() -> StructureDefinition {
//!         StructureDefinition::new("employee")
//!             .field("employee_id", "uuid")
//!             .field("name", "varchar")
//!             .primary_key(["employee_id"])
//!     }
//! }
//!
//! let structure = Employee::structure().expect("structure is well formed");
//! assert_eq!(structure.relation_name(), "employee");
//! ```
//!
//! # Thread Safety
//!
//! A `RowStructure` is a plain owned value with no interior mutability.
//! Mutation requires `&mut`; shared references may be read concurrently
//! once a structure is no longer being mutated.

/// Row structure declaration, validation, and composition.
///
/// Provides the `RowStructure` registry, the `StructureDefinition`
/// configuration it is built from, the `FieldAccess` capability trait, and
/// the `Structured` trait for model types that declare their own structure.
pub mod structure;

pub use structure::{
    FieldAccess, FieldDefinition, RowStructure, Structured, StructureDefinition,
};

pub use amphora_common::{AmphoraError, Result};
