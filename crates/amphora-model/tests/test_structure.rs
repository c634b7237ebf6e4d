//! Integration tests for structure declaration and composition.
//!
//! These tests exercise the public API the way a model layer would: declare
//! structures on model types, compose shared column sets through
//! inheritance, and read back the schema to derive column lists and key
//! predicates.

use amphora_model::{
    AmphoraError, FieldAccess, Result, RowStructure, Structured, StructureDefinition,
};

/// Shared audit columns, mixed into every audited relation.
struct AuditTrail;

impl Structured for AuditTrail {
    fn definition() -> StructureDefinition {
        StructureDefinition::new("audit_trail")
            .field("created_at", "timestamptz")
            .field("updated_at", "timestamptz")
    }
}

struct Employee;

impl Structured for Employee {
    fn definition() -> StructureDefinition {
        StructureDefinition::new("employee")
            .field("employee_id", "uuid")
            .field("name", "varchar")
            .field("email", "varchar")
            .primary_key(["employee_id"])
    }
}

fn audited_employee() -> Result<RowStructure> {
    let mut structure = Employee::structure()?;
    structure.inherits(&AuditTrail::structure()?);
    Ok(structure)
}

#[test]
fn test_declared_structure_round_trip() {
    let structure = Employee::structure().unwrap();

    assert_eq!(structure.relation_name(), "employee");
    assert_eq!(structure.primary_key(), ["employee_id"]);
    assert_eq!(
        structure.field_names(),
        vec!["employee_id", "name", "email"]
    );
    assert_eq!(structure.type_for("employee_id").unwrap(), "uuid");
}

#[test]
fn test_composed_structure_keeps_identity() {
    let structure = audited_employee().unwrap();

    // Inherited columns land after the declared ones, in the parent's
    // order; identity of the inheriting relation is untouched.
    assert_eq!(
        structure.field_names(),
        vec!["employee_id", "name", "email", "created_at", "updated_at"]
    );
    assert_eq!(structure.relation_name(), "employee");
    assert_eq!(structure.primary_key(), ["employee_id"]);
}

#[test]
fn test_column_list_from_definition() {
    let structure = audited_employee().unwrap();

    // The pattern the query layer uses to build a projection.
    let columns = structure
        .definition()
        .iter()
        .map(|field| format!("\"{}\"", field.name))
        .collect::<Vec<_>>()
        .join(", ");

    assert_eq!(
        columns,
        "\"employee_id\", \"name\", \"email\", \"created_at\", \"updated_at\""
    );
}

#[test]
fn test_structure_evolves_additively() {
    let mut structure = Employee::structure().unwrap();

    structure
        .add_field("department", "varchar")
        .unwrap()
        .add_field("active", "bool")
        .unwrap();

    assert!(structure.has_field("department"));
    assert!(structure.has_field("active"));

    // Redeclaring an existing column keeps its position.
    structure.add_field("name", "text").unwrap();
    assert_eq!(structure.field_names()[1], "name");
    assert_eq!(structure.type_for("name").unwrap(), "text");
}

#[test]
fn test_field_removal_is_refused() {
    let mut structure = Employee::structure().unwrap();

    let err = structure.remove_field("email").unwrap_err();
    assert!(matches!(err, AmphoraError::Structure(_)));
    assert!(err.to_string().contains("Cannot remove a structure field"));

    // The refused removal leaves the schema intact.
    assert_eq!(
        structure.field_names(),
        vec!["employee_id", "name", "email"]
    );
}

#[test]
fn test_definition_as_json_config() {
    // Structures can be declared in configuration instead of code.
    let json = r#"{
        "relation_name": "department",
        "fields": [
            {"name": "department_id", "data_type": "int4"},
            {"name": "label", "data_type": "varchar"}
        ],
        "primary_key": ["department_id"]
    }"#;

    let structure = StructureDefinition::from_json(json)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(structure.relation_name(), "department");
    assert_eq!(structure.field_names(), vec!["department_id", "label"]);
    assert_eq!(structure.primary_key(), ["department_id"]);
}

#[test]
fn test_incomplete_config_is_rejected() {
    let json = r#"{"relation_name": "department", "fields": []}"#;

    let err = StructureDefinition::from_json(json)
        .unwrap()
        .build()
        .unwrap_err();

    assert!(err.to_string().contains("field definition"));
}
