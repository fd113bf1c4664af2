//! Custom assertions for test verification

use gomodel_ir::{ErrorKind, ModelError, ModelQuery, Struct};

/// Assert an error of the given kind
pub fn assert_error_kind<T: std::fmt::Debug>(result: Result<T, ModelError>, expected: ErrorKind) -> ModelError {
    match result {
        Ok(value) => panic!("Expected {expected} error, got Ok({value:?})"),
        Err(err) => {
            assert_eq!(err.kind, expected, "Unexpected error: {err}");
            err
        }
    }
}

/// Assert field names of a struct, in order
pub fn assert_field_names(s: &Struct, expected: &[&str]) {
    let names: Vec<&str> = s.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, expected, "Unexpected fields of {}", s.name);
}

/// Assert the method names attached to a struct, in order
pub fn assert_methods_of(query: &ModelQuery<'_>, s: &Struct, expected: &[&str]) {
    let names: Vec<&str> = query.methods_of(s).iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, expected, "Unexpected methods of {}", s.name);
}
