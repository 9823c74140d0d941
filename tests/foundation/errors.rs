//! Integration tests for error handling

use std::path::PathBuf;

use pedigree_foundation::{Error, ErrorContext, ErrorKind};

#[test]
fn io_error_display() {
    let err = Error::io(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"));
    assert!(err.is_io());
    assert_eq!(err.to_string(), "I/O error: no such file");
}

#[test]
fn context_is_appended() {
    let err = Error::invalid_utf8(12).with_context(
        ErrorContext::new()
            .with_source(PathBuf::from("royal.ged"))
            .with_line(12),
    );
    assert_eq!(err.to_string(), "invalid UTF-8 on line 12 (at royal.ged:12)");
}

#[test]
fn context_without_path() {
    let err = Error::invalid_utf8(3).with_context(ErrorContext::new().with_line(3));
    assert_eq!(err.to_string(), "invalid UTF-8 on line 3 (at line 3)");
}

#[test]
fn serialization_is_not_io() {
    let err = Error::serialization("truncated");
    assert!(!err.is_io());
    assert!(matches!(err.kind, ErrorKind::Serialization(ref m) if m == "truncated"));
}
