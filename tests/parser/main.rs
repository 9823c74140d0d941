//! Integration tests for the pedigree_parser crate.
//!
//! Tests for the line parsing pipeline:
//! - Tokenization
//! - Level classification and context gating
//! - Record building and flushing
//! - Cross-reference resolution
//! - Line reports and logging
//! - Full parser pipeline

mod property_tests;
mod resolver_tests;
