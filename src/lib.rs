//! Pedigree - Genealogy record parser
//!
//! This crate re-exports all layers of the Pedigree system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: pedigree_parser     — Tokenizer, classifier, record builder, resolver
//! Layer 1: pedigree_storage    — Completed records, relationship queries, snapshots
//! Layer 0: pedigree_foundation — Record types (Individual, Family, dates, names, Error)
//! ```

pub use pedigree_foundation as foundation;
pub use pedigree_parser as parser;
pub use pedigree_storage as storage;

pub use pedigree_foundation::{Error, Family, Individual, Result};
pub use pedigree_parser::{GedcomParser, ParseResult, ParserConfig};
