//! Record types and error handling for Pedigree.
//!
//! This crate provides:
//! - [`Individual`] and [`Family`] - The two reconstructed record types
//! - [`PersonName`] - Names with `/surname/` delimiters
//! - [`GedcomDate`] and [`Month`] - `DD MON YYYY` dates
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod date;
pub mod error;
pub mod name;
pub mod record;

pub use date::{GedcomDate, Month};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use name::{PersonName, ResolvedName, UNKNOWN_NAME};
pub use record::{Family, Gender, Individual, SpouseRef};
