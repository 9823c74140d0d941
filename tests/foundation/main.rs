//! Integration tests for Layer 0: Foundation
//!
//! Tests for record types, names, dates, and error handling.

mod errors;
mod names;
mod records;
