//! Integration tests for Layer 1: Storage
//!
//! Tests for the record store, relationship queries, and snapshots.

#[cfg(feature = "serde")]
mod snapshots;
