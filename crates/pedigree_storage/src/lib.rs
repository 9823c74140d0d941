//! Completed-record storage and relationship queries for Pedigree.
//!
//! This crate provides:
//! - [`RecordStore`] - Ordered individual and family collections with id indices
//! - Relationship queries over the stored records (children, parents,
//!   spouses, descendants)
//! - `MessagePack` snapshots of a store (with the `serde` feature)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod relationship;
#[cfg(feature = "serde")]
pub mod snapshot;
pub mod store;

pub use store::RecordStore;
