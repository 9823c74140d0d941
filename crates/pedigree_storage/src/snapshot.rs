//! Record snapshots using `MessagePack`.
//!
//! A snapshot holds the completed individuals and families of a store.
//! Id indices are rebuilt on load.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use pedigree_foundation::{Error, ErrorContext, Result};

use crate::RecordStore;

/// Encodes a store as `MessagePack` bytes with named fields.
///
/// # Errors
///
/// Returns an error if encoding fails.
pub fn to_bytes(store: &RecordStore) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(store).map_err(|e| Error::serialization(e.to_string()))
}

/// Decodes a store from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid snapshot.
pub fn from_bytes(bytes: &[u8]) -> Result<RecordStore> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))
}

/// Writes a snapshot to a file, replacing any existing content.
///
/// # Errors
///
/// Returns an error if the file cannot be written or encoding fails.
pub fn save_to_file<P: AsRef<Path>>(store: &RecordStore, path: P) -> Result<()> {
    let path = path.as_ref();
    let at_path = |e: std::io::Error| Error::io(e).with_context(ErrorContext::new().with_source(path));

    let bytes = to_bytes(store)?;
    let mut writer = BufWriter::new(File::create(path).map_err(at_path)?);
    writer.write_all(&bytes).map_err(at_path)?;
    writer.flush().map_err(at_path)
}

/// Reads a snapshot from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoding fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<RecordStore> {
    let path = path.as_ref();
    let at_path = |e: std::io::Error| Error::io(e).with_context(ErrorContext::new().with_source(path));

    let mut bytes = Vec::new();
    BufReader::new(File::open(path).map_err(at_path)?)
        .read_to_end(&mut bytes)
        .map_err(at_path)?;
    from_bytes(&bytes)
}
