//! Integration tests for `MessagePack` snapshots

use pedigree_foundation::{Family, Individual, PersonName};
use pedigree_storage::RecordStore;
use pedigree_storage::snapshot::{from_bytes, to_bytes};

#[test]
fn snapshot_rebuilds_indices() {
    let mut han = Individual::new("@I1@");
    han.name = PersonName::from_tokens(&["Han", "/Solo/"]);
    let store = RecordStore::from_parts(vec![han], vec![Family::new("@F1@")]);

    let restored = from_bytes(&to_bytes(&store).unwrap()).unwrap();
    assert_eq!(restored.individual("@I1@").unwrap().surname(), Some("Solo"));
    assert!(restored.contains_family("@F1@"));
}

#[test]
fn empty_store_snapshot() {
    let restored = from_bytes(&to_bytes(&RecordStore::new()).unwrap()).unwrap();
    assert!(restored.is_empty());
}
