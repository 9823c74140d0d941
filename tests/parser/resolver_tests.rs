//! Cross-reference resolver tests.
//!
//! Tests back-link repair, idempotence, and dangling references.

use pedigree_parser::{CrossReferenceResolver, DanglingReference, GedcomParser, ParserConfig};

fn unresolved(text: &str) -> pedigree_storage::RecordStore {
    GedcomParser::new(ParserConfig::new().with_cross_references(false))
        .parse_str(text)
        .store
}

#[test]
fn order_does_not_matter() {
    let family_first = unresolved("0 @F1@ FAM\n0 @I1@ INDI\n1 FAMC @F1@\n");
    let child_first = unresolved("0 @I1@ INDI\n1 FAMC @F1@\n0 @F1@ FAM\n");

    for mut store in [family_first, child_first] {
        CrossReferenceResolver::resolve(&mut store);
        assert!(store.family("@F1@").unwrap().has_child("@I1@"));
    }
}

#[test]
fn resolving_twice_changes_nothing() {
    let mut store = unresolved(
        "0 @I1@ INDI\n1 FAMC @F1@\n0 @I2@ INDI\n1 FAMC @F1@\n0 @F1@ FAM\n1 CHIL @I1@\n",
    );

    let first = CrossReferenceResolver::resolve(&mut store);
    let snapshot = store.clone();
    let second = CrossReferenceResolver::resolve(&mut store);

    assert_eq!(first.children_linked, 1);
    assert_eq!(second.children_linked, 0);
    assert_eq!(store, snapshot);
}

#[test]
fn dangling_pointers_are_collected() {
    let result = GedcomParser::default().parse_str("0 @I1@ INDI\n1 FAMC @F404@\n0 @F1@ FAM\n");

    assert_eq!(
        result.dangling,
        vec![DanglingReference {
            individual_id: "@I1@".to_string(),
            family_id: "@F404@".to_string(),
        }]
    );
    assert_eq!(result.stats.dangling_references, 1);
    assert!(result.families()[0].children.is_empty());
    assert_eq!(
        result.individuals()[0].child_of_family.as_deref(),
        Some("@F404@")
    );
}

#[test]
fn chil_without_famc_is_kept() {
    let result = GedcomParser::default().parse_str("0 @F1@ FAM\n1 CHIL @I7@\n0 @I7@ INDI\n");
    assert!(result.families()[0].has_child("@I7@"));
}

#[test]
fn last_famc_decides_the_family() {
    let result = GedcomParser::default()
        .parse_str("0 @I1@ INDI\n1 FAMC @F1@\n1 FAMC @F2@\n0 @F1@ FAM\n0 @F2@ FAM\n");

    assert!(!result.store.family("@F1@").unwrap().has_child("@I1@"));
    assert!(result.store.family("@F2@").unwrap().has_child("@I1@"));
}

#[test]
fn deferred_names_leave_missing_spouses_unknown() {
    let mut store = unresolved("0 @F1@ FAM\n1 HUSB @I1@\n1 WIFE @I2@\n0 @I1@ INDI\n1 NAME Han /Solo/\n");

    assert_eq!(CrossReferenceResolver::resolve_spouse_names(&mut store), 1);
    assert_eq!(CrossReferenceResolver::resolve_spouse_names(&mut store), 0);

    let family = store.family("@F1@").unwrap();
    assert!(family.wife.as_ref().unwrap().name.is_unknown());
}
