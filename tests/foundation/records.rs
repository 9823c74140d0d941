//! Integration tests for individual and family records

use pedigree_foundation::{Family, Gender, Individual, PersonName, ResolvedName, SpouseRef};

// =============================================================================
// Individuals
// =============================================================================

#[test]
fn new_individual_is_blank() {
    let individual = Individual::new("@I1@");
    assert_eq!(individual.id, "@I1@");
    assert!(individual.name.is_none());
    assert_eq!(individual.gender, Gender::Unknown);
    assert!(individual.birth_date.is_none());
    assert!(individual.death_date.is_none());
    assert!(individual.child_of_family.is_none());
    assert!(individual.spouse_of_families.is_empty());
}

#[test]
fn gender_display() {
    assert_eq!(Gender::Male.to_string(), "M");
    assert_eq!(Gender::Female.to_string(), "F");
    assert_eq!(Gender::default(), Gender::Unknown);
}

#[test]
fn individual_surname() {
    let mut individual = Individual::new("@I1@");
    assert_eq!(individual.surname(), None);

    individual.name = PersonName::from_tokens(&["Anakin", "/Skywalker/"]);
    assert_eq!(individual.surname(), Some("Skywalker"));
}

#[test]
fn spouse_membership() {
    let mut individual = Individual::new("@I1@");
    individual.spouse_of_families.insert("@F1@".to_string());
    assert!(individual.is_spouse_in("@F1@"));
    assert!(!individual.is_spouse_in("@F2@"));
}

// =============================================================================
// Families
// =============================================================================

#[test]
fn children_are_a_set() {
    let mut family = Family::new("@F1@");
    assert!(family.add_child("@I2@"));
    assert!(family.add_child("@I1@"));
    assert!(!family.add_child("@I2@"));

    let children: Vec<_> = family.children.iter().map(String::as_str).collect();
    assert_eq!(children, vec!["@I1@", "@I2@"]);
}

#[test]
fn spouse_ids() {
    let mut family = Family::new("@F1@");
    assert_eq!(family.spouses().count(), 0);

    family.husband = Some(SpouseRef::new("@I1@", ResolvedName::Unknown));
    family.wife = Some(SpouseRef::new(
        "@I2@",
        PersonName::from_tokens(&["Padme", "/Amidala/"]).into(),
    ));

    assert_eq!(family.husband_id(), Some("@I1@"));
    assert_eq!(family.wife_id(), Some("@I2@"));
    let ids: Vec<_> = family.spouses().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["@I1@", "@I2@"]);
}
