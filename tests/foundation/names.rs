//! Integration tests for personal names
//!
//! Tests name parsing, surname extraction, and the unknown sentinel.

use pedigree_foundation::{PersonName, ResolvedName, UNKNOWN_NAME};

#[test]
fn display_drops_delimiters() {
    let name = PersonName::from_tokens(&["Luke", "/Skywalker/"]).unwrap();
    assert_eq!(name.to_string(), "Luke Skywalker");
    assert_eq!(name.raw(), "Luke /Skywalker/");
}

#[test]
fn surname_and_given() {
    let name = PersonName::from_tokens(&["Padme", "Naberrie", "/Amidala/"]).unwrap();
    assert_eq!(name.surname(), "Amidala");
    assert_eq!(name.given(), "Padme Naberrie");
}

#[test]
fn single_token_is_rejected() {
    assert!(PersonName::from_tokens(&["/Yoda/"]).is_none());
    assert!(PersonName::from_tokens::<&str>(&[]).is_none());
}

#[test]
fn surname_must_be_delimited() {
    assert!(PersonName::from_tokens(&["John", "Doe"]).is_none());
    assert!(PersonName::from_tokens(&["John", "/Doe"]).is_none());
    assert!(PersonName::from_tokens(&["John", "/"]).is_none());
}

#[test]
fn owned_tokens_are_accepted() {
    let tokens = vec!["Han".to_string(), "/Solo/".to_string()];
    let name = PersonName::from_tokens(&tokens).unwrap();
    assert_eq!(name.surname(), "Solo");
}

#[test]
fn unknown_sentinel_display() {
    assert_eq!(ResolvedName::Unknown.to_string(), UNKNOWN_NAME);
    assert_eq!(UNKNOWN_NAME, "NULL_NAME");
}

#[test]
fn resolved_from_option() {
    let name = PersonName::from_tokens(&["Leia", "/Organa/"]);
    let resolved = ResolvedName::from(name.clone());
    assert_eq!(resolved.known(), name.as_ref());
    assert_eq!(resolved.to_string(), "Leia Organa");

    assert!(ResolvedName::from(None).is_unknown());
}
