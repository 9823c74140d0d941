//! Property-based tests for the parser pipeline.

use pedigree_foundation::{Family, Individual};
use pedigree_parser::tokenizer::is_token_char;
use pedigree_parser::{
    CrossReferenceResolver, GedcomParser, LevelClassifier, LineOutcome, LineTokenizer,
    ParseContext, RecordBuilder,
};
use pedigree_storage::RecordStore;
use proptest::prelude::*;

/// Lines that look roughly like the format, with noise.
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-3] (HEAD|TRLR|NOTE|INDI|FAM|@I[0-9]@ INDI|@F[0-9]@ FAM)",
        "1 (NAME|SEX|BIRT|DEAT|MARR|DIV|FAMC|FAMS|HUSB|WIFE|CHIL)( [A-Za-z@/0-9]{1,6}){0,3}",
        "2 DATE( [0-9A-Z]{1,4}){0,4}",
        ".{0,30}",
    ]
}

/// Stores where every child points at a family in 0..families or a missing one.
fn store_strategy() -> impl Strategy<Value = RecordStore> {
    (0usize..6, prop::collection::vec(prop::option::of(0usize..8), 0..12)).prop_map(
        |(families, pointers)| {
            let individuals = pointers
                .into_iter()
                .enumerate()
                .map(|(i, pointer)| {
                    let mut individual = Individual::new(format!("@I{i}@"));
                    individual.child_of_family = pointer.map(|f| format!("@F{f}@"));
                    individual
                })
                .collect();
            let families = (0..families).map(|f| Family::new(format!("@F{f}@"))).collect();
            RecordStore::from_parts(individuals, families)
        },
    )
}

proptest! {
    #[test]
    fn tokens_are_never_empty(line in ".{0,60}") {
        for token in LineTokenizer::tokenize(&line) {
            prop_assert!(!token.is_empty());
            prop_assert!(token.chars().all(is_token_char));
        }
    }

    #[test]
    fn rejection_has_no_side_effects(prefix in prop::collection::vec(line_strategy(), 0..10), line in line_strategy()) {
        let mut context = ParseContext::new();
        let mut builder = RecordBuilder::new();
        for earlier in &prefix {
            LevelClassifier::process(&LineTokenizer::tokenize(earlier), &mut context, &mut builder);
        }

        let context_before = context;
        let individual_before = builder.current_individual().cloned();
        let family_before = builder.current_family().cloned();

        let tokens = LineTokenizer::tokenize(&line);
        if let LineOutcome::Rejected(_) = LevelClassifier::process(&tokens, &mut context, &mut builder) {
            prop_assert_eq!(context, context_before);
            prop_assert_eq!(builder.current_individual().cloned(), individual_before);
            prop_assert_eq!(builder.current_family().cloned(), family_before);
        }
    }

    #[test]
    fn parsing_never_panics(lines in prop::collection::vec(line_strategy(), 0..40)) {
        let result = GedcomParser::default().parse_lines(&lines);
        prop_assert_eq!(result.stats.accepted + result.stats.rejected, result.stats.lines);
    }

    #[test]
    fn resolver_links_every_known_family(mut store in store_strategy()) {
        CrossReferenceResolver::resolve(&mut store);

        for individual in store.individuals() {
            if let Some(family) = individual.child_of_family.as_deref().and_then(|id| store.family(id)) {
                prop_assert!(family.has_child(&individual.id));
            }
        }
    }

    #[test]
    fn resolver_is_idempotent(mut store in store_strategy()) {
        CrossReferenceResolver::resolve(&mut store);
        let once = store.clone();
        let again = CrossReferenceResolver::resolve(&mut store);

        prop_assert_eq!(again.children_linked, 0);
        prop_assert_eq!(store, once);
    }
}
