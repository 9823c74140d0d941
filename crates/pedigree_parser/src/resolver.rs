//! Cross-reference repair, run once the stream is exhausted.
//!
//! During the line pass a child's `FAMC` pointer and its family's `CHIL`
//! list are filled independently, so either may be missing. The resolver
//! restores the back-link: every individual whose child-of family exists is
//! listed among that family's children.
//!
//! Only the child → family direction is repaired. A `CHIL` entry without a
//! matching `FAMC` is kept as is.

use pedigree_foundation::ResolvedName;
use pedigree_storage::RecordStore;
use tracing::debug;

/// A `FAMC` pointer to a family that was never completed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DanglingReference {
    /// The child holding the pointer.
    pub individual_id: String,
    /// The missing family.
    pub family_id: String,
}

/// What a resolver pass changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Children added to family children sets.
    pub children_linked: usize,
    /// Pointers left unresolved.
    pub dangling: Vec<DanglingReference>,
}

/// Repairs child/family back-links over completed records.
pub struct CrossReferenceResolver;

impl CrossReferenceResolver {
    /// Adds each individual to the children of its child-of family.
    ///
    /// Idempotent and independent of record order. Pointers to unknown
    /// families are reported in [`Resolution::dangling`], never as errors.
    pub fn resolve(store: &mut RecordStore) -> Resolution {
        let links: Vec<(String, String)> = store
            .individuals()
            .iter()
            .filter_map(|individual| {
                individual
                    .child_of_family
                    .as_ref()
                    .map(|family_id| (individual.id.clone(), family_id.clone()))
            })
            .collect();

        let mut resolution = Resolution::default();
        for (individual_id, family_id) in links {
            if !store.contains_family(&family_id) {
                debug!(individual = %individual_id, family = %family_id, "dangling FAMC pointer");
                resolution.dangling.push(DanglingReference {
                    individual_id,
                    family_id,
                });
                continue;
            }
            resolution.children_linked += store.link_child(&family_id, &individual_id);
        }
        resolution
    }

    /// Retries spouse names that were unknown when their pointer was read.
    ///
    /// Returns the number of names filled in. Spouses that still cannot be
    /// found keep the unknown sentinel.
    pub fn resolve_spouse_names(store: &mut RecordStore) -> usize {
        let mut updates = Vec::new();
        for (position, family) in store.families().iter().enumerate() {
            for (is_husband, spouse) in [(true, &family.husband), (false, &family.wife)] {
                let Some(spouse) = spouse.as_ref().filter(|s| s.name.is_unknown()) else {
                    continue;
                };
                if let Some(name) = store
                    .individual(&spouse.id)
                    .and_then(|individual| individual.name.clone())
                {
                    updates.push((position, is_husband, name));
                }
            }
        }

        let resolved = updates.len();
        let families = store.families_mut();
        for (position, is_husband, name) in updates {
            let spouse = if is_husband {
                families[position].husband.as_mut()
            } else {
                families[position].wife.as_mut()
            };
            if let Some(spouse) = spouse {
                spouse.name = ResolvedName::Known(name);
            }
        }
        resolved
    }
}
