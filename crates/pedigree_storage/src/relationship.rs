//! Relationship queries over stored records.
//!
//! Families connect individuals with two kinds of edges: spouse pointers
//! (`HUSB`/`WIFE`) and child membership (`CHIL`, repaired from `FAMC`).
//! These queries walk those edges in both directions. Dangling ids are
//! skipped, never reported.

use std::collections::BTreeSet;

use pedigree_foundation::{Family, Individual};

use crate::store::RecordStore;

impl RecordStore {
    /// Individuals listed as children of the family.
    ///
    /// Child ids with no stored individual are skipped.
    #[must_use]
    pub fn children_of(&self, family_id: &str) -> Vec<&Individual> {
        self.family(family_id)
            .map(|family| {
                family
                    .children
                    .iter()
                    .filter_map(|id| self.individual(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Families in which the individual appears as husband or wife.
    #[must_use]
    pub fn spouse_families_of(&self, individual_id: &str) -> Vec<&Family> {
        self.families()
            .iter()
            .filter(|family| family.spouses().any(|s| s.id == individual_id))
            .collect()
    }

    /// The husband and wife of the family the individual is a child of.
    #[must_use]
    pub fn parents_of(&self, individual_id: &str) -> Vec<&Individual> {
        let Some(family) = self
            .individual(individual_id)
            .and_then(|i| i.child_of_family.as_deref())
            .and_then(|family_id| self.family(family_id))
        else {
            return Vec::new();
        };
        family
            .spouses()
            .filter_map(|spouse| self.individual(&spouse.id))
            .collect()
    }

    /// Ids of everyone the individual has been married to.
    #[must_use]
    pub fn spouses_of(&self, individual_id: &str) -> BTreeSet<&str> {
        let mut spouses = BTreeSet::new();
        for family in self.spouse_families_of(individual_id) {
            match (family.husband_id(), family.wife_id()) {
                (Some(husband), Some(wife)) if husband == individual_id => {
                    spouses.insert(wife);
                }
                (Some(husband), Some(wife)) if wife == individual_id => {
                    spouses.insert(husband);
                }
                _ => {}
            }
        }
        spouses
    }

    /// Ids of the children of every family the individual is a spouse in.
    #[must_use]
    pub fn offspring_of(&self, individual_id: &str) -> BTreeSet<&str> {
        self.spouse_families_of(individual_id)
            .into_iter()
            .flat_map(|family| family.children.iter().map(String::as_str))
            .collect()
    }

    /// Ids of all transitive offspring.
    ///
    /// Terminates on cyclic data: each individual is expanded at most once,
    /// and the starting individual is never reported as its own descendant.
    #[must_use]
    pub fn descendants_of(&self, individual_id: &str) -> BTreeSet<&str> {
        let mut descendants = BTreeSet::new();
        let mut pending: Vec<&str> = self.offspring_of(individual_id).into_iter().collect();

        while let Some(id) = pending.pop() {
            if id == individual_id || !descendants.insert(id) {
                continue;
            }
            pending.extend(self.offspring_of(id));
        }
        descendants
    }
}
