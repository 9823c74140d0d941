//! Completed-record storage.
//!
//! Records are kept in the order they were completed. Each kind has an id
//! index mapping an id to every position holding it, so repeated ids are
//! preserved while lookups return the first occurrence.

use std::collections::HashMap;

use pedigree_foundation::{Family, Individual};

#[cfg(feature = "serde")]
mod serde_support {
    use super::RecordStore;
    use pedigree_foundation::{Family, Individual};
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for RecordStore {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            // Indices are derived, only the collections are written
            let mut state = serializer.serialize_struct("RecordStore", 2)?;
            state.serialize_field("individuals", &self.individuals)?;
            state.serialize_field("families", &self.families)?;
            state.end()
        }
    }

    impl<'de> Deserialize<'de> for RecordStore {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            #[derive(Deserialize)]
            struct Parts {
                individuals: Vec<Individual>,
                families: Vec<Family>,
            }

            let parts = Parts::deserialize(deserializer)?;
            Ok(RecordStore::from_parts(parts.individuals, parts.families))
        }
    }
}

/// Ordered collections of completed individuals and families.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordStore {
    individuals: Vec<Individual>,
    families: Vec<Family>,
    individual_index: HashMap<String, Vec<usize>>,
    family_index: HashMap<String, Vec<usize>>,
}

impl RecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing collections, preserving their order.
    #[must_use]
    pub fn from_parts(individuals: Vec<Individual>, families: Vec<Family>) -> Self {
        let mut store = Self::new();
        for individual in individuals {
            store.push_individual(individual);
        }
        for family in families {
            store.push_family(family);
        }
        store
    }

    /// Appends a completed individual.
    pub fn push_individual(&mut self, individual: Individual) {
        let position = self.individuals.len();
        self.individual_index
            .entry(individual.id.clone())
            .or_default()
            .push(position);
        self.individuals.push(individual);
    }

    /// Appends a completed family.
    pub fn push_family(&mut self, family: Family) {
        let position = self.families.len();
        self.family_index
            .entry(family.id.clone())
            .or_default()
            .push(position);
        self.families.push(family);
    }

    /// All individuals, in completion order.
    #[must_use]
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// All families, in completion order.
    #[must_use]
    pub fn families(&self) -> &[Family] {
        &self.families
    }

    /// Mutable access to all families, in completion order.
    ///
    /// Ids must not be changed through this slice; the index is not rebuilt.
    pub fn families_mut(&mut self) -> &mut [Family] {
        &mut self.families
    }

    /// Looks up the first individual with the given id.
    #[must_use]
    pub fn individual(&self, id: &str) -> Option<&Individual> {
        let position = *self.individual_index.get(id)?.first()?;
        self.individuals.get(position)
    }

    /// Looks up the first family with the given id.
    #[must_use]
    pub fn family(&self, id: &str) -> Option<&Family> {
        let position = *self.family_index.get(id)?.first()?;
        self.families.get(position)
    }

    /// Mutable access to the first family with the given id.
    pub fn family_mut(&mut self, id: &str) -> Option<&mut Family> {
        let position = *self.family_index.get(id)?.first()?;
        self.families.get_mut(position)
    }

    /// Mutable access to the first individual with the given id.
    pub fn individual_mut(&mut self, id: &str) -> Option<&mut Individual> {
        let position = *self.individual_index.get(id)?.first()?;
        self.individuals.get_mut(position)
    }

    /// Adds `child_id` to every family carrying `family_id`.
    ///
    /// Returns the number of families that gained the child; 0 if the
    /// family is unknown or already lists the child.
    pub fn link_child(&mut self, family_id: &str, child_id: &str) -> usize {
        let Some(positions) = self.family_index.get(family_id) else {
            return 0;
        };
        let mut linked = 0;
        for &position in positions {
            if let Some(family) = self.families.get_mut(position) {
                if family.add_child(child_id) {
                    linked += 1;
                }
            }
        }
        linked
    }

    /// Returns true if a family with the given id is stored.
    #[must_use]
    pub fn contains_family(&self, id: &str) -> bool {
        self.family_index.contains_key(id)
    }

    /// Returns true if an individual with the given id is stored.
    #[must_use]
    pub fn contains_individual(&self, id: &str) -> bool {
        self.individual_index.contains_key(id)
    }

    /// Number of individuals.
    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.individuals.len()
    }

    /// Number of families.
    #[must_use]
    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    /// Returns true if neither collection holds a record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty() && self.families.is_empty()
    }

    /// Consumes the store, returning both collections.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Individual>, Vec<Family>) {
        (self.individuals, self.families)
    }
}
