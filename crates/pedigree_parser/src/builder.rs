//! Incremental record assembly.
//!
//! Holds at most one in-progress individual and one in-progress family. A new
//! `INDI` (or `FAM`) flushes the in-progress record of that kind into the
//! store; [`RecordBuilder::finish`] flushes whatever is left.

use pedigree_foundation::{Family, Individual, ResolvedName};
use pedigree_storage::RecordStore;
use tracing::{debug, trace};

/// Owns the in-progress records and the completed store.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    individual: Option<Individual>,
    family: Option<Family>,
    store: RecordStore,
}

impl RecordBuilder {
    /// Creates a builder with nothing in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flushes the in-progress individual (if any) and starts a new one.
    pub fn start_individual(&mut self, id: &str) {
        self.flush_individual();
        self.individual = Some(Individual::new(id));
    }

    /// Flushes the in-progress family (if any) and starts a new one.
    pub fn start_family(&mut self, id: &str) {
        self.flush_family();
        self.family = Some(Family::new(id));
    }

    /// The in-progress individual.
    pub fn individual_mut(&mut self) -> Option<&mut Individual> {
        self.individual.as_mut()
    }

    /// The in-progress family.
    pub fn family_mut(&mut self) -> Option<&mut Family> {
        self.family.as_mut()
    }

    /// The in-progress individual, read-only.
    #[must_use]
    pub fn current_individual(&self) -> Option<&Individual> {
        self.individual.as_ref()
    }

    /// The in-progress family, read-only.
    #[must_use]
    pub fn current_family(&self) -> Option<&Family> {
        self.family.as_ref()
    }

    /// Completed records so far.
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Looks up an individual's name as of now.
    ///
    /// The in-progress individual is searched first, then completed ones.
    /// Individuals that appear later in the stream are not visible yet, so a
    /// forward reference resolves to [`ResolvedName::Unknown`].
    #[must_use]
    pub fn lookup_name(&self, id: &str) -> ResolvedName {
        let found = self
            .individual
            .as_ref()
            .filter(|individual| individual.id == id)
            .or_else(|| self.store.individual(id));
        let name = ResolvedName::from(found.and_then(|individual| individual.name.clone()));
        if name.is_unknown() {
            debug!(id, "spouse name unknown at lookup");
        }
        name
    }

    /// Flushes both in-progress records and returns the completed store.
    #[must_use]
    pub fn finish(mut self) -> RecordStore {
        self.flush_individual();
        self.flush_family();
        self.store
    }

    fn flush_individual(&mut self) {
        if let Some(individual) = self.individual.take() {
            trace!(id = %individual.id, "individual complete");
            self.store.push_individual(individual);
        }
    }

    fn flush_family(&mut self) {
        if let Some(family) = self.family.take() {
            trace!(id = %family.id, "family complete");
            self.store.push_family(family);
        }
    }
}
