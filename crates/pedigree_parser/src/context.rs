//! Parse context tracking.
//!
//! The format has no closing delimiters, so the last accepted level-0 and
//! level-1 tags are the only way to tell which record a fact belongs to and
//! which event a `DATE` trails.

use crate::vocabulary::{EventTag, FactTag, RecordKind, RecordTag};

/// The last accepted record tag and fact tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseContext {
    record: Option<RecordTag>,
    fact: Option<FactTag>,
}

impl ParseContext {
    /// Creates an empty context (no tags seen).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an accepted level-0 line. The fact context is cleared so a
    /// `DATE` can never reach back into the previous record.
    pub fn enter_record(&mut self, tag: RecordTag) {
        self.record = Some(tag);
        self.fact = None;
    }

    /// Records an accepted level-1 line.
    pub fn enter_fact(&mut self, tag: FactTag) {
        self.fact = Some(tag);
    }

    /// The last accepted level-0 tag.
    #[must_use]
    pub fn record(&self) -> Option<RecordTag> {
        self.record
    }

    /// The last accepted level-1 tag.
    #[must_use]
    pub fn fact(&self) -> Option<FactTag> {
        self.fact
    }

    /// The record kind currently open for facts, if any.
    #[must_use]
    pub fn record_kind(&self) -> Option<RecordKind> {
        self.record.and_then(RecordTag::kind)
    }

    /// The event a `DATE` line would attach to.
    #[must_use]
    pub fn open_event(&self) -> Option<EventTag> {
        self.fact.and_then(FactTag::event)
    }

    /// Returns true if a fact with the given tag is allowed here.
    #[must_use]
    pub fn admits(&self, tag: FactTag) -> bool {
        self.record_kind() == Some(tag.scope())
    }

    /// Clears all context.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
