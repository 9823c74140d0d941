//! Configuration for the parser.

/// Configuration for a [`GedcomParser`](crate::GedcomParser).
///
/// Controls the post-passes run at the end of the stream and whether line
/// reports are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Run the cross-reference pass when the stream ends.
    pub resolve_cross_references: bool,

    /// Keep a [`LineReport`](crate::LineReport) for every non-empty line.
    pub record_line_reports: bool,

    /// Re-resolve spouse names that were unknown when their `HUSB`/`WIFE`
    /// line was read, once every individual is complete.
    ///
    /// Off by default: a spouse defined after the family keeps the unknown
    /// name, matching the order-sensitive behaviour of eager lookup.
    pub deferred_spouse_names: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            resolve_cross_references: true,
            record_line_reports: false,
            deferred_spouse_names: false,
        }
    }
}

impl ParserConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that keeps line reports.
    #[must_use]
    pub fn diagnostic() -> Self {
        Self {
            record_line_reports: true,
            ..Self::default()
        }
    }

    /// Creates a configuration that resolves forward spouse references.
    #[must_use]
    pub fn lenient_names() -> Self {
        Self {
            deferred_spouse_names: true,
            ..Self::default()
        }
    }

    /// Builder method to set the cross-reference pass.
    #[must_use]
    pub fn with_cross_references(mut self, enabled: bool) -> Self {
        self.resolve_cross_references = enabled;
        self
    }

    /// Builder method to set line reporting.
    #[must_use]
    pub fn with_line_reports(mut self, enabled: bool) -> Self {
        self.record_line_reports = enabled;
        self
    }

    /// Builder method to set deferred spouse names.
    #[must_use]
    pub fn with_deferred_spouse_names(mut self, enabled: bool) -> Self {
        self.deferred_spouse_names = enabled;
        self
    }
}
