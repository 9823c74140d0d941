//! Main parser pipeline.
//!
//! Orchestrates the flow from raw lines to completed, cross-referenced
//! records. Every parser instance owns its own context and records, so
//! independent parses never share state.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use pedigree_foundation::{Error, ErrorContext, Family, Individual, Result};
use pedigree_storage::RecordStore;
use tracing::{debug, info};

use crate::builder::RecordBuilder;
use crate::classifier::LevelClassifier;
use crate::config::ParserConfig;
use crate::context::ParseContext;
use crate::report::{LineOutcome, LineReport, ParseStats};
use crate::resolver::{CrossReferenceResolver, DanglingReference};
use crate::tokenizer::LineTokenizer;

/// The outcome of a complete parse.
#[derive(Clone, Debug, Default)]
pub struct ParseResult {
    /// Completed individuals and families.
    pub store: RecordStore,
    /// One report per non-empty line, if enabled in the config.
    pub reports: Vec<LineReport>,
    /// Line and resolution counters.
    pub stats: ParseStats,
    /// `FAMC` pointers the cross-reference pass could not resolve.
    pub dangling: Vec<DanglingReference>,
}

impl ParseResult {
    /// Completed individuals, in the order their records ended.
    #[must_use]
    pub fn individuals(&self) -> &[Individual] {
        self.store.individuals()
    }

    /// Completed families, in the order their records ended.
    #[must_use]
    pub fn families(&self) -> &[Family] {
        self.store.families()
    }

    /// Consumes the result, returning both collections.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Individual>, Vec<Family>) {
        self.store.into_parts()
    }
}

/// Rebuilds individuals and families from level-tagged lines.
#[derive(Debug, Default)]
pub struct GedcomParser {
    config: ParserConfig,
    context: ParseContext,
    builder: RecordBuilder,
    reports: Vec<LineReport>,
    stats: ParseStats,
    line_number: usize,
}

impl GedcomParser {
    /// Creates a fresh parser with the given configuration.
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// The current context.
    #[must_use]
    pub fn context(&self) -> &ParseContext {
        &self.context
    }

    /// The records built so far, in progress and completed.
    #[must_use]
    pub fn builder(&self) -> &RecordBuilder {
        &self.builder
    }

    /// Feeds one line (without its trailing newline).
    ///
    /// Returns `None` for lines with no tokens; those are skipped without
    /// being classified.
    pub fn parse_line(&mut self, line: &str) -> Option<LineOutcome> {
        self.line_number += 1;
        let tokens = LineTokenizer::tokenize(line);
        if tokens.is_empty() {
            return None;
        }

        let outcome = LevelClassifier::process(&tokens, &mut self.context, &mut self.builder);
        if let LineOutcome::Rejected(reason) = outcome {
            debug!(line = self.line_number, %reason, text = line, "line rejected");
        }

        self.stats.record(outcome);
        if self.config.record_line_reports {
            self.reports
                .push(LineReport::new(self.line_number, &tokens, outcome));
        }
        Some(outcome)
    }

    /// Ends the stream: flushes trailing records and runs the post-passes
    /// selected by the configuration.
    #[must_use]
    pub fn finish(self) -> ParseResult {
        let mut store = self.builder.finish();
        let mut stats = self.stats;
        let mut dangling = Vec::new();

        if self.config.resolve_cross_references {
            let resolution = CrossReferenceResolver::resolve(&mut store);
            stats.children_linked = resolution.children_linked;
            stats.dangling_references = resolution.dangling.len();
            dangling = resolution.dangling;
        }
        if self.config.deferred_spouse_names {
            let resolved = CrossReferenceResolver::resolve_spouse_names(&mut store);
            debug!(resolved, "deferred spouse names");
        }

        info!(
            individuals = store.individual_count(),
            families = store.family_count(),
            accepted = stats.accepted,
            rejected = stats.rejected,
            "parse complete"
        );

        ParseResult {
            store,
            reports: self.reports,
            stats,
            dangling,
        }
    }

    /// Parses every line of `text`.
    #[must_use]
    pub fn parse_str(self, text: &str) -> ParseResult {
        self.parse_lines(text.lines())
    }

    /// Parses a sequence of lines.
    #[must_use]
    pub fn parse_lines<I, S>(mut self, lines: I) -> ParseResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.parse_line(line.as_ref());
        }
        self.finish()
    }

    /// Parses everything a reader yields.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader fails or yields invalid UTF-8. The
    /// error context carries the failing line number.
    pub fn parse_reader<R: BufRead>(mut self, reader: R) -> Result<ParseResult> {
        for line in reader.lines() {
            let line_number = self.line_number + 1;
            let line = line.map_err(|err| {
                let err = if err.kind() == std::io::ErrorKind::InvalidData {
                    Error::invalid_utf8(line_number)
                } else {
                    Error::io(err)
                };
                err.with_context(ErrorContext::new().with_line(line_number))
            })?;
            self.parse_line(&line);
        }
        Ok(self.finish())
    }

    /// Opens and parses a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read. The error
    /// context carries the path.
    pub fn parse_file(self, path: impl AsRef<Path>) -> Result<ParseResult> {
        let path = path.as_ref();
        let with_source = |err: Error| {
            let context = err.context.clone().unwrap_or_default().with_source(path);
            err.with_context(context)
        };

        let file = File::open(path).map_err(|err| with_source(Error::io(err)))?;
        self.parse_reader(BufReader::new(file)).map_err(with_source)
    }
}
