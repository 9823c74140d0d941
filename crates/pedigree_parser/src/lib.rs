//! Line-oriented genealogy parser for Pedigree.
//!
//! Rebuilds individuals and families from level-tagged lines.
//!
//! # Architecture
//!
//! ```text
//! Line → Tokenizer → LevelClassifier → RecordBuilder → RecordStore
//!                          ↑                                ↓
//!                     ParseContext            CrossReferenceResolver
//! ```
//!
//! Each line is classified against the current [`ParseContext`] without
//! side effects. Accepted lines update the context and the in-progress
//! records; rejected lines carry a [`RejectReason`] and change nothing.
//! When the stream ends, trailing records are flushed and the
//! [`CrossReferenceResolver`] restores child back-links.
//!
//! # Example
//!
//! ```
//! use pedigree_parser::GedcomParser;
//!
//! let result = GedcomParser::default().parse_str(
//!     "0 @I1@ INDI\n1 NAME Luke /Skywalker/\n1 FAMC @F1@\n0 @F1@ FAM\n",
//! );
//! assert_eq!(result.individuals().len(), 1);
//! assert!(result.families()[0].has_child("@I1@"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod classifier;
pub mod config;
pub mod context;
pub mod parser;
pub mod report;
pub mod resolver;
pub mod tokenizer;
pub mod vocabulary;

pub use builder::RecordBuilder;
pub use classifier::{Classified, FactValue, LevelClassifier};
pub use config::ParserConfig;
pub use context::ParseContext;
pub use parser::{GedcomParser, ParseResult};
pub use report::{LineOutcome, LineReport, ParseStats, RejectReason};
pub use resolver::{CrossReferenceResolver, DanglingReference, Resolution};
pub use tokenizer::LineTokenizer;
pub use vocabulary::{DetailTag, EventTag, FactTag, Level, RecordKind, RecordTag};
