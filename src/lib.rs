#![forbid(unsafe_code)]

//! # readmegen
//!
//! Interactive README generator: asks a fixed sequence of questions and
//! renders the answers into a formatted `README.md`.
//!
//! ## Pipeline
//!
//! - **Collect**: [`Collector`] walks the [`QUESTIONS`] table through a
//!   [`Prompter`] (the terminal by default), or answers are loaded from a file
//! - **Render**: [`render`] maps an [`AnswerRecord`] to markdown, purely
//! - **Write**: [`write_document`] overwrites the output file
//!
//! ## Example
//!
//! ```rust
//! use readmegen::{render, AnswerRecord, License};
//!
//! let record = AnswerRecord {
//!     title: "Foo".into(),
//!     license: License::Mit,
//!     ..Default::default()
//! };
//!
//! let readme = render(&record);
//! assert!(readme.starts_with("# Foo\n"));
//! ```

pub mod answers;
pub mod collect;
pub mod commands;
pub mod error;
pub mod output;
pub mod questions;
pub mod render;

// Re-exports
pub use answers::{AnswerRecord, License};
pub use collect::{collect_interactive, Collector, Prompter, TerminalPrompter};
pub use commands::{execute_generate, GenerateOptions};
pub use error::{ReadmeError, Result};
pub use output::{write_document, DEFAULT_OUTPUT};
pub use questions::{Question, QuestionKind, QUESTIONS};
pub use render::{render, render_with_template, Section, SectionId, SECTIONS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
