//! CLI command implementations
//!
//! Each command lives in its own submodule.

pub mod generate;

pub use generate::{execute_generate, render_document, GenerateOptions};
