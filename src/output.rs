//! Persisting the rendered document

use std::path::Path;

use crate::error::{ReadmeError, Result};

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "README.md";

/// Write `content` to `path`, replacing any existing file
///
/// A single attempt; failures are returned as [`ReadmeError::IoFailure`].
pub fn write_document<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, content).map_err(|source| ReadmeError::IoFailure {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "document written");
    Ok(())
}
