pub mod discovery_pipeline;
pub mod static_pipeline;

use crate::core::{RenderResult, Storage};
use crate::utils::error::Result;
use std::path::PathBuf;

/// Writes every artifact in order. The first failure aborts the rest.
pub(crate) fn write_artifacts<S: Storage>(
    storage: &S,
    result: RenderResult,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(result.artifacts.len());
    for artifact in result.artifacts {
        storage.write_file(&artifact.path, artifact.contents.as_bytes())?;
        let location = storage.location(&artifact.path);
        tracing::debug!("{} written to {}", artifact.kind.label(), location.display());
        println!("Successfully generated {}", location.display());
        written.push(location);
    }
    Ok(written)
}
