use crate::core::Pipeline;
use crate::utils::error::Result;
use std::path::PathBuf;

pub struct GeneratorEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> GeneratorEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order. Any stage error aborts the run.
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        tracing::info!("Starting {} generator", self.pipeline.name());

        let endpoints = self.pipeline.extract()?;
        tracing::debug!("Extracted {} endpoints", endpoints.len());

        let rendered = self.pipeline.transform(endpoints)?;
        tracing::debug!(
            "Rendered {} artifacts with {} monitored endpoints",
            rendered.artifacts.len(),
            rendered.endpoints.len()
        );

        let written = self.pipeline.load(rendered)?;
        tracing::info!("Wrote {} files", written.len());

        Ok(written)
    }
}
