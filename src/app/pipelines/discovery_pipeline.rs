use crate::app::pipelines::write_artifacts;
use crate::core::discovery::find_compose_files;
use crate::core::labels::parse_compose_file;
use crate::core::monitor::{sort_and_dedup, MonitorConfig};
use crate::core::{
    Artifact, ArtifactKind, ConfigProvider, Endpoint, Pipeline, RenderResult, Storage,
};
use crate::utils::error::Result;
use std::path::PathBuf;

/// Monitor config built from Traefik labels found under a directory tree.
pub struct DiscoveryPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) root: PathBuf,
}

impl<S: Storage, C: ConfigProvider> DiscoveryPipeline<S, C> {
    pub fn new(storage: S, config: C, root: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            config,
            root: root.into(),
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for DiscoveryPipeline<S, C> {
    fn name(&self) -> &str {
        "discovery"
    }

    /// All endpoints from all compose files, unsorted and possibly duplicated.
    fn extract(&self) -> Result<Vec<Endpoint>> {
        println!(
            "Scanning for docker-compose.yml files in {}...",
            self.root.display()
        );
        let compose_files = find_compose_files(&self.root)?;
        tracing::debug!("Found {} compose files", compose_files.len());

        let endpoints: Vec<Endpoint> = compose_files
            .iter()
            .flat_map(|path| parse_compose_file(path))
            .collect();

        println!("Found {} services with Traefik enabled.", endpoints.len());
        Ok(endpoints)
    }

    fn transform(&self, endpoints: Vec<Endpoint>) -> Result<RenderResult> {
        println!(
            "Generating {} for domain: {}",
            ArtifactKind::MonitorConfig.label(),
            self.config.domain()
        );

        let endpoints = sort_and_dedup(endpoints);
        let monitor = MonitorConfig::new(self.config.monitor(), &endpoints);

        Ok(RenderResult {
            artifacts: vec![Artifact {
                kind: ArtifactKind::MonitorConfig,
                path: self.config.output().discovery_monitor_path.clone(),
                contents: monitor.render(),
            }],
            endpoints,
        })
    }

    fn load(&self, result: RenderResult) -> Result<Vec<PathBuf>> {
        write_artifacts(&self.storage, result)
    }
}
