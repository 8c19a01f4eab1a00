use crate::app::pipelines::write_artifacts;
use crate::core::blueprint::Blueprint;
use crate::core::monitor::MonitorConfig;
use crate::core::{
    Artifact, ArtifactKind, ConfigProvider, Endpoint, Pipeline, RenderResult, Storage,
};
use crate::utils::error::Result;
use std::path::PathBuf;

/// Blueprint plus monitor config for a fixed list of apps, in list order.
pub struct StaticPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> StaticPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for StaticPipeline<S, C> {
    fn name(&self) -> &str {
        "static"
    }

    fn extract(&self) -> Result<Vec<Endpoint>> {
        let domain = self.config.domain();
        Ok(self
            .config
            .apps()
            .iter()
            .map(|app| app.endpoint(domain))
            .collect())
    }

    fn transform(&self, endpoints: Vec<Endpoint>) -> Result<RenderResult> {
        let domain = self.config.domain();
        let output = self.config.output();

        println!(
            "Generating {} for domain: {}",
            ArtifactKind::Blueprint.label(),
            domain
        );
        let blueprint = Blueprint::for_apps(&self.config.apps(), domain);

        println!(
            "Generating {} for domain: {}",
            ArtifactKind::MonitorConfig.label(),
            domain
        );
        let monitor = MonitorConfig::new(self.config.monitor(), &endpoints);

        Ok(RenderResult {
            artifacts: vec![
                Artifact {
                    kind: ArtifactKind::Blueprint,
                    path: output.blueprint_path.clone(),
                    contents: blueprint.render(),
                },
                Artifact {
                    kind: ArtifactKind::MonitorConfig,
                    path: output.monitor_path.clone(),
                    contents: monitor.render(),
                },
            ],
            endpoints,
        })
    }

    fn load(&self, result: RenderResult) -> Result<Vec<PathBuf>> {
        write_artifacts(&self.storage, result)
    }
}
