use crate::config::toml_config::{MonitorSettings, OutputSettings};
use crate::domain::model::{App, Endpoint, RenderResult};
use crate::utils::error::Result;
use std::path::PathBuf;

pub trait Storage {
    /// Full overwrite. Parent directories are created as needed.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    /// Human-readable location of `path`, used in progress output.
    fn location(&self, path: &str) -> PathBuf;
}

pub trait ConfigProvider {
    fn domain(&self) -> &str;
    fn apps(&self) -> Vec<App>;
    fn monitor(&self) -> &MonitorSettings;
    fn output(&self) -> &OutputSettings;
}

pub trait Pipeline {
    fn name(&self) -> &str;
    fn extract(&self) -> Result<Vec<Endpoint>>;
    fn transform(&self, endpoints: Vec<Endpoint>) -> Result<RenderResult>;
    fn load(&self, result: RenderResult) -> Result<Vec<PathBuf>>;
}
