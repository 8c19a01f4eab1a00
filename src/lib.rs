pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::pipelines::{discovery_pipeline::DiscoveryPipeline, static_pipeline::StaticPipeline};
pub use config::cli::{LocalStorage, StdoutStorage};
pub use config::{CliConfig, DiscoveryCliConfig, GeneratorConfig};
pub use crate::core::engine::GeneratorEngine;
pub use utils::error::{GenError, Result};
