pub mod cli;
pub mod domain;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::App;
use clap::Parser;
use toml_config::{GeneratorSettings, MonitorSettings, OutputSettings};

/// Arguments of the static-list generator.
#[derive(Debug, Clone, Parser)]
#[command(name = "hubgen")]
#[command(about = "Generate Authentik blueprints and Gatus config for the hub apps")]
pub struct CliConfig {
    /// Domain name, used when DOMAIN_NAME is not set
    pub domain: Option<String>,

    /// Hub directory the generated files are written under
    #[arg(long, default_value = ".")]
    pub output_dir: String,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the generated documents instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Arguments of the compose-label discovery generator.
#[derive(Debug, Clone, Parser)]
#[command(name = "discover_endpoints")]
#[command(about = "Generate Gatus config from Traefik labels in docker-compose.yml files")]
pub struct DiscoveryCliConfig {
    /// Domain name, used when DOMAIN_NAME is not set
    pub domain: Option<String>,

    /// Repository root to scan for docker-compose.yml files
    #[arg(long, default_value = ".")]
    pub root: String,

    /// Directory the generated file is written under (defaults to the scan root)
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Optional TOML settings file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the generated document instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl DiscoveryCliConfig {
    pub fn output_dir(&self) -> &str {
        self.output_dir.as_deref().unwrap_or(&self.root)
    }
}

/// Resolved inputs of one run: the domain plus the effective settings.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub domain: String,
    pub settings: GeneratorSettings,
}

impl GeneratorConfig {
    pub fn new(domain: impl Into<String>, settings: GeneratorSettings) -> Self {
        Self {
            domain: domain.into(),
            settings,
        }
    }
}

impl ConfigProvider for GeneratorConfig {
    fn domain(&self) -> &str {
        &self.domain
    }

    fn apps(&self) -> Vec<App> {
        self.settings.apps()
    }

    fn monitor(&self) -> &MonitorSettings {
        &self.settings.monitor
    }

    fn output(&self) -> &OutputSettings {
        &self.settings.output
    }
}
