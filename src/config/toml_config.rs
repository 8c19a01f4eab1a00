use crate::domain::model::App;
use crate::utils::error::{GenError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_relative_path, validate_unique, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Applications put behind the identity provider when no settings file overrides them.
pub const APPS: [&str; 7] = [
    "Traefik",
    "Netdata",
    "Kuma",
    "Whoami",
    "Paperless",
    "Nextcloud",
    "Gatus",
];

/// Optional settings file. Every section falls back to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub apps: AppsSettings,
    pub monitor: MonitorSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppsSettings {
    pub names: Vec<String>,
}

impl Default for AppsSettings {
    fn default() -> Self {
        Self {
            names: APPS.iter().map(|name| name.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorSettings {
    pub title: String,
    pub header: String,
    pub storage_type: String,
    pub storage_path: String,
    pub interval: String,
    pub condition: String,
    pub internal_url: String,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            title: "Service Status".to_string(),
            header: "Uptime Monitor".to_string(),
            storage_type: "sqlite".to_string(),
            storage_path: "/data/data.db".to_string(),
            interval: "1m".to_string(),
            condition: "[STATUS] == 200".to_string(),
            internal_url: "http://localhost:8080/health".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Relative to the hub directory.
    pub blueprint_path: String,
    /// Relative to the hub directory.
    pub monitor_path: String,
    /// Relative to the repository root that discovery scans.
    pub discovery_monitor_path: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            blueprint_path: "authentik/blueprints/hub-apps.yaml".to_string(),
            monitor_path: "gatus/config/config.yaml".to_string(),
            discovery_monitor_path: "hub/gatus/config/config.yaml".to_string(),
        }
    }
}

impl GeneratorSettings {
    /// Loads the settings file at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::info!("Loading settings from: {}", path);
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GenError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn apps(&self) -> Vec<App> {
        self.apps.names.iter().map(App::new).collect()
    }
}

impl Validate for GeneratorSettings {
    fn validate(&self) -> Result<()> {
        for name in &self.apps.names {
            validate_non_empty_string("apps.names", name)?;
        }
        let slugs: Vec<String> = self.apps().iter().map(App::slug).collect();
        validate_unique("apps.names (slug)", slugs.iter().map(String::as_str))?;

        validate_non_empty_string("monitor.interval", &self.monitor.interval)?;
        validate_non_empty_string("monitor.condition", &self.monitor.condition)?;
        validate_non_empty_string("monitor.storage_type", &self.monitor.storage_type)?;

        validate_relative_path("output.blueprint_path", &self.output.blueprint_path)?;
        validate_relative_path("output.monitor_path", &self.output.monitor_path)?;
        validate_relative_path(
            "output.discovery_monitor_path",
            &self.output.discovery_monitor_path,
        )?;

        Ok(())
    }
}
