//! Gatus configuration model and renderer.

use crate::config::toml_config::MonitorSettings;
use crate::domain::model::Endpoint;
use std::collections::HashSet;

pub const INTERNAL_CHECK_NAME: &str = "gatus-internal";
pub const INTERNAL_CHECK_GROUP: &str = "core";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    pub storage_type: String,
    pub storage_path: String,
    pub title: String,
    pub header: String,
    pub interval: String,
    pub condition: String,
    /// Always starts with the internal self-check.
    pub endpoints: Vec<Endpoint>,
}

impl MonitorConfig {
    /// Keeps `endpoints` in the order given, after the internal self-check.
    pub fn new(settings: &MonitorSettings, endpoints: &[Endpoint]) -> Self {
        let mut all = Vec::with_capacity(endpoints.len() + 1);
        all.push(Endpoint {
            name: INTERNAL_CHECK_NAME.to_string(),
            url: settings.internal_url.clone(),
            group: INTERNAL_CHECK_GROUP.to_string(),
        });
        all.extend_from_slice(endpoints);

        Self {
            storage_type: settings.storage_type.clone(),
            storage_path: settings.storage_path.clone(),
            title: settings.title.clone(),
            header: settings.header.clone(),
            interval: settings.interval.clone(),
            condition: settings.condition.clone(),
            endpoints: all,
        }
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            "# Gatus Configuration - Generated".to_string(),
            "storage:".to_string(),
            format!("  type: {}", self.storage_type),
            format!("  path: {}", self.storage_path),
            String::new(),
            "ui:".to_string(),
            format!("  title: \"{}\"", self.title),
            format!("  header: \"{}\"", self.header),
            String::new(),
            "endpoints:".to_string(),
        ];

        for endpoint in &self.endpoints {
            lines.push(format!("  - name: {}", endpoint.name));
            lines.push(format!("    group: {}", endpoint.group));
            lines.push(format!("    url: \"{}\"", endpoint.url));
            lines.push(format!("    interval: {}", self.interval));
            lines.push("    conditions:".to_string());
            lines.push(format!("      - \"{}\"", self.condition));
            lines.push(String::new());
        }

        lines.join("\n")
    }
}

/// Sorts by name (byte order, stable) and keeps the first endpoint of each name.
pub fn sort_and_dedup(mut endpoints: Vec<Endpoint>) -> Vec<Endpoint> {
    endpoints.sort_by(|a, b| a.name.cmp(&b.name));

    let mut seen = HashSet::new();
    endpoints.retain(|endpoint| {
        let first = seen.insert(endpoint.name.clone());
        if !first {
            tracing::debug!("Dropping duplicate endpoint '{}' ({})", endpoint.name, endpoint.url);
        }
        first
    });
    endpoints
}
