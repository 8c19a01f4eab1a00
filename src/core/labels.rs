//! Endpoint extraction from Traefik routing labels in compose files.
//!
//! ```text
//! labels:
//!   - traefik.enable=true
//!   - traefik.http.routers.whoami.rule=Host(`whoami.${DOMAIN_NAME}`)
//! ```
//!
//! yields `Whoami` at `https://whoami.${DOMAIN_NAME}`. The placeholder is kept
//! literally in the URL.

use crate::domain::model::Endpoint;
use crate::utils::error::{GenError, Result};
use indexmap::IndexMap;
use serde_yaml::Value;
use std::path::Path;

pub const ENABLE_LABEL: &str = "traefik.enable";
pub const ROUTER_LABEL_PREFIX: &str = "traefik.http.routers";
pub const RULE_LABEL_SUFFIX: &str = ".rule";
pub const HOST_RULE_MARKER: &str = "Host(";
pub const DOMAIN_PLACEHOLDER_SUFFIX: &str = ".${DOMAIN_NAME}";

/// A service's labels in document order.
///
/// Values keep their YAML type: `traefik.enable: true` (a boolean) is not the
/// same as `traefik.enable: "true"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Labels(IndexMap<String, Value>);

impl Labels {
    /// Accepts both the `- key=value` list form and the `key: value` mapping form.
    pub fn from_yaml(value: &Value) -> Self {
        let mut labels = IndexMap::new();
        match value {
            Value::Sequence(items) => {
                for item in items {
                    let Some(label) = item.as_str() else {
                        tracing::debug!("Ignoring non-string label entry: {:?}", item);
                        continue;
                    };
                    if let Some((key, value)) = label.split_once('=') {
                        labels.insert(key.to_string(), Value::String(value.to_string()));
                    }
                }
            }
            Value::Mapping(mapping) => {
                for (key, value) in mapping {
                    match key.as_str() {
                        Some(key) => {
                            labels.insert(key.to_string(), value.clone());
                        }
                        None => tracing::debug!("Ignoring non-string label key: {:?}", key),
                    }
                }
            }
            _ => {}
        }
        Self(labels)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// True only for the string `"true"`.
    pub fn traefik_enabled(&self) -> bool {
        self.get_str(ENABLE_LABEL) == Some("true")
    }

    /// The first router rule, in label order, that contains a `Host(` matcher.
    pub fn host_rule(&self) -> Option<&str> {
        self.0.iter().find_map(|(key, value)| {
            if !(key.contains(ROUTER_LABEL_PREFIX) && key.contains(RULE_LABEL_SUFFIX)) {
                return None;
            }
            value.as_str().filter(|rule| rule.contains(HOST_RULE_MARKER))
        })
    }
}

/// Builds the endpoint for a rule like ``Host(`foo.${DOMAIN_NAME}`)``.
///
/// The host is whatever sits between the first two backticks and must end in
/// `.${DOMAIN_NAME}`. The display name is the remaining subdomain, capitalized.
pub fn endpoint_from_rule(rule: &str) -> Result<Endpoint> {
    let host_rule_error = |reason: &str| GenError::HostRuleError {
        rule: rule.to_string(),
        reason: reason.to_string(),
    };

    let start = rule
        .find('`')
        .map(|idx| idx + 1)
        .ok_or_else(|| host_rule_error("no backtick-quoted host"))?;
    let end = rule[start..]
        .find('`')
        .map(|idx| start + idx)
        .ok_or_else(|| host_rule_error("unterminated backtick-quoted host"))?;
    if end == start {
        return Err(host_rule_error("empty host"));
    }

    let full_host = &rule[start..end];
    let subdomain = full_host
        .strip_suffix(DOMAIN_PLACEHOLDER_SUFFIX)
        .ok_or_else(|| host_rule_error("host does not end with .${DOMAIN_NAME}"))?;
    if subdomain.is_empty() {
        return Err(host_rule_error("empty subdomain"));
    }

    Ok(Endpoint::service(
        capitalize(subdomain),
        format!("https://{}", full_host),
    ))
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Endpoints declared by the services of one compose document.
///
/// Fails only when the document is not valid YAML. Services that are not
/// enabled, have no usable host rule, or whose rule cannot be parsed are
/// skipped; unparseable rules are logged.
pub fn parse_compose_str(content: &str, source: &Path) -> Result<Vec<Endpoint>> {
    let document: Value = serde_yaml::from_str(content)?;

    let Some(services) = document.get("services").and_then(Value::as_mapping) else {
        tracing::debug!("No services section in {}", source.display());
        return Ok(Vec::new());
    };

    let mut endpoints = Vec::new();
    for (service_name, service) in services {
        let service_name = service_name.as_str().unwrap_or("<unnamed>");

        let labels = service
            .get("labels")
            .map(Labels::from_yaml)
            .unwrap_or_default();
        if labels.is_empty() || !labels.traefik_enabled() {
            continue;
        }

        let Some(rule) = labels.host_rule() else {
            tracing::debug!(
                "Service '{}' in {} has no Host router rule",
                service_name,
                source.display()
            );
            continue;
        };

        match endpoint_from_rule(rule) {
            Ok(endpoint) => {
                tracing::debug!(
                    "Service '{}' in {} -> {} ({})",
                    service_name,
                    source.display(),
                    endpoint.name,
                    endpoint.url
                );
                endpoints.push(endpoint);
            }
            Err(e) => {
                tracing::warn!(
                    "Error parsing host rule '{}' in {}: {}",
                    rule,
                    source.display(),
                    e
                );
            }
        }
    }

    Ok(endpoints)
}

/// [`parse_compose_str`] on a file. Read and parse failures are logged and
/// produce no endpoints.
pub fn parse_compose_file(path: &Path) -> Vec<Endpoint> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Error reading {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    match parse_compose_str(&content, path) {
        Ok(endpoints) => endpoints,
        Err(e) => {
            tracing::warn!("Error reading {}: {}", path.display(), e);
            Vec::new()
        }
    }
}
