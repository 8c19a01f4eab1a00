//! Authentik blueprint model and renderer.
//!
//! Cross-entry references are `!Find` lookups by name or slug, resolved by
//! Authentik when it loads the blueprint.

use crate::domain::model::App;

pub const BLUEPRINT_VERSION: u32 = 1;
pub const OUTPOST_NAME: &str = "authentik Embedded Outpost";
pub const AUTHORIZATION_FLOW: &str = "default-provider-authorization-implicit-consent";
pub const INVALIDATION_FLOW: &str = "default-provider-invalidation-flow";

const PROVIDER_MODEL: &str = "authentik_providers_proxy.proxyprovider";
const APPLICATION_MODEL: &str = "authentik_core.application";
const OUTPOST_MODEL: &str = "authentik_outposts.outpost";
const FLOW_MODEL: &str = "authentik_flows.flow";

/// A deferred lookup of another object by one of its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindRef {
    pub model: &'static str,
    pub field: &'static str,
    pub value: String,
    pub quoted: bool,
}

impl FindRef {
    pub fn flow(slug: &str) -> Self {
        Self {
            model: FLOW_MODEL,
            field: "slug",
            value: slug.to_string(),
            quoted: false,
        }
    }

    pub fn provider(name: &str) -> Self {
        Self {
            model: PROVIDER_MODEL,
            field: "name",
            value: name.to_string(),
            quoted: true,
        }
    }

    fn render(&self) -> String {
        if self.quoted {
            format!("!Find [{}, [{}, \"{}\"]]", self.model, self.field, self.value)
        } else {
            format!("!Find [{}, [{}, {}]]", self.model, self.field, self.value)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlueprintEntry {
    ProxyProvider {
        name: String,
        external_host: String,
        authorization_flow: FindRef,
        invalidation_flow: FindRef,
    },
    Application {
        slug: String,
        name: String,
        provider: FindRef,
    },
    Outpost {
        name: String,
        providers: Vec<FindRef>,
    },
}

impl BlueprintEntry {
    pub fn model(&self) -> &'static str {
        match self {
            BlueprintEntry::ProxyProvider { .. } => PROVIDER_MODEL,
            BlueprintEntry::Application { .. } => APPLICATION_MODEL,
            BlueprintEntry::Outpost { .. } => OUTPOST_MODEL,
        }
    }

    fn render_into(&self, lines: &mut Vec<String>) {
        lines.push(format!("  - model: {}", self.model()));
        lines.push("    identifiers:".to_string());
        match self {
            BlueprintEntry::ProxyProvider {
                name,
                external_host,
                authorization_flow,
                invalidation_flow,
            } => {
                lines.push(format!("      name: \"{}\"", name));
                lines.push("    attrs:".to_string());
                lines.push("      internal_host_ssl_validation: true".to_string());
                lines.push("      mode: forward_single".to_string());
                lines.push(format!("      external_host: https://{}", external_host));
                lines.push("      intercept_header_auth: true".to_string());
                lines.push(format!(
                    "      authorization_flow: {}",
                    authorization_flow.render()
                ));
                lines.push(format!(
                    "      invalidation_flow: {}",
                    invalidation_flow.render()
                ));
                lines.push(String::new());
            }
            BlueprintEntry::Application {
                slug,
                name,
                provider,
            } => {
                lines.push(format!("      slug: {}", slug));
                lines.push("    attrs:".to_string());
                lines.push(format!("      name: {}", name));
                lines.push("      policy_engine_mode: any".to_string());
                lines.push(format!("      provider: {}", provider.render()));
                lines.push(String::new());
            }
            BlueprintEntry::Outpost { name, providers } => {
                lines.push(format!("      name: \"{}\"", name));
                lines.push("    attrs:".to_string());
                lines.push("      providers:".to_string());
                for provider in providers {
                    lines.push(format!("        - {}", provider.render()));
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    pub version: u32,
    pub entries: Vec<BlueprintEntry>,
}

impl Blueprint {
    /// One provider and one application per app, in order, then the outpost.
    pub fn for_apps(apps: &[App], domain: &str) -> Self {
        let mut entries = Vec::with_capacity(apps.len() * 2 + 1);

        for app in apps {
            let provider_name = app.provider_name();
            entries.push(BlueprintEntry::ProxyProvider {
                name: provider_name.clone(),
                external_host: app.external_host(domain),
                authorization_flow: FindRef::flow(AUTHORIZATION_FLOW),
                invalidation_flow: FindRef::flow(INVALIDATION_FLOW),
            });
            entries.push(BlueprintEntry::Application {
                slug: app.slug(),
                name: app.name.clone(),
                provider: FindRef::provider(&provider_name),
            });
        }

        entries.push(BlueprintEntry::Outpost {
            name: OUTPOST_NAME.to_string(),
            providers: apps
                .iter()
                .map(|app| FindRef::provider(&app.provider_name()))
                .collect(),
        });

        Self {
            version: BLUEPRINT_VERSION,
            entries,
        }
    }

    pub fn render(&self) -> String {
        let mut lines = vec![format!("version: {}", self.version), "entries:".to_string()];
        for entry in &self.entries {
            entry.render_into(&mut lines);
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_layout() {
        let apps = vec![App::new("Traefik"), App::new("Whoami")];
        let blueprint = Blueprint::for_apps(&apps, "example.com");

        let models: Vec<&str> = blueprint.entries.iter().map(BlueprintEntry::model).collect();
        assert_eq!(
            models,
            vec![
                PROVIDER_MODEL,
                APPLICATION_MODEL,
                PROVIDER_MODEL,
                APPLICATION_MODEL,
                OUTPOST_MODEL
            ]
        );

        match blueprint.entries.last().unwrap() {
            BlueprintEntry::Outpost { providers, .. } => {
                let names: Vec<&str> = providers.iter().map(|p| p.value.as_str()).collect();
                assert_eq!(names, vec!["Provider for Traefik", "Provider for Whoami"]);
            }
            other => panic!("expected outpost, got {:?}", other),
        }
    }

    #[test]
    fn test_render_single_app() {
        let blueprint = Blueprint::for_apps(&[App::new("Whoami")], "example.com");
        let expected = "\
version: 1
entries:
  - model: authentik_providers_proxy.proxyprovider
    identifiers:
      name: \"Provider for Whoami\"
    attrs:
      internal_host_ssl_validation: true
      mode: forward_single
      external_host: https://whoami.example.com
      intercept_header_auth: true
      authorization_flow: !Find [authentik_flows.flow, [slug, default-provider-authorization-implicit-consent]]
      invalidation_flow: !Find [authentik_flows.flow, [slug, default-provider-invalidation-flow]]

  - model: authentik_core.application
    identifiers:
      slug: whoami
    attrs:
      name: Whoami
      policy_engine_mode: any
      provider: !Find [authentik_providers_proxy.proxyprovider, [name, \"Provider for Whoami\"]]

  - model: authentik_outposts.outpost
    identifiers:
      name: \"authentik Embedded Outpost\"
    attrs:
      providers:
        - !Find [authentik_providers_proxy.proxyprovider, [name, \"Provider for Whoami\"]]";

        assert_eq!(blueprint.render(), expected);
    }

    #[test]
    fn test_render_is_loadable_yaml() {
        let apps: Vec<App> = ["Traefik", "Uptime Kuma"].into_iter().map(App::new).collect();
        let rendered = Blueprint::for_apps(&apps, "example.com").render();

        let doc: serde_yaml::Value = serde_yaml::from_str(&rendered).unwrap();
        assert_eq!(doc["version"].as_u64(), Some(1));
        let entries = doc["entries"].as_sequence().unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(
            entries[2]["attrs"]["external_host"].as_str(),
            Some("https://uptime-kuma.example.com")
        );
        assert_eq!(entries[3]["identifiers"]["slug"].as_str(), Some("uptime-kuma"));
    }
}
