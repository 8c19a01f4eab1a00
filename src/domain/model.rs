/// One monitored target. `name` is its identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub name: String,
    pub url: String,
    pub group: String,
}

impl Endpoint {
    pub const SERVICES_GROUP: &'static str = "services";

    pub fn service(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            group: Self::SERVICES_GROUP.to_string(),
        }
    }
}

/// An application fronted by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub name: String,
}

impl App {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    pub fn provider_name(&self) -> String {
        format!("Provider for {}", self.name)
    }

    pub fn external_host(&self, domain: &str) -> String {
        format!("{}.{}", self.slug(), domain)
    }

    pub fn url(&self, domain: &str) -> String {
        format!("https://{}", self.external_host(domain))
    }

    pub fn endpoint(&self, domain: &str) -> Endpoint {
        Endpoint::service(self.name.clone(), self.url(domain))
    }
}

/// `lowercase(name)` with spaces replaced by hyphens.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Blueprint,
    MonitorConfig,
}

impl ArtifactKind {
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::Blueprint => "Authentik blueprints",
            ArtifactKind::MonitorConfig => "Gatus config",
        }
    }
}

/// A rendered document and where it goes, relative to the storage root.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: String,
    pub contents: String,
}

#[derive(Debug, Clone, Default)]
pub struct RenderResult {
    pub artifacts: Vec<Artifact>,
    /// Endpoints that ended up in the monitor config, in output order.
    pub endpoints: Vec<Endpoint>,
}
