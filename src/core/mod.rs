pub mod blueprint;
pub mod discovery;
pub mod engine;
pub mod labels;
pub mod monitor;

pub use crate::domain::model::{Artifact, ArtifactKind, Endpoint, RenderResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
