use std::path::PathBuf;

use thiserror::Error;

use crate::{
    application::manifest::ManifestError, config::ConfigError, domain::outline::OutlineError,
    infra::telemetry::TelemetryError, presentation::views::TemplateRenderError,
};

/// Top-level failure type for the binary. Every layer's error converges
/// here so `main` has a single reporting path.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    #[error(transparent)]
    Outline(#[from] OutlineError),
    #[error(transparent)]
    Template(#[from] TemplateRenderError),
    #[error("failed to write rendered outline to `{path}`")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write rendered outline to stdout")]
    WriteStdout(#[source] std::io::Error),
}
