//! Startup steps shared by the generator binaries.

use crate::config::toml_config::GeneratorSettings;
use crate::utils::error::GenError;
use crate::utils::validation::Validate;
use anyhow::Context;

/// Loads and validates the settings file, or the defaults when `path` is `None`.
pub fn load_settings(path: Option<&str>) -> anyhow::Result<GeneratorSettings> {
    let settings = GeneratorSettings::load(path).with_context(|| {
        format!(
            "failed to load settings from {}",
            path.unwrap_or("<defaults>")
        )
    })?;
    settings.validate().context("invalid settings")?;
    Ok(settings)
}

/// Reports a fatal error and exits with its exit code.
pub fn exit_with(e: GenError) -> ! {
    tracing::error!("{} (severity: {:?})", e, e.severity());
    tracing::error!("Suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_settings_defaults() {
        let settings = load_settings(None).unwrap();
        assert_eq!(settings, GeneratorSettings::default());
    }

    #[test]
    fn test_load_settings_rejects_invalid_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[apps]\nnames = [\"Kuma\", \"kuma\"]\n").unwrap();

        let err = load_settings(temp_file.path().to_str()).unwrap_err();
        assert_eq!(err.to_string(), "invalid settings");
    }

    #[test]
    fn test_load_settings_names_missing_file() {
        let err = load_settings(Some("/nonexistent/hubgen.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/hubgen.toml"));
    }
}
