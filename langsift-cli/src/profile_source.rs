//! Profile source management for CLI

use crate::error::CliError;
use anyhow::Result;
use langsift_core::{Detector, DetectorConfig, Preset};
use std::path::PathBuf;

/// Where detector tables and thresholds come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    /// Embedded English profile with a preset's thresholds
    BuiltIn(Preset),
    /// External profile file
    External {
        /// Path to the profile file
        path: PathBuf,
        /// Preset applied on top of the file's thresholds
        preset: Option<Preset>,
    },
}

impl ProfileSource {
    /// Resolve command-line options into a source
    pub fn from_options(config: Option<PathBuf>, preset: Option<Preset>) -> Self {
        match config {
            Some(path) => ProfileSource::External { path, preset },
            None => ProfileSource::BuiltIn(preset.unwrap_or_default()),
        }
    }

    /// Get the display name for the profile source
    pub fn display_name(&self) -> String {
        match self {
            ProfileSource::BuiltIn(preset) => format!("Built-in: english ({preset})"),
            ProfileSource::External { path, preset } => match preset {
                Some(preset) => format!("External: {} ({preset})", path.display()),
                None => format!("External: {}", path.display()),
            },
        }
    }

    /// Build the runtime configuration
    pub fn build_config(&self) -> Result<DetectorConfig> {
        let config = match self {
            ProfileSource::BuiltIn(preset) => Ok(DetectorConfig::with_preset(*preset)),
            ProfileSource::External { path, preset } => {
                let mut builder = DetectorConfig::builder().profile_file(path);
                if let Some(preset) = preset {
                    builder = builder.preset(*preset);
                }
                builder.build()
            }
        };

        config.map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Build a detector for this source
    pub fn build_detector(&self) -> Result<Detector> {
        let config = self.build_config()?;
        log::info!("Using profile {}", self.display_name());
        Detector::new(config).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_default() {
        let source = ProfileSource::from_options(None, None);
        assert_eq!(source, ProfileSource::BuiltIn(Preset::Default));
        assert_eq!(source.display_name(), "Built-in: english (default)");
        assert_eq!(source.build_config().unwrap().min_words_per_sentence, 4);
    }

    #[test]
    fn test_builtin_preset() {
        let source = ProfileSource::from_options(None, Some(Preset::Loose));
        assert_eq!(source.build_config().unwrap().min_markers, 0);
    }

    #[test]
    fn test_external_with_preset() {
        let mut file = NamedTempFile::new().unwrap();
        let profile = Preset::Default.profile().to_toml_string().unwrap();
        file.write_all(profile.as_bytes()).unwrap();

        let source =
            ProfileSource::from_options(Some(file.path().to_path_buf()), Some(Preset::Strict));
        assert!(source.display_name().starts_with("External: "));
        assert_eq!(source.build_config().unwrap().min_stopwords, 2);
    }

    #[test]
    fn test_missing_external_profile() {
        let source = ProfileSource::from_options(Some(PathBuf::from("/no/such.toml")), None);
        let err = source.build_detector().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }
}
