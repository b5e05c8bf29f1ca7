//! Profile loader
//!
//! Manages the embedded default profile and external profile files.

use super::types::ProfileConfig;
use crate::error::{Error, Result};
use std::path::Path;
use std::sync::OnceLock;

/// Name of the embedded default profile
pub const DEFAULT_PROFILE_NAME: &str = "english";

/// Embedded default profile text
pub(crate) const EMBEDDED_DEFAULT: &str = include_str!("../../configs/profiles/english.toml");

static DEFAULT_PROFILE: OnceLock<ProfileConfig> = OnceLock::new();

fn load_embedded_profile(name: &str, toml_str: &str) -> Result<ProfileConfig> {
    let profile = ProfileConfig::from_toml_str(toml_str)
        .map_err(|e| Error::Configuration(format!("Failed to parse {name} profile: {e}")))?;

    if profile.metadata.name != name {
        return Err(Error::Configuration(format!(
            "Profile name mismatch: expected {}, got {}",
            name, profile.metadata.name
        )));
    }

    profile.validate().map_err(Error::Configuration)?;
    Ok(profile)
}

/// The embedded default profile, parsed once
pub fn default_profile() -> &'static ProfileConfig {
    DEFAULT_PROFILE.get_or_init(|| {
        load_embedded_profile(DEFAULT_PROFILE_NAME, EMBEDDED_DEFAULT)
            .expect("Failed to load embedded default profile")
    })
}

/// Read and validate an external profile file
pub fn load_profile_file(path: &Path) -> Result<ProfileConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let profile = ProfileConfig::from_toml_str(&content)?;

    profile.validate().map_err(|e| {
        Error::Configuration(format!("Invalid profile '{}': {}", path.display(), e))
    })?;

    log::debug!(
        "Loaded profile '{}' from {}",
        profile.metadata.name,
        path.display()
    );
    Ok(profile)
}
