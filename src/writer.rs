use crate::error::{HomerowError, HrResult};
use crate::profile::ComplexModifications;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Profile name that prints the document instead of touching the config.
pub const DRY_RUN_PROFILE: &str = "--dry-run--";

/// `~/.config/karabiner/karabiner.json`
pub fn default_config_path() -> HrResult<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| HomerowError::Config("Could not locate the home directory".to_string()))?;
    Ok(home.join(".config").join("karabiner").join("karabiner.json"))
}

/// Pretty JSON, two-space indent, trailing newline.
pub fn render(doc: &ComplexModifications) -> HrResult<String> {
    let mut out = serde_json::to_string_pretty(doc)?;
    out.push('\n');
    Ok(out)
}

/// Replace `complex_modifications` of the named profile, keeping the rest of
/// the file as it was.
pub fn write_to_profile<P: AsRef<Path>>(
    config_path: P,
    profile_name: &str,
    doc: &ComplexModifications,
) -> HrResult<()> {
    let path = config_path.as_ref();
    debug!("Reading {}", path.display());

    let content = fs::read_to_string(path)?;
    let mut config: Value = serde_json::from_str(&content)?;

    apply_to_profile(&mut config, profile_name, doc)?;

    let mut out = serde_json::to_string_pretty(&config)?;
    out.push('\n');
    fs::write(path, out)?;

    info!("✓ Profile {} updated.", profile_name);
    Ok(())
}

/// In-memory half of [`write_to_profile`].
pub fn apply_to_profile(
    config: &mut Value,
    profile_name: &str,
    doc: &ComplexModifications,
) -> HrResult<()> {
    let profiles = config
        .get_mut("profiles")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| HomerowError::Config("config has no 'profiles' array".to_string()))?;

    let profile = profiles
        .iter_mut()
        .find(|p| p.get("name").and_then(Value::as_str) == Some(profile_name))
        .ok_or_else(|| HomerowError::ProfileNotFound(profile_name.to_string()))?;

    let obj = profile
        .as_object_mut()
        .ok_or_else(|| HomerowError::Config(format!("profile '{}' is not an object", profile_name)))?;
    obj.insert("complex_modifications".to_string(), serde_json::to_value(doc)?);
    Ok(())
}
