use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use otty_chrome::ChromeConfig;
use serde::{Deserialize, Serialize};

use crate::errors::SettingsError;

const DEFAULT_TITLE: &str = "OTTY";
const SETTINGS_FILE: &str = "frame.json";

/// Persisted frame preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct FrameSettings {
    pub(crate) title: String,
    pub(crate) chrome: ChromeConfig,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self {
            title: String::from(DEFAULT_TITLE),
            chrome: ChromeConfig::default(),
        }
    }
}

/// Read the frame settings, falling back to defaults on any failure.
///
/// A missing file is seeded with the defaults so they can be edited.
pub(crate) fn load_or_default() -> FrameSettings {
    let path = settings_path();
    match read_settings(&path) {
        Ok(Some(settings)) => {
            log::info!("frame settings loaded from {}", path.display());
            settings
        },
        Ok(None) => {
            let settings = FrameSettings::default();
            if let Err(err) = write_settings(&path, &settings) {
                log::warn!("failed to seed {}: {err}", path.display());
            }
            settings
        },
        Err(SettingsError::Json(err)) => {
            log::warn!(
                "ignoring invalid settings in {}: {err}",
                path.display()
            );
            FrameSettings::default()
        },
        Err(err) => {
            log::warn!("failed to read {}: {err}", path.display());
            FrameSettings::default()
        },
    }
}

/// `Ok(None)` when the file does not exist yet.
fn read_settings(path: &Path) -> Result<Option<FrameSettings>, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(serde_json::from_str(&data)?))
}

/// Replace the file through a sibling temp file so readers never see a
/// partial write.
fn write_settings(
    path: &Path,
    settings: &FrameSettings,
) -> Result<(), SettingsError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let staged = path.with_extension("json.tmp");
    fs::write(&staged, serde_json::to_vec_pretty(settings)?)?;
    fs::rename(&staged, path)?;
    Ok(())
}

fn settings_path() -> PathBuf {
    let config_dir = match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".config"),
        None => std::env::temp_dir(),
    };
    config_dir.join("otty").join(SETTINGS_FILE)
}
