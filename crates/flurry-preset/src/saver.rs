//! Preset saving to TOML or JSON files

use crate::format::PresetFile;
use crate::loader::is_json;
use flurry_core::Result;
use std::fs;
use std::path::Path;

/// Save a preset. `.json` paths get JSON, anything else TOML.
pub fn save_preset<P: AsRef<Path>>(path: P, preset: &PresetFile) -> Result<()> {
    let path = path.as_ref();
    let content = if is_json(path) {
        to_json_string(preset)?
    } else {
        save_preset_string(preset)?
    };
    fs::write(path, content)?;
    Ok(())
}

/// Save a preset to a TOML string
pub fn save_preset_string(preset: &PresetFile) -> Result<String> {
    let content = toml::to_string_pretty(preset)?;
    Ok(content)
}

/// Save a preset to a pretty-printed JSON string
pub fn to_json_string(preset: &PresetFile) -> Result<String> {
    let content = serde_json::to_string_pretty(preset)?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::AnimationKind;
    use crate::loader::{load_preset, load_preset_json_str, load_preset_str};

    #[test]
    fn test_builtin_presets_survive_export() {
        for kind in AnimationKind::ALL {
            let preset = kind.preset();
            let toml_str = save_preset_string(&preset).unwrap();
            assert_eq!(load_preset_str(&toml_str).unwrap(), preset, "{kind}");

            let json = to_json_string(&preset).unwrap();
            assert_eq!(load_preset_json_str(&json).unwrap(), preset, "{kind}");
        }
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("flurry-saver-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let preset = AnimationKind::Emotion.preset();
        for file in ["emotion.toml", "emotion.json"] {
            let path = dir.join(file);
            save_preset(&path, &preset).unwrap();
            assert_eq!(load_preset(&path).unwrap(), preset);
        }

        let json = fs::read_to_string(dir.join("emotion.json")).unwrap();
        assert!(json.trim_start().starts_with('{'));

        fs::remove_dir_all(&dir).unwrap();
    }
}
