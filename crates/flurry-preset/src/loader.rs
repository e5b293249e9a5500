//! Preset loading from TOML or JSON files

use crate::format::PresetFile;
use flurry_core::Result;
use std::fs;
use std::path::Path;

/// Load and validate a preset file. `.json` files are read as JSON, anything else as TOML.
pub fn load_preset<P: AsRef<Path>>(path: P) -> Result<PresetFile> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    if is_json(path) {
        load_preset_json_str(&content)
    } else {
        load_preset_str(&content)
    }
}

/// Load and validate a preset from a TOML string
pub fn load_preset_str(content: &str) -> Result<PresetFile> {
    let preset: PresetFile = toml::from_str(content)?;
    preset.validate()?;
    Ok(preset)
}

/// Load and validate a preset from a JSON string
pub fn load_preset_json_str(content: &str) -> Result<PresetFile> {
    let preset: PresetFile = serde_json::from_str(content)?;
    preset.validate()?;
    Ok(preset)
}

pub(crate) fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flurry_core::FlurryError;
    use flurry_particles::TransformationParameters;

    #[test]
    fn test_load_preset_str() {
        let toml_str = r#"
name = "twinkle"
description = "stars that blink"

[system]
fps = 30

[generator]
count = 250
particle_width_range = [1, 4]
particle_height_range = [1, 4]
start_offset_range = [0, 60]

[transformation]
type = "blink"
frequency_factor_range = [0.5, 2.0]

[shape]
kind = "circle"
radius_range = [1, 4]
"#;
        let preset = load_preset_str(toml_str).unwrap();
        assert_eq!(preset.system.fps, 30);
        assert_eq!(preset.generator.count, 250);
        assert_eq!(preset.transformation.name(), "blink");
        assert_eq!(preset.description.as_deref(), Some("stars that blink"));
    }

    #[test]
    fn test_invalid_preset_is_rejected() {
        let err = load_preset_str("name = \"x\"\n[system]\nfps = 0\n").unwrap_err();
        assert!(matches!(err, FlurryError::InvalidConfig(_)));

        let err = load_preset_str("name = ").unwrap_err();
        assert!(matches!(err, FlurryError::TomlParseError(_)));
    }

    #[test]
    fn test_load_preset_json_str() {
        let json = r#"{
            "name": "rain",
            "generator": { "count": 400, "speed_range": [10.0, 30.0] },
            "transformation": { "type": "translate", "gravity": 0.5 }
        }"#;
        let preset = load_preset_json_str(json).unwrap();
        assert_eq!(preset.generator.count, 400);
        assert_eq!(
            preset.transformation,
            TransformationParameters::Translate { gravity: 0.5 }
        );

        let err = load_preset_json_str("{").unwrap_err();
        assert!(matches!(err, FlurryError::JsonError(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_preset("/nonexistent/flurry/preset.toml").unwrap_err();
        assert!(matches!(err, FlurryError::Io(_)));
    }

    #[test]
    fn test_json_extension_detection() {
        assert!(is_json(Path::new("snow.JSON")));
        assert!(!is_json(Path::new("snow.toml")));
        assert!(!is_json(Path::new("snow")));
    }
}
