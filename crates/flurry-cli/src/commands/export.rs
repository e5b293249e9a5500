//! Export command

use anyhow::{Context, Result};
use flurry_preset::{save_preset_string, to_json_string, AnimationKind};
use std::fs;
use std::path::Path;

pub fn run(preset: &str, output: Option<&str>, format: Option<&str>) -> Result<()> {
    let kind: AnimationKind = preset.parse()?;
    let preset = kind.preset();

    let format = match (format, output) {
        (Some(format), _) => format.to_string(),
        (None, Some(path)) => Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("toml")
            .to_ascii_lowercase(),
        (None, None) => "toml".to_string(),
    };

    let content = match format.as_str() {
        "toml" => save_preset_string(&preset)?,
        "json" => to_json_string(&preset)?,
        _ => anyhow::bail!("Unknown format: {}", format),
    };

    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write {}", path))?;
            println!("Exported '{}' to {}", kind, path);
        }
        None => print!("{}", content),
    }
    Ok(())
}
