//! Preset validation command

use anyhow::{Context, Result};
use flurry_preset::load_preset;
use serde_json::json;

pub fn run(file: &str, format: &str) -> Result<()> {
    let preset = load_preset(file).with_context(|| format!("Invalid preset: {}", file))?;

    match format {
        "text" => {
            println!("{}: OK", file);
            println!("  name:           {}", preset.name);
            if let Some(description) = &preset.description {
                println!("  description:    {}", description);
            }
            println!("  fps:            {}", preset.system.fps);
            println!("  particles:      {}", preset.generator.count);
            println!("  shape:          {}", preset.shape.kind());
            println!("  transformation: {}", preset.transformation.name());
            if preset.generator.source_edges.is_empty() {
                println!("  Warning: no source edges, particles will enter from the top.");
            }
        }
        "json" => {
            let report = json!({
                "file": file,
                "valid": true,
                "name": preset.name,
                "fps": preset.system.fps,
                "particles": preset.generator.count,
                "shape": preset.shape.kind(),
                "transformation": preset.transformation.name(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => anyhow::bail!("Unknown format: {}", format),
    }
    Ok(())
}
