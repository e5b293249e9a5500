//! List command

use anyhow::Result;
use flurry_preset::AnimationKind;
use serde_json::json;

pub fn run(format: &str) -> Result<()> {
    match format {
        "text" => {
            println!("Built-in presets:");
            for kind in AnimationKind::ALL {
                println!("  {:<14} {}", kind.name(), kind.title());
                println!("  {:<14} {}", "", kind.description());
            }
        }
        "json" => {
            let entries: Vec<_> = AnimationKind::ALL
                .iter()
                .map(|kind| {
                    json!({
                        "name": kind.name(),
                        "title": kind.title(),
                        "description": kind.description(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        _ => anyhow::bail!("Unknown format: {}", format),
    }
    Ok(())
}
