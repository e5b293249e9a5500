//! Flurry Preset - saved animation configurations
//!
//! A preset bundles system, generator, transformation and shape parameters
//! under a name. This crate loads and saves presets as TOML or JSON, turns a
//! preset into a ready-to-build particle system, and ships the built-in
//! animation catalog.

mod builtin;
mod format;
mod loader;
mod saver;
mod shape;

pub use builtin::AnimationKind;
pub use format::PresetFile;
pub use loader::{load_preset, load_preset_json_str, load_preset_str};
pub use saver::{save_preset, save_preset_string, to_json_string};
pub use shape::{sakura_petal, text_bounds, ShapeParameters};
