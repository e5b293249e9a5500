//! Flurry Core - Foundational types for the Flurry particle engine
//!
//! This crate provides the core types that all other Flurry crates depend on:
//! - `ParticleId` - Stable particle identifiers
//! - `Size`, `Color` - Plain geometric and color values
//! - `FloatRange`, `IntRange` - Closed sampling intervals used by configuration
//! - Error types and Result alias

mod error;
mod id;
mod types;

pub use error::{FlurryError, Result};
pub use id::{IdAllocator, ParticleId};
pub use types::{Color, FloatRange, IntRange, Size};
