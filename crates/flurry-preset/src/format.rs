//! Preset file format definitions

use crate::shape::ShapeParameters;
use flurry_core::{FlurryError, Result, Size};
use flurry_particles::{
    GeneratorParameters, ParticleRng, RandomizeParticleGenerator, SourceEdge,
    TransformationParameters,
};
use flurry_runtime::{ParticleSystem, ParticleSystemBuilder, SystemParameters};
use serde::{Deserialize, Serialize};

/// Root structure of a preset file: everything needed to rebuild an animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetFile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub system: SystemParameters,
    #[serde(default)]
    pub generator: GeneratorParameters,
    #[serde(default)]
    pub transformation: TransformationParameters,
    #[serde(default)]
    pub shape: ShapeParameters,
}

impl PresetFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            system: SystemParameters::default(),
            generator: GeneratorParameters::default(),
            transformation: TransformationParameters::default(),
            shape: ShapeParameters::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_system(mut self, system: SystemParameters) -> Self {
        self.system = system;
        self
    }

    pub fn with_generator(mut self, generator: GeneratorParameters) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_transformation(mut self, transformation: TransformationParameters) -> Self {
        self.transformation = transformation;
        self
    }

    pub fn with_shape(mut self, shape: ShapeParameters) -> Self {
        self.shape = shape;
        self
    }

    /// Reject presets the runtime cannot run. Inverted ranges are fine.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FlurryError::InvalidConfig(
                "preset name must not be empty".to_string(),
            ));
        }
        self.system.validate()?;
        self.shape.validate()
    }

    /// Fill in values the generator would otherwise silently default
    pub fn sanitized(mut self) -> Self {
        if self.generator.source_edges.is_empty() {
            tracing::warn!(preset = %self.name, "no source edges, using top");
            self.generator.source_edges.push(SourceEdge::Top);
        }
        if let ShapeParameters::Rectangle { palette } = &mut self.shape {
            if palette.is_empty() {
                tracing::warn!(preset = %self.name, "empty rectangle palette, using white");
                palette.push(flurry_core::Color::WHITE);
            }
        }
        self
    }

    /// Generator for a system of the given size. `seed` makes it deterministic.
    pub fn generator(&self, dimension: Size, seed: Option<u64>) -> RandomizeParticleGenerator {
        let (shape_rng, generator_seed) = match seed {
            Some(seed) => (ParticleRng::new(seed.wrapping_add(1)), Some(seed)),
            None => (ParticleRng::from_entropy(), None),
        };
        let generator = RandomizeParticleGenerator::new(
            self.generator.clone(),
            dimension,
            self.shape.provider(shape_rng),
        );
        match generator_seed {
            Some(seed) => generator.with_seed(seed),
            None => generator,
        }
    }

    /// Builder pre-loaded with this preset's system, generator and transformation
    pub fn system_builder(&self, dimension: Size, seed: Option<u64>) -> Result<ParticleSystemBuilder> {
        self.validate()?;
        let preset = self.clone().sanitized();
        Ok(ParticleSystem::builder(dimension)
            .parameters(preset.system)
            .generator(preset.generator(dimension, seed))
            .boxed_transformation(preset.transformation.build()))
    }
}
