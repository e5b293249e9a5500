//! Serializable description of a transformation pipeline

use super::{
    BlinkTransformation, CompositeTransformation, HorizontalSinDriftTransformation,
    LinearRotationTransformation, LinearScaleTransformation, LinearTranslateTransformation,
    ParticleTransformation, ScaleAndDimTransformation, SequenceTransformation,
};
use flurry_core::FloatRange;
use serde::{Deserialize, Serialize};

fn default_frequency_factor() -> f32 {
    2.0
}

fn default_amplitude() -> f32 {
    2.0
}

fn default_blink_range() -> FloatRange {
    FloatRange::new(0.5, 2.0)
}

/// Plain-data form of every transformation, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformationParameters {
    Translate {
        #[serde(default)]
        gravity: f32,
    },
    Rotation,
    Scale {
        #[serde(default)]
        x_delta: f32,
        #[serde(default)]
        y_delta: f32,
    },
    ScaleAndDim {
        #[serde(default)]
        x_delta: f32,
        #[serde(default)]
        y_delta: f32,
        #[serde(default)]
        alpha_delta: f32,
    },
    SinDrift {
        #[serde(default = "default_frequency_factor")]
        frequency_factor: f32,
        #[serde(default = "default_amplitude")]
        amplitude: f32,
    },
    Blink {
        #[serde(default = "default_blink_range")]
        frequency_factor_range: FloatRange,
    },
    Composite {
        #[serde(default)]
        transformations: Vec<TransformationParameters>,
    },
    Sequence {
        #[serde(default)]
        steps: Vec<SequenceStep>,
    },
}

/// One window of a sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceStep {
    pub duration: i64,
    pub transformation: TransformationParameters,
}

impl Default for TransformationParameters {
    fn default() -> Self {
        TransformationParameters::Translate { gravity: 0.0 }
    }
}

impl TransformationParameters {
    /// Instantiates the described transformation
    pub fn build(&self) -> Box<dyn ParticleTransformation> {
        match self {
            TransformationParameters::Translate { gravity } => {
                Box::new(LinearTranslateTransformation::with_gravity(*gravity))
            }
            TransformationParameters::Rotation => Box::new(LinearRotationTransformation::new()),
            TransformationParameters::Scale { x_delta, y_delta } => {
                Box::new(LinearScaleTransformation::new(*x_delta, *y_delta))
            }
            TransformationParameters::ScaleAndDim {
                x_delta,
                y_delta,
                alpha_delta,
            } => Box::new(ScaleAndDimTransformation::new(
                *x_delta,
                *y_delta,
                *alpha_delta,
            )),
            TransformationParameters::SinDrift {
                frequency_factor,
                amplitude,
            } => Box::new(HorizontalSinDriftTransformation::new(
                *frequency_factor,
                *amplitude,
            )),
            TransformationParameters::Blink {
                frequency_factor_range,
            } => Box::new(BlinkTransformation::new(*frequency_factor_range)),
            TransformationParameters::Composite { transformations } => Box::new(
                CompositeTransformation::new(transformations.iter().map(Self::build).collect()),
            ),
            TransformationParameters::Sequence { steps } => {
                let mut sequence = SequenceTransformation::new();
                for step in steps {
                    sequence.add(step.transformation.build(), step.duration);
                }
                Box::new(sequence)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TransformationParameters::Translate { .. } => "translate",
            TransformationParameters::Rotation => "rotation",
            TransformationParameters::Scale { .. } => "scale",
            TransformationParameters::ScaleAndDim { .. } => "scale_and_dim",
            TransformationParameters::SinDrift { .. } => "sin_drift",
            TransformationParameters::Blink { .. } => "blink",
            TransformationParameters::Composite { .. } => "composite",
            TransformationParameters::Sequence { .. } => "sequence",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::{Instinct, Particle};
    use flurry_core::ParticleId;

    #[test]
    fn parses_nested_pipeline() {
        let toml_str = r#"
type = "composite"

[[transformations]]
type = "translate"
gravity = 0.1

[[transformations]]
type = "rotation"

[[transformations]]
type = "sin_drift"
"#;
        let params: TransformationParameters = toml::from_str(toml_str).unwrap();
        let TransformationParameters::Composite { transformations } = &params else {
            panic!("Expected composite");
        };
        assert_eq!(transformations.len(), 3);
        assert_eq!(
            transformations[2],
            TransformationParameters::SinDrift {
                frequency_factor: 2.0,
                amplitude: 2.0
            }
        );
    }

    #[test]
    fn parses_sequence_steps() {
        let toml_str = r#"
type = "sequence"

[[steps]]
duration = 40
transformation = { type = "translate" }

[[steps]]
duration = 30
transformation = { type = "scale_and_dim", x_delta = 0.033, y_delta = 0.033, alpha_delta = 0.033 }
"#;
        let params: TransformationParameters = toml::from_str(toml_str).unwrap();
        let TransformationParameters::Sequence { steps } = &params else {
            panic!("Expected sequence");
        };
        assert_eq!(steps[0].duration, 40);
        assert_eq!(steps[1].transformation.name(), "scale_and_dim");
    }

    #[test]
    fn built_sequence_kills_after_total_duration() {
        let params = TransformationParameters::Sequence {
            steps: vec![
                SequenceStep {
                    duration: 3,
                    transformation: TransformationParameters::default(),
                },
                SequenceStep {
                    duration: 2,
                    transformation: TransformationParameters::Rotation,
                },
            ],
        };
        let mut transformation = params.build();
        let mut p = Particle::new(ParticleId(1), Instinct::default());
        transformation.transform(&mut p, 4);
        assert!(p.is_alive());
        transformation.transform(&mut p, 5);
        assert!(!p.is_alive());
    }

    #[test]
    fn built_translate_moves() {
        let mut transformation = TransformationParameters::default().build();
        let mut p = Particle::new(
            ParticleId(1),
            Instinct {
                speed: 4.0,
                ..Default::default()
            },
        );
        transformation.transform(&mut p, 0);
        assert_eq!(p.x, 4.0);
    }
}
