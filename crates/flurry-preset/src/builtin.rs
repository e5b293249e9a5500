//! Built-in animation catalog

use crate::format::PresetFile;
use crate::shape::{sakura_petal, ShapeParameters};
use flurry_core::{Color, FloatRange, FlurryError, IntRange, Size};
use flurry_particles::{GeneratorParameters, SequenceStep, SourceEdge, TransformationParameters};
use flurry_runtime::SystemParameters;
use std::fmt;
use std::str::FromStr;

const EMOTION_SCALE_TICKS: i64 = 30;

/// Every animation that ships with Flurry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    Rain,
    Snow,
    Sakura,
    FlyingPoo,
    FlyingMoney,
    FlyingBird,
    TwinkleStar,
    Emotion,
    Confetti,
}

impl AnimationKind {
    pub const ALL: [AnimationKind; 9] = [
        AnimationKind::Rain,
        AnimationKind::Snow,
        AnimationKind::Sakura,
        AnimationKind::FlyingPoo,
        AnimationKind::FlyingMoney,
        AnimationKind::FlyingBird,
        AnimationKind::TwinkleStar,
        AnimationKind::Emotion,
        AnimationKind::Confetti,
    ];

    /// Stable kebab-case name used on the command line and in file names
    pub fn name(&self) -> &'static str {
        match self {
            AnimationKind::Rain => "rain",
            AnimationKind::Snow => "snow",
            AnimationKind::Sakura => "sakura",
            AnimationKind::FlyingPoo => "flying-poo",
            AnimationKind::FlyingMoney => "flying-money",
            AnimationKind::FlyingBird => "flying-bird",
            AnimationKind::TwinkleStar => "twinkle-star",
            AnimationKind::Emotion => "emotion",
            AnimationKind::Confetti => "confetti",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AnimationKind::Rain => "Rain",
            AnimationKind::Snow => "Snow",
            AnimationKind::Sakura => "Sakura (桜吹雪)",
            AnimationKind::FlyingPoo => "Flying Poo",
            AnimationKind::FlyingMoney => "Flying Money",
            AnimationKind::FlyingBird => "Flying Bird",
            AnimationKind::TwinkleStar => "Twinkle Star",
            AnimationKind::Emotion => "Instagram-like emotion",
            AnimationKind::Confetti => "Confetti",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AnimationKind::Rain => "Falling rain drawn with lines.",
            AnimationKind::Snow => "Snowflakes drifting side to side, drawn with circles.",
            AnimationKind::Sakura => "A shower of sakura petals drawn with a path.",
            AnimationKind::FlyingPoo => {
                "Emoji tumbling in from three edges, combining translate, rotation and scale."
            }
            AnimationKind::FlyingMoney => "Banknote emoji spinning down from the top.",
            AnimationKind::FlyingBird => "Birds flying right to left, entering from the right edge.",
            AnimationKind::TwinkleStar => "Blinking stars that appear with staggered start offsets.",
            AnimationKind::Emotion => {
                "Emoji rising from the bottom, then growing and fading out in sequence."
            }
            AnimationKind::Confetti => "Colored rectangles flipping as they fall under gravity.",
        }
    }

    /// The complete preset for this animation
    pub fn preset(&self) -> PresetFile {
        let preset = PresetFile::new(self.name()).with_description(self.description());
        match self {
            AnimationKind::Rain => preset
                .with_generator(GeneratorParameters {
                    count: 400,
                    particle_width_range: IntRange::new(1, 2),
                    particle_height_range: IntRange::new(10, 20),
                    speed_range: FloatRange::new(10.0, 30.0),
                    angle_range: FloatRange::new(85.0, 95.0),
                    ..Default::default()
                })
                .with_transformation(translate())
                .with_shape(ShapeParameters::Line {
                    stroke_range: IntRange::new(2, 6),
                    color: Color::LIGHT_GRAY,
                }),

            AnimationKind::Snow => preset
                .with_generator(GeneratorParameters {
                    count: 125,
                    speed_range: FloatRange::new(1.0, 2.0),
                    angle_range: FloatRange::new(80.0, 100.0),
                    ..Default::default()
                })
                .with_transformation(TransformationParameters::Composite {
                    transformations: vec![
                        TransformationParameters::SinDrift {
                            frequency_factor: 2.0,
                            amplitude: 2.0,
                        },
                        no_scale(),
                    ],
                })
                .with_shape(ShapeParameters::Circle {
                    radius_range: IntRange::new(5, 10),
                    color: Color::WHITE,
                }),

            AnimationKind::Sakura => preset
                .with_system(SystemParameters::with_fps(120))
                .with_generator(GeneratorParameters {
                    count: 40,
                    particle_width_range: IntRange::new(10, 20),
                    particle_height_range: IntRange::new(10, 15),
                    speed_range: FloatRange::new(2.0, 8.0),
                    scale_range: FloatRange::new(0.7, 1.5),
                    angle_range: FloatRange::new(95.0, 140.0),
                    z_rotational_speed_range: FloatRange::new(0.5, 3.5),
                    source_edges: vec![SourceEdge::Top, SourceEdge::Right],
                    ..Default::default()
                })
                .with_transformation(tumble())
                .with_shape(ShapeParameters::Path {
                    stroke_range: IntRange::new(1, 3),
                    color: Color::from_hex(0xFA9599),
                    commands: sakura_petal(),
                }),

            AnimationKind::FlyingPoo => preset
                .with_generator(GeneratorParameters {
                    count: 30,
                    particle_width_range: IntRange::new(1, 10),
                    particle_height_range: IntRange::new(1, 10),
                    speed_range: FloatRange::new(5.0, 15.0),
                    angle_range: FloatRange::new(60.0, 120.0),
                    x_rotational_speed_range: FloatRange::new(1.0, 15.0),
                    z_rotational_speed_range: FloatRange::new(1.0, 15.0),
                    source_edges: vec![SourceEdge::Top, SourceEdge::Left, SourceEdge::Right],
                    ..Default::default()
                })
                .with_transformation(tumble())
                .with_shape(ShapeParameters::Text {
                    text: "\u{1F4A9}".to_string(),
                    font_size_range: IntRange::point(14),
                    color: Color::BLACK,
                }),

            AnimationKind::FlyingMoney => preset
                .with_generator(GeneratorParameters {
                    count: 30,
                    particle_width_range: IntRange::new(1, 10),
                    particle_height_range: IntRange::new(1, 10),
                    speed_range: FloatRange::new(3.0, 10.0),
                    angle_range: FloatRange::new(45.0, 135.0),
                    x_rotational_speed_range: FloatRange::new(1.0, 3.0),
                    z_rotational_speed_range: FloatRange::new(1.0, 3.0),
                    ..Default::default()
                })
                .with_transformation(TransformationParameters::Composite {
                    transformations: vec![translate(), TransformationParameters::Rotation],
                })
                .with_shape(ShapeParameters::Text {
                    text: "\u{1F4B5}".to_string(),
                    font_size_range: IntRange::new(9, 24),
                    color: Color::BLUE,
                }),

            AnimationKind::FlyingBird => preset
                .with_generator(GeneratorParameters {
                    count: 5,
                    randomize_initial_xy: false,
                    particle_width_range: IntRange::new(100, 200),
                    particle_height_range: IntRange::new(80, 100),
                    speed_range: FloatRange::new(5.0, 30.0),
                    angle_range: FloatRange::new(175.0, 185.0),
                    source_edges: vec![SourceEdge::Right],
                    ..Default::default()
                })
                .with_transformation(translate())
                .with_shape(ShapeParameters::Image {
                    source: "flying_bird".to_string(),
                    size: Size::new(120, 90),
                    use_image_size: false,
                }),

            AnimationKind::TwinkleStar => preset
                .with_generator(GeneratorParameters {
                    count: 250,
                    particle_width_range: IntRange::new(1, 4),
                    particle_height_range: IntRange::new(1, 4),
                    start_offset_range: IntRange::new(0, 60),
                    ..Default::default()
                })
                .with_transformation(TransformationParameters::Blink {
                    frequency_factor_range: FloatRange::new(0.5, 2.0),
                })
                .with_shape(ShapeParameters::Circle {
                    radius_range: IntRange::new(1, 4),
                    color: Color::from_hex(0xFAFFFF),
                }),

            AnimationKind::Emotion => {
                let rate = 1.0 / EMOTION_SCALE_TICKS as f32;
                preset
                    .with_system(SystemParameters {
                        auto_reset_particles: false,
                        restart_when_all_dead: false,
                        ..Default::default()
                    })
                    .with_generator(GeneratorParameters {
                        count: 16,
                        randomize_initial_xy: false,
                        particle_width_range: IntRange::new(1, 10),
                        particle_height_range: IntRange::new(1, 10),
                        speed_range: FloatRange::new(10.0, 15.0),
                        angle_range: FloatRange::new(265.0, 275.0),
                        start_offset_range: IntRange::new(0, 30),
                        source_edges: vec![SourceEdge::Bottom],
                        ..Default::default()
                    })
                    .with_transformation(TransformationParameters::Sequence {
                        steps: vec![
                            SequenceStep {
                                duration: 40,
                                transformation: translate(),
                            },
                            SequenceStep {
                                duration: EMOTION_SCALE_TICKS,
                                transformation: TransformationParameters::ScaleAndDim {
                                    x_delta: rate,
                                    y_delta: rate,
                                    alpha_delta: rate,
                                },
                            },
                        ],
                    })
                    .with_shape(ShapeParameters::Text {
                        text: "\u{1F60D}".to_string(),
                        font_size_range: IntRange::point(20),
                        color: Color::WHITE,
                    })
            }

            AnimationKind::Confetti => preset
                .with_generator(GeneratorParameters {
                    count: 80,
                    particle_width_range: IntRange::new(6, 12),
                    particle_height_range: IntRange::new(4, 8),
                    speed_range: FloatRange::new(5.0, 12.0),
                    angle_range: FloatRange::new(60.0, 120.0),
                    x_rotational_speed_range: FloatRange::new(5.0, 15.0),
                    z_rotational_speed_range: FloatRange::new(1.0, 10.0),
                    ..Default::default()
                })
                .with_transformation(TransformationParameters::Composite {
                    transformations: vec![
                        TransformationParameters::Translate { gravity: 0.05 },
                        TransformationParameters::Rotation,
                    ],
                })
                .with_shape(ShapeParameters::Rectangle {
                    palette: vec![
                        Color::from_hex(0xF44336),
                        Color::from_hex(0xFFC107),
                        Color::from_hex(0x4CAF50),
                        Color::from_hex(0x2196F3),
                        Color::from_hex(0x9C27B0),
                    ],
                }),
        }
    }
}

fn translate() -> TransformationParameters {
    TransformationParameters::Translate { gravity: 0.0 }
}

fn no_scale() -> TransformationParameters {
    TransformationParameters::Scale {
        x_delta: 0.0,
        y_delta: 0.0,
    }
}

/// Translate, flip and rotate, then hold the spawn scale
fn tumble() -> TransformationParameters {
    TransformationParameters::Composite {
        transformations: vec![translate(), TransformationParameters::Rotation, no_scale()],
    }
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimationKind {
    type Err = FlurryError;

    /// Case-insensitive; `flying-poo`, `flying_poo` and `FlyingPoo` all match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        AnimationKind::ALL
            .into_iter()
            .find(|kind| kind.name().replace('-', "") == normalized)
            .ok_or_else(|| FlurryError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flurry_particles::{ParticleGenerator, ParticleRng};

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("rain".parse::<AnimationKind>().unwrap(), AnimationKind::Rain);
        assert_eq!(
            "FlyingPoo".parse::<AnimationKind>().unwrap(),
            AnimationKind::FlyingPoo
        );
        assert_eq!(
            "twinkle_star".parse::<AnimationKind>().unwrap(),
            AnimationKind::TwinkleStar
        );
        assert_eq!(
            "Flying-Bird".parse::<AnimationKind>().unwrap(),
            AnimationKind::FlyingBird
        );
        assert!(matches!(
            "hail".parse::<AnimationKind>(),
            Err(FlurryError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_names_round_trip_through_display() {
        for kind in AnimationKind::ALL {
            assert_eq!(kind.to_string().parse::<AnimationKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_every_preset_validates() {
        for kind in AnimationKind::ALL {
            let preset = kind.preset();
            assert!(preset.validate().is_ok(), "{kind}");
            assert!(preset.generator.count > 0, "{kind}");
            assert_eq!(preset.name, kind.name());
        }
    }

    #[test]
    fn test_emotion_sequence_outlives_translation() {
        let preset = AnimationKind::Emotion.preset();
        assert!(!preset.system.auto_reset_particles);
        assert!(!preset.system.restart_when_all_dead);
        let TransformationParameters::Sequence { steps } = &preset.transformation else {
            panic!("Expected sequence");
        };
        let total: i64 = steps.iter().map(|step| step.duration).sum();
        assert_eq!(total, 70);
    }

    #[test]
    fn test_sakura_particles_take_petal_size() {
        let preset = AnimationKind::Sakura.preset();
        let mut generator = preset.generator(Size::new(400, 800), Some(4));
        for particle in generator.create_particles() {
            assert_eq!(particle.instinct.width, 30);
            assert_eq!(particle.instinct.height, 40);
        }
    }

    #[test]
    fn test_confetti_colors_come_from_palette() {
        let preset = AnimationKind::Confetti.preset();
        let ShapeParameters::Rectangle { palette } = &preset.shape else {
            panic!("Expected rectangle");
        };
        let mut rng = ParticleRng::new(6);
        for _ in 0..20 {
            let shape = preset.shape.sample(&mut rng);
            let flurry_particles::ParticleShape::Rectangle { color } = shape else {
                panic!("Expected rectangle");
            };
            assert!(palette.contains(&color));
        }
    }
}
