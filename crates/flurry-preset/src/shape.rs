//! Serializable shape descriptions and the providers built from them

use flurry_core::{Color, FlurryError, IntRange, Result, Size};
use flurry_particles::{ParticleRng, ParticleShape, PathCommand, ShapeProvider};
use serde::{Deserialize, Serialize};

/// What each spawned particle looks like, as plain data.
///
/// Ranges are sampled once per particle, so a snow preset with
/// `radius_range = [5, 10]` produces flakes of mixed sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeParameters {
    Circle {
        radius_range: IntRange,
        #[serde(default)]
        color: Color,
    },
    Line {
        stroke_range: IntRange,
        #[serde(default)]
        color: Color,
    },
    Path {
        stroke_range: IntRange,
        #[serde(default)]
        color: Color,
        commands: Vec<PathCommand>,
    },
    Text {
        text: String,
        font_size_range: IntRange,
        #[serde(default)]
        color: Color,
    },
    Image {
        source: String,
        size: Size,
        #[serde(default)]
        use_image_size: bool,
    },
    Rectangle {
        #[serde(default)]
        palette: Vec<Color>,
    },
}

impl Default for ShapeParameters {
    fn default() -> Self {
        ShapeParameters::Rectangle {
            palette: vec![Color::WHITE],
        }
    }
}

impl ShapeParameters {
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeParameters::Circle { .. } => "circle",
            ShapeParameters::Line { .. } => "line",
            ShapeParameters::Path { .. } => "path",
            ShapeParameters::Text { .. } => "text",
            ShapeParameters::Image { .. } => "image",
            ShapeParameters::Rectangle { .. } => "rectangle",
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            ShapeParameters::Text { text, .. } if text.is_empty() => Err(
                FlurryError::InvalidConfig("text shape needs a non-empty text".to_string()),
            ),
            ShapeParameters::Image { source, .. } if source.is_empty() => Err(
                FlurryError::InvalidConfig("image shape needs a source".to_string()),
            ),
            _ => Ok(()),
        }
    }

    /// Describe one concrete shape, sampling every range from `rng`
    pub fn sample(&self, rng: &mut ParticleRng) -> ParticleShape {
        match self {
            ShapeParameters::Circle {
                radius_range,
                color,
            } => ParticleShape::Circle {
                radius: rng.int_in(*radius_range).max(0) as u32,
                color: *color,
            },
            ShapeParameters::Line {
                stroke_range,
                color,
            } => ParticleShape::Line {
                stroke_width: rng.int_in(*stroke_range).max(0) as f32,
                color: *color,
            },
            ShapeParameters::Path {
                stroke_range,
                color,
                commands,
            } => ParticleShape::Path {
                commands: commands.clone(),
                stroke_width: rng.int_in(*stroke_range).max(0) as u32,
                color: *color,
            },
            ShapeParameters::Text {
                text,
                font_size_range,
                color,
            } => {
                let font_size = rng.int_in(*font_size_range).max(1) as u32;
                ParticleShape::Text {
                    text: text.clone(),
                    font_size: font_size as f32,
                    color: *color,
                    bounds: text_bounds(text, font_size),
                }
            }
            ShapeParameters::Image {
                source,
                size,
                use_image_size,
            } => ParticleShape::Image {
                source: source.clone(),
                size: *size,
                use_image_size: *use_image_size,
            },
            ShapeParameters::Rectangle { palette } => ParticleShape::Rectangle {
                color: rng.choose(palette).copied().unwrap_or(Color::WHITE),
            },
        }
    }

    /// A provider that samples a fresh shape on every call
    pub fn provider(&self, rng: ParticleRng) -> impl ShapeProvider + 'static {
        let parameters = self.clone();
        let mut rng = rng;
        move || parameters.sample(&mut rng)
    }
}

/// Measured box of a rendered string, approximated as one em per character
pub fn text_bounds(text: &str, font_size: u32) -> Size {
    let chars = text.chars().count() as u32;
    Size::new(chars.max(1) * font_size, font_size)
}

/// Outline of a single sakura petal
pub fn sakura_petal() -> Vec<PathCommand> {
    vec![
        PathCommand::MoveTo { x: 0.0, y: 25.0 },
        PathCommand::QuadTo {
            cx: 12.5,
            cy: 0.0,
            x: 30.0,
            y: 15.0,
        },
        PathCommand::LineTo { x: 20.0, y: 20.0 },
        PathCommand::LineTo { x: 30.0, y: 25.0 },
        PathCommand::QuadTo {
            cx: 12.5,
            cy: 40.0,
            x: 0.0,
            y: 25.0,
        },
        PathCommand::Close,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use flurry_particles::path_bounds;

    #[test]
    fn test_circle_radius_within_range() {
        let params = ShapeParameters::Circle {
            radius_range: IntRange::new(5, 10),
            color: Color::WHITE,
        };
        let mut rng = ParticleRng::new(1);
        for _ in 0..50 {
            let radius = params.sample(&mut rng).intrinsic_width().unwrap();
            assert!((5..=10).contains(&radius));
        }
    }

    #[test]
    fn test_text_bounds_one_em_per_char() {
        assert_eq!(text_bounds("ab", 14), Size::new(28, 14));
        // Emoji are a single char each
        assert_eq!(text_bounds("\u{1F4A9}", 20), Size::new(20, 20));
        assert_eq!(text_bounds("", 10), Size::new(10, 10));
    }

    #[test]
    fn test_text_shape_carries_bounds() {
        let params = ShapeParameters::Text {
            text: "$".into(),
            font_size_range: IntRange::point(12),
            color: Color::BLUE,
        };
        let shape = params.sample(&mut ParticleRng::new(2));
        assert_eq!(shape.intrinsic_width(), Some(12));
        assert_eq!(shape.intrinsic_height(), Some(12));
    }

    #[test]
    fn test_rectangle_picks_from_palette() {
        let palette = vec![Color::from_hex(0xFF0000), Color::from_hex(0x00FF00)];
        let params = ShapeParameters::Rectangle {
            palette: palette.clone(),
        };
        let mut provider = params.provider(ParticleRng::new(3));
        for _ in 0..20 {
            let ParticleShape::Rectangle { color } = provider.provide() else {
                panic!("Expected rectangle");
            };
            assert!(palette.contains(&color));
        }

        let empty = ShapeParameters::Rectangle { palette: vec![] };
        assert_eq!(
            empty.sample(&mut ParticleRng::new(3)),
            ParticleShape::Rectangle {
                color: Color::WHITE
            }
        );
    }

    #[test]
    fn test_sakura_petal_bounds() {
        assert_eq!(path_bounds(&sakura_petal()), Size::new(30, 40));
    }

    #[test]
    fn test_validate_rejects_empty_text() {
        let params = ShapeParameters::Text {
            text: String::new(),
            font_size_range: IntRange::point(12),
            color: Color::BLACK,
        };
        assert!(matches!(
            params.validate(),
            Err(FlurryError::InvalidConfig(_))
        ));
        assert!(ShapeParameters::default().validate().is_ok());
    }

    #[test]
    fn test_parse_tagged_shape() {
        let toml_str = r#"
kind = "line"
stroke_range = [2, 6]
color = { r = 0.8, g = 0.8, b = 0.8, a = 1.0 }
"#;
        let params: ShapeParameters = toml::from_str(toml_str).unwrap();
        assert_eq!(
            params,
            ShapeParameters::Line {
                stroke_range: IntRange::new(2, 6),
                color: Color::LIGHT_GRAY,
            }
        );
    }
}
