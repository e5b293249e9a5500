//! Particle shapes: what a particle looks like, without tying the simulation
//! to a renderer
//!
//! The simulation only needs a shape's intrinsic footprint. Shapes that draw
//! with the particle's own width/height report `None` from
//! [`ParticleShape::intrinsic_width`] / [`ParticleShape::intrinsic_height`],
//! and the generator samples a size from its configured ranges instead.

use flurry_core::{Color, Size};
use serde::{Deserialize, Serialize};

/// A single path command in shape-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    QuadTo { cx: f32, cy: f32, x: f32, y: f32 },
    Close,
}

/// The visual description of a particle
#[derive(Debug, Clone, PartialEq)]
pub enum ParticleShape {
    Circle {
        radius: u32,
        color: Color,
    },
    /// Drawn from the particle's width/height
    Line {
        stroke_width: f32,
        color: Color,
    },
    Path {
        commands: Vec<PathCommand>,
        stroke_width: u32,
        color: Color,
    },
    /// `bounds` is the measured text box, supplied by whoever builds the shape
    Text {
        text: String,
        font_size: f32,
        color: Color,
        bounds: Size,
    },
    /// `source` is an opaque handle the renderer resolves
    Image {
        source: String,
        size: Size,
        use_image_size: bool,
    },
    /// Drawn from the particle's width/height
    Rectangle {
        color: Color,
    },
}

impl Default for ParticleShape {
    fn default() -> Self {
        ParticleShape::Rectangle {
            color: Color::WHITE,
        }
    }
}

impl ParticleShape {
    /// Intrinsic width in pixels, or `None` for "same as particle"
    pub fn intrinsic_width(&self) -> Option<u32> {
        match self {
            ParticleShape::Circle { radius, .. } => Some(*radius),
            ParticleShape::Path { commands, .. } => Some(path_bounds(commands).width),
            ParticleShape::Text { bounds, .. } => Some(bounds.width),
            ParticleShape::Image {
                size,
                use_image_size,
                ..
            } => use_image_size.then_some(size.width),
            ParticleShape::Line { .. } | ParticleShape::Rectangle { .. } => None,
        }
    }

    /// Intrinsic height in pixels, or `None` for "same as particle"
    pub fn intrinsic_height(&self) -> Option<u32> {
        match self {
            ParticleShape::Circle { radius, .. } => Some(*radius),
            ParticleShape::Path { commands, .. } => Some(path_bounds(commands).height),
            ParticleShape::Text { bounds, .. } => Some(bounds.height),
            ParticleShape::Image {
                size,
                use_image_size,
                ..
            } => use_image_size.then_some(size.height),
            ParticleShape::Line { .. } | ParticleShape::Rectangle { .. } => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ParticleShape::Circle { .. } => "circle",
            ParticleShape::Line { .. } => "line",
            ParticleShape::Path { .. } => "path",
            ParticleShape::Text { .. } => "text",
            ParticleShape::Image { .. } => "image",
            ParticleShape::Rectangle { .. } => "rectangle",
        }
    }
}

/// Bounding box of the path's points (control points included), truncated to whole pixels
pub fn path_bounds(commands: &[PathCommand]) -> Size {
    let mut min = [f32::INFINITY; 2];
    let mut max = [f32::NEG_INFINITY; 2];
    let mut include = |x: f32, y: f32| {
        min[0] = min[0].min(x);
        min[1] = min[1].min(y);
        max[0] = max[0].max(x);
        max[1] = max[1].max(y);
    };

    for command in commands {
        match *command {
            PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => include(x, y),
            PathCommand::QuadTo { cx, cy, x, y } => {
                include(cx, cy);
                include(x, y);
            }
            PathCommand::Close => {}
        }
    }

    if min[0] > max[0] {
        return Size::default();
    }
    Size::new((max[0] - min[0]) as u32, (max[1] - min[1]) as u32)
}

/// Produces a freshly described shape every time the generator asks for one
pub trait ShapeProvider: Send {
    fn provide(&mut self) -> ParticleShape;
}

impl<F> ShapeProvider for F
where
    F: FnMut() -> ParticleShape + Send,
{
    fn provide(&mut self) -> ParticleShape {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_uses_radius_for_both_axes() {
        let shape = ParticleShape::Circle {
            radius: 7,
            color: Color::WHITE,
        };
        assert_eq!(shape.intrinsic_width(), Some(7));
        assert_eq!(shape.intrinsic_height(), Some(7));
    }

    #[test]
    fn line_and_rectangle_defer_to_particle() {
        let line = ParticleShape::Line {
            stroke_width: 2.0,
            color: Color::LIGHT_GRAY,
        };
        assert_eq!(line.intrinsic_width(), None);
        assert_eq!(line.intrinsic_height(), None);
        assert_eq!(ParticleShape::default().intrinsic_width(), None);
    }

    #[test]
    fn image_respects_use_image_size() {
        let mut image = ParticleShape::Image {
            source: "bird".into(),
            size: Size::new(120, 90),
            use_image_size: true,
        };
        assert_eq!(image.intrinsic_width(), Some(120));
        assert_eq!(image.intrinsic_height(), Some(90));

        if let ParticleShape::Image { use_image_size, .. } = &mut image {
            *use_image_size = false;
        }
        assert_eq!(image.intrinsic_width(), None);
    }

    #[test]
    fn path_bounds_cover_control_points() {
        let commands = vec![
            PathCommand::MoveTo { x: 0.0, y: 25.0 },
            PathCommand::QuadTo {
                cx: 12.5,
                cy: 0.0,
                x: 30.0,
                y: 15.0,
            },
            PathCommand::LineTo { x: 20.0, y: 20.0 },
            PathCommand::Close,
        ];
        assert_eq!(path_bounds(&commands), Size::new(30, 25));
        assert_eq!(path_bounds(&[]), Size::default());
    }

    #[test]
    fn closures_are_providers() {
        let mut radius = 0;
        let mut provider = move || {
            radius += 1;
            ParticleShape::Circle {
                radius,
                color: Color::WHITE,
            }
        };
        assert_eq!(provider.provide().intrinsic_width(), Some(1));
        assert_eq!(provider.provide().intrinsic_width(), Some(2));
    }
}
