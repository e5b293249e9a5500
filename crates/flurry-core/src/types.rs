//! Geometric, color and range types

use serde::{Deserialize, Serialize};

/// Pixel dimensions of a particle system
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const BLUE: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    };
    pub const LIGHT_GRAY: Self = Self {
        r: 0.8,
        g: 0.8,
        b: 0.8,
        a: 1.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// A closed float interval `[start, end]`.
///
/// Nothing stops `start > end`; UI sliders routinely cross over while being
/// dragged. Samplers treat such a range as the single point `start`.
/// Serialized as a two-element array.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct FloatRange {
    pub start: f32,
    pub end: f32,
}

impl FloatRange {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// A range covering exactly one value
    pub const fn point(value: f32) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.start && value <= self.end
    }
}

impl From<[f32; 2]> for FloatRange {
    fn from([start, end]: [f32; 2]) -> Self {
        Self { start, end }
    }
}

impl From<FloatRange> for [f32; 2] {
    fn from(range: FloatRange) -> Self {
        [range.start, range.end]
    }
}

/// A closed integer interval `[start, end]`, same conventions as [`FloatRange`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct IntRange {
    pub start: i32,
    pub end: i32,
}

impl IntRange {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub const fn point(value: i32) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.start && value <= self.end
    }
}

impl From<[i32; 2]> for IntRange {
    fn from([start, end]: [i32; 2]) -> Self {
        Self { start, end }
    }
}

impl From<IntRange> for [i32; 2] {
    fn from(range: IntRange) -> Self {
        [range.start, range.end]
    }
}
