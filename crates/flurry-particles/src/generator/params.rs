//! Generator configuration (plain data, serializable)

use flurry_core::{FloatRange, IntRange};
use serde::{Deserialize, Serialize};

const DEFAULT_WIDTH: i32 = 12;
const DEFAULT_HEIGHT: i32 = 12;

/// System edge a particle may enter from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceEdge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Extra rules applied while placing particles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
    /// Limits where along the TOP or LEFT edge a particle appears, as a
    /// fraction of the system width/height in [0, 1]
    Initial { limit_range: FloatRange },
}

/// Parameters for [`crate::generator::RandomizeParticleGenerator`].
///
/// Ranges are closed and may be inverted or degenerate; sampling coerces them
/// instead of failing. Speeds are pixels per tick, angles are degrees.
/// `start_offset_range` only delays a particle's first appearance, never a
/// respawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorParameters {
    pub count: usize,
    pub particle_width_range: IntRange,
    pub particle_height_range: IntRange,
    /// Scatter the initial population anywhere in the system instead of at the edges
    pub randomize_initial_xy: bool,
    pub speed_range: FloatRange,
    pub scale_range: FloatRange,
    pub angle_range: FloatRange,
    pub x_rotational_speed_range: FloatRange,
    pub z_rotational_speed_range: FloatRange,
    pub start_offset_range: IntRange,
    /// Edges particles enter from; one is picked at random per spawn. Empty means TOP.
    pub source_edges: Vec<SourceEdge>,
    pub constraints: Vec<Constraint>,
}

impl Default for GeneratorParameters {
    fn default() -> Self {
        Self {
            count: 0,
            particle_width_range: IntRange::point(DEFAULT_WIDTH),
            particle_height_range: IntRange::point(DEFAULT_HEIGHT),
            randomize_initial_xy: true,
            speed_range: FloatRange::point(0.0),
            scale_range: FloatRange::point(1.0),
            angle_range: FloatRange::point(0.0),
            x_rotational_speed_range: FloatRange::point(0.0),
            z_rotational_speed_range: FloatRange::point(0.0),
            start_offset_range: IntRange::point(0),
            source_edges: vec![SourceEdge::Top],
            constraints: Vec::new(),
        }
    }
}

impl GeneratorParameters {
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// The first initial-placement limit, if any
    pub fn initial_limit(&self) -> Option<FloatRange> {
        self.constraints.iter().find_map(|constraint| match constraint {
            Constraint::Initial { limit_range } => Some(*limit_range),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let params = GeneratorParameters::with_count(10);
        assert_eq!(params.count, 10);
        assert_eq!(params.particle_width_range, IntRange::point(12));
        assert_eq!(params.scale_range, FloatRange::point(1.0));
        assert_eq!(params.source_edges, vec![SourceEdge::Top]);
        assert!(params.randomize_initial_xy);
        assert!(params.initial_limit().is_none());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
count = 400
speed_range = [10.0, 30.0]
angle_range = [85.0, 95.0]
source_edges = ["top", "right"]

[[constraints]]
type = "initial"
limit_range = [0.25, 0.75]
"#;
        let params: GeneratorParameters = toml::from_str(toml_str).unwrap();
        assert_eq!(params.count, 400);
        assert_eq!(params.speed_range, FloatRange::new(10.0, 30.0));
        assert_eq!(params.source_edges, vec![SourceEdge::Top, SourceEdge::Right]);
        assert_eq!(params.particle_height_range, IntRange::point(12));
        assert_eq!(params.initial_limit(), Some(FloatRange::new(0.25, 0.75)));
    }
}
