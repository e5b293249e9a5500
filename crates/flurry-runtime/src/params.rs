//! System-level configuration

use flurry_core::{FlurryError, Result};
use serde::{Deserialize, Serialize};

/// How a [`crate::ParticleSystem`] paces and recycles its population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemParameters {
    /// Logical ticks per second
    pub fps: u32,
    /// Respawn particles that leave the system instead of retiring them
    pub auto_reset_particles: bool,
    /// Recreate the whole population once every particle is dead, otherwise stop
    pub restart_when_all_dead: bool,
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            fps: 60,
            auto_reset_particles: true,
            restart_when_all_dead: true,
        }
    }
}

impl SystemParameters {
    pub fn with_fps(fps: u32) -> Self {
        Self {
            fps,
            ..Default::default()
        }
    }

    /// The tick loop assumes a positive rate; reject anything else up front
    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(FlurryError::InvalidConfig(
                "fps must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SystemParameters::default();
        assert_eq!(params.fps, 60);
        assert!(params.auto_reset_particles);
        assert!(params.restart_when_all_dead);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_zero_fps_rejected() {
        let err = SystemParameters::with_fps(0).validate().unwrap_err();
        assert!(matches!(err, FlurryError::InvalidConfig(_)));
    }

    #[test]
    fn test_partial_toml() {
        let params: SystemParameters = toml::from_str("restart_when_all_dead = false").unwrap();
        assert_eq!(params.fps, 60);
        assert!(!params.restart_when_all_dead);
    }
}
