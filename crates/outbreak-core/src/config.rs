//! Configuration types for the simulation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// World configuration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Number of people created at simulation start
    pub num_people: u32,
    /// How many of the initial people start out infected
    pub num_initial_infected: u32,
    /// Half-width of the square neighborhood scanned for exposure
    pub contagious_radius: i32,
    /// Largest x coordinate a person can occupy
    pub x_max: i32,
    /// Largest y coordinate a person can occupy
    pub y_max: i32,
    /// Days after infection before a person can transmit
    pub contagious_delay: u32,
    /// Random seed for reproducibility
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            num_people: 1000,
            num_initial_infected: 5,
            contagious_radius: 2,
            x_max: 200,
            y_max: 200,
            contagious_delay: 1,
            seed: 0,
        }
    }
}

impl WorldConfig {
    /// Check the construction preconditions.
    ///
    /// The population must strictly exceed the initial infected count, and
    /// the numeric parameters must describe a usable grid. Rejection here
    /// means no world is built at all.
    pub fn validate(&self) -> Result<()> {
        if self.num_people <= self.num_initial_infected {
            return Err(Error::Validation(format!(
                "population size ({}) must exceed initial infected count ({})",
                self.num_people, self.num_initial_infected
            )));
        }

        if self.x_max <= 0 || self.y_max <= 0 {
            return Err(Error::Validation(format!(
                "world bounds must be positive, got ({}, {})",
                self.x_max, self.y_max
            )));
        }

        if self.contagious_radius < 0 {
            return Err(Error::Validation(format!(
                "contagion radius must be non-negative, got {}",
                self.contagious_radius
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WorldConfig::default();
        assert_eq!(config.x_max, 200);
        assert_eq!(config.y_max, 200);
        assert_eq!(config.contagious_delay, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_initial_infected_at_population_size() {
        let config = WorldConfig {
            num_people: 5,
            num_initial_infected: 5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_degenerate_bounds() {
        let config = WorldConfig {
            x_max: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = WorldConfig {
            y_max: -10,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_radius() {
        let config = WorldConfig {
            contagious_radius: -1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = WorldConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: WorldConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.num_people, deserialized.num_people);
        assert_eq!(config.seed, deserialized.seed);
    }
}
