//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};

/// 2D position on the world grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn add(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Clamp into the inclusive bounds [0, x_max] x [0, y_max]
    pub fn clamp(&self, x_max: i32, y_max: i32) -> Self {
        Self {
            x: self.x.clamp(0, x_max),
            y: self.y.clamp(0, y_max),
        }
    }
}

/// Aggregate counters captured once per simulated day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySnapshot {
    /// Number of people still alive
    pub population: u32,
    /// Number of people currently infected
    pub infected: u32,
    /// Cumulative recoveries, net of re-infections
    pub recovered: u32,
    /// Cumulative deaths
    pub dead: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_clamp() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.clamp(10, 10), Position::new(5, 5));

        let pos = Position::new(-3, 12);
        assert_eq!(pos.clamp(10, 10), Position::new(0, 10));

        let pos = Position::new(11, -1);
        assert_eq!(pos.clamp(10, 10), Position::new(10, 0));
    }

    #[test]
    fn test_position_add() {
        let pos = Position::new(2, 3);
        assert_eq!(pos.add(-5, 4), Position::new(-3, 7));
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = DaySnapshot {
            population: 98,
            infected: 12,
            recovered: 30,
            dead: 2,
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: DaySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
