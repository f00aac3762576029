//! Epidemic world engine.
//!
//! This module implements the bounded 2D grid world where people move,
//! transmit infection, recover, and die.

pub mod agent;
pub mod grid;
pub mod simulation;

pub use agent::Agent;
pub use grid::Grid;
pub use simulation::World;
