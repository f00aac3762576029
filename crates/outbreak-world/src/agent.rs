//! Person state and daily transitions.

use outbreak_core::Position;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One simulated person.
///
/// Infection state is private: the world reads it through accessors and may
/// flip it only through [`Agent::expose`]. The recovery, death, and movement
/// transitions all live here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Current cell on the world grid
    pub position: Position,
    /// Age in years, fixed at creation
    pub age: u32,
    infected: bool,
    infected_time: u32,
    dead: bool,
}

impl Agent {
    pub fn new(position: Position, age: u32, infected: bool) -> Self {
        Self {
            position,
            age,
            infected,
            infected_time: 0,
            dead: false,
        }
    }

    pub fn is_infected(&self) -> bool {
        self.infected
    }

    /// Days spent infected. Stops advancing on recovery and keeps its value,
    /// which is how a previous infection is remembered on re-exposure.
    pub fn infected_time(&self) -> u32 {
        self.infected_time
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Mark this person infected. Called by the world when an exposure roll
    /// succeeds; counter bookkeeping stays on the world side.
    pub(crate) fn expose(&mut self) {
        self.infected = true;
    }

    /// Advance this person by one day. Returns false once the person is dead.
    ///
    /// An infected person first rolls recovery, and only on a failed recovery
    /// rolls death; dying skips the day's movement. Everyone still alive takes
    /// one independent step per axis, clamped into the world bounds.
    pub fn advance_day(&mut self, x_max: i32, y_max: i32, rng: &mut impl Rng) -> bool {
        if self.dead {
            return false;
        }

        if self.infected {
            self.infected_time += 1;

            if self.recovery_check(rng) {
                self.infected = false;
            } else if self.death_check(rng) {
                self.dead = true;
                return false;
            }
        }

        let dx = self.movement_delta(rng);
        let dy = self.movement_delta(rng);
        self.position = self.position.add(dx, dy).clamp(x_max, y_max);

        true
    }

    /// Whether an infected person recovers today.
    ///
    /// No recovery in the first ten days. Through day 17 the odds favor the
    /// young; from day 18 on they flatten to 0.3 regardless of age.
    fn recovery_check(&self, rng: &mut impl Rng) -> bool {
        if self.infected_time < 10 {
            false
        } else if self.infected_time < 18 {
            let p = if self.age < 50 { 0.5 } else { 0.3 };
            rng.gen::<f64>() < p
        } else {
            rng.gen::<f64>() < 0.3
        }
    }

    /// Whether an infected person dies today. Only consulted when the
    /// recovery roll failed. No deaths before day seven; the odds climb with
    /// age and again from day 14.
    fn death_check(&self, rng: &mut impl Rng) -> bool {
        if self.infected_time < 7 {
            false
        } else if self.infected_time < 14 {
            let p = if self.age < 50 {
                0.001
            } else if self.age < 70 {
                0.006
            } else {
                0.015
            };
            rng.gen::<f64>() < p
        } else {
            let p = if self.age < 50 {
                0.002
            } else if self.age < 70 {
                0.015
            } else {
                0.03
            };
            rng.gen::<f64>() < p
        }
    }

    /// One signed step along a single axis, drawn uniformly from the activity
    /// range for this person's age. Younger people range further.
    pub fn movement_delta(&self, rng: &mut impl Rng) -> i32 {
        let movement = if self.age < 30 {
            10
        } else if self.age < 50 {
            8
        } else if self.age < 70 {
            5
        } else {
            3
        };
        rng.gen_range(-movement..=movement)
    }

    /// Probability of resisting re-infection on exposure.
    pub fn immunity_level(&self) -> f64 {
        0.95
    }

    /// Whether this person catches the infection after sharing a neighborhood
    /// with a contagious person today.
    ///
    /// The exposure rate reuses the activity draw, so it can come out zero or
    /// negative, in which case infection is impossible on this roll. A person
    /// with any prior infection gets the immunity discount.
    pub fn exposure_check(&self, rng: &mut impl Rng) -> bool {
        let exposure_rate = 0.05 * self.movement_delta(rng) as f64;

        if self.infected_time == 0 {
            rng.gen::<f64>() < exposure_rate
        } else {
            rng.gen::<f64>() < (1.0 - self.immunity_level()) * exposure_rate
        }
    }
}
