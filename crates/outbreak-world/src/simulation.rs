//! World driver: owns the population, resolves exposure, tracks aggregates.

use crate::agent::Agent;
use crate::grid::Grid;
use outbreak_core::{DaySnapshot, Position, Result, WorldConfig};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument};

/// Youngest and oldest age assigned to a generated person.
const AGE_MIN: u32 = 1;
const AGE_MAX: u32 = 85;

/// The simulated world: the full population, the spatial index over it, and
/// the running aggregate counters.
///
/// People are processed in creation order every day; that order, together
/// with the seeded generator, makes a run fully reproducible.
pub struct World {
    config: WorldConfig,
    agents: Vec<Agent>,
    grid: Grid,
    rng: ChaCha8Rng,
    day: u64,
    population: u32,
    infected: u32,
    recovered: u32,
    dead: u32,
}

impl World {
    /// Build a world from the given configuration.
    ///
    /// Fails if the configuration does not pass validation; nothing is
    /// constructed in that case. People are placed uniformly at random with
    /// uniformly random ages, and the first `num_initial_infected` of them
    /// (in creation order) start out infected.
    pub fn new(config: WorldConfig) -> Result<Self> {
        config.validate()?;

        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        let grid = Grid::new(config.x_max, config.y_max);

        let mut world = Self {
            agents: Vec::with_capacity(config.num_people as usize),
            grid,
            rng,
            day: 0,
            population: config.num_people,
            infected: 0,
            recovered: 0,
            dead: 0,
            config,
        };

        for i in 0..world.config.num_people {
            let x = world.rng.gen_range(0..=world.config.x_max);
            let y = world.rng.gen_range(0..=world.config.y_max);
            let age = world.rng.gen_range(AGE_MIN..=AGE_MAX);
            world.add_person(x, y, i < world.config.num_initial_infected, age);
        }

        debug!(
            num_people = world.config.num_people,
            num_initial_infected = world.config.num_initial_infected,
            seed = world.config.seed,
            "world populated"
        );

        Ok(world)
    }

    /// Insert one person at the given cell.
    ///
    /// Used for initial seeding and available for mid-run insertion. The
    /// person is indexed immediately; only the infected counter is adjusted,
    /// the population counter is fixed at construction.
    pub fn add_person(&mut self, x: i32, y: i32, infected: bool, age: u32) {
        let position = Position::new(x, y);
        self.grid.insert(position, self.agents.len());
        self.agents.push(Agent::new(position, age, infected));
        if infected {
            self.infected += 1;
        }
    }

    /// Advance the world by one day.
    ///
    /// Every person is processed in creation order: daily transition first,
    /// then exposure resolution for the still-contagious. Exposure scans the
    /// index built at the end of the previous day, from each contagious
    /// person's start-of-day position; the index is rebuilt from current
    /// positions only after the full pass.
    pub fn step(&mut self) {
        for i in 0..self.agents.len() {
            if self.agents[i].is_dead() {
                continue;
            }

            let was_infected = self.agents[i].is_infected();
            let origin = self.agents[i].position;

            let alive =
                self.agents[i].advance_day(self.config.x_max, self.config.y_max, &mut self.rng);
            if !alive {
                self.dead += 1;
                self.population -= 1;
                self.infected -= 1;
                continue;
            }

            if was_infected && !self.agents[i].is_infected() {
                self.recovered += 1;
                self.infected -= 1;
            }

            if self.agents[i].is_infected()
                && self.agents[i].infected_time() > self.config.contagious_delay
            {
                self.resolve_exposure(origin);
            }
        }

        self.rebuild_grid();
        self.day += 1;
    }

    /// Roll exposure for every susceptible person indexed near a contagious
    /// person's start-of-day position.
    ///
    /// The scan window is half-open on the high side and clamped to the
    /// world bounds, so the outermost column and row are never scanned.
    fn resolve_exposure(&mut self, origin: Position) {
        let radius = self.config.contagious_radius;
        let x_lo = (origin.x - radius).max(0);
        let x_hi = (origin.x + radius).min(self.config.x_max);
        let y_lo = (origin.y - radius).max(0);
        let y_hi = (origin.y + radius).min(self.config.y_max);

        for x in x_lo..x_hi {
            for y in y_lo..y_hi {
                for &other in self.grid.cell(x, y) {
                    if self.agents[other].is_infected() {
                        continue;
                    }
                    if !self.agents[other].exposure_check(&mut self.rng) {
                        continue;
                    }

                    let reinfection = self.agents[other].infected_time() > 0;
                    self.agents[other].expose();
                    self.infected += 1;
                    if reinfection {
                        self.recovered -= 1;
                    }
                }
            }
        }
    }

    /// Discard and rebuild the spatial index from current positions. The
    /// dead fall out of the index here; everyone alive lands in exactly one
    /// bucket.
    fn rebuild_grid(&mut self) {
        self.grid.clear();
        for (idx, agent) in self.agents.iter().enumerate() {
            if agent.is_dead() {
                continue;
            }
            self.grid.insert(agent.position, idx);
        }
    }

    /// Run the simulation, capturing one aggregate snapshot per day.
    ///
    /// The first snapshot is the state before any step. The run ends at the
    /// iteration budget, at extinction, or at eradication, whichever comes
    /// first, so the result holds `1 + min(iterations, days-until-
    /// termination)` snapshots.
    #[instrument(skip(self))]
    pub fn run(&mut self, iterations: u64) -> Vec<DaySnapshot> {
        info!(
            population = self.population,
            infected = self.infected,
            "starting simulation run"
        );

        let mut snapshots = Vec::new();
        snapshots.push(self.snapshot());

        let mut days = 0;
        while days < iterations && self.population > 0 && self.infected > 0 {
            self.step();
            days += 1;
            snapshots.push(self.snapshot());

            if days % 100 == 0 {
                info!(
                    day = days,
                    population = self.population,
                    infected = self.infected,
                    recovered = self.recovered,
                    dead = self.dead,
                    "simulation progress"
                );
            }
        }

        info!(
            days_run = days,
            population = self.population,
            infected = self.infected,
            recovered = self.recovered,
            dead = self.dead,
            "simulation finished"
        );

        snapshots
    }

    /// Aggregate counters as of the current day.
    pub fn snapshot(&self) -> DaySnapshot {
        DaySnapshot {
            population: self.population,
            infected: self.infected,
            recovered: self.recovered,
            dead: self.dead,
        }
    }

    /// Days simulated so far.
    pub fn day(&self) -> u64 {
        self.day
    }

    pub fn population(&self) -> u32 {
        self.population
    }

    pub fn infected(&self) -> u32 {
        self.infected
    }

    pub fn recovered(&self) -> u32 {
        self.recovered
    }

    pub fn dead(&self) -> u32 {
        self.dead
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// The full population, in creation order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }
}
