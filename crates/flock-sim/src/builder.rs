//! Fluent builder for constructing a [`Flock`].

use flock_agent::{Boid, BoidRngs, BoidStore, Obstacle, ObstacleSet, Predator, Strategy};
use flock_core::{Bounds, PredatorId, SimRng, SimulationParameters, Tick, PREDATOR_CAP};
use flock_rules::RuleSet;
use flock_spatial::{IndexPoint, NeighborIndex};

use crate::metrics::Metrics;
use crate::{Flock, SimError, SimResult};

enum BoidSource<V> {
    Random(usize),
    Placed(Vec<Boid<V>>),
}

/// Fluent builder for [`Flock<V>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default                         |
/// |----------------------------|---------------------------------|
/// | `.boids(n)`                | No boids                        |
/// | `.boids_at(v)`             | (replaces `.boids(n)`)          |
/// | `.predators(n)`            | No random predators             |
/// | `.predator_at(p, s)`       | No placed predators             |
/// | `.obstacles(v)`            | No obstacles                    |
/// | `.seed(s)`                 | `0`                             |
/// | `.rules(r)`                | [`RuleSet::standard`]           |
/// | `.snapshot_interval(n)`    | `0` (no snapshots)              |
///
/// Placed predators come first and keep the strategy they were given;
/// random ones follow with `Strategy::for_slot` of the slot they land in.
///
/// # Example
///
/// ```rust,ignore
/// let mut flock = FlockBuilder::<Vec2>::new(SimulationParameters::default())
///     .boids(200)
///     .predators(2)
///     .seed(42)
///     .build()?;
/// flock.run(1_000, &mut NoopObserver);
/// ```
pub struct FlockBuilder<V: IndexPoint> {
    params:            SimulationParameters,
    boids:             BoidSource<V>,
    random_predators:  usize,
    placed_predators:  Vec<(V, Strategy)>,
    obstacles:         Vec<Obstacle<V>>,
    seed:              u64,
    rules:             Option<RuleSet<V>>,
    snapshot_interval: u64,
}

impl<V: IndexPoint> FlockBuilder<V> {
    pub fn new(params: SimulationParameters) -> Self {
        Self {
            params,
            boids:             BoidSource::Random(0),
            random_predators:  0,
            placed_predators:  Vec::new(),
            obstacles:         Vec::new(),
            seed:              0,
            rules:             None,
            snapshot_interval: 0,
        }
    }

    /// `n` boids at uniform positions with random headings.
    pub fn boids(mut self, n: usize) -> Self {
        self.boids = BoidSource::Random(n);
        self
    }

    /// Start from exactly these boids.
    pub fn boids_at(mut self, boids: Vec<Boid<V>>) -> Self {
        self.boids = BoidSource::Placed(boids);
        self
    }

    /// `n` predators at random positions.
    pub fn predators(mut self, n: usize) -> Self {
        self.random_predators = n;
        self
    }

    /// One predator at `position` with a random heading at predator speed.
    pub fn predator_at(mut self, position: V, strategy: Strategy) -> Self {
        self.placed_predators.push((position, strategy));
        self
    }

    pub fn obstacles(mut self, obstacles: Vec<Obstacle<V>>) -> Self {
        self.obstacles = obstacles;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn rules(mut self, rules: RuleSet<V>) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Call `on_snapshot` every `n` frames (`0` disables snapshots).
    pub fn snapshot_interval(mut self, n: u64) -> Self {
        self.snapshot_interval = n;
        self
    }

    /// Validate inputs, place the population and return a ready-to-tick
    /// [`Flock`].
    pub fn build(self) -> SimResult<Flock<V>> {
        // ── Validate ──────────────────────────────────────────────────────
        self.params.validate()?;

        let requested = self.placed_predators.len() + self.random_predators;
        if requested > PREDATOR_CAP {
            return Err(SimError::TooManyPredators { requested, cap: PREDATOR_CAP });
        }

        let bounds = self.params.bounds::<V>();
        if let Some(o) = self.obstacles.iter().find(|o| o.radius <= 0.0) {
            return Err(SimError::Config(format!("obstacle radius must be positive, got {}", o.radius)));
        }

        // ── Population ────────────────────────────────────────────────────
        let mut rng = SimRng::new(self.seed);
        let (boids, placed_boids) = match self.boids {
            BoidSource::Random(n) => (BoidStore::random(n, &bounds, self.params.max_speed, &mut rng), None),
            BoidSource::Placed(v) => (BoidStore::from_boids(v.iter().copied()), Some(v)),
        };
        let boid_rngs = BoidRngs::new(boids.len(), self.seed);

        let speed = self.params.predator.speed;
        let mut next = PredatorId(0);
        let mut predators = Vec::with_capacity(requested);
        let mut placed_predators = Vec::with_capacity(self.placed_predators.len());
        for (position, strategy) in self.placed_predators {
            predators.push(spawn_predator(next, strategy, Some(position), &bounds, speed, &mut rng));
            placed_predators.push((next, position));
            next = next.next();
        }
        for _ in 0..self.random_predators {
            let strategy = Strategy::for_slot(predators.len());
            predators.push(spawn_predator(next, strategy, None, &bounds, speed, &mut rng));
            next = next.next();
        }

        let mut obstacles = ObstacleSet::new();
        for o in self.obstacles {
            obstacles.add(o);
        }

        log::info!(
            "built {}D flock: {} boids, {} predators, {} obstacles, seed {}",
            V::DIM,
            boids.len(),
            predators.len(),
            obstacles.len(),
            self.seed,
        );

        Ok(Flock {
            params:            self.params,
            frame:             Tick::ZERO,
            paused:            false,
            seed:              self.seed,
            rng,
            deltas:            Vec::with_capacity(boids.len()),
            neighbors:         Vec::new(),
            boids,
            boid_rngs,
            placed_boids,
            predators,
            placed_predators,
            next_predator:     next,
            obstacles,
            rules:             self.rules.unwrap_or_default(),
            index:             NeighborIndex::empty(),
            metrics:           Metrics::default(),
            snapshot_interval: self.snapshot_interval,
        })
    }
}

/// One predator for slot `id`.  A placed predator keeps `position` and gets a
/// random heading; otherwise the position is drawn too.  `reset` calls this
/// in the same order as `build` so both consume the RNG identically.
pub(crate) fn spawn_predator<V: IndexPoint>(
    id:       PredatorId,
    strategy: Strategy,
    placed:   Option<V>,
    bounds:   &Bounds<V>,
    speed:    f32,
    rng:      &mut SimRng,
) -> Predator<V> {
    match placed {
        Some(position) => {
            let velocity = rng.unit::<V>() * speed;
            let own = rng.agent(id.0 as u64);
            Predator::new(id, position, velocity, strategy, own)
        }
        None => Predator::random(id, bounds, speed, strategy, rng),
    }
}
