//! The `Flock` struct and its five-phase tick.

use flock_agent::{clamp_speed, integrate, Boid, BoidRngs, BoidStore, HuntPhase, Obstacle, ObstacleSet, Predator, Strategy};
use flock_core::{Bounds, ObstacleId, PredatorId, SimRng, SimulationParameters, Tick, Vec2, Vec3, PREDATOR_CAP};
use flock_hunt::{step_predator, HuntEvent, Prey};
use flock_rules::{FlockContext, RuleSet};
use flock_spatial::{IndexPoint, NeighborIndex};

use crate::builder::spawn_predator;
use crate::metrics::Metrics;
use crate::observer::{FlockObserver, NoopObserver};

pub type Flock2D = Flock<Vec2>;
pub type Flock3D = Flock<Vec3>;

/// Flat per-predator view for snapshot consumers.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredatorView<V> {
    pub id:       PredatorId,
    pub position: V,
    pub velocity: V,
    pub strategy: Strategy,
    pub phase:    HuntPhase,
}

// ── Flock ─────────────────────────────────────────────────────────────────────

/// One independent flocking simulation.
///
/// `Flock<V>` holds all simulation state and drives the five-phase tick:
///
/// 1. **Index**: rebuild the neighbor index from the pre-tick positions.
/// 2. **Rules** (optionally parallel with the `parallel` feature): sum every
///    steering rule for every boid against the pre-tick snapshot into a
///    scratch buffer.
/// 3. **Apply**: add each buffered delta to its boid's velocity, clamp the
///    speed and integrate.
/// 4. **Predators** (optionally parallel): run the hunting automaton against
///    the updated boids, then boundary and obstacle steering, speed clamp
///    and integration.
/// 5. **Metrics**: distance-to-predator and cohesion for the new state.
///
/// Boids never see another boid's post-tick state, so the result does not
/// depend on evaluation order or thread count.
///
/// Create via [`FlockBuilder`][crate::FlockBuilder].
pub struct Flock<V: IndexPoint> {
    pub(crate) params:            SimulationParameters,
    pub(crate) frame:             Tick,
    pub(crate) paused:            bool,
    pub(crate) seed:              u64,
    pub(crate) rng:               SimRng,
    pub(crate) boids:             BoidStore<V>,
    pub(crate) boid_rngs:         BoidRngs,
    /// Boids given to `FlockBuilder::boids_at`; `None` once `resize` has
    /// replaced them or when the flock started random.
    pub(crate) placed_boids:      Option<Vec<Boid<V>>>,
    pub(crate) predators:         Vec<Predator<V>>,
    /// Spawn positions of predators given to `FlockBuilder::predator_at`.
    pub(crate) placed_predators:  Vec<(PredatorId, V)>,
    pub(crate) next_predator:     PredatorId,
    pub(crate) obstacles:         ObstacleSet<V>,
    pub(crate) rules:             RuleSet<V>,
    pub(crate) index:             NeighborIndex<V>,
    pub(crate) metrics:           Metrics,
    pub(crate) snapshot_interval: u64,
    /// Rule-phase output, one entry per boid.
    pub(crate) deltas:            Vec<V>,
    /// Neighbor-query buffer for the sequential rule phase.
    pub(crate) neighbors:         Vec<usize>,
}

impl<V: IndexPoint> Flock<V> {
    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance one frame.  Returns `false` when nothing was simulated: the
    /// flock is paused, or it has neither boids nor predators.
    pub fn tick(&mut self) -> bool {
        self.tick_with(&mut NoopObserver)
    }

    /// [`tick`][Self::tick], reporting to `observer`.
    pub fn tick_with<O: FlockObserver<V>>(&mut self, observer: &mut O) -> bool {
        if self.paused || (self.boids.is_empty() && self.predators.is_empty()) {
            return false;
        }
        let now = self.frame;
        observer.on_tick_start(now);

        let events = self.process_tick();
        log::trace!("{now}: {} hunt events", events.len());
        for (id, strategy, event) in &events {
            observer.on_hunt_event(now, *id, *strategy, event);
        }

        observer.on_tick_end(now, &self.metrics);
        if self.snapshot_interval > 0 && now.0.is_multiple_of(self.snapshot_interval) {
            observer.on_snapshot(now, &self.boids, &self.predators);
        }

        self.frame = now.next();
        true
    }

    /// Call [`tick_with`][Self::tick_with] `n` times.  Returns the number of
    /// frames actually simulated.
    pub fn run_ticks<O: FlockObserver<V>>(&mut self, n: u64, observer: &mut O) -> u64 {
        let mut simulated = 0;
        for _ in 0..n {
            if self.tick_with(observer) {
                simulated += 1;
            }
        }
        simulated
    }

    /// [`run_ticks`][Self::run_ticks] followed by `on_sim_end`.
    pub fn run<O: FlockObserver<V>>(&mut self, n: u64, observer: &mut O) -> u64 {
        let simulated = self.run_ticks(n, observer);
        observer.on_sim_end(self.frame);
        simulated
    }

    fn process_tick(&mut self) -> Vec<(PredatorId, Strategy, HuntEvent)> {
        // ── Phase 1: neighbor index over pre-tick positions ───────────────
        self.index = NeighborIndex::build(&self.boids.positions);

        // ── Phase 2: rule deltas into the scratch buffer ──────────────────
        let predator_positions: Vec<V> = self.predators.iter().map(|p| p.position).collect();
        self.compute_deltas(&predator_positions);

        // ── Phase 3: apply, clamp, integrate ──────────────────────────────
        let (min_speed, max_speed) = (self.params.min_speed, self.params.max_speed);
        let boids = &mut self.boids;
        for (i, rng) in self.boid_rngs.inner.iter_mut().enumerate() {
            let v = clamp_speed(boids.velocities[i] + self.deltas[i], min_speed, max_speed, rng);
            boids.velocities[i] = v;
            boids.positions[i] = integrate(boids.positions[i], v);
        }

        // ── Phase 4: predators against the updated flock ──────────────────
        let events = self.step_predators();

        // ── Phase 5: metrics ──────────────────────────────────────────────
        let predator_positions: Vec<V> = self.predators.iter().map(|p| p.position).collect();
        self.metrics = Metrics::compute(&self.boids.positions, &predator_positions);

        events
    }

    /// Evaluate the rule set for every boid into `self.deltas`.
    ///
    /// With the `parallel` Cargo feature, boids are spread over Rayon's
    /// thread pool; each boid still uses only its own RNG.
    fn compute_deltas(&mut self, predator_positions: &[V]) {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let ctx = FlockContext::new(
            &self.params,
            &self.boids,
            &self.index,
            predator_positions,
            &self.obstacles,
        );
        let rules  = &self.rules;
        let rngs   = &mut self.boid_rngs;
        let deltas = &mut self.deltas;

        #[cfg(not(feature = "parallel"))]
        {
            let scratch = &mut self.neighbors;
            deltas.clear();
            deltas.extend(
                rngs.inner
                    .iter_mut()
                    .enumerate()
                    .map(|(i, rng)| rules.steer(i, &ctx, scratch, rng)),
            );
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            rngs.inner
                .par_iter_mut()
                .enumerate()
                .map_init(Vec::new, |scratch, (i, rng)| rules.steer(i, &ctx, scratch, rng))
                .collect_into_vec(deltas);
        }
    }

    /// Step every predator and collect its transitions in predator order.
    fn step_predators(&mut self) -> Vec<(PredatorId, Strategy, HuntEvent)> {
        let prey      = Prey::new(&self.boids.positions);
        let params    = &self.params;
        let obstacles = &self.obstacles;
        let bounds: Bounds<V> = params.bounds();

        #[cfg(not(feature = "parallel"))]
        let per_predator: Vec<Vec<HuntEvent>> = self
            .predators
            .iter_mut()
            .map(|p| step_predator(p, &prey, obstacles, params, &bounds))
            .collect();

        #[cfg(feature = "parallel")]
        let per_predator: Vec<Vec<HuntEvent>> = {
            use rayon::prelude::*;

            self.predators
                .par_iter_mut()
                .map(|p| step_predator(p, &prey, obstacles, params, &bounds))
                .collect()
        };

        self.predators
            .iter()
            .zip(per_predator)
            .flat_map(|(p, events)| events.into_iter().map(move |e| (p.id, p.strategy, e)))
            .collect()
    }

    // ── Run control ───────────────────────────────────────────────────────

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of frames simulated since construction or the last reset.
    pub fn frame(&self) -> Tick {
        self.frame
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Replace the parameters in place.  The new values are not validated;
    /// call [`SimulationParameters::validate`] first when they come from
    /// outside.
    pub fn set_params(&mut self, params: SimulationParameters) {
        self.params = params;
    }

    pub fn bounds(&self) -> Bounds<V> {
        self.params.bounds()
    }

    /// Rebuild boids and predators from the construction seed.
    ///
    /// The boid count and every predator's id and strategy are kept.  Boids
    /// and predators that were placed at build time return to their
    /// placement; everything else is drawn again, and all automaton state is
    /// cleared.  Obstacles are kept.  While the population is the one the
    /// builder made, a reset flock replays the run of a freshly built one.
    pub fn reset(&mut self) {
        let bounds = self.bounds();
        let speed = self.params.predator.speed;
        self.rng = SimRng::new(self.seed);
        self.boids = match &self.placed_boids {
            Some(placed) => BoidStore::from_boids(placed.iter().copied()),
            None => BoidStore::random(self.boids.len(), &bounds, self.params.max_speed, &mut self.rng),
        };
        self.boid_rngs = BoidRngs::new(self.boids.len(), self.seed);
        for p in &mut self.predators {
            let placed = self.placed_predators.iter().find(|(id, _)| *id == p.id).map(|&(_, pos)| pos);
            *p = spawn_predator(p.id, p.strategy, placed, &bounds, speed, &mut self.rng);
        }
        self.frame = Tick::ZERO;
        self.metrics = Metrics::default();
        log::info!("flock reset: {} boids, {} predators, seed {}", self.boids.len(), self.predators.len(), self.seed);
    }

    /// Replace the population with `n` fresh random boids.  Every predator
    /// drops its target because boid indices are renumbered.
    pub fn resize(&mut self, n: usize) {
        let bounds = self.bounds();
        self.boids = BoidStore::random(n, &bounds, self.params.max_speed, &mut self.rng);
        self.boid_rngs = BoidRngs::new(n, self.seed);
        self.placed_boids = None;
        for p in &mut self.predators {
            p.forget_target();
        }
        log::info!("flock resized to {n} boids");
    }

    // ── Boids ─────────────────────────────────────────────────────────────

    pub fn boids(&self) -> &BoidStore<V> {
        &self.boids
    }

    pub fn boid_count(&self) -> usize {
        self.boids.len()
    }

    pub fn positions(&self) -> &[V] {
        &self.boids.positions
    }

    pub fn velocities(&self) -> &[V] {
        &self.boids.velocities
    }

    pub fn rules(&self) -> &RuleSet<V> {
        &self.rules
    }

    /// Metrics computed at the end of the last simulated frame.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    // ── Obstacles ─────────────────────────────────────────────────────────

    pub fn obstacles(&self) -> &ObstacleSet<V> {
        &self.obstacles
    }

    pub fn add_obstacle(&mut self, center: V, radius: f32) -> ObstacleId {
        let id = self.obstacles.add(Obstacle::new(center, radius));
        log::debug!("added obstacle {id} (radius {radius})");
        id
    }

    /// `false` if `id` is unknown.
    pub fn remove_obstacle(&mut self, id: ObstacleId) -> bool {
        self.obstacles.remove(id)
    }

    /// Remove every obstacle and return how many there were.
    pub fn clear_obstacles(&mut self) -> usize {
        self.obstacles.clear()
    }

    // ── Predators ─────────────────────────────────────────────────────────

    pub fn predators(&self) -> &[Predator<V>] {
        &self.predators
    }

    pub fn predator(&self, id: PredatorId) -> Option<&Predator<V>> {
        self.predators.iter().find(|p| p.id == id)
    }

    pub fn predator_count(&self) -> usize {
        self.predators.len()
    }

    pub fn predator_views(&self) -> Vec<PredatorView<V>> {
        self.predators
            .iter()
            .map(|p| PredatorView {
                id:       p.id,
                position: p.position,
                velocity: p.velocity,
                strategy: p.strategy,
                phase:    p.phase(),
            })
            .collect()
    }

    /// Add a predator at a random position.  Its strategy follows the slot
    /// it lands in (`Strategy::for_slot`).  `None` at the cap.
    pub fn add_predator(&mut self) -> Option<PredatorId> {
        if self.predators.len() >= PREDATOR_CAP {
            return None;
        }
        let id = self.allocate_predator_id();
        let strategy = Strategy::for_slot(self.predators.len());
        let bounds = self.bounds();
        self.predators.push(Predator::random(id, &bounds, self.params.predator.speed, strategy, &mut self.rng));
        log::debug!("added {id} ({})", strategy.name());
        Some(id)
    }

    /// Remove predator `id`, or the most recently added one for `None`.
    /// `false` if there was nothing to remove.
    pub fn remove_predator(&mut self, id: Option<PredatorId>) -> bool {
        let slot = match id {
            Some(id) => self.predators.iter().position(|p| p.id == id),
            None => self.predators.len().checked_sub(1),
        };
        match slot {
            Some(k) => {
                let removed = self.predators.remove(k);
                log::debug!("removed {}", removed.id);
                true
            }
            None => false,
        }
    }

    /// Add or remove predators at the end until there are `n` (clamped to
    /// the cap).  Returns the new count.
    pub fn set_predator_count(&mut self, n: usize) -> usize {
        let n = n.min(PREDATOR_CAP);
        while self.predators.len() > n {
            self.remove_predator(None);
        }
        while self.predators.len() < n && self.add_predator().is_some() {}
        self.predators.len()
    }

    /// Add one predator when there are none, otherwise remove them all.
    /// Returns whether predators are now present.
    pub fn toggle_predator(&mut self) -> bool {
        if self.predators.is_empty() {
            self.add_predator().is_some()
        } else {
            self.set_predator_count(0);
            false
        }
    }

    pub(crate) fn allocate_predator_id(&mut self) -> PredatorId {
        let id = self.next_predator;
        self.next_predator = id.next();
        id
    }
}
