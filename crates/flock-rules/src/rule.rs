//! The `SteeringRule` trait and `RuleSet`, the extension point for flock
//! behavior.

use flock_core::AgentRng;
use flock_spatial::IndexPoint;

use crate::context::FlockContext;
use crate::neighborhood::Neighborhood;
use crate::steering;

/// One additive contribution to a boid's velocity.
///
/// # Thread safety
///
/// The flock may evaluate many boids in parallel, so rules must be
/// `Send + Sync` and keep no per-boid state.  Randomness comes through the
/// boid's own `AgentRng`.
///
/// # Example
///
/// ```rust,ignore
/// struct Wind(Vec2);
///
/// impl SteeringRule<Vec2> for Wind {
///     fn name(&self) -> &'static str { "wind" }
///     fn steer(&self, _: &Neighborhood<'_, Vec2>, _: &FlockContext<'_, Vec2>, _: &mut AgentRng) -> Vec2 {
///         self.0
///     }
/// }
///
/// let rules = RuleSet::standard().with(Wind(Vec2::new(0.05, 0.0)));
/// ```
pub trait SteeringRule<V: IndexPoint>: Send + Sync + 'static {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn steer(&self, hood: &Neighborhood<'_, V>, ctx: &FlockContext<'_, V>, rng: &mut AgentRng) -> V;
}

// ── Built-in rules ────────────────────────────────────────────────────────────

pub struct Separation;
pub struct Alignment;
pub struct Cohesion;
pub struct BoundaryAvoidance;
pub struct PredatorAvoidance;
pub struct ObstacleAvoidance;

impl<V: IndexPoint> SteeringRule<V> for Separation {
    fn name(&self) -> &'static str {
        "separation"
    }

    fn steer(&self, hood: &Neighborhood<'_, V>, ctx: &FlockContext<'_, V>, _rng: &mut AgentRng) -> V {
        steering::separation(hood, ctx.params.protected_range, ctx.params.separation_strength)
    }
}

impl<V: IndexPoint> SteeringRule<V> for Alignment {
    fn name(&self) -> &'static str {
        "alignment"
    }

    fn steer(&self, hood: &Neighborhood<'_, V>, ctx: &FlockContext<'_, V>, _rng: &mut AgentRng) -> V {
        let p = ctx.params;
        steering::alignment(hood, p.protected_range, p.visual_range, p.alignment_factor)
    }
}

impl<V: IndexPoint> SteeringRule<V> for Cohesion {
    fn name(&self) -> &'static str {
        "cohesion"
    }

    fn steer(&self, hood: &Neighborhood<'_, V>, ctx: &FlockContext<'_, V>, _rng: &mut AgentRng) -> V {
        let p = ctx.params;
        steering::cohesion(hood, p.protected_range, p.visual_range, p.cohesion_factor)
    }
}

impl<V: IndexPoint> SteeringRule<V> for BoundaryAvoidance {
    fn name(&self) -> &'static str {
        "boundary"
    }

    fn steer(&self, hood: &Neighborhood<'_, V>, ctx: &FlockContext<'_, V>, _rng: &mut AgentRng) -> V {
        steering::boundary_steering(hood.position, &ctx.bounds, ctx.params.margin, ctx.params.turn_factor)
    }
}

impl<V: IndexPoint> SteeringRule<V> for PredatorAvoidance {
    fn name(&self) -> &'static str {
        "predator_avoidance"
    }

    fn steer(&self, hood: &Neighborhood<'_, V>, ctx: &FlockContext<'_, V>, rng: &mut AgentRng) -> V {
        if ctx.predators.is_empty() {
            return V::ZERO;
        }
        let p = &ctx.params.predator;
        steering::predator_avoidance(hood.position, ctx.predators, p.detection_range, p.avoidance_strength, rng)
    }
}

impl<V: IndexPoint> SteeringRule<V> for ObstacleAvoidance {
    fn name(&self) -> &'static str {
        "obstacle_avoidance"
    }

    fn steer(&self, hood: &Neighborhood<'_, V>, ctx: &FlockContext<'_, V>, _rng: &mut AgentRng) -> V {
        let o = &ctx.params.obstacle;
        steering::obstacle_avoidance(hood.position, ctx.obstacles.obstacles(), o.detection_range, o.avoidance_strength)
    }
}

// ── RuleSet ───────────────────────────────────────────────────────────────────

/// An ordered list of rules whose deltas are summed.
pub struct RuleSet<V: IndexPoint> {
    rules: Vec<Box<dyn SteeringRule<V>>>,
}

impl<V: IndexPoint> RuleSet<V> {
    /// No rules: boids keep their velocity (subject to the speed clamp).
    pub fn empty() -> Self {
        RuleSet { rules: Vec::new() }
    }

    /// Separation, alignment, cohesion, boundary, predator and obstacle
    /// avoidance.
    pub fn standard() -> Self {
        Self::empty()
            .with(Separation)
            .with(Alignment)
            .with(Cohesion)
            .with(BoundaryAvoidance)
            .with(PredatorAvoidance)
            .with(ObstacleAvoidance)
    }

    /// Append a rule.
    pub fn with(mut self, rule: impl SteeringRule<V>) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Summed delta for boid `i`.
    ///
    /// Runs one `visual_range` query into `scratch` (cleared first) and hands
    /// the resulting neighborhood to every rule.
    pub fn steer(&self, i: usize, ctx: &FlockContext<'_, V>, scratch: &mut Vec<usize>, rng: &mut AgentRng) -> V {
        ctx.index.query_into(i, ctx.params.visual_range, scratch);
        let hood = Neighborhood::new(i, scratch.as_slice(), ctx.boids);
        self.rules
            .iter()
            .fold(V::ZERO, |acc, rule| acc + rule.steer(&hood, ctx, rng))
    }
}

impl<V: IndexPoint> Default for RuleSet<V> {
    fn default() -> Self {
        Self::standard()
    }
}
