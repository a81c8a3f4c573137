//! The `World` struct and its tick loop.

use flock_agent::{Agent, AgentBuilder, AgentRngs, AgentSize, AgentStore};
use flock_behavior::{FlockBehavior, TickContext};
use flock_core::{AgentId, SimClock, Tick, Vec2};
use flock_spatial::{BruteForce, RTreeIndex, SpatialQuery};

use crate::{SimError, SimResult, SpatialBackend, UpdateOrder, WorldConfig, WorldObserver};

// ── AgentView ─────────────────────────────────────────────────────────────────

/// What a renderer needs to place one agent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentView {
    pub id:       AgentId,
    pub position: Vec2,
    /// Heading angle in radians, counter-clockwise from `+x`.
    pub heading:  f32,
}

impl AgentView {
    /// Unit vector along [`heading`](Self::heading).
    #[inline]
    pub fn forward(&self) -> Vec2 {
        Vec2::from_angle(self.heading)
    }
}

impl From<&Agent> for AgentView {
    fn from(a: &Agent) -> Self {
        Self { id: a.id(), position: a.position, heading: a.heading }
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

/// The simulation context: population, bounds, clock, and behavior.
///
/// The population only changes between ticks, through
/// [`add_agent`](Self::add_agent) and [`clear_all`](Self::clear_all).  Each
/// [`step`](Self::step) runs the behavior once for every agent in
/// population order, reading neighbors either from the live arena or from a
/// tick-start snapshot depending on [`WorldConfig::order`].
///
/// Create via [`WorldBuilder`][crate::WorldBuilder].
pub struct World<B: FlockBehavior> {
    /// Bounds, seed, update order, spawn defaults, …
    pub config: WorldConfig,

    /// Tick counter and accumulated simulated time.
    pub clock: SimClock,

    /// The behavior model.  Called once per agent per tick.
    pub behavior: B,

    agents: AgentStore,

    /// Per-agent RNGs, kept apart from the arena so an update can hold
    /// `&mut` to one RNG while the population is borrowed for queries.
    rngs: AgentRngs,
}

impl<B: FlockBehavior> World<B> {
    pub(crate) fn from_parts(config: WorldConfig, behavior: B, capacity: usize) -> Self {
        Self {
            clock:  SimClock::new(),
            agents: AgentStore::with_capacity(capacity),
            rngs:   AgentRngs::new(config.seed),
            config,
            behavior,
        }
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Append an agent at `position`.  `None` (or a non-positive dimension)
    /// takes the default sprite size.
    pub fn add_agent(&mut self, position: Vec2, size: Option<AgentSize>) -> AgentId {
        let builder = AgentBuilder::new(position).maybe_size(size);
        self.spawn(builder)
    }

    /// Append an agent described by a full [`AgentBuilder`].
    pub fn spawn(&mut self, builder: AgentBuilder) -> AgentId {
        let id = self.agents.spawn(&mut self.rngs, builder, &self.config.spawn);
        log::debug!("spawned {id} (population {})", self.agents.len());
        id
    }

    /// Remove every agent and return how many there were.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.agents.len();
        self.agents.clear(&mut self.rngs);
        log::debug!("cleared {removed} agents at {}", self.clock.current_tick);
        removed
    }

    /// [`clear_all`](Self::clear_all) and report it to `observer`.
    pub fn clear_all_observed<O: WorldObserver>(&mut self, observer: &mut O) -> usize {
        let removed = self.clear_all();
        observer.on_clear(self.clock.current_tick, removed);
        removed
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id)
    }

    /// Position and heading of every agent, in population order.
    pub fn views(&self) -> impl Iterator<Item = AgentView> + '_ {
        self.agents.iter().map(AgentView::from)
    }

    // ── Ticking ───────────────────────────────────────────────────────────

    /// Advance every agent by `dt` seconds and return how many were updated.
    ///
    /// An empty world only advances the clock.
    pub fn step(&mut self, dt: f32) -> SimResult<usize> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(SimError::InvalidDeltaTime(dt));
        }

        let now = self.clock.current_tick;
        let ctx = TickContext::new(now, dt, self.config.bounds);
        let updated = match self.config.order {
            UpdateOrder::Sequential => self.step_sequential(&ctx),
            UpdateOrder::Snapshot => self.step_snapshot(&ctx),
        };

        self.clock.advance(dt);
        log::trace!("{now}: updated {updated} agents (dt {dt})");
        Ok(updated)
    }

    /// Run `n` ticks of length `dt` (ignores `config.total_ticks`).
    ///
    /// Useful for tests and for driving the world from an external frame
    /// loop.
    pub fn run_ticks<O: WorldObserver>(&mut self, n: u64, dt: f32, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_step(dt, observer)?;
        }
        Ok(())
    }

    /// Run from the current tick to `config.total_ticks` at
    /// `config.fixed_delta_secs`.
    pub fn run<O: WorldObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = Tick(self.config.total_ticks);
        let dt = self.config.fixed_delta_secs;
        while self.clock.current_tick < end {
            self.observed_step(dt, observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        log::debug!("simulation ended at {}", self.clock);
        Ok(())
    }

    fn observed_step<O: WorldObserver>(&mut self, dt: f32, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let updated = self.step(dt)?;
        observer.on_tick_end(now, updated);
        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.agents);
        }
        Ok(())
    }

    // ── Update passes ─────────────────────────────────────────────────────

    /// Live pass: agent `i` sees agents `0..i` as already updated this tick.
    fn step_sequential(&mut self, ctx: &TickContext) -> usize {
        let behavior = &self.behavior;
        let rngs = &mut self.rngs;
        let agents = self.agents.as_mut_slice();

        for slot in 0..agents.len() {
            let mut me = agents[slot];
            behavior.update(&mut me, &BruteForce::new(&*agents), ctx, rngs.get_mut(slot));
            agents[slot] = me;
        }
        agents.len()
    }

    /// Snapshot pass: every query reads the tick-start copy.
    fn step_snapshot(&mut self, ctx: &TickContext) -> usize {
        if self.agents.is_empty() {
            return 0;
        }
        let snapshot: Vec<Agent> = self.agents.as_slice().to_vec();
        match self.config.backend {
            SpatialBackend::BruteForce => self.update_all(&BruteForce::new(&snapshot), ctx),
            SpatialBackend::RTree => self.update_all(&RTreeIndex::build(&snapshot), ctx),
        }
    }

    fn update_all<Q>(&mut self, index: &Q, ctx: &TickContext) -> usize
    where
        Q: SpatialQuery<Item = Agent> + Sync,
    {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let behavior = &self.behavior;
        let rngs = self.rngs.inner.as_mut_slice();
        let agents = self.agents.as_mut_slice();

        #[cfg(not(feature = "parallel"))]
        {
            for (agent, rng) in agents.iter_mut().zip(rngs.iter_mut()) {
                behavior.update(agent, index, ctx, rng);
            }
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            agents
                .par_iter_mut()
                .zip(rngs.par_iter_mut())
                .for_each(|(agent, rng)| behavior.update(agent, index, ctx, rng));
        }

        agents.len()
    }
}
