//! Input-driven population policy: when a request to add an agent is
//! honoured.

use flock_agent::AgentSize;
use flock_behavior::FlockBehavior;
use flock_core::{AgentId, Timer, Vec2};

use crate::World;

/// Why [`SpawnPolicy::try_spawn`] refused a request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpawnRejection {
    /// The previous spawn was too recent.
    Cooldown,
    /// The population is above the limit.
    Full,
    /// The requested position lies outside the world.
    OutOfBounds,
}

/// Rate- and count-limited spawning.
///
/// A request succeeds when the cooldown has run out, the population is at
/// most `max_agents`, and the position lies in `[0, width) × [0, height)`.
/// Because the count check is inclusive the population can reach
/// `max_agents + 1`.
#[derive(Clone, Debug)]
pub struct SpawnPolicy {
    pub max_agents: usize,
    cooldown:       Timer,
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        Self::new(100, 0.2)
    }
}

impl SpawnPolicy {
    /// Allow a spawn every `cooldown_secs`.  The first request is allowed
    /// immediately.
    pub fn new(max_agents: usize, cooldown_secs: f32) -> Self {
        Self { max_agents, cooldown: Timer::new(cooldown_secs, 0.0) }
    }

    /// Count down the cooldown.  Call once per frame.
    pub fn tick(&mut self, dt: f32) {
        self.cooldown.advance(dt);
    }

    /// The spawn input was released: the next request is allowed at once.
    pub fn release(&mut self) {
        self.cooldown.set(0.0);
    }

    /// Check a request without acting on it.
    pub fn check<B: FlockBehavior>(&self, world: &World<B>, position: Vec2) -> Result<(), SpawnRejection> {
        if !self.cooldown.is_elapsed() {
            return Err(SpawnRejection::Cooldown);
        }
        if world.len() > self.max_agents {
            return Err(SpawnRejection::Full);
        }
        if !world.config.bounds.contains(position) {
            return Err(SpawnRejection::OutOfBounds);
        }
        Ok(())
    }

    /// Add an agent if [`check`](Self::check) passes and restart the
    /// cooldown.
    pub fn try_spawn<B: FlockBehavior>(
        &mut self,
        world:    &mut World<B>,
        position: Vec2,
        size:     Option<AgentSize>,
    ) -> Result<AgentId, SpawnRejection> {
        match self.check(world, position) {
            Ok(()) => {
                self.cooldown.reset();
                Ok(world.add_agent(position, size))
            }
            Err(SpawnRejection::Cooldown) => Err(SpawnRejection::Cooldown),
            Err(why) => {
                log::warn!("spawn at {position} rejected: {why:?} (population {})", world.len());
                Err(why)
            }
        }
    }
}
