//! World observer trait for progress reporting and data collection.

use flock_agent::AgentStore;
use flock_core::Tick;

/// Callbacks invoked by [`World::run`][crate::World::run] and
/// [`World::run_ticks`][crate::World::run_ticks] at key points of the loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl WorldObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, updated: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: updated {updated} agents");
///         }
///     }
/// }
/// ```
pub trait WorldObserver {
    /// Called at the very start of each tick, before any agent is updated.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the number of agents updated.
    fn on_tick_end(&mut self, _tick: Tick, _updated: usize) {}

    /// Called every `config.output_interval_ticks` ticks with read-only
    /// access to the whole population.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Called after [`World::clear_all_observed`][crate::World::clear_all_observed]
    /// removed `removed` agents.
    fn on_clear(&mut self, _tick: Tick, _removed: usize) {}

    /// Called once after the final tick of [`World::run`][crate::World::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`WorldObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}
