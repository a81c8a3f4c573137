//! headless: run the flock without a window.
//!
//! Replays a scripted version of the interactive controls: a pointer
//! wanders around the world while the spawn key is held, agents appear
//! under it at most every `spawn_cooldown_secs`, and the whole flock can be
//! cleared at a given tick.  Progress goes to the log; the final positions
//! and headings are printed as a table or as JSON.

mod config;


use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use flock_agent::AgentStore;
use flock_behavior::ClassicFlocking;
use flock_core::{AgentId, SimRng, Tick, Vec2};
use flock_sim::{
    SpatialBackend, SpawnPolicy, SpawnRejection, UpdateOrder, World, WorldBuilder, WorldObserver,
};

use config::DemoConfig;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OrderArg {
    Sequential,
    Snapshot,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless boids flock", long_about = None)]
struct Args {
    /// JSON configuration file (world, behavior, input script)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Global seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Update order
    #[arg(short, long, value_enum)]
    order: Option<OrderArg>,

    /// Use the R-tree neighbor index (snapshot order only)
    #[arg(long)]
    rtree: bool,

    /// Remove every agent at this tick
    #[arg(long)]
    clear_at: Option<u64>,

    /// Print the final flock as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    /// Flags win over the file.
    fn apply(&self, cfg: &mut DemoConfig) {
        if let Some(t) = self.ticks {
            cfg.world.total_ticks = t;
        }
        if let Some(s) = self.seed {
            cfg.world.seed = s;
        }
        if let Some(o) = self.order {
            cfg.world.order = match o {
                OrderArg::Sequential => UpdateOrder::Sequential,
                OrderArg::Snapshot => UpdateOrder::Snapshot,
            };
        }
        if self.rtree {
            cfg.world.backend = SpatialBackend::RTree;
        }
        if self.clear_at.is_some() {
            cfg.input.clear_at_tick = self.clear_at;
        }
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct ProgressLog {
    agent_updates: usize,
    snapshots:     usize,
    cleared:       usize,
    spawned:       usize,
    /// Spawns refused for a reason other than the cooldown.
    refused:       usize,
}

impl ProgressLog {
    fn record_spawn(&mut self, result: Result<AgentId, SpawnRejection>) {
        match result {
            Ok(_) => self.spawned += 1,
            // Held key between cooldown expiries.
            Err(SpawnRejection::Cooldown) => {}
            Err(SpawnRejection::Full | SpawnRejection::OutOfBounds) => self.refused += 1,
        }
    }
}

impl WorldObserver for ProgressLog {
    fn on_tick_end(&mut self, _tick: Tick, updated: usize) {
        self.agent_updates += updated;
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        self.snapshots += 1;
        if agents.is_empty() {
            log::info!("{tick}: empty");
            return;
        }
        let n = agents.len() as f32;
        let center = agents.iter().fold(Vec2::ZERO, |acc, a| acc + a.position) / n;
        let mean_speed = agents.iter().map(|a| a.velocity.length()).sum::<f32>() / n;
        log::info!("{tick}: {} agents, center {center}, mean speed {mean_speed:.2}", agents.len());
    }

    fn on_clear(&mut self, tick: Tick, removed: usize) {
        self.cleared += removed;
        log::info!("{tick}: cleared {removed} agents");
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        log::info!("finished at {final_tick}");
    }
}

// ── Scripted input ────────────────────────────────────────────────────────────

/// A pointer bouncing around the world at constant speed.
struct Pointer {
    position: Vec2,
    velocity: Vec2,
}

impl Pointer {
    fn new(rng: &mut SimRng, world: &World<ClassicFlocking>, speed: f32) -> Self {
        let b = world.config.bounds;
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        Self {
            position: Vec2::new(rng.gen_range(0.0..b.width), rng.gen_range(0.0..b.height)),
            velocity: Vec2::from_angle(angle) * speed,
        }
    }

    fn advance(&mut self, dt: f32, width: f32, height: f32) {
        self.position += self.velocity * dt;
        if !(0.0..width).contains(&self.position.x) {
            self.velocity.x = -self.velocity.x;
            self.position.x = self.position.x.clamp(0.0, width * 0.999);
        }
        if !(0.0..height).contains(&self.position.y) {
            self.velocity.y = -self.velocity.y;
            self.position.y = self.position.y.clamp(0.0, height * 0.999);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::Builder::from_default_env().filter_level(level).init();

    let mut cfg = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    args.apply(&mut cfg);

    let c = &cfg.world;
    log::info!(
        "world {} x {}, {} ticks at {:.4}s, {:?} order, {:?} backend, seed {}",
        c.bounds.width, c.bounds.height, c.total_ticks, c.fixed_delta_secs, c.order, c.backend, c.seed
    );

    let mut world = WorldBuilder::new(cfg.world.clone(), ClassicFlocking::new(cfg.behavior.clone()))
        .capacity(cfg.input.max_agents + 1)
        .build()
        .context("invalid world configuration")?;

    let input = &cfg.input;
    let mut policy = SpawnPolicy::new(input.max_agents, input.spawn_cooldown_secs);
    let mut input_rng = SimRng::new(world.config.seed).child(1);
    let mut pointer = Pointer::new(&mut input_rng, &world, input.pointer_speed);
    let mut obs = ProgressLog::default();

    let dt = world.config.fixed_delta_secs;
    let bounds = world.config.bounds;
    let end = Tick(world.config.total_ticks);

    let t0 = Instant::now();
    while world.clock.current_tick < end {
        let now = world.clock.current_tick;

        policy.tick(dt);
        pointer.advance(dt, bounds.width, bounds.height);
        if now.0 < input.spawn_ticks {
            obs.record_spawn(policy.try_spawn(&mut world, pointer.position, None));
        } else if now.0 == input.spawn_ticks {
            policy.release();
        }
        if input.clear_at_tick == Some(now.0) {
            world.clear_all_observed(&mut obs);
        }

        world.run_ticks(1, dt, &mut obs)?;
    }
    obs.on_sim_end(world.clock.current_tick);
    let elapsed = t0.elapsed();

    log::info!(
        "{} agent updates in {:.3} s ({} snapshots, {} spawned, {} refused, {} cleared)",
        obs.agent_updates,
        elapsed.as_secs_f64(),
        obs.snapshots,
        obs.spawned,
        obs.refused,
        obs.cleared
    );

    // Final flock.
    if args.json {
        let flock: Vec<serde_json::Value> = world
            .views()
            .map(|v| {
                serde_json::json!({
                    "id":      v.id.0,
                    "x":       v.position.x,
                    "y":       v.position.y,
                    "heading": v.heading,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&flock)?);
    } else {
        println!("{:<8} {:>9} {:>9} {:>9}", "Agent", "x", "y", "heading");
        println!("{}", "-".repeat(38));
        for v in world.views() {
            println!("{:<8} {:>9.3} {:>9.3} {:>9.3}", v.id.0, v.position.x, v.position.y, v.heading);
        }
    }

    Ok(())
}
