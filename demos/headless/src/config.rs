//! Demo configuration file: world, behavior, and the scripted input.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use flock_behavior::BehaviorParams;
use flock_sim::WorldConfig;

/// Everything the demo reads from `--config`.  Missing fields keep their
/// defaults, so `{}` is a valid file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub world:    WorldConfig,
    pub behavior: BehaviorParams,
    pub input:    InputScript,
}

/// Stand-in for the interactive controls: the spawn key is held while the
/// pointer wanders, then released; optionally everything is cleared once.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct InputScript {
    /// Ticks during which the spawn key is held.
    pub spawn_ticks: u64,

    /// Population limit of the spawn policy.
    pub max_agents: usize,

    /// Seconds between two spawns while the key is held.
    pub spawn_cooldown_secs: f32,

    /// Pointer speed in units per second.
    pub pointer_speed: f32,

    /// Tick at which every agent is removed.
    pub clear_at_tick: Option<u64>,
}

impl Default for InputScript {
    fn default() -> Self {
        Self {
            spawn_ticks:         600,
            max_agents:          100,
            spawn_cooldown_secs: 0.2,
            pointer_speed:       4.0,
            clear_at_tick:       None,
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }
}
