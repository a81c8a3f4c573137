//! Core agent storage: `AgentStore` (arena of records) and `AgentRngs`
//! (per-agent RNG).
//!
//! # Why two structs?
//!
//! An update pass needs `&mut` access to one agent's RNG while reading the
//! whole arena (sequential order) or while writing every agent in parallel
//! (snapshot order).  Keeping RNGs out of `Agent` lets the arena be cloned
//! into a snapshot cheaply and lets the borrow checker see the two as
//! disjoint.
//!
//! Both vectors are indexed by *slot* (position in spawn order).  Slots are
//! dense and change on clear; `AgentId`s are never reused.

use flock_core::{AgentId, AgentRng};

use crate::{Agent, AgentBuilder, SpawnParams};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, parallel to [`AgentStore`] slots.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
    global_seed: u64,
}

impl AgentRngs {
    /// An empty set whose future members are seeded from `global_seed`.
    pub fn new(global_seed: u64) -> Self {
        Self { inner: Vec::new(), global_seed }
    }

    /// Seed and append the RNG for a newly spawned `agent`.
    fn push(&mut self, agent: AgentId) -> &mut AgentRng {
        self.inner.push(AgentRng::new(self.global_seed, agent));
        let last = self.inner.len() - 1;
        &mut self.inner[last]
    }

    /// Mutable reference to the RNG at `slot`.
    #[inline]
    pub fn get_mut(&mut self, slot: usize) -> &mut AgentRng {
        &mut self.inner[slot]
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Insertion-ordered arena of agents.
///
/// Agents are appended by [`spawn`](Self::spawn) and only removed all at
/// once by [`clear`](Self::clear), so slot order always equals spawn order
/// and `AgentId`s are strictly increasing along the slice.
#[derive(Clone, Debug, Default)]
pub struct AgentStore {
    agents:  Vec<Agent>,
    next_id: u32,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { agents: Vec::with_capacity(capacity), next_id: 0 }
    }

    /// Number of live agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// The id the next spawned agent will receive.
    pub fn next_id(&self) -> AgentId {
        AgentId(self.next_id)
    }

    /// Build an agent from `builder`, append it, and seed its RNG.
    pub fn spawn(
        &mut self,
        rngs:    &mut AgentRngs,
        builder: AgentBuilder,
        params:  &SpawnParams,
    ) -> AgentId {
        debug_assert_eq!(self.agents.len(), rngs.len());

        let id = AgentId(self.next_id);
        self.next_id += 1;

        let rng = rngs.push(id);
        self.agents.push(builder.build(id, params, rng));
        id
    }

    /// Remove every agent.  Ids keep counting from where they were.
    pub fn clear(&mut self, rngs: &mut AgentRngs) {
        self.agents.clear();
        rngs.clear();
    }

    /// Slot of `id`, if it is alive.  O(log n): ids ascend along the slice.
    pub fn slot_of(&self, id: AgentId) -> Option<usize> {
        self.agents.binary_search_by_key(&id, |a| a.id()).ok()
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.slot_of(id).map(|slot| &self.agents[slot])
    }

    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.slot_of(id).map(move |slot| &mut self.agents[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter()
    }

    /// All agents in population order.
    #[inline]
    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    /// Mutable view for the update pass.  The slice cannot grow or shrink,
    /// so slot order and id order stay aligned.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Agent] {
        &mut self.agents
    }
}
