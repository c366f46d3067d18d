//! Observation side channel for searches.
//!
//! Searches announce every vertex state change through an [`Observer`]. The
//! state is never read back by the algorithms; it exists only so that a
//! renderer (or a test) can follow the exploration.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Observable exploration state of a vertex.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VertexState {
    /// Not touched by the current search.
    #[default]
    Unvisited,
    /// Discovered and waiting for expansion.
    Frontier,
    /// Expanded (its neighbours were examined).
    Expanded,
}

impl fmt::Display for VertexState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unvisited => "unvisited",
            Self::Frontier => "frontier",
            Self::Expanded => "expanded",
        };
        f.write_str(s)
    }
}

/// Sink for vertex state transitions.
pub trait Observer<N> {
    fn on_state(&mut self, node: N, state: VertexState);
}

/// Observer that ignores every notification.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoObserver;

impl<N> Observer<N> for NoObserver {
    #[inline]
    fn on_state(&mut self, _node: N, _state: VertexState) {}
}

impl<N> Observer<N> for &mut NoObserver {
    #[inline]
    fn on_state(&mut self, _node: N, _state: VertexState) {}
}

impl<N, F: FnMut(N, VertexState)> Observer<N> for F {
    #[inline]
    fn on_state(&mut self, node: N, state: VertexState) {
        self(node, state)
    }
}

/// Observer that records every transition in order.
#[derive(Debug, Clone)]
pub struct StateLog<N> {
    events: Vec<(N, VertexState)>,
    latest: HashMap<N, VertexState>,
}

impl<N> Default for StateLog<N> {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            latest: HashMap::new(),
        }
    }
}

impl<N: Copy + Eq + Hash> StateLog<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded transition, oldest first.
    pub fn events(&self) -> &[(N, VertexState)] {
        &self.events
    }

    /// Latest state of `node`, [`VertexState::Unvisited`] if never reported.
    pub fn last(&self, node: N) -> VertexState {
        self.latest.get(&node).copied().unwrap_or_default()
    }

    /// Number of vertices currently in `state`.
    pub fn count(&self, state: VertexState) -> usize {
        self.latest.values().filter(|&&s| s == state).count()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
        self.latest.clear();
    }
}

impl<N: Copy + Eq + Hash> Observer<N> for StateLog<N> {
    fn on_state(&mut self, node: N, state: VertexState) {
        self.events.push((node, state));
        self.latest.insert(node, state);
    }
}

/// Lends a log to a search that does not own it.
impl<N: Copy + Eq + Hash> Observer<N> for &mut StateLog<N> {
    #[inline]
    fn on_state(&mut self, node: N, state: VertexState) {
        (**self).on_state(node, state);
    }
}
