//! **trailblaze-core**: shared types for the trailblaze search suite.
//!
//! This crate provides the foundational types used across the *trailblaze*
//! workspace: grid geometry primitives, an arena-backed weighted graph with
//! named vertices, and the observation channel through which searches report
//! vertex state transitions.

pub mod geom;
pub mod graph;
pub mod state;

pub use geom::{Point, Range};
pub use graph::{BasicGraph, Edge, EdgeId, GraphError, VertexId};
pub use state::{NoObserver, Observer, StateLog, VertexState};
