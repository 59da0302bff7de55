//! Orientation and ordering of graph regions
//!
//! - `acyclic`: is a component a DAG once every node gets one orientation
//! - `topological`: Kahn order over both orientations of a node subset

mod acyclic;
mod topological;

pub use acyclic::is_nice_and_acyclic;
pub use topological::topological_order;
