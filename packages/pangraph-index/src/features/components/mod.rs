//! Connected components of a graph

mod union_find;
mod weakly_connected;

pub use union_find::DisjointSets;
pub use weakly_connected::{weakly_connected_components, Component};
