//! Domain models shared by every feature

pub mod handle;
pub mod path;

pub use handle::{Handle, NodeId, Orientation, Pos, Symbol, ENDMARKER};
pub use path::{PathHandle, PathMetadata, PathSense, Subrange};
