//! Common test utilities for pangraph-index
//!
//! Graph builders, proptest strategies and a small snarl decomposition
//! shared by the integration tests.

#![allow(dead_code)]

mod assertions;
mod builders;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use builders::*;
