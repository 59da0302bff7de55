//! Shared models and capability traits
//!
//! - `models/`: handles, index symbols, index positions, path metadata
//! - `ports/`: the read-only capabilities the algorithms consume

pub mod models;
pub mod ports;
