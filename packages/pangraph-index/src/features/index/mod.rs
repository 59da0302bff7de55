//! Run-length compressed path index
//!
//! In-memory implementation of the index capabilities in
//! `shared::ports::index`: a construction sink, LF queries over compressed
//! node records, and the merge of partial indexes built by separate jobs.
//! Records are encoded and queried with `gbwt::bwt`.
//!
//! - `record`: successor sequences to runs, record copies
//! - `run_length_index`: the queryable index
//! - `builder`: construction from symbol sequences
//! - `merge`: concatenation of partial indexes over disjoint alphabets

mod builder;
mod merge;
mod record;
mod run_length_index;

pub use builder::RunLengthIndexBuilder;
pub use run_length_index::RunLengthIndex;
