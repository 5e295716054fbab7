//! Fruit Match (workspace facade crate).
//!
//! Re-exports the workspace crates as `fruit_match::{core,engine,input,term,types}`
//! so the binary, integration tests, and benchmarks share one import path.

pub use fruit_match_core as core;
pub use fruit_match_engine as engine;
pub use fruit_match_input as input;
pub use fruit_match_term as term;
pub use fruit_match_types as types;
