//! Integration test and benchmark harness for the wasmint workspace.
//!
//! No library code lives here; see `tests/` and `benches/`.
