//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the burnout simulation to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: one function in, one dict of columns out
//! 2. **Validate inputs**: signed host values are checked before any run
//! 3. **Safe errors**: configuration errors become `ValueError`, everything
//!    else `RuntimeError`
//! 4. **No references**: Python gets copies, never references to Rust state

pub mod orchestrator;
pub mod types;
