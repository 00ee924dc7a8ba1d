//! Deterministic random number generation
//!
//! Uses xorshift64* algorithm for fast, deterministic random number generation.
//! CRITICAL: All randomness in the simulator MUST go through this module.
//!
//! The simulator never touches a process-wide generator. Every run receives
//! its own [`RandomSource`], usually an [`RngManager`] derived with
//! [`RngManager::for_stream`] from the master seed and the run index.

mod source;
mod xorshift;

pub use source::RandomSource;
pub use xorshift::RngManager;
