//! Concrete rules engines implementing `GameState`.
//!
//! The decision engines are game-agnostic; these implementations back the
//! integration tests, the benchmark, and the `isolation` binary.

pub mod isolation;
