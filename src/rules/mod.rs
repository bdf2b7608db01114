//! State abstraction consumed by the decision engines.
//!
//! The engines never interpret board geometry directly: they see actions,
//! successors, terminal/utility tests and liberty counts through
//! `GameState`. Concrete rules live under `games`.

pub mod state;

pub use state::GameState;
