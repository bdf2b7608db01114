//! Core types shared by both engines: players, RNG, errors, decision sinks.

pub mod error;
pub mod player;
pub mod rng;
pub mod sink;

pub use error::SearchError;
pub use player::PlayerId;
pub use rng::GameRng;
pub use sink::{DecisionSink, LatestDecision};
