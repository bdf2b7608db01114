//! Error taxonomy for decision engines.
//!
//! Search over a well-formed state cannot fail; these variants cover the
//! edge conditions at the boundary (degenerate roots, bad configuration,
//! a driver finding nothing in the sink). Contract violations by a rules
//! engine are panics, not errors.

use thiserror::Error;

/// Errors returned by `decide` and configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Search started from a terminal root state")]
    TerminalRoot,

    #[error("No legal actions available")]
    NoLegalActions,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Engine returned without pushing a decision")]
    NoDecision,
}
