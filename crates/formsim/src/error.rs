use thiserror::Error;

use crate::StateId;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("state {0} does not belong to this automaton")]
    UnknownState(StateId),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    #[error("error budget must be non-negative, got {0}")]
    NegativeBudget(i64),
}
