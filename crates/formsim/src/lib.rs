mod approx;
mod dfa;
mod error;
mod nfa;
mod pattern;
mod pda;
mod subset;

#[cfg(test)]
mod fa_tests;

// states are dense indices into an automaton's node list
pub type StateId = usize;
pub type Symbol = char;

pub use approx::{approximate_match, approximate_match_checked, ErrorBudget};
pub use dfa::{Dfa, DfaNode};
pub use error::{AutomatonError, MatchError};
pub use nfa::{Nfa, NfaNode};
pub use pattern::compile_pattern;
pub use pda::{recognize_balanced_run, BalancedRun};
pub use subset::convert_to_dfa;
