use std::collections::{BTreeMap, BTreeSet};

use bit_set::BitSet;
use log::trace;

use crate::{nfa::Nfa, subset::convert_to_dfa, StateId, Symbol};

#[derive(Debug, Clone, Default)]
pub struct DfaNode {
    pub(crate) transitions: BTreeMap<Symbol, StateId>,
}

impl DfaNode {
    pub fn target(&self, symbol: Symbol) -> Option<StateId> {
        self.transitions.get(&symbol).copied()
    }
}

/// Deterministic automaton produced by subset construction. Each state keeps the set of NFA
/// states it stands for.
#[derive(Debug, Clone)]
pub struct Dfa {
    pub(crate) nodes: Vec<DfaNode>,
    pub(crate) alphabet: BTreeSet<Symbol>,
    pub(crate) start_state: StateId,
    pub(crate) final_states: BitSet,
    pub(crate) subsets: Vec<BitSet>,
}

impl Dfa {
    pub fn from_nfa(nfa: &Nfa) -> Dfa {
        convert_to_dfa(nfa)
    }

    pub fn start_state(&self) -> StateId {
        self.start_state
    }

    pub fn state_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn states(&self) -> impl Iterator<Item = StateId> {
        0..self.nodes.len()
    }

    pub fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    pub fn final_states(&self) -> &BitSet {
        &self.final_states
    }

    pub fn is_final(&self, id: StateId) -> bool {
        self.final_states.contains(id)
    }

    pub fn node(&self, id: StateId) -> Option<&DfaNode> {
        self.nodes.get(id)
    }

    pub fn target(&self, from: StateId, symbol: Symbol) -> Option<StateId> {
        self.nodes.get(from).and_then(|node| node.target(symbol))
    }

    /// The NFA states that DFA state `id` was built from.
    pub fn nfa_states(&self, id: StateId) -> Option<&BitSet> {
        self.subsets.get(id)
    }

    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Symbol, StateId)> + '_ {
        self.nodes.iter().enumerate().flat_map(|(from, node)| {
            node.transitions
                .iter()
                .map(move |(&symbol, &to)| (from, symbol, to))
        })
    }

    pub fn simulate(&self, input: &str) -> bool {
        let mut state = self.start_state;

        for symbol in input.chars() {
            match self.nodes[state].transitions.get(&symbol) {
                Some(&next) => {
                    trace!("dfa: {} --{:?}--> {}", state, symbol, next);
                    state = next;
                }
                None => return false,
            }
        }

        self.final_states.contains(state)
    }
}
