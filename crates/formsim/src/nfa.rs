use std::collections::{BTreeMap, BTreeSet};

use bit_set::BitSet;
use log::trace;

use crate::{error::AutomatonError, StateId, Symbol};

#[derive(Debug, Clone, Default)]
pub struct NfaNode {
    pub(crate) transitions: BTreeMap<Symbol, BitSet>,
}

impl NfaNode {
    pub fn targets(&self, symbol: Symbol) -> Option<&BitSet> {
        self.transitions.get(&symbol)
    }
}

/// Nondeterministic finite automaton without epsilon moves.
///
/// States are indices into `nodes` and can only be created through [`Nfa::add_state`], so the
/// start state, every final state and every transition target always name an existing state.
#[derive(Debug, Clone)]
pub struct Nfa {
    pub(crate) nodes: Vec<NfaNode>,
    pub(crate) alphabet: BTreeSet<Symbol>,
    pub(crate) start_state: StateId,
    pub(crate) final_states: BitSet,
}

impl Default for Nfa {
    fn default() -> Self {
        Self::new()
    }
}

impl Nfa {
    /// Creates an automaton holding only its start state `0`, which is not accepting.
    pub fn new() -> Nfa {
        Nfa {
            nodes: vec![NfaNode::default()],
            alphabet: BTreeSet::new(),
            start_state: 0,
            final_states: BitSet::new(),
        }
    }

    pub fn add_state(&mut self) -> StateId {
        self.nodes.push(NfaNode::default());
        self.nodes.len() - 1
    }

    fn check_state(&self, id: StateId) -> Result<(), AutomatonError> {
        if id < self.nodes.len() {
            Ok(())
        } else {
            Err(AutomatonError::UnknownState(id))
        }
    }

    /// Adds `to` to the targets of `(from, symbol)`. Targets form a set, so repeating a
    /// transition has no further effect.
    pub fn add_transition(
        &mut self,
        from: StateId,
        symbol: Symbol,
        to: StateId,
    ) -> Result<(), AutomatonError> {
        self.check_state(from)?;
        self.check_state(to)?;
        self.insert_transition(from, symbol, to);
        Ok(())
    }

    // caller guarantees both ids came from `add_state`
    pub(crate) fn insert_transition(&mut self, from: StateId, symbol: Symbol, to: StateId) {
        self.nodes[from]
            .transitions
            .entry(symbol)
            .or_default()
            .insert(to);
        self.alphabet.insert(symbol);
    }

    pub fn set_final(&mut self, id: StateId) -> Result<(), AutomatonError> {
        self.check_state(id)?;
        self.final_states.insert(id);
        Ok(())
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

    pub fn node(&self, id: StateId) -> Option<&NfaNode> {
        self.nodes.get(id)
    }

    pub fn targets(&self, from: StateId, symbol: Symbol) -> Option<&BitSet> {
        self.nodes.get(from).and_then(|node| node.targets(symbol))
    }

    /// Every `(from, symbol, to)` triple, ordered by source state, then symbol, then target.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Symbol, StateId)> + '_ {
        self.nodes.iter().enumerate().flat_map(|(from, node)| {
            node.transitions
                .iter()
                .flat_map(move |(&symbol, targets)| targets.iter().map(move |to| (from, symbol, to)))
        })
    }

    // union of the targets of every state in `set` on `symbol`
    pub(crate) fn delta(&self, set: &BitSet, symbol: Symbol) -> BitSet {
        let mut result = BitSet::with_capacity(self.nodes.len());

        for i in set.iter() {
            if let Some(targets) = self.nodes[i].transitions.get(&symbol) {
                result.union_with(targets);
            }
        }

        result
    }

    /// Runs every path at once by stepping the set of active states. Rejects as soon as the
    /// active set runs dry without looking at the rest of the input.
    pub fn simulate(&self, input: &str) -> bool {
        let mut current = BitSet::with_capacity(self.nodes.len());
        current.insert(self.start_state);

        for (position, symbol) in input.chars().enumerate() {
            current = self.delta(&current, symbol);
            trace!("nfa: {:?} at {} -> {:?}", symbol, position, current);
            if current.is_empty() {
                return false;
            }
        }

        !current.is_disjoint(&self.final_states)
    }
}
