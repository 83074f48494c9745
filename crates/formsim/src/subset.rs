use std::collections::{HashMap, VecDeque};

use bit_set::BitSet;
use log::{debug, trace};

use crate::{
    dfa::{Dfa, DfaNode},
    nfa::Nfa,
    StateId,
};

// creates a DFA from an NFA using subset construction
// subsets get ids in the order the breadth-first walk discovers them, and the alphabet is
// walked in sorted order, so the numbering is reproducible
pub fn convert_to_dfa(nfa: &Nfa) -> Dfa {
    let mut initial_configuration = BitSet::with_capacity(nfa.state_count());
    initial_configuration.insert(nfa.start_state);

    let mut nodes: Vec<DfaNode> = vec![DfaNode::default()];
    let mut final_states = BitSet::new();

    // configuration -> id
    let mut ids: HashMap<BitSet, StateId> = HashMap::new();
    ids.insert(initial_configuration.clone(), 0);
    let mut subsets: Vec<BitSet> = vec![initial_configuration.clone()];

    let mut work_queue: VecDeque<(StateId, BitSet)> = VecDeque::new();
    work_queue.push_back((0, initial_configuration));

    while let Some((id, q)) = work_queue.pop_front() {
        if !q.is_disjoint(&nfa.final_states) {
            final_states.insert(id);
        }

        for &symbol in &nfa.alphabet {
            let t = nfa.delta(&q, symbol);
            // no dead state, a missing entry already rejects
            if t.is_empty() {
                continue;
            }

            let next = match ids.get(&t) {
                Some(&existing) => existing,
                None => {
                    let fresh = nodes.len();
                    trace!("subset {:?} is dfa state {}", t, fresh);
                    nodes.push(DfaNode::default());
                    ids.insert(t.clone(), fresh);
                    subsets.push(t.clone());
                    work_queue.push_back((fresh, t));
                    fresh
                }
            };

            nodes[id].transitions.insert(symbol, next);
        }
    }

    debug!(
        "subset construction: {} nfa states -> {} dfa states, {} final",
        nfa.state_count(),
        nodes.len(),
        final_states.len()
    );

    Dfa {
        nodes,
        alphabet: nfa.alphabet.clone(),
        start_state: 0,
        final_states,
        subsets,
    }
}
