use log::debug;

use crate::nfa::Nfa;

// every character is a literal symbol, there are no operators: "a|b" is the three symbol chain
// a, |, b
pub fn compile_pattern(pattern: &str) -> Nfa {
    let mut nfa = Nfa::new();
    let mut last = nfa.start_state();

    for symbol in pattern.chars() {
        let next = nfa.add_state();
        nfa.insert_transition(last, symbol, next);
        last = next;
    }

    nfa.final_states.insert(last);

    debug!(
        "compiled {:?} into {} states over {} symbols",
        pattern,
        nfa.state_count(),
        nfa.alphabet().len()
    );
    nfa
}

impl Nfa {
    /// Builds the chain `0 -p[0]-> 1 -p[1]-> ... -> k` accepting exactly `pattern`.
    pub fn from_pattern(pattern: &str) -> Nfa {
        compile_pattern(pattern)
    }
}
