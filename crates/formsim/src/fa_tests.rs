use bit_set::BitSet;

use crate::{compile_pattern, convert_to_dfa, AutomatonError, Dfa, Nfa};

fn run_vectors(tests: &[(&str, bool)], nfa: &Nfa, dfa: &Dfa, name: &str) {
    for (test, expected_result) in tests {
        let nfa_result = nfa.simulate(test);
        let dfa_result = dfa.simulate(test);
        assert_eq!(
            nfa_result, *expected_result,
            "nfa for '{}' failed on input '{}', expect match: {}, actual match: {}",
            name, test, expected_result, nfa_result
        );
        assert_eq!(
            dfa_result, *expected_result,
            "dfa for '{}' failed on input '{}', expect match: {}, actual match: {}",
            name, test, expected_result, dfa_result
        );
    }
}

fn bits(states: &[usize]) -> BitSet {
    states.iter().copied().collect()
}

// (a|b)*ab written out by hand, state 0 loops on both symbols and guesses where "ab" starts
fn ends_with_ab() -> Nfa {
    let mut nfa = Nfa::new();
    let s1 = nfa.add_state();
    let s2 = nfa.add_state();
    nfa.add_transition(0, 'a', 0).unwrap();
    nfa.add_transition(0, 'b', 0).unwrap();
    nfa.add_transition(0, 'a', s1).unwrap();
    nfa.add_transition(s1, 'b', s2).unwrap();
    nfa.set_final(s2).unwrap();
    nfa
}

#[test]
fn pattern_chain_shape() {
    let nfa = compile_pattern("ab");

    assert_eq!(nfa.state_count(), 3);
    assert_eq!(nfa.start_state(), 0);
    assert_eq!(nfa.final_states(), &bits(&[2]));
    assert_eq!(nfa.alphabet().iter().copied().collect::<Vec<_>>(), vec!['a', 'b']);
    assert_eq!(
        nfa.transitions().collect::<Vec<_>>(),
        vec![(0, 'a', 1), (1, 'b', 2)]
    );

    assert!(nfa.simulate("ab"));
    assert!(!nfa.simulate("ba"));
}

#[test]
fn empty_pattern() {
    let nfa = compile_pattern("");
    assert_eq!(nfa.state_count(), 1);
    assert!(nfa.is_final(0));
    assert!(nfa.alphabet().is_empty());

    let dfa = convert_to_dfa(&nfa);
    assert_eq!(dfa.state_count(), 1);

    let test_vectors = [("", true), ("a", false), (" ", false)];
    run_vectors(&test_vectors, &nfa, &dfa, "");
}

#[test]
fn metacharacters_are_literal() {
    let re_str = "a|b*";
    let nfa = compile_pattern(re_str);
    let dfa = convert_to_dfa(&nfa);
    assert_eq!(nfa.state_count(), 5);

    let test_vectors = [
        ("a|b*", true),
        ("a", false),
        ("b", false),
        ("abbb", false),
        ("a|b", false),
    ];
    run_vectors(&test_vectors, &nfa, &dfa, re_str);
}

#[test]
fn repeated_symbols() {
    let re_str = "aab";
    let nfa = compile_pattern(re_str);
    let dfa = convert_to_dfa(&nfa);
    assert_eq!(nfa.alphabet().len(), 2);

    let test_vectors = [
        ("aab", true),
        ("ab", false),
        ("aaab", false),
        ("aabb", false),
        ("", false),
    ];
    run_vectors(&test_vectors, &nfa, &dfa, re_str);
}

#[test]
fn unicode_symbols() {
    let re_str = "λx→";
    let nfa = compile_pattern(re_str);
    let dfa = convert_to_dfa(&nfa);
    assert_eq!(nfa.state_count(), 4);

    let test_vectors = [("λx→", true), ("λx", false), ("lx→", false)];
    run_vectors(&test_vectors, &nfa, &dfa, re_str);
}

#[test]
fn add_transition_is_idempotent() {
    let mut nfa = Nfa::new();
    let s1 = nfa.add_state();
    nfa.add_transition(0, 'a', s1).unwrap();
    nfa.add_transition(0, 'a', s1).unwrap();

    assert_eq!(nfa.transitions().count(), 1);
    assert_eq!(nfa.targets(0, 'a'), Some(&bits(&[s1])));
}

#[test]
fn builder_rejects_unknown_states() {
    let mut nfa = Nfa::new();
    assert_eq!(nfa.add_transition(0, 'a', 1), Err(AutomatonError::UnknownState(1)));
    assert_eq!(nfa.add_transition(3, 'a', 0), Err(AutomatonError::UnknownState(3)));
    assert_eq!(nfa.set_final(2), Err(AutomatonError::UnknownState(2)));

    // failed calls leave the automaton untouched
    assert_eq!(nfa.transitions().count(), 0);
    assert!(nfa.alphabet().is_empty());
    assert!(nfa.final_states().is_empty());
}

#[test]
fn nondeterministic_simulation() {
    let nfa = ends_with_ab();
    let dfa = convert_to_dfa(&nfa);

    let test_vectors = [
        ("ab", true),
        ("aab", true),
        ("bbab", true),
        ("abab", true),
        ("", false),
        ("a", false),
        ("aba", false),
        ("abc", false),
        ("cab", false),
    ];
    run_vectors(&test_vectors, &nfa, &dfa, "(a|b)*ab");
}

#[test]
fn subset_ids_follow_discovery_order() {
    let dfa = convert_to_dfa(&ends_with_ab());

    assert_eq!(dfa.state_count(), 3);
    assert_eq!(dfa.start_state(), 0);
    assert_eq!(dfa.nfa_states(0), Some(&bits(&[0])));
    assert_eq!(dfa.nfa_states(1), Some(&bits(&[0, 1])));
    assert_eq!(dfa.nfa_states(2), Some(&bits(&[0, 2])));
    assert_eq!(dfa.nfa_states(3), None);
    assert_eq!(dfa.final_states(), &bits(&[2]));

    assert_eq!(
        dfa.transitions().collect::<Vec<_>>(),
        vec![
            (0, 'a', 1),
            (0, 'b', 0),
            (1, 'a', 1),
            (1, 'b', 2),
            (2, 'a', 1),
            (2, 'b', 0),
        ]
    );
}

#[test]
fn dfa_has_no_dead_state() {
    let nfa = compile_pattern("ab");
    let dfa = convert_to_dfa(&nfa);

    assert_eq!(dfa.state_count(), 3);
    assert_eq!(dfa.alphabet(), nfa.alphabet());
    assert_eq!(dfa.target(0, 'b'), None);
    assert_eq!(dfa.target(0, 'a'), Some(1));
    assert_eq!(dfa.node(2).map(|node| node.target('a')), Some(None));
    assert!(dfa.is_final(2));
    assert!(!dfa.simulate("b"));
}

#[test]
fn final_iff_subset_holds_nfa_final() {
    let nfa = ends_with_ab();
    let dfa = Dfa::from_nfa(&nfa);

    for id in dfa.states() {
        let subset = dfa.nfa_states(id).unwrap();
        assert!(!subset.is_empty());
        assert_eq!(dfa.is_final(id), !subset.is_disjoint(nfa.final_states()));
    }
}

#[test]
fn unreachable_states_are_not_converted() {
    let mut nfa = compile_pattern("a");
    let orphan = nfa.add_state();
    nfa.add_transition(orphan, 'z', 1).unwrap();

    let dfa = convert_to_dfa(&nfa);
    assert_eq!(dfa.state_count(), 2);
    assert_eq!(dfa.alphabet().len(), 2);
    assert!(!dfa.simulate("z"));
    assert!(dfa.simulate("a"));
}

#[test]
fn start_state_can_be_final() {
    let mut nfa = Nfa::new();
    nfa.set_final(0).unwrap();
    nfa.add_transition(0, 'x', 0).unwrap();

    let dfa = convert_to_dfa(&nfa);
    let test_vectors = [("", true), ("x", true), ("xxxx", true), ("xy", false)];
    run_vectors(&test_vectors, &nfa, &dfa, "x*");
}
