use log::trace;

use crate::Symbol;

/// Stack recognizer for `open^n close^n`, n >= 0.
///
/// One left-to-right pass: every leading `open` pushes a marker, then every `close` pops one.
/// Anything else, or a `close` with nothing left to pop, rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalancedRun {
    open: Symbol,
    close: Symbol,
}

impl Default for BalancedRun {
    fn default() -> Self {
        BalancedRun::new('a', 'b')
    }
}

impl BalancedRun {
    // with open == close the push phase swallows everything, so only "" is accepted
    pub fn new(open: Symbol, close: Symbol) -> BalancedRun {
        BalancedRun { open, close }
    }

    pub fn open(&self) -> Symbol {
        self.open
    }

    pub fn close(&self) -> Symbol {
        self.close
    }

    pub fn recognize(&self, input: &str) -> bool {
        let mut stack: Vec<Symbol> = Vec::new();
        let mut symbols = input.chars().peekable();

        while let Some(symbol) = symbols.next_if_eq(&self.open) {
            stack.push(symbol);
        }

        while symbols.next_if_eq(&self.close).is_some() {
            if stack.pop().is_none() {
                trace!("pda: more {:?} than {:?}", self.close, self.open);
                return false;
            }
        }

        // a leftover symbol broke out of both phases
        symbols.next().is_none() && stack.is_empty()
    }
}

pub fn recognize_balanced_run(input: &str) -> bool {
    BalancedRun::default().recognize(input)
}
