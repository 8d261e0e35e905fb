//! This module provides `TransitionTable`, a map-backed implementation of the
//! transition capability. The engine never requires it (any closure works),
//! but most concrete machines are naturally written down as a rule table.

use crate::types::{Direction, State, Symbol, TransitionFn, TransitionStep};
use std::collections::HashMap;

/// A transition capability backed by a `(state, symbol) -> step` map.
///
/// Lookup is O(1); a pair with no entry is undefined, which the engine reports
/// as [`crate::types::MachineError::UndefinedTransition`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TransitionTable {
    rules: HashMap<(State, Symbol), TransitionStep>,
}

impl TransitionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule and returns the table, for chained construction.
    pub fn rule(
        mut self,
        state: State,
        read: Symbol,
        write: Symbol,
        direction: Direction,
        next_state: State,
    ) -> Self {
        self.insert(state, read, TransitionStep::new(write, next_state, direction));
        self
    }

    /// Inserts a rule, replacing any previous rule for the same pair.
    pub fn insert(&mut self, state: State, read: Symbol, step: TransitionStep) {
        self.rules.insert((state, read), step);
    }

    /// Returns the rule for the pair, if one is defined.
    pub fn get(&self, state: State, read: Symbol) -> Option<TransitionStep> {
        self.rules.get(&(state, read)).copied()
    }

    /// Returns the number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the table holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl TransitionFn for TransitionTable {
    fn apply(&self, state: State, symbol: Symbol) -> Option<TransitionStep> {
        self.get(state, symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        let table = TransitionTable::new();

        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.apply(State::START, Symbol::BLANK), None);
    }

    #[test]
    fn test_rule_lookup() {
        let table = TransitionTable::new().rule(
            State::START,
            Symbol::BLANK,
            Symbol::from(1),
            Direction::Right,
            State::Accept,
        );

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.apply(State::START, Symbol::BLANK),
            Some(TransitionStep::new(
                Symbol::from(1),
                State::Accept,
                Direction::Right
            ))
        );
        assert_eq!(table.apply(State::START, Symbol::from(1)), None);
    }

    #[test]
    fn test_duplicate_rule_replaces() {
        let table = TransitionTable::new()
            .rule(
                State::START,
                Symbol::BLANK,
                Symbol::BLANK,
                Direction::Right,
                State::Reject,
            )
            .rule(
                State::START,
                Symbol::BLANK,
                Symbol::BLANK,
                Direction::Left,
                State::Accept,
            );

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get(State::START, Symbol::BLANK),
            Some(TransitionStep::new(
                Symbol::BLANK,
                State::Accept,
                Direction::Left
            ))
        );
    }
}
