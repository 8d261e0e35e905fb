//! This module defines the `Configuration` struct, a complete snapshot of one
//! instant of a machine's execution: current state, tape contents, and head
//! position.
//!
//! The tape is kept as two symbol sequences split at the head. Cells strictly
//! left of the head live in `prefix`, nearest-to-head first; the cell under
//! the head and everything to its right live in `suffix`, in tape order. Cells
//! outside both sequences are implicitly blank, so the doubly-infinite tape is
//! never materialized: reading under the head is O(1) and shifting the head one
//! cell in either direction is O(1) amortized, however far the machine has
//! wandered from the origin.

use crate::types::{Direction, State, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One instant of a machine's execution.
///
/// Advancing operations consume the configuration and return a new value, so
/// every step of a run produces a fresh `Configuration` and no tape mutation
/// is ever observable through the API. Clone a configuration before stepping
/// to retain the older snapshot, e.g. for tracing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Cells strictly left of the head, nearest-to-head first.
    prefix: VecDeque<Symbol>,
    state: State,
    /// The cell under the head, then the cells to its right in tape order.
    suffix: VecDeque<Symbol>,
}

impl Configuration {
    /// Creates the initial configuration for the given input: an empty prefix,
    /// the start state, and the input as the suffix, head on its first cell.
    pub fn new(input: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            prefix: VecDeque::new(),
            state: State::START,
            suffix: input.into_iter().collect(),
        }
    }

    /// Assembles a configuration from explicit parts.
    ///
    /// `prefix` lists the cells strictly left of the head, nearest-to-head
    /// first; `suffix` starts with the cell under the head. Either sequence may
    /// carry extra blank padding beyond the written extent of the tape, or stop
    /// short of it; missing cells are implicitly blank.
    pub fn from_parts(
        prefix: impl IntoIterator<Item = Symbol>,
        state: State,
        suffix: impl IntoIterator<Item = Symbol>,
    ) -> Self {
        Self {
            prefix: prefix.into_iter().collect(),
            state,
            suffix: suffix.into_iter().collect(),
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the symbol under the head; blank when the suffix is empty.
    pub fn current_symbol(&self) -> Symbol {
        self.suffix.front().copied().unwrap_or(Symbol::BLANK)
    }

    /// Writes `write` into the head cell, then shifts the head one cell in
    /// `direction`, returning the resulting configuration.
    ///
    /// Moving right transfers the written cell onto the prefix; moving left
    /// pulls the nearest prefix cell (blank when the prefix is empty) under
    /// the head, with the written cell becoming its right neighbor. The state
    /// is carried through unchanged. Total over all inputs; no bound is ever
    /// inspected.
    pub fn advance(mut self, write: Symbol, direction: Direction) -> Configuration {
        self.suffix.pop_front();

        match direction {
            Direction::Right => {
                self.prefix.push_front(write);
            }
            Direction::Left => {
                self.suffix.push_front(write);
                let neighbor = self.prefix.pop_front().unwrap_or(Symbol::BLANK);
                self.suffix.push_front(neighbor);
            }
        }

        self
    }

    /// Returns the configuration with its state replaced.
    pub fn with_state(mut self, state: State) -> Configuration {
        self.state = state;
        self
    }

    /// Returns the tracked tape contents in left-to-right order, from the
    /// leftmost tracked cell to the rightmost. Blank padding carried by either
    /// sequence is retained. O(length).
    pub fn project(&self) -> Vec<Symbol> {
        self.prefix
            .iter()
            .rev()
            .chain(self.suffix.iter())
            .copied()
            .collect()
    }

    /// Returns [`project`](Self::project) with leading and trailing blanks
    /// trimmed: the canonical view of the written tape, insensitive to any
    /// blank padding the representation happens to carry. An all-blank tape
    /// yields an empty sequence.
    pub fn tape(&self) -> Vec<Symbol> {
        let full = self.project();

        let Some(first) = full.iter().position(|s| !s.is_blank()) else {
            return Vec::new();
        };
        let last = full.iter().rposition(|s| !s.is_blank()).unwrap_or(first);

        full[first..=last].to_vec()
    }
}
