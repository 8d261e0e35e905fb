//! This module defines the core value types used throughout the Turing Machine
//! simulator: tape symbols, machine states, head movement directions, transition
//! steps, the transition capability trait, and the shared error type.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single tape symbol.
///
/// Symbols are drawn from `{blank} ∪ {1..=k}` for a machine-fixed bound `k`.
/// The blank is encoded as `0`, so a non-blank symbol below `1` is
/// unrepresentable. The upper bound `k` is a contract between a machine and
/// its transition function; it is checked by the engine once per step, not
/// per constructed value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(u32);

impl Symbol {
    /// The designated blank symbol, occupying every cell not explicitly written.
    pub const BLANK: Symbol = Symbol(0);

    /// Creates the non-blank symbol with the given value.
    ///
    /// # Returns
    ///
    /// * `Ok(Symbol)` for any value `>= 1`.
    /// * `Err(MachineError::InvalidSymbol)` for `0`, which is reserved for the blank.
    pub fn mark(value: u32) -> Result<Self, MachineError> {
        if value == 0 {
            return Err(MachineError::InvalidSymbol(value));
        }
        Ok(Symbol(value))
    }

    /// Returns `true` if this symbol is the blank.
    pub fn is_blank(self) -> bool {
        self == Self::BLANK
    }

    /// Returns the numeric value of this symbol; the blank is `0`.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for Symbol {
    /// `0` converts to the blank; any other value to the mark of that value.
    fn from(value: u32) -> Self {
        Symbol(value)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            write!(f, "_")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A machine state.
///
/// States are drawn from `{1..=m} ∪ {Accept, Reject}` for a machine-fixed
/// bound `m`. `Accept` and `Reject` are the two halting states; `Normal(1)`
/// is always the start state. States carry no behavior of their own and are
/// compared by equality only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    /// A numbered working state.
    Normal(u32),
    /// The accepting halt state.
    Accept,
    /// The rejecting halt state.
    Reject,
}

impl State {
    /// The start state of every machine.
    pub const START: State = State::Normal(1);

    /// Returns `true` exactly for `Accept` and `Reject`.
    pub fn is_halting(self) -> bool {
        matches!(self, State::Accept | State::Reject)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Normal(n) => write!(f, "q{}", n),
            State::Accept => write!(f, "accept"),
            State::Reject => write!(f, "reject"),
        }
    }
}

/// The two directions a tape head can move after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one cell to the left.
    Left,
    /// Move the head one cell to the right.
    Right,
}

/// The outcome of one transition: the symbol to write into the head cell, the
/// state to enter, and the direction to move the head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionStep {
    /// The symbol written into the cell under the head.
    pub write: Symbol,
    /// The state the machine enters after this step.
    pub next_state: State,
    /// The direction the head moves after writing.
    pub direction: Direction,
}

impl TransitionStep {
    pub fn new(write: Symbol, next_state: State, direction: Direction) -> Self {
        Self {
            write,
            next_state,
            direction,
        }
    }
}

/// The transition capability of a machine: the rule mapping
/// `(state, symbol-under-head)` to the step to perform.
///
/// The engine treats implementations as opaque and never inspects them beyond
/// calling [`TransitionFn::apply`]. `apply` returns `None` when no rule covers
/// the pair; the engine reports that as [`MachineError::UndefinedTransition`].
/// Every closure `Fn(State, Symbol) -> TransitionStep` is a total capability
/// via the blanket implementation, so a lookup table, a generated match, or a
/// computed rule all work equally well.
pub trait TransitionFn {
    /// Returns the step for the given pair, or `None` when undefined.
    fn apply(&self, state: State, symbol: Symbol) -> Option<TransitionStep>;
}

impl<F> TransitionFn for F
where
    F: Fn(State, Symbol) -> TransitionStep,
{
    fn apply(&self, state: State, symbol: Symbol) -> Option<TransitionStep> {
        Some(self(state, symbol))
    }
}

/// Represents the errors that can occur while constructing symbols or
/// advancing a machine. Every variant signals a caller contract violation;
/// none is recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// Indicates an attempt to construct a non-blank symbol from a reserved value.
    #[error("invalid symbol value {0}: non-blank symbols start at 1")]
    InvalidSymbol(u32),
    /// Indicates a configuration whose state lies outside the machine's declared bound.
    #[error("state {state} is outside the machine bound of {max} states")]
    StateOutOfBounds { state: State, max: u32 },
    /// Indicates a symbol under the head outside the machine's declared alphabet.
    #[error("symbol {symbol} is outside the machine bound of {max} symbols")]
    SymbolOutOfBounds { symbol: Symbol, max: u32 },
    /// Indicates that the transition capability has no rule for the pair.
    #[error("no transition defined for state {state} and symbol {symbol}")]
    UndefinedTransition { state: State, symbol: Symbol },
    /// Indicates a single step requested on a configuration that already halted.
    #[error("cannot step a configuration already halted in {0}")]
    AlreadyHalted(State),
}
