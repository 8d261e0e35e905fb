//! This module defines the `TuringMachine` struct, the step and run engine of
//! the simulator. A machine couples the declared state and symbol bounds with
//! an opaque transition capability and drives a `Configuration` forward one
//! transition at a time until a halting state is reached.

use crate::config::Configuration;
use crate::types::{MachineError, State, Symbol, TransitionFn};

/// A deterministic single-tape Turing Machine.
///
/// A machine is the triple of its declared bounds and its transition
/// capability: non-halting states range over `1..=max_state` and non-blank
/// symbols over `1..=max_symbol`. The capability must be total over that
/// domain; the engine validates the bounds on every step and fails loudly when
/// a configuration strays outside them, since that indicates a caller bug
/// rather than a runtime condition to recover from.
///
/// The machine is immutable for its whole lifetime. It holds no execution
/// state of its own, so one machine can drive any number of independent runs.
#[derive(Clone)]
pub struct TuringMachine<T> {
    max_state: u32,
    max_symbol: u32,
    transition: T,
}

impl<T: TransitionFn> TuringMachine<T> {
    /// Creates a new machine from its bounds and transition capability.
    ///
    /// Nothing is validated here: the bounds describe the contract the
    /// capability must uphold, and the engine checks them per step.
    pub fn new(max_state: u32, max_symbol: u32, transition: T) -> Self {
        Self {
            max_state,
            max_symbol,
            transition,
        }
    }

    /// Returns the highest numbered state the machine may occupy.
    pub fn max_state(&self) -> u32 {
        self.max_state
    }

    /// Returns the highest symbol value the machine may read or write.
    pub fn max_symbol(&self) -> u32 {
        self.max_symbol
    }

    /// Returns the machine's transition capability.
    pub fn transition(&self) -> &T {
        &self.transition
    }

    /// Executes a single transition, consuming `before` and returning the
    /// configuration one step later.
    ///
    /// # Returns
    ///
    /// * `Ok(Configuration)` with the step's symbol written, the head shifted,
    ///   and the next state folded in.
    /// * `Err(MachineError::AlreadyHalted)` when `before` is already in a
    ///   halting state.
    /// * `Err(MachineError::StateOutOfBounds)` / `Err(MachineError::SymbolOutOfBounds)`
    ///   when the configuration lies outside the declared bounds.
    /// * `Err(MachineError::UndefinedTransition)` when the capability has no
    ///   rule for the pair.
    pub fn step(&self, before: Configuration) -> Result<Configuration, MachineError> {
        let state = before.state();
        match state {
            State::Accept | State::Reject => return Err(MachineError::AlreadyHalted(state)),
            State::Normal(n) if n == 0 || n > self.max_state => {
                return Err(MachineError::StateOutOfBounds {
                    state,
                    max: self.max_state,
                })
            }
            State::Normal(_) => {}
        }

        let symbol = before.current_symbol();
        if symbol.value() > self.max_symbol {
            return Err(MachineError::SymbolOutOfBounds {
                symbol,
                max: self.max_symbol,
            });
        }

        let step = self
            .transition
            .apply(state, symbol)
            .ok_or(MachineError::UndefinedTransition { state, symbol })?;

        Ok(before
            .advance(step.write, step.direction)
            .with_state(step.next_state))
    }

    /// Runs the machine on the given input until it halts, returning the final
    /// configuration.
    ///
    /// The run starts from the initial configuration: head on the first input
    /// cell, state [`State::START`]. Termination is the caller's contract; a
    /// machine that never reaches `Accept` or `Reject` makes this call never
    /// return. Callers needing a bound must impose their own step limit around
    /// [`step`](Self::step).
    pub fn run(
        &self,
        input: impl IntoIterator<Item = Symbol>,
    ) -> Result<Configuration, MachineError> {
        self.run_config(Configuration::new(input))
    }

    /// Runs the machine from an arbitrary configuration until it halts.
    ///
    /// The halting check precedes every step, so a configuration that is
    /// already halted is returned unchanged with zero transitions executed and
    /// no reads of the transition capability.
    pub fn run_config(&self, config: Configuration) -> Result<Configuration, MachineError> {
        let mut config = config;

        while !config.state().is_halting() {
            config = self.step(config)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TransitionTable;
    use crate::types::{Direction, TransitionStep};

    fn one() -> Symbol {
        Symbol::from(1)
    }

    /// Accepts when the cell under the head is blank, rejects otherwise.
    fn blank_acceptor() -> TuringMachine<TransitionTable> {
        let rules = TransitionTable::new()
            .rule(
                State::START,
                Symbol::BLANK,
                Symbol::BLANK,
                Direction::Right,
                State::Accept,
            )
            .rule(State::START, one(), one(), Direction::Right, State::Reject);

        TuringMachine::new(1, 1, rules)
    }

    #[test]
    fn test_empty_input_accepts() {
        let machine = blank_acceptor();
        let halted = machine.run(Vec::new()).unwrap();

        assert_eq!(halted.state(), State::Accept);
        assert_eq!(halted.project(), vec![Symbol::BLANK]);
        assert_eq!(halted.tape(), Vec::new());
    }

    #[test]
    fn test_marked_input_rejects() {
        let machine = blank_acceptor();
        let halted = machine.run(vec![one()]).unwrap();

        assert_eq!(halted.state(), State::Reject);
    }

    #[test]
    fn test_single_step() {
        let machine = blank_acceptor();
        let after = machine.step(Configuration::new(vec![one()])).unwrap();

        assert_eq!(after.state(), State::Reject);
        assert_eq!(after.project(), vec![one()]);
    }

    #[test]
    fn test_runs_are_deterministic() {
        let machine = blank_acceptor();

        let first = machine.run(vec![one(), one()]).unwrap();
        let second = machine.run(vec![one(), one()]).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_final_state_is_always_halting() {
        let machine = blank_acceptor();

        for input in [Vec::new(), vec![one()], vec![one(), one()]] {
            let halted = machine.run(input).unwrap();
            assert!(halted.state().is_halting());
        }
    }

    #[test]
    fn test_halted_configuration_runs_zero_steps() {
        let machine = blank_acceptor();
        let start = Configuration::from_parts(Vec::new(), State::Reject, vec![one(), one()]);

        let halted = machine.run_config(start.clone()).unwrap();

        // No transition executed, so the tape is untouched.
        assert_eq!(halted, start);
        assert_eq!(halted.project(), vec![one(), one()]);
    }

    #[test]
    fn test_step_on_halted_configuration_fails() {
        let machine = blank_acceptor();
        let halted = Configuration::new(Vec::new()).with_state(State::Accept);

        assert_eq!(
            machine.step(halted),
            Err(MachineError::AlreadyHalted(State::Accept))
        );
    }

    #[test]
    fn test_state_out_of_bounds() {
        let machine = blank_acceptor();

        let stray = Configuration::new(Vec::new()).with_state(State::Normal(2));
        assert_eq!(
            machine.step(stray),
            Err(MachineError::StateOutOfBounds {
                state: State::Normal(2),
                max: 1
            })
        );

        let zero = Configuration::new(Vec::new()).with_state(State::Normal(0));
        assert_eq!(
            machine.step(zero),
            Err(MachineError::StateOutOfBounds {
                state: State::Normal(0),
                max: 1
            })
        );
    }

    #[test]
    fn test_symbol_out_of_bounds() {
        let machine = blank_acceptor();
        let stray = Configuration::new(vec![Symbol::from(9)]);

        assert_eq!(
            machine.step(stray),
            Err(MachineError::SymbolOutOfBounds {
                symbol: Symbol::from(9),
                max: 1
            })
        );
    }

    #[test]
    fn test_undefined_transition() {
        let machine = TuringMachine::new(1, 1, TransitionTable::new());

        assert_eq!(
            machine.run(Vec::new()),
            Err(MachineError::UndefinedTransition {
                state: State::START,
                symbol: Symbol::BLANK,
            })
        );
    }

    #[test]
    fn test_closure_backed_machine() {
        // The same machine as `blank_acceptor`, expressed as a computed rule.
        let machine = TuringMachine::new(1, 1, |_: State, symbol: Symbol| {
            let next = if symbol.is_blank() {
                State::Accept
            } else {
                State::Reject
            };
            TransitionStep::new(symbol, next, Direction::Right)
        });

        let halted = machine.run(vec![one()]).unwrap();
        assert_eq!(halted.state(), State::Reject);

        let table_halted = blank_acceptor().run(vec![one()]).unwrap();
        assert_eq!(halted, table_halted);
    }
}
