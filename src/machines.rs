//! Built-in sample machines over the `{blank, 1}` alphabet, with a small
//! registry for looking them up by name. Useful as executable documentation
//! and as ready-made fixtures for surrounding tools.

use crate::machine::TuringMachine;
use crate::table::TransitionTable;
use crate::types::{Direction, State, Symbol};

fn one() -> Symbol {
    Symbol::from(1)
}

/// Accepts when the cell under the head is blank, rejects otherwise.
/// The tape is left unchanged either way.
pub fn blank_acceptor() -> TuringMachine<TransitionTable> {
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

/// Increments a unary number: scans right over the marks, writes one more mark
/// on the trailing blank, and accepts. `n` marks in, `n + 1` marks out.
pub fn unary_increment() -> TuringMachine<TransitionTable> {
    let rules = TransitionTable::new()
        .rule(State::START, one(), one(), Direction::Right, State::START)
        .rule(
            State::START,
            Symbol::BLANK,
            one(),
            Direction::Right,
            State::Accept,
        );

    TuringMachine::new(1, 1, rules)
}

/// Classifies a unary number by parity: accepts an even count of marks,
/// rejects an odd one. Alternates between two states while scanning right.
pub fn unary_parity() -> TuringMachine<TransitionTable> {
    let even = State::Normal(1);
    let odd = State::Normal(2);

    let rules = TransitionTable::new()
        .rule(even, one(), one(), Direction::Right, odd)
        .rule(
            even,
            Symbol::BLANK,
            Symbol::BLANK,
            Direction::Right,
            State::Accept,
        )
        .rule(odd, one(), one(), Direction::Right, even)
        .rule(
            odd,
            Symbol::BLANK,
            Symbol::BLANK,
            Direction::Right,
            State::Reject,
        );

    TuringMachine::new(2, 1, rules)
}

struct Builtin {
    name: &'static str,
    description: &'static str,
    machine: TuringMachine<TransitionTable>,
}

lazy_static::lazy_static! {
    static ref MACHINES: Vec<Builtin> = vec![
        Builtin {
            name: "Blank acceptor",
            description: "Accepts when the cell under the head is blank, rejects otherwise",
            machine: blank_acceptor(),
        },
        Builtin {
            name: "Unary increment",
            description: "Rewrites n marks to n + 1 marks and accepts",
            machine: unary_increment(),
        },
        Builtin {
            name: "Unary parity",
            description: "Accepts an even count of marks, rejects an odd one",
            machine: unary_parity(),
        },
    ];
}

/// Lists the names of all built-in machines.
pub fn names() -> Vec<&'static str> {
    MACHINES.iter().map(|builtin| builtin.name).collect()
}

/// Returns the built-in machine with the given name.
pub fn by_name(name: &str) -> Option<TuringMachine<TransitionTable>> {
    MACHINES
        .iter()
        .find(|builtin| builtin.name == name)
        .map(|builtin| builtin.machine.clone())
}

/// Returns descriptive information about the built-in machine with the given name.
pub fn info(name: &str) -> Option<MachineInfo> {
    MACHINES
        .iter()
        .find(|builtin| builtin.name == name)
        .map(|builtin| MachineInfo {
            name: builtin.name,
            description: builtin.description,
            max_state: builtin.machine.max_state(),
            max_symbol: builtin.machine.max_symbol(),
            rule_count: builtin.machine.transition().len(),
        })
}

/// Descriptive information about a built-in machine.
#[derive(Debug, Clone)]
pub struct MachineInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub max_state: u32,
    pub max_symbol: u32,
    pub rule_count: usize,
}
