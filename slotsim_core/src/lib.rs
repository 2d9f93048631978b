pub mod engine;
pub mod paytable;
pub mod rng;
pub mod symbols;
pub mod wager;

pub use crate::engine::{evaluate, generate_spin, spin_once, Grid, SpinOutcome, COLS, ROWS};
pub use crate::paytable::{Paytable, PaytableEntry};
pub use crate::rng::{ChaChaSource, RandomSource, ScriptedSource};
pub use crate::symbols::Symbol;
pub use crate::wager::{
    validate_bet, validate_lines, validate_stake, WagerError, MAX_BET, MAX_LINES, MIN_BET,
};
