use crate::paytable::Paytable;
use crate::rng::RandomSource;
use crate::symbols::Symbol;
use serde::{Deserialize, Serialize};

pub const COLS: usize = 3;
pub const ROWS: usize = 3;

/// One spin's symbols, column-major. Created fresh per spin and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    columns: [[Symbol; ROWS]; COLS],
}

impl Grid {
    pub fn from_columns(columns: [[Symbol; ROWS]; COLS]) -> Self {
        Self { columns }
    }

    pub fn at(&self, col: usize, row: usize) -> Symbol {
        self.columns[col][row]
    }

    /// The symbols of one horizontal line, left to right.
    pub fn row(&self, row: usize) -> [Symbol; COLS] {
        [
            self.columns[0][row],
            self.columns[1][row],
            self.columns[2][row],
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub winnings: u64,
    /// 1-based indices of the lines that paid, in row order.
    pub winning_lines: Vec<u8>,
}

impl SpinOutcome {
    pub fn is_win(&self) -> bool {
        self.winnings > 0
    }
}

/// Generate one grid. Each column samples `ROWS` symbols without
/// replacement from its own fresh copy of the pool, so column frequencies
/// track the population counts while columns stay independent.
pub fn generate_spin<R: RandomSource + ?Sized>(rng: &mut R, paytable: &Paytable) -> Grid {
    let pool = paytable.build_pool();
    let mut columns = [[Symbol::A; ROWS]; COLS];
    for column in columns.iter_mut() {
        let mut remaining = pool.clone();
        for cell in column.iter_mut() {
            let index = rng.next_below(remaining.len());
            // Vec::remove keeps pool order stable, so a fixed draw script
            // maps to exactly one grid.
            *cell = remaining.remove(index);
        }
    }
    Grid { columns }
}

/// Score a grid against the contiguous prefix of active lines. A line wins
/// iff all three columns hold the identical symbol in that row; winning
/// lines are independent and simply summed. Zero winnings with no lines is
/// a normal outcome, not an error.
pub fn evaluate(grid: &Grid, active_lines: u8, bet: u64, paytable: &Paytable) -> SpinOutcome {
    let mut winnings = 0u64;
    let mut winning_lines = Vec::new();
    for row in (0..ROWS).take(active_lines as usize) {
        let first = grid.at(0, row);
        if (1..COLS).all(|col| grid.at(col, row) == first) {
            winnings += paytable.payout(first) * bet;
            winning_lines.push(row as u8 + 1);
        }
    }
    SpinOutcome {
        winnings,
        winning_lines,
    }
}

/// Convenience: spin and score in one call.
pub fn spin_once<R: RandomSource + ?Sized>(
    rng: &mut R,
    paytable: &Paytable,
    active_lines: u8,
    bet: u64,
) -> (Grid, SpinOutcome) {
    let grid = generate_spin(rng, paytable);
    let outcome = evaluate(&grid, active_lines, bet, paytable);
    (grid, outcome)
}
