use crate::symbols::{Symbol, SYMBOL_COUNT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaytableEntry {
    pub symbol: Symbol,
    /// Copies of the symbol in the sampling pool.
    pub population: u8,
    /// Multiplier applied to the per-line bet on a winning line.
    pub payout: u64,
}

/// Total mapping from symbol to population and payout. Entries are stored
/// in symbol index order, so lookups never miss.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paytable {
    entries: [PaytableEntry; SYMBOL_COUNT],
}

impl Paytable {
    /// The fixed table: populations {A:2, B:4, C:6, D:8}, payouts
    /// {A:5, B:4, C:3, D:2}. Rare symbols pay more.
    pub fn classic() -> Self {
        Self {
            entries: [
                PaytableEntry {
                    symbol: Symbol::A,
                    population: 2,
                    payout: 5,
                },
                PaytableEntry {
                    symbol: Symbol::B,
                    population: 4,
                    payout: 4,
                },
                PaytableEntry {
                    symbol: Symbol::C,
                    population: 6,
                    payout: 3,
                },
                PaytableEntry {
                    symbol: Symbol::D,
                    population: 8,
                    payout: 2,
                },
            ],
        }
    }

    pub fn population(&self, symbol: Symbol) -> u8 {
        self.entries[symbol.to_index() as usize].population
    }

    pub fn payout(&self, symbol: Symbol) -> u64 {
        self.entries[symbol.to_index() as usize].payout
    }

    pub fn pool_size(&self) -> usize {
        self.entries.iter().map(|e| e.population as usize).sum()
    }

    /// The multiset of symbols one column draws from, each symbol repeated
    /// per its population count.
    pub fn build_pool(&self) -> Vec<Symbol> {
        let mut pool = Vec::with_capacity(self.pool_size());
        for entry in &self.entries {
            for _ in 0..entry.population {
                pool.push(entry.symbol);
            }
        }
        pool
    }
}
