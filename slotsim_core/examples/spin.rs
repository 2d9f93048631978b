use slotsim_core::{spin_once, ChaChaSource, Paytable, ROWS};

fn main() {
    // Example end-to-end spin with a reproducible seed
    let mut rng = ChaChaSource::seeded(1);
    let paytable = Paytable::classic();
    let (grid, outcome) = spin_once(&mut rng, &paytable, 3, 10);
    for row in 0..ROWS {
        let cells: Vec<String> = grid.row(row).iter().map(|s| s.to_string()).collect();
        println!("{}", cells.join(" | "));
    }
    println!(
        "winnings={} winning_lines={:?}",
        outcome.winnings, outcome.winning_lines
    );
}
