use std::io::{self, BufRead, Write};

use anyhow::bail;
use clap::Parser;
use tracing::{debug, info};

use slotsim_core::{
    generate_spin, evaluate, wager, ChaChaSource, Grid, Paytable, RandomSource, ROWS,
};

#[derive(Parser)]
#[command(
    name = "slotsim",
    about = "Text slot-machine simulator with responsible-gambling messaging"
)]
struct Cli {
    /// Seed the RNG for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
    /// Starting balance, skips the deposit prompt
    #[arg(long)]
    deposit: Option<u64>,
}

fn read_line(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("input stream closed");
    }
    Ok(line.trim().to_string())
}

fn prompt_number(prompt: &str) -> anyhow::Result<u64> {
    loop {
        match read_line(prompt)?.parse::<u64>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn prompt_deposit() -> anyhow::Result<u64> {
    loop {
        let amount = prompt_number("What would you like to deposit? $")?;
        if amount > 0 {
            return Ok(amount);
        }
        println!("Amount must be greater than 0.");
    }
}

fn prompt_lines() -> anyhow::Result<u8> {
    let prompt = format!(
        "Enter the number of lines to bet on (1-{}): ",
        wager::MAX_LINES
    );
    loop {
        let value = prompt_number(&prompt)?;
        match u8::try_from(value).ok().map(wager::validate_lines) {
            Some(Ok(lines)) => return Ok(lines),
            _ => println!("Enter a valid number of lines."),
        }
    }
}

fn prompt_bet() -> anyhow::Result<u64> {
    let prompt = format!(
        "What would you like to bet on each line? (${}-${}): ",
        wager::MIN_BET,
        wager::MAX_BET
    );
    loop {
        match wager::validate_bet(prompt_number(&prompt)?) {
            Ok(bet) => return Ok(bet),
            Err(err) => println!("{err}."),
        }
    }
}

fn print_grid(grid: &Grid) {
    for row in 0..ROWS {
        let cells: Vec<String> = grid.row(row).iter().map(|s| s.to_string()).collect();
        println!("{}", cells.join(" | "));
    }
}

fn play_round<R: RandomSource>(
    rng: &mut R,
    paytable: &Paytable,
    balance: u64,
) -> anyhow::Result<u64> {
    let lines = prompt_lines()?;
    let (bet, stake) = loop {
        let bet = prompt_bet()?;
        match wager::validate_stake(bet, lines, balance) {
            Ok(stake) => break (bet, stake),
            Err(_) => println!(
                "You do not have enough to bet that amount, your current balance is ${balance}"
            ),
        }
    };
    println!("You are betting ${bet} on {lines} lines. Total bet is ${stake}");

    let grid = generate_spin(rng, paytable);
    print_grid(&grid);
    let outcome = evaluate(&grid, lines, bet, paytable);
    debug!(
        winnings = outcome.winnings,
        winning_lines = ?outcome.winning_lines,
        stake,
        "spin settled"
    );

    if outcome.is_win() {
        println!("You won ${}.", outcome.winnings);
        let list: Vec<String> = outcome.winning_lines.iter().map(u8::to_string).collect();
        println!("You won on lines: {}", list.join(", "));
    } else {
        println!(
            "Sorry, you didn't win this time. \
             Remember, gambling should be for entertainment purposes only."
        );
    }

    Ok(balance - stake + outcome.winnings)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    println!("Welcome to the Responsible Gambling Awareness Program.");
    println!("This program is designed to educate you about responsible gambling.");
    println!("Gambling should be done for fun and not as a way to make money.");
    println!("If you think you have a gambling problem, please seek help.");

    let mut rng = match cli.seed {
        Some(seed) => ChaChaSource::seeded(seed),
        None => ChaChaSource::from_entropy(),
    };
    let paytable = Paytable::classic();
    let mut balance = match cli.deposit {
        Some(0) => bail!("deposit must be greater than 0"),
        Some(amount) => amount,
        None => prompt_deposit()?,
    };
    info!(balance, seeded = cli.seed.is_some(), "session started");

    loop {
        println!("Current balance is ${balance}");
        if balance < wager::MIN_BET {
            println!("You are out of funds.");
            break;
        }
        let answer = read_line("Press enter to play (q to quit): ")?;
        if answer == "q" {
            break;
        }
        balance = play_round(&mut rng, &paytable, balance)?;
    }

    println!("You left with ${balance}");
    println!("Remember to gamble responsibly and seek help if needed.");
    info!(balance, "session ended");
    Ok(())
}
