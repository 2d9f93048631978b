use thiserror::Error;

pub const MIN_BET: u64 = 1;
pub const MAX_BET: u64 = 100;
pub const MAX_LINES: u8 = 3;

/// Rejections from the pure wager validators. The console layer prints
/// these and re-prompts instead of looping inside the core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WagerError {
    #[error("number of lines must be between 1 and {MAX_LINES}, got {0}")]
    LinesOutOfRange(u8),
    #[error("bet must be between ${MIN_BET} and ${MAX_BET}, got ${0}")]
    BetOutOfRange(u64),
    #[error("total stake ${stake} exceeds balance ${balance}")]
    InsufficientBalance { stake: u64, balance: u64 },
}

pub fn validate_lines(lines: u8) -> Result<u8, WagerError> {
    if (1..=MAX_LINES).contains(&lines) {
        Ok(lines)
    } else {
        Err(WagerError::LinesOutOfRange(lines))
    }
}

pub fn validate_bet(bet: u64) -> Result<u64, WagerError> {
    if (MIN_BET..=MAX_BET).contains(&bet) {
        Ok(bet)
    } else {
        Err(WagerError::BetOutOfRange(bet))
    }
}

/// Total stake for a wager, rejected when the balance cannot cover it.
pub fn validate_stake(bet: u64, lines: u8, balance: u64) -> Result<u64, WagerError> {
    let stake = bet * lines as u64;
    if stake > balance {
        Err(WagerError::InsufficientBalance { stake, balance })
    } else {
        Ok(stake)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_bounds() {
        assert_eq!(validate_lines(1), Ok(1));
        assert_eq!(validate_lines(3), Ok(3));
        assert_eq!(validate_lines(0), Err(WagerError::LinesOutOfRange(0)));
        assert_eq!(validate_lines(4), Err(WagerError::LinesOutOfRange(4)));
    }

    #[test]
    fn bet_bounds() {
        assert_eq!(validate_bet(1), Ok(1));
        assert_eq!(validate_bet(100), Ok(100));
        assert_eq!(validate_bet(0), Err(WagerError::BetOutOfRange(0)));
        assert_eq!(validate_bet(101), Err(WagerError::BetOutOfRange(101)));
    }

    #[test]
    fn stake_against_balance() {
        assert_eq!(validate_stake(10, 3, 30), Ok(30));
        assert_eq!(
            validate_stake(10, 3, 29),
            Err(WagerError::InsufficientBalance {
                stake: 30,
                balance: 29
            })
        );
    }
}
