use clap::ValueEnum;
use serde::Serialize;
use solana_sdk::{native_token::LAMPORTS_PER_SOL, pubkey::Pubkey};

/// A game as the list view shows it, the stake is in SOL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    pub id: String,
    pub creator: String,
    pub amount: f64,
}

impl Game {
    pub fn new(id: impl Into<String>, creator: impl Into<String>, amount: f64) -> Self {
        Self {
            id: id.into(),
            creator: creator.into(),
            amount,
        }
    }

    pub fn from_account(address: &Pubkey, account: &coinflip::Game) -> Self {
        Self::new(
            address.to_string(),
            account.creator.to_string(),
            lamports_to_sol(account.bet_amount),
        )
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoinSide {
    #[default]
    Heads,
    Tails,
}

impl CoinSide {
    pub fn as_u8(self) -> u8 {
        match self {
            CoinSide::Heads => coinflip::HEADS,
            CoinSide::Tails => coinflip::TAILS,
        }
    }
}

/// Rounds to the nearest lamport, negative and non-finite amounts become zero
/// and are left for the program to reject.
pub fn sol_to_lamports(amount: f64) -> u64 {
    (amount * LAMPORTS_PER_SOL as f64).round() as u64
}

pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}
