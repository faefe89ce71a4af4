use std::fmt;

use solana_sdk::pubkey::Pubkey;

use crate::game::Game;

const CREATOR_PREFIX_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct GameCard {
    pub key: String,
    pub players: String,
    pub bet_amount: String,
    /// Only offered to a connected wallet
    pub join: bool,
}

impl GameCard {
    pub fn new(game: &Game, public_key: Option<&Pubkey>) -> Self {
        let creator: String = game.creator.chars().take(CREATOR_PREFIX_LEN).collect();

        Self {
            key: game.id.clone(),
            players: format!("{creator}... vs ???"),
            bet_amount: format!("{} SOL", game.amount),
            join: public_key.is_some(),
        }
    }
}

impl fmt::Display for GameCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}  {}", self.key, self.players, self.bet_amount)?;

        if self.join {
            write!(f, "  [Join]")?;
        }

        Ok(())
    }
}

/// One card per game, in the order given.
pub fn render_game_list(games: &[Game], public_key: Option<&Pubkey>) -> Vec<GameCard> {
    games
        .iter()
        .map(|game| GameCard::new(game, public_key))
        .collect()
}
