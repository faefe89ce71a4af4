use anchor_lang::prelude::*;

use crate::{DEFAULT_OFFSET, HEADS, TAILS};


#[derive(AnchorDeserialize, AnchorSerialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState{
    Created,
    Joined,
    Completed,
    Cancelled
}

#[account]
#[derive(InitSpace)]
/// A single coin flip between the creator and whoever joins it.
pub struct Game{
    /// Position of the game in creation order, the game's address is derived from it
    pub index:u64,
    pub creator:Pubkey,
    /// Stake of each side in lamports, the pot is twice this
    pub bet_amount:u64,
    pub creator_side:u8,
    /// Hex encoded SHA-256 hash of the server seed, committed to at creation
    /// and checked against the seed revealed at resolution.
    #[max_len(64)]
    pub server_seed_hash:String,
    pub state:GameState,
    pub joiner:Option<Pubkey>,
    pub winner:Option<Pubkey>,
    #[max_len(64)]
    pub server_seed:Option<String>,
    /// Picked by the joiner, mixed with the server seed so neither side
    /// controls the outcome alone.
    #[max_len(64)]
    pub block_hash:Option<String>,
    pub created_at:i64,
    /// Zero until someone joins
    pub joined_at:i64,
}

impl Game{
    pub fn new(
        index:u64,
        creator:Pubkey,
        bet_amount:u64,
        creator_side:u8,
        server_seed_hash:String,
        now:i64
    ) -> Self{
        Self{
            index,
            creator,
            bet_amount,
            creator_side,
            server_seed_hash,
            state:GameState::Created,
            joiner:None,
            winner:None,
            server_seed:None,
            block_hash:None,
            created_at:now,
            joined_at:0,
        }
    }

    pub fn is_created_by(&self, player:&Pubkey)->bool{
        self.creator.eq(player)
    }

    pub fn is_open(&self)->bool{
        self.state == GameState::Created
    }

    pub fn is_joined(&self)->bool{
        self.state == GameState::Joined
    }

    pub fn is_player(&self, player:&Pubkey)->bool{
        self.is_created_by(player) || self.joiner.as_ref() == Some(player)
    }

    /// A joined game whose seed was never revealed in time.
    pub fn can_default(&self, now:i64)->bool{
        self.is_joined() && now > self.joined_at.saturating_add(DEFAULT_OFFSET)
    }

    pub fn is_valid_side(side:u8)->bool{
        side == HEADS || side == TAILS
    }

    /// Returns the player that called the landed side, the joiner always
    /// holds the opposite side to the creator.
    pub fn winner_for(&self, landed_side:u8)->Option<Pubkey>{
        if landed_side == self.creator_side {
            Some(self.creator)
        } else {
            self.joiner
        }
    }

    pub fn pot(&self)->Result<u64>{
        Ok(self.bet_amount.checked_mul(2).ok_or(ProgramError::ArithmeticOverflow)?)
    }
}
