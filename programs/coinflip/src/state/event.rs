use anchor_lang::prelude::*;

use crate::CasinoUpdate;

#[event]
pub struct InitializeCasinoEvent {
    pub admin: Pubkey,
    pub commission_fee: u8,
}

#[event]
pub struct UpdateCasinoEvent {
    pub admin_at_time_of_update: Pubkey,
    pub update: CasinoUpdate,
}

#[event]
pub struct GameCreatedEvent {
    pub game: Pubkey,
    pub creator: Pubkey,
    pub bet_amount: u64,
    pub creator_side: u8,
}

#[event]
pub struct GameJoinedEvent {
    pub game: Pubkey,
    pub joiner: Pubkey,
    pub block_hash: String,
}

#[event]
pub struct GameResolvedEvent {
    pub game: Pubkey,
    pub winner: Pubkey,
    pub landed_side: u8,
    pub prize_amount: u64,
    pub commission_amount: u64,
    pub server_seed: String,
}

#[event]
pub struct GameCancelledEvent {
    pub game: Pubkey,
    pub refund: u64,
}

#[event]
pub struct GameDefaultedEvent {
    pub game: Pubkey,
    pub refund: u64,
}

#[event]
pub struct WithdrawEvent {
    pub admin: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}
