use anchor_lang::prelude::*;

#[error_code]
pub enum CasinoError{
    #[msg("Bet amount too small")]
    BetTooSmall,
    #[msg("The side must be 0 (heads) or 1 (tails)")]
    InvalidSide,
    #[msg("The server seed hash must be 64 hex characters")]
    InvalidHash,
    #[msg("The game is not in the right state for this action")]
    InvalidGameState,
    #[msg("Invalid admin")]
    InvalidAdmin,
    #[msg("The provided winner does not match the outcome of the flip")]
    InvalidWinner,
    #[msg("Commission fee too high")]
    CommissionTooHigh,
    #[msg("The creator cannot join their own game")]
    CannotJoinOwnGame,
    #[msg("The block hash is empty or too long")]
    InvalidBlockHash,
    #[msg("The server seed does not match the committed hash")]
    InvalidServerSeed,
    #[msg("The casino is paused")]
    CasinoPaused,
    #[msg("The signer is not the creator of this game")]
    InvalidCreator,
    #[msg("The vault does not hold enough free funds")]
    InsufficientVaultBalance,
    #[msg("The signer is not a player of this game")]
    InvalidPlayer,
    #[msg("The game can not be defaulted yet")]
    TooSoonToDefault,
}
