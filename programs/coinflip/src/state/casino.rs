use anchor_lang::prelude::*;

use crate::{MAX_COMMISSION_FEE, PERCENT};

#[account]
#[derive(InitSpace, Debug)]
pub struct Casino {
    /// - Admin: They resolve games, change the configuration and withdraw
    /// the commission collected by the vault
    pub admin: Pubkey,
    pub commission_fee: u8, // In percent of the pot
    /// Number of games ever created, also the index of the next game
    pub total_games: u64,
    pub total_volume: u64,
    /// Lamports in the vault that still belong to players
    pub escrowed: u64,
    pub status: CasinoStatus,
    pub vault_bump:u8,
}

impl Casino {

    pub fn new(
        admin: Pubkey,
        commission_fee: u8,
        vault_bump:u8,
    ) -> Self {
        Self {
            admin,
            commission_fee,
            total_games: 0,
            total_volume: 0,
            escrowed: 0,
            status: CasinoStatus::Open,
            vault_bump,
        }
    }

    pub fn is_admin(&self, admin:&Pubkey)->bool{
        self.admin.eq(admin)
    }

    pub fn is_open(&self) -> bool{
        self.status.eq(&CasinoStatus::Open)
    }

    pub fn get_vault_bump(&self) -> u8 {
        self.vault_bump
    }

    pub fn is_valid_commission_fee(commission_fee:u8) -> bool{
        commission_fee <= MAX_COMMISSION_FEE
    }

    /// Splits a pot into the winner's payout and the commission kept by the
    /// vault, returned as (payout, commission).
    pub fn split_pot(&self, pot:u64) -> Result<(u64, u64)>{
        let commission = pot.
            checked_mul(u64::from(self.commission_fee)).
            ok_or(ProgramError::ArithmeticOverflow)?/PERCENT;

        let payout = pot.checked_sub(commission).ok_or(ProgramError::ArithmeticOverflow)?;

        Ok((payout, commission))
    }

    pub fn record_stake(&mut self, amount:u64) -> Result<()>{
        self.total_volume = self.total_volume.checked_add(amount).ok_or(ProgramError::ArithmeticOverflow)?;
        self.escrowed = self.escrowed.checked_add(amount).ok_or(ProgramError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn release_escrow(&mut self, amount:u64) -> Result<()>{
        self.escrowed = self.escrowed.checked_sub(amount).ok_or(ProgramError::ArithmeticOverflow)?;
        Ok(())
    }
}

#[derive(InitSpace, Clone, Copy, AnchorDeserialize, AnchorSerialize, PartialEq, Eq, Debug)]
pub enum CasinoStatus{
    Open,
    Paused
}

#[derive(AnchorDeserialize, AnchorSerialize, Clone, Debug)]
pub enum CasinoUpdate {
    Admin(Pubkey),
    CommissionFee(u8),
    Status(CasinoStatus)
}
