use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod instructions;
pub use instructions::*;

pub mod state;
pub use state::*;

pub mod utils;
pub use utils::*;

#[program]
pub mod coinflip {
    use super::*;

    /// Creates the casino configuration and the vault that escrows every stake.
    pub fn initialize_casino(
        ctx: Context<InitializeCasinoAccounts>,
        args: InitializeCasinoArgs
    ) -> Result<()> {
        initialize_casino_handler(ctx, args)
    }

    /// Updates casino configuration values (admin only).
    pub fn update_casino(
        ctx: Context<UpdateCasinoAccounts>,
        args: UpdateCasinoArgs,
    ) -> Result<()> {
        update_casino_handler(ctx, args)
    }

    /// Opens a new coin flip, the creator's stake is moved into the vault and
    /// the hash of the server seed is committed to.
    pub fn create_game(
        ctx: Context<CreateGameAccounts>,
        args: CreateGameArgs,
    ) -> Result<()> {
        create_game_handler(ctx, args)
    }

    /// Takes the other side of an open flip by matching the creator's stake.
    pub fn join_game(
        ctx: Context<JoinGameAccounts>,
        args: JoinGameArgs,
    ) -> Result<()> {
        join_game_handler(ctx, args)
    }

    /// Reveals the server seed, flips the coin and pays the winner (admin only).
    pub fn resolve_game(
        ctx: Context<ResolveGameAccounts>,
        args: ResolveGameArgs,
    ) -> Result<()> {
        resolve_game_handler(ctx, args)
    }

    /// Lets the creator take back their stake while nobody has joined.
    pub fn cancel_game(
        ctx: Context<CancelGameAccounts>,
    ) -> Result<()> {
        cancel_game_handler(ctx)
    }

    /// Refunds both stakes of a joined game whose seed was not revealed in time,
    /// either player can call it.
    pub fn default_game(
        ctx: Context<DefaultGameAccounts>,
    ) -> Result<()> {
        default_game_handler(ctx)
    }

    /// Withdraws accumulated commission from the vault (admin-only).
    /// Stakes of unresolved games can never be withdrawn.
    pub fn withdraw(
        ctx: Context<WithdrawAccounts>,
        args: WithdrawArgs,
    ) -> Result<()> {
        withdraw_handler(ctx, args)
    }
}
