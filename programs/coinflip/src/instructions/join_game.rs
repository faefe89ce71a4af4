use anchor_lang::{
    prelude::*,
    system_program::{
        Transfer,
        transfer
    }
};

use crate::{
    CASINO_SEED, Casino, CasinoError, Game, GameJoinedEvent, GameState, MAX_BLOCK_HASH_LENGTH, VAULT_SEED
};

/// Arguments for joining a game.
/// - block_hash: A recent block hash picked by the joiner, it is mixed into the
///   flip together with the server seed.
#[derive(AnchorDeserialize, AnchorSerialize, Clone, Default)]
pub struct JoinGameArgs {
    pub block_hash: String,
}

#[derive(Accounts)]
pub struct JoinGameAccounts<'info> {
    #[account(
        mut
    )]
    pub game: Account<'info, Game>,

    #[account(
        mut,
        seeds = [CASINO_SEED.as_bytes()],
        bump
    )]
    pub casino: Account<'info, Casino>,

    /// CHECK: This is the vault account where the stake is escrowed.
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        bump = casino.get_vault_bump()
    )]
    pub vault: UncheckedAccount<'info>,

    #[account(
        mut
    )]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[inline(always)]
fn checks(
    ctx: &Context<JoinGameAccounts>,
    args: &JoinGameArgs,
)->Result<()>{

    require!(
        ctx.accounts.game.is_open(),
        CasinoError::InvalidGameState
    );

    require!(
        !ctx.accounts.game.is_created_by(ctx.accounts.player.key),
        CasinoError::CannotJoinOwnGame
    );

    require!(
        !args.block_hash.is_empty() && args.block_hash.len() <= MAX_BLOCK_HASH_LENGTH,
        CasinoError::InvalidBlockHash
    );

    Ok(())
}

pub fn join_game_handler(
    ctx: Context<JoinGameAccounts>,
    args: JoinGameArgs,
) -> Result<()> {

    checks(&ctx, &args)?;

    let now = Clock::get()?.unix_timestamp;

    let game = &mut ctx.accounts.game;

    let bet_amount = game.bet_amount;

    game.joiner = Some(ctx.accounts.player.key());
    game.joined_at = now;
    game.block_hash = Some(args.block_hash.clone());
    game.state = GameState::Joined;

    ctx.accounts.casino.record_stake(bet_amount)?;

    // The joiner matches the creator's stake
    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer{
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.vault.to_account_info()
            }
        ),
        bet_amount
    )?;

    emit!(
        GameJoinedEvent{
            game:ctx.accounts.game.key(),
            joiner:ctx.accounts.player.key(),
            block_hash:args.block_hash,
        }
    );

    Ok(())
}
