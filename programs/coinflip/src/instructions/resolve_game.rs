use anchor_lang::prelude::*;

use crate::{
    CASINO_SEED, Casino, CasinoError, Game, GameResolvedEvent, GameState, MAX_SERVER_SEED_LENGTH, VAULT_SEED, flip, is_seed_committed
};

/// Arguments for resolving a joined game.
/// - server_seed: The seed whose hash was committed to when the game was created.
#[derive(AnchorDeserialize, AnchorSerialize, Clone, Default)]
pub struct ResolveGameArgs {
    pub server_seed: String,
}

#[derive(Accounts)]
pub struct ResolveGameAccounts<'info> {
    #[account(
        mut,
        close = creator
    )]
    pub game: Account<'info, Game>,

    #[account(
        mut,
        seeds = [CASINO_SEED.as_bytes()],
        bump
    )]
    pub casino: Account<'info, Casino>,

    /// CHECK: This is the vault account the pot is paid out of.
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        bump = casino.get_vault_bump()
    )]
    pub vault: UncheckedAccount<'info>,

    /// CHECK: Checked against the outcome of the flip in the handler.
    #[account(
        mut
    )]
    pub winner: UncheckedAccount<'info>,

    /// CHECK: Receives the game's rent, it may also be the winner.
    #[account(
        mut,
        address = game.creator @ CasinoError::InvalidCreator
    )]
    pub creator: UncheckedAccount<'info>,

    pub admin: Signer<'info>,
}

#[inline(always)]
fn checks(
    ctx: &Context<ResolveGameAccounts>,
    args: &ResolveGameArgs,
)->Result<()>{

    require!(
        ctx.accounts.casino.is_admin(ctx.accounts.admin.key),
        CasinoError::InvalidAdmin
    );

    require!(
        ctx.accounts.game.is_joined(),
        CasinoError::InvalidGameState
    );

    require_gte!(
        MAX_SERVER_SEED_LENGTH,
        args.server_seed.len(),
        CasinoError::InvalidServerSeed
    );

    // The revealed seed has to be the one committed to before anyone joined
    require!(
        is_seed_committed(&args.server_seed, &ctx.accounts.game.server_seed_hash),
        CasinoError::InvalidServerSeed
    );

    Ok(())
}

pub fn resolve_game_handler(
    ctx: Context<ResolveGameAccounts>,
    args: ResolveGameArgs,
) -> Result<()> {

    checks(&ctx, &args)?;

    let game = &mut ctx.accounts.game;

    let block_hash = game.block_hash.as_deref().ok_or(CasinoError::InvalidGameState)?;

    let landed_side = flip(&args.server_seed, block_hash);

    let winner = game.winner_for(landed_side).ok_or(CasinoError::InvalidGameState)?;

    require_keys_eq!(
        ctx.accounts.winner.key(),
        winner,
        CasinoError::InvalidWinner
    );

    let pot = game.pot()?;

    let (payout, commission) = ctx.accounts.casino.split_pot(pot)?;

    game.server_seed = Some(args.server_seed.clone());
    game.winner = Some(winner);
    game.state = GameState::Completed;

    ctx.accounts.casino.release_escrow(pot)?;

    // Pay the winner, the commission stays in the vault
    **ctx.accounts.vault.try_borrow_mut_lamports()? -= payout;
    **ctx.accounts.winner.try_borrow_mut_lamports()? += payout;

    emit!(
        GameResolvedEvent{
            game:ctx.accounts.game.key(),
            winner,
            landed_side,
            prize_amount:payout,
            commission_amount:commission,
            server_seed:args.server_seed,
        }
    );

    Ok(())
}
