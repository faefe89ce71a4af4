use anchor_lang::prelude::*;

use crate::{CASINO_SEED, Casino, CasinoError, Game, GameCancelledEvent, GameState, VAULT_SEED};


#[derive(Accounts)]
pub struct CancelGameAccounts<'info>{
    #[account(
        mut
    )]
    pub creator:Signer<'info>,

    // The creator paid the game's rent, it goes back to them with the stake
    #[account(
        mut,
        close = creator
    )]
    pub game:Account<'info, Game>,

    #[account(
        mut,
        seeds = [CASINO_SEED.as_bytes()],
        bump
    )]
    pub casino:Account<'info, Casino>,

    /// CHECK: This is the vault account the stake is refunded from.
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        bump = casino.get_vault_bump()
    )]
    pub vault:UncheckedAccount<'info>,
}

#[inline(always)]
fn checks(ctx:&Context<CancelGameAccounts>)->Result<()>{

    require!(
        ctx.accounts.game.is_created_by(ctx.accounts.creator.key),
        CasinoError::InvalidCreator
    );

    // Once someone joined, the game can only end through resolution
    require!(
        ctx.accounts.game.is_open(),
        CasinoError::InvalidGameState
    );

    Ok(())
}


pub fn cancel_game_handler(ctx:Context<CancelGameAccounts>)->Result<()>{

    checks(&ctx)?;

    let refund = ctx.accounts.game.bet_amount;

    ctx.accounts.game.state = GameState::Cancelled;

    ctx.accounts.casino.release_escrow(refund)?;

    // Transfer the creator's stake back.
    **ctx.accounts.vault.try_borrow_mut_lamports()? -= refund;
    **ctx.accounts.creator.try_borrow_mut_lamports()? += refund;

    emit!(
        GameCancelledEvent{
            game:ctx.accounts.game.key(),
            refund
        }
    );
    Ok(())
}
