use anchor_lang::prelude::*;

use crate::{CASINO_SEED, Casino, CasinoError, Game, GameDefaultedEvent, VAULT_SEED};


#[derive(Accounts)]
pub struct DefaultGameAccounts<'info>{
    /// Either player of the game
    pub player:Signer<'info>,

    #[account(
        mut,
        close = creator
    )]
    pub game:Account<'info, Game>,

    /// CHECK: Gets their stake and the game's rent back.
    #[account(
        mut,
        address = game.creator @ CasinoError::InvalidCreator
    )]
    pub creator:UncheckedAccount<'info>,

    /// CHECK: Gets their stake back, checked against the game in `checks`.
    #[account(
        mut
    )]
    pub joiner:UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [CASINO_SEED.as_bytes()],
        bump
    )]
    pub casino:Account<'info, Casino>,

    /// CHECK: This is the vault both stakes are refunded from.
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        bump = casino.get_vault_bump()
    )]
    pub vault:UncheckedAccount<'info>,
}

#[inline(always)]
fn checks(ctx:&Context<DefaultGameAccounts>)->Result<()>{

    let game = &ctx.accounts.game;

    require!(
        game.is_player(ctx.accounts.player.key),
        CasinoError::InvalidPlayer
    );

    require!(
        game.is_joined(),
        CasinoError::InvalidGameState
    );

    require!(
        game.joiner.as_ref() == Some(ctx.accounts.joiner.key),
        CasinoError::InvalidPlayer
    );

    let now = Clock::get()?.unix_timestamp;

    require!(
        game.can_default(now),
        CasinoError::TooSoonToDefault
    );

    Ok(())
}


pub fn default_game_handler(ctx:Context<DefaultGameAccounts>)->Result<()>{

    checks(&ctx)?;

    let refund = ctx.accounts.game.bet_amount;

    ctx.accounts.casino.release_escrow(ctx.accounts.game.pot()?)?;

    // Nobody revealed the seed, both stakes go back.
    **ctx.accounts.vault.try_borrow_mut_lamports()? -= ctx.accounts.game.pot()?;
    **ctx.accounts.creator.try_borrow_mut_lamports()? += refund;
    **ctx.accounts.joiner.try_borrow_mut_lamports()? += refund;

    emit!(
        GameDefaultedEvent{
            game:ctx.accounts.game.key(),
            refund
        }
    );
    Ok(())
}
