use anchor_lang::{
    prelude::*,
    system_program::{
        Transfer,
        transfer
    }
};

use crate::{
    CASINO_SEED, Casino, CasinoError, GAME_SEED, Game, GameCreatedEvent, MIN_BET, VAULT_SEED, is_valid_seed_hash
};

/// Arguments for creating a new coin flip.
/// - bet_amount: The creator's stake in lamports, the joiner has to match it.
/// - side_choice: 0 for heads, 1 for tails.
/// - server_seed_hash: Hex encoded SHA-256 hash of the server seed, the seed is
///   revealed when the game is resolved.
#[derive(AnchorDeserialize, AnchorSerialize, Clone, Default)]
pub struct CreateGameArgs {
    pub bet_amount: u64,
    pub side_choice: u8,
    pub server_seed_hash: String,
}


#[derive(Accounts)]
#[instruction(args: CreateGameArgs)]
pub struct CreateGameAccounts<'info> {
    #[account(
        mut,
        seeds = [CASINO_SEED.as_bytes()],
        bump
    )]
    pub casino: Account<'info, Casino>,

    #[account(
        init,
        payer = player,
        space = 8 + Game::INIT_SPACE,
        // Games are numbered in creation order, so the index is unique as long
        // as the counter only moves forward.
        seeds = [GAME_SEED.as_bytes(), casino.total_games.to_le_bytes().as_ref()],
        bump
    )]
    pub game: Account<'info, Game>,

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
    ctx: &Context<CreateGameAccounts>,
    args: &CreateGameArgs,
)-> Result<()>{

    // Verfiy that the casino is taking new games
    require!(
        ctx.accounts.casino.is_open(),
        CasinoError::CasinoPaused
    );

    require_gte!(
        args.bet_amount,
        MIN_BET,
        CasinoError::BetTooSmall
    );

    require!(
        Game::is_valid_side(args.side_choice),
        CasinoError::InvalidSide
    );

    require!(
        is_valid_seed_hash(&args.server_seed_hash),
        CasinoError::InvalidHash
    );

    Ok(())
}

pub fn create_game_handler(
    ctx: Context<CreateGameAccounts>,
    args: CreateGameArgs,
) -> Result<()> {
    
    checks(&ctx, &args)?;

    let now = Clock::get()?.unix_timestamp;

    let casino = &mut ctx.accounts.casino;

    ctx.accounts.game.set_inner(Game::new(
        casino.total_games,
        ctx.accounts.player.key(),
        args.bet_amount,
        args.side_choice,
        args.server_seed_hash,
        now,
    ));

    casino.total_games = casino.total_games.checked_add(1).ok_or(ProgramError::ArithmeticOverflow)?;
    casino.record_stake(args.bet_amount)?;

    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer{
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.vault.to_account_info()
            }
        ),
        args.bet_amount
    )?;

    emit!(
        GameCreatedEvent{
            game:ctx.accounts.game.key(),
            creator:ctx.accounts.player.key(),
            bet_amount:args.bet_amount,
            creator_side:args.side_choice,
        }
    );

    Ok(())
}
