use anchor_lang::prelude::*;
use crate::{CASINO_SEED, Casino, CasinoError, InitializeCasinoEvent, VAULT_SEED};


/// Arguments for initializing the casino.
/// - commission_fee: Share of every pot kept by the vault (in percent, at most 10),
/// it can be changed later.
#[derive(AnchorDeserialize, AnchorSerialize, Clone)]
pub struct InitializeCasinoArgs {
    pub commission_fee: u8,
}

#[derive(Accounts)]
#[instruction(args: InitializeCasinoArgs)]
pub struct InitializeCasinoAccounts<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Casino::INIT_SPACE,
        seeds = [CASINO_SEED.as_bytes()],
        bump
    )]
    pub casino: Account<'info, Casino>,

    #[account(
        mut
    )]
    pub admin: Signer<'info>,

    /// CHECK: This is the vault that escrows every stake, it holds no data.
    #[account(
        init,
        space = 0,
        payer = admin,
        seeds = [VAULT_SEED.as_bytes()],
        bump
    )]
    pub vault: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

#[inline(always)]
fn checks(
    args: &InitializeCasinoArgs
)->Result<()>{
    require!(
        Casino::is_valid_commission_fee(args.commission_fee),
        CasinoError::CommissionTooHigh
    );

    Ok(())
}


pub fn initialize_casino_handler(
    ctx: Context<InitializeCasinoAccounts>,
    args: InitializeCasinoArgs
) -> Result<()> {

    checks(&args)?;

    let casino = &mut ctx.accounts.casino;

    casino.set_inner(Casino::new(
        ctx.accounts.admin.key(),
        args.commission_fee,
        ctx.bumps.vault,
    ));

    emit!(
        InitializeCasinoEvent{
            admin:ctx.accounts.admin.key(),
            commission_fee:args.commission_fee
        }
    );

    Ok(())
}
