use anchor_lang::prelude::*;
use crate::{CASINO_SEED, Casino, CasinoError, VAULT_SEED, WithdrawEvent};

#[derive(AnchorDeserialize, AnchorSerialize, Clone)]
pub struct WithdrawArgs {
    pub amount: u64,
}

#[derive(Accounts)]
pub struct WithdrawAccounts<'info> {
    #[account(
        seeds = [CASINO_SEED.as_bytes()],
        bump
    )]
    pub casino: Account<'info, Casino>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        bump = casino.get_vault_bump()
    )]
    /// CHECK: Holds the commission and every open stake, checked by seeds
    pub vault: UncheckedAccount<'info>,

    #[account(
        mut
    )]
    /// CHECK: Any account the admin picks, only receives lamports
    pub recipient: UncheckedAccount<'info>,

    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}


#[inline(always)]
fn checks(
    ctx: &Context<WithdrawAccounts>,
    args: &WithdrawArgs,
) -> Result<()> {
    require!(
        ctx.accounts.casino.is_admin(ctx.accounts.admin.key),
        CasinoError::InvalidAdmin
    );

    // Only the commission is free, stakes and the rent exemption stay put
    let rent = Rent::get()?.minimum_balance(0);

    let available = ctx.accounts.vault.lamports().
        saturating_sub(rent).
        saturating_sub(ctx.accounts.casino.escrowed);

    require_gte!(
        available,
        args.amount,
        CasinoError::InsufficientVaultBalance
    );

    Ok(())
}

pub fn withdraw_handler(
    ctx: Context<WithdrawAccounts>,
    args: WithdrawArgs,
) -> Result<()> {
    checks(&ctx, &args)?;

    **ctx.accounts.vault.to_account_info().try_borrow_mut_lamports()? -= args.amount;
    **ctx.accounts.recipient.to_account_info().try_borrow_mut_lamports()? += args.amount;

    emit!(
        WithdrawEvent{
            admin:ctx.accounts.admin.key(),
            recipient:ctx.accounts.recipient.key(),
            amount:args.amount
        }
    );

    Ok(())
}
