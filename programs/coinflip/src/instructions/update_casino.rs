use anchor_lang::prelude::*;

use crate::{CASINO_SEED, Casino, CasinoError, CasinoUpdate, UpdateCasinoEvent};


#[derive(AnchorDeserialize, AnchorSerialize, Clone)]
pub struct UpdateCasinoArgs {
    pub update: CasinoUpdate,
}

#[derive(Accounts)]
#[instruction(args: UpdateCasinoArgs)]
pub struct UpdateCasinoAccounts<'info> {
    #[account(
        mut,
        seeds = [CASINO_SEED.as_bytes()],
        bump
    )]
    pub casino: Account<'info, Casino>,

    /// Only the admin can update the casino.
    pub admin: Signer<'info>,
}

#[inline(always)]
fn checks(
    ctx: &Context<UpdateCasinoAccounts>,
    args: &UpdateCasinoArgs,
)->Result<()>{
    require!(
        ctx.accounts.casino.is_admin(ctx.accounts.admin.key),
        CasinoError::InvalidAdmin
    );

    if let CasinoUpdate::CommissionFee(commission_fee) = args.update {
        require!(
            Casino::is_valid_commission_fee(commission_fee),
            CasinoError::CommissionTooHigh
        );
    }

    Ok(())
}

pub fn update_casino_handler(
    ctx: Context<UpdateCasinoAccounts>,
    args: UpdateCasinoArgs,
) -> Result<()> {

    checks(&ctx, &args)?;

    let casino = &mut ctx.accounts.casino;

    match args.update {
        CasinoUpdate::Admin(new_admin) => {
            casino.admin = new_admin;
        }
        CasinoUpdate::CommissionFee(new_commission_fee) => {
            casino.commission_fee = new_commission_fee;
        }
        CasinoUpdate::Status(new_status) => {
            casino.status = new_status;
        }
    }

    emit!(
        UpdateCasinoEvent{
            admin_at_time_of_update:ctx.accounts.admin.key(),
            update: args.update
        }
    );

    Ok(())
}
