// Deposit Instruction
//
// Moves tokens from the member into the pool vault and recomputes the
// member's claim limit from their new deposit.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [MEMBER, pool.key().as_ref(), user.key().as_ref()],
        bump = member.bump,
        constraint = member.owner == user.key() @ PoolError::Unauthorized
    )]
    pub member: Account<'info, Member>,

    // Source of the deposit, owned by the member.
    #[account(
        mut,
        associated_token::mint = pool.accepted_mint,
        associated_token::authority = user
    )]
    pub member_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = pool.accepted_mint,
        associated_token::authority = pool_authority
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    /// CHECK: PDA signer for vault transfers
    #[account(
        seeds = [POOL_AUTHORITY, pool.key().as_ref()],
        bump = pool.authority_bump
    )]
    pub pool_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Deposit<'info> {
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        self.member.assert_can_deposit(amount)?;

        // Token program fails closed on insufficient balance; that error
        // surfaces to the caller unchanged.
        let transfer_ctx = CpiContext::new(
            self.token_program.to_account_info(),
            Transfer {
                from: self.member_token_account.to_account_info(),
                to: self.pool_vault.to_account_info(),
                authority: self.user.to_account_info(),
            },
        );
        token::transfer(transfer_ctx, amount)?;

        self.member.credit_deposit(amount, self.pool.max_claim_pct)?;
        self.pool.record_deposit(amount)?;

        msg!(
            "Member {} deposited {} tokens, new claim limit: {}",
            self.user.key(),
            amount,
            self.member.claim_limit
        );

        Ok(())
    }
}
