// Withdraw Instruction
//
// Returns part of a member's deposit from the pool vault and recomputes
// their claim limit. Only the deposit owner can withdraw.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct Withdraw<'info> {
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

    // Destination for the withdrawal.
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

impl<'info> Withdraw<'info> {
    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        self.member.assert_can_withdraw(amount)?;
        require!(
            self.pool_vault.amount >= amount,
            PoolError::InsufficientPoolFunds
        );

        let pool_key = self.pool.key();
        let authority_seeds = &[
            POOL_AUTHORITY,
            pool_key.as_ref(),
            &[self.pool.authority_bump],
        ];
        let signer_seeds = &[&authority_seeds[..]];

        let transfer_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            Transfer {
                from: self.pool_vault.to_account_info(),
                to: self.member_token_account.to_account_info(),
                authority: self.pool_authority.to_account_info(),
            },
            signer_seeds,
        );
        token::transfer(transfer_ctx, amount)?;

        self.member.debit_withdrawal(amount, self.pool.max_claim_pct)?;
        self.pool.record_withdraw(amount)?;

        msg!(
            "Member {} withdrew {} tokens, new claim limit: {}",
            self.user.key(),
            amount,
            self.member.claim_limit
        );

        Ok(())
    }
}
