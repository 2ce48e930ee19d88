// Initialize Pool Instruction
//
// Creates the singleton protection pool with its governance parameters
// and the token vault that will custody member deposits.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    pub accepted_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = admin,
        space = ANCHOR_DISCRIMINATOR + Pool::INIT_SPACE,
        seeds = [POOL],
        bump
    )]
    pub pool: Account<'info, Pool>,

    /// CHECK: PDA signer for vault transfers
    #[account(
        seeds = [POOL_AUTHORITY, pool.key().as_ref()],
        bump
    )]
    pub pool_authority: UncheckedAccount<'info>,

    /// Vault holding all pooled deposits.
    #[account(
        init,
        payer = admin,
        associated_token::mint = accepted_mint,
        associated_token::authority = pool_authority,
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializePool<'info> {
    pub fn initialize_pool(
        &mut self,
        max_claim_pct: u16,
        vote_window_secs: i64,
        quorum: u8,
        approval_ratio: u16,
        bumps: &InitializePoolBumps,
    ) -> Result<()> {
        Pool::validate_config(max_claim_pct, vote_window_secs, quorum, approval_ratio)?;

        self.pool.set_inner(Pool {
            admin: self.admin.key(),
            accepted_mint: self.accepted_mint.key(),
            total_deposits: 0,
            total_paid_out: 0,
            claim_count: 0,
            member_count: 0,
            max_claim_pct,
            vote_window_secs,
            quorum,
            approval_ratio,
            bump: bumps.pool,
            authority_bump: bumps.pool_authority,
        });

        msg!("Pool initialized by admin: {}", self.admin.key());
        msg!(
            "Max claim: {} bps, vote window: {}s, quorum: {}, approval ratio: {} bps",
            max_claim_pct,
            vote_window_secs,
            quorum,
            approval_ratio
        );

        Ok(())
    }
}
