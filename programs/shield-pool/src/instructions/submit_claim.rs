// Submit Claim Instruction
//
// Opens a new claim against the caller's own deposit, capped by their
// claim limit. The claim id is the pool's running claim count.

use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct SubmitClaim<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        seeds = [MEMBER, pool.key().as_ref(), user.key().as_ref()],
        bump = member.bump,
        constraint = member.owner == user.key() @ PoolError::Unauthorized
    )]
    pub member: Account<'info, Member>,

    #[account(
        init,
        payer = user,
        space = ANCHOR_DISCRIMINATOR + Claim::INIT_SPACE,
        seeds = [CLAIM, pool.key().as_ref(), pool.claim_count.to_le_bytes().as_ref()],
        bump
    )]
    pub claim: Account<'info, Claim>,

    #[account(
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

    pub system_program: Program<'info, System>,
}

impl<'info> SubmitClaim<'info> {
    pub fn submit_claim(
        &mut self,
        claim_type: ClaimType,
        requested_amount: u64,
        evidence_uri: String,
        bumps: &SubmitClaimBumps,
    ) -> Result<()> {
        self.member.assert_can_claim(requested_amount)?;
        Claim::validate_evidence(&evidence_uri)?;

        // A claim the vault could never cover is rejected up front.
        require!(
            self.pool_vault.amount >= requested_amount,
            PoolError::InsufficientPoolFunds
        );

        let now = Clock::get()?.unix_timestamp;
        let claim_id = self.pool.record_claim_submitted()?;

        self.claim.set_inner(Claim {
            pool: self.pool.key(),
            claim_id,
            claimant: self.user.key(),
            claim_type,
            requested_amount,
            evidence_uri,
            created_ts: now,
            status: ClaimStatus::Pending,
            yes_votes: 0,
            no_votes: 0,
            voters: Vec::new(),
            bump: bumps.claim,
        });

        msg!(
            "Claim {} submitted by {} for {} tokens",
            claim_id,
            self.user.key(),
            requested_amount
        );

        Ok(())
    }
}
