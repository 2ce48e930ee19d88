// Finalize Claim Instruction
//
// Settles a pending claim once the vote window has elapsed. Quorum
// shortfall or too few yes-votes rejects; otherwise the claim is approved
// and paid out from the vault in the same instruction. Any active member
// may trigger finalization.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct FinalizeClaim<'info> {
    pub caller: Signer<'info>,

    // Finalization is open to any active member, not just the claimant.
    #[account(
        seeds = [MEMBER, pool.key().as_ref(), caller.key().as_ref()],
        bump = caller_member.bump,
        constraint = caller_member.owner == caller.key() @ PoolError::Unauthorized
    )]
    pub caller_member: Account<'info, Member>,

    #[account(
        mut,
        seeds = [POOL],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [CLAIM, pool.key().as_ref(), claim.claim_id.to_le_bytes().as_ref()],
        bump = claim.bump
    )]
    pub claim: Account<'info, Claim>,

    /// CHECK: Claimant wallet recorded on the claim
    #[account(
        constraint = claimant.key() == claim.claimant @ PoolError::Unauthorized
    )]
    pub claimant: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [MEMBER, pool.key().as_ref(), claim.claimant.as_ref()],
        bump = claimant_member.bump
    )]
    pub claimant_member: Account<'info, Member>,

    #[account(
        mut,
        associated_token::mint = pool.accepted_mint,
        associated_token::authority = pool_authority
    )]
    pub pool_vault: Account<'info, TokenAccount>,

    // Payout destination, owned by the claimant.
    #[account(
        mut,
        associated_token::mint = pool.accepted_mint,
        associated_token::authority = claimant
    )]
    pub claimant_token_account: Account<'info, TokenAccount>,

    /// CHECK: PDA signer for vault transfers
    #[account(
        seeds = [POOL_AUTHORITY, pool.key().as_ref()],
        bump = pool.authority_bump
    )]
    pub pool_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

impl<'info> FinalizeClaim<'info> {
    pub fn finalize_claim(&mut self) -> Result<()> {
        self.caller_member.assert_active()?;
        require!(
            self.claim.status == ClaimStatus::Pending,
            PoolError::ClaimNotPending
        );

        // Hard gate: no finalization before the window elapses, whatever
        // the tally says.
        let now = Clock::get()?.unix_timestamp;
        self.claim
            .assert_vote_window_elapsed(now, self.pool.vote_window_secs)?;

        match self.claim.verdict(self.pool.quorum, self.pool.approval_ratio)? {
            Verdict::Approved => {
                self.claim.status = ClaimStatus::Approved;
                self.pay_out()?;
                self.claim.status = ClaimStatus::Paid;
                self.pool.record_claim_paid(self.claim.requested_amount)?;
                self.claimant_member.last_claim_ts = now;

                msg!(
                    "Claim {} APPROVED and PAID {} tokens to {}",
                    self.claim.claim_id,
                    self.claim.requested_amount,
                    self.claim.claimant
                );
            }
            Verdict::Rejected => {
                self.claim.status = ClaimStatus::Rejected;

                msg!(
                    "Claim {} REJECTED ({} yes / {} no)",
                    self.claim.claim_id,
                    self.claim.yes_votes,
                    self.claim.no_votes
                );
            }
        }

        Ok(())
    }

    fn pay_out(&self) -> Result<()> {
        // Should never trip while the deposit-sum invariant holds, but a
        // drained vault must surface as a typed error rather than a
        // silent partial settle.
        require!(
            self.pool_vault.amount >= self.claim.requested_amount,
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
                to: self.claimant_token_account.to_account_info(),
                authority: self.pool_authority.to_account_info(),
            },
            signer_seeds,
        );
        token::transfer(transfer_ctx, self.claim.requested_amount)
    }
}
