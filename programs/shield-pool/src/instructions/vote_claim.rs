// Vote Claim Instruction
//
// Records a yes/no vote from an active member while the claim's vote
// window is open. Each member may vote at most once per claim.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct VoteClaim<'info> {
    pub voter: Signer<'info>,

    #[account(
        seeds = [POOL],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    // Voting rights come from membership in the claim's pool.
    #[account(
        seeds = [MEMBER, pool.key().as_ref(), voter.key().as_ref()],
        bump = member.bump,
        constraint = member.owner == voter.key() @ PoolError::Unauthorized
    )]
    pub member: Account<'info, Member>,

    #[account(
        mut,
        seeds = [CLAIM, pool.key().as_ref(), claim.claim_id.to_le_bytes().as_ref()],
        bump = claim.bump
    )]
    pub claim: Account<'info, Claim>,
}

impl<'info> VoteClaim<'info> {
    pub fn vote_claim(&mut self, vote_yes: bool) -> Result<()> {
        self.member.assert_active()?;

        let now = Clock::get()?.unix_timestamp;
        self.claim
            .assert_vote_window_open(now, self.pool.vote_window_secs)?;

        self.claim.register_vote(self.voter.key(), vote_yes)?;

        msg!(
            "Member {} voted {} on claim {}",
            self.voter.key(),
            if vote_yes { "YES" } else { "NO" },
            self.claim.claim_id
        );

        Ok(())
    }
}
