// Join Pool Instruction
//
// Creates the caller's member record with an empty deposit. A second join
// from the same wallet fails with AlreadyMember.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct JoinPool<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [POOL],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        init_if_needed,
        payer = user,
        space = ANCHOR_DISCRIMINATOR + Member::INIT_SPACE,
        seeds = [MEMBER, pool.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub member: Account<'info, Member>,

    pub system_program: Program<'info, System>,
}

impl<'info> JoinPool<'info> {
    pub fn join_pool(&mut self, bumps: &JoinPoolBumps) -> Result<()> {
        // A freshly created account deserializes to defaults; an owner
        // already set means this wallet joined before.
        require!(
            self.member.owner == Pubkey::default(),
            PoolError::AlreadyMember
        );

        self.member.set_inner(Member {
            pool: self.pool.key(),
            owner: self.user.key(),
            deposited_amount: 0,
            claim_limit: 0,
            last_claim_ts: 0,
            active: true,
            bump: bumps.member,
        });

        self.pool.record_join()?;

        msg!("Member {} joined pool", self.user.key());

        Ok(())
    }
}
