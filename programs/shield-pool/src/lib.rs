// Shield Pool - peer-funded mutual protection pool
//
// Members deposit SPL tokens into a shared vault and may claim against
// their own deposit up to a configured limit. Claims are decided by a
// member vote instead of a central underwriter.
//
// Instructions:
// - initialize_pool: create the pool, its config and the deposit vault
// - join_pool: register a member record
// - deposit / withdraw: move funds between member and vault
// - submit_claim: open a claim against the caller's claim limit
// - vote_claim: cast a yes/no vote while the window is open
// - finalize_claim: settle a claim after the window, paying out on approval

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;
use state::ClaimType;

declare_id!("5Gsc7gVg81Po9CyY9FZ1kc3wPnwGtrAcsPn7mvHkahCq");

#[program]
pub mod shield_pool {
    use super::*;

    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        max_claim_pct: u16,
        vote_window_secs: i64,
        quorum: u8,
        approval_ratio: u16,
    ) -> Result<()> {
        ctx.accounts.initialize_pool(
            max_claim_pct,
            vote_window_secs,
            quorum,
            approval_ratio,
            &ctx.bumps,
        )
    }

    pub fn join_pool(ctx: Context<JoinPool>) -> Result<()> {
        ctx.accounts.join_pool(&ctx.bumps)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        ctx.accounts.deposit(amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw(amount)
    }

    pub fn submit_claim(
        ctx: Context<SubmitClaim>,
        claim_type: ClaimType,
        requested_amount: u64,
        evidence_uri: String,
    ) -> Result<()> {
        ctx.accounts
            .submit_claim(claim_type, requested_amount, evidence_uri, &ctx.bumps)
    }

    pub fn vote_claim(ctx: Context<VoteClaim>, vote_yes: bool) -> Result<()> {
        ctx.accounts.vote_claim(vote_yes)
    }

    pub fn finalize_claim(ctx: Context<FinalizeClaim>) -> Result<()> {
        ctx.accounts.finalize_claim()
    }
}
