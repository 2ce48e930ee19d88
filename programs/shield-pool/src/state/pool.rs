use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::*;

/// Singleton pool account holding governance config and running totals.
#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub admin: Pubkey,
    /// SPL token mint accepted for deposits.
    pub accepted_mint: Pubkey,
    /// Sum of all member deposits currently in the vault.
    pub total_deposits: u64,
    /// Sum of requested amounts of all paid claims.
    pub total_paid_out: u64,
    pub claim_count: u64,
    pub member_count: u64,
    /// Maximum claim size as a share of the claimant's deposit, in basis points.
    pub max_claim_pct: u16,
    pub vote_window_secs: i64,
    /// Minimum total votes (yes + no) before a claim can be approved.
    pub quorum: u8,
    /// Minimum yes/total ratio, in basis points.
    pub approval_ratio: u16,
    pub bump: u8,
    pub authority_bump: u8,
}

impl Pool {
    pub fn validate_config(
        max_claim_pct: u16,
        vote_window_secs: i64,
        quorum: u8,
        approval_ratio: u16,
    ) -> Result<()> {
        require!(max_claim_pct <= MAX_BPS, PoolError::InvalidConfig);
        require!(approval_ratio <= MAX_BPS, PoolError::InvalidConfig);
        require!(vote_window_secs > 0, PoolError::InvalidConfig);
        require!(quorum > 0, PoolError::InvalidConfig);
        Ok(())
    }

    pub fn record_join(&mut self) -> Result<()> {
        self.member_count = self
            .member_count
            .checked_add(1)
            .ok_or(PoolError::MathError)?;
        Ok(())
    }

    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        self.total_deposits = self
            .total_deposits
            .checked_add(amount)
            .ok_or(PoolError::MathError)?;
        Ok(())
    }

    pub fn record_withdraw(&mut self, amount: u64) -> Result<()> {
        self.total_deposits = self
            .total_deposits
            .checked_sub(amount)
            .ok_or(PoolError::MathError)?;
        Ok(())
    }

    /// Hands out the next sequential claim id.
    pub fn record_claim_submitted(&mut self) -> Result<u64> {
        let claim_id = self.claim_count;
        self.claim_count = self.claim_count.checked_add(1).ok_or(PoolError::MathError)?;
        Ok(claim_id)
    }

    pub fn record_claim_paid(&mut self, amount: u64) -> Result<()> {
        self.total_paid_out = self
            .total_paid_out
            .checked_add(amount)
            .ok_or(PoolError::MathError)?;
        Ok(())
    }
}
