use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::*;

/// Per-member participation record, one PDA per (pool, owner).
#[account]
#[derive(InitSpace)]
pub struct Member {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub deposited_amount: u64,
    /// Maximum single-claim amount, derived from the deposit.
    pub claim_limit: u64,
    /// Set when one of this member's claims is finalized and paid.
    pub last_claim_ts: i64,
    pub active: bool,
    pub bump: u8,
}

impl Member {
    pub fn assert_active(&self) -> Result<()> {
        require!(self.active, PoolError::MemberInactive);
        Ok(())
    }

    /// Preconditions shared by deposits.
    pub fn assert_can_deposit(&self, amount: u64) -> Result<()> {
        self.assert_active()?;
        require!(amount > 0, PoolError::InvalidAmount);
        Ok(())
    }

    /// Preconditions shared by withdrawals.
    pub fn assert_can_withdraw(&self, amount: u64) -> Result<()> {
        self.assert_active()?;
        require!(amount > 0, PoolError::InvalidAmount);
        require!(
            amount <= self.deposited_amount,
            PoolError::InsufficientBalance
        );
        Ok(())
    }

    pub fn credit_deposit(&mut self, amount: u64, max_claim_pct: u16) -> Result<()> {
        self.deposited_amount = self
            .deposited_amount
            .checked_add(amount)
            .ok_or(PoolError::MathError)?;
        self.recompute_claim_limit(max_claim_pct)
    }

    pub fn debit_withdrawal(&mut self, amount: u64, max_claim_pct: u16) -> Result<()> {
        require!(
            amount <= self.deposited_amount,
            PoolError::InsufficientBalance
        );
        self.deposited_amount = self
            .deposited_amount
            .checked_sub(amount)
            .ok_or(PoolError::MathError)?;
        self.recompute_claim_limit(max_claim_pct)
    }

    /// `claim_limit = floor(deposited_amount * max_claim_pct / 10000)`.
    ///
    /// Always recomputed from the full deposit rather than adjusted by deltas,
    /// so repeated truncation cannot drift the limit away from the invariant.
    pub fn recompute_claim_limit(&mut self, max_claim_pct: u16) -> Result<()> {
        self.claim_limit = (self.deposited_amount as u128)
            .checked_mul(max_claim_pct as u128)
            .ok_or(PoolError::MathError)?
            .checked_div(BPS_DENOMINATOR as u128)
            .ok_or(PoolError::MathError)? as u64;
        Ok(())
    }

    /// Preconditions shared by claim submission.
    pub fn assert_can_claim(&self, requested_amount: u64) -> Result<()> {
        self.assert_active()?;
        require!(requested_amount > 0, PoolError::InvalidAmount);
        require!(
            requested_amount <= self.claim_limit,
            PoolError::ClaimLimitExceeded
        );
        Ok(())
    }
}
