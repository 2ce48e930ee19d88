use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Copy, PartialEq, Eq)]
pub enum ClaimType {
    Damage,
    Theft,
    Loss,
}

impl Space for ClaimType {
    const INIT_SPACE: usize = 1;
}

/// Status only ever moves forward: Pending -> Approved -> Paid, or
/// Pending -> Rejected. Approved exists only within the finalize
/// instruction; a claim is never left resting in it.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Copy, PartialEq, Eq)]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
    Paid,
}

impl Space for ClaimStatus {
    const INIT_SPACE: usize = 1;
}

/// Outcome of the decision rule once the vote window has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Approved,
    Rejected,
}

/// One submitted claim with its voting record, one PDA per (pool, claim_id).
#[account]
#[derive(InitSpace)]
pub struct Claim {
    pub pool: Pubkey,
    pub claim_id: u64,
    pub claimant: Pubkey,
    pub claim_type: ClaimType,
    pub requested_amount: u64,
    #[max_len(200)]
    pub evidence_uri: String,
    pub created_ts: i64,
    pub status: ClaimStatus,
    pub yes_votes: u8,
    pub no_votes: u8,
    /// Everyone who has voted, kept to reject double votes.
    #[max_len(32)]
    pub voters: Vec<Pubkey>,
    pub bump: u8,
}

impl Claim {
    pub fn validate_evidence(evidence_uri: &str) -> Result<()> {
        require!(
            !evidence_uri.is_empty() && evidence_uri.len() <= MAX_EVIDENCE_URI_LEN,
            PoolError::EvidenceInvalid
        );
        Ok(())
    }

    /// Last timestamp at which votes are accepted; finalize opens at the
    /// same instant.
    pub fn vote_deadline(&self, vote_window_secs: i64) -> Result<i64> {
        let deadline = self
            .created_ts
            .checked_add(vote_window_secs)
            .ok_or(PoolError::MathError)?;
        Ok(deadline)
    }

    pub fn assert_vote_window_open(&self, now: i64, vote_window_secs: i64) -> Result<()> {
        require!(
            now <= self.vote_deadline(vote_window_secs)?,
            PoolError::VoteWindowExpired
        );
        Ok(())
    }

    pub fn assert_vote_window_elapsed(&self, now: i64, vote_window_secs: i64) -> Result<()> {
        require!(
            now >= self.vote_deadline(vote_window_secs)?,
            PoolError::VoteWindowNotExpired
        );
        Ok(())
    }

    /// Appends a vote, enforcing one vote per identity.
    pub fn register_vote(&mut self, voter: Pubkey, vote_yes: bool) -> Result<()> {
        require!(self.status == ClaimStatus::Pending, PoolError::ClaimNotPending);
        require!(!self.voters.contains(&voter), PoolError::AlreadyVoted);
        require!(self.voters.len() < MAX_VOTERS, PoolError::MaxVotersReached);

        self.voters.push(voter);
        if vote_yes {
            self.yes_votes = self.yes_votes.checked_add(1).ok_or(PoolError::MathError)?;
        } else {
            self.no_votes = self.no_votes.checked_add(1).ok_or(PoolError::MathError)?;
        }
        Ok(())
    }

    pub fn total_votes(&self) -> Result<u8> {
        let total = self
            .yes_votes
            .checked_add(self.no_votes)
            .ok_or(PoolError::MathError)?;
        Ok(total)
    }

    /// Decision rule: quorum shortfall rejects outright; otherwise the
    /// truncated yes/total ratio in basis points is held against the
    /// configured approval ratio.
    pub fn verdict(&self, quorum: u8, approval_ratio: u16) -> Result<Verdict> {
        let total_votes = self.total_votes()?;
        if total_votes < quorum {
            return Ok(Verdict::Rejected);
        }

        let ratio = (self.yes_votes as u64)
            .checked_mul(BPS_DENOMINATOR)
            .ok_or(PoolError::MathError)?
            .checked_div(total_votes as u64)
            .ok_or(PoolError::MathError)?;

        if ratio >= approval_ratio as u64 {
            Ok(Verdict::Approved)
        } else {
            Ok(Verdict::Rejected)
        }
    }
}
