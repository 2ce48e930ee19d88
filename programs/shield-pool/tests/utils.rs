// Test fixtures for the shield-pool state machine

use anchor_lang::prelude::*;
use shield_pool::errors::PoolError;
use shield_pool::state::*;

// Governance defaults mirroring a realistic pool setup
pub const MAX_CLAIM_PCT: u16 = 5_000; // 50%
pub const VOTE_WINDOW_SECS: i64 = 3 * 24 * 3600;
pub const QUORUM: u8 = 2;
pub const APPROVAL_RATIO: u16 = 6_000; // 60%

pub const CREATED_TS: i64 = 1_700_000_000;

/// Address of the singleton pool fixture, shared by every record that
/// references it.
pub fn pool_key() -> Pubkey {
    Pubkey::new_from_array([7u8; 32])
}

pub fn test_pool() -> Pool {
    Pool {
        admin: Pubkey::new_unique(),
        accepted_mint: Pubkey::new_unique(),
        total_deposits: 0,
        total_paid_out: 0,
        claim_count: 0,
        member_count: 0,
        max_claim_pct: MAX_CLAIM_PCT,
        vote_window_secs: VOTE_WINDOW_SECS,
        quorum: QUORUM,
        approval_ratio: APPROVAL_RATIO,
        bump: 255,
        authority_bump: 254,
    }
}

pub fn new_member(pool: &mut Pool) -> Member {
    pool.record_join().expect("join should succeed");
    Member {
        pool: pool_key(),
        owner: Pubkey::new_unique(),
        deposited_amount: 0,
        claim_limit: 0,
        last_claim_ts: 0,
        active: true,
        bump: 253,
    }
}

pub fn member_with_deposit(pool: &mut Pool, amount: u64) -> Member {
    let mut member = new_member(pool);
    member
        .credit_deposit(amount, pool.max_claim_pct)
        .expect("deposit should succeed");
    pool.record_deposit(amount).expect("deposit should succeed");
    member
}

pub fn pending_claim(pool: &mut Pool, claimant: &Member, requested_amount: u64) -> Claim {
    claimant
        .assert_can_claim(requested_amount)
        .expect("claim preconditions should hold");
    let claim_id = pool
        .record_claim_submitted()
        .expect("claim id assignment should succeed");
    Claim {
        pool: claimant.pool,
        claim_id,
        claimant: claimant.owner,
        claim_type: ClaimType::Damage,
        requested_amount,
        evidence_uri: "ipfs://evidence".to_string(),
        created_ts: CREATED_TS,
        status: ClaimStatus::Pending,
        yes_votes: 0,
        no_votes: 0,
        voters: Vec::new(),
        bump: 252,
    }
}

pub fn after_window() -> i64 {
    CREATED_TS + VOTE_WINDOW_SECS
}

pub fn assert_pool_err<T: std::fmt::Debug>(result: Result<T>, expected: PoolError) {
    match result {
        Err(actual) => assert_eq!(
            actual,
            expected.into(),
            "expected {:?}, got a different error",
            expected
        ),
        Ok(value) => panic!("expected {:?}, got Ok({:?})", expected, value),
    }
}
