// Pool and member accounting tests
//
// Test Coverage:
//
// === Happy Path Tests ===
// 1. test_deposit_sets_claim_limit - 100M at 5000 bps gives a 50M limit
// 2. test_withdraw_recomputes_claim_limit - limit follows the deposit down
// 3. test_deposit_sum_invariant - pool total equals the member sum
// 4. test_sequential_claim_ids - claim ids hand out 0, 1, 2, ...
//
// === Validation Tests ===
// 5. test_config_bounds - basis-point and positivity checks on init
// 6. test_overdraw_rejected - withdrawing beyond the deposit fails
// 7. test_claim_limit_truncates - limit rounds down, never up
// 8. test_zero_amount_rejected - zero deposits and withdrawals fail
// 9. test_inactive_member_blocked - inactive members cannot move funds
// 10. test_total_deposits_underflow_guard - pool totals never wrap

mod utils;

use shield_pool::errors::PoolError;
use utils::*;

#[test]
fn test_deposit_sets_claim_limit() {
    let mut pool = test_pool();
    let member = member_with_deposit(&mut pool, 100_000_000);

    assert_eq!(member.deposited_amount, 100_000_000);
    assert_eq!(
        member.claim_limit, 50_000_000,
        "claim limit should be 50% of the deposit"
    );
    assert_eq!(pool.total_deposits, 100_000_000);
    assert_eq!(pool.member_count, 1);
}

#[test]
fn test_withdraw_recomputes_claim_limit() {
    let mut pool = test_pool();
    let mut member = member_with_deposit(&mut pool, 100_000_000);

    member
        .debit_withdrawal(20_000_000, pool.max_claim_pct)
        .expect("withdrawal should succeed");
    pool.record_withdraw(20_000_000)
        .expect("withdrawal should succeed");

    assert_eq!(member.deposited_amount, 80_000_000);
    assert_eq!(
        member.claim_limit, 40_000_000,
        "claim limit should track the reduced deposit"
    );
    assert_eq!(pool.total_deposits, 80_000_000);
}

#[test]
fn test_deposit_sum_invariant() {
    let mut pool = test_pool();
    let a = member_with_deposit(&mut pool, 100_000_000);
    let mut b = member_with_deposit(&mut pool, 35_000_000);

    assert_eq!(pool.total_deposits, a.deposited_amount + b.deposited_amount);

    b.debit_withdrawal(5_000_000, pool.max_claim_pct)
        .expect("withdrawal should succeed");
    pool.record_withdraw(5_000_000)
        .expect("withdrawal should succeed");

    assert_eq!(
        pool.total_deposits,
        a.deposited_amount + b.deposited_amount,
        "pool total must equal the sum of member deposits after every operation"
    );
    assert_eq!(pool.member_count, 2);
}

#[test]
fn test_sequential_claim_ids() {
    let mut pool = test_pool();

    let first = pool.record_claim_submitted().unwrap();
    let second = pool.record_claim_submitted().unwrap();
    let third = pool.record_claim_submitted().unwrap();

    assert_eq!((first, second, third), (0, 1, 2));
    assert_eq!(pool.claim_count, 3, "claim count only ever increases");
}

#[test]
fn test_config_bounds() {
    use shield_pool::state::Pool;

    assert_pool_err(
        Pool::validate_config(10_001, VOTE_WINDOW_SECS, QUORUM, APPROVAL_RATIO),
        PoolError::InvalidConfig,
    );
    assert_pool_err(
        Pool::validate_config(MAX_CLAIM_PCT, VOTE_WINDOW_SECS, QUORUM, 10_001),
        PoolError::InvalidConfig,
    );
    assert_pool_err(
        Pool::validate_config(MAX_CLAIM_PCT, 0, QUORUM, APPROVAL_RATIO),
        PoolError::InvalidConfig,
    );
    assert_pool_err(
        Pool::validate_config(MAX_CLAIM_PCT, VOTE_WINDOW_SECS, 0, APPROVAL_RATIO),
        PoolError::InvalidConfig,
    );

    // 10000 bps is the inclusive upper bound
    Pool::validate_config(10_000, VOTE_WINDOW_SECS, QUORUM, 10_000)
        .expect("full-range basis points should be accepted");
}

#[test]
fn test_overdraw_rejected() {
    let mut pool = test_pool();
    let mut member = member_with_deposit(&mut pool, 100_000_000);

    assert_pool_err(
        member.assert_can_withdraw(100_000_001),
        PoolError::InsufficientBalance,
    );
    assert_pool_err(
        member.debit_withdrawal(100_000_001, pool.max_claim_pct),
        PoolError::InsufficientBalance,
    );

    // Nothing moved
    assert_eq!(member.deposited_amount, 100_000_000);
    assert_eq!(member.claim_limit, 50_000_000);
}

#[test]
fn test_claim_limit_truncates() {
    let mut pool = test_pool();
    pool.max_claim_pct = 3_333;

    let member = member_with_deposit(&mut pool, 99);

    // floor(99 * 3333 / 10000) = 32
    assert_eq!(member.claim_limit, 32, "claim limit must round down");
}

#[test]
fn test_zero_amount_rejected() {
    let mut pool = test_pool();
    let member = member_with_deposit(&mut pool, 100_000_000);

    assert_pool_err(member.assert_can_deposit(0), PoolError::InvalidAmount);
    assert_pool_err(member.assert_can_withdraw(0), PoolError::InvalidAmount);
}

#[test]
fn test_inactive_member_blocked() {
    let mut pool = test_pool();
    let mut member = member_with_deposit(&mut pool, 100_000_000);
    member.active = false;

    assert_pool_err(
        member.assert_can_deposit(1_000_000),
        PoolError::MemberInactive,
    );
    assert_pool_err(
        member.assert_can_withdraw(1_000_000),
        PoolError::MemberInactive,
    );

    // Balance untouched by the rejected operations
    assert_eq!(member.deposited_amount, 100_000_000);
}

#[test]
fn test_total_deposits_underflow_guard() {
    let mut pool = test_pool();

    assert_pool_err(pool.record_withdraw(1), PoolError::MathError);
    assert_eq!(pool.total_deposits, 0);
}
