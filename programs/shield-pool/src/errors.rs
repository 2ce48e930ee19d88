use anchor_lang::prelude::*;

#[error_code]
pub enum PoolError {
    #[msg("Governance parameters are out of range")]
    InvalidConfig,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Amount exceeds the member's deposited balance")]
    InsufficientBalance,

    #[msg("Requested amount exceeds the member's claim limit")]
    ClaimLimitExceeded,

    #[msg("Evidence URI must be between 1 and 200 characters")]
    EvidenceInvalid,

    #[msg("Member is not active in the pool")]
    MemberInactive,

    #[msg("Caller already has a member account in this pool")]
    AlreadyMember,

    #[msg("Member has already voted on this claim")]
    AlreadyVoted,

    #[msg("Claim is not in pending status")]
    ClaimNotPending,

    #[msg("Vote window has not expired yet")]
    VoteWindowNotExpired,

    #[msg("Vote window has expired")]
    VoteWindowExpired,

    #[msg("Maximum number of voters reached for this claim")]
    MaxVotersReached,

    #[msg("Insufficient funds in the pool vault")]
    InsufficientPoolFunds,

    #[msg("Signer is not authorized for this account")]
    Unauthorized,

    #[msg("Arithmetic overflow or underflow")]
    MathError,
}
