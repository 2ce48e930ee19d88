pub const POOL: &[u8] = b"pool";
pub const MEMBER: &[u8] = b"member";
pub const CLAIM: &[u8] = b"claim";
pub const POOL_AUTHORITY: &[u8] = b"pool_authority";

pub const ANCHOR_DISCRIMINATOR: usize = 8;

/// Basis-point denominator used for all percentage config.
pub const BPS_DENOMINATOR: u64 = 10_000;
pub const MAX_BPS: u16 = 10_000;

/// Longest accepted evidence URI, in bytes.
pub const MAX_EVIDENCE_URI_LEN: usize = 200;

/// Hard cap on recorded voters per claim account.
pub const MAX_VOTERS: usize = 32;
