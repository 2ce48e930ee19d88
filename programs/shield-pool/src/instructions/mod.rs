pub mod deposit;
pub mod finalize_claim;
pub mod initialize_pool;
pub mod join_pool;
pub mod submit_claim;
pub mod vote_claim;
pub mod withdraw;

pub use deposit::*;
pub use finalize_claim::*;
pub use initialize_pool::*;
pub use join_pool::*;
pub use submit_claim::*;
pub use vote_claim::*;
pub use withdraw::*;
