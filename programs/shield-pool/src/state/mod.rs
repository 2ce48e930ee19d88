pub mod claim;
pub mod member;
pub mod pool;

pub use claim::*;
pub use member::*;
pub use pool::*;
