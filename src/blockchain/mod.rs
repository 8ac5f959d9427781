pub mod block;
pub mod model;
pub mod pow;
pub mod validate;

pub use block::Block;
pub use model::Blockchain;

/// Number of leading zero hex characters a proof hash must show.
/// Fixed; there is no difficulty adjustment.
pub const DIFFICULTY_PREFIX_LEN: usize = 4;

/// Proof recorded in the genesis block. No search is performed for it.
pub const GENESIS_PROOF: u64 = 100;

/// Sentinel `previous_hash` of the genesis block (not a real digest).
pub const GENESIS_PREVIOUS_HASH: &str = "1";
