pub mod consensus;
pub mod peers;

pub use peers::{PeerRegistry, RegisterOutcome};
