use thiserror::Error;

/// Failure taxonomy for the ledger core. None of these terminate the
/// process; the API layer translates them into responses, and the
/// consensus path recovers from peer failures by skipping the peer.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Malformed peer address or unsupported scheme. Reported per item,
    /// never aborts a batch registration.
    #[error("invalid node address '{0}': expected http(s)://host[:port]")]
    InvalidAddress(String),

    /// The chain has no blocks. Unreachable after construction (the
    /// genesis block is appended in `Blockchain::new`); hitting this
    /// indicates a construction bug.
    #[error("blockchain has no blocks (missing genesis)")]
    EmptyChain,

    /// A peer could not be reached during consensus resolution.
    #[error("peer {peer} unreachable")]
    PeerUnreachable {
        peer: String,
        #[source]
        source: reqwest::Error,
    },

    /// A peer answered but its chain payload could not be decoded.
    #[error("peer {peer} sent an undecodable chain: {reason}")]
    PeerDecodeFailure { peer: String, reason: String },

    /// The chain tip advanced while a proof search was running, so the
    /// found proof no longer extends the current tip.
    #[error("chain tip advanced during proof search; proof is stale")]
    StaleProof,
}
