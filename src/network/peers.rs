use std::collections::BTreeSet;

use url::Url;

use crate::error::ChainError;

/// Result of a single peer registration. Duplicates are an outcome, not
/// an error — a batch registration never aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered,
    AlreadyPresent,
}

/// The validated set of known peer locations, keyed by normalized
/// authority (`host[:port]`).
///
/// A `BTreeSet` keeps iteration lexicographic, which makes the consensus
/// tie-break among equal-longest peer chains deterministic.
#[derive(Debug, Default)]
pub struct PeerRegistry {
    peers: BTreeSet<String>,
}

impl PeerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and admit a peer address. Requires an `http` or `https`
    /// scheme and a non-empty host; the dedup key is the authority with
    /// the port included only when the input carries a non-default one.
    pub fn register(&mut self, address: &str) -> Result<RegisterOutcome, ChainError> {
        let parsed =
            Url::parse(address).map_err(|_| ChainError::InvalidAddress(address.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ChainError::InvalidAddress(address.to_string()));
        }
        let host = parsed
            .host_str()
            .ok_or_else(|| ChainError::InvalidAddress(address.to_string()))?;

        let authority = match parsed.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        if self.peers.insert(authority) {
            Ok(RegisterOutcome::Registered)
        } else {
            Ok(RegisterOutcome::AlreadyPresent)
        }
    }

    /// Authorities in lexicographic order.
    pub fn peers(&self) -> impl Iterator<Item = &str> {
        self.peers.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
}
