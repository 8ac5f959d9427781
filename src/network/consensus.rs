use std::time::Duration;

use futures_util::future::join_all;
use log::{debug, warn};
use serde::Deserialize;

use crate::blockchain::Block;
use crate::blockchain::validate::is_valid_chain;
use crate::error::ChainError;

/// Per-peer budget for one chain fetch. A slow peer burns its own budget
/// without delaying the others (all fetches run concurrently).
pub const PEER_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Wire shape of a peer's `GET /chain` response.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteChain {
    pub chain: Vec<Block>,
    pub length: usize,
}

/// Outcome of a consensus resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Replaced,
    Authoritative,
}

async fn fetch_one(client: &reqwest::Client, peer: &str) -> Result<RemoteChain, ChainError> {
    let url = format!("http://{peer}/chain");
    let response = client
        .get(&url)
        .timeout(PEER_FETCH_TIMEOUT)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|source| ChainError::PeerUnreachable {
            peer: peer.to_string(),
            source,
        })?;

    response
        .json::<RemoteChain>()
        .await
        .map_err(|err| ChainError::PeerDecodeFailure {
            peer: peer.to_string(),
            reason: err.to_string(),
        })
}

/// Ask every peer for its chain, concurrently. Unreachable peers and
/// undecodable payloads are logged and skipped; a partial peer-set
/// failure never aborts the resolution. Results come back in the input
/// (lexicographic) peer order.
pub async fn fetch_candidates(
    client: &reqwest::Client,
    peers: &[String],
) -> Vec<(String, RemoteChain)> {
    let fetches = peers.iter().map(|peer| async move {
        let result = fetch_one(client, peer).await;
        (peer.clone(), result)
    });

    let mut candidates = Vec::new();
    for (peer, result) in join_all(fetches).await {
        match result {
            Ok(remote) => {
                debug!("CONSENSUS - peer {peer} reports length {}", remote.length);
                candidates.push((peer, remote));
            }
            Err(err) => warn!("CONSENSUS - skipping peer: {err}"),
        }
    }
    candidates
}

/// Longest-valid-chain rule: among candidates strictly longer than the
/// local chain whose blocks pass full validation, pick the greatest
/// length. Ties go to the first candidate observed; since candidates
/// arrive in lexicographic peer order, the tie-break is deterministic.
///
/// A candidate whose reported `length` disagrees with its block count is
/// treated as a decode failure and skipped. An invalid chain is not an
/// error — it is simply excluded.
pub fn select_longest_valid(
    local_len: usize,
    candidates: Vec<(String, RemoteChain)>,
) -> Option<Vec<Block>> {
    let mut best: Option<(usize, Vec<Block>)> = None;

    for (peer, remote) in candidates {
        if remote.length != remote.chain.len() {
            warn!(
                "CONSENSUS - peer {peer} reported length {} for {} blocks, skipping",
                remote.length,
                remote.chain.len()
            );
            continue;
        }

        let threshold = best.as_ref().map_or(local_len, |(len, _)| *len);
        if remote.length <= threshold {
            debug!("CONSENSUS - peer {peer} chain not longer, ignoring");
            continue;
        }
        if !is_valid_chain(&remote.chain) {
            debug!("CONSENSUS - peer {peer} chain failed validation, ignoring");
            continue;
        }

        best = Some((remote.length, remote.chain));
    }

    best.map(|(_, chain)| chain)
}

#[cfg(test)]
mod tests {
    use super::{RemoteChain, select_longest_valid};
    use crate::blockchain::{Block, Blockchain, pow};

    fn mined_chain(extra: usize) -> Vec<Block> {
        mined_chain_with(extra, 0)
    }

    fn mined_chain_with(extra: usize, base_amount: i64) -> Vec<Block> {
        let mut ledger = Blockchain::new();
        for i in 0..extra {
            let (last_proof, previous_hash) = {
                let last = ledger.last_block().unwrap();
                (last.proof, last.digest())
            };
            ledger
                .new_transaction("alice", "bob", base_amount + i as i64)
                .unwrap();
            ledger.mine_block(pow::find_proof(last_proof), previous_hash);
        }
        ledger.chain.clone()
    }

    fn candidate(peer: &str, chain: Vec<Block>) -> (String, RemoteChain) {
        let length = chain.len();
        (peer.to_string(), RemoteChain { chain, length })
    }

    #[test]
    fn no_candidates_keeps_local_chain() {
        assert!(select_longest_valid(1, Vec::new()).is_none());
    }

    #[test]
    fn shorter_or_equal_chains_are_ignored() {
        let chain = mined_chain(1); // length 2
        let candidates = vec![candidate("a.example:5000", chain)];
        assert!(select_longest_valid(2, candidates).is_none());
    }

    #[test]
    fn longer_valid_chain_wins() {
        let chain = mined_chain(2); // length 3
        let candidates = vec![candidate("a.example:5000", chain.clone())];
        assert_eq!(select_longest_valid(1, candidates), Some(chain));
    }

    #[test]
    fn longer_invalid_chain_loses_to_shorter_valid_one() {
        let mut forged = mined_chain(4); // length 5, then tampered
        forged[2].transactions[0].amount = 1_000_000;
        let honest = mined_chain(2); // length 3

        let candidates = vec![
            candidate("a.example:5000", forged),
            candidate("b.example:5000", honest.clone()),
        ];
        assert_eq!(select_longest_valid(1, candidates), Some(honest));
    }

    #[test]
    fn equal_longest_ties_go_to_the_first_observed() {
        let first = mined_chain_with(2, 100);
        let second = mined_chain_with(2, 200);
        assert_ne!(first, second);

        let candidates = vec![
            candidate("a.example:5000", first.clone()),
            candidate("b.example:5000", second),
        ];
        assert_eq!(select_longest_valid(1, candidates), Some(first));
    }

    #[test]
    fn length_mismatch_is_treated_as_undecodable() {
        let chain = mined_chain(3);
        let lying = RemoteChain {
            length: chain.len() + 10,
            chain,
        };
        let candidates = vec![("a.example:5000".to_string(), lying)];
        assert!(select_longest_valid(1, candidates).is_none());
    }
}
