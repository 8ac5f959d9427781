use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{GENESIS_PREVIOUS_HASH, GENESIS_PROOF};
use crate::transaction::Transaction;

/// A single block in the chain, immutable once appended.
///
/// Unlike designs that cache their own hash inside the block, the digest
/// here is always recomputed from the fields, so there is no cached value
/// that could drift from the content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// 1-based position in the chain, strictly increasing by 1.
    pub index: u64,
    /// Unix timestamp (UTC) at creation.
    pub timestamp: i64,
    /// The pending pool drained into this block (may be empty).
    pub transactions: Vec<Transaction>,
    /// Nonce satisfying the difficulty predicate against the previous
    /// block's proof.
    pub proof: u64,
    /// Digest of the predecessor; the genesis block carries a sentinel.
    pub previous_hash: String,
}

impl Block {
    /// The synthetic first block. Anchors the chain without any work.
    pub fn genesis() -> Self {
        Self {
            index: 1,
            timestamp: Utc::now().timestamp(),
            transactions: Vec::new(),
            proof: GENESIS_PROOF,
            previous_hash: String::from(GENESIS_PREVIOUS_HASH),
        }
    }

    pub fn new(
        index: u64,
        transactions: Vec<Transaction>,
        proof: u64,
        previous_hash: String,
    ) -> Self {
        Self {
            index,
            timestamp: Utc::now().timestamp(),
            transactions,
            proof,
            previous_hash,
        }
    }

    /// SHA-256 digest of the block's canonical encoding, hex-encoded.
    ///
    /// Canonical encoding: compact JSON with object keys in lexicographic
    /// order (serde_json's default object map sorts keys), covering all
    /// five fields including transaction content. This is the wire format
    /// every node must agree on byte-for-byte — the consensus rule depends
    /// on independently implemented nodes computing identical digests for
    /// identical blocks.
    pub fn digest(&self) -> String {
        let value = serde_json::to_value(self).expect("serialize block");
        let canonical = serde_json::to_string(&value).expect("encode block");
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        hex::encode(hasher.finalize())
    }
}
