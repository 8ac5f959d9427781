use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use uuid::Uuid;

use crate::blockchain::{Block, Blockchain};
use crate::network::PeerRegistry;
use crate::transaction::Transaction;

/// Shared application state. One mutex guards `{chain, pending pool}` as
/// a single unit; a second guards the peer set. The proof-of-work search
/// and the consensus fetch phase both run without holding either lock.
pub struct AppState {
    pub ledger: Mutex<Blockchain>,
    pub peers: Mutex<PeerRegistry>,
    /// Dashless UUID identifying this node; recipient of mining rewards.
    pub node_id: String,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            ledger: Mutex::new(Blockchain::new()),
            peers: Mutex::new(PeerRegistry::new()),
            node_id: Uuid::new_v4().simple().to_string(),
            http: reqwest::Client::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub chain: &'a [Block],
    pub length: usize,
}

/* ---------- TX API Models ---------- */

#[derive(Deserialize)]
pub struct NewTxRequest {
    pub sender: String,
    pub recipient: String,
    pub amount: i64,
}

#[derive(Serialize)]
pub struct NewTxResponse {
    pub message: String,
    pub index: u64,
}

/* ---------- Mining API Models ---------- */

#[derive(Serialize)]
pub struct MineResponse {
    pub message: String,
    pub index: u64,
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

/* ---------- Nodes API Models ---------- */

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub nodes: Vec<String>,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub added_nodes: Vec<String>,
    pub failed_nodes: Vec<String>,
    pub total_nodes: Vec<String>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum ResolveResponse {
    Replaced {
        message: String,
        new_chain: Vec<Block>,
    },
    Authoritative {
        message: String,
        chain: Vec<Block>,
    },
}

/* ---------- Stats API Models ---------- */

#[derive(Serialize)]
pub struct StatsResponse {
    pub height: usize,
    pub pending: usize,
    pub peers: usize,
    pub total_volume: i64,
    pub node_id: String,
}
