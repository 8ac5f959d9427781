use actix_web::{HttpResponse, Responder, get, post, web};
use log::{debug, info, warn};

use super::models::{AppState, RegisterRequest, RegisterResponse, ResolveResponse};
use crate::network::RegisterOutcome;
use crate::network::consensus::{self, Resolution};

/// Register a batch of peer addresses. Each address gets its own
/// accepted/rejected outcome; a malformed entry never aborts the batch.
#[post("/nodes/register")]
pub async fn register_nodes(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> impl Responder {
    if body.nodes.is_empty() {
        return HttpResponse::BadRequest().body("Please supply a valid list of nodes");
    }

    let mut added_nodes = Vec::new();
    let mut failed_nodes = Vec::new();
    let total_nodes = {
        let mut peers = state.peers.lock().expect("mutex poisoned");
        for node in &body.nodes {
            match peers.register(node) {
                Ok(RegisterOutcome::Registered) => {
                    info!("NODES - registered {node}");
                    added_nodes.push(node.clone());
                }
                Ok(RegisterOutcome::AlreadyPresent) => {
                    debug!("NODES - {node} already registered");
                    failed_nodes.push(node.clone());
                }
                Err(err) => {
                    warn!("NODES - rejected {node}: {err}");
                    failed_nodes.push(node.clone());
                }
            }
        }
        peers.peers().map(str::to_string).collect()
    };

    HttpResponse::Created().json(RegisterResponse {
        message: String::from("Attempted to add nodes"),
        added_nodes,
        failed_nodes,
        total_nodes,
    })
}

/// Longest-valid-chain consensus: fetch every peer's chain (no locks
/// held), validate, and swap in the longest strictly-longer valid one.
/// The ledger lock is taken only for the final compare-and-swap, and the
/// length check is repeated under it in case the local chain grew while
/// the fetches were in flight.
#[get("/nodes/resolve")]
pub async fn resolve_consensus(state: web::Data<AppState>) -> impl Responder {
    let peer_list: Vec<String> = {
        let peers = state.peers.lock().expect("mutex poisoned");
        peers.peers().map(str::to_string).collect()
    };
    let local_len = {
        let ledger = state.ledger.lock().expect("mutex poisoned");
        ledger.len()
    };

    let candidates = consensus::fetch_candidates(&state.http, &peer_list).await;
    let best = consensus::select_longest_valid(local_len, candidates);

    let (resolution, chain) = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");
        match best {
            Some(new_chain) if new_chain.len() > ledger.len() => {
                ledger.replace_chain(new_chain);
                info!("CONSENSUS - chain replaced (length {})", ledger.len());
                (Resolution::Replaced, ledger.chain.clone())
            }
            _ => {
                debug!("CONSENSUS - local chain is authoritative");
                (Resolution::Authoritative, ledger.chain.clone())
            }
        }
    };

    let resp = match resolution {
        Resolution::Replaced => ResolveResponse::Replaced {
            message: String::from("Our chain was replaced"),
            new_chain: chain,
        },
        Resolution::Authoritative => ResolveResponse::Authoritative {
            message: String::from("Our chain is authoritative"),
            chain,
        },
    };
    HttpResponse::Ok().json(resp)
}
