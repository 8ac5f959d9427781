use actix_web::{HttpResponse, Responder, get, web};
use log::{debug, info, warn};

use super::models::{AppState, MineResponse};
use crate::blockchain::pow;
use crate::error::ChainError;
use crate::transaction::Transaction;

/// Mine a new block:
/// - snapshot the tip (proof, digest, index) under a short lock
/// - run the proof search on the blocking thread pool, lock released,
///   so `/chain` readers and submitters are never blocked by the search
/// - re-lock, enqueue the mining reward, drain the pool and append
///
/// If the tip advanced while the search ran, the found proof no longer
/// extends the current tip and the request is refused with 409 rather
/// than appending a block that would fail validation.
#[get("/mine")]
pub async fn mine(state: web::Data<AppState>) -> impl Responder {
    let (last_proof, previous_hash, tip_index) = {
        let ledger = state.ledger.lock().expect("mutex poisoned");
        match ledger.last_block() {
            Ok(last) => (last.proof, last.digest(), last.index),
            Err(err) => return HttpResponse::InternalServerError().body(err.to_string()),
        }
    };

    debug!("MINER - searching proof against {last_proof}");
    let proof = match web::block(move || pow::find_proof(last_proof)).await {
        Ok(proof) => proof,
        Err(err) => return HttpResponse::InternalServerError().body(err.to_string()),
    };

    let resp = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");

        let current_tip = match ledger.last_block() {
            Ok(last) => last.index,
            Err(err) => return HttpResponse::InternalServerError().body(err.to_string()),
        };
        if current_tip != tip_index {
            warn!("MINER - tip moved from {tip_index} to {current_tip} during search");
            return HttpResponse::Conflict().body(ChainError::StaleProof.to_string());
        }

        if let Err(err) = ledger.push_pending(Transaction::reward(state.node_id.clone())) {
            return HttpResponse::InternalServerError().body(err.to_string());
        }
        let block = ledger.mine_block(proof, previous_hash);
        MineResponse {
            message: String::from("New Block Forged"),
            index: block.index,
            transactions: block.transactions.clone(),
            proof: block.proof,
            previous_hash: block.previous_hash.clone(),
        }
    };

    info!("MINER - sealed block #{} (proof={})", resp.index, resp.proof);
    HttpResponse::Ok().json(resp)
}
