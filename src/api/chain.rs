use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, ChainResponse};

/// Get the full chain and its length. This is the node-to-node wire
/// contract used by consensus resolution, so the shape is fixed:
/// `{"chain": [...], "length": n}` with all five block fields serialized.
#[get("/chain")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    let resp = ChainResponse {
        chain: &ledger.chain,
        length: ledger.len(),
    };
    HttpResponse::Ok().json(resp)
}
