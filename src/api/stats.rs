use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, StatsResponse};

/// Derived observability figures. `total_volume` is recomputed from
/// ledger state on demand; it is not an account balance.
#[get("/stats")]
pub async fn get_stats(state: web::Data<AppState>) -> impl Responder {
    let (height, pending, total_volume) = {
        let ledger = state.ledger.lock().expect("mutex poisoned");
        (ledger.len(), ledger.pending_len(), ledger.total_volume())
    };
    let peers = {
        let peers = state.peers.lock().expect("mutex poisoned");
        peers.len()
    };

    HttpResponse::Ok().json(StatsResponse {
        height,
        pending,
        peers,
        total_volume,
        node_id: state.node_id.clone(),
    })
}
