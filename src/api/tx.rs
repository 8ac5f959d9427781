use actix_web::{HttpResponse, Responder, post, web};
use log::{info, warn};

use super::models::{AppState, NewTxRequest, NewTxResponse};

/// Submit a transfer into the pending pool. Accepted as-is (the ledger
/// is permissionless); the response names the block that will eventually
/// hold it. Submission does not mine.
#[post("/transactions/new")]
pub async fn new_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTxRequest>,
) -> impl Responder {
    let req = body.into_inner();

    let index = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");
        match ledger.new_transaction(req.sender, req.recipient, req.amount) {
            Ok(index) => index,
            Err(err) => {
                warn!("TX - rejected: {err}");
                return HttpResponse::InternalServerError().body(err.to_string());
            }
        }
    };

    info!("TX - queued for block {index}");
    HttpResponse::Created().json(NewTxResponse {
        message: format!("Transaction will be added to Block {index}"),
        index,
    })
}
