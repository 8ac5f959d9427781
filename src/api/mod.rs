mod chain;
mod health;
mod mining;
mod models;
mod nodes;
mod stats;
mod tx;

use actix_web::web::ServiceConfig;

pub use models::AppState;

/// Routes are registered at the root (no version scope): peers locate
/// each other's chains at `GET /chain`, so that path is part of the
/// node-to-node wire contract.
pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.service(health::health_check)
        .service(chain::get_chain)
        .service(tx::new_transaction)
        .service(mining::mine)
        .service(nodes::register_nodes)
        .service(nodes::resolve_consensus)
        .service(stats::get_stats);
}
