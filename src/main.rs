mod api;
mod blockchain;
mod error;
mod network;
mod transaction;

use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use std::env;

use api::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080);

    let state = web::Data::new(AppState::new());
    println!(
        "⛓️ Starting ledger node {} at http://{host}:{port}",
        state.node_id
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
