use std::error::Error;

use axum::serve;
use season_stats::routes::{init_tracing, make_app};
use season_stats::utils::{config::Config, state::AppState};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let config = Config::init()?;
    init_tracing(&config.log_level);

    let state = AppState::init(config)?;
    let addr = state.config.bind_addr.clone();
    let app = make_app(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    serve(listener, app).await?;
    Ok(())
}
