use std::sync::Arc;

use botanica_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logger(log: &LogArgs) {
    let filter = EnvFilter::try_new(&log.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if log.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let state = state(args.clone()).await?;
    let router = router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Botanica API listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
