//! Campboard server binary
//!
//! Wires the in-memory store, repositories, and page renderer into the
//! router, then serves it. A background task periodically repairs
//! listing/review bookkeeping left behind by interrupted writes.

use std::{sync::Arc, time::Duration};

use campboard_core::{
    AppState, CampgroundRepository, HtmlPages, MemoryCampgroundRepository, MemoryReviewRepository,
    MemoryStore, ReviewRepository, ReviewService, create_router,
};
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod seed;

/// Server-rendered campground listings with nested reviews
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Wipe the store and fill it with this many generated campgrounds
    #[arg(long)]
    seed: Option<usize>,

    /// Seconds between reference repair passes, 0 disables the task
    #[arg(long, default_value_t = 60)]
    reconcile_interval: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let store = MemoryStore::new();
    let campground_repo: Arc<dyn CampgroundRepository> =
        Arc::new(MemoryCampgroundRepository::new(store.clone()));
    let review_repo: Arc<dyn ReviewRepository> =
        Arc::new(MemoryReviewRepository::new(store.clone()));

    if let Some(count) = args.seed {
        seed::seed_store(&store, count)?;
        info!(count, "seeded campground store");
    }

    if args.reconcile_interval > 0 {
        spawn_reconcile_task(
            ReviewService::new(review_repo.clone()),
            Duration::from_secs(args.reconcile_interval),
        );
    }

    let state = AppState::new(campground_repo, review_repo, Arc::new(HtmlPages::new()));
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "campboard server running");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Run the reference repair pass on a fixed interval
fn spawn_reconcile_task(reconciler: ReviewService, period: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        // The first interval tick fires immediately; skip it so the
        // initial pass waits one full period.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(err) = reconciler.reconcile().await {
                error!(error = %err, "reconcile pass failed");
            }
        }
    });
}
