use habit_compass::{resolve_addr, router, AppState, Tracker};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let tracker = Tracker::seeded();
    let snapshot = tracker.snapshot();
    info!(
        habits = snapshot.habits.habits().len(),
        productive_days = snapshot.days.len(),
        completion_rate = snapshot.completion_rate(),
        "seeded tracker"
    );

    let app = router(AppState::new(tracker));
    let addr = resolve_addr()?;

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(err) => {
            error!("failed to listen for ctrl-c: {err}");
            std::future::pending::<()>().await;
        }
    }
}
