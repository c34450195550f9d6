use road_risk::road::{InMemorySegmentRepository, SegmentRepository};
use road_risk::scoring::RuleBasedModel;
use road_risk::{api, config, state};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::Level;

fn init_tracing(level: Level) {
    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_default()?;
    init_tracing(config.log_level().unwrap_or(Level::INFO));
    if config.log_level().is_none() {
        tracing::warn!(level = %config.logging.level, "Unknown log level, using info");
    }
    tracing::info!(
        app = %config.app.name,
        config_path = config::DEFAULT_CONFIG_PATH,
        "road-risk starting"
    );

    let repository = load_repository(&config);
    let model = RuleBasedModel::new();
    let state = Arc::new(state::AppState::new(repository, Arc::new(model)));

    let mut app = api::router(state);
    if config.cors_enabled() {
        app = api::with_cors(app);
    }

    let port = config.server_port();
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load configured segments, falling back to the built-in sample on any failure.
fn load_repository(config: &config::Config) -> Arc<dyn SegmentRepository> {
    let repository = match config.segments_path() {
        Some(path) => match InMemorySegmentRepository::load_from_path(path) {
            Ok(repository) => {
                tracing::info!(
                    path = %path.display(),
                    count = repository.len(),
                    "Road segments loaded"
                );
                repository
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load road segments, using sample data");
                InMemorySegmentRepository::sample()
            }
        },
        None => {
            tracing::info!("No segment file configured, using sample data");
            InMemorySegmentRepository::sample()
        }
    };
    if repository.is_empty() {
        tracing::warn!("Segment repository is empty");
    }
    Arc::new(repository)
}
