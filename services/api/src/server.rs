use crate::cli::ServeArgs;
use crate::infra::{build_probe, build_registry, metrics_builder, AppState};
use crate::routes::employment_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayerBuilder;
use employment_history::config::AppConfig;
use employment_history::error::AppError;
use employment_history::lookup::EmploymentHistoryService;
use employment_history::probe::PrometheusSink;
use employment_history::telemetry;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let recorder_handle = metrics_builder()?
        .install_recorder()
        .map_err(|err| AppError::Metrics(err.to_string()))?;
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayerBuilder::new()
        .with_metrics_from_fn(|| recorder_handle)
        .build_pair();
    PrometheusSink::describe();

    let upkeep_handle = prometheus_handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    let app_state = AppState {
        metrics: Arc::new(prometheus_handle),
    };

    let registry = build_registry(&config.registry)?;
    let service = Arc::new(EmploymentHistoryService::new(
        registry.clone(),
        registry,
        build_probe(&config.probe),
    ));

    let app = employment_router(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(?config.environment, %addr, "employment history service listening");

    axum::serve(listener, app).await?;
    Ok(())
}
