use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_catalog_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Utc;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use talent_desk::config::AppConfig;
use talent_desk::error::AppError;
use talent_desk::telemetry;
use talent_desk::tracking::Catalog;
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

    let catalog = Arc::new(Catalog::from_config(&config.catalog, Utc::now())?);
    info!(
        jobs = catalog.jobs().len(),
        candidates = catalog.candidates().len(),
        interviews = catalog.interviews().len(),
        messages = catalog.messages().len(),
        "catalog loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_catalog_routes(catalog)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "talent desk ready");

    axum::serve(listener, app).await?;
    Ok(())
}
