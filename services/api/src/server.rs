use crate::cli::ServeArgs;
use crate::infra::{load_roster, AppState};
use crate::routes::router;
use axum_prometheus::PrometheusMetricLayer;
use employee_insights::config::AppConfig;
use employee_insights::error::AppError;
use employee_insights::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
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

    let roster = load_roster(&config.dataset, args.dataset.take(), None)?;
    info!(
        employees = roster.len(),
        departments = roster.departments().len(),
        as_of = %roster.as_of(),
        "employee roster loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        roster: Arc::new(roster),
    };

    let app = router(app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "employee insights service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
