pub mod api;
pub mod dashboards;
pub mod domain;
pub mod projections;
pub mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::{
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Log directory next to the working dir
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                // Keep application logs, quiet down SQL noise
                "info,sqlx=warn,sea_orm=warn".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Simple middleware that logs every request with timing and size
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        use axum::body::to_bytes;
        use chrono::Utc;

        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        let (parts, body) = response.into_parts();

        let bytes = match to_bytes(body, usize::MAX).await {
            Ok(b) => b,
            Err(_) => {
                let duration = start.elapsed();
                println!(
                    "\x1b[33m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
                    Utc::now().format("%H:%M:%S"),
                    duration.as_millis(),
                    "error",
                    parts.status.as_u16(),
                    method,
                    uri.path()
                );
                return Response::from_parts(parts, Body::default());
            }
        };

        let size = bytes.len();
        let duration = start.elapsed();

        let color_code = if parts.status.as_u16() == 200 {
            "36"
        } else {
            "33"
        };

        println!(
            "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
            color_code,
            Utc::now().format("%H:%M:%S"),
            duration.as_millis(),
            size,
            parts.status.as_u16(),
            method,
            uri.path()
        );

        Response::from_parts(parts, Body::from(bytes))
    }

    // Initialize database (path comes from config.toml)
    let config = shared::config::load_config()?;
    let db_path = shared::config::get_database_path(&config)?;
    shared::data::db::initialize_database(db_path.to_str())
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // Order batch handlers
        .route(
            "/api/a001/order-batch",
            get(api::handlers::a001_order_batch::list_all)
                .post(api::handlers::a001_order_batch::upsert),
        )
        .route(
            "/api/a001/order-batch/import-csv",
            post(api::handlers::a001_order_batch::import_csv),
        )
        .route(
            "/api/a001/order-batch/:id",
            get(api::handlers::a001_order_batch::get_by_id)
                .delete(api::handlers::a001_order_batch::delete),
        )
        // Daily cost handlers
        .route(
            "/api/a002/daily-cost",
            get(api::handlers::a002_daily_cost::list_all)
                .post(api::handlers::a002_daily_cost::upsert),
        )
        .route(
            "/api/a002/daily-cost/totals",
            get(api::handlers::a002_daily_cost::totals),
        )
        .route(
            "/api/a002/daily-cost/:id",
            get(api::handlers::a002_daily_cost::get_by_id)
                .delete(api::handlers::a002_daily_cost::delete),
        )
        // Sales page handlers
        .route(
            "/api/a003/sales-page",
            get(api::handlers::a003_sales_page::list_all)
                .post(api::handlers::a003_sales_page::upsert),
        )
        .route(
            "/api/a003/sales-page/:id",
            get(api::handlers::a003_sales_page::get_by_id)
                .delete(api::handlers::a003_sales_page::delete),
        )
        // Product handlers
        .route(
            "/api/a004/product",
            get(api::handlers::a004_product::list_all).post(api::handlers::a004_product::upsert),
        )
        .route(
            "/api/a004/product/:id",
            get(api::handlers::a004_product::get_by_id)
                .delete(api::handlers::a004_product::delete),
        )
        // Moderator and attendance handlers
        .route(
            "/api/a005/moderator",
            get(api::handlers::a005_moderator::list_all)
                .post(api::handlers::a005_moderator::upsert),
        )
        .route(
            "/api/a005/moderator/:id",
            get(api::handlers::a005_moderator::get_by_id)
                .delete(api::handlers::a005_moderator::delete),
        )
        .route(
            "/api/a005/attendance",
            get(api::handlers::a005_moderator::list_attendance),
        )
        .route(
            "/api/a005/attendance/toggle",
            post(api::handlers::a005_moderator::toggle_attendance),
        )
        // P900 allocated cost sheet
        .route(
            "/api/p900/cost-sheet",
            get(api::handlers::p900_cost_sheet::get_cost_sheet),
        )
        // D400 summary reports
        .route(
            "/api/d400/summary-matrix",
            get(api::handlers::d400_summary_report::get_summary_matrix),
        )
        .route(
            "/api/d400/category-breakdown",
            get(api::handlers::d400_summary_report::get_category_breakdown),
        )
        // D401 executive dashboard
        .route(
            "/api/d401/executive-stats",
            get(api::handlers::d401_executive::get_executive_stats),
        )
        // D402 salary sheet
        .route(
            "/api/d402/salary-sheet",
            get(api::handlers::d402_salary_sheet::get_salary_sheet),
        )
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], 3000).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port 3000 is already in use. Please ensure no other process is using this port."
                );
            } else {
                tracing::error!("Failed to bind to port 3000. Error: {}", e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
