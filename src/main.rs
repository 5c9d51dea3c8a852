use axum::{
    extract::{Query, State},
    response::{Html, Json, Redirect},
    routing::{get, post},
    Form, Router,
};
use chrono::Utc;
use std::env;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use tesela_site::dom::Document;
use tesela_site::search;
use tesela_site::site::home::{HomeContext, Notice};
use tesela_site::site::{home, thanks};
use tesela_site::types::{HomeQuery, WaitlistForm};
use tesela_site::waitlist::{self, SubmissionOutcome};
use tesela_site::AppState;

fn parse_port_from_args() -> Option<u16> {
    let mut args = std::env::args().peekable();
    while let Some(a) = args.next() {
        if a == "--port" {
            if let Some(v) = args.next() {
                if let Ok(p) = v.parse::<u16>() {
                    return Some(p);
                }
            }
        } else if let Some(rest) = a.strip_prefix("--port=") {
            if let Ok(p) = rest.parse::<u16>() {
                return Some(p);
            }
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    info!("Starting Tesela 40 site");

    // Outbound HTTP client for the form backend
    let http_timeout = env::var("HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(30);
    let connect_timeout = env::var("HTTP_CONNECT_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(10);
    let http_client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(http_timeout))
        .connect_timeout(std::time::Duration::from_secs(connect_timeout))
        .build()?;

    let state = Arc::new(AppState::new(http_client));
    info!(
        "Waitlist submissions forward to {}",
        state.config.form_endpoint
    );

    // Build router
    let app = Router::new()
        .route("/", get(home_page))
        .route("/waitlist", post(submit_waitlist))
        .route("/gracias", get(thanks_page))
        .route("/health", get(health_check))
        .nest_service("/assets", ServeDir::new(&state.config.assets_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state.clone());

    // Start server
    let port: u16 = parse_port_from_args().unwrap_or(state.config.port);
    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(l) => l,
        Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
            anyhow::bail!(
                "Address already in use: {}. Stop the existing process or run with --port {} (or set PORT/TESELA_PORT).",
                bind_addr,
                port.saturating_add(1)
            )
        }
        Err(e) => return Err(e.into()),
    };
    info!("Site listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).ok();

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = async {
                if let Some(ref mut s) = sigterm {
                    s.recv().await;
                } else {
                    futures::future::pending::<()>().await;
                }
            } => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

/// Landing page. With `?q=` the rendered page is parsed, searched and
/// re-serialized so every match arrives wrapped in a highlight marker.
async fn home_page(Query(params): Query<HomeQuery>) -> Html<String> {
    let ctx = HomeContext {
        form_ts_ms: Utc::now().timestamp_millis(),
        query: params.q.as_deref().unwrap_or(""),
        notice: params.error.as_deref().and_then(Notice::from_flag),
    };
    let mut html = home::render_home(&ctx);

    if let Some(q) = params.q.as_deref() {
        if !q.trim().is_empty() {
            let mut doc = Document::parse(&html);
            let outcome = search::run_search(&mut doc, q);
            info!(markers = outcome.markers, "page search executed");
            html = doc.to_html();
        }
    }

    Html(html)
}

/// Waitlist submission endpoint.
///
/// Bot-flagged posts answer with the same redirect a plain page visit gets.
async fn submit_waitlist(
    State(state): State<Arc<AppState>>,
    Form(form): Form<WaitlistForm>,
) -> Redirect {
    let outcome = waitlist::process_submission(
        &state.bot_check,
        state.form_backend.as_ref(),
        &form,
        Utc::now(),
    )
    .await;

    match outcome {
        SubmissionOutcome::Accepted { id } => {
            info!(id = %id, "waitlist submission forwarded");
            Redirect::to("/gracias")
        }
        SubmissionOutcome::Invalid { field } => {
            warn!(field, "waitlist submission failed validation");
            Redirect::to(&format!(
                "/?error={}#waitlist",
                Notice::InvalidSubmission.flag()
            ))
        }
        SubmissionOutcome::ForwardFailed(e) => {
            error!("waitlist forward failed: {}", e);
            Redirect::to(&format!(
                "/?error={}#waitlist",
                Notice::SubmissionFailed.flag()
            ))
        }
        SubmissionOutcome::DroppedAsBot(verdict) => {
            warn!(?verdict, "waitlist submission dropped by bot screen");
            Redirect::to("/")
        }
    }
}

async fn thanks_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(thanks::render_thanks(&state.config.site_url))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "tesela-site",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
