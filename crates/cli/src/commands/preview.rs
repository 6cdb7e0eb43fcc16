use anyhow::{Context, Result};
use axum::{
    Router,
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
};
use portal_kit_core::config::parse_portal_toml;
use portal_kit_generator::pages::render_index;
use portal_kit_generator::sitemap::{effective_routes, sitemap_xml};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::services::ServeDir;

#[derive(Clone)]
struct AppState {
    portal_path: Arc<PathBuf>,
}

/// Start a local preview server.
///
/// Renders the index page on each request from the current portal.toml, so
/// config edits show up on refresh. Serves the sitemap at /sitemap.xml and
/// static files from assets/.
///
/// # Arguments
///
/// * `path` - Path to portal directory containing portal.toml
/// * `port` - Port to serve on (default: 8080)
pub async fn run(path: PathBuf, port: u16) -> Result<()> {
    println!("🔎 Starting preview server...");
    println!("   Portal: {}", path.display());

    // Validate portal directory exists
    if !path.exists() {
        anyhow::bail!(
            "Portal directory does not exist: {}\nRun 'portal-kit init {}' first",
            path.display(),
            path.display()
        );
    }

    let portal_toml_path = path.join("portal.toml");
    if !portal_toml_path.exists() {
        anyhow::bail!(
            "portal.toml not found in {}\nRun 'portal-kit init {}' first",
            path.display(),
            path.display()
        );
    }

    let portal = parse_portal_toml(&portal_toml_path).context("Failed to parse portal.toml")?;

    println!("   ✓ Loaded: {}", portal.site.title);
    println!("   ✓ Routes: {}", effective_routes(&portal).len());

    let state = AppState {
        portal_path: Arc::new(portal_toml_path),
    };

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .nest_service("/assets", ServeDir::new(path.join("assets")))
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to port")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    match parse_portal_toml(state.portal_path.as_ref()) {
        Ok(portal) => Html(render_index(&portal, true)).into_response(),
        Err(e) => Html(format!(
            "<h1>portal.toml error</h1><pre>{}</pre>",
            error_text(&e.to_string())
        ))
        .into_response(),
    }
}

async fn sitemap_handler(State(state): State<AppState>) -> impl IntoResponse {
    match parse_portal_toml(state.portal_path.as_ref()) {
        Ok(portal) => {
            let body = sitemap_xml(&effective_routes(&portal));
            ([(header::CONTENT_TYPE, "application/xml")], body).into_response()
        }
        Err(e) => ([(header::CONTENT_TYPE, "text/plain")], e.to_string()).into_response(),
    }
}

fn error_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
