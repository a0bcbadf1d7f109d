//! Demo server rendering one page per client script.
//!
//! ```text
//! cargo run --example server
//! ```
//!
//! Static assets are served from `demos/public` under `/static`. Set `PORT`
//! to change the listening port and `JSTEMPLATE_STATIC_ROOT` to move the
//! asset URLs.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use jstemplate::{TemplateRenderer, TemplateSettings};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 3000;

type AppState = Arc<TemplateRenderer>;

fn page(renderer: &TemplateRenderer, script: &str, context: Option<Value>) -> Response {
	let rendered = match context {
		Some(context) => renderer.render_with_context(script, &context),
		None => Ok(renderer.render(script)),
	};
	match rendered {
		Ok(html) => Html(html).into_response(),
		Err(err) => {
			tracing::error!(script, error = %err, "failed to render page");
			(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
		}
	}
}

async fn home(State(renderer): State<AppState>) -> Response {
	page(
		&renderer,
		"index",
		Some(json!({
			"title": "Welcome",
			"user": "John Doe",
			"message": "Hello from jstemplate!",
		})),
	)
}

async fn dashboard(State(renderer): State<AppState>) -> Response {
	page(
		&renderer,
		"dashboard",
		Some(json!({
			"user": {
				"name": "John Doe",
				"email": "john@example.com",
				"role": "Admin",
			},
			"stats": {
				"totalUsers": 150,
				"activeUsers": 120,
				"revenue": 50000,
			},
		})),
	)
}

async fn profile(State(renderer): State<AppState>) -> Response {
	page(
		&renderer,
		"profile",
		Some(json!({
			"user": {
				"name": "John Doe",
				"email": "john@example.com",
				"bio": "Software Developer",
			},
			"preferences": {
				"theme": "dark",
				"notifications": true,
			},
		})),
	)
}

async fn simple(State(renderer): State<AppState>) -> Response {
	page(&renderer, "simple", None)
}

fn app(renderer: TemplateRenderer) -> Router {
	let assets = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/public");
	Router::new()
		.route("/", get(home))
		.route("/dashboard", get(dashboard))
		.route("/profile", get(profile))
		.route("/simple", get(simple))
		.nest_service("/static", ServeDir::new(assets))
		.with_state(Arc::new(renderer))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new("info,jstemplate_pages=debug")),
		)
		.init();

	let settings = TemplateSettings::new().with_env_overrides();
	let renderer = TemplateRenderer::from_settings(&settings);

	let port = match std::env::var("PORT") {
		Ok(value) => value.parse()?,
		Err(_) => DEFAULT_PORT,
	};
	let addr = SocketAddr::from(([127, 0, 0, 1], port));
	let listener = tokio::net::TcpListener::bind(addr).await?;

	tracing::info!(%addr, static_root = renderer.static_root(), "server running");
	axum::serve(listener, app(renderer)).await?;
	Ok(())
}
