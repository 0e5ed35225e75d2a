use std::net::SocketAddr;

use subway_server::catalog::Catalog;
use subway_server::web::{AppState, create_router};

/// Port used when PORT is unset or malformed.
const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Port from environment
    let port = resolve_port(std::env::var("PORT").ok());

    // Build app state
    let state = AppState::new(Catalog::new());

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("Subway line catalog listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET    /health              - Health check");
    println!("  POST   /stations            - Register a station");
    println!("  GET    /stations            - List stations");
    println!("  DELETE /stations/{{id}}       - Delete an unused station");
    println!("  POST   /lines               - Create a line with its first section");
    println!("  GET    /lines               - List lines with station paths");
    println!("  GET    /lines/{{id}}          - One line with its station path");
    println!("  PUT    /lines/{{id}}          - Rename/recolor a line");
    println!("  DELETE /lines/{{id}}          - Delete a line");
    println!("  POST   /lines/{{id}}/sections - Append a section at the terminus");
    println!("  DELETE /lines/{{id}}/sections - Remove the terminal section");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Parse the PORT value, falling back to [`DEFAULT_PORT`] when unset.
/// A set but malformed value warns before falling back.
fn resolve_port(raw: Option<String>) -> u16 {
    match raw {
        Some(value) => value.parse().unwrap_or_else(|_| {
            eprintln!("Warning: PORT {value:?} is not a valid port. Using {DEFAULT_PORT}.");
            DEFAULT_PORT
        }),
        None => DEFAULT_PORT,
    }
}
