pub mod auth;
pub mod error;
pub mod shares;
pub mod state;

use std::path::Path;

use axum::{
    Router,
    routing::{get, get_service},
};
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

/// Build the full HTTP surface: HTML pages, auth endpoints and the message
/// board API. Unmatched paths are looked up as static files in `public_dir`.
pub fn router(state: AppState, public_dir: &Path) -> Router {
    let page = |file: &str| get_service(ServeFile::new(public_dir.join(file)));

    Router::new()
        .route("/", page("index.html"))
        .route("/login", page("login.html").post(auth::login))
        .route("/register", page("register.html").post(auth::register))
        .route("/dashboard", page("dashboard.html"))
        .route("/admin", page("admin.html"))
        .route("/api/shares", get(shares::list_shares).post(shares::post_share))
        .fallback_service(ServeDir::new(public_dir))
        .with_state(state)
}
