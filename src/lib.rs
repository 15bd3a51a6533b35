//! # BFHL Console
//!
//! A small front-end for the BFHL processing service: it checks that the
//! service is up, validates and posts a JSON payload to `/bfhl`, and shows the
//! reply reduced to the fields the user picked.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bfhl_console::adapters::ReqwestTransport;
//! use bfhl_console::application::{Action, Controller};
//! use bfhl_console::config::Settings;
//! use bfhl_console::domain::ResponseField;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!     let controller = Controller::new(ReqwestTransport::from_settings(&settings.api)?);
//!
//!     controller.check_status().await;
//!     controller.submit(r#"{"data":["A","1","B","2"]}"#).await?;
//!     controller.dispatch(Action::SelectionReplaced(vec![ResponseField::Numbers]));
//!
//!     if let Some(projection) = controller.projection() {
//!         println!("{}", projection.to_pretty_json());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Domain**: payload, response, field selection, status and error types
//! - **Application**: controller, reducer/store and the transport port
//! - **Adapters** (`server` feature): reqwest transport, health and UI handlers
//! - **Config** (`server` feature): configuration management
//!
//! The `ui` crate builds this library without the `server` feature and drives
//! the same controller from the browser.

pub mod application;
pub mod domain;

#[cfg(feature = "server")]
pub mod adapters;
#[cfg(feature = "server")]
pub mod cli;
#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub use server::create_app;

#[cfg(feature = "server")]
mod server {
    use crate::adapters::health_handler::HealthHandler;
    use crate::adapters::ui_handler::UIHandler;
    use axum::{routing::get, Router};
    use std::sync::Arc;
    use tower_http::trace::TraceLayer;

    /// Creates the console server router: `/health` plus the embedded UI.
    pub fn create_app(health_handler: Arc<HealthHandler>) -> Router {
        Router::new()
            .route(
                "/health",
                get({
                    let handler = health_handler.clone();
                    move || {
                        let h = handler.clone();
                        async move { h.health().await }
                    }
                }),
            )
            // UI endpoint (catch-all for SPA)
            .fallback(UIHandler::serve)
            .layer(TraceLayer::new_for_http())
            .layer(
                tower_http::cors::CorsLayer::new()
                    .allow_origin(tower_http::cors::Any)
                    .allow_methods(tower_http::cors::Any)
                    .allow_headers(tower_http::cors::Any),
            )
    }
}
