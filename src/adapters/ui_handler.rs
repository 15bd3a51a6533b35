use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

/// Compiled output of the `ui` crate (`trunk build --release` in `ui/`)
#[derive(RustEmbed)]
#[folder = "ui/dist"]
#[allow_missing = true]
struct Asset;

const INDEX: &str = "index.html";

pub struct UIHandler;

impl UIHandler {
    pub async fn serve(uri: Uri) -> Response {
        let path = uri.path().trim_start_matches('/');
        let path = if path.is_empty() { INDEX } else { path };

        if let Some(response) = Self::asset(path) {
            return response;
        }

        // SPA fallback
        Self::asset(INDEX).unwrap_or_else(|| {
            tracing::warn!(path, "UI assets are not embedded; build the ui crate first");
            (StatusCode::NOT_FOUND, "404 Not Found").into_response()
        })
    }

    fn asset(path: &str) -> Option<Response> {
        let content = Asset::get(path)?;
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        Some(([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response())
    }
}
