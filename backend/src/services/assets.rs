//! # Embedded Frontend
//!
//! Serves the Trunk bundle of the Yew frontend from the binary itself. The
//! bundle is copied into `static/dist` by `build.rs` and embedded with
//! `include_dir!`, so the server runs without any files next to it.
//!
//! Unknown paths get `index.html`, letting the client-side app handle them.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use log::debug;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Default handler: the requested asset, else `index.html`, else 404.
pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => {
            debug!("No embedded asset for {}, serving index.html", file_path);
            match STATIC_DIR.get_file("index.html") {
                Some(index) => HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(index.contents().to_vec()),
                None => HttpResponse::NotFound().body("Not Found"),
            }
        }
    }
}
