//! The trunk-built frontend, compiled into the binary by `build.rs`.
//!
//! Any path that is not a file of the bundle is a client-side route
//! (`/farm/...`, `/privacy/...`) and gets the app shell, except under `/api/`
//! where an unknown path is a plain 404.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir, File};
use log::warn;
use mime_guess::from_path;
use serde_json::json;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const APP_SHELL: &str = "index.html";
const API_PREFIX: &str = "api/";

fn lookup<'a>(dir: &'a Dir<'a>, request_path: &str) -> Option<&'a File<'a>> {
    let path = request_path.trim_start_matches('/');
    if path.is_empty() {
        return dir.get_file(APP_SHELL);
    }
    if let Some(file) = dir.get_file(path) {
        return Some(file);
    }
    if path.starts_with(API_PREFIX) {
        return None;
    }
    dir.get_file(APP_SHELL)
}

pub async fn serve(req: HttpRequest) -> HttpResponse {
    match lookup(&STATIC_DIR, req.path()) {
        Some(file) => HttpResponse::Ok()
            .content_type(from_path(file.path()).first_or_octet_stream().as_ref())
            .body(file.contents()),
        None => {
            warn!("No route for {} {}", req.method(), req.path());
            HttpResponse::NotFound().json(json!({
                "error": "NOT_FOUND",
                "message": format!("no route for `{}`", req.path()),
            }))
        }
    }
}
