//! In-process HTTP fixture for exercising the resource adapter.
//!
//! Documents PUT to any path are kept in an in-memory map and served back
//! on GET. Two path prefixes are access-controlled: `basic/` requires
//! basic auth `user`/`pass`, and `restricted/` requires the verbatim
//! `Authorization: Zm9vOmJhcg==` header. `meta_200.txt` and
//! `meta_404.txt` are fixed probe paths.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderMap, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use tokio::{net::TcpListener, sync::RwLock};

pub type Files = Arc<RwLock<HashMap<String, String>>>;

const BASIC_USER: &str = "user";
const BASIC_PASS: &str = "pass";
const RESTRICTED_TOKEN: &str = "Zm9vOmJhcg==";

pub fn app() -> Router {
    let files: Files = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/{*path}", get(get_file).put(put_file).delete(delete_file))
        .with_state(files)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_file(
    State(files): State<Files>,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> Response {
    match path.as_str() {
        "meta_200.txt" => return ([(CONTENT_TYPE, "text/plain")], "1.0.0").into_response(),
        "meta_404.txt" => return StatusCode::NOT_FOUND.into_response(),
        _ => {}
    }
    if !authorized(&path, &headers) {
        return StatusCode::FORBIDDEN.into_response();
    }
    match files.read().await.get(&path) {
        Some(body) => (StatusCode::OK, body.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn put_file(
    State(files): State<Files>,
    Path(path): Path<String>,
    headers: HeaderMap,
    body: String,
) -> StatusCode {
    if !authorized(&path, &headers) {
        return StatusCode::FORBIDDEN;
    }
    files.write().await.insert(path, body);
    StatusCode::OK
}

async fn delete_file(
    State(files): State<Files>,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> StatusCode {
    if !authorized(&path, &headers) {
        return StatusCode::FORBIDDEN;
    }
    match files.write().await.remove(&path) {
        Some(_) => StatusCode::OK,
        None => StatusCode::NOT_FOUND,
    }
}

fn authorized(path: &str, headers: &HeaderMap) -> bool {
    if path.starts_with("basic/") {
        return basic_auth(headers)
            .is_some_and(|(user, pass)| user == BASIC_USER && pass == BASIC_PASS);
    }
    if path.starts_with("restricted/") {
        let token = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
        return token == Some(RESTRICTED_TOKEN);
    }
    true
}

fn basic_auth(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = String::from_utf8(BASE64.decode(encoded).ok()?).ok()?;
    let (user, pass) = decoded.split_once(':')?;
    Some((user.to_string(), pass.to_string()))
}
