use axum::{
    extract::Path,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "static/"]
struct Assets;

/// GET /static/{*path} - Files embedded from `static/`
///
/// The ETag is derived from the embedded content hash, so a matching
/// `If-None-Match` is answered with 304 and no body.
pub async fn serve(Path(path): Path<String>, headers: HeaderMap) -> Response {
    let Some(content) = Assets::get(&path) else {
        return (StatusCode::NOT_FOUND, "404 Not Found").into_response();
    };

    let etag = format!(
        "\"{}\"",
        URL_SAFE_NO_PAD.encode(content.metadata.sha256_hash())
    );

    let fresh = headers
        .get(header::IF_NONE_MATCH)
        .is_some_and(|value| value.as_bytes() == etag.as_bytes());

    if fresh {
        return (StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response();
    }

    let mime = mime_guess::from_path(&path).first_or_octet_stream();

    (
        [
            (header::CONTENT_TYPE, mime.as_ref().to_owned()),
            (header::ETAG, etag),
        ],
        content.data,
    )
        .into_response()
}
