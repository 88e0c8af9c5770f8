//! API routes: /api/get, /api/list, /api/set
//!
//! `/api/set` writes straight to the clipboard and never touches the
//! cache; the poller picks the new value up on its next tick. The cache
//! stays a pure read-model of observed clipboard states.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::error;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::{Filter, Rejection, Reply};

use crate::application::ports::Clipboard;
use crate::application::HistoryCache;

/// JSON shape of the current clipboard value
#[derive(Debug, Serialize)]
struct CurrentResponse<'a> {
    content: &'a str,
}

/// JSON body accepted by POST /api/set
#[derive(Debug, Deserialize)]
struct SetRequest {
    content: Option<String>,
}

/// Compose the full API with rejection recovery.
pub fn api(
    cache: HistoryCache,
    clipboard: Arc<dyn Clipboard>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    current(cache.clone())
        .or(list(cache))
        .or(set(clipboard))
        .recover(handle_rejection)
}

/// GET /api/get - the most recent history entry
fn current(cache: HistoryCache) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("api" / "get")
        .and(warp::get())
        .and(with_cache(cache))
        .and(warp::header::optional::<String>("accept"))
        .and_then(handle_current)
}

/// GET /api/list - the whole history, most-recent-first
fn list(cache: HistoryCache) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("api" / "list")
        .and(warp::get())
        .and(with_cache(cache))
        .and_then(handle_list)
}

/// POST /api/set - write a value straight to the clipboard
///
/// The form branch comes first: it also covers bodies without a
/// content-type header, so only an explicit JSON content-type reaches
/// the JSON parser. The body filters check the content-type before
/// taking the request body, so the branches never contend for it. The
/// final branch picks up every other content type: `text/json` gets
/// JSON semantics, anything else carries no form payload and is served
/// as a no-op.
fn set(clipboard: Arc<dyn Clipboard>) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let form = warp::path!("api" / "set")
        .and(warp::post())
        .and(warp::body::form::<HashMap<String, String>>())
        .and(with_clipboard(clipboard.clone()))
        .and_then(handle_set_form);

    let json = warp::path!("api" / "set")
        .and(warp::post())
        .and(warp::body::json::<SetRequest>())
        .and(with_clipboard(clipboard.clone()))
        .and_then(handle_set_json);

    let other = warp::path!("api" / "set")
        .and(warp::post())
        .and(warp::header::optional::<String>("content-type"))
        .and(warp::body::bytes())
        .and(with_clipboard(clipboard))
        .and_then(handle_set_other);

    form.or(json).or(other)
}

/// Inject the cache handle
fn with_cache(
    cache: HistoryCache,
) -> impl Filter<Extract = (HistoryCache,), Error = Infallible> + Clone {
    warp::any().map(move || cache.clone())
}

/// Inject the clipboard adapter
fn with_clipboard(
    clipboard: Arc<dyn Clipboard>,
) -> impl Filter<Extract = (Arc<dyn Clipboard>,), Error = Infallible> + Clone {
    warp::any().map(move || clipboard.clone())
}

/// Serve the head entry, structured or raw depending on the Accept header
async fn handle_current(
    cache: HistoryCache,
    accept: Option<String>,
) -> Result<warp::reply::Response, Rejection> {
    // Empty history serves the empty string rather than failing.
    let content = cache.head().unwrap_or_default();

    let response = if accept.as_deref().is_some_and(accepts_json) {
        warp::reply::json(&CurrentResponse { content: &content }).into_response()
    } else {
        let content_type = detect_content_type(&content);
        warp::reply::with_header(content, "content-type", content_type).into_response()
    };

    Ok(response)
}

/// Serve the whole history as a JSON array
async fn handle_list(cache: HistoryCache) -> Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&cache.list()))
}

async fn handle_set_json(
    body: SetRequest,
    clipboard: Arc<dyn Clipboard>,
) -> Result<warp::reply::Response, Rejection> {
    Ok(apply_set_request(body, clipboard.as_ref()).await)
}

async fn handle_set_form(
    form: HashMap<String, String>,
    clipboard: Arc<dyn Clipboard>,
) -> Result<warp::reply::Response, Rejection> {
    let content = form.get("content").map(String::as_str).unwrap_or("");
    Ok(write_clipboard(clipboard.as_ref(), content).await)
}

/// Fallback for content types the body filters above do not accept
async fn handle_set_other(
    content_type: Option<String>,
    body: Bytes,
    clipboard: Arc<dyn Clipboard>,
) -> Result<warp::reply::Response, Rejection> {
    let content_type = content_type.unwrap_or_default();

    if content_type.contains("application/json")
        || content_type.contains("application/x-www-form-urlencoded")
    {
        // One of the earlier branches already handled this content type;
        // keep its rejection instead of swallowing it.
        return Err(warp::reject::reject());
    }

    if content_type.contains("text/json") {
        return match serde_json::from_slice::<SetRequest>(&body) {
            Ok(request) => Ok(apply_set_request(request, clipboard.as_ref()).await),
            Err(e) => {
                error!("unable to decode input json: {e}");
                Ok(reply_error(
                    StatusCode::BAD_REQUEST,
                    "Was not able to parse input JSON",
                ))
            }
        };
    }

    // Any other content type carries no form field, and a missing form
    // field is a no-op by contract.
    Ok(StatusCode::OK.into_response())
}

/// Apply a decoded JSON set request; a missing `content` key is a client error.
async fn apply_set_request(request: SetRequest, clipboard: &dyn Clipboard) -> warp::reply::Response {
    match request.content {
        Some(content) => write_clipboard(clipboard, &content).await,
        None => reply_error(
            StatusCode::BAD_REQUEST,
            "JSON needs to contain key 'content'",
        ),
    }
}

/// Write `content` to the clipboard; empty content is a no-op by contract.
async fn write_clipboard(clipboard: &dyn Clipboard, content: &str) -> warp::reply::Response {
    if content.is_empty() {
        return StatusCode::OK.into_response();
    }

    match clipboard.write(content).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => {
            error!("unable to set clipboard: {e}");
            reply_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Was not able to set clipboard",
            )
        }
    }
}

fn reply_error(status: StatusCode, message: &str) -> warp::reply::Response {
    warp::reply::with_status(message.to_owned(), status).into_response()
}

/// Whether the Accept header's first media range is application/json,
/// ignoring parameters and lower-preference ranges
fn accepts_json(accept: &str) -> bool {
    accept
        .split(',')
        .next()
        .and_then(|range| range.split(';').next())
        .map(str::trim)
        == Some("application/json")
}

/// Map warp rejections onto the API's error contract.
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found")
    } else if err
        .find::<warp::filters::body::BodyDeserializeError>()
        .is_some()
    {
        (StatusCode::BAD_REQUEST, "Was not able to parse request body")
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (StatusCode::BAD_REQUEST, "Unsupported content type")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    } else {
        error!("unhandled rejection: {err:?}");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    };

    Ok(warp::reply::with_status(message.to_owned(), status))
}

/// Minimal content sniffing for the raw response path
fn detect_content_type(content: &str) -> &'static str {
    const HTML_MARKERS: &[&str] = &[
        "<!doctype html",
        "<html",
        "<head",
        "<body",
        "<script",
        "<iframe",
        "<div",
        "<table",
        "<p>",
    ];

    let lowered = content.trim_start().to_ascii_lowercase();

    if HTML_MARKERS.iter().any(|marker| lowered.starts_with(marker)) {
        "text/html; charset=utf-8"
    } else if lowered.starts_with("<?xml") {
        "text/xml; charset=utf-8"
    } else {
        "text/plain; charset=utf-8"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_sniffs_as_text_plain() {
        assert_eq!(detect_content_type("hello"), "text/plain; charset=utf-8");
        assert_eq!(detect_content_type(""), "text/plain; charset=utf-8");
        assert_eq!(
            detect_content_type("a < b && b > c"),
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn html_sniffs_as_text_html() {
        assert_eq!(
            detect_content_type("<!DOCTYPE html><html></html>"),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            detect_content_type("  <div>copied markup</div>"),
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn accept_matches_first_media_range_exactly() {
        assert!(accepts_json("application/json"));
        assert!(accepts_json("application/json; charset=utf-8"));
        assert!(accepts_json(" application/json , text/plain"));

        assert!(!accepts_json("text/plain, application/json"));
        assert!(!accepts_json("application/json2"));
        assert!(!accepts_json("*/*"));
    }

    #[test]
    fn xml_sniffs_as_text_xml() {
        assert_eq!(
            detect_content_type("<?xml version=\"1.0\"?><root/>"),
            "text/xml; charset=utf-8"
        );
    }
}
