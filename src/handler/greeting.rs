//! Root greeting endpoint

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::config::AppState;
use crate::http;

pub fn serve_greeting(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    http::build_text_response(&state.config.routes.greeting, is_head)
}
