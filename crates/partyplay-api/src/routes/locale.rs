//! Locale-prefix redirect middleware.

use axum::extract::Request;
use axum::http::HeaderMap;
use axum::http::header::{ACCEPT_LANGUAGE, COOKIE};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::debug;

use partyplay_catalog::domain::locale::{LOCALE_COOKIE, LocaleRoute, negotiate_locale};

/// Redirects unprefixed page paths to their locale-prefixed location.
pub async fn redirect_to_locale(request: Request, next: Next) -> Response {
    let uri = request.uri();
    let headers = request.headers();
    let route = negotiate_locale(
        uri.path(),
        uri.query(),
        cookie(headers, LOCALE_COOKIE),
        headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()),
    );

    match route {
        LocaleRoute::Pass => next.run(request).await,
        LocaleRoute::Redirect(target) => {
            debug!(from = %uri, to = %target, "redirecting to locale prefix");
            Redirect::temporary(&target).into_response()
        }
    }
}

fn cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
