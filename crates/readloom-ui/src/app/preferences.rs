//! Environment helpers for the app shell.

use gloo::utils::window;
use web_sys::Url;

/// Whether the OS/browser currently prefers a dark color scheme. Treated as
/// unknown (`None`) when the media query API is unavailable.
pub(crate) fn system_prefers_dark() -> Option<bool> {
    window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
}

/// API base URL derived from the page location. The dev server runs the UI on
/// port 8080 with the backend on 7227; any other explicit port is assumed to
/// serve both.
pub(crate) fn api_base_url() -> String {
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:8080".to_string());

    if let Ok(url) = Url::new(&href) {
        let protocol = url.protocol();
        let host = url.hostname();
        let port = url.port();
        let mapped_port = match port.as_str() {
            "" => None,
            "8080" => Some("7227"),
            other => Some(other),
        };

        let mut base = format!("{protocol}//{host}");
        if let Some(port) = mapped_port {
            base.push(':');
            base.push_str(port);
        }
        return base;
    }

    "http://localhost:7227".to_string()
}
