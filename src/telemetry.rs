//! Tracing setup.
//!
//! `LOG_LEVEL` takes EnvFilter directives, e.g. `debug` or
//! `info,content=debug,session=trace`. `LOG_FORMAT=json` switches to one JSON
//! object per event with the current span attached; anything else is the
//! human-readable format with source locations.
//!
//! Targets: `sanskriti_backend` (process lifecycle), `content` (store and
//! queries), `session` (WebSocket browsing sessions), plus `tower_http` for
//! request spans.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,sanskriti_backend=debug,content=debug,session=debug,tower_http=info";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    if json {
        builder.json().with_current_span(true).with_span_list(false).init();
    } else {
        builder.with_file(true).with_line_number(true).init();
    }
}
