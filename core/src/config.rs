use std::sync::OnceLock;

use chrono_tz::Tz;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static APP_TIME_ZONE: OnceLock<Tz> = OnceLock::new();

/// Loads `.env` (when present) and warms the cached settings so later
/// reads are cheap and stable for the lifetime of the process.
pub fn init() {
    let _ = dotenvy::dotenv();
    let _ = api_base_url();
    let _ = current_time_zone();
}

/// Base URL of the backend REST service, from `TRIPDESK_API_BASE_URL`.
pub fn api_base_url() -> String {
    API_BASE_URL
        .get_or_init(|| {
            std::env::var("TRIPDESK_API_BASE_URL")
                .ok()
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
        })
        .clone()
}

/// Time zone the fleet operates in, from `TRIPDESK_TIME_ZONE`. Dates in
/// the product ("today", payroll anchors) are interpreted here, not in
/// the viewer's locale.
pub fn current_time_zone() -> Tz {
    *APP_TIME_ZONE.get_or_init(|| match std::env::var("TRIPDESK_TIME_ZONE") {
        Ok(name) => name.parse::<Tz>().unwrap_or_else(|_| {
            log::warn!("Unknown time zone {:?}, falling back to Asia/Manila", name);
            chrono_tz::Asia::Manila
        }),
        Err(_) => chrono_tz::Asia::Manila,
    })
}
