use web_sys::window;

/// Get the page origin (e.g., "http://localhost:3000" or "https://myapp.com")
pub fn get_origin() -> String {
    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".to_string())
}

/// Get the base HTTP URL the API is served from (e.g., "https://myapp.com")
pub fn get_base_url() -> String {
    let location = window().map(|w| w.location());
    let protocol = location
        .as_ref()
        .and_then(|l| l.protocol().ok())
        .unwrap_or_else(|| "http:".to_string());
    let host = location
        .as_ref()
        .and_then(|l| l.host().ok())
        .unwrap_or_else(|| "localhost:3000".to_string());

    base_url(&protocol, &host)
}

fn base_url(protocol: &str, host: &str) -> String {
    format!("{}//{}", protocol, host)
}

/// Build the public link to a session transcript
pub fn share_url(origin: &str, session_id: &str) -> String {
    format!("{}/share/{}", origin.trim_end_matches('/'), session_id)
}

/// Current time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

/// Format a turn timestamp as local wall-clock time (e.g., "14:05")
pub fn format_time(timestamp_ms: i64) -> String {
    let offset_minutes = js_sys::Date::new(&(timestamp_ms as f64).into()).get_timezone_offset();
    format_time_with_offset(timestamp_ms, offset_minutes as i64)
}

/// `offset_minutes` follows the JS convention: UTC minus local time
fn format_time_with_offset(timestamp_ms: i64, offset_minutes: i64) -> String {
    chrono::DateTime::from_timestamp_millis(timestamp_ms - offset_minutes * 60_000)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default()
}
