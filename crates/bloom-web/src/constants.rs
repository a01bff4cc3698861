// Page wiring and runtime tuning for the web frontend.

// DOM
pub const CANVAS_ID: &str = "gameCanvas";

// Sound clips are served next to the page
pub const SOUND_BASE_PATH: &str = "";

// Logging
pub const FRAME_LOG_INTERVAL: u64 = 600; // frames between live-entity reports

#[inline]
pub fn asset_url(base: &str, file: &str) -> String {
    if base.is_empty() {
        file.to_string()
    } else {
        format!("{}/{}", base.trim_end_matches('/'), file)
    }
}
