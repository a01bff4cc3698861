// Host-side tests for web frontend constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn asset_urls_are_relative_by_default() {
    assert_eq!(
        asset_url(SOUND_BASE_PATH, "maou_se_inst_piano2_0.ogg"),
        "maou_se_inst_piano2_0.ogg"
    );
}

#[test]
fn asset_urls_join_a_base_path_once() {
    assert_eq!(asset_url("sounds", "a.ogg"), "sounds/a.ogg");
    assert_eq!(asset_url("/static/sounds/", "a.ogg"), "/static/sounds/a.ogg");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_wiring_constants() {
    assert_eq!(CANVAS_ID, "gameCanvas");
    assert!(FRAME_LOG_INTERVAL > 0);
}
