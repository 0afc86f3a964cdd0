// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so the web constants are included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use portfolio_core::constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn breakpoints_are_ordered() {
    assert!(SMALL_MAX_WIDTH < MOBILE_MAX_WIDTH);
    assert!(MOBILE_MAX_WIDTH < TABLET_MAX_WIDTH);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn desktop_margins_are_wider_than_mobile() {
    assert!(DESKTOP_MARGIN_X > MOBILE_MARGIN_X);
    assert!(DESKTOP_MARGIN_Y > MOBILE_MARGIN_Y);
    assert!(MOBILE_MARGIN_X > 0.0 && MOBILE_MARGIN_Y > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn background_sits_behind_the_props() {
    assert!(HERO_STARS_Z < CORNER_Z_DEPTH);
    assert!(HERO_GRID_Z < CORNER_Z_DEPTH);
    assert!(HERO_GRID_Y < -DESKTOP_MARGIN_Y);
    assert!(CAMERA_EYE.z > CORNER_Z_DEPTH);
    assert!(CAMERA_ZFAR > CAMERA_EYE.z - HERO_GRID_Z + HERO_GRID_SIZE / 2.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn undulation_stays_subtle() {
    assert!(GRID_PITCH_AMPLITUDE < 0.1);
    assert!(GRID_ROLL_AMPLITUDE < 0.1);
    assert!(GRID_BOB_AMPLITUDE < 1.0);
    assert!(GRID_OPACITY > 0.0 && GRID_OPACITY < 1.0);
    assert!(STAR_OPACITY > 0.0 && STAR_OPACITY <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ui_timers_and_copy() {
    assert_eq!(CONTACT_RESET_MS, 3000);
    assert_eq!(COPY_RESET_MS, 2000);
    assert_ne!(SUBMIT_LABEL_IDLE, SUBMIT_LABEL_BUSY);
    assert_ne!(COPY_ICON, COPIED_ICON);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn renderer_limits_cover_the_hero_scene() {
    // grid + stars + four props
    assert!(MAX_DRAWS >= 6);
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC < 1.0);
    assert_eq!(FORM_FIELD_NAMES, ["name", "email", "message"]);
    assert!(EMAILJS_SEND_URL.starts_with("https://"));
}
