// Host-side tests for constants and their mathematical relationships.
// The web crate is wasm-only, so we include its pure constants module directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use patatap_core::constants::*;
use patatap_core::Rgb;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_match_their_bounds() {
    // radius factor spans [0.25, 1.35)
    assert!((RADIUS_FACTOR_MIN + RADIUS_FACTOR_SPAN - 1.35).abs() < 1e-6);
    assert!((STROKE_WIDTH_MIN + STROKE_WIDTH_SPAN - 7.0).abs() < 1e-6);
    assert!((FADE_RATE_MIN + FADE_RATE_SPAN - 0.028).abs() < 1e-6);
    assert!((STROKE_GROW_MIN + STROKE_GROW_SPAN - 0.80).abs() < 1e-6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn decay_constants_are_sane() {
    // Shrink must actually shrink
    assert!(SHRINK_FACTOR > 0.0 && SHRINK_FACTOR < 1.0);
    // Stroke starts fainter than fill and fades slower
    assert!(STROKE_ALPHA_START < FILL_ALPHA_START);
    assert!(STROKE_FADE_RATIO > 0.0 && STROKE_FADE_RATIO < 1.0);
    assert!(FILL_ALPHA_START <= 1.0 && STROKE_ALPHA_START >= 0.0);
    assert!(ALPHA_EPSILON > 0.0 && MIN_AREA > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn slowest_particle_fades_out_in_bounded_frames() {
    // Both alphas cross the epsilon well before 200 frames even at the minimum fade rate
    let fill_frames = ((FILL_ALPHA_START - ALPHA_EPSILON) / FADE_RATE_MIN).ceil();
    let stroke_frames =
        ((STROKE_ALPHA_START - ALPHA_EPSILON) / (FADE_RATE_MIN * STROKE_FADE_RATIO)).ceil();
    assert!(fill_frames.max(stroke_frames) < 200.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn autoplay_period() {
    assert!((AUTO_PLAY_PERIOD_SEC - 0.42).abs() < 1e-9);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn web_constants_are_consistent() {
    assert_eq!(TITLE_LETTERS.len(), TITLE_COLORS.len());
    for hex in TITLE_COLORS {
        assert!(Rgb::from_hex(hex).is_ok(), "bad title color {hex}");
    }
    assert!(FEATURED_KEYS.iter().all(|c| c.is_ascii_uppercase()));
    assert!(DEFAULT_ASSET_BASE.ends_with('/'));
    assert!(LEGEND_IDLE_SEC > 0.0);
    assert!(MAX_FRAME_DT_SEC > 0.0);
    assert!(MASTER_GAIN > 0.0 && MASTER_GAIN <= 1.0);
    assert!(CLEAR_RGB.iter().all(|c| (0.0..=1.0).contains(c)));
}

#[test]
fn host_page_carries_every_dom_id() {
    let html = include_str!("../index.html");
    let ids = [
        CANVAS_ID,
        NOW_PLAYING_ID,
        LEGEND_ID,
        TITLE_ID,
        AUTO_CARD_ID,
        AUTO_BUTTON_ID,
        AUTO_STATUS_ID,
        MENU_BUTTON_ID,
        MENU_CLOSE_ID,
        DRAWER_ID,
    ];
    for id in ids.iter().chain(DRAWER_LINK_IDS.iter()) {
        assert!(html.contains(&format!("id=\"{id}\"")), "index.html lacks #{id}");
    }
    assert!(html.contains(&format!("{ASSET_BASE_ATTR}=\"{DEFAULT_ASSET_BASE}\"")));
}

#[test]
fn drawer_links_sit_inside_the_drawer_nav() {
    let html = include_str!("../index.html");
    let nav_start = html.find("<nav class=\"drawer-nav\">").expect("drawer nav");
    let nav_end = html[nav_start..].find("</nav>").expect("closed nav") + nav_start;
    let drawer_start = html.find(&format!("id=\"{DRAWER_ID}\"")).expect("drawer");
    let drawer_end = html[drawer_start..].find("</aside>").expect("closed drawer") + drawer_start;
    assert!(drawer_start < nav_start && nav_end < drawer_end);
    for (i, id) in DRAWER_LINK_IDS.iter().enumerate() {
        let at = html.find(&format!("id=\"{id}\"")).expect("link");
        assert!(nav_start < at && at < nav_end, "#{id} outside the drawer nav");
        assert!(!DRAWER_LINK_IDS[i + 1..].contains(id), "duplicate #{id}");
    }
}
