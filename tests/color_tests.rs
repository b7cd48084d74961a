// Host-side tests for hex parsing and HSB conversions.

use patatap_core::constants::*;
use patatap_core::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn parses_long_and_short_hex() {
    let c = Rgb::from_hex("#1abc9c").unwrap();
    assert!(close(c.r, 0x1a as f32 / 255.0));
    assert!(close(c.g, 0xbc as f32 / 255.0));
    assert!(close(c.b, 0x9c as f32 / 255.0));
    assert_eq!(Rgb::from_hex("#fff").unwrap(), Rgb::new(1.0, 1.0, 1.0));
    assert_eq!(Rgb::from_hex("#1ABC9C").unwrap(), c);
    assert_eq!(c.to_hex(), "#1abc9c");
}

#[test]
fn rejects_malformed_hex() {
    assert!(matches!(Rgb::from_hex("1abc9c"), Err(ColorError::MissingHash(_))));
    assert!(matches!(Rgb::from_hex("#1abc"), Err(ColorError::BadLength(_))));
    assert!(matches!(Rgb::from_hex("#zzzzzz"), Err(ColorError::BadDigit(_))));
    assert!(matches!(Rgb::from_hex("#"), Err(ColorError::BadLength(_))));
}

#[test]
fn palette_survives_hsb_round_trip() {
    for &(letter, _, hex) in DEFAULT_BASE_TABLE {
        let rgb = Rgb::from_hex(hex).unwrap();
        let back = Hsba::from_rgb(rgb, 1.0).to_rgb();
        assert!(
            close(rgb.r, back.r) && close(rgb.g, back.g) && close(rgb.b, back.b),
            "{letter}: {rgb:?} -> {back:?}"
        );
    }
}

#[test]
fn primary_hues() {
    assert!(close(Hsba::from_rgb(Rgb::new(1.0, 0.0, 0.0), 1.0).hue, 0.0));
    assert!(close(Hsba::from_rgb(Rgb::new(0.0, 1.0, 0.0), 1.0).hue, 120.0));
    assert!(close(Hsba::from_rgb(Rgb::new(0.0, 0.0, 1.0), 1.0).hue, 240.0));
    let grey = Hsba::from_rgb(Rgb::new(0.5, 0.5, 0.5), 1.0);
    assert_eq!(grey.saturation, 0.0);
    assert!(close(grey.brightness, 0.5));
}

#[test]
fn hue_rotation_wraps() {
    let mut c = Hsba::from_rgb(Rgb::new(1.0, 0.0, 0.0), 1.0);
    c.hue = 359.5;
    c.rotate_hue(HUE_STEP_DEG);
    assert!(close(c.hue, 0.5));
    for _ in 0..720 {
        c.rotate_hue(HUE_STEP_DEG);
        assert!((0.0..360.0).contains(&c.hue));
    }
}

#[test]
fn fade_clamps_at_zero() {
    let mut c = Hsba::from_rgb(Rgb::new(1.0, 1.0, 1.0), 0.05);
    c.fade(0.03);
    assert!(close(c.alpha, 0.02));
    c.fade(0.03);
    assert_eq!(c.alpha, 0.0);
    c.fade(1.0);
    assert_eq!(c.alpha, 0.0);
}

#[test]
fn css_output() {
    let c = Hsba::from_rgb(Rgb::new(1.0, 0.0, 0.0), 0.5);
    assert_eq!(c.to_css(), "rgba(255, 0, 0, 0.500)");
    assert_eq!(c.to_rgba_array(), [1.0, 0.0, 0.0, 0.5]);
}
