#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn from_hex_unpacks_channels() {
    let c = Rgb::from_hex(0x60_a5_fa);
    assert_eq!(c.r, 96.0);
    assert_eq!(c.g, 165.0);
    assert_eq!(c.b, 250.0);
}

#[test]
fn scale_clamps_to_channel_range() {
    let c = Rgb::from_hex(0x80_80_80).scale(4.0);
    assert_eq!(c, Rgb { r: 255.0, g: 255.0, b: 255.0 });
    let dark = Rgb::from_hex(0x80_80_80).scale(-1.0);
    assert_eq!(dark, Rgb { r: 0.0, g: 0.0, b: 0.0 });
}

#[test]
fn lerp_endpoints_and_midpoint() {
    let a = Rgb::from_hex(0x00_00_00);
    let b = Rgb::from_hex(0xff_ff_ff);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5).r, 127.5);
    assert_eq!(a.lerp(b, 7.0), b);
}

#[test]
fn to_css_rounds_and_clamps_alpha() {
    let c = Rgb { r: 10.4, g: 20.6, b: 255.0 };
    assert_eq!(c.to_css(2.0), "rgba(10, 21, 255, 1.000)");
    assert_eq!(c.to_css(0.25), "rgba(10, 21, 255, 0.250)");
}

#[test]
fn fog_factor_is_linear_between_near_and_far() {
    assert_eq!(fog_factor(0.0), 0.0);
    assert_eq!(fog_factor(FOG_NEAR), 0.0);
    assert_eq!(fog_factor(FOG_FAR), 1.0);
    assert_eq!(fog_factor(1000.0), 1.0);
    assert!((fog_factor(17.5) - 0.5).abs() < 1e-12);
}

#[test]
fn apply_fog_far_away_is_background() {
    let c = apply_fog(Rgb::from_hex(0xff_ff_ff), 100.0);
    assert_eq!(c, BACKGROUND);
}
