//! Viewport regression test
//!
//! Drives randomized pan/zoom gesture sequences against the viewport and
//! checks the clamping invariant: the screen center always converts to an
//! image point inside `[0, w] x [0, h]`.

use mapwarp_core::Point;
use mapwarp_test::RegParams;
use mapwarp_view::{Orientation, ViewportMapper};
use rand::RngExt;

const IMAGE_W: u32 = 1600;
const IMAGE_H: u32 = 900;
const VIEW_W: u32 = 1080;
const VIEW_H: u32 = 1920;

#[test]
fn viewport_reg_center_stays_on_image() {
    let mut rp = RegParams::new("viewport_center_invariant");
    let mut rng = rand::rng();

    for orientation in [
        Orientation::Deg0,
        Orientation::Deg90,
        Orientation::Deg180,
        Orientation::Deg270,
    ] {
        let mut m = ViewportMapper::new(IMAGE_W, IMAGE_H, orientation, VIEW_W, VIEW_H).unwrap();

        for _ in 0..200 {
            if rng.random_bool(0.5) {
                m.translate(rng.random_range(-900.0..900.0), rng.random_range(-900.0..900.0));
            } else {
                m.zoom(
                    rng.random_range(0.3..3.0),
                    rng.random_range(0.0..VIEW_W as f64),
                    rng.random_range(0.0..VIEW_H as f64),
                );
            }
            let center = m.center_in_image().expect("transform stays invertible");
            let inside = center.x >= -1e-6
                && center.x <= IMAGE_W as f64 + 1e-6
                && center.y >= -1e-6
                && center.y <= IMAGE_H as f64 + 1e-6;
            rp.compare_values(1.0, if inside { 1.0 } else { 0.0 }, 0.0);
        }
    }
    assert!(rp.cleanup(), "center invariant regression failed");
}

#[test]
fn viewport_reg_zoom_level_tracking() {
    let mut rp = RegParams::new("viewport_zoom_level");

    let mut m = ViewportMapper::new(IMAGE_W, IMAGE_H, Orientation::Deg90, VIEW_W, VIEW_H).unwrap();
    m.zoom(2.0, 540.0, 960.0);
    m.zoom(0.5, 540.0, 960.0);
    m.zoom(3.0, 100.0, 100.0);
    rp.compare_values(3.0, m.zoom_level(), 1e-12);

    // Rejected factors leave the level untouched
    m.zoom(-1.0, 540.0, 960.0);
    m.zoom(f64::INFINITY, 540.0, 960.0);
    rp.compare_values(3.0, m.zoom_level(), 1e-12);

    // Resetting the image resets the zoom
    m.set_image(IMAGE_W, IMAGE_H, Orientation::Deg0).unwrap();
    rp.compare_values(1.0, m.zoom_level(), 0.0);

    assert!(rp.cleanup(), "zoom level regression failed");
}

#[test]
fn viewport_reg_conversion_round_trip() {
    let mut rp = RegParams::new("viewport_round_trip");
    let mut rng = rand::rng();

    let mut m = ViewportMapper::new(IMAGE_W, IMAGE_H, Orientation::Deg270, VIEW_W, VIEW_H).unwrap();
    m.zoom(1.8, 500.0, 700.0);
    m.translate(120.0, -60.0);

    for _ in 0..50 {
        let p = Point::new(
            rng.random_range(0.0..IMAGE_W as f64),
            rng.random_range(0.0..IMAGE_H as f64),
        );
        let screen = m.image_to_screen(p);
        let image = m.screen_to_image(screen).expect("invertible");
        rp.compare_point((p.x, p.y), (image.x, image.y), 1e-6);
    }
    assert!(rp.cleanup(), "round trip regression failed");
}

#[test]
fn viewport_reg_translate_full_vs_clamped() {
    let mut rp = RegParams::new("viewport_translate");

    let mut m = ViewportMapper::new(IMAGE_W, IMAGE_H, Orientation::Deg0, VIEW_W, VIEW_H).unwrap();
    // Zoom in so panning room exists in every direction
    m.zoom(4.0, VIEW_W as f64 / 2.0, VIEW_H as f64 / 2.0);

    rp.compare_values(1.0, if m.translate(50.0, 50.0) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(
        0.0,
        if m.translate(50_000.0, 0.0) { 1.0 } else { 0.0 },
        0.0,
    );
    let center = m.center_in_image().unwrap();
    rp.compare_values(1.0, if center.x >= -1e-6 { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "translate regression failed");
}
