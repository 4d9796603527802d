use super::*;

fn assert_px_near(actual: Option<[u8; 4]>, expected: [u8; 4]) {
    let actual = actual.unwrap();
    for i in 0..4 {
        assert!(
            actual[i].abs_diff(expected[i]) <= 1,
            "{actual:?} vs {expected:?}"
        );
    }
}

fn solid_image(w: u32, h: u32, rgb: [u8; 3]) -> DecodedImage {
    let mut px = Vec::with_capacity((w * h * 4) as usize);
    for _ in 0..w * h {
        px.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
    }
    DecodedImage::from_premul_rgba8(w, h, px).unwrap()
}

#[test]
fn placement_matches_zoomed_center_plus_offset() {
    let style = StyleConfig::default();
    let t = TransformState {
        zoom_factor: 2.0,
        ..TransformState::default()
    };
    let p = ImagePlacement::compute(300, 300, &style, &t);
    assert_eq!(p.scaled_width, 600.0);
    assert_eq!(p.scaled_height, 600.0);
    assert_eq!(p.draw_x, -200.0);
    assert_eq!(p.draw_y, -200.0);

    let t = TransformState {
        zoom_factor: 0.5,
        offset_x: 10,
        offset_y: -20,
        ..TransformState::default()
    };
    let p = ImagePlacement::compute(100, 40, &style, &t);
    assert_eq!((p.scaled_width, p.scaled_height), (50.0, 20.0));
    assert_eq!((p.draw_x, p.draw_y), (85.0, 70.0));
}

#[test]
fn placement_affine_maps_image_corners() {
    let style = StyleConfig::default();
    let t = TransformState {
        zoom_factor: 2.0,
        ..TransformState::default()
    };
    let p = ImagePlacement::compute(300, 300, &style, &t);
    let a = p.affine(&style, &t);
    let origin = a * Point::new(0.0, 0.0);
    let far = a * Point::new(300.0, 300.0);
    assert!((origin.x + 200.0).abs() < 1e-9 && (origin.y + 200.0).abs() < 1e-9);
    assert!((far.x - 400.0).abs() < 1e-9 && (far.y - 400.0).abs() < 1e-9);

    let rotated = TransformState {
        rotation_degrees: 180,
        ..t
    };
    let a = p.affine(&style, &rotated);
    let origin = a * Point::new(0.0, 0.0);
    assert!((origin.x - 400.0).abs() < 1e-9 && (origin.y - 400.0).abs() < 1e-9);
}

#[test]
fn border_paint_by_width() {
    let mut style = StyleConfig {
        border_width: 0,
        ..StyleConfig::default()
    };
    assert_eq!(BorderPaint::for_style(&style), None);

    style.border_width = 2;
    assert_eq!(
        BorderPaint::for_style(&style),
        Some(BorderPaint::Flat(style.border_color))
    );

    style.border_width = 5;
    style.border_color = HexColor::parse("#4a90e2").unwrap();
    assert_eq!(
        BorderPaint::for_style(&style),
        Some(BorderPaint::Bevel {
            light: HexColor::parse("#63a9fb").unwrap(),
            dark: HexColor::parse("#3177c9").unwrap(),
        })
    );
}

#[test]
fn bevel_runs_light_to_dark_along_the_diagonal() {
    let paint = BorderPaint::Bevel {
        light: HexColor::WHITE,
        dark: HexColor::BLACK,
    };
    assert_eq!(paint.color_at(0.0, 0.0, 100.0), Rgba8Premul::opaque(255, 255, 255));
    assert_eq!(paint.color_at(100.0, 100.0, 100.0), Rgba8Premul::opaque(0, 0, 0));
    // Anti-diagonal points share a color.
    assert_eq!(paint.color_at(100.0, 0.0, 100.0), paint.color_at(0.0, 100.0, 100.0));
    assert_eq!(paint.color_at(50.0, 50.0, 100.0), Rgba8Premul::opaque(128, 128, 128));
}

#[test]
fn vignette_ramp() {
    assert_eq!(vignette_alpha(0.0), 0.0);
    assert_eq!(vignette_alpha(0.6), 0.0);
    assert!((vignette_alpha(0.8) - 0.075).abs() < 1e-6);
    assert!((vignette_alpha(1.0) - 0.15).abs() < 1e-6);
    assert_eq!(vignette_alpha(1.4), vignette_alpha(1.0));

    // As an overlay on opaque pixels: 0.15 of black is alpha 38.
    let shade = |t| HexColor::BLACK.with_alpha(vignette_alpha(t));
    assert_eq!(shade(0.8).to_array(), [0, 0, 0, 19]);
    assert_eq!(shade(1.0).to_array(), [0, 0, 0, 38]);
}

#[test]
fn output_is_size_square_and_opaque() {
    for size in [50, 137, 300] {
        let style = StyleConfig {
            size,
            ..StyleConfig::default()
        };
        let input = InputSource::Image(solid_image(8, 8, [200, 0, 0]));
        let out = render(&input, &style, &TransformState::default()).unwrap();
        assert_eq!((out.width, out.height), (size, size));
        assert_eq!(out.data.len(), (size * size * 4) as usize);
        assert!(out.data.chunks_exact(4).all(|p| p[3] == 255));
    }
}

#[test]
fn image_fills_clip_center_and_leaves_corners_background() {
    let style = StyleConfig {
        border_width: 0,
        ..StyleConfig::default()
    };
    let input = InputSource::Image(solid_image(200, 200, [200, 0, 0]));
    let out = render(&input, &style, &TransformState::default()).unwrap();

    // Center pixel: no vignette there.
    assert_px_near(out.pixel(100, 100), [200, 0, 0, 255]);
    // Corner is outside the circle.
    assert_eq!(out.pixel(0, 0), Some([0xf0, 0xf4, 0xf8, 255]));
    // Near the rim the vignette darkens the photo.
    let rim = out.pixel(100, 2).unwrap();
    assert!(rim[0] < 200 && rim[0] > 150, "{rim:?}");
}

#[test]
fn out_of_range_inputs_are_clamped() {
    let style = StyleConfig {
        size: 10_000,
        border_width: 99,
        ..StyleConfig::default()
    };
    let t = TransformState {
        zoom_factor: f64::NAN,
        offset_x: 5000,
        rotation_degrees: -90,
        ..TransformState::default()
    };
    let input = InputSource::Image(solid_image(4, 4, [0, 0, 255]));
    let out = render(&input, &style, &t).unwrap();
    assert_eq!((out.width, out.height), (300, 300));
}

#[test]
fn zoomed_out_image_shows_background_inside_clip() {
    let style = StyleConfig {
        border_width: 0,
        ..StyleConfig::default()
    };
    let t = TransformState {
        zoom_factor: 0.5,
        ..TransformState::default()
    };
    let input = InputSource::Image(solid_image(100, 100, [0, 200, 0]));
    let out = render(&input, &style, &t).unwrap();
    // The 50x50 photo sits in 75..125.
    assert_px_near(out.pixel(100, 100), [0, 200, 0, 255]);
    assert_eq!(out.pixel(60, 100), Some([0xf0, 0xf4, 0xf8, 255]));
}
